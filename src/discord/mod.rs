/*
* Outbound Discord surface: the REST client and the embed constructors
* used to render GitHub events as channel messages.
*/

pub mod client;
pub mod embeds;
