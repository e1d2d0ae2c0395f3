/*
* Inbound GitHub surface: typed webhook payloads and delivery
* signature verification.
*/

pub mod events;
pub mod signature;
