/*
* HTTP feature modules. Each feature owns its routes and handler logic.
*/

pub mod health;
pub mod webhook;
