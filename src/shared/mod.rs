/*
    * Re-exports for all cross-cutting (shared) modules like error handling,
    * response formats, middleware wrappers, utilities, etc.
*/

pub mod error_handler;
pub mod response_handler;
pub mod utils;
