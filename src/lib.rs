//! hostsedit - add, delete and list entries in the system hosts file.

pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod platform;
pub mod validate;
