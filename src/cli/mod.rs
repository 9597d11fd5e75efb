//! CLI command implementations

pub mod init;
pub mod library;
pub mod play;
pub mod profile;
pub mod record;
pub mod reset;
