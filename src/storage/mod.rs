//! Storage layer for barber-cli
//!
//! JSON files with atomic writes. The only things the client persists are
//! its settings and the session tokens; everything else lives on the server.

pub mod file_io;

pub use file_io::{read_json_optional, remove_if_exists, write_json_atomic};
