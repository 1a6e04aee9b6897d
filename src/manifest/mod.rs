//! The capture manifest.
//!
//! A newline-delimited list of captured file paths kept in the temp
//! directory. Capture appends to it, cleanup empties it. There is no
//! locking: concurrent capture and cleanup can interleave.

pub mod store;

pub use store::{parse_entries, Manifest};
