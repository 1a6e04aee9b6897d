//! capout
//!
//! Runs a command, saves its standard output to a temporary file, and
//! prints the file's name. Useful for tools that want file arguments
//! instead of pipes:
//!
//! ```bash
//! diff `capout command_1` `capout command_2`
//! ```
//!
//! Every captured file is recorded in `<temp dir>/capout.manifest`.
//! `capout -c` deletes them all and empties the manifest.

pub mod commands;
pub mod manifest;
pub mod output;
pub mod process;
pub mod utils;
