//! endo-core
//!
//! Pure domain types, option tables, and anatomical maps for endodontic notes.
//! No I/O. This is the shared vocabulary of the note, letter, and export crates.

pub mod anatomy;
pub mod error;
pub mod library;
pub mod models;
pub mod options;
