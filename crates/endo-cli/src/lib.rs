//! endo-cli
//!
//! Command-line front end: renders notes and letters, exports the referral
//! document, and manages the template library.

pub mod cli;
pub mod commands;
pub mod config;
