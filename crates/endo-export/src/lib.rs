//! endo-export
//!
//! Referral document layout and DOCX export.

pub mod docx;
pub mod error;
pub mod export;
pub mod images;
pub mod layout;
pub mod render;
