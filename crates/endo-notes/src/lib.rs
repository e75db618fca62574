//! endo-notes
//!
//! Text generation from a `NoteData`: the SOAP note, the referral letter, and
//! the template merge engine. Every function here is pure and total: missing
//! or empty fields drop their fragment and never fail.

pub mod consent;
pub mod join;
pub mod merge;
pub mod referral;
pub mod soap;
