//! Identifier canonicalization.
//!
//! Pure string transforms shared by the matcher and the CLI's `normalize`
//! command. Nothing here allocates state or can fail.

pub mod slug;

pub use slug::*;
