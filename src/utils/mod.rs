//! Utility modules for the Adminboard application.
//!
//! - [`text`] - Truncation, right-alignment gaps and avatar initials

pub mod text;
