//! Report renderers for derived form profiles.
//!
//! The terminal renderer is the default; `--report json` serializes the
//! [`FormProfile`](crate::models::FormProfile) directly instead.

pub mod terminal;
