//! # Recipe Finder
//!
//! Tell it what ingredients you have, and it finds the recipe for you.
//!
//! This crate holds the form side:
//! - [`ingredients`]: entry, removal and suggestions
//! - [`session`]: preferences, submit, results and detail navigation
//! - [`detail`]: text rendering of result cards and the detail view
//!
//! Recipe types, the matcher and the API client live in the `bank` crate.
//!
//! ## Notes
//!
//! - Preferences use toggle selects for meal type and cooking time, so
//!   picking the active value again clears it
//! - Matching runs locally against the bank; the same request can be sent to
//!   the server with `bank::remote::RecipeClient`

pub mod detail;
pub mod ingredients;
pub mod session;

pub use session::{FormAction, FormSession};
