//! Reusable HTML components for page generation.
//!
//! Maud component functions shared across both page types, handling the
//! page shell and footer with consistent styling and behavior.

pub mod footer;
pub mod layout;
