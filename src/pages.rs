//! Page generation modules for the blog views.
//!
//! Each page module turns a data container into complete `Markup`, using
//! shared components from the components module.

pub mod list;
pub mod post;
