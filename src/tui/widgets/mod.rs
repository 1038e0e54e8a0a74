//! Reusable TUI widgets.

pub mod form;

pub use form::{FormField, draw_form, form_height};
