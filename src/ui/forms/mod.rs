//! Form rendering module
//!
//! - `field_renderer`: text input and error line rendering
//! - `work_type_grid`: the "Type of Work" checkbox grid
//! - `quote_form`: the Request for Quote card

mod field_renderer;
mod quote_form;
mod work_type_grid;

pub use quote_form::draw as draw_quote_form;

#[cfg(test)]
pub use quote_form::{SUBMITTING_LABEL, SUBMIT_LABEL};
