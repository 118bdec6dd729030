//! Shorthands for common field definitions.

mod checkbox;
mod select;
mod text;

pub use checkbox::boolean_field;
pub use select::{choice_field, radio_field};
pub use text::{char_field, email_field, password_field, text_field};
