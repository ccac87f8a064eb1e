pub mod scalar;

pub use scalar::{leading_pair, parse_field, FieldError, LineFields};
