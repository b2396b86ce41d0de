pub mod errors;
mod formatter;
mod inputs;

pub use formatter::PhoneFormatter;
pub use inputs::{CodeInput, NumberInput};
