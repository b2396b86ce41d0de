pub mod formatter;
pub mod registry;
mod regexp_cache;
pub(crate) mod regex_util;
pub(crate) mod string_util;

pub use formatter::{
    errors::{CountryLookupError, FormatError},
    CodeInput, NumberInput, PhoneFormatter,
};
pub use regexp_cache::InvalidRegexError;
pub use registry::{CountryRecord, CountryRegistry};
