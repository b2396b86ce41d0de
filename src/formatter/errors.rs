// Copyright (C) 2025 Phonefmt Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Failures surfaced by [`PhoneFormatter::try_format`].
///
/// The non-`try` API never returns these; it degrades to the current number
/// string instead.
///
/// [`PhoneFormatter::try_format`]: crate::PhoneFormatter::try_format
#[derive(Debug, Error)]
pub enum FormatError {
    /// The sanitized number's digit count differs from the pattern's total
    /// group length, so the grouping expression cannot span it.
    #[error("Number has {actual} digits but the pattern groups {expected}")]
    GroupMismatch { expected: usize, actual: usize },

    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
}

/// Failures surfaced by [`PhoneFormatter::try_country`].
///
/// [`PhoneFormatter::try_country`]: crate::PhoneFormatter::try_country
#[derive(Debug, Error)]
pub enum CountryLookupError {
    /// No record in the scanned registry answered to the normalized query.
    #[error("Country code {0} not found in the registry")]
    UnknownCountryCode(String),

    #[error("{0}")]
    Format(#[from] FormatError),
}
