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

use std::{
    borrow::Cow,
    sync::{Arc, LazyLock},
};

use log::{error, warn};
use regex::Regex;

use crate::{
    formatter::{
        errors::{CountryLookupError, FormatError},
        inputs::{CodeInput, NumberInput},
    },
    regex_util::RegexFullMatch,
    regexp_cache::RegexCache,
    registry::{CountryRecord, CountryRegistry},
    string_util::strip_non_digits,
};

/// Grouping expressions are shared across all formatter instances; a pattern
/// is compiled at most once per process.
static GROUPING_CACHE: LazyLock<RegexCache> = LazyLock::new(|| RegexCache::with_capacity(32));

/// Formats a raw phone number into a country-specific display format.
///
/// The formatter holds one working value, `number`, and mutates it in place:
/// it starts as the raw input, becomes digits-only after [`sanitize`], and
/// becomes the formatted string after a successful [`format`]. An instance
/// belongs to a single call chain; it is not meant to be shared.
///
/// Lookup and formatting never fail hard. An unknown country code or a
/// digit-count mismatch returns the best-available current number string;
/// callers that want the failure itself use the `try_` variants.
///
/// ```
/// use phonefmt::PhoneFormatter;
///
/// let mut formatter = PhoneFormatter::new("8 (029) 123-45-67");
/// formatter.sanitize();
/// assert_eq!(formatter.number(), "80291234567");
///
/// let mut formatter = PhoneFormatter::new("375 29 123 45 67");
/// assert_eq!(formatter.country("BY", Some("+"), None), "+375 (29) 123-45-67");
/// ```
///
/// [`sanitize`]: PhoneFormatter::sanitize
/// [`format`]: PhoneFormatter::format
#[derive(Debug)]
pub struct PhoneFormatter {
    /// The working value. Raw input, then sanitized digits, then the
    /// formatted string.
    number: String,

    /// The grouping expression built by the last format call.
    pattern: Option<Arc<Regex>>,

    /// The (possibly prefixed) template used by the last format call.
    template: Option<String>,
}

impl PhoneFormatter {
    /// Creates a formatter over the given number, stored verbatim. Accepts
    /// text or an integer; no validation or sanitization happens here.
    pub fn new<'a, N>(number: N) -> Self
    where
        N: Into<NumberInput<'a>>,
    {
        Self {
            number: number.into().into_string(),
            pattern: None,
            template: None,
        }
    }

    /// Strips every non-digit character from the stored number, in place,
    /// preserving digit order. Idempotent. Returns the instance for
    /// chaining.
    pub fn sanitize(&mut self) -> &mut Self {
        if let Cow::Owned(digits) = strip_non_digits(&self.number) {
            self.number = digits;
        }
        self
    }

    /// Formats the stored number by country code.
    ///
    /// The code is trimmed and upper-cased (integers are rendered as
    /// decimal), then matched against `registry` in order; the built-in
    /// [`CountryRegistry`] table is used when none is given. The first
    /// matching record's pattern and template are applied via [`format`].
    ///
    /// When no record matches, a warning naming the code is logged and the
    /// current number is returned unchanged. Note that on this path the
    /// number may still be raw: sanitizing only happens once a record is
    /// found.
    ///
    /// Example: `PhoneFormatter::new(375291234567u64).country("BY", Some("+"), None)`
    ///
    /// [`format`]: PhoneFormatter::format
    pub fn country<'a, C>(
        &mut self,
        code: C,
        prefix: Option<&str>,
        registry: Option<&[CountryRecord]>,
    ) -> String
    where
        C: Into<CodeInput<'a>>,
    {
        match self.try_country(code, prefix, registry) {
            Ok(formatted) => formatted,
            Err(CountryLookupError::UnknownCountryCode(query)) => {
                warn!("Country code {} not found in the registry", query);
                self.number.clone()
            }
            Err(CountryLookupError::Format(err)) => self.recover(&err),
        }
    }

    /// Fallible twin of [`country`]: surfaces the unmatched code or the
    /// format failure instead of degrading. The stored state is mutated
    /// exactly as [`country`] would mutate it.
    ///
    /// [`country`]: PhoneFormatter::country
    pub fn try_country<'a, C>(
        &mut self,
        code: C,
        prefix: Option<&str>,
        registry: Option<&[CountryRecord]>,
    ) -> Result<String, CountryLookupError>
    where
        C: Into<CodeInput<'a>>,
    {
        let query = code.into().normalize();
        let registry = registry.unwrap_or_else(|| CountryRegistry::registry());

        // First match wins; the registry order is the tie-breaker.
        for record in registry {
            if record.matches(&query) {
                let formatted = self.try_format(&record.pattern, &record.template, prefix)?;
                return Ok(formatted);
            }
        }

        Err(CountryLookupError::UnknownCountryCode(query))
    }

    /// Partitions the sanitized number into fixed-width digit groups and
    /// substitutes them into the template's `$1..$N` placeholders.
    ///
    /// The number is sanitized first, so formatting always operates on
    /// digits only. Each `pattern` entry `n` contributes one capture group
    /// of exactly `n` digits; the groups must cover the whole number with
    /// nothing left over. `prefix`, when given, is prepended to the template
    /// before substitution.
    ///
    /// On a digit-count mismatch the stored number stays the sanitized
    /// digit string and is returned as-is, with no diagnostic. The built
    /// expression and the (prefixed) template are retained either way and
    /// can be read back via [`pattern`] and [`template`].
    ///
    /// Example: `formatter.format(&[3, 2, 3, 2, 2], "$1 ($2) $3-$4-$5", Some("+"))`
    ///
    /// [`pattern`]: PhoneFormatter::pattern
    /// [`template`]: PhoneFormatter::template
    pub fn format(&mut self, pattern: &[usize], template: &str, prefix: Option<&str>) -> String {
        match self.try_format(pattern, template, prefix) {
            Ok(formatted) => formatted,
            Err(err) => self.recover(&err),
        }
    }

    /// Fallible twin of [`format`]: reports a digit-count mismatch or an
    /// uncompilable grouping pattern instead of degrading.
    ///
    /// [`format`]: PhoneFormatter::format
    pub fn try_format(
        &mut self,
        pattern: &[usize],
        template: &str,
        prefix: Option<&str>,
    ) -> Result<String, FormatError> {
        self.sanitize();

        let regex = GROUPING_CACHE.get_grouping(pattern)?;

        let template = match prefix {
            Some(prefix) => fast_cat::concat_str!(prefix, template),
            None => template.to_owned(),
        };

        let formatted = regex.captures_full(&self.number).map(|captures| {
            let mut out = String::with_capacity(template.len() + self.number.len());
            captures.expand(&template, &mut out);
            out
        });

        // Retained even when the match fails, mirroring the mutation order
        // of the lookup/format call chain.
        self.pattern = Some(regex);
        self.template = Some(template);

        match formatted {
            Some(formatted) => {
                self.number = formatted;
                Ok(self.number.clone())
            }
            None => Err(FormatError::GroupMismatch {
                expected: pattern.iter().sum(),
                actual: self.number.len(),
            }),
        }
    }

    /// The current working value.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The grouping expression built by the last format call, if any.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_deref()
    }

    /// The template used by the last format call, prefix included, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn recover(&self, err: &FormatError) -> String {
        if let FormatError::InvalidRegex(err) = err {
            error!("Could not compile grouping pattern: {}", err);
        }
        // A group mismatch stays silent; the sanitized digits are the
        // best-available value.
        self.number.clone()
    }
}
