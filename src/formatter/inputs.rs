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

use std::borrow::Cow;

/// A phone number accepted at the public boundary: callers hold numbers
/// either as text or as an already-numeric value, and both shapes are
/// normalized to a canonical string immediately on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberInput<'a> {
    Text(Cow<'a, str>),
    Integer(u64),
}

impl NumberInput<'_> {
    /// Canonical string form, stored verbatim by the formatter.
    pub(crate) fn into_string(self) -> String {
        match self {
            NumberInput::Text(text) => text.into_owned(),
            NumberInput::Integer(number) => {
                let mut buf = itoa::Buffer::new();
                buf.format(number).to_owned()
            }
        }
    }
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for NumberInput<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for NumberInput<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for NumberInput<'_> {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for NumberInput<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(value as u64)
    }
}

impl From<i64> for NumberInput<'_> {
    fn from(value: i64) -> Self {
        let mut buf = itoa::Buffer::new();
        Self::Text(Cow::Owned(buf.format(value).to_owned()))
    }
}

/// A country-code query: textual region codes like `"BY"` or numeric dialing
/// codes like `375`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeInput<'a> {
    Text(Cow<'a, str>),
    Integer(u64),
}

impl CodeInput<'_> {
    /// Normalized query form: surrounding whitespace trimmed and ASCII
    /// letters upper-cased for text, decimal rendering for integers.
    pub(crate) fn normalize(self) -> String {
        match self {
            CodeInput::Text(text) => text.trim().to_ascii_uppercase(),
            CodeInput::Integer(code) => {
                let mut buf = itoa::Buffer::new();
                buf.format(code).to_owned()
            }
        }
    }
}

impl<'a> From<&'a str> for CodeInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for CodeInput<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for CodeInput<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for CodeInput<'_> {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for CodeInput<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(value as u64)
    }
}

impl From<i64> for CodeInput<'_> {
    fn from(value: i64) -> Self {
        let mut buf = itoa::Buffer::new();
        Self::Text(Cow::Owned(buf.format(value).to_owned()))
    }
}
