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

use regex::{Captures, Regex};

/// Whole-string matching over `regex::Regex`. A grouping expression must
/// span the entire digit string; leftover digits are not tolerated.
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;

    /// Captures only when the match covers the whole input.
    fn captures_full<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }

    fn captures_full<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 || full_capture.end() != s.len() {
            return None;
        }

        Some(captures)
    }
}
