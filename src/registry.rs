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

use std::sync::LazyLock;

/// One entry of a country registry.
///
/// A record is matched by any of its `codes` and describes how a sanitized
/// number for that country is partitioned and displayed:
///
/// * `codes` — identifiers the lookup query is tested against, typically the
///   ISO-like region code plus the international dialing code.
/// * `pattern` — ordered digit-group lengths; entry `n` captures exactly `n`
///   consecutive digits.
/// * `template` — display string whose `$1..$N` placeholders receive the
///   captured groups.
///
/// The group count is expected to equal the placeholder count in `template`.
/// This is not validated; a mismatched record degrades to a partially
/// substituted string instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub codes: Vec<String>,
    pub pattern: Vec<usize>,
    pub template: String,
}

impl CountryRecord {
    pub fn new<C, S>(codes: C, pattern: Vec<usize>, template: impl Into<String>) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            pattern,
            template: template.into(),
        }
    }

    /// Whether this record answers to the given normalized query.
    pub fn matches(&self, query: &str) -> bool {
        self.codes.iter().any(|code| code == query)
    }
}

pub struct CountryRegistry;

impl CountryRegistry {
    /// The default ordered table used when a lookup is given no registry of
    /// its own. Order matters: the first matching record wins.
    pub fn registry() -> &'static [CountryRecord] {
        &DEFAULT_REGISTRY
    }
}

/// Built-in table covering common regions, keyed by region code and dialing
/// code. Patterns assume the sanitized number carries the dialing code, e.g.
/// `375291234567` for BY.
static DEFAULT_REGISTRY: LazyLock<Vec<CountryRecord>> = LazyLock::new(|| {
    vec![
        CountryRecord::new(["BY", "375"], vec![3, 2, 3, 2, 2], "$1 ($2) $3-$4-$5"),
        CountryRecord::new(["RU", "KZ", "7"], vec![1, 3, 3, 2, 2], "$1 ($2) $3-$4-$5"),
        CountryRecord::new(["UA", "380"], vec![3, 2, 3, 4], "$1 ($2) $3-$4"),
        CountryRecord::new(["US", "CA", "1"], vec![1, 3, 3, 4], "$1 ($2) $3-$4"),
        CountryRecord::new(["GB", "44"], vec![2, 2, 4, 4], "$1 $2 $3 $4"),
        CountryRecord::new(["DE", "49"], vec![2, 3, 7], "$1 $2 $3"),
        CountryRecord::new(["FR", "33"], vec![2, 1, 2, 2, 2, 2], "$1 $2 $3 $4 $5 $6"),
        CountryRecord::new(["PL", "48"], vec![2, 3, 3, 3], "$1 $2 $3 $4"),
    ]
});
