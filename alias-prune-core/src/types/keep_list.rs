//! Protected record names

use std::collections::BTreeSet;

use alias_prune_provider::{escape_wildcards, qualify};

/// Record names that must never be deleted.
///
/// Built once per run from user-supplied relative names. Each entry is
/// wildcard-escaped and qualified with the zone name so it compares directly
/// against listed record names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepList {
    entries: BTreeSet<String>,
}

impl KeepList {
    /// Expand relative names against `zone_name`.
    ///
    /// 如: `["www", "*.dev"]` + `example.com` -> `{"www.example.com.", "\052.dev.example.com."}`
    ///
    /// Names that already end with a dot are taken as fully qualified, so
    /// expanding an expanded list with the same zone yields the same list.
    pub fn expand<I, S>(names: I, zone_name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|name| qualify(&escape_wildcards(name.as_ref()), zone_name))
            .collect();
        Self { entries }
    }

    pub fn contains(&self, fqdn: &str) -> bool {
        self.entries.contains(fqdn)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expanded entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
