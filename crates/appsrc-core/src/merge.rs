//! Deduplicating merge of app entries keyed by canonical name.
//!
//! Org-discovered URLs are absorbed first, manual entries second. A URL-like
//! entry always replaces whatever is stored for its name; a bare name only
//! fills an empty slot. Positions are fixed at first insertion.

use std::collections::HashMap;
use std::fmt;

use crate::normalize::{canonical_name, is_url_like};

/// One deduplicated app: canonical name plus the original string chosen to represent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    pub source: String,
}

impl AppEntry {
    /// True if the stored source should be emitted alongside the name.
    pub fn has_url(&self) -> bool {
        is_url_like(&self.source)
    }
}

impl fmt::Display for AppEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_url() {
            write!(f, "{}#{}", self.name, self.source)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// What [`AppSet::absorb`] did with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absorbed {
    /// Normalized to an empty name; ignored.
    Skipped,
    /// New name, appended.
    Inserted,
    /// Known name; stored source replaced by this URL-like entry.
    Replaced,
    /// Known name; bare entry left the stored source alone.
    Kept,
}

/// Insertion-ordered mapping from canonical name to chosen source.
#[derive(Debug, Default, Clone)]
pub struct AppSet {
    entries: Vec<AppEntry>,
    index: HashMap<String, usize>,
}

impl AppSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one entry (URL or bare name) into the set.
    pub fn absorb(&mut self, entry: &str) -> Absorbed {
        let name = canonical_name(entry);
        if name.is_empty() {
            return Absorbed::Skipped;
        }

        let outcome = match self.index.get(&name).copied() {
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(AppEntry {
                    name: name.clone(),
                    source: entry.to_string(),
                });
                Absorbed::Inserted
            }
            Some(pos) if is_url_like(entry) => {
                self.entries[pos].source = entry.to_string();
                Absorbed::Replaced
            }
            Some(_) => Absorbed::Kept,
        };
        tracing::trace!("absorb {:?} as {}: {:?}", entry, name, outcome);
        outcome
    }

    /// Absorbs every entry in order.
    pub fn absorb_all<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            self.absorb(entry.as_ref());
        }
    }

    pub fn get(&self, name: &str) -> Option<&AppEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the output line: tokens in insertion order, separated by one space.
    /// Empty set renders as an empty string.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(AppEntry::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
