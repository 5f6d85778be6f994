use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical section names in rendering order.
pub const DISPLAY_ORDER: [&str; 12] = [
    "Abstract",
    "Keywords",
    "Introduction",
    "Related Work",
    "Problem Formulation",
    "Methodology",
    "Experimental Setup",
    "Results and Discussion",
    "System Architecture",
    "Limitations and Future Scope",
    "Conclusion",
    "References",
];

/// Compare two section names the way the paper treats them: surrounding
/// whitespace is ignored and case does not matter.
pub fn same_section(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// True if `name` matches one of the [`DISPLAY_ORDER`] entries.
pub fn is_canonical(name: &str) -> bool {
    DISPLAY_ORDER.iter().any(|canonical| same_section(canonical, name))
}

/// Generated paper sections keyed by name.
///
/// Keys keep their original spelling and encounter order. Lookups through
/// [`SectionCollection::get`] and merges through [`SectionCollection::upsert`]
/// treat names that differ only by case or surrounding whitespace as the
/// same section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionCollection {
    sections: IndexMap<String, String>,
}

impl SectionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate `(name, body)` pairs in encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }

    /// Stored key matching `name` after trimming and case folding
    pub fn find_key(&self, name: &str) -> Option<&str> {
        self.sections
            .keys()
            .find(|key| same_section(key, name))
            .map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let key = self.find_key(name)?;
        self.sections.get(key).map(String::as_str)
    }

    /// Insert under the exact key given, replacing any value stored under
    /// that same key.
    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.sections.insert(name.into(), body.into());
    }

    /// Merge a section in by tolerant name.
    ///
    /// Overwrites the body of an existing key that matches `name` (keeping the
    /// stored spelling) or appends `name` as a new key. Returns `true` when an
    /// existing key was updated.
    pub fn upsert(&mut self, name: &str, body: impl Into<String>) -> bool {
        match self.find_key(name).map(str::to_owned) {
            Some(key) => {
                self.sections.insert(key, body.into());
                true
            }
            None => {
                self.sections.insert(name.to_string(), body.into());
                false
            }
        }
    }

    /// Iterate sections in [`DISPLAY_ORDER`] first, then every other key in
    /// encounter order.
    pub fn ordered(&self) -> Vec<(&str, &str)> {
        let canonical = DISPLAY_ORDER
            .iter()
            .filter_map(|name| {
                let key = self.find_key(name)?;
                self.sections
                    .get_key_value(key)
                    .map(|(k, v)| (k.as_str(), v.as_str()))
            });
        let extras = self.iter().filter(|(name, _)| !is_canonical(name));

        canonical.chain(extras).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for SectionCollection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (name, body) in iter {
            collection.insert(name, body);
        }
        collection
    }
}
