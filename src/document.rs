//! The INI document model.
//!
//! A [`Document`] maps section names to [`Section`]s, and each section maps
//! keys to values. Both are kept in lexicographic byte order so that
//! encoding is deterministic. The empty section name is the implicit main
//! section holding entries that precede any header.
//!
//! Names, keys and values are stored as [`BString`]: the parser copies
//! input bytes through without decoding them, so a Latin-1 value or a stray
//! byte survives a parse-encode round trip. Every lookup accepts anything
//! that is `AsRef<[u8]>`, so plain `&str` keys work as expected.
//!
//! ## Two access modes
//!
//! Building a document wants auto-vivification; inspecting one you did not
//! build wants typos to fail loudly. Both are provided under distinct names:
//!
//! ```rust
//! use ini_doc::{Document, RangeError};
//!
//! let mut doc = Document::new();
//! *doc.get_or_create_section("net").get_or_create_value("port") = "8080".into();
//!
//! assert_eq!(doc.section("net").unwrap().value("port").unwrap(), "8080");
//! assert_eq!(doc.section("net").unwrap().value_str("port"), Some("8080"));
//! assert!(matches!(doc.section("nte"), Err(RangeError::SectionNotFound(_))));
//! assert_eq!(doc.section("net").unwrap().value_or("host", "localhost"), "localhost");
//! ```

use crate::error::RangeError;
use bstr::{BStr, BString, ByteSlice};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

/// An ordered map of section names to sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: BTreeMap<BString, Section>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_section(&self, name: impl AsRef<[u8]>) -> bool {
        self.sections.contains_key(BStr::new(name.as_ref()))
    }

    /// Returns the named section, inserting an empty one first if needed.
    pub fn get_or_create_section(&mut self, name: impl AsRef<[u8]>) -> &mut Section {
        let name = name.as_ref();
        self.sections
            .entry(BString::from(name))
            .or_insert_with(|| Section::new(name))
    }

    /// Returns the named section.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::SectionNotFound`] if there is no such section.
    pub fn section(&self, name: impl AsRef<[u8]>) -> Result<&Section, RangeError> {
        let name = name.as_ref();
        self.sections
            .get(BStr::new(name))
            .ok_or_else(|| RangeError::SectionNotFound(BString::from(name)))
    }

    /// Inserts `section` under its own name, replacing and returning any
    /// section of the same name.
    pub fn insert_section(&mut self, section: Section) -> Option<Section> {
        self.sections.insert(section.name.clone(), section)
    }

    /// Removes the named section. Does nothing if it does not exist.
    pub fn erase_section(&mut self, name: impl AsRef<[u8]>) -> Option<Section> {
        self.sections.remove(BStr::new(name.as_ref()))
    }

    /// Number of sections, including the main section if present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates sections in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, BString, Section> {
        self.sections.iter()
    }

    /// Iterates sections in name order, allowing their entries to be edited.
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, BString, Section> {
        self.sections.iter_mut()
    }

    pub fn sections(&self) -> btree_map::Values<'_, BString, Section> {
        self.sections.values()
    }
}

impl IntoIterator for Document {
    type Item = (BString, Section);
    type IntoIter = btree_map::IntoIter<BString, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a BString, &'a Section);
    type IntoIter = btree_map::Iter<'a, BString, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl<'a> IntoIterator for &'a mut Document {
    type Item = (&'a BString, &'a mut Section);
    type IntoIter = btree_map::IterMut<'a, BString, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter_mut()
    }
}

impl FromIterator<Section> for Document {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        let mut document = Document::new();
        for section in iter {
            document.insert_section(section);
        }
        document
    }
}

/// Renders the document as INI text without a byte order mark. Bytes that
/// are not valid UTF-8 are shown as U+FFFD; use [`encode`](crate::encode)
/// for the exact bytes.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&crate::encode(self, false), f)
    }
}

impl FromStr for Document {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::from_str(s)
    }
}

// Serializes as a string when the bytes are UTF-8 and as a byte sequence
// otherwise.
struct Text<'a>(&'a BStr);

impl Serialize for Text<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_str() {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(self.0),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(&Text(name.as_bstr()), section)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, BTreeMap<String, String>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(name, values)| {
                let mut section = Section::new(name);
                section.extend(values);
                section
            })
            .collect())
    }
}

/// A named, ordered map of keys to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: BString,
    values: BTreeMap<BString, BString>,
}

impl Section {
    /// Creates an empty section. Use `""` for the main section.
    #[must_use]
    pub fn new(name: impl AsRef<[u8]>) -> Self {
        Section {
            name: BString::from(name.as_ref()),
            values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &BStr {
        self.name.as_bstr()
    }

    #[must_use]
    pub fn has_value(&self, key: impl AsRef<[u8]>) -> bool {
        self.values.contains_key(BStr::new(key.as_ref()))
    }

    /// Returns the value stored under `key`, inserting an empty value first
    /// if needed.
    pub fn get_or_create_value(&mut self, key: impl AsRef<[u8]>) -> &mut BString {
        self.values.entry(BString::from(key.as_ref())).or_default()
    }

    /// Returns the raw bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ValueNotFound`] if there is no such key.
    pub fn value(&self, key: impl AsRef<[u8]>) -> Result<&BStr, RangeError> {
        let key = key.as_ref();
        self.values
            .get(BStr::new(key))
            .map(|value| value.as_bstr())
            .ok_or_else(|| RangeError::ValueNotFound(BString::from(key)))
    }

    /// Returns the value stored under `key` as text, or `None` if there is no
    /// such key or the value is not valid UTF-8.
    #[must_use]
    pub fn value_str(&self, key: impl AsRef<[u8]>) -> Option<&str> {
        self.value(key).ok().and_then(|value| value.to_str().ok())
    }

    /// Returns the value stored under `key`, or `default` if there is none.
    #[must_use]
    pub fn value_or<'a, D>(&'a self, key: impl AsRef<[u8]>, default: &'a D) -> &'a BStr
    where
        D: AsRef<[u8]> + ?Sized,
    {
        self.value(key).unwrap_or_else(|_| BStr::new(default))
    }

    /// Stores `value` under `key`, overwriting any previous value.
    pub fn set_value(&mut self, key: impl Into<BString>, value: impl Into<BString>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes `key`. Does nothing if it does not exist.
    pub fn delete_value(&mut self, key: impl AsRef<[u8]>) -> Option<BString> {
        self.values.remove(BStr::new(key.as_ref()))
    }

    /// Removes every entry, keeping the name.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, BString, BString> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, BString, BString> {
        self.values.iter_mut()
    }

    /// The entries as a map, for handing the whole section to code that
    /// expects one.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<BString, BString> {
        &self.values
    }
}

impl IntoIterator for Section {
    type Item = (BString, BString);
    type IntoIter = btree_map::IntoIter<BString, BString>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a BString, &'a BString);
    type IntoIter = btree_map::Iter<'a, BString, BString>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a mut Section {
    type Item = (&'a BString, &'a mut BString);
    type IntoIter = btree_map::IterMut<'a, BString, BString>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}

impl<K: Into<BString>, V: Into<BString>> Extend<(K, V)> for Section {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set_value(key, value);
        }
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(&Text(key.as_bstr()), &Text(value.as_bstr()))?;
        }
        map.end()
    }
}

/// Deserializes the entries of a section. The name is left empty.
impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut section = Section::default();
        section.extend(values);
        Ok(section)
    }
}
