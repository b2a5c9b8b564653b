//! Translation keys and their assignment.
//!
//! Keys have the form `component<index>.<property path>`, where the index is
//! the position of the instance in the layout and array elements append their
//! numeric index: `component2.plans.0.features.1`.
//!
//! Property names may contain `.` themselves, so field segments are escaped
//! the way JSON Pointer escapes `/`: `~` becomes `~0` and `.` becomes `~1`.
//! A written segment therefore never contains `.`, and distinct paths never
//! share a key.

use std::{borrow::Cow, fmt};

use serde::Serialize;

/// One step in a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object property name, escaped when written.
    Field(String),
    /// Array element index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(&escape_segment(name)),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Key segment for a property name: `~` becomes `~0`, `.` becomes `~1`.
pub fn escape_segment(name: &str) -> Cow<'_, str> {
    if !name.contains(['~', '.']) {
        return Cow::Borrowed(name);
    }
    let mut escaped = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        match c {
            '~' => escaped.push_str("~0"),
            '.' => escaped.push_str("~1"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Dotted property path inside one component's property bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<PathSegment>,
}

impl KeyPath {
    /// The empty path (the property bag itself).
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of property `name` below this path.
    pub fn field(&self, name: &str) -> Self {
        self.child(PathSegment::Field(name.to_string()))
    }

    /// Path of array element `index` below this path.
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Hands out component scopes in layout order.
///
/// One assigner lives for exactly one generation call, so numbering always
/// restarts at `component0`.
#[derive(Debug, Default)]
pub struct KeyAssigner {
    next: usize,
}

impl KeyAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the scope of the next component instance.
    pub fn next_component(&mut self) -> ComponentScope {
        let scope = ComponentScope { index: self.next };
        self.next += 1;
        scope
    }
}

/// Key namespace of one component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentScope {
    index: usize,
}

impl ComponentScope {
    /// Position of the instance in the layout.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Prefix shared by every key of this instance (`component<index>`).
    pub fn prefix(&self) -> String {
        format!("component{}", self.index)
    }

    /// Full key for a property path.
    pub fn key(&self, path: &KeyPath) -> String {
        format!("component{}.{}", self.index, path)
    }
}

/// A translatable string and its values in both locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationKey {
    /// Dotted key, e.g. `component0.title`.
    pub key: String,
    /// Literal text as authored.
    pub source_value: String,
    /// Dictionary translation, or the source text when none is known.
    pub target_value: String,
}

impl TranslationKey {
    pub fn new(
        key: impl Into<String>,
        source_value: impl Into<String>,
        target_value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            source_value: source_value.into(),
            target_value: target_value.into(),
        }
    }
}

/// Ordered table of all keys assigned in one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyTable {
    keys: Vec<TranslationKey>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: TranslationKey) {
        self.keys.push(key);
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&TranslationKey> {
        self.keys.iter().find(|k| k.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranslationKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// `(key, source value)` pairs in table order.
    pub fn source_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .map(|k| (k.key.as_str(), k.source_value.as_str()))
    }

    /// `(key, target value)` pairs in table order.
    pub fn target_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .map(|k| (k.key.as_str(), k.target_value.as_str()))
    }
}

impl<'a> IntoIterator for &'a KeyTable {
    type Item = &'a TranslationKey;
    type IntoIter = std::slice::Iter<'a, TranslationKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
