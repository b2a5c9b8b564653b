//! Locale bundles: nested JSON message trees built from dotted keys.

use std::borrow::Cow;

use folio_core::Locale;
use serde_json::{Map, Value};

/// Message tree for one locale.
///
/// Each dotted key is split into nested objects, so `component0.items.1`
/// becomes `{"component0": {"items": {"1": ...}}}`. Object order follows
/// insertion order. Messages are stored ICU-escaped (see [`escape_icu`]).
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleBundle {
    locale: Locale,
    root: Map<String, Value>,
}

impl LocaleBundle {
    /// An empty bundle.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            root: Map::new(),
        }
    }

    /// Build a bundle from `(key, message)` pairs, nesting every key under
    /// `namespace` when one is given.
    pub fn from_entries<'a>(
        locale: Locale,
        namespace: Option<&str>,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut bundle = Self::new(locale);
        for (key, message) in entries {
            match namespace {
                Some(ns) => bundle.insert(&format!("{ns}.{key}"), message),
                None => bundle.insert(key, message),
            }
        }
        bundle
    }

    /// Insert `message` at the dotted `key`.
    ///
    /// A string already sitting where an object is needed is replaced, and a
    /// later insert at the same key wins.
    pub fn insert(&mut self, key: &str, message: &str) {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut node = &mut self.root;
        for segment in segments {
            let child = node
                .entry(segment)
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            node = match child.as_object_mut() {
                Some(map) => map,
                None => return,
            };
        }
        node.insert(last.to_string(), Value::String(escape_icu(message).into_owned()));
    }

    /// Message stored at the dotted `key`, as written to the bundle.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut value = self.root.get(first)?;
        for segment in segments {
            value = value.as_object()?.get(segment)?;
        }
        value.as_str()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Top-level object of the bundle.
    pub fn tree(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The bundle as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> String {
        let mut json =
            serde_json::to_string_pretty(&self.root).unwrap_or_else(|_| "{}".to_string());
        json.push('\n');
        json
    }
}

/// Escape ICU MessageFormat syntax so `t()` renders `message` literally.
///
/// Runs of `{`, `}`, `<`, `>` are wrapped in apostrophes and every literal
/// apostrophe is doubled. Messages without braces, angle brackets or `''`
/// are returned unchanged, since a lone apostrophe is already literal there.
pub fn escape_icu(message: &str) -> Cow<'_, str> {
    if !message.contains(['{', '}', '<', '>']) && !message.contains("''") {
        return Cow::Borrowed(message);
    }

    let mut escaped = String::with_capacity(message.len() + 4);
    let mut quoted = false;
    for c in message.chars() {
        match c {
            '{' | '}' | '<' | '>' => {
                if !quoted {
                    escaped.push('\'');
                    quoted = true;
                }
                escaped.push(c);
            }
            '\'' => escaped.push_str("''"),
            c => {
                if quoted {
                    escaped.push('\'');
                    quoted = false;
                }
                escaped.push(c);
            }
        }
    }
    if quoted {
        escaped.push('\'');
    }
    Cow::Owned(escaped)
}
