//! Declaration attributes.
//!
//! Attributes form an ordered multiset: a key may repeat and every entry is
//! kept in the order it was written. Consumers that want "first wins" or
//! "last wins" pick with [`Attributes::first`] or [`Attributes::last`].

use std::fmt;

use smol_str::SmolStr;

use crate::base::Span;

/// A `key:value` annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: SmolStr,
    /// Value with leading and trailing whitespace removed
    pub value: String,
    pub key_span: Span,
    pub value_span: Span,
}

impl Attribute {
    pub fn new(key: impl Into<SmolStr>, value: &str, key_span: Span, value_span: Span) -> Self {
        Self {
            key: key.into(),
            value: value.trim().to_string(),
            key_span,
            value_span,
        }
    }
}

/// Attributes of one declaration, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.0.push(attribute);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    /// Every attribute with this key, in source order
    pub fn get_all<'s, 'k>(
        &'s self,
        key: &'k str,
    ) -> impl Iterator<Item = &'s Attribute> + use<'s, 'k> {
        self.0.iter().filter(move |attr| attr.key == key)
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    pub fn last(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|attr| attr.key == key)
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// `{k:v : k2:v2}`, or `{}` when empty
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, attr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" : ")?;
            }
            write!(f, "{}", attr)?;
        }
        f.write_str("}")
    }
}
