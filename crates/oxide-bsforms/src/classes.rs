//! CSS class lists and sets.

use std::collections::BTreeSet;

/// Additional CSS classes supplied by a caller.
///
/// A string is split on whitespace, a list is taken token by token. Empty
/// tokens are ignored in both cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtraClasses {
    /// No extra classes.
    #[default]
    None,
    /// Whitespace-separated class names, e.g. `"col-md-4 text-end"`.
    Str(String),
    /// Explicit class names.
    List(Vec<String>),
}

impl ExtraClasses {
    /// Returns the individual class names in input order.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Self::None => Vec::new(),
            Self::Str(s) => s.split_whitespace().collect(),
            Self::List(list) => list
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Returns whether there are no class names.
    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }

    /// Returns whether classes were supplied at all, blank ones included.
    ///
    /// A horizontal layout is requested by any non-empty value, so `" "`
    /// still switches it on even though it carries no class names.
    pub fn is_set(&self) -> bool {
        match self {
            Self::None => false,
            Self::Str(s) => !s.is_empty(),
            Self::List(list) => !list.is_empty(),
        }
    }
}

impl From<&str> for ExtraClasses {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ExtraClasses {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<String>> for ExtraClasses {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl From<Vec<&str>> for ExtraClasses {
    fn from(list: Vec<&str>) -> Self {
        Self::List(list.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ExtraClasses {
    fn from(list: [&str; N]) -> Self {
        Self::List(list.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<BTreeSet<String>> for ExtraClasses {
    fn from(set: BTreeSet<String>) -> Self {
        Self::List(set.into_iter().collect())
    }
}

impl From<Option<String>> for ExtraClasses {
    fn from(s: Option<String>) -> Self {
        s.map_or(Self::None, Self::Str)
    }
}

/// Appends classes to an ordered class list.
///
/// Returns `orig` followed by every class of `add` that is not yet present,
/// in order of first appearance. The input is never modified.
pub fn update_css_classes(orig: &[String], add: impl Into<ExtraClasses>) -> Vec<String> {
    let add = add.into();
    let mut merged = orig.to_vec();
    for token in add.tokens() {
        if !merged.iter().any(|c| c == token) {
            merged.push(token.to_string());
        }
    }
    merged
}

/// A set of CSS class names with a stable, lexically sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    /// Creates an empty class set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds class names. Input is split on whitespace, so `"a b"` adds two
    /// classes and blank input adds none.
    pub fn insert(&mut self, class: impl Into<String>) {
        let class = class.into();
        self.0.extend(class.split_whitespace().map(str::to_string));
    }

    /// Adds every class name of `extra`.
    pub fn extend_from(&mut self, extra: &ExtraClasses) {
        for token in extra.tokens() {
            self.0.insert(token.to_string());
        }
    }

    /// Adds every class of another set.
    pub fn union_with(&mut self, other: &Self) {
        self.0.extend(other.0.iter().cloned());
    }

    /// Returns whether the class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the classes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Renders the value of an HTML `class` attribute.
    pub fn to_attr_value(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }

    /// Builder method to add a class.
    #[must_use]
    pub fn with(mut self, class: impl Into<String>) -> Self {
        self.insert(class);
        self
    }
}

impl<S: Into<String>> FromIterator<S> for ClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for class in iter {
            set.insert(class);
        }
        set
    }
}
