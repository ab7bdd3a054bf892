use crate::prelude::CoreError;
use std::str::FromStr;

/// Free-text search box contents. Matching is a case-insensitive substring
/// test; an empty query admits everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            needle: text.into().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_empty()
            || fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Categorical selector: either every value or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => expected == value,
        }
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Choice::All, Choice::Only)
    }
}

impl<T: FromStr<Err = CoreError>> FromStr for Choice<T> {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(Choice::All)
        } else {
            trimmed.parse().map(Choice::Only)
        }
    }
}

/// Id of the single expanded or selected row on a listing screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    /// Selects `id`, or collapses it when it is already selected.
    pub fn toggle(&mut self, id: &str) -> Option<&str> {
        if self.0.as_deref() == Some(id) {
            self.0 = None;
        } else {
            self.0 = Some(id.to_string());
        }
        self.id()
    }

    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn clear_if(&mut self, id: &str) {
        if self.0.as_deref() == Some(id) {
            self.0 = None;
        }
    }
}

/// Next free number for ids shaped `<prefix><digits>`.
pub(crate) fn next_number<'a>(ids: impl IntoIterator<Item = &'a str>, prefix: &str) -> usize {
    ids.into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|digits| digits.parse::<usize>().ok())
        .max()
        .unwrap_or(0)
        + 1
}
