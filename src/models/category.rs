//! Expense categories
//!
//! The recognized category set is closed (food, transport, shopping, bills,
//! other), but expense data coming from outside may carry arbitrary keys.
//! Those never fail to parse: they become `Custom` entries that aggregate
//! under their own key and fall back to generic display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An expense category
///
/// Derived `Ord` puts the registered categories in canonical display order,
/// with custom keys sorting after them alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Other,
    /// A category key not in the recognized set
    Custom(String),
}

impl Category {
    /// The fixed registered set, in canonical order
    pub fn registered() -> [Category; 5] {
        [
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Bills,
            Self::Other,
        ]
    }

    /// The lowercase key used in stored data
    pub fn key(&self) -> &str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Bills => "bills",
            Self::Other => "other",
            Self::Custom(key) => key,
        }
    }

    /// The emoji glyph for this category; unknown keys get the pin fallback
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Food => "\u{1F354}",      // 🍔
            Self::Transport => "\u{1F697}", // 🚗
            Self::Shopping => "\u{1F6CD}",  // 🛍
            Self::Bills => "\u{1F4DD}",     // 📝
            Self::Other | Self::Custom(_) => "\u{1F4CC}", // 📌
        }
    }

    /// Display label: glyph plus capitalized name
    pub fn label(&self) -> String {
        format!("{} {}", self.glyph(), capitalize(self.key()))
    }

    /// Whether this is one of the five registered categories
    pub fn is_registered(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "shopping" => Self::Shopping,
            "bills" => Self::Bills,
            "other" | "" => Self::Other,
            _ => Self::Custom(key),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
