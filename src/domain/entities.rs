//! Domain entities. Pure value types for the catalog.
//!
//! Equality is by value: two students with the same name are the same student.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration applied to a content item when none is given.
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

/// Difficulty tier of an offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "BASICO")]
    Basic,
    #[serde(rename = "INTERMEDIARIO")]
    Intermediate,
    #[serde(rename = "AVANCADO")]
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Basic => "BASICO",
            Level::Intermediate => "INTERMEDIARIO",
            Level::Advanced => "AVANCADO",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named unit of instructional material.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentItem {
    pub name: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
}

fn default_duration() -> i32 {
    DEFAULT_DURATION_MINUTES
}

impl ContentItem {
    pub fn new(name: impl Into<String>, duration_minutes: i32) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
        }
    }

    pub fn with_default_duration(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_DURATION_MINUTES)
    }
}

/// A student, identified by name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
