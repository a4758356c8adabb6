//! Offering aggregate: ordered content plus a deduplicated enrollment set.
//!
//! The content list is fixed at construction. Enrollment only grows, and only
//! through [`Offering::enroll`].

use crate::domain::entities::{ContentItem, Level, Student};
use std::collections::HashSet;

/// Result of an enrollment attempt. A duplicate is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    Enrolled,
    AlreadyEnrolled,
}

impl EnrollmentOutcome {
    pub fn is_new(self) -> bool {
        matches!(self, EnrollmentOutcome::Enrolled)
    }
}

#[derive(Debug, Clone)]
pub struct Offering {
    name: String,
    level: Level,
    content_items: Vec<ContentItem>,
    enrolled_students: HashSet<Student>,
}

impl Offering {
    pub fn new(
        name: impl Into<String>,
        level: Level,
        content_items: impl IntoIterator<Item = ContentItem>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            content_items: content_items.into_iter().collect(),
            enrolled_students: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Content items in declared order.
    pub fn content_items(&self) -> &[ContentItem] {
        &self.content_items
    }

    /// Sum of all item durations. Widened so any set of `i32` durations fits.
    pub fn total_duration_minutes(&self) -> i64 {
        self.content_items
            .iter()
            .map(|c| i64::from(c.duration_minutes))
            .sum()
    }

    /// Enrolled students, in no particular order.
    pub fn enrolled_students(&self) -> impl Iterator<Item = &Student> {
        self.enrolled_students.iter()
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled_students.len()
    }

    pub fn is_enrolled(&self, student: &Student) -> bool {
        self.enrolled_students.contains(student)
    }

    pub fn enroll(&mut self, student: Student) -> EnrollmentOutcome {
        if self.enrolled_students.insert(student) {
            EnrollmentOutcome::Enrolled
        } else {
            EnrollmentOutcome::AlreadyEnrolled
        }
    }

    /// Snapshot of everything the console report shows.
    pub fn report(&self) -> OfferingReport {
        OfferingReport {
            name: self.name.clone(),
            level: self.level,
            content_items: self.content_items.clone(),
            total_duration_minutes: self.total_duration_minutes(),
            enrolled_students: self.enrolled_students.iter().cloned().collect(),
        }
    }
}

/// Read-only view of an offering at report time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferingReport {
    pub name: String,
    pub level: Level,
    pub content_items: Vec<ContentItem>,
    pub total_duration_minutes: i64,
    /// Empty means nobody is enrolled yet.
    pub enrolled_students: Vec<Student>,
}
