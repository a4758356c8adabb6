//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod offering;

pub use entities::{ContentItem, DEFAULT_DURATION_MINUTES, Level, Student};
pub use errors::DomainError;
pub use offering::{EnrollmentOutcome, Offering, OfferingReport};
