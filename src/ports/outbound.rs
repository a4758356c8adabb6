//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, EnrollmentOutcome, OfferingReport, Student};

/// Presenter port. Writes human-readable lines for enrollment events and reports.
pub trait PresenterPort: Send + Sync {
    /// Confirmation (new enrollment) or warning (duplicate). Must name both
    /// the student and the offering.
    fn enrollment(
        &self,
        offering: &str,
        student: &Student,
        outcome: EnrollmentOutcome,
    ) -> Result<(), DomainError>;

    /// Full offering summary.
    fn report(&self, report: &OfferingReport) -> Result<(), DomainError>;
}
