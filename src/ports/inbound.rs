//! Inbound port. The driver (binary, tests) calls into the application.

use crate::domain::{DomainError, EnrollmentOutcome, OfferingReport, Student};

/// Input port: enrollment and reporting for one offering.
pub trait EnrollmentPort: Send + Sync {
    /// Enroll a student. Re-enrolling returns `AlreadyEnrolled` and changes nothing.
    fn enroll(&self, student: Student) -> Result<EnrollmentOutcome, DomainError>;

    /// Render the offering summary and return the snapshot that was rendered.
    fn report(&self) -> Result<OfferingReport, DomainError>;
}
