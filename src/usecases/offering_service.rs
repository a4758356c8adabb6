//! Enrollment and reporting for a single offering.
//!
//! - Applies `enroll` to the aggregate under one coarse lock
//! - Logs the outcome, then hands it to the presenter
//! - `report` snapshots the offering and renders it; state is untouched

use crate::domain::{DomainError, EnrollmentOutcome, Offering, OfferingReport, Student};
use crate::ports::{EnrollmentPort, PresenterPort};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Offering service. Owns the offering; the presenter receives every event.
pub struct OfferingService {
    offering: Mutex<Offering>,
    presenter: Arc<dyn PresenterPort>,
}

impl OfferingService {
    pub fn new(offering: Offering, presenter: Arc<dyn PresenterPort>) -> Self {
        Self {
            offering: Mutex::new(offering),
            presenter,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Offering>, DomainError> {
        self.offering
            .lock()
            .map_err(|e| DomainError::State(format!("offering lock poisoned: {}", e)))
    }

    /// Number of distinct students enrolled so far.
    pub fn enrolled_count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.enrolled_count())
    }
}

impl EnrollmentPort for OfferingService {
    fn enroll(&self, student: Student) -> Result<EnrollmentOutcome, DomainError> {
        let (offering_name, outcome) = {
            let mut offering = self.lock()?;
            let outcome = offering.enroll(student.clone());
            (offering.name().to_string(), outcome)
        };

        match outcome {
            EnrollmentOutcome::Enrolled => {
                info!(student = %student, offering = %offering_name, "student enrolled")
            }
            EnrollmentOutcome::AlreadyEnrolled => {
                warn!(student = %student, offering = %offering_name, "student already enrolled")
            }
        }

        self.presenter.enrollment(&offering_name, &student, outcome)?;
        Ok(outcome)
    }

    fn report(&self) -> Result<OfferingReport, DomainError> {
        let report = self.lock()?.report();
        debug!(
            offering = %report.name,
            items = report.content_items.len(),
            total_minutes = report.total_duration_minutes,
            enrolled = report.enrolled_students.len(),
            "rendering report"
        );
        self.presenter.report(&report)?;
        Ok(report)
    }
}
