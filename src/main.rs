//! Wiring & DI. Entry point: bootstrap the console adapter, inject it into the service, run the demo.
//! No business logic here; enrollment rules live in the domain.

use edu_catalog::adapters::console::ConsolePresenter;
use edu_catalog::domain::Student;
use edu_catalog::ports::{EnrollmentPort, PresenterPort};
use edu_catalog::shared::config::AppConfig;
use edu_catalog::shared::sample;
use edu_catalog::usecases::OfferingService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv();
    let (cfg, cfg_err) = match AppConfig::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.log_level_or_default())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }
    if let Some(e) = cfg_err {
        warn!(error = %e, "config load failed, using defaults");
    }

    let presenter: Arc<dyn PresenterPort> =
        Arc::new(ConsolePresenter::stdout(cfg.color_or_default()));
    let service: Arc<dyn EnrollmentPort> =
        Arc::new(OfferingService::new(sample::kotlin_developer(), presenter));

    let mut students = sample::students();
    // Re-enroll the first student to show the duplicate warning.
    students.push(Student::new("Maria Silva"));
    for student in students {
        service.enroll(student)?;
    }

    let report = service.report()?;
    info!(
        enrolled = report.enrolled_students.len(),
        total_minutes = report.total_duration_minutes,
        "demo finished"
    );

    Ok(())
}
