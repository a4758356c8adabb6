//! edu-catalog: course offerings, deduplicated enrollment and a console report, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
