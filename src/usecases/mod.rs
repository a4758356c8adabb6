//! Application use cases. Orchestrate domain logic via ports.

pub mod offering_service;

pub use offering_service::OfferingService;
