//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the driver into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::EnrollmentPort;
pub use outbound::PresenterPort;
