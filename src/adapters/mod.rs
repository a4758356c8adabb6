//! Infrastructure adapters. Implement outbound ports.
//!
//! Console output only. Map errors to DomainError.

pub mod console;
