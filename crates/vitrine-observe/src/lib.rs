//! Observability wiring for Vitrine host applications.

pub mod tracing_setup;
