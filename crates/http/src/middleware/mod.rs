//! Middleware components for HTTP request processing

pub mod trace;

pub use trace::trace_middleware;
