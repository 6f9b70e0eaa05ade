//! Ports (trait boundaries) between the solver core and its consumers.
//!
//! The solver owns these traits; progress reporting, convergence tracing and
//! playing strategies are adapters that implement them.

pub mod observer;
pub mod strategy;

pub use observer::{NoopObserver, SweepObserver};
pub use strategy::Strategy;
