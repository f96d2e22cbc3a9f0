//! Command implementations

pub mod benchmark;
pub mod check;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
