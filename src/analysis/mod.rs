//! Descriptive statistics for generated cases.
//!
//! These are sanity checks on the seeded generator and the sampler,
//! not tests of randomness quality. A case that looks odd is logged,
//! never rejected.

mod statistics;

pub use statistics::CaseStatistics;
