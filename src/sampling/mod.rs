//! Centered binomial sampling.
//!
//! Converts a bitstream into signed coefficients in `[-eta, eta]` by
//! reading non-overlapping windows of `2 * eta` bits.

mod cbd;

pub use cbd::{sample, window_bits, CbdSampler, SamplingError};
