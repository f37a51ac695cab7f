//! CBD Known-Answer Vector Generation Library
//!
//! Produces deterministic test vectors for Centered Binomial Distribution
//! samplers as used in lattice-based cryptography. Each vector pairs the
//! raw randomness, packed into 128-bit words, with the coefficients a
//! correct sampler must derive from it.
//!
//! # Architecture
//!
//! ```text
//! bitsource → sampling ─┐
//!      │                ├→ vectors (write, self-check)
//!      └────→ encoding ─┘
//!                 analysis (sanity statistics)
//! ```
//!
//! The bitstream of a case is generated once and read by the sampler and
//! the word packer through a shared reference.
//!
//! # Design Principles
//!
//! - **Deterministic**: output depends only on `(eta, count, seed)`
//! - **No global state**: every generation builds its own ChaCha20 instance
//! - **Not for secrets**: seeds are small integers chosen for reproducibility
//!
//! # Example
//!
//! ```
//! use cbd_vectors::{sampling, vectors::{CaseParams, TestVectorCase}};
//!
//! let params = CaseParams::from_base_seed(2, 64, 2024).unwrap();
//! let case = TestVectorCase::generate(params).unwrap();
//!
//! assert_eq!(case.coefficients().len(), 64);
//! assert_eq!(case.words().len(), 2);
//!
//! let again = sampling::sample(case.bitstream(), 2, 64).unwrap();
//! assert_eq!(again, case.coefficients());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod bitsource;
pub mod config;
pub mod encoding;
pub mod sampling;
pub mod vectors;

// Re-export commonly used types at crate root
pub use analysis::CaseStatistics;
pub use bitsource::{BitSource, Bitstream};
pub use config::{ConfigError, FileConfig, GenerationConfig, OutputConfig};
pub use encoding::{EncodingError, WORD_BITS};
pub use sampling::{CbdSampler, SamplingError};
pub use vectors::{CaseParams, TestVectorCase, VectorError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
