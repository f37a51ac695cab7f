//! Known-answer vector cases.
//!
//! A case is one `(eta, count, seed)` triple. Generation sizes and
//! generates the bitstream, hands it by shared reference to the sampler
//! and the word packer, and renders both artifacts. Writing places each
//! artifact atomically in the output directory.

mod case;
mod writer;

pub use case::{padded_bit_length, CaseParams, TestVectorCase};
pub use writer::{artifact_paths, verify_case, write_case, ArtifactPaths, WrittenCase};

use crate::analysis::CaseStatistics;
use crate::bitsource::BitSourceError;
use crate::config::{ConfigError, GenerationConfig};
use crate::encoding::EncodingError;
use crate::sampling::SamplingError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while generating, writing or checking a case.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Case parameters rejected before generation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Run configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Bitstream construction failed.
    #[error(transparent)]
    BitSource(#[from] BitSourceError),

    /// The CBD transform failed.
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    /// Packing or parsing failed.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Filesystem access failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read, written or renamed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Written artifacts disagree with each other or with the parameters.
    #[error("self-check failed for eta={eta}: {reason}")]
    Mismatch {
        /// Eta of the failing case.
        eta: usize,
        /// What did not match.
        reason: String,
    },
}

/// Generates and writes every configured case into `dir`.
///
/// Cases run in the configured eta order. The first failure aborts the
/// run; artifacts of earlier cases stay in place. With `self_check`,
/// each case is read back and verified right after it is written.
pub fn generate_all(
    dir: impl AsRef<Path>,
    config: &GenerationConfig,
    self_check: bool,
) -> Result<Vec<WrittenCase>, VectorError> {
    let dir = dir.as_ref();
    config.validate()?;

    let mut written = Vec::with_capacity(config.etas.len());
    for &eta in &config.etas {
        let params = CaseParams::from_base_seed(eta, config.coeff_count, config.seed)?;
        let case = TestVectorCase::generate(params)?;

        let stats = CaseStatistics::analyze(case.bitstream(), case.coefficients(), eta);
        tracing::debug!(
            eta,
            bit_bias = stats.bit_bias,
            mean = stats.mean,
            variance = stats.variance,
            expected_variance = stats.expected_variance,
            histogram = ?stats.histogram,
            "Case statistics"
        );
        if !stats.looks_reasonable() {
            tracing::warn!(
                eta,
                seed = params.seed(),
                mean = stats.mean,
                bit_bias = stats.bit_bias,
                "Case statistics look unusual"
            );
        }

        written.push(write_case(dir, &case)?);

        if self_check {
            verify_case(dir, &params)?;
        }
    }

    Ok(written)
}
