//! Artifact files for a generated case.
//!
//! Both artifacts are first written to hidden temporary siblings and
//! only renamed into place once both writes succeeded, so an
//! interrupted run never leaves a truncated `.hex` file behind.
//!
//! Each rename is atomic on its own, but the pair is replaced one file
//! at a time: if the second rename fails, the new `_rand.hex` already
//! sits next to the previous `_coeffs.hex`. The error is returned and
//! no `.tmp` file is left in the directory; rerun the case to restore a
//! matching pair.

use super::{CaseParams, TestVectorCase, VectorError};
use crate::encoding::{self, WORD_BITS};
use crate::sampling::CbdSampler;
use std::fs;
use std::path::{Path, PathBuf};

/// Locations of the two artifacts for one eta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// `cbd_eta{eta}_rand.hex`
    pub rand: PathBuf,
    /// `cbd_eta{eta}_coeffs.hex`
    pub coeffs: PathBuf,
}

/// Result of writing a case.
#[derive(Debug, Clone)]
pub struct WrittenCase {
    /// Final locations of both artifacts.
    pub paths: ArtifactPaths,
    /// BLAKE3 digest of the randomness artifact.
    pub rand_digest: blake3::Hash,
    /// BLAKE3 digest of the coefficients artifact.
    pub coeffs_digest: blake3::Hash,
}

/// Returns the artifact paths for `eta` inside `dir`.
pub fn artifact_paths(dir: impl AsRef<Path>, eta: usize) -> ArtifactPaths {
    let dir = dir.as_ref();
    ArtifactPaths {
        rand: dir.join(format!("cbd_eta{}_rand.hex", eta)),
        coeffs: dir.join(format!("cbd_eta{}_coeffs.hex", eta)),
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> VectorError + '_ {
    move |source| VectorError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn remove_temps(temps: &[PathBuf]) {
    for temp in temps {
        let _ = fs::remove_file(temp);
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Writes both artifacts of `case` into `dir`, creating it if needed.
pub fn write_case(dir: impl AsRef<Path>, case: &TestVectorCase) -> Result<WrittenCase, VectorError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(io_error(dir))?;

    let paths = artifact_paths(dir, case.params().eta());
    let rand_text = case.rand_hex();
    let coeffs_text = case.coeffs_hex();

    let staged = [
        (paths.rand.as_path(), rand_text.as_str()),
        (paths.coeffs.as_path(), coeffs_text.as_str()),
    ];

    let mut temps = Vec::with_capacity(staged.len());
    for (path, text) in staged {
        let temp = temp_path(path);
        let result = fs::write(&temp, text);
        temps.push(temp);
        if let Err(e) = result {
            remove_temps(&temps);
            return Err(io_error(&temps[temps.len() - 1])(e));
        }
    }

    for (i, ((path, _), temp)) in staged.iter().zip(&temps).enumerate() {
        if let Err(e) = fs::rename(temp, path) {
            remove_temps(&temps[i..]);
            return Err(io_error(path)(e));
        }
    }

    let written = WrittenCase {
        rand_digest: blake3::hash(rand_text.as_bytes()),
        coeffs_digest: blake3::hash(coeffs_text.as_bytes()),
        paths,
    };

    tracing::info!(
        eta = case.params().eta(),
        coefficients = case.coefficients().len(),
        words = case.words().len(),
        rand = %written.paths.rand.display(),
        rand_blake3 = %written.rand_digest.to_hex(),
        coeffs_blake3 = %written.coeffs_digest.to_hex(),
        "Wrote case artifacts"
    );

    Ok(written)
}

/// Reads the artifacts for `params` back from `dir` and checks them.
///
/// The words are unpacked into a bitstream, the sampler is re-run over
/// it, and the result must match the coefficients file exactly.
pub fn verify_case(dir: impl AsRef<Path>, params: &CaseParams) -> Result<(), VectorError> {
    let eta = params.eta();
    let paths = artifact_paths(dir, eta);
    let mismatch = |reason: String| VectorError::Mismatch { eta, reason };

    let rand_text = fs::read_to_string(&paths.rand).map_err(io_error(&paths.rand))?;
    let coeffs_text = fs::read_to_string(&paths.coeffs).map_err(io_error(&paths.coeffs))?;

    let words = encoding::parse_words(&rand_text, WORD_BITS)?;
    let coeffs = encoding::parse_coefficients(&coeffs_text)?;

    let expected_words = encoding::word_count(params.padded_bits(), WORD_BITS)?;
    if words.len() != expected_words {
        return Err(mismatch(format!(
            "expected {} words, found {}",
            expected_words,
            words.len()
        )));
    }
    if coeffs.len() != params.count() {
        return Err(mismatch(format!(
            "expected {} coefficients, found {}",
            params.count(),
            coeffs.len()
        )));
    }

    let bitstream = encoding::unpack_words(&words, WORD_BITS, params.padded_bits())?;
    let resampled = CbdSampler::new(eta)?.sample(&bitstream, params.count())?;

    if let Some(index) = resampled.iter().zip(&coeffs).position(|(a, b)| a != b) {
        return Err(mismatch(format!(
            "coefficient {} is {} in file but {} from words",
            index, coeffs[index], resampled[index]
        )));
    }

    tracing::debug!(eta, "Self-check passed");
    Ok(())
}
