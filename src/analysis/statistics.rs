//! Bit and coefficient statistics for one case.

use crate::bitsource::Bitstream;

/// Statistics computed over a generated case.
#[derive(Debug, Clone)]
pub struct CaseStatistics {
    /// Bit bias of the full (padded) bitstream.
    pub bit_bias: f64,
    /// Mean coefficient value.
    pub mean: f64,
    /// Population variance of the coefficients.
    pub variance: f64,
    /// Variance of the ideal distribution, `eta / 2`.
    pub expected_variance: f64,
    /// Occurrences of each value from `-eta` to `eta`.
    pub histogram: Vec<usize>,
    /// Number of coefficients analyzed.
    pub sample_size: usize,
}

impl CaseStatistics {
    /// Analyzes a bitstream and the coefficients sampled from it.
    ///
    /// Coefficients outside `[-eta, eta]` are not counted in the histogram.
    pub fn analyze(stream: &Bitstream, coeffs: &[i32], eta: usize) -> Self {
        let bound = eta as i32;
        let mut histogram = vec![0usize; 2 * eta + 1];
        for &c in coeffs {
            if (-bound..=bound).contains(&c) {
                histogram[(c + bound) as usize] += 1;
            }
        }

        let (mean, variance) = Self::moments(coeffs);

        Self {
            bit_bias: stream.bit_bias(),
            mean,
            variance,
            expected_variance: eta as f64 / 2.0,
            histogram,
            sample_size: coeffs.len(),
        }
    }

    fn moments(coeffs: &[i32]) -> (f64, f64) {
        if coeffs.is_empty() {
            return (0.0, 0.0);
        }

        let n = coeffs.len() as f64;
        let mean = coeffs.iter().map(|&c| c as f64).sum::<f64>() / n;
        let variance = coeffs.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / n;

        (mean, variance)
    }

    /// Returns true if results look plausible (not proof of correctness).
    ///
    /// The mean must lie within four standard errors of zero and the bit
    /// bias within 0.1. Small samples always pass.
    pub fn looks_reasonable(&self) -> bool {
        if self.sample_size < 16 {
            return true;
        }
        let std_error = (self.expected_variance / self.sample_size as f64).sqrt();
        let mean_ok = self.mean.abs() <= 4.0 * std_error;
        let bias_ok = self.bit_bias.abs() < 0.1;

        mean_ok && bias_ok
    }
}
