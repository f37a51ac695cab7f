//! End-to-end tests: generate cases, write them, read them back.

use cbd_vectors::config::GenerationConfig;
use cbd_vectors::encoding::{self, WORD_BITS};
use cbd_vectors::sampling;
use cbd_vectors::vectors::{self, artifact_paths, CaseParams, TestVectorCase, VectorError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_run_writes_both_etas() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    let written = vectors::generate_all(dir, &GenerationConfig::default(), true).unwrap();
    assert_eq!(written.len(), 2);

    // eta=2: 64 * 4 = 256 bits -> 2 words; eta=3: 64 * 6 = 384 bits -> 3 words
    for (eta, expected_words) in [(2, 2), (3, 3)] {
        let paths = artifact_paths(dir, eta);
        let rand = fs::read_to_string(&paths.rand).unwrap();
        let coeffs = fs::read_to_string(&paths.coeffs).unwrap();

        assert_eq!(rand.lines().count(), expected_words);
        assert!(rand.lines().all(|l| l.len() == 32));
        assert_eq!(coeffs.lines().count(), 64);
        assert!(coeffs.lines().all(|l| l.len() == 2));
    }

    assert!(fs::read_dir(dir)
        .unwrap()
        .all(|e| !e.unwrap().file_name().to_string_lossy().ends_with(".tmp")));
}

#[test]
fn test_output_dir_created_if_absent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("nested").join("out");
    assert!(!dir.exists());

    vectors::generate_all(&dir, &GenerationConfig::default(), false).unwrap();

    assert!(artifact_paths(&dir, 3).coeffs.exists());
}

#[test]
fn test_two_runs_are_byte_identical() {
    let first = TempDir::new().expect("Failed to create temp dir");
    let second = TempDir::new().expect("Failed to create temp dir");
    let config = GenerationConfig::default();

    let a = vectors::generate_all(first.path(), &config, false).unwrap();
    let b = vectors::generate_all(second.path(), &config, false).unwrap();

    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.rand_digest, y.rand_digest);
        assert_eq!(x.coeffs_digest, y.coeffs_digest);
        assert_eq!(
            fs::read(&x.paths.coeffs).unwrap(),
            fs::read(&y.paths.coeffs).unwrap()
        );
    }
}

#[test]
fn test_words_file_reproduces_coefficients_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    let config = GenerationConfig {
        coeff_count: 100,
        seed: 9,
        etas: vec![2, 3, 5],
    };
    vectors::generate_all(dir, &config, false).unwrap();

    for &eta in &config.etas {
        let paths = artifact_paths(dir, eta);
        let words =
            encoding::parse_words(&fs::read_to_string(&paths.rand).unwrap(), WORD_BITS).unwrap();
        let coeffs =
            encoding::parse_coefficients(&fs::read_to_string(&paths.coeffs).unwrap()).unwrap();

        let bits = encoding::unpack_words(&words, WORD_BITS, words.len() * 128).unwrap();
        assert_eq!(sampling::sample(&bits, eta, 100).unwrap(), coeffs);
    }
}

#[test]
fn test_zero_count_writes_empty_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    let config = GenerationConfig {
        coeff_count: 0,
        ..Default::default()
    };
    vectors::generate_all(dir, &config, true).unwrap();

    let paths = artifact_paths(dir, 2);
    assert_eq!(fs::read_to_string(&paths.coeffs).unwrap(), "");
    assert_eq!(fs::read_to_string(&paths.rand).unwrap(), "");
}

#[test]
fn test_negative_count_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("out");
    let config = GenerationConfig {
        coeff_count: -3,
        ..Default::default()
    };

    let result = vectors::generate_all(&dir, &config, false);
    assert!(matches!(result, Err(VectorError::Config(_))));
    assert!(!dir.exists());

    assert!(matches!(
        CaseParams::new(2, -3, 1),
        Err(VectorError::InvalidArgument(_))
    ));
}

#[test]
fn test_oversized_case_is_an_error_not_a_panic() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("out");

    let huge_eta = GenerationConfig {
        coeff_count: 1,
        seed: 1,
        etas: vec![usize::MAX],
    };
    assert!(matches!(
        vectors::generate_all(&dir, &huge_eta, false),
        Err(VectorError::InvalidArgument(_))
    ));

    let huge_count = GenerationConfig {
        coeff_count: i64::MAX,
        seed: 1,
        etas: vec![3],
    };
    assert!(matches!(
        vectors::generate_all(&dir, &huge_count, false),
        Err(VectorError::InvalidArgument(_))
    ));

    assert!(!dir.exists());
}

#[test]
fn test_self_check_detects_tampering() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    let params = CaseParams::new(2, 16, 42).unwrap();
    let case = TestVectorCase::generate(params).unwrap();
    let written = vectors::write_case(dir, &case).unwrap();
    vectors::verify_case(dir, &params).unwrap();

    let mut coeffs = case.coefficients().to_vec();
    coeffs[5] = if coeffs[5] == 0 { 1 } else { 0 };
    fs::write(&written.paths.coeffs, encoding::render_coefficients(&coeffs)).unwrap();

    assert!(matches!(
        vectors::verify_case(dir, &params),
        Err(VectorError::Mismatch { eta: 2, .. })
    ));

    fs::write(&written.paths.coeffs, "00\n").unwrap();
    assert!(matches!(
        vectors::verify_case(dir, &params),
        Err(VectorError::Mismatch { .. })
    ));
}

#[test]
fn test_verify_missing_files_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let params = CaseParams::new(3, 4, 1).unwrap();
    assert!(matches!(
        vectors::verify_case(temp_dir.path(), &params),
        Err(VectorError::Io { .. })
    ));
}
