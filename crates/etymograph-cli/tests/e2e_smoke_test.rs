use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use etymograph_cli::{Args, Format, run};

/// Samples live at the workspace root, not in the crate
fn samples_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

/// Collects all .ety files from a directory
fn collect_ety_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("ety")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        format: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let samples = collect_ety_files(samples_dir());
    assert!(!samples.is_empty(), "No samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &samples {
        let stem = sample_path.file_stem().unwrap().to_string_lossy();
        for extension in ["svg", "json"] {
            let output_path = temp_dir.path().join(format!("{stem}.{extension}"));

            match run(&args(sample_path, &output_path)) {
                Ok(()) => {
                    let written = fs::read_to_string(&output_path).unwrap();
                    assert!(!written.is_empty(), "{} is empty", output_path.display());
                }
                Err(e) => failed_samples.push((sample_path.clone(), e)),
            }
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nSamples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} sample run(s) failed unexpectedly", failed_samples.len());
    }
}

#[test]
fn e2e_json_output_shape() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("problem.out");

    let mut args = args(&samples_dir().join("problem.ety"), &output_path);
    args.format = Some(Format::Json);
    run(&args).unwrap();

    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("\"nodes\""));
    assert!(written.contains("\"edges\""));
    assert!(written.contains("English problem"));
}

#[test]
fn e2e_sample_config() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("problem.svg");

    let mut args = args(&samples_dir().join("problem.ety"), &output_path);
    args.config = Some(samples_dir().join("config.toml").to_string_lossy().to_string());
    run(&args).unwrap();

    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.starts_with("<svg"));
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().unwrap();
    let args = args(
        &temp_dir.path().join("absent.ety"),
        &temp_dir.path().join("out.svg"),
    );

    assert!(run(&args).is_err());
    assert!(!temp_dir.path().join("out.svg").exists());
}

#[test]
fn e2e_empty_document_renders() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("empty.ety");
    fs::write(&input, "No derivation sections here.").unwrap();
    let output = temp_dir.path().join("empty.json");

    run(&args(&input, &output)).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let compact: String = written.split_whitespace().collect();
    assert_eq!(compact, r#"{"nodes":[],"edges":[]}"#);
}
