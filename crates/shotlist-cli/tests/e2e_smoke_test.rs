use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use shotlist_cli::{Args, Format, run};

/// Demo documents live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("crate is two levels below the workspace root")
        .join("demos")
}

/// Collects all .html files from a directory
fn collect_html_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("html")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path, format: Format) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        format,
        href: false,
        no_decorator: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_html_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        for format in [Format::Outline, Format::Cards] {
            let output_filename = format!(
                "{}.{format:?}.txt",
                demo_path.file_stem().unwrap_or_default().to_string_lossy()
            );
            let output_path = temp_dir.path().join(output_filename);

            match run(&args_for(demo_path, &output_path, format)) {
                Ok(()) if output_path.exists() => {}
                Ok(()) => failed_demos.push((demo_path.clone(), "no output written".to_string())),
                Err(e) => failed_demos.push((demo_path.clone(), e.to_string())),
            }
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo run(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_html_files(demos_dir().join("errors"));
    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.txt",
            demo_path.file_stem().unwrap_or_default().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, &output_path, Format::Outline)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_outline_of_browserjam_demo() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("browserjam.html");
    let output = temp_dir.path().join("browserjam.txt");

    let mut args = args_for(&input, &output, Format::Outline);
    args.href = true;
    run(&args).expect("browserjam demo should lay out");

    let outline = fs::read_to_string(&output).expect("Failed to read output");
    let mut lines = outline.lines();

    assert_eq!(lines.next(), Some("Browser Jam 001"));
    assert_eq!(lines.next(), Some("  h1"));
    assert_eq!(lines.next(), Some("    h1: Welcome to Browser Jam!"));
    assert!(outline.contains("  dl\n"));
    assert!(outline.contains("[Discord](https://discord.gg/browserjam)"));
}
