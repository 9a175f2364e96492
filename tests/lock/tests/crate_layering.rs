//! Build-graph layering: `ladder_kernel ← ladder_search ← ladder_harness`.
//!
//! Lower crates must not name higher ones in source or manifests, and the
//! kernel stays free of I/O and logging.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Scan all `.rs` files under a directory for forbidden patterns.
fn scan_rs_files(dir: &Path, forbidden: &[&str]) -> Vec<(String, usize, String)> {
    let mut violations = Vec::new();
    walk(dir, forbidden, &mut violations);
    violations
}

fn walk(dir: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, forbidden, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, forbidden, violations);
        }
    }
}

fn check_file(path: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        // Skip comments.
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in forbidden {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn assert_clean(crate_dir: &str, forbidden: &[&str]) {
    let src = workspace_root().join(crate_dir).join("src");
    let violations = scan_rs_files(&src, forbidden);
    if !violations.is_empty() {
        let mut msg = format!("forbidden references found in {crate_dir}/src:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

fn manifest_dependencies(crate_dir: &str) -> String {
    let cargo_toml = workspace_root().join(crate_dir).join("Cargo.toml");
    fs::read_to_string(&cargo_toml)
        .unwrap_or_else(|e| panic!("{crate_dir}/Cargo.toml must exist: {e}"))
        .lines()
        .filter(|line| !line.trim().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn kernel_source_is_self_contained() {
    assert_clean(
        "kernel",
        &["ladder_search", "ladder_harness", "tracing::", "std::fs", "std::io"],
    );
}

#[test]
fn search_source_does_not_reach_up() {
    assert_clean("search", &["ladder_harness", "std::fs"]);
}

#[test]
fn manifests_follow_the_layering() {
    let kernel = manifest_dependencies("kernel");
    for forbidden in ["ladder-search", "ladder-harness", "tracing"] {
        assert!(
            !kernel.contains(forbidden),
            "kernel/Cargo.toml depends on {forbidden}"
        );
    }
    let search = manifest_dependencies("search");
    assert!(
        !search.contains("ladder-harness"),
        "search/Cargo.toml depends on ladder-harness"
    );
}
