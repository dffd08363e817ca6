//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the client crate source tree for patterns that would let
//! the page panic during hydration or swallow errors. Each pattern has a
//! budget. If you must add one, fix an existing one first; budgets never grow.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

// Panics abort the WASM module and leave the page half-hydrated.
const PANIC_BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

// Silent loss: discards errors without inspecting them.
// `.ok()` allowances: `Response::ok()` status check in `net/api.rs`, and the
// email regex literal in `state/contact.rs`, which always compiles.
const DISCARD_BUDGETS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 2 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

/// Production `.rs` files under `src/` as `(path, content)`, skipping `*_test.rs`.
fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path_str, content));
        }
    }
}

/// Production lines that contain `pattern`.
fn hits(files: &[(String, String)], pattern: &str) -> Vec<String> {
    let mut found = Vec::new();
    for (path, content) in files {
        for (idx, line) in content.lines().enumerate() {
            if line.contains(pattern) {
                found.push(format!("  {path}:{}: {}", idx + 1, line.trim()));
            }
        }
    }
    found
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        assert!(
            found.len() <= budget.max,
            "`{}` budget exceeded: found {}, max {}.\n{}",
            budget.pattern,
            found.len(),
            budget.max,
            found.join("\n")
        );
    }
}

#[test]
fn panic_budgets() {
    check(PANIC_BUDGETS);
}

#[test]
fn discard_budgets() {
    check(DISCARD_BUDGETS);
}
