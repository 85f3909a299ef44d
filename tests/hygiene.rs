//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the crate source tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first. The budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics. These crash the page's whole behavior layer.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss: discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

// Leaked closures live for the whole page; only the listener and observer
// helpers may create them.
const MAX_CLOSURE_FORGET: usize = 3;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn is_browser_shell(path: &str) -> bool {
    Path::new(path).components().any(|c| c.as_os_str() == "web")
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if count > 0 {
                Some((file.path.clone(), count))
            } else {
                None
            }
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_budget(pattern: &str, label: &str, max: usize) {
    let files = source_files();
    let hits = count_in_source(&files, pattern);
    let count = total(&hits);
    assert!(
        count <= max,
        "{label} budget exceeded: found {count}, max {max}.\n{}",
        format_hits(&hits)
    );
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", ".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", ".expect()", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", "panic!()", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", "unreachable!()", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", "todo!()", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", "unimplemented!()", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", "let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", ".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", "#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

#[test]
fn closure_forget_budget() {
    assert_budget(".forget()", ".forget()", MAX_CLOSURE_FORGET);
}

#[test]
fn pure_modules_stay_off_browser_apis() {
    let files = source_files();
    let offenders = files
        .iter()
        .filter(|f| !is_browser_shell(&f.path) && !f.path.ends_with("lib.rs"))
        .filter(|f| {
            ["web_sys", "js_sys", "wasm_bindgen", "gloo_"]
                .iter()
                .any(|needle| f.content.contains(needle))
        })
        .map(|f| f.path.clone())
        .collect::<Vec<_>>();
    assert!(
        offenders.is_empty(),
        "browser APIs outside src/web:\n  {}",
        offenders.join("\n  ")
    );
}

#[test]
fn every_module_has_a_doc_header() {
    let files = source_files();
    let missing = files
        .iter()
        .filter(|f| !f.content.trim_start().starts_with("//!"))
        .map(|f| f.path.clone())
        .collect::<Vec<_>>();
    assert!(missing.is_empty(), "modules without a //! header:\n  {}", missing.join("\n  "));
}

#[test]
fn public_fallible_functions_document_errors() {
    let files = source_files();
    let mut missing = Vec::new();
    for file in &files {
        let lines = file.content.lines().collect::<Vec<_>>();
        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim_start();
            let is_pub_fn = trimmed.starts_with("pub fn ") || trimmed.starts_with("pub async fn ");
            if !is_pub_fn {
                continue;
            }
            // Signature may wrap; read up to the opening brace.
            let signature = lines[i..]
                .iter()
                .take_while(|l| !l.trim_end().ends_with('{'))
                .chain(lines[i..].iter().find(|l| l.trim_end().ends_with('{')))
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            if !signature.contains("-> Result<") {
                continue;
            }
            let documented = lines[..i]
                .iter()
                .rev()
                .take_while(|l| {
                    let l = l.trim_start();
                    l.starts_with("///") || l.starts_with("#[")
                })
                .any(|l| l.contains("# Errors"));
            if !documented {
                missing.push(format!("{}:{}", file.path, i + 1));
            }
        }
    }
    assert!(missing.is_empty(), "missing `# Errors` docs:\n  {}", missing.join("\n  "));
}
