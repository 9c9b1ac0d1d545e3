//! Integration tests for the Bookz CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Write a catalog with `n` books and return its path
fn create_test_catalog(dir: &TempDir, n: usize) -> std::path::PathBuf {
    let books: Vec<Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "id": format!("b{}", i),
                "title": format!("Practice Set {}", i),
                "author": if i % 2 == 0 { "R.S. Aggarwal" } else { "Norman Lewis" },
                "category": if i % 2 == 0 { "REASONING" } else { "GENERAL ENGLISH" },
                "coverUrl": format!("https://covers.example/{}.jpg", i),
                "description": ""
            })
        })
        .collect();
    let path = dir.path().join("books.json");
    fs::write(&path, serde_json::to_string(&books).unwrap()).expect("Failed to write test file");
    path
}

fn bookz() -> Command {
    Command::cargo_bin("bookz-cli").unwrap()
}

#[test]
fn test_help() {
    bookz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("quiz-url"));
}

#[test]
fn test_version() {
    bookz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookz"));
}

#[test]
fn test_browse_help() {
    bookz()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse one page"))
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--page-size"));
}

#[test]
fn test_browse_invalid_page() {
    bookz()
        .args(["browse", "books.json", "--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_browse_nonexistent_file() {
    bookz()
        .args(["browse", "/nonexistent/books.json", "--no-warmup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to load books. Please try again later.",
        ));
}

#[test]
fn test_browse_last_page_json() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 13);

    let output = bookz()
        .args([
            "browse",
            catalog.to_str().unwrap(),
            "--page",
            "3",
            "--no-warmup",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["totalPages"], 3);
    assert_eq!(view["items"].as_array().unwrap().len(), 1);
    assert_eq!(view["items"][0]["id"], "b12");
}

#[test]
fn test_browse_with_warmup_and_filters() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 10);

    bookz()
        .args([
            "browse",
            catalog.to_str().unwrap(),
            "--query",
            "aggarwal",
            "--category",
            "REASONING",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 / 1 (5 books)"))
        .stdout(predicate::str::contains("[b0] Practice Set 0 by R.S. Aggarwal"))
        .stdout(predicate::str::contains("Norman Lewis").not());
}

#[test]
fn test_browse_no_matches() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 3);

    bookz()
        .args(["browse", catalog.to_str().unwrap(), "-q", "zzz", "--no-warmup"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No books found. Try adjusting your search or filters.",
        ));
}

#[test]
fn test_browse_interactive_navigation() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 13);

    bookz()
        .args(["browse", catalog.to_str().unwrap(), "--no-warmup", "--interactive"])
        .write_stdin("n\nn\nn\nq norman\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 / 3"))
        .stdout(predicate::str::contains("Page 3 / 3"))
        .stdout(predicate::str::contains("Page 1 / 1 (6 books)"));
}

#[test]
fn test_show_book() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 3);

    bookz()
        .args(["show", catalog.to_str().unwrap(), "b1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Practice Set 1"))
        .stdout(predicate::str::contains("Norman Lewis"));
}

#[test]
fn test_show_missing_book() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 3);

    bookz()
        .args(["show", catalog.to_str().unwrap(), "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No book with id nope"));
}

#[test]
fn test_categories_json() {
    let output = bookz().args(["categories", "--json"]).output().unwrap();
    assert!(output.status.success());

    let groups: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(groups["main"].as_array().unwrap().len(), 4);
    assert_eq!(groups["more"].as_array().unwrap().len(), 0);
}

#[test]
fn test_validate_valid_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 4);

    bookz()
        .args(["validate", catalog.to_str().unwrap(), "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is valid (4 books)"));
}

#[test]
fn test_validate_duplicate_ids() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dupes.json");
    fs::write(
        &path,
        r#"[{"id":"1","title":"A","author":"X","category":"REASONING"},
            {"id":"1","title":"B","author":"Y","category":"REASONING"}]"#,
    )
    .unwrap();

    bookz()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Duplicate id: 1"));
}

#[test]
fn test_validate_nonexistent_file() {
    bookz()
        .args(["validate", "/nonexistent/books.json"])
        .assert()
        .failure();
}

#[test]
fn test_quiz_url() {
    bookz()
        .args(["quiz-url", "--production"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/bookz/quiz-app/index.html"));

    bookz()
        .arg("quiz-url")
        .assert()
        .success()
        .stdout(predicate::str::diff("/quiz-app/index.html\n"));
}
