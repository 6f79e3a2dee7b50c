use mcq_extract::error::{AppError, DocumentError, FileError};
use mcq_extract::{logger, App, Config};
use std::fs;
use std::path::{Path, PathBuf};
use tokio_test::{assert_err, assert_ok};

const RUST_BASICS: &str = "\
Source: https://www.sanfoundry.com/rust-basics/
Rust Questions and Answers - Basics

1. Which keyword declares an immutable
binding?
a) var
b) let
c) mut
d) const
Answer: b

2. What does cargo build do, by default?
a) Compiles in debug mode
b) Publishes the crate
Answer: a
";

const RUST_TRAITS: &str = "\
1. Which trait enables the ? operator on Option?
a) Try
b) From
c) Into
d) Deref
Answer: a
";

/// 为每个测试准备独立的临时目录
fn workspace(name: &str) -> (PathBuf, PathBuf) {
    let root = std::env::temp_dir().join(format!("mcq_it_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&root);
    let input = root.join("input");
    let output = root.join("output");
    fs::create_dir_all(&input).unwrap();
    (input, output)
}

fn config_for(output: &Path) -> Config {
    Config {
        output_dir: output.display().to_string(),
        max_concurrent_documents: 2,
        ..Config::default()
    }
}

fn cleanup(input: &Path) {
    if let Some(root) = input.parent() {
        let _ = fs::remove_dir_all(root);
    }
}

#[tokio::test]
async fn test_batch_mode_writes_per_topic_and_combined_tables() {
    logger::init(false);
    let (input, output) = workspace("batch");
    fs::write(input.join("rust-basics.txt"), RUST_BASICS).unwrap();
    fs::write(input.join("rust-traits.txt"), RUST_TRAITS).unwrap();
    fs::write(input.join("empty.txt"), "\n   \n").unwrap();
    fs::write(input.join("no-questions.txt"), "Just a header\nand a footer\n").unwrap();
    fs::write(input.join("notes.md"), "1. not a document").unwrap();

    let app = App::new(config_for(&output));
    let summary = assert_ok!(app.run(&input).await);

    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.total_records, 3);

    let basics = fs::read_to_string(output.join("rust-basics.csv")).unwrap();
    let mut rows = basics.lines();
    assert_eq!(
        rows.next(),
        Some("Topic,Question,Option A,Option B,Option C,Option D,Answer")
    );
    assert_eq!(
        rows.next(),
        Some("rust-basics,Which keyword declares an immutable binding?,var,let,mut,const,b")
    );
    assert_eq!(
        rows.next(),
        Some("rust-basics,\"What does cargo build do, by default?\",Compiles in debug mode,Publishes the crate,,,a")
    );

    let combined_path = summary.combined.unwrap();
    assert_eq!(combined_path, output.join("all_topics.csv"));
    let combined = fs::read_to_string(combined_path).unwrap();
    let topics: Vec<&str> = combined
        .lines()
        .skip(1)
        .map(|row| row.split(',').next().unwrap())
        .collect();
    assert_eq!(topics, vec!["rust-basics", "rust-basics", "rust-traits"]);

    assert!(!output.join("empty.csv").exists());
    assert!(!output.join("no-questions.csv").exists());

    cleanup(&input);
}

#[tokio::test]
async fn test_single_file_mode_has_no_topic_column() {
    let (input, output) = workspace("single");
    let doc = input.join("rust-traits.txt");
    fs::write(&doc, RUST_TRAITS).unwrap();

    let app = App::new(config_for(&output));
    let summary = assert_ok!(app.run(&doc).await);

    assert_eq!(summary.written, 1);
    assert_eq!(summary.total_records, 1);
    assert!(summary.combined.is_none());

    let table = fs::read_to_string(output.join("rust-traits.csv")).unwrap();
    assert_eq!(
        table,
        "Question,Option A,Option B,Option C,Option D,Answer\n\
         Which trait enables the ? operator on Option?,Try,From,Into,Deref,a\n"
    );

    cleanup(&input);
}

#[tokio::test]
async fn test_single_file_without_questions_is_fatal() {
    let (input, output) = workspace("single_empty");
    let doc = input.join("header-only.txt");
    fs::write(&doc, "Rust Questions and Answers\n").unwrap();

    let app = App::new(config_for(&output));
    let err = assert_err!(app.run(&doc).await);
    assert!(matches!(
        err,
        AppError::Document(DocumentError::NoQuestions { .. })
    ));

    cleanup(&input);
}

#[tokio::test]
async fn test_missing_input_is_fatal() {
    let (input, output) = workspace("missing");

    let app = App::new(config_for(&output));
    let err = assert_err!(app.run(&input.join("does-not-exist")).await);
    assert!(matches!(err, AppError::File(FileError::NotFound { .. })));

    cleanup(&input);
}

#[tokio::test]
async fn test_empty_folder_still_writes_combined_header() {
    let (input, output) = workspace("empty_folder");

    let app = App::new(config_for(&output));
    let summary = assert_ok!(app.run(&input).await);

    assert_eq!(summary.written, 0);
    let combined = fs::read_to_string(output.join("all_topics.csv")).unwrap();
    assert_eq!(
        combined,
        "Topic,Question,Option A,Option B,Option C,Option D,Answer\n"
    );

    cleanup(&input);
}

#[tokio::test]
async fn test_document_named_like_combined_table_is_skipped() {
    let (input, output) = workspace("combined_clash");
    fs::write(input.join("all_topics.txt"), RUST_BASICS).unwrap();
    fs::write(input.join("rust-traits.txt"), RUST_TRAITS).unwrap();

    let app = App::new(config_for(&output));
    let summary = assert_ok!(app.run(&input).await);

    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.total_records, 1);

    let combined = fs::read_to_string(output.join("all_topics.csv")).unwrap();
    let rows: Vec<&str> = combined.lines().skip(1).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("rust-traits,"));

    cleanup(&input);
}
