use super::*;

use std::sync::atomic::{AtomicU32, Ordering};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Write `contents` to a fresh file in the system temp dir.
async fn temp_file(contents: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("memorial-data-test-{}-{n}.json", std::process::id()));
    tokio::fs::write(&path, contents).await.unwrap();
    path
}

const VALID: &str = r#"[
    {"id":1,"name":"A","date":"2020-05-09","year":1942,"region":"ленинград","tags":["блокада"],
     "shortText":"s","fullText":"f","image":"i.jpg","ageIn1945":"12 лет"},
    {"id":2,"name":"B","date":"2020-05-10","year":1944,"region":"москва","tags":[],
     "shortText":"s","fullText":"f","image":"j.jpg","ageIn1945":"7 лет"}
]"#;

#[tokio::test]
async fn load_memories_reads_valid_file() {
    let path = temp_file(VALID).await;
    let records = load_memories(&path).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].region, "москва");
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn load_memories_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("memorial-data-test-does-not-exist.json");
    let err = load_memories(&path).await.unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
    assert!(err.to_string().contains("memorial-data-test-does-not-exist.json"));
}

#[tokio::test]
async fn load_memories_schema_mismatch_is_archive_error() {
    let path = temp_file(r#"[{"id": 1}]"#).await;
    let err = load_memories(&path).await.unwrap_err();
    assert!(matches!(err, DataError::Archive(ArchiveError::Decode(_))));
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn report_memories_counts_records() {
    let path = temp_file(VALID).await;
    assert_eq!(report_memories(&path).await, Some(2));
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn report_memories_tolerates_broken_file() {
    let path = temp_file("not json").await;
    assert_eq!(report_memories(&path).await, None);
    tokio::fs::remove_file(&path).await.unwrap();
}
