use {
    std::{io::Write, sync::Arc},
    tempfile::NamedTempFile,
    openlib_loader_core::{
        config::AuthorImportStepConfig,
        store::{CatalogStore, MemoryCatalog},
    },
    openlib_loader_steps::author_import::author_import_step,
};

fn dump_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

fn step_config(dump_path: &str) -> AuthorImportStepConfig {
    toml::from_str(&format!("enabled = true\ndump_path = \"{}\"", dump_path)).unwrap()
}

#[tokio::test]
async fn loads_authors_from_dump() {
    let dump = dump_file(&[
        r#"{"key": "/authors/OL1A", "name": "Jane Doe", "personal_name": "Jane"}"#,
        "/type/author\t/authors/OL2A\t1\t2008-04-01T03:28:50.625462\t{\"key\": \"/authors/OL2A\", \"name\": \"John Roe\"}",
    ]);
    let store = Arc::new(MemoryCatalog::new());

    author_import_step(&step_config(dump.path().to_str().unwrap()), store.clone()).await.unwrap();

    let jane = store.author_by_id("OL1A").await.unwrap().unwrap();
    assert_eq!(jane.name(), "Jane Doe");
    assert_eq!(jane.personal_name(), "Jane");

    let john = store.author_by_id("OL2A").await.unwrap().unwrap();
    assert_eq!(john.name(), "John Roe");
    assert_eq!(john.personal_name(), "");
}

#[tokio::test]
async fn malformed_line_does_not_stop_the_pass() {
    let dump = dump_file(&[
        r#"{"key": "/authors/OL1A", "name": "Jane Doe"}"#,
        r#"{"key": "/authors/OL2A", "name": "#,
        "not a json line at all",
        r#"{"key": "/authors/OL3A", "name": "John Roe"}"#,
    ]);
    let store = Arc::new(MemoryCatalog::new());

    author_import_step(&step_config(dump.path().to_str().unwrap()), store.clone()).await.unwrap();

    assert!(store.author_by_id("OL1A").await.unwrap().is_some());
    assert!(store.author_by_id("OL2A").await.unwrap().is_none());
    assert!(store.author_by_id("OL3A").await.unwrap().is_some());
}

#[tokio::test]
async fn author_without_key_is_saved_with_empty_id() {
    let dump = dump_file(&[r#"{"name": "Jane Doe"}"#]);
    let store = Arc::new(MemoryCatalog::new());

    author_import_step(&step_config(dump.path().to_str().unwrap()), store.clone()).await.unwrap();

    assert_eq!(store.author_by_id("").await.unwrap().unwrap().name(), "Jane Doe");
}

#[tokio::test]
async fn missing_dump_file_ends_the_pass_without_failing_the_run() {
    let store = Arc::new(MemoryCatalog::new());

    author_import_step(&step_config("/nonexistent/authors.txt"), store.clone()).await.unwrap();

    assert!(store.author_by_id("OL1A").await.unwrap().is_none());
}

#[tokio::test]
async fn disabled_step_reads_nothing() {
    let dump = dump_file(&[r#"{"key": "/authors/OL1A", "name": "Jane Doe"}"#]);
    let store = Arc::new(MemoryCatalog::new());

    let config: AuthorImportStepConfig = toml::from_str(
        &format!("enabled = false\ndump_path = \"{}\"", dump.path().to_str().unwrap()),
    ).unwrap();
    author_import_step(&config, store.clone()).await.unwrap();

    assert!(store.author_by_id("OL1A").await.unwrap().is_none());
}
