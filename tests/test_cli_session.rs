//! The interactive session driven end to end with in-memory input.

use chrono::NaiveDate;
use contact_book::cli::Session;
use contact_book::{AddressBook, Config};
use std::io::Cursor;
use std::path::Path;

fn config_for(path: &Path) -> Config {
    Config {
        contacts_file: path.to_path_buf(),
        page_size: 2,
        ..Config::default()
    }
}

fn run(book: AddressBook, config: Config, script: &str, startup: bool) -> (AddressBook, String) {
    let mut output = Vec::new();
    let mut session = Session::new(book, config, Cursor::new(script), &mut output)
        .with_today(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    if startup {
        session.load_startup().unwrap();
    }
    session.run().unwrap();
    let book = session.into_book();
    (book, String::from_utf8(output).unwrap())
}

#[test]
fn test_startup_without_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("contacts.json"));

    let (book, output) = run(AddressBook::new(), config, "8\n", true);
    assert!(book.is_empty());
    assert!(output.starts_with("File not found. Starting with an empty address book.\n"));
}

#[test]
fn test_save_then_restart_restores_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    let script = "1\nAnn\n12345\n1990-05-01\n1\nBob\n\n\n6\n\n8\n";
    let (_, output) = run(AddressBook::new(), config_for(&path), script, true);
    assert!(output.contains("Address book saved to file."));
    assert!(path.exists());

    let (book, output) = run(AddressBook::new(), config_for(&path), "5\n\n8\n", true);
    assert_eq!(book.keys().collect::<Vec<_>>(), vec!["Ann", "Bob"]);
    assert!(output.contains("Page 1:\nName: Ann\nPhones: 12345\nBirthday: 1990-05-01\nDays to Birthday: 47"));
    assert!(!output.contains("Page 2:"));
}

#[test]
fn test_load_missing_file_keeps_book() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let mut book = AddressBook::new();
    book.add_record("Ann", &["1"], None).unwrap();

    let script = format!("7\n{}\n8\n", missing.display());
    let (book, output) = run(book, config_for(&missing), &script, false);
    assert!(output.contains("File not found. The address book was left unchanged."));
    assert_eq!(book.len(), 1);
}
