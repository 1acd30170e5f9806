//! Parse-then-execute tests for the `edit` command against an in-memory book.

mod common;

use common::*;
use std::collections::BTreeSet;
use startbook::{CommandError, EditCommandParser, FundingStage, StartupBook};

fn run(book: &mut StartupBook, args: &str) -> Result<String, CommandError> {
    let command = EditCommandParser::new()
        .parse(args)
        .unwrap_or_else(|e| panic!("{:?} should parse: {}", args, e));
    command.execute(book).map(|result| result.feedback)
}

#[test]
fn test_edit_all_fields_replaces_record() {
    let mut book = typical_book();
    let feedback = run(
        &mut book,
        "1 n/Delta Robotics p/91234567 e/hi@delta.ai a/2 Science Park Dr i/Robotics f/c v/50000000 t/hardware",
    )
    .unwrap();

    let edited = book.get(0).unwrap();
    assert_eq!(edited.name.as_str(), "Delta Robotics");
    assert_eq!(edited.funding_stage, FundingStage::SeriesC);
    assert_eq!(edited.tags, [tag("hardware")].into_iter().collect::<BTreeSet<_>>());
    assert_eq!(feedback, format!("Edited Startup: {}", edited));
    assert_eq!(book.len(), 3);
}

#[test]
fn test_edit_some_fields_keeps_the_rest() {
    let mut book = typical_book();
    let before = book.get(1).unwrap().clone();

    run(&mut book, "2 p/90001111 v/2500000.25").unwrap();

    let after = book.get(1).unwrap();
    assert_eq!(after.phone.as_str(), "90001111");
    assert_eq!(after.valuation.as_str(), "2500000.25");
    assert_eq!(after.name, before.name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.tags, before.tags);
}

#[test]
fn test_edit_empty_tag_clears_tags() {
    let mut book = typical_book();
    run(&mut book, "2 t/").unwrap();
    assert!(book.get(1).unwrap().tags.is_empty());
}

#[test]
fn test_edit_tags_replace_rather_than_merge() {
    let mut book = typical_book();
    run(&mut book, "2 t/b2b").unwrap();
    assert_eq!(book.get(1).unwrap().tags, [tag("b2b")].into_iter().collect::<BTreeSet<_>>());
}

#[test]
fn test_edit_index_past_end_is_rejected() {
    let mut book = typical_book();
    let before = book.clone();

    let err = run(&mut book, "4 n/Omega").unwrap_err();
    assert_eq!(err, CommandError::InvalidIndex);
    assert_eq!(err.to_string(), "The startup index provided is invalid");
    assert_eq!(book, before);
}

#[test]
fn test_edit_to_existing_name_is_rejected() {
    let mut book = typical_book();
    let before = book.clone();

    let err = run(&mut book, "3 n/Alpha Labs").unwrap_err();
    assert_eq!(err, CommandError::DuplicateStartup);
    assert_eq!(err.to_string(), "This startup already exists in the address book.");
    assert_eq!(book, before);
}

#[test]
fn test_edit_loaded_book() {
    let mut book = StartupBook::from_json_str(TYPICAL_BOOK_JSON).unwrap();
    let feedback = run(&mut book, "2 e/hello@beta.com").unwrap();
    assert!(
        feedback.contains("Email: hello@beta.com"),
        "unexpected feedback: {}",
        feedback
    );
}
