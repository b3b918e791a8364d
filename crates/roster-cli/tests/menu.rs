//! Interactive loop driven from in-memory input.

mod common;

use std::io::Cursor;

use roster_cli::dispatch::FAREWELL_MESSAGE;
use roster_cli::menu::{MENU_TITLE, run_menu, write_menu};
use roster_cli::session::Session;
use roster_ingest::{FallbackSource, FileSource};

use common::embedded_session;

fn drive(session: &Session, input: &str) -> String {
    let mut out = Vec::new();
    run_menu(session, Cursor::new(input.as_bytes()), &mut out).expect("menu loop");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn menu_lists_every_option() {
    let mut out = Vec::new();
    write_menu(&mut out).expect("write menu");
    let menu = String::from_utf8(out).expect("utf-8 output");
    insta::assert_snapshot!(menu.trim(), @r"
    === Cost Calculator - MoneyWise ===
    1. Total cost by department
    2. Average cost per active employee
    3. Most and least costly department
    4. Efficiency by experience year
    5. Best cost-benefit
    6. Savings projection
    0. Exit the program
    ");
}

#[test]
fn answers_then_exits() {
    let output = drive(&embedded_session(), "2\n0\n");
    assert_eq!(output.matches(MENU_TITLE).count(), 2);
    assert!(output.contains("Choose an option: \nAverage cost per active employee: R$ 11430.00\n"));
    assert!(output.ends_with(&format!("\n{FAREWELL_MESSAGE}\n")));
}

#[test]
fn invalid_tokens_keep_the_loop_running() {
    let output = drive(&embedded_session(), "7\n99\nexit\nignored\n");
    assert!(output.contains("Invalid option or unrecognized command."));
    assert!(output.contains("o segredo está nos pequenos detalhes..."));
    assert_eq!(output.matches(MENU_TITLE).count(), 3);
}

#[test]
fn end_of_input_stops_quietly() {
    let output = drive(&embedded_session(), "1\n");
    assert!(output.contains("IT: R$ 22860.00"));
    assert!(output.ends_with("Choose an option: \n"));
}

#[test]
fn unreadable_sources_end_the_loop_with_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = FallbackSource::new(
        FileSource::new(dir.path().join("a.csv")),
        FileSource::new(dir.path().join("b.csv")),
    );
    let session = Session::with_source(Box::new(source), 3);
    let mut out = Vec::new();
    let error = run_menu(&session, Cursor::new("1\n0\n"), &mut out).expect_err("no source");
    assert!(format!("{error:#}").starts_with("load roster from every configured source"));
}
