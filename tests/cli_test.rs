use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_propdump"))
        .current_dir(dir)
        .output()
        .expect("failed to run propdump")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout was not UTF-8")
}

#[test]
fn prints_listing_then_dump() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("debug.properties"),
        "host=localhost\nport=7171\n",
    )
    .unwrap();

    let output = run_in(dir.path());
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "-- listing properties --\nhost=localhost\nport=7171\n{host=localhost, port=7171}\n"
    );
}

#[test]
fn every_key_appears_in_the_dump() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("debug.properties"),
        "a=1\nb=2\nc=3\nd=4\ne=5\n",
    )
    .unwrap();

    let stdout = stdout_of(&run_in(dir.path()));
    let dump = stdout.lines().last().unwrap();
    assert!(dump.starts_with('{') && dump.ends_with('}'));
    assert_eq!(dump[1..dump.len() - 1].split(", ").count(), 5);
    for entry in ["a=1", "b=2", "c=3", "d=4", "e=5"] {
        assert!(dump.contains(entry), "{} missing from {}", entry, dump);
    }
}

#[test]
fn escaped_values_are_printed_decoded() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("debug.properties"),
        "greeting=Hello\\=World\n",
    )
    .unwrap();

    let stdout = stdout_of(&run_in(dir.path()));
    assert!(stdout.contains("greeting=Hello=World"));
    assert!(!stdout.contains("Hello\\=World"));
}

#[test]
fn missing_file_prints_only_the_generic_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path());
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Some error occurred\n");
}

#[test]
fn empty_file_prints_empty_listing_and_dump() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("debug.properties"), "").unwrap();

    let output = run_in(dir.path());
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-- listing properties --\n{}\n");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("debug.properties"),
        "# comment\n\nkey=value\n",
    )
    .unwrap();

    assert_eq!(
        stdout_of(&run_in(dir.path())),
        "-- listing properties --\nkey=value\n{key=value}\n"
    );
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("debug.properties"),
        "z=26\na=1\nm=13\ncontinued=one \\\n    two\n",
    )
    .unwrap();

    let first = run_in(dir.path());
    let second = run_in(dir.path());
    assert_eq!(first.stdout, second.stdout);
}
