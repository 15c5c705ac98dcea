//! Tests for the `prefixer` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn write_input(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("prefixer-{}-{}.txt", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prefixer")).args(args).output().unwrap()
}

#[test]
fn prints_simplified_prefix() {
    let path = write_input("ok", "(a | F) & !b\nignored | line\n");
    let out = run(&[path.as_os_str()]);
    std::fs::remove_file(&path).unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "(& a (! b))\n");
}

#[test]
fn empty_expression_prints_newline() {
    let path = write_input("empty", "");
    let out = run(&[path.as_os_str()]);
    std::fs::remove_file(&path).unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "\n");
}

#[test]
fn parse_error_exits_with_one() {
    let path = write_input("bad", "a $ b\n");
    let out = run(&[path.as_os_str()]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Parse error"));
}

#[test]
fn missing_file_exits_with_one() {
    let path = std::env::temp_dir().join("prefixer-does-not-exist.txt");
    let out = run(&[path.as_os_str()]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn wrong_argument_count_exits_with_one() {
    assert_eq!(run(&[]).status.code(), Some(1));

    let a = std::ffi::OsStr::new("a.txt");
    let b = std::ffi::OsStr::new("b.txt");
    assert_eq!(run(&[a, b]).status.code(), Some(1));
}

#[test]
fn flag_like_path_is_treated_as_file() {
    for name in ["--help", "--version", "-"] {
        let out = run(&[std::ffi::OsStr::new(name)]);
        assert_eq!(out.status.code(), Some(1), "{:?}", name);
        assert!(out.stdout.is_empty());
    }
}

#[test]
fn deep_expression_is_printed() {
    let depth = 100_000;
    let path = write_input("deep", &format!("{}a\n", "!".repeat(depth)));
    let out = run(&[path.as_os_str()]);
    std::fs::remove_file(&path).unwrap();

    assert!(out.status.success());
    let expected = format!("{}a{}\n", "(! ".repeat(depth), ")".repeat(depth));
    assert_eq!(String::from_utf8_lossy(&out.stdout), expected);
}
