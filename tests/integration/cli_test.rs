//! Flag handling and exit status of the lcat binary

use predicates::prelude::*;

use super::helpers::{fixture_path, lcat};

// ============================================================================
// Transformations on standard input
// ============================================================================

#[test]
fn stdin_is_copied_unchanged_without_flags() {
    let (_home, mut cmd) = lcat();
    cmd.write_stdin("hello\n\tworld  \n\n\n")
        .assert()
        .success()
        .stdout("hello\n\tworld  \n\n\n")
        .stderr("");
}

#[test]
fn number_flag_pads_to_six_columns() {
    let (_home, mut cmd) = lcat();
    cmd.arg("-n")
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("     1\ta\n     2\tb\n");
}

#[test]
fn show_ends_marks_every_line() {
    let (_home, mut cmd) = lcat();
    cmd.arg("--show-ends")
        .write_stdin("x\n\ny \n")
        .assert()
        .success()
        .stdout("x$\n$\ny $\n");
}

#[test]
fn squeeze_blank_keeps_one_empty_line_per_run() {
    let (_home, mut cmd) = lcat();
    cmd.arg("-s")
        .write_stdin("a\n\n\n\nb\n\nc\n")
        .assert()
        .success()
        .stdout("a\n\nb\n\nc\n");
}

#[test]
fn show_tabs_also_rewrites_number_separator() {
    let (_home, mut cmd) = lcat();
    cmd.args(["-n", "-T"])
        .write_stdin("a\tb\n")
        .assert()
        .success()
        .stdout("     1^Ia^Ib\n");
}

#[test]
fn all_transformations_apply_in_order() {
    let (_home, mut cmd) = lcat();
    cmd.args(["-r", "-s", "-n", "-T", "-E"])
        .write_stdin("line1\t  \n\n\nline2\t  \n")
        .assert()
        .success()
        .stdout("     1^Iline1$\n     2^I$\n     4^Iline2$\n");
}

#[test]
fn trim_makes_whitespace_lines_squeezable() {
    let (_home, mut cmd) = lcat();
    cmd.args(["-r", "-s"])
        .write_stdin("a\n\n   \n\t\nb\n")
        .assert()
        .success()
        .stdout("a\n\nb\n");
}

#[test]
fn whitespace_lines_survive_squeeze_without_trim() {
    let (_home, mut cmd) = lcat();
    cmd.arg("-s")
        .write_stdin("a\n\n   \n\nb\n")
        .assert()
        .success()
        .stdout("a\n\n   \n\nb\n");
}

#[test]
fn show_all_equals_show_ends_and_tabs() {
    let (_home, mut cmd) = lcat();
    let combined = cmd
        .arg("-A")
        .arg(fixture_path("mixed.txt"))
        .output()
        .unwrap();

    let (_home, mut cmd) = lcat();
    let separate = cmd
        .args(["-E", "-T"])
        .arg(fixture_path("mixed.txt"))
        .output()
        .unwrap();

    assert!(combined.status.success());
    assert_eq!(combined.stdout, separate.stdout);
}

#[test]
fn fixture_with_show_all_and_trim() {
    let (_home, mut cmd) = lcat();
    let output = cmd
        .args(["-A", "-r"])
        .arg(fixture_path("mixed.txt"))
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    insta::assert_snapshot!(stdout.trim_end(), @r"
    first line$
    ^Iindented^Iwith tabs$
    $
    $
    $
    last line$
    ");
}

#[test]
fn fixture_with_every_flag() {
    let (_home, mut cmd) = lcat();
    cmd.args(["-rsnTE"])
        .arg(fixture_path("mixed.txt"))
        .assert()
        .success()
        .stdout("     1^Ifirst line$\n     2^I^Iindented^Iwith tabs$\n     3^I$\n     6^Ilast line$\n");
}

#[test]
fn crlf_terminators_are_normalized() {
    let (_home, mut cmd) = lcat();
    cmd.arg(fixture_path("crlf.txt"))
        .assert()
        .success()
        .stdout("alpha\nbeta\n\n\ngamma\n");
}

#[test]
fn unterminated_last_line_gets_a_newline() {
    let (_home, mut cmd) = lcat();
    cmd.arg("-E")
        .write_stdin("no newline")
        .assert()
        .success()
        .stdout("no newline$\n");
}

#[test]
fn empty_input_produces_no_output() {
    let (_home, mut cmd) = lcat();
    cmd.args(["-n", "-E"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn non_utf8_input_is_copied_byte_for_byte() {
    let (_home, mut cmd) = lcat();
    cmd.write_stdin(&b"caf\xe9\nna\xefve\n"[..])
        .assert()
        .success()
        .stdout(b"caf\xe9\nna\xefve\n".to_vec());
}

#[test]
fn non_utf8_input_keeps_its_bytes_under_flags() {
    let (_home, mut cmd) = lcat();
    cmd.args(["-n", "-E"])
        .write_stdin(&b"caf\xe9\t\n"[..])
        .assert()
        .success()
        .stdout(b"     1\tcaf\xe9\t$\n".to_vec());
}

// ============================================================================
// Usage and auxiliary modes
// ============================================================================

#[test]
fn help_lists_the_transformations() {
    let (_home, mut cmd) = lcat();
    cmd.arg("--help").assert().success().stdout(
        predicate::str::contains("--number")
            .and(predicate::str::contains("--squeeze-blank"))
            .and(predicate::str::contains("--trim-trailing"))
            .and(predicate::str::contains("--continuous")),
    );
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let (_home, mut cmd) = lcat();
    cmd.arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn completions_are_generated_for_bash() {
    let (_home, mut cmd) = lcat();
    cmd.args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lcat").and(predicate::str::contains("--show-ends")));
}
