//! Config file defaults and the config modes of the binary

use predicates::prelude::*;
use std::fs;

use super::helpers::{lcat, write_config};

#[test]
fn config_file_enables_transformations() {
    let (home, mut cmd) = lcat();
    write_config(
        home.path(),
        "[filter]\nnumber_lines = true\nshow_ends = true\n",
    );

    cmd.write_stdin("a\n")
        .assert()
        .success()
        .stdout("     1\ta$\n");
}

#[test]
fn flags_add_to_config_defaults() {
    let (home, mut cmd) = lcat();
    write_config(home.path(), "[filter]\nshow_ends = true\n");

    cmd.arg("-T")
        .write_stdin("a\tb\n")
        .assert()
        .success()
        .stdout("a^Ib$\n");
}

#[test]
fn config_can_select_continuous_numbering() {
    let (home, mut cmd) = lcat();
    write_config(
        home.path(),
        "[filter]\nnumber_lines = true\n\n[input]\nline_scope = \"continuous\"\n",
    );
    let a = home.path().join("a.txt");
    let b = home.path().join("b.txt");
    fs::write(&a, "x\n").unwrap();
    fs::write(&b, "y\n").unwrap();

    cmd.arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("     1\tx\n     2\ty\n");
}

#[test]
fn no_config_ignores_the_file() {
    let (home, mut cmd) = lcat();
    write_config(home.path(), "[filter]\nnumber_lines = true\n");

    cmd.arg("--no-config")
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn no_config_skips_even_a_broken_file() {
    let (home, mut cmd) = lcat();
    write_config(home.path(), "this is not toml [[[");

    cmd.arg("--no-config")
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn invalid_config_fails_before_reading_input() {
    let (home, mut cmd) = lcat();
    write_config(home.path(), "[input]\non_error = \"sometimes\"\n");

    cmd.write_stdin("a\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn show_config_prints_effective_settings() {
    let (home, mut cmd) = lcat();
    write_config(home.path(), "[filter]\nsqueeze_blank = true\n");

    cmd.args(["--show-config", "-n"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[filter]")
                .and(predicate::str::contains("number_lines = true"))
                .and(predicate::str::contains("squeeze_blank = true"))
                .and(predicate::str::contains("on_error = \"continue\""))
                .and(predicate::str::contains("# Append $ to every line (-E)")),
        );
}

#[test]
fn init_config_writes_file_once() {
    let (home, mut cmd) = lcat();
    let path = home.path().join(".config").join("lcat").join("config.toml");

    cmd.args(["--init-config", "-s", "--fail-fast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("squeeze_blank = true"));
    assert!(written.contains("on_error = \"abort\""));

    let mut again = assert_cmd::cargo::cargo_bin_cmd!("lcat");
    again
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("--init-config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), written);
}

#[test]
fn init_config_conflicts_with_no_config() {
    let (_home, mut cmd) = lcat();
    cmd.args(["--init-config", "--no-config"]).assert().code(2);
}
