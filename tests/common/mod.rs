#![allow(dead_code)]

pub mod store;

use assert_cmd::Command;
use std::path::Path;

pub fn run_peek_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("peek").expect("Failed to find peek binary");
    cmd.arg(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
