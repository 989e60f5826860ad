use assert_cmd::output::OutputError;
use serde_json::Value;
use std::{
    path::{Path, PathBuf},
    process::Command,
};

/// Builds the fake `git` and returns the directory containing it.
///
/// The directory is taken from Cargo's artifact messages, so it is correct even when the build is
/// redirected by `CARGO_BUILD_TARGET` or `CARGO_TARGET_DIR`.
pub fn fake_git_dir() -> PathBuf {
    let mut command = Command::new(env!("CARGO"));
    command.args(["build", "--package", "runner", "--message-format=json"]);
    if !cfg!(debug_assertions) {
        command.arg("--release");
    }
    let output = command.output().unwrap();
    if !output.status.success() {
        panic!("{}", OutputError::new(output));
    }
    let stdout = String::from_utf8(output.stdout).unwrap();
    let Some(executable) = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .find(|message| {
            message["reason"] == "compiler-artifact" && message["target"]["name"] == "git"
        })
        .and_then(|message| message["executable"].as_str().map(PathBuf::from))
    else {
        panic!("found no `git` executable in build output: {stdout}");
    };
    executable.parent().map(Path::to_path_buf).unwrap()
}
