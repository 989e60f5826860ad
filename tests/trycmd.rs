use std::env::remove_var;
use tempfile::tempdir;
use trycmd::TestCases;

mod util;

#[ctor::ctor]
fn initialize() {
    unsafe {
        remove_var("RUST_LOG");
    }
}

#[test]
fn trycmd() {
    // smoelius: `missing` gets an empty search path. `forward` gets only the directory holding
    // the fake `git`.
    let empty = tempdir().unwrap();
    let fake_git_dir = util::fake_git_dir();

    for (subdir, path) in [("missing", empty.path()), ("forward", fake_git_dir.as_path())] {
        let test_cases = TestCases::new();

        test_cases.env("PATH", path.to_str().unwrap());

        test_cases.case(format!("tests/trycmd/{subdir}/*.toml"));
    }
}
