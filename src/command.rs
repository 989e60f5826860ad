use anstyle::Style;
use anyhow::{Context, Result};
use std::{
    env::current_dir,
    ffi::OsStr,
    fmt::Debug,
    io::IsTerminal,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Finds `target` on `search_path`, or on `PATH` if `search_path` is `None`.
pub fn resolve(target: &str, search_path: Option<&OsStr>) -> Result<PathBuf> {
    let path = match search_path {
        Some(paths) => which::which_in(target, Some(paths), current_dir()?),
        None => which::which(target),
    };
    path.with_context(|| format!("failed to find `{target}` on the search path"))
}

/// Builds a command that runs `path` with `args`, verbatim, on the inherited standard streams.
pub fn build_command<T: AsRef<OsStr> + Debug>(path: &Path, args: &[T]) -> Command {
    let mut command = Command::new(path);
    command.args(args);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command
}

pub const INSTALL_HINTS: &str = "Please install git first:
  - Windows: Download from https://git-scm.com/download/win
  - macOS: brew install git or download from https://git-scm.com/download/mac
  - Linux: apt install git / yum install git / pacman -S git
";

/// Bold when stderr is a terminal, plain otherwise.
#[must_use]
pub fn error_style() -> Style {
    if std::io::stderr().is_terminal() {
        Style::new().bold()
    } else {
        Style::new()
    }
}

#[must_use]
pub fn not_found_message(target: &str, hints: Option<&str>, style: Style) -> String {
    let mut message =
        format!("{style}Error:{style:#} {target} is not installed or not found in PATH.\n");
    message.push_str(hints.unwrap_or_default());
    message
}
