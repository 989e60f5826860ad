use anyhow::{Context, Result, bail};
use log::debug;
use std::{
    ffi::{OsStr, OsString},
    fmt::Debug,
    io::{Write, stderr, stdout},
    path::{Path, PathBuf},
};

pub mod catalog;

mod command;
pub use command::{INSTALL_HINTS, build_command, not_found_message, resolve};
use command::error_style;

/// The tool that `gut` stands in for.
pub const TARGET: &str = "git";

const FAILURE: i32 = 1;

/// Greets, then forwards `args` to [`TARGET`] on the inherited `PATH`.
///
/// Returns the code the process should exit with.
pub fn run<T: AsRef<OsStr> + Debug>(args: &[T]) -> i32 {
    Forwarder::new(TARGET).hints(INSTALL_HINTS).run(args)
}

pub struct Forwarder {
    target: String,
    search_path: Option<OsString>,
    hints: Option<&'static str>,
}

impl Forwarder {
    #[must_use]
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_owned(),
            search_path: None,
            hints: None,
        }
    }

    /// Resolve the target on `paths` rather than on the inherited `PATH`
    #[must_use]
    pub fn search_path<S: AsRef<OsStr>>(mut self, paths: S) -> Self {
        self.search_path = Some(paths.as_ref().to_owned());
        self
    }

    /// Installation instructions to print when the target cannot be found
    #[must_use]
    pub fn hints(mut self, hints: &'static str) -> Self {
        self.hints = Some(hints);
        self
    }

    pub fn run<T: AsRef<OsStr> + Debug>(&self, args: &[T]) -> i32 {
        self.run_with(args, stdout().lock(), stderr())
    }

    // smoelius: The child always inherits the real standard streams. `out` and `err` receive only
    // what `gut` itself writes.
    fn run_with<T, O, E>(&self, args: &[T], out: O, mut err: E) -> i32
    where
        T: AsRef<OsStr> + Debug,
        O: Write,
        E: Write,
    {
        env_logger::try_init().unwrap_or_default();

        catalog::greet(out, &mut catalog::time_seeded_rng());

        let path = match self.resolve() {
            Ok(path) => path,
            Err(error) => {
                debug!("{error:#}");
                let message = not_found_message(&self.target, self.hints, error_style());
                err.write_all(message.as_bytes()).unwrap_or_default();
                return FAILURE;
            }
        };

        match self.forward(&path, args) {
            Ok(code) => code,
            Err(error) => {
                writeln!(err, "Error executing {}: {error:#}", self.target).unwrap_or_default();
                FAILURE
            }
        }
    }

    pub fn resolve(&self) -> Result<PathBuf> {
        let path = resolve(&self.target, self.search_path.as_deref())?;
        debug!("resolved `{}` to `{}`", self.target, path.display());
        Ok(path)
    }

    /// Runs `path` with `args` and waits for it.
    ///
    /// Returns the child's exit code, whatever its value. Failing to spawn or wait on the child,
    /// or the child ending without an exit code (e.g., killed by a signal), is an error.
    pub fn forward<T: AsRef<OsStr> + Debug>(&self, path: &Path, args: &[T]) -> Result<i32> {
        let mut command = build_command(path, args);
        debug!("{}: {:?}", self.target, &command);
        let status = command
            .status()
            .with_context(|| format!("failed to run `{}`", path.display()))?;
        debug!("{status}");
        let Some(code) = status.code() else {
            bail!("`{}` {status}", path.display());
        };
        Ok(code)
    }
}
