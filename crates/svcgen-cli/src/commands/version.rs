//! Implementation of the `svcgen version` command.

use crate::{error::CliResult, output::OutputManager};

/// Build commit baked in at compile time by CI, when present.
const BUILD_COMMIT: Option<&str> = option_env!("SVCGEN_BUILD_COMMIT");

/// Print `svcgen <version>`, plus the build commit when one was baked in.
pub fn execute(_output: OutputManager) -> CliResult<()> {
    // Bypasses OutputManager — version output must be parseable even in
    // quiet mode and non-TTY pipes.
    match BUILD_COMMIT {
        Some(commit) => println!("svcgen {} ({commit})", env!("CARGO_PKG_VERSION")),
        None => println!("svcgen {}", env!("CARGO_PKG_VERSION")),
    }
    Ok(())
}
