//! Process replacement for the launch fallback.

use std::ffi::CString;

use anyhow::{Context, Result};
use nix::unistd::execvp;

/// Replace the current process image with `executable`, resolved through
/// PATH, with no arguments beyond its own name.
///
/// Returns only if the exec itself failed.
pub fn exec(executable: &str) -> Result<()> {
    let program = CString::new(executable)
        .with_context(|| format!("executable name '{}' contains a NUL byte", executable))?;

    execvp(&program, &[program.as_c_str()])
        .with_context(|| format!("could not execute '{}'", executable))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nul_in_name_is_rejected() {
        assert!(exec("oops\0").is_err());
    }
}
