//! Command line surface.

use clap::Parser;

/// Show, minimize, or launch an application window by class name.
#[derive(Debug, Parser)]
#[command(name = "winshow", version, disable_version_flag = true)]
pub struct Args {
    /// The window class to match.
    pub class: String,

    /// The executable to launch. It defaults to the window class.
    pub executable: Option<String>,

    /// Print the program version and exit.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),
}

impl Args {
    /// Executable to fall back to when no window matches.
    pub fn executable(&self) -> &str {
        self.executable.as_deref().unwrap_or(&self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn executable_defaults_to_class() {
        let args = Args::try_parse_from(["winshow", "firefox"]).unwrap();
        assert_eq!(args.class, "firefox");
        assert_eq!(args.executable(), "firefox");
    }

    #[test]
    fn explicit_executable_wins() {
        let args = Args::try_parse_from(["winshow", "Navigator", "firefox"]).unwrap();
        assert_eq!(args.executable(), "firefox");
    }

    #[test]
    fn double_dash_ends_option_parsing() {
        let args = Args::try_parse_from(["winshow", "--", "-odd-class"]).unwrap();
        assert_eq!(args.class, "-odd-class");
    }

    #[test]
    fn class_is_required() {
        let err = Args::try_parse_from(["winshow"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn excess_arguments_are_rejected() {
        let err = Args::try_parse_from(["winshow", "a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn short_version_flag_is_lowercase() {
        let err = Args::try_parse_from(["winshow", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
