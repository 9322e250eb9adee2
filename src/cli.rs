use std::path::PathBuf;

use clap::Parser;

/// Generate a `shell.nix` (and a Dockerfile that enters it) for a language.
#[derive(Parser, Debug)]
#[command(name = "nixgen", about = "Generate nix-shell development environments")]
pub struct Cli {
    /// Programming language (python, nodejs, deno, bun, go, rust, r, java, swift, c++, dart).
    #[arg(short = 'l', long = "language", required_unless_present = "list")]
    pub language: Option<String>,
    /// Language version, e.g. 3.12. The latest packaged release is used when omitted.
    #[arg(long = "version")]
    pub version: Option<String>,
    /// Path to a newline-delimited list of packages to include.
    #[arg(short = 'p', long = "packages")]
    pub packages: Option<PathBuf>,
    /// Framework to install alongside Node.js packages (e.g. nextjs).
    #[arg(long = "framework")]
    pub framework: Option<String>,
    /// Directory receiving the generated files (defaults to the current directory).
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,
    /// Configuration file; overrides `.nixgen/config.toml` discovery.
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
    /// Skip the Dockerfile.
    #[arg(long = "no-dockerfile")]
    pub no_dockerfile: bool,
    /// Print the generated shell.nix instead of writing files.
    #[arg(long = "stdout", conflicts_with = "dry_run")]
    pub stdout: bool,
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// List supported language keys and exit.
    #[arg(long = "list")]
    pub list: bool,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn language_is_required_unless_listing() {
        assert!(Cli::try_parse_from(["nixgen"]).is_err());
        let cli = Cli::try_parse_from(["nixgen", "--list"]).unwrap();
        assert!(cli.list);
    }

    #[test]
    fn version_flag_carries_language_version() {
        let argv = ["nixgen", "-l", "python", "--version", "3.12", "-vv"];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.language.as_deref(), Some("python"));
        assert_eq!(cli.version.as_deref(), Some("3.12"));
        assert_eq!(cli.verbose, 2);
    }
}
