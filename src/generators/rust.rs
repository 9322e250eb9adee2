use super::{Generator, Request, checked_version};
use crate::error::GenerateError;
use crate::nix::{self, MkShell};

const DEFAULT_CHANNEL: &str = "stable";

/// Toolchains come from rustup channels rather than nixpkgs attributes.
pub struct RustGenerator;

impl Generator for RustGenerator {
    fn name(&self) -> &'static str {
        "Rust"
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        let channel = match request.version {
            Some(version) => checked_version(self.name(), version)?,
            None => DEFAULT_CHANNEL,
        };

        let shell = MkShell::new(request.nixpkgs)
            .bind(format!("toolchain = {};", nix::quote(channel)))
            .input("pkgs.rustup")
            .env("RUSTUP_TOOLCHAIN", "toolchain")
            .hook("rustup toolchain install ${toolchain} --profile default > /dev/null");
        Ok(shell.render())
    }
}
