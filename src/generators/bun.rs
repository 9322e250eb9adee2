use super::node::{dependency_binding, install_line};
use super::{Generator, Request};
use crate::error::GenerateError;
use crate::nix::MkShell;

/// nixpkgs ships a single `bun` attribute, so the version input is ignored.
pub struct BunGenerator;

impl Generator for BunGenerator {
    fn name(&self) -> &'static str {
        "Bun"
    }

    fn uses_version(&self) -> bool {
        false
    }

    fn uses_packages(&self) -> bool {
        true
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        let shell = MkShell::new(request.nixpkgs)
            .bind(dependency_binding("bunDependencies", request.packages))
            .input("pkgs.bun")
            .hook("[ -f package.json ] || bun init -y > /dev/null")
            .hook(install_line("bunDependencies", "bun add"));
        Ok(shell.render())
    }
}
