use super::{Generator, Request};
use crate::error::GenerateError;
use crate::nix::MkShell;

pub struct SwiftGenerator;

impl Generator for SwiftGenerator {
    fn name(&self) -> &'static str {
        "Swift"
    }

    fn uses_version(&self) -> bool {
        false
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        Ok(MkShell::new(request.nixpkgs)
            .input("pkgs.swift")
            .input("pkgs.swiftpm")
            .render())
    }
}
