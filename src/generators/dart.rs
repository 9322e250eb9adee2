use super::{Generator, Request};
use crate::error::GenerateError;
use crate::nix::MkShell;

pub struct DartGenerator;

impl Generator for DartGenerator {
    fn name(&self) -> &'static str {
        "Dart"
    }

    fn uses_version(&self) -> bool {
        false
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        Ok(MkShell::new(request.nixpkgs).input("pkgs.dart").render())
    }
}
