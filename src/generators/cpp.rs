use super::{Generator, Request};
use crate::error::GenerateError;
use crate::nix::MkShell;

pub struct CppGenerator;

impl Generator for CppGenerator {
    fn name(&self) -> &'static str {
        "C++"
    }

    fn uses_version(&self) -> bool {
        false
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        Ok(MkShell::new(request.nixpkgs)
            .input("pkgs.gcc")
            .input("pkgs.cmake")
            .input("pkgs.gnumake")
            .input("pkgs.gdb")
            .render())
    }
}
