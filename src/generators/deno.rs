use super::{Generator, Request, checked_version, underscored};
use crate::error::GenerateError;
use crate::nix::{self, MkShell};

pub struct DenoGenerator;

impl Generator for DenoGenerator {
    fn name(&self) -> &'static str {
        "Deno"
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        let deno = match request.version {
            Some(version) => {
                let version = checked_version(self.name(), version)?;
                let attr = format!("deno_{}", underscored(version));
                nix::versioned_attr("deno", &attr, self.name(), version)
            }
            None => nix::latest_attr("deno", "deno", self.name()),
        };

        Ok(MkShell::new(request.nixpkgs).bind(deno).input("deno").render())
    }
}
