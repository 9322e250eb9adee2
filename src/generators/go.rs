use super::{Generator, Request, checked_version, underscored};
use crate::error::GenerateError;
use crate::nix::{self, MkShell};

pub struct GoGenerator;

impl Generator for GoGenerator {
    fn name(&self) -> &'static str {
        "Go"
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        let go = match request.version {
            Some(version) => {
                let version = checked_version(self.name(), version)?;
                let attr = format!("go_{}", underscored(version));
                nix::versioned_attr("go", &attr, self.name(), version)
            }
            None => nix::latest_attr("go", "go", self.name()),
        };

        Ok(MkShell::new(request.nixpkgs).bind(go).input("go").render())
    }
}
