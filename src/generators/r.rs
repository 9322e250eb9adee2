use super::{Generator, Request};
use crate::error::GenerateError;
use crate::nix::{self, MkShell};

/// CRAN packages through `rWrapper`; nixpkgs carries one R release.
pub struct RGenerator;

impl Generator for RGenerator {
    fn name(&self) -> &'static str {
        "R"
    }

    fn uses_version(&self) -> bool {
        false
    }

    fn uses_packages(&self) -> bool {
        true
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        // rPackages spells CRAN dots as underscores (data.table -> data_table).
        let packages = nix::list(
            request
                .packages
                .iter()
                .map(|pkg| nix::attr("pkgs.rPackages", &pkg.replace('.', "_"))),
        );

        let shell = MkShell::new(request.nixpkgs)
            .bind(format!(
                "r = pkgs.rWrapper.override {{ packages = with pkgs.rPackages; {packages}; }};"
            ))
            .input("r");
        Ok(shell.render())
    }
}
