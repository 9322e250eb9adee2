use super::{Generator, Request};
use crate::error::GenerateError;
use crate::nix::{self, MkShell};

/// Minor series with a `pythonXY` attribute in nixpkgs.
pub const SUPPORTED_SERIES: &[&str] = &["3.8", "3.9", "3.10", "3.11", "3.12"];

pub struct PythonGenerator;

impl Generator for PythonGenerator {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn uses_packages(&self) -> bool {
        true
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        let python = match request.version {
            Some(version) => {
                let series = series(version)?;
                let attr = format!("python{}", series.replace('.', ""));
                nix::versioned_attr("python", &attr, self.name(), version.trim())
            }
            None => nix::latest_attr("python", "python3", "Python 3"),
        };

        let packages = nix::list(request.packages.iter().map(|pkg| nix::attr("ps", pkg)));

        Ok(MkShell::new(request.nixpkgs)
            .bind(python)
            .input(format!("(python.withPackages (ps: with ps; {packages}))"))
            .render())
    }
}

/// Reduce `3.12.2` to its `3.12` series and check it against the allow-list.
fn series(version: &str) -> Result<&'static str, GenerateError> {
    let invalid = || GenerateError::invalid_version("Python", version);
    let trimmed = version.trim();
    let mut parts = trimmed.split('.');
    let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if !parts.all(|patch| !patch.is_empty() && patch.chars().all(|c| c.is_ascii_digit())) {
        return Err(invalid());
    }
    let wanted = format!("{major}.{minor}");
    SUPPORTED_SERIES
        .iter()
        .copied()
        .find(|supported| *supported == wanted)
        .ok_or_else(invalid)
}
