use super::{Generator, Request, checked_version};
use crate::error::GenerateError;
use crate::nix::{self, MkShell};

pub struct JavaGenerator;

impl Generator for JavaGenerator {
    fn name(&self) -> &'static str {
        "Java"
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        let jdk = match request.version {
            Some(version) => {
                let version = checked_version(self.name(), version)?;
                let release = feature_release(version)
                    .ok_or_else(|| GenerateError::invalid_version(self.name(), version))?;
                let attr = format!("jdk{release}");
                nix::versioned_attr("jdk", &attr, self.name(), version)
            }
            None => nix::latest_attr("jdk", "jdk", self.name()),
        };

        let shell = MkShell::new(request.nixpkgs)
            .bind(jdk)
            .input("jdk")
            .env("JAVA_HOME", "\"${jdk}\"");
        Ok(shell.render())
    }
}

/// nixpkgs names JDKs by feature release: `17.0.2` -> `17`, legacy `1.8` -> `8`.
/// `None` when that release is not a number.
fn feature_release(version: &str) -> Option<&str> {
    let mut parts = version.split('.');
    let release = match (parts.next(), parts.next()) {
        (Some("1"), Some(legacy)) => legacy,
        (Some(major), _) => major,
        (None, _) => version,
    };
    let numeric = !release.is_empty() && release.chars().all(|c| c.is_ascii_digit());
    numeric.then_some(release)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_release_handles_legacy_numbering() {
        assert_eq!(feature_release("21"), Some("21"));
        assert_eq!(feature_release("17.0.2"), Some("17"));
        assert_eq!(feature_release("1.8"), Some("8"));
    }

    #[test]
    fn malformed_release_is_rejected() {
        let packages = Vec::new();
        for version in ["1.", ".8", "1..8", "temurin", "21-ea"] {
            let err = JavaGenerator
                .generate(&Request::new(&packages).version(Some(version)))
                .unwrap_err();
            assert_eq!(err, GenerateError::invalid_version("Java", version));
        }
    }

    #[test]
    fn version_selects_jdk_attribute() {
        let packages = Vec::new();
        let text = JavaGenerator
            .generate(&Request::new(&packages).version(Some("17.0.2")))
            .unwrap();
        assert!(text.contains(
            "jdk = pkgs.jdk17 or (throw \"Java version 17.0.2 not found in nixpkgs\");"
        ));
        assert!(text.contains("JAVA_HOME = \"${jdk}\";"));
    }

    #[test]
    fn absent_version_uses_default_jdk() {
        let packages = Vec::new();
        let text = JavaGenerator.generate(&Request::new(&packages)).unwrap();
        assert!(text.contains("jdk = pkgs.jdk;  # Latest Java version"));
    }
}
