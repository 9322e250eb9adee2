//! Per-language `shell.nix` generators and the registry that dispatches to them.

mod bun;
mod cpp;
mod dart;
mod deno;
mod go;
mod java;
mod node;
mod python;
mod r;
mod registry;
mod rust;
mod swift;

pub use bun::BunGenerator;
pub use cpp::CppGenerator;
pub use dart::DartGenerator;
pub use deno::DenoGenerator;
pub use go::GoGenerator;
pub use java::JavaGenerator;
pub use node::NodeGenerator;
pub use python::PythonGenerator;
pub use r::RGenerator;
pub use registry::TemplateRegistry;
pub use rust::RustGenerator;
pub use swift::SwiftGenerator;

use crate::error::GenerateError;
use crate::nix::DEFAULT_NIXPKGS;

/// Inputs for a single generator invocation.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub version: Option<&'a str>,
    pub packages: &'a [String],
    pub framework: Option<&'a str>,
    /// Expression passed to `import` in the `shell.nix` header.
    pub nixpkgs: &'a str,
}

impl<'a> Request<'a> {
    pub fn new(packages: &'a [String]) -> Self {
        Self {
            version: None,
            packages,
            framework: None,
            nixpkgs: DEFAULT_NIXPKGS,
        }
    }

    pub fn version(mut self, version: Option<&'a str>) -> Self {
        self.version = version;
        self
    }

    pub fn framework(mut self, framework: Option<&'a str>) -> Self {
        self.framework = framework;
        self
    }

    pub fn nixpkgs(mut self, nixpkgs: &'a str) -> Self {
        self.nixpkgs = nixpkgs;
        self
    }
}

/// A pure function from a [`Request`] to `shell.nix` text.
pub trait Generator: Send + Sync {
    /// Display name used in messages (e.g. "Python").
    fn name(&self) -> &'static str;

    /// Whether the version input changes the output.
    fn uses_version(&self) -> bool {
        true
    }

    /// Whether the package list is embedded in the output.
    fn uses_packages(&self) -> bool {
        false
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConfig {
    pub language: &'static str,
    pub text: String,
}

/// Look up `language` (case-insensitive) and run the matching generator.
pub fn dispatch(
    registry: &TemplateRegistry,
    language: &str,
    request: &Request<'_>,
) -> Result<GeneratedConfig, GenerateError> {
    let key = normalize_key(language);
    let generator = registry
        .get(&key)
        .ok_or_else(|| GenerateError::UnsupportedLanguage(key.clone()))?;
    let text = generator.generate(request)?;
    Ok(GeneratedConfig {
        language: generator.name(),
        text,
    })
}

pub fn normalize_key(language: &str) -> String {
    language.trim().to_lowercase()
}

/// Reject versions that cannot be spliced into an attribute or channel name.
fn checked_version<'v>(language: &str, version: &'v str) -> Result<&'v str, GenerateError> {
    let trimmed = version.trim();
    let valid = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(trimmed)
    } else {
        Err(GenerateError::invalid_version(language, version))
    }
}

/// `1.22.3` -> `1_22_3`, the nixpkgs convention for versioned attributes.
fn underscored(version: &str) -> String {
    version.replace(['.', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_version_accepts_attribute_safe_text() {
        assert_eq!(checked_version("Go", " 1.22 ").unwrap(), "1.22");
        assert_eq!(checked_version("Rust", "nightly-2024-01-01").unwrap(), "nightly-2024-01-01");
    }

    #[test]
    fn checked_version_rejects_injection() {
        let err = checked_version("Go", "1.22; rm -rf /").unwrap_err();
        assert_eq!(err, GenerateError::invalid_version("Go", "1.22; rm -rf /"));
        assert!(checked_version("Go", "  ").is_err());
    }

    #[test]
    fn underscored_replaces_separators() {
        assert_eq!(underscored("1.22"), "1_22");
        assert_eq!(underscored("20.11.1"), "20_11_1");
    }

    #[test]
    fn dispatch_normalizes_key() {
        let registry = TemplateRegistry::with_defaults();
        let packages = Vec::new();
        let config = dispatch(&registry, "  PyThOn ", &Request::new(&packages)).unwrap();
        assert_eq!(config.language, "Python");
        assert!(!config.text.is_empty());
    }

    #[test]
    fn dispatch_reports_unknown_language() {
        let registry = TemplateRegistry::with_defaults();
        let packages = Vec::new();
        let err = dispatch(&registry, "COBOL", &Request::new(&packages)).unwrap_err();
        assert_eq!(err, GenerateError::UnsupportedLanguage("cobol".to_owned()));
    }

    #[test]
    fn every_registered_key_generates_text() {
        let registry = TemplateRegistry::with_defaults();
        let packages = vec!["left-pad".to_owned()];
        for key in registry.keys() {
            let request = Request::new(&packages);
            let config = dispatch(&registry, key, &request)
                .unwrap_or_else(|err| panic!("{key} failed: {err}"));
            assert!(config.text.contains("pkgs.mkShell"), "{key}");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let registry = TemplateRegistry::with_defaults();
        let packages = vec!["numpy".to_owned(), "requests".to_owned()];
        for key in registry.keys() {
            let request = Request::new(&packages).version(Some("3.12")).framework(Some("next"));
            let first = dispatch(&registry, key, &request);
            let second = dispatch(&registry, key, &request);
            assert_eq!(first, second, "{key}");
        }
    }
}
