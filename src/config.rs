use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

const CONFIG_DIR: &str = ".nixgen";
const CONFIG_FILE: &str = "config.toml";

/// Root configuration document, `.nixgen/config.toml` by default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NixgenConfig {
    /// Expression imported in the `shell.nix` header, e.g. `<nixpkgs>`.
    pub nixpkgs: Option<String>,
    pub output_dir: Option<String>,
    /// Emit the Dockerfile alongside `shell.nix`.
    pub dockerfile: Option<bool>,
    pub languages: Option<BTreeMap<String, LanguageDefaults>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageDefaults {
    pub version: Option<String>,
    pub framework: Option<String>,
}

impl NixgenConfig {
    /// Defaults for `language`, matched against the normalized key.
    pub fn language(&self, key: &str) -> Option<&LanguageDefaults> {
        self.languages
            .as_ref()?
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(key))
            .map(|(_, defaults)| defaults)
    }

    pub fn emit_dockerfile(&self) -> bool {
        self.dockerfile.unwrap_or(true)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigPathSource {
    Explicit,
    Discovered,
    HomeDefault,
}

impl ConfigPathSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigPathSource::Explicit => "explicit",
            ConfigPathSource::Discovered => "discovered",
            ConfigPathSource::HomeDefault => "home-default",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfigPath {
    pub path: Utf8PathBuf,
    pub source: ConfigPathSource,
}

/// Explicit path first, then the nearest `.nixgen/config.toml` above `start`,
/// then `~/.nixgen/config.toml`.
pub fn resolve_path(explicit: Option<&Utf8Path>, start: &Utf8Path) -> Result<ResolvedConfigPath> {
    if let Some(path) = explicit {
        return Ok(ResolvedConfigPath {
            path: path.to_owned(),
            source: ConfigPathSource::Explicit,
        });
    }

    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if candidate.exists() {
            return Ok(ResolvedConfigPath {
                path: candidate,
                source: ConfigPathSource::Discovered,
            });
        }
        current = dir.parent();
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("unable to determine home directory"))?;
    let home = Utf8PathBuf::from_path_buf(home)
        .map_err(|_| anyhow!("config path must be valid UTF-8"))?;
    Ok(ResolvedConfigPath {
        path: home.join(CONFIG_DIR).join(CONFIG_FILE),
        source: ConfigPathSource::HomeDefault,
    })
}

/// Load a configuration file. Only an explicitly requested file must exist.
pub fn load(resolved: &ResolvedConfigPath) -> Result<NixgenConfig> {
    if !resolved.path.exists() {
        if resolved.source == ConfigPathSource::Explicit {
            bail!("config file {} does not exist", resolved.path);
        }
        return Ok(NixgenConfig::default());
    }
    load_from_path(&resolved.path)
}

pub fn load_from_path(path: &Utf8Path) -> Result<NixgenConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_root() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, root)
    }

    #[test]
    fn resolve_prefers_nearest_discovered() {
        let (_guard, root) = temp_root();
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(root.join(CONFIG_DIR)).unwrap();
        fs::write(root.join(CONFIG_DIR).join(CONFIG_FILE), "dockerfile = false\n").unwrap();

        let resolved = resolve_path(None, &nested).unwrap();
        assert_eq!(resolved.source, ConfigPathSource::Discovered);
        assert!(resolved.path.ends_with(".nixgen/config.toml"));
        assert!(!load(&resolved).unwrap().emit_dockerfile());
    }

    #[test]
    fn resolve_prefers_explicit_file() {
        let (_guard, root) = temp_root();
        let explicit = root.join("custom.toml");
        let resolved = resolve_path(Some(&explicit), &root).unwrap();
        assert_eq!(resolved.source, ConfigPathSource::Explicit);
        assert_eq!(resolved.path, explicit);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let (_guard, root) = temp_root();
        let resolved = ResolvedConfigPath {
            path: root.join("nope.toml"),
            source: ConfigPathSource::Explicit,
        };
        assert!(load(&resolved).is_err());
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let (_guard, root) = temp_root();
        let resolved = ResolvedConfigPath {
            path: root.join(CONFIG_DIR).join(CONFIG_FILE),
            source: ConfigPathSource::HomeDefault,
        };
        let config = load(&resolved).unwrap();
        assert!(config.nixpkgs.is_none());
        assert!(config.emit_dockerfile());
    }

    #[test]
    fn parses_language_defaults() {
        let config: NixgenConfig = toml::from_str(
            r#"nixpkgs = "(fetchTarball \"channel:nixos-24.05\")"
output_dir = "env"

[languages.Python]
version = "3.11"

[languages.nodejs]
framework = "next"
"#,
        )
        .unwrap();
        assert_eq!(
            config.nixpkgs.as_deref(),
            Some("(fetchTarball \"channel:nixos-24.05\")")
        );
        assert_eq!(config.output_dir.as_deref(), Some("env"));
        assert_eq!(
            config.language("python").and_then(|l| l.version.as_deref()),
            Some("3.11")
        );
        assert_eq!(
            config.language("nodejs").and_then(|l| l.framework.as_deref()),
            Some("next")
        );
        assert!(config.language("go").is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<NixgenConfig>("shell_file = \"x.nix\"\n").is_err());
    }
}
