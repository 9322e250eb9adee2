use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::config::{self, NixgenConfig};
use crate::generators::{self, Generator, Request, TemplateRegistry};
use crate::nix::DEFAULT_NIXPKGS;
use crate::output::{self, Artifact, DOCKERFILE, SHELL_NIX};
use crate::{packages, templates};

pub fn run(cli: Cli) -> Result<()> {
    let registry = TemplateRegistry::with_defaults();
    if cli.list {
        handle_list(&registry);
        return Ok(());
    }

    let cwd = std::env::current_dir().context("determining current directory")?;
    let cwd = utf8(cwd)?;
    let plan = plan(&cli, &registry, &cwd)?;

    if cli.stdout {
        print!("{}", plan.shell_nix);
        return Ok(());
    }

    if cli.dry_run {
        for artifact in &plan.artifacts {
            println!(
                "[dry-run] would write {} ({} bytes)",
                artifact.path,
                artifact.content.len()
            );
        }
        return Ok(());
    }

    for artifact in &plan.artifacts {
        output::write(&artifact.path, &artifact.content)?;
        println!("{} has been generated.", artifact.path);
    }
    Ok(())
}

fn handle_list(registry: &TemplateRegistry) {
    println!("Supported languages:");
    for key in registry.keys() {
        if let Some(generator) = registry.get(key) {
            println!("  - {:8} {}", key, generator.name());
        }
    }
}

/// Everything the invocation will write, produced before any file is touched.
#[derive(Debug)]
struct Plan {
    shell_nix: String,
    artifacts: Vec<Artifact>,
}

fn plan(cli: &Cli, registry: &TemplateRegistry, cwd: &Utf8Path) -> Result<Plan> {
    let explicit = cli.file.clone().map(utf8).transpose()?;
    let resolved = config::resolve_path(explicit.as_deref(), cwd)?;
    debug!(path = %resolved.path, source = resolved.source.as_str(), "resolved config");
    let config = config::load(&resolved)?;

    let language = cli
        .language
        .as_deref()
        .ok_or_else(|| anyhow!("--language is required"))?;
    let key = generators::normalize_key(language);
    let inputs = Inputs::resolve(cli, &config, &key)?;

    let request = Request::new(&inputs.packages)
        .version(inputs.version.as_deref())
        .framework(inputs.framework.as_deref())
        .nixpkgs(config.nixpkgs.as_deref().unwrap_or(DEFAULT_NIXPKGS));
    let generated = generators::dispatch(registry, &key, &request)?;
    if let Some(generator) = registry.get(&key) {
        warn_ignored_inputs(generator, &request);
    }
    info!(language = generated.language, "generated shell.nix");

    let dir = match (&cli.output_dir, &config.output_dir) {
        (Some(dir), _) => utf8(dir.clone())?,
        (None, Some(dir)) => cwd.join(dir),
        (None, None) => Utf8PathBuf::new(),
    };

    let mut artifacts = vec![Artifact::new(&dir, SHELL_NIX, generated.text.clone())];
    if !cli.no_dockerfile && config.emit_dockerfile() {
        let dockerfile = templates::get_string(templates::DOCKERFILE_TEMPLATE)?;
        artifacts.push(Artifact::new(&dir, DOCKERFILE, dockerfile));
    }

    Ok(Plan {
        shell_nix: generated.text,
        artifacts,
    })
}

/// Request inputs after layering CLI flags over config defaults.
#[derive(Debug)]
struct Inputs {
    version: Option<String>,
    framework: Option<String>,
    packages: Vec<String>,
}

impl Inputs {
    fn resolve(cli: &Cli, config: &NixgenConfig, key: &str) -> Result<Self> {
        let defaults = config.language(key);
        let version = cli
            .version
            .clone()
            .or_else(|| defaults.and_then(|d| d.version.clone()));
        let framework = cli
            .framework
            .clone()
            .or_else(|| defaults.and_then(|d| d.framework.clone()))
            .map(|framework| framework.trim().to_lowercase())
            .filter(|framework| !framework.is_empty());

        let packages_path = cli.packages.clone().map(utf8).transpose()?;
        let packages = packages::load(packages_path.as_deref())?;

        Ok(Self {
            version,
            framework,
            packages,
        })
    }
}

fn warn_ignored_inputs(generator: &dyn Generator, request: &Request<'_>) {
    let name = generator.name();
    if let Some(version) = request.version
        && !generator.uses_version()
    {
        warn!("{name} has no per-version packages in nixpkgs; ignoring version {version}");
    }
    if !request.packages.is_empty() && !generator.uses_packages() {
        warn!(
            count = request.packages.len(),
            "{name} packages are not managed through nix-shell; ignoring package list"
        );
    }
    if let Some(framework) = request.framework
        && name != "Node.js"
    {
        warn!("--framework only applies to Node.js; ignoring {framework}");
    }
}

fn utf8(path: PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow!("path {} is not valid UTF-8", path.display()))
}
