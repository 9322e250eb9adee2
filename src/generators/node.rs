use super::{Generator, Request, checked_version, underscored};
use crate::error::GenerateError;
use crate::nix::{self, MkShell};

/// Framework shorthands and the npm packages they install.
///
/// Next.js is published on npm as `next`, so that shorthand keeps its own
/// name and gains the `react` peers it needs.
const FRAMEWORKS: &[(&[&str], &[&str])] = &[
    (&["next", "nextjs", "next.js"], &["next", "react", "react-dom"]),
    (&["react", "reactjs"], &["react", "react-dom"]),
    (&["vue", "vuejs", "vue.js"], &["vue"]),
    (&["nuxt", "nuxtjs"], &["nuxt"]),
    (&["svelte", "sveltekit"], &["@sveltejs/kit", "svelte"]),
    (&["express", "expressjs"], &["express"]),
    (&["nest", "nestjs"], &["@nestjs/core", "@nestjs/cli"]),
    (&["angular"], &["@angular/core", "@angular/cli"]),
    (&["astro"], &["astro"]),
];

pub struct NodeGenerator;

impl Generator for NodeGenerator {
    fn name(&self) -> &'static str {
        "Node.js"
    }

    fn uses_packages(&self) -> bool {
        true
    }

    fn generate(&self, request: &Request<'_>) -> Result<String, GenerateError> {
        let node = match request.version {
            Some(version) => {
                let version = checked_version(self.name(), version)?;
                let attr = format!("nodejs_{}", underscored(version));
                nix::versioned_attr("node", &attr, self.name(), version)
            }
            None => nix::latest_attr("node", "nodejs", self.name()),
        };

        let mut dependencies: Vec<String> = request.packages.to_vec();
        if let Some(framework) = request.framework {
            dependencies.extend(framework_packages(framework));
        }

        let shell = MkShell::new(request.nixpkgs)
            .bind(node)
            .bind(dependency_binding("nodeDependencies", &dependencies))
            .input("node")
            .hook("mkdir -p node_env")
            .hook("cd node_env")
            .hook("[ -f package.json ] || npm init -y > /dev/null")
            .hook(install_line("nodeDependencies", "npm install"));
        Ok(shell.render())
    }
}

/// Canonical npm packages for `framework`; unknown names pass through as-is
/// and a blank name adds nothing.
pub fn framework_packages(framework: &str) -> Vec<String> {
    let key = framework.trim().to_lowercase();
    if key.is_empty() {
        return Vec::new();
    }
    FRAMEWORKS
        .iter()
        .find(|(aliases, _)| aliases.contains(&key.as_str()))
        .map(|(_, packages)| packages.iter().map(|pkg| (*pkg).to_owned()).collect())
        .unwrap_or_else(|| vec![key])
}

/// `name = [ "a" "b" ];` holding npm-style package specifiers.
pub(super) fn dependency_binding(name: &str, dependencies: &[String]) -> String {
    let items = nix::list(dependencies.iter().map(|dep| nix::quote(dep)));
    format!("{name} = {items};")
}

/// Shell hook line that runs `command` with the list, skipped when it is empty.
pub(super) fn install_line(list: &str, command: &str) -> String {
    let install = format!("\"{command} ${{pkgs.lib.escapeShellArgs {list}}}\"");
    format!("${{pkgs.lib.optionalString ({list} != [ ]) {install}}}")
}
