//! Helpers for emitting Nix expressions.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_NIXPKGS: &str = "<nixpkgs>";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_'-]*$").expect("valid identifier regex"));

const KEYWORDS: &[&str] = &[
    "assert", "else", "if", "in", "inherit", "let", "or", "rec", "then", "with",
];

/// Names already bound lexically where `attr` items are emitted: the
/// generated `shell.nix` bindings plus the unqualified builtins. `with`
/// never shadows these, so a package by that name must be selected.
const LEXICAL: &[&str] = &[
    "pkgs", "ps", "python", "r", "abort", "baseNameOf", "break", "builtins", "derivation",
    "derivationStrict", "dirOf", "false", "fetchGit", "fetchMercurial", "fetchTarball",
    "fetchTree", "fromTOML", "import", "isNull", "map", "null", "placeholder", "removeAttrs",
    "scopedImport", "throw", "toString", "true",
];

/// Render `value` as a double-quoted Nix string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER.is_match(value) && !KEYWORDS.contains(&value)
}

/// Reference `name` inside `scope`, bare when it resolves that way under
/// `with scope;`.
pub fn attr(scope: &str, name: &str) -> String {
    if !is_identifier(name) {
        format!("{scope}.{}", quote(name))
    } else if LEXICAL.contains(&name) {
        format!("{scope}.{name}")
    } else {
        name.to_owned()
    }
}

pub fn list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("[");
    for item in items {
        out.push(' ');
        out.push_str(item.as_ref());
    }
    out.push_str(" ]");
    out
}

pub fn header(nixpkgs: &str) -> String {
    format!("{{ pkgs ? import {nixpkgs} {{}} }}:")
}

/// `binding = pkgs.<attr> or (throw ...)`, failing at evaluation time when the
/// attribute is missing from the package set.
pub fn versioned_attr(binding: &str, attr: &str, label: &str, version: &str) -> String {
    let message = format!("{label} version {version} not found in nixpkgs");
    format!("{binding} = pkgs.{attr} or (throw {});", quote(&message))
}

pub fn latest_attr(binding: &str, attr: &str, label: &str) -> String {
    format!("{binding} = pkgs.{attr};  # Latest {label} version")
}

/// Builder for a `pkgs.mkShell` derivation wrapped in the standard
/// `shell.nix` function header.
#[derive(Debug, Clone)]
pub struct MkShell<'a> {
    nixpkgs: &'a str,
    bindings: Vec<String>,
    build_inputs: Vec<String>,
    env: Vec<(String, String)>,
    shell_hook: Vec<String>,
}

impl<'a> MkShell<'a> {
    pub fn new(nixpkgs: &'a str) -> Self {
        Self {
            nixpkgs,
            bindings: Vec::new(),
            build_inputs: Vec::new(),
            env: Vec::new(),
            shell_hook: Vec::new(),
        }
    }

    pub fn bind(mut self, line: impl Into<String>) -> Self {
        self.bindings.push(line.into());
        self
    }

    pub fn input(mut self, expr: impl Into<String>) -> Self {
        self.build_inputs.push(expr.into());
        self
    }

    pub fn env(mut self, name: &str, expr: impl Into<String>) -> Self {
        self.env.push((name.to_owned(), expr.into()));
        self
    }

    pub fn hook(mut self, line: impl Into<String>) -> Self {
        self.shell_hook.push(line.into());
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", header(self.nixpkgs));
        out.push('\n');

        if !self.bindings.is_empty() {
            out.push_str("let\n");
            for binding in &self.bindings {
                let _ = writeln!(out, "  {binding}");
            }
            out.push_str("in\n");
        }

        out.push_str("pkgs.mkShell {\n");
        if self.build_inputs.iter().any(|input| input.contains(' ')) {
            out.push_str("  buildInputs = [\n");
            for input in &self.build_inputs {
                let _ = writeln!(out, "    {input}");
            }
            out.push_str("  ];\n");
        } else {
            let _ = writeln!(out, "  buildInputs = {};", list(&self.build_inputs));
        }

        for (name, expr) in &self.env {
            let _ = writeln!(out, "  {name} = {expr};");
        }

        if !self.shell_hook.is_empty() {
            out.push_str("\n  shellHook = ''\n");
            for line in &self.shell_hook {
                let _ = writeln!(out, "    {line}");
            }
            out.push_str("  '';\n");
        }

        out.push_str("}\n");
        out
    }
}
