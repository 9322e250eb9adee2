use anyhow::{Context, Result, anyhow};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

pub const DOCKERFILE_TEMPLATE: &str = "Dockerfile";

pub fn get_bytes(path: &str) -> Result<Vec<u8>> {
    let file = Templates::get(path).ok_or_else(|| anyhow!("embedded template `{}` missing", path))?;
    Ok(file.data.as_ref().to_vec())
}

pub fn get_string(path: &str) -> Result<String> {
    let bytes = get_bytes(path)?;
    String::from_utf8(bytes).with_context(|| format!("decoding embedded template `{}`", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dockerfile_enters_nix_shell() {
        let dockerfile = get_string(DOCKERFILE_TEMPLATE).unwrap();
        assert!(dockerfile.contains("FROM nixos/nix"));
        assert!(dockerfile.contains("COPY shell.nix ."));
        assert!(dockerfile.contains("CMD [\"nix-shell\"]"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(get_string("missing.tmpl").is_err());
    }
}
