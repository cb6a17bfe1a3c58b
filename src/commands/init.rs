//! Write a config file spelling out the built-in axes.
use crate::commands::generate::{Config, GenError};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub fn run_init(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    if path.exists() {
        warn!("Overwriting {}", path.display());
    }
    let text = render_default_config()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| GenError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

pub fn render_default_config() -> Result<String, GenError> {
    let mut text = String::new();
    text.push_str("# guardgen axes. Every attribute needs an explicit family (server | client);\n");
    text.push_str("# silent attributes skip the call without a warning.\n");
    text.push_str(&Config::default().to_toml_string()?);
    Ok(text)
}
