//! Configuration module for folio.

use anyhow::{Context, Result, anyhow};
use std::io::{self, Write};
use std::path::Path;

pub mod keybindings;

pub use keybindings::{Action, KeyBindingsConfig, ViewType};

/// Initialize keybindings configuration file with defaults.
pub fn init_keybindings(output: Option<&Path>, force: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => keybindings::default_config_path()
            .ok_or_else(|| anyhow!("could not determine the user config directory"))?,
    };

    if write_keybindings_config(&output_path, force)? {
        println!("✓ Wrote keybindings config: {}", output_path.display());
        println!();
        println!("Edit this file to customise key bindings.");
        println!("Restart `folio tui` to apply changes.");
    } else {
        println!("Aborted.");
    }
    Ok(())
}

fn write_keybindings_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force && !confirm_overwrite(path)? {
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let content = keybindings::generate_default_config_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file {}", path.display()))?;
    Ok(true)
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!("File already exists: {}\nOverwrite? [y/N]: ", path.display());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
