use super::Overrides;
use anyhow::{Context, Result, bail};
use chatline_core::config::ChatlineConfig;

/// Prints the effective configuration with the token masked.
pub fn show(overrides: &Overrides) -> Result<()> {
    let mut config = overrides.load_config()?;
    if let Some(token) = config.auth.token.as_mut() {
        *token = mask(token);
    }
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    println!("{}", rendered);
    Ok(())
}

pub fn init(overrides: &Overrides, force: bool) -> Result<()> {
    let service = overrides.config_service()?;
    if service.path().exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            service.path().display()
        );
    }
    service
        .save(&ChatlineConfig::default())
        .context("Failed to write configuration")?;
    println!("Wrote {}", service.path().display());
    Ok(())
}

pub fn path(overrides: &Overrides) -> Result<()> {
    println!("{}", overrides.config_service()?.path().display());
    Ok(())
}

fn mask(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_prefix_only() {
        assert_eq!(mask("abcdef123"), "abcd****");
        assert_eq!(mask("abc"), "****");
    }
}
