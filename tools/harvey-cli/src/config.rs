//! Loading and saving the storefront config file.

use std::path::Path;

use anyhow::{Context, Result};

use harvey_commerce::config::StorefrontConfig;

/// File names searched for, in order of preference.
pub const CONFIG_NAMES: [&str; 3] = ["harvey.toml", ".harvey.toml", "harvey.json"];

/// Load config from a file. `.json` files are JSON, everything else TOML.
pub fn load(path: &Path) -> Result<StorefrontConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: StorefrontConfig = if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
    };

    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;

    Ok(config)
}

/// Save config to a file.
pub fn save(config: &StorefrontConfig, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Generate a commented default harvey.toml.
pub fn generate_default_config() -> String {
    let defaults = StorefrontConfig::default();
    format!(
        r#"# Shop with Harvey storefront configuration

[shop]
name = "{name}"

[order]
# Orders are handed off as a prefilled chat message.
base_url = "{base_url}"
phone = "{phone}"

[carousel]
interval_ms = {interval_ms}
autoplay = true

[contact]
email = "{email}"
phone = "{contact_phone}"
address = "{address}"

[log]
level = "info"
format = "human"
"#,
        name = defaults.shop.name,
        base_url = defaults.order.base_url,
        phone = defaults.order.phone,
        interval_ms = defaults.carousel.interval_ms,
        email = defaults.contact.email,
        contact_phone = defaults.contact.phone,
        address = defaults.contact.address,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        let defaults = StorefrontConfig::default();
        assert_eq!(parsed.order, defaults.order);
        assert_eq!(parsed.carousel, defaults.carousel);
        assert_eq!(parsed.contact, defaults.contact);
        assert_eq!(parsed.shop.name, defaults.shop.name);
    }

    #[test]
    fn test_load_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("harvey.toml");
        std::fs::write(&toml_path, "[carousel]\ninterval_ms = 3000\n").unwrap();
        assert_eq!(load(&toml_path).unwrap().carousel.interval_ms, 3000);

        let json_path = dir.path().join("harvey.json");
        std::fs::write(&json_path, r#"{"order": {"phone": "233200000000"}}"#).unwrap();
        let config = load(&json_path).unwrap();
        assert_eq!(config.order.phone, "233200000000");
        assert_eq!(config.order.base_url, "https://wa.me");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harvey.toml");
        std::fs::write(&path, "[carousel]\ninterval_ms = 0\n").unwrap();
        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("interval_ms"));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harvey.json");
        let mut config = StorefrontConfig::default();
        config.shop.name = "Harvey Test".to_string();

        save(&config, &path).unwrap();
        assert_eq!(load(&path).unwrap(), config);
    }
}
