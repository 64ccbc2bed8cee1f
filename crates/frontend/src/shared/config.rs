use contracts::shared::config::AppConfig;
use leptos::prelude::*;

const BUNDLED_CONFIG: &str = include_str!("../../config.toml");

/// Parses the bundled `config.toml`, falling back to the defaults.
pub fn load_config() -> AppConfig {
    match AppConfig::from_toml_str(BUNDLED_CONFIG) {
        Ok(config) => {
            log::info!("Loaded bundled config.toml");
            config
        }
        Err(e) => {
            log::warn!("Invalid bundled config.toml, using defaults: {e:#}");
            AppConfig::default()
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = AppConfig::from_toml_str(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.ui.page_size_options, vec![5, 10, 25, 50]);
    }
}
