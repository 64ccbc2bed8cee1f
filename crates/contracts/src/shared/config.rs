use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub ui: UiSection,
    pub forecast: ForecastSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiSection {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ForecastSection {
    /// Absolute variance (percent of forecast) above which a craft is critical.
    pub variance_threshold_percent: f64,
    /// Period shown by default, `YYYY-MM`.
    pub current_period: String,
}

/// Default configuration, used when the bundled file is missing or invalid.
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "Monthly Labor Forecast"
subtitle = "Fabrication yard labor planning"

[ui]
default_page_size = 10
page_size_options = [10, 25, 50]

[forecast]
variance_threshold_percent = 10.0
current_period = "2026-10"
"#;

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.ui.default_page_size == 0 {
            anyhow::bail!("ui.default_page_size must be greater than zero");
        }
        if !self.ui.page_size_options.contains(&self.ui.default_page_size) {
            anyhow::bail!(
                "ui.default_page_size {} is not one of ui.page_size_options",
                self.ui.default_page_size
            );
        }
        let threshold = self.forecast.variance_threshold_percent;
        if !threshold.is_finite() || threshold <= 0.0 {
            anyhow::bail!("forecast.variance_threshold_percent must be a positive number");
        }
        let first_day = format!("{}-01", self.forecast.current_period);
        if chrono::NaiveDate::parse_from_str(&first_day, "%Y-%m-%d").is_err() {
            anyhow::bail!(
                "forecast.current_period '{}' is not in YYYY-MM format",
                self.forecast.current_period
            );
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        // DEFAULT_CONFIG is covered by tests
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| AppConfig {
            app: AppSection {
                title: "Monthly Labor Forecast".to_string(),
                subtitle: String::new(),
            },
            ui: UiSection {
                default_page_size: 10,
                page_size_options: vec![10, 25, 50],
            },
            forecast: ForecastSection {
                variance_threshold_percent: 10.0,
                current_period: "2026-10".to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.app.title, "Monthly Labor Forecast");
        assert_eq!(config.ui.default_page_size, 10);
        assert_eq!(config.forecast.variance_threshold_percent, 10.0);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_rejects_page_size_outside_options() {
        let contents = DEFAULT_CONFIG.replace("default_page_size = 10", "default_page_size = 15");
        let err = AppConfig::from_toml_str(&contents).unwrap_err();
        assert!(err.to_string().contains("page_size_options"));
    }

    #[test]
    fn test_rejects_missing_section() {
        assert!(AppConfig::from_toml_str("[app]\ntitle = \"x\"\nsubtitle = \"y\"").is_err());
    }

    #[test]
    fn test_rejects_malformed_period() {
        let contents = DEFAULT_CONFIG.replace("\"2026-10\"", "\"2026-13\"");
        let err = AppConfig::from_toml_str(&contents).unwrap_err();
        assert!(err.to_string().contains("YYYY-MM"));
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let contents = DEFAULT_CONFIG.replace(
            "variance_threshold_percent = 10.0",
            "variance_threshold_percent = 0.0",
        );
        assert!(AppConfig::from_toml_str(&contents).is_err());
    }

    #[test]
    fn test_rejects_nan_and_infinite_threshold() {
        for value in ["nan", "inf"] {
            let contents = DEFAULT_CONFIG.replace(
                "variance_threshold_percent = 10.0",
                &format!("variance_threshold_percent = {value}"),
            );
            let err = AppConfig::from_toml_str(&contents).unwrap_err();
            assert!(err.to_string().contains("positive number"), "{value}");
        }
    }
}
