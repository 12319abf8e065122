use serde::Deserialize;
use thiserror::Error;

/// Site configuration embedded at compile time.
const EMBEDDED_CONFIG: &str = include_str!("../portfolio.json");

/// Errors produced while loading [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("ssh_command must not be empty")]
    EmptyCommand,
    #[error("script must contain at least one line")]
    EmptyScript,
    #[error("type_speed_ms must be greater than zero")]
    ZeroTypeSpeed,
}

/// Static content of the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Text shown in the terminal title bar
    pub title: String,
    /// Command revealed after the intro and copied by the copy button
    pub ssh_command: String,
    /// Help/README link opened in a new tab
    pub help_url: String,
    /// Optional hint shown under the command (e.g. a guest password)
    pub password_hint: Option<String>,
    /// Delay between typed characters
    pub type_speed_ms: u32,
    /// Intro lines, may contain `^<ms>` pause markers
    pub script: Vec<String>,
}

impl SiteConfig {
    /// Load the configuration shipped with the binary.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ssh_command.trim().is_empty() {
            return Err(ConfigError::EmptyCommand);
        }
        if self.script.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        if self.type_speed_ms == 0 {
            return Err(ConfigError::ZeroTypeSpeed);
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "portfolio@adamdeleeuw.ca".to_string(),
            ssh_command: "ssh portfolio.adamdeleeuw.ca".to_string(),
            help_url: "https://github.com/adamdeleeuw/ssh-portfolio".to_string(),
            password_hint: None,
            type_speed_ms: 40,
            script: vec![
                "Connecting to portfolio...^500".to_string(),
                "HTTP is for losers.^800".to_string(),
                " ".to_string(),
                "To explore my portfolio, SSH instead:^500".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_default() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.ssh_command, "ssh portfolio.adamdeleeuw.ca");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = SiteConfig::from_json(r#"{"ssh_command": "ssh example.org"}"#).unwrap();
        assert_eq!(config.ssh_command, "ssh example.org");
        assert_eq!(config.type_speed_ms, 40);
        assert_eq!(config.script.len(), 4);
        assert!(config.password_hint.is_none());
    }

    #[test]
    fn test_password_hint_is_optional() {
        let config = SiteConfig::from_json(r#"{"password_hint": "password: guest"}"#).unwrap();
        assert_eq!(config.password_hint.as_deref(), Some("password: guest"));
    }

    #[test]
    fn test_rejects_blank_command() {
        let err = SiteConfig::from_json(r#"{"ssh_command": "   "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCommand));
    }

    #[test]
    fn test_rejects_empty_script() {
        let err = SiteConfig::from_json(r#"{"script": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyScript));
    }

    #[test]
    fn test_rejects_zero_type_speed() {
        let err = SiteConfig::from_json(r#"{"type_speed_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTypeSpeed));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }
}
