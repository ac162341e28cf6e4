use anyhow::Result;
use platform_db::DatabaseSettings;
use platform_obs::ObsConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Prefix for hypermedia hrefs, without a trailing slash. Empty means relative links.
    pub public_base_url: String,
    pub cors_allowed_origins: Vec<String>,
    pub database: DatabaseSettings,
    pub obs: ObsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_base_url: String::new(),
            cors_allowed_origins: Vec::new(),
            database: DatabaseSettings::default(),
            obs: ObsConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let public_base_url = normalize_base_url(
            &std::env::var("PUBLIC_BASE_URL").unwrap_or_default(),
        );
        let cors_allowed_origins =
            split_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Self {
            public_base_url,
            cors_allowed_origins,
            database: DatabaseSettings::from_env()?,
            obs: ObsConfig::from_env(),
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" http://localhost:8080// "),
            "http://localhost:8080"
        );
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn origins_skip_blank_entries() {
        assert_eq!(
            split_origins("http://a.test, ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(split_origins("").is_empty());
    }
}
