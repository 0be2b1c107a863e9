use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// User settings shared by the trigger layer and the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the YouTrack instance, e.g. "https://yt.example.com".
    /// Empty means not configured yet.
    #[serde(default)]
    pub tracker_url: String,

    /// Repository paths ("org/repo") whose pull-request pages should be
    /// labeled. Empty means every repository.
    #[serde(default)]
    pub watched_repos: Vec<String>,
}

impl Settings {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        } else {
            builder = builder.add_source(config::File::with_name("ytlink").required(false));
        }

        // Environment variable overrides with YTLINK_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("YTLINK")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder
            .build()
            .map_err(|e| Error::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(settings.normalize())
    }

    /// Apply the same sanitation the options form performs: trim the tracker
    /// URL and strip one trailing slash, trim repo lines and drop empties.
    pub fn normalize(self) -> Self {
        let tracker_url = self
            .tracker_url
            .trim()
            .trim_end_matches('/')
            .to_string();

        let watched_repos = self
            .watched_repos
            .into_iter()
            .map(|repo| repo.trim().to_string())
            .filter(|repo| !repo.is_empty())
            .collect();

        Self {
            tracker_url,
            watched_repos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.tracker_url, "");
        assert!(settings.watched_repos.is_empty());
    }

    #[test]
    fn test_parse_settings_toml() {
        let toml_str = r#"
tracker_url = "https://yt.example.com"
watched_repos = ["org/repo", "org/other"]
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.tracker_url, "https://yt.example.com");
        assert_eq!(settings.watched_repos.len(), 2);
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        let settings = Settings {
            tracker_url: " https://yt.example.com/ ".to_string(),
            watched_repos: vec![],
        }
        .normalize();
        assert_eq!(settings.tracker_url, "https://yt.example.com");
    }

    #[test]
    fn test_normalize_drops_blank_repos() {
        let settings = Settings {
            tracker_url: String::new(),
            watched_repos: vec!["  org/repo ".to_string(), "   ".to_string(), String::new()],
        }
        .normalize();
        assert_eq!(settings.watched_repos, vec!["org/repo".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ytlink.toml");
        fs::write(
            &path,
            "tracker_url = \"https://yt.example.com/\"\nwatched_repos = [\"org/repo\"]\n",
        )
        .unwrap();

        let settings = Settings::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(settings.tracker_url, "https://yt.example.com");
        assert_eq!(settings.watched_repos, vec!["org/repo".to_string()]);
    }
}
