use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Basic-auth credentials for the WebDAV endpoint. Read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"***")
            .finish()
    }
}

/// Global configuration loaded from `~/.config/ow/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct OwConfig {
    /// Nextcloud base URL, e.g. `https://cloud.example.com`.
    pub server: String,
    /// Where files are synchronized locally.
    pub local_sync_folder: PathBuf,
    /// Root of `local_sync_folder` on the server. Informational only.
    #[serde(default = "default_remote_destination_folder")]
    pub remote_destination_folder: String,
    pub username: String,
    /// Account password; use an app password when multi-factor auth is enabled.
    pub password: String,
}

fn default_remote_destination_folder() -> String {
    "/".to_string()
}

impl Default for OwConfig {
    fn default() -> Self {
        Self {
            server: "http://localhost:8080".to_string(),
            local_sync_folder: PathBuf::from("/home/user/Nextcloud"),
            remote_destination_folder: default_remote_destination_folder(),
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl fmt::Debug for OwConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwConfig")
            .field("server", &self.server)
            .field("local_sync_folder", &self.local_sync_folder)
            .field("remote_destination_folder", &self.remote_destination_folder)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl OwConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            secret: self.password.clone(),
        }
    }

    /// Applies `OW_*` environment overrides through `lookup` and normalizes the server URL.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("OW_SERVER") {
            self.server = v;
        }
        if let Some(v) = lookup("OW_USERNAME") {
            self.username = v;
        }
        if let Some(v) = lookup("OW_PASSWORD") {
            self.password = v;
        }
        if let Some(v) = lookup("OW_SYNC_FOLDER") {
            self.local_sync_folder = PathBuf::from(v);
        }
        if self.server.ends_with('/') {
            self.server.pop();
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ow")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// Environment overrides are applied in both cases.
pub fn load_or_init() -> Result<OwConfig> {
    let path = config_path()?;
    let cfg = if !path.exists() {
        let default_cfg = OwConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg
    } else {
        let data = fs::read_to_string(&path)?;
        toml::from_str(&data)?
    };
    Ok(cfg.apply_overrides(|key| std::env::var(key).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = OwConfig::default();
        assert_eq!(cfg.server, "http://localhost:8080");
        assert_eq!(cfg.local_sync_folder, PathBuf::from("/home/user/Nextcloud"));
        assert_eq!(cfg.remote_destination_folder, "/");
        assert_eq!(cfg.username, "admin");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = OwConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: OwConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.server, cfg.server);
        assert_eq!(parsed.local_sync_folder, cfg.local_sync_folder);
        assert_eq!(parsed.password, cfg.password);
    }

    #[test]
    fn config_toml_custom_values_without_remote_folder() {
        let toml = r#"
            server = "https://cloud.example.com/"
            local_sync_folder = "/srv/sync"
            username = "alice"
            password = "app-token"
        "#;
        let cfg: OwConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.remote_destination_folder, "/");
        let cfg = cfg.apply_overrides(|_| None);
        assert_eq!(cfg.server, "https://cloud.example.com");
        assert_eq!(cfg.credentials().username, "alice");
        assert_eq!(cfg.credentials().secret, "app-token");
    }

    #[test]
    fn env_overrides_take_precedence() {
        let cfg = OwConfig::default().apply_overrides(|key| match key {
            "OW_PASSWORD" => Some("from-env".to_string()),
            "OW_SYNC_FOLDER" => Some("/data/cloud".to_string()),
            _ => None,
        });
        assert_eq!(cfg.password, "from-env");
        assert_eq!(cfg.local_sync_folder, PathBuf::from("/data/cloud"));
        assert_eq!(cfg.username, "admin");
    }

    #[test]
    fn debug_output_hides_secret() {
        let cfg = OwConfig::default();
        let shown = format!("{:?} {:?}", cfg, cfg.credentials());
        assert!(shown.contains("***"));
        assert!(!shown.contains("password: \"admin\""));
    }
}
