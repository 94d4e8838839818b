use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub cors: Option<CorsConfig>,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadConfig {
    pub max_file_size_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DemoConfig {
    /// When enabled, processing failures and timeouts are papered over with a
    /// canned fallback payload instead of surfacing an error
    pub enabled: bool,
    pub timeout_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            upload: UploadConfig::default(),
            demo: DemoConfig::default(),
            logging: None,
        }
    }
}

impl ApiConfig {
    pub fn load(path_override: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match path_override {
            Some(path) => path.to_path_buf(),
            None => get_config_path(),
        };

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[server]
host = "127.0.0.1"
port = 8080

[cors]
allowed_origins = ["http://localhost:3000"]

[upload]
# Maximum accepted PDF size in bytes
max_file_size_bytes = 10485760

[demo]
# When enabled, processing failures and timeouts fall back to a canned payload
# so live presentations never show an error page
enabled = true
timeout_ms = 5000

# [logging]
# dir = "~/.local/state/rfidesk/logs"
"#;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        // Expand tilde in log directory path
        if let Some(logging) = config.logging.as_mut() {
            if logging.dir.starts_with("~") {
                if let Some(home) = home::home_dir() {
                    let path_str = logging.dir.to_string_lossy();
                    let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
                    logging.dir = PathBuf::from(expanded);
                }
            }
        }

        Ok((config, config_path))
    }
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("rfidesk/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
