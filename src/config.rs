use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const ENV_NAME_VAR: &str = "ACTC_ENV";
const OUTPUT_DIR_VAR: &str = "ACTC_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub env_name: String,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_extension() -> String {
    String::from("bat")
}

fn default_log_level() -> String {
    String::from("warn")
}

fn env_name() -> String {
    env::var(ENV_NAME_VAR).unwrap_or_else(|_| String::from("default"))
}

fn home_dir() -> PathBuf {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    PathBuf::from(env::var(var).unwrap_or_else(|_| String::from(".")))
}

impl Default for Config {
    fn default() -> Self {
        Config {
            env_name: env_name(),
            output_dir: None,
            output_extension: default_output_extension(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads the configuration for the current environment.
    ///
    /// Never fails: a missing file is created with defaults when possible,
    /// and an unreadable one falls back to defaults.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        let config = if config_path.exists() {
            Self::load_from(&config_path).unwrap_or_else(|e| {
                warn!("Ignoring config at {}: {}", config_path.display(), e);
                Config::default()
            })
        } else {
            let config = Config::default();
            if let Err(e) = config.save_to(&config_path) {
                debug!("Could not write default config to {}: {}", config_path.display(), e);
            }
            config
        };
        config.with_env_overrides()
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(io::Error::from)
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = env::var(OUTPUT_DIR_VAR) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn get_config_path() -> PathBuf {
        home_dir().join(".actc").join(env_name()).join("config.json")
    }

    /// Where `build` writes the script generated from `input`.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let file_name = input
            .with_extension(&self.output_extension)
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!("out.{}", self.output_extension)));

        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => input.with_file_name(file_name),
        }
    }
}
