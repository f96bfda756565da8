use std::{env, fmt, fs, path};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum Error {
    ReadFailed(()),
    WriteFailed(()),
    ParseFailed(()),
    ConfigPathUnavailable,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api: Api,
    pub poll: Poll,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Api {
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Poll {
    pub interval_secs: u64,
}

/// Used to ensure we are actually reading a toml file
fn normalize_toml_path(path: &path::Path) -> path::PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().map(|ext| ext != "toml").unwrap_or(true) {
        path.set_extension("toml");
    }
    path
}

/// Get default config path ($XDG_CONFIG_HOME/upwatch/config.toml or
/// $HOME/.config/...)
fn default_config_path() -> Result<path::PathBuf, Error> {
    let path = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        path::PathBuf::from(config_home)
    } else if let Some(home_dir) = env::home_dir() {
        home_dir.join(".config")
    } else {
        return Err(Error::ConfigPathUnavailable);
    };

    Ok(path.join("upwatch/config.toml"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Api { base_url: "http://127.0.0.1:8080".into() },
            poll: Poll { interval_secs: 60 },
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let write_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str, value: &dyn fmt::Display| {
                writeln!(f, "  {:indent$}{}: {}", "", label, value, indent = level * 2)
            }
        };
        let write_title_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str| {
                writeln!(f, "{:indent$}{}", "", label, indent = level * 2)
            }
        };

        let write_title_1 = write_title_indented(1);
        let write_1 = write_indented(1);

        writeln!(f, "Current Internal Configuration State:")?;
        write_title_1(f, "Api")?;
        write_1(f, "Base URL", &self.api.base_url)?;
        write_title_1(f, "Poll")?;
        write_1(f, "Interval (s)", &self.poll.interval_secs)?;

        Ok(())
    }
}

impl Config {
    /// Generate Config structure from file
    ///
    /// Creates a default config in ~/.config/upwatch/config.toml
    ///  or the specified path, with the name config.toml if one does not exist
    ///
    /// ```rust
    /// let cfg = config::Config::from_config(None::<&path::Path>)?;
    /// println!("{}", cfg);
    /// ```
    pub fn from_config(optional_path: Option<impl AsRef<path::Path>>) -> Result<Self, Error> {
        let config_path: path::PathBuf = if let Some(path) = optional_path {
            normalize_toml_path(path.as_ref())
        } else {
            default_config_path()?
        };

        if config_path.exists() {
            let raw_string =
                fs::read_to_string(&config_path).map_err(|_err| Error::ReadFailed(()))?;
            toml::from_str(raw_string.as_str()).map_err(|_err| Error::ParseFailed(()))
        } else {
            let config = Self::default();
            config.write_config(&config_path)?;
            Ok(config)
        }
    }

    /// Serialize and write a config to a file
    pub fn write_config(&self, path: &std::path::Path) -> Result<(), Error> {
        let config_str: String =
            toml::to_string_pretty(self).map_err(|_err| Error::ParseFailed(()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_err| Error::WriteFailed(()))?;
        }

        std::fs::write(path, config_str).map_err(|_err| Error::WriteFailed(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            api: Api { base_url: "http://store.internal:9000".into() },
            poll: Poll { interval_secs: 15 },
        };
        config.write_config(&path).unwrap();

        let loaded = Config::from_config(Some(&path)).unwrap();
        assert_eq!(loaded.api.base_url, "http://store.internal:9000");
        assert_eq!(loaded.poll.interval_secs, 15);
    }

    #[test]
    fn test_missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.toml");

        let config = Config::from_config(Some(&path)).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.poll.interval_secs, 60);
        assert!(path.exists());
    }

    #[test]
    fn test_extension_is_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        Config::from_config(Some(&path)).unwrap();
        assert!(dir.path().join("config.toml").exists());
    }
}
