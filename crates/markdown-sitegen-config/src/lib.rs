use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Directory holding `config.toml`, before tilde expansion.
const CONFIG_DIR: &str = "~/.config/markdown-sitegen";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Site layout read from `~/.config/markdown-sitegen/config.toml`.
///
/// Missing keys fall back to [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of static assets copied verbatim into the site.
    pub static_path: PathBuf,
    /// Directory the generated site is written to.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_path: PathBuf::from("static"),
            output_path: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Reads the config at the default location; `Ok(None)` if there is none.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Reads and parses `path`, expanding `~` and `$VAR` in both site paths.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.expand_paths();
        Ok(Some(config))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(Self::config_path())
    }

    /// Writes the config as TOML, creating parent directories.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, content).map_err(write_error)
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }

    /// Paths that fail to expand (e.g. an unset variable) are left as written.
    fn expand_paths(&mut self) {
        for path in [&mut self.static_path, &mut self.output_path] {
            if let Some(expanded) = expand(path) {
                *path = expanded;
            }
        }
    }
}

fn expand(path: &Path) -> Option<PathBuf> {
    shellexpand::full(&path.to_string_lossy())
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn config_lives_under_home() {
        let path = Config::config_path();
        let path = path.to_string_lossy();
        assert!(!path.starts_with('~'));
        assert!(path.ends_with(".config/markdown-sitegen/config.toml"));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config: Config = toml::from_str(r#"output_path = "site""#).unwrap();
        assert_eq!(config.static_path, PathBuf::from("static"));
        assert_eq!(config.output_path, PathBuf::from("site"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand(Path::new("~/site/static")).unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("site/static"));
    }

    #[test]
    fn relative_path_is_unchanged() {
        assert_eq!(
            expand(Path::new("relative/path")),
            Some(PathBuf::from("relative/path"))
        );
    }

    #[test]
    fn loading_expands_both_paths() {
        unsafe {
            env::set_var("SITEGEN_SITE_ROOT", "/srv/site");
        }
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("config.toml");
        fs::write(
            &file,
            "static_path = \"$SITEGEN_SITE_ROOT/static\"\noutput_path = \"$SITEGEN_SITE_ROOT/public\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&file).unwrap().unwrap();
        unsafe {
            env::remove_var("SITEGEN_SITE_ROOT");
        }

        assert_eq!(config.static_path, PathBuf::from("/srv/site/static"));
        assert_eq!(config.output_path, PathBuf::from("/srv/site/public"));
    }

    #[test]
    fn unset_variable_keeps_path_as_written() {
        let mut config = Config {
            static_path: PathBuf::from("$SITEGEN_NEVER_SET_VAR/static"),
            output_path: PathBuf::from("public"),
        };
        config.expand_paths();
        assert_eq!(config.static_path, PathBuf::from("$SITEGEN_NEVER_SET_VAR/static"));
    }

    #[test]
    fn absent_file_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from_path(temp_dir.path().join("nonexistent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn saved_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("nested/config.toml");
        let config = Config {
            static_path: PathBuf::from("/tmp/site/static"),
            output_path: PathBuf::from("/tmp/site/public"),
        };

        config.save_to_path(&file).unwrap();

        assert_eq!(Config::load_from_path(&file).unwrap(), Some(config));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("config.toml");
        fs::write(&file, "static_path = [not toml").unwrap();

        let err = Config::load_from_path(&file).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { ref path, .. } if *path == file));
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load_from_path(temp_dir.path()),
            Err(ConfigError::Read { .. })
        ));
    }
}
