use std::{fs::read, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Error;

const SETTINGS_FILENAME: &str = ".fips-settings.json";

/// Per-project build settings, stored next to the project sources. Only the
/// `config` key is consulted here.
#[derive(Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub config: Option<String>,
}

impl Settings {
    pub fn load(proj_dir: &Path) -> Result<Self, Error> {
        let path = proj_dir.join(SETTINGS_FILENAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let bytes = read(&path).map_err(Error::ReadSettings)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Resolve the build configuration for a project: the settings file if it
/// names one, the platform default otherwise.
pub fn get_config(proj_dir: &Path) -> Result<String, Error> {
    Ok(Settings::load(proj_dir)?
        .config
        .unwrap_or_else(|| default_config().to_owned()))
}

pub fn default_config() -> &'static str {
    if cfg!(target_os = "macos") {
        "osx-xcode-debug"
    } else if cfg!(windows) {
        "win64-vstudio-debug"
    } else {
        "linux-make-debug"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        env::temp_dir,
        fs::{create_dir_all, remove_dir_all, write},
        path::PathBuf,
    };

    fn project_dir(name: &str) -> PathBuf {
        let dir = temp_dir().join("shdc-test-settings").join(name);
        let _ = remove_dir_all(&dir);
        create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_settings_file_falls_back_to_default() {
        let dir = project_dir("missing");
        assert_eq!(get_config(&dir).unwrap(), default_config());
    }

    #[test]
    fn settings_file_names_the_config() {
        let dir = project_dir("named");
        write(
            dir.join(SETTINGS_FILENAME),
            r#"{"config": "linux-ninja-release"}"#,
        )
        .unwrap();
        assert_eq!(get_config(&dir).unwrap(), "linux-ninja-release");
    }

    #[test]
    fn settings_file_without_config_key_falls_back_to_default() {
        let dir = project_dir("empty");
        write(dir.join(SETTINGS_FILENAME), "{}").unwrap();
        assert_eq!(get_config(&dir).unwrap(), default_config());
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let dir = project_dir("malformed");
        write(dir.join(SETTINGS_FILENAME), "not json").unwrap();
        assert!(matches!(
            get_config(&dir),
            Err(Error::ParseSettings(_))
        ));
    }
}
