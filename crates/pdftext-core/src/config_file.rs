use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// PDF processed when none is given on the command line.
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub color: Option<bool>,
}

impl ConfigFile {
    pub fn target(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.target.as_deref())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn color(&self) -> Option<bool> {
        self.display.as_ref().and_then(|d| d.color)
    }
}

/// Platform config directory path: `<config_dir>/pdftext/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pdftext").join("config.toml"))
}

/// Load config by cascading CWD `.pdftext.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".pdftext.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        input: Some(InputConfig {
            target: overlay
                .target()
                .or_else(|| base.target())
                .map(str::to_string),
        }),
        output: Some(OutputConfig {
            path: overlay
                .output_path()
                .or_else(|| base.output_path())
                .map(str::to_string),
        }),
        display: Some(DisplayConfig {
            color: overlay.color().or_else(|| base.color()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_round_trip_toml() {
        let config = ConfigFile {
            output: Some(OutputConfig {
                path: Some("/tmp/out.txt".to_string()),
            }),
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ConfigFile = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output_path(), Some("/tmp/out.txt"));
    }

    #[test]
    fn partial_config_parses() {
        let toml_str = "[input]\ntarget = \"paper.pdf\"\n";
        let parsed: ConfigFile = toml::from_str(toml_str).unwrap();
        assert_eq!(parsed.target(), Some("paper.pdf"));
        assert!(parsed.output_path().is_none());
        assert!(parsed.color().is_none());
    }

    #[test]
    fn merge_overlay_wins() {
        let base = ConfigFile {
            input: Some(InputConfig {
                target: Some("base.pdf".to_string()),
            }),
            display: Some(DisplayConfig { color: Some(true) }),
            ..Default::default()
        };
        let overlay = ConfigFile {
            input: Some(InputConfig {
                target: Some("overlay.pdf".to_string()),
            }),
            display: Some(DisplayConfig { color: Some(false) }),
            ..Default::default()
        };
        let merged = merge(base, overlay);
        assert_eq!(merged.target(), Some("overlay.pdf"));
        assert_eq!(merged.color(), Some(false));
    }

    #[test]
    fn merge_base_preserved_when_overlay_absent() {
        let base = ConfigFile {
            output: Some(OutputConfig {
                path: Some("/base/out.txt".to_string()),
            }),
            ..Default::default()
        };
        let merged = merge(base, ConfigFile::default());
        assert_eq!(merged.output_path(), Some("/base/out.txt"));
        assert!(merged.target().is_none());
    }

    #[test]
    fn unparseable_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[input\ntarget = ").unwrap();
        assert!(load_from_path(&path).is_none());
        assert!(load_from_path(&dir.path().join("missing.toml")).is_none());
    }
}
