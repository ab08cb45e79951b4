use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Effective render settings after applying config defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub enabled: bool,
    pub program: String,
    pub format: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "dot".to_string(),
            format: "png".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CliConfig {
    path: Option<PathBuf>,
    render: RenderSettings,
    output_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = explicit.or_else(default_config_path);
        let data = if let Some(config_path) = path.as_ref() {
            if config_path.exists() {
                read_file(config_path)?
            } else {
                RawConfig::default()
            }
        } else {
            RawConfig::default()
        };
        let render = convert_render(&data.render)?;
        Ok(Self {
            path,
            render,
            output_dir: data.output.directory,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn render(&self) -> &RenderSettings {
        &self.render
    }

    pub fn output_dir(&self) -> Option<&PathBuf> {
        self.output_dir.as_ref()
    }
}

fn read_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn convert_render(raw: &RawRender) -> Result<RenderSettings, ConfigError> {
    let defaults = RenderSettings::default();
    let program = match raw.program.as_deref().map(str::trim) {
        Some("") => return Err(ConfigError::EmptyProgram),
        Some(program) => program.to_string(),
        None => defaults.program,
    };
    let format = match raw.format.as_deref() {
        Some(format) => image_format(format)?,
        None => defaults.format,
    };
    Ok(RenderSettings {
        enabled: raw.enabled.unwrap_or(defaults.enabled),
        program,
        format,
    })
}

/// Normalizes an image format to a lowercase file extension.
///
/// Shared by `[render] format` and `--image-format`, since the value ends up in
/// output file names.
pub fn image_format(raw: &str) -> Result<String, ConfigError> {
    let format = raw.trim();
    if format.is_empty() || !format.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::InvalidFormat {
            value: format.to_string(),
        });
    }
    Ok(format.to_ascii_lowercase())
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    render: RawRender,
    #[serde(default)]
    output: RawOutput,
}

#[derive(Debug, Default, Deserialize)]
struct RawRender {
    enabled: Option<bool>,
    program: Option<String>,
    format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOutput {
    directory: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read CLI config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse CLI config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("render.program must not be empty")]
    EmptyProgram,
    #[error("image format '{value}' is invalid; expected an extension such as png or svg")]
    InvalidFormat { value: String },
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("linegraph").join("cli.toml"))
}
