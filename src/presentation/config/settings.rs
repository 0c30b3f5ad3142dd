use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use config::Environment as EnvironmentSource;
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::llm::DEFAULT_GEMINI_MODEL;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub assets: AssetSettings,
    pub generator: GeneratorSettings,
    pub media: MediaSettings,
    pub conversion: ConversionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetSettings {
    pub video_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    pub provider: GeneratorProvider,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorProvider {
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
    Passthrough,
}

impl fmt::Display for GeneratorProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeneratorProvider::Gemini => "gemini",
            GeneratorProvider::OpenAi => "openai",
            GeneratorProvider::Passthrough => "passthrough",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaSettings {
    pub ffmpeg_path: String,
    pub output_dir: Option<String>,
}

impl MediaSettings {
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .as_ref()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionSettings {
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml` if present, then `APP__*` variables.
    ///
    /// Nested keys use `__`, e.g. `APP__GENERATOR__API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name(&environment.settings_file_stem()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    pub fn from_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.cors_origins", Vec::<String>::new())?
            .set_default("assets.video_dir", "assets")?
            .set_default("generator.provider", "gemini")?
            .set_default(
                "generator.api_key",
                std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            )?
            .set_default("generator.model", DEFAULT_GEMINI_MODEL)?
            .set_default("generator.temperature", 0.2)?
            .set_default("media.ffmpeg_path", "ffmpeg")?
            .set_default("conversion.max_input_chars", 1000)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }
}
