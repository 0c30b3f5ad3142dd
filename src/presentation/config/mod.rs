mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AssetSettings, ConversionSettings, GeneratorProvider, GeneratorSettings, LoggingSettings,
    MediaSettings, ServerSettings, Settings,
};
