use std::io::Write;

use signbridge::presentation::config::{GeneratorProvider, Settings};

#[test]
fn given_no_sources_when_loading_defaults_then_service_is_fully_configured() {
    let settings = Settings::from_defaults().unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8000);
    assert!(settings.server.cors_origins.is_empty());
    assert_eq!(settings.assets.video_dir, "assets");
    assert_eq!(settings.generator.provider, GeneratorProvider::Gemini);
    assert_eq!(settings.generator.model, "gemini-2.0-flash");
    assert!(settings.generator.base_url.is_none());
    assert_eq!(settings.media.ffmpeg_path, "ffmpeg");
    assert_eq!(settings.conversion.max_input_chars, 1000);
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_toml_file_when_loading_then_file_values_override_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[server]
port = 9100
cors_origins = ["http://localhost:5173"]

[assets]
video_dir = "/srv/videos"

[generator]
provider = "openai"
api_key = "sk-test"
model = "gpt-4o-mini"
base_url = "http://localhost:1234/v1"

[media]
output_dir = "/var/tmp/signbridge"
"#
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();

    assert_eq!(settings.server.port, 9100);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.cors_origins, vec!["http://localhost:5173"]);
    assert_eq!(settings.assets.video_dir, "/srv/videos");
    assert_eq!(settings.generator.provider, GeneratorProvider::OpenAi);
    assert_eq!(settings.generator.api_key, "sk-test");
    assert_eq!(
        settings.generator.base_url.as_deref(),
        Some("http://localhost:1234/v1")
    );
    assert_eq!(
        settings.media.resolved_output_dir(),
        std::path::PathBuf::from("/var/tmp/signbridge")
    );
}

#[test]
fn given_no_output_dir_when_resolving_then_uses_system_temp_dir() {
    let settings = Settings::from_defaults().unwrap();

    assert_eq!(settings.media.resolved_output_dir(), std::env::temp_dir());
}
