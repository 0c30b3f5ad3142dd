use signbridge::infrastructure::observability::TracingConfig;
use signbridge::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_level_leads_the_directives() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
    assert!(config.default_directives.starts_with("warn,"));
    assert!(config.default_directives.contains("signbridge=debug"));
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert!(!config.default_directives.is_empty());
}
