use clausewise::infrastructure::observability::TracingConfig;
use clausewise::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_values_are_carried_over() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert_eq!(config.environment, "Prod");
    assert_eq!(config.level, "warn");
    assert!(config.json_format);
}

#[test]
fn given_defaults_then_config_is_local_plain_text_info() {
    let config = TracingConfig::default();

    assert_eq!(config.environment, "Local");
    assert_eq!(config.level, "info");
    assert!(!config.json_format);
}

#[test]
fn given_environment_names_when_parsing_then_aliases_are_accepted() {
    assert_eq!(Environment::try_from("PROD".to_string()), Ok(Environment::Prod));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}
