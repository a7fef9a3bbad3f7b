//! Unit tests for the edge default configuration.

use geo_place::config::Config;
use geo_place::error::Error;

#[test]
fn test_default_config() {
    let config = Config::new();

    assert_eq!(config.default_pheromone, 1.0);
    assert_eq!(config.default_indicator, 0.0);
    assert!(!config.legacy_indicator_write);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_methods() {
    let config = Config::new()
        .with_default_pheromone(0.2)
        .with_default_indicator(0.7)
        .with_legacy_indicator_write(true);

    assert_eq!(config.default_pheromone, 0.2);
    assert_eq!(config.default_indicator, 0.7);
    assert!(config.legacy_indicator_write);
}

#[test]
fn test_validate_rejects_non_finite_defaults() {
    let config = Config::new().with_default_pheromone(f64::INFINITY);
    assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));

    let config = Config::new().with_default_indicator(f64::NAN);
    assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_config_from_json() {
    let json = r#"{"default_pheromone":0.5,"default_indicator":0.0,"legacy_indicator_write":true}"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config, Config::new().with_default_pheromone(0.5).with_legacy_indicator_write(true));
}
