//! Tests for configuration loading and saving

use moulberry_utils::Error;
use moulberry_utils::config::UtilsConfig;

use crate::common::TestConfig;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn missing_file_loads_defaults() {
    let fixture = TestConfig::empty();
    let config = UtilsConfig::load_from(&fixture.path()).unwrap();
    assert_eq!(config, UtilsConfig::default());
    assert!(config.seed.is_none());
    assert!(config.tables.is_empty());
}

#[test]
fn loads_tables_and_seed() {
    let fixture = TestConfig::with_content(
        r#"
seed = 42

[tables.loot]
sword = 1.0
shield = 3.0
potion = 6.0

[tables.weather]
sun = 5
rain = 2
"#,
    );

    let config = UtilsConfig::load_from(&fixture.path()).unwrap();
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.tables.len(), 2);

    let loot = config.table("loot").unwrap();
    assert_eq!(loot.len(), 3);
    assert_eq!(loot.total_weight(), 10.0);
    assert_eq!(loot.weight_of("potion"), Some(6.0));

    let weather = config.table("weather").unwrap();
    assert_eq!(weather.total_weight(), 7.0);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let fixture = TestConfig::with_content("seed = \"not a number\"\n");
    let err = UtilsConfig::load_from(&fixture.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn negative_weight_fails_when_building_table() {
    let fixture = TestConfig::with_content("[tables.bad]\nx = -1.0\n");
    let config = UtilsConfig::load_from(&fixture.path()).unwrap();
    assert!(matches!(config.table("bad"), Err(Error::InvalidWeight(_))));
}

// =============================================================================
// SAVING
// =============================================================================

#[test]
fn save_then_load() {
    let fixture = TestConfig::empty();

    let mut config = UtilsConfig {
        seed: Some(9),
        ..UtilsConfig::default()
    };
    config.set_entry("loot", "sword", 1.5);
    config.set_entry("loot", "bow", 2.5);
    config.save_to(&fixture.path()).unwrap();

    let loaded = UtilsConfig::load_from(&fixture.path()).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.table("loot").unwrap().total_weight(), 4.0);
}

#[test]
fn save_creates_parent_directories() {
    let fixture = TestConfig::empty();
    let nested = fixture.path().with_file_name("nested").join("deeper").join("config.toml");

    UtilsConfig::default().save_to(&nested).unwrap();
    assert!(nested.exists());
}

#[test]
fn set_entry_replaces_weight() {
    let mut config = UtilsConfig::default();
    config.set_entry("t", "a", 1.0);
    config.set_entry("t", "a", 4.0);
    assert_eq!(config.tables["t"]["a"], 4.0);
}
