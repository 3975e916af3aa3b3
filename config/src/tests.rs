//! Tests for the configuration module.

use super::*;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.agent.seed, None);
    assert_eq!(config.search.start_cycles, 128);
    assert_eq!(config.search.ramp_cycles, 64);
    assert_eq!(config.search.max_cycles, 1024);
    assert!(config.search.use_rave);
    assert_eq!(config.search.move_stat, "ledger");
    assert_eq!(config.rollout.max_plies, 74);
    assert_eq!(config.solver.max_branching, 8);
    assert!(!config.opening.anti_mirror);
    assert_eq!(config.opening.ply_limit, 4);
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[agent]
seed = 42

[search]
start_cycles = 32
max_cycles = 256
use_rave = false
move_stat = "tree"

[solver]
max_branching = 5
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.agent.seed, Some(42));
    assert_eq!(config.search.start_cycles, 32);
    assert_eq!(config.search.max_cycles, 256);
    assert!(!config.search.use_rave);
    assert_eq!(config.search.move_stat, "tree");
    assert_eq!(config.solver.max_branching, 5);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let toml_content = r#"
[rollout]
max_plies = 100
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.rollout.max_plies, 100);
    assert_eq!(config.search.start_cycles, 128); // Default
    assert_eq!(config.search.ramp_cycles, 64); // Default
    assert_eq!(config.opening.ply_limit, 4); // Default
}

#[test]
fn test_unknown_field_is_rejected() {
    let toml_content = r#"
[search]
simulations = 800
"#;
    assert!(toml::from_str::<CentralConfig>(toml_content).is_err());
}

#[test]
fn test_env_overrides() {
    std::env::set_var("NOGO_SEARCH_MAX_CYCLES", "2048");
    std::env::set_var("NOGO_SEARCH_USE_RAVE", "false");
    std::env::set_var("NOGO_AGENT_SEED", "7");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.search.max_cycles, 2048);
    assert!(!config.search.use_rave);
    assert_eq!(config.agent.seed, Some(7));

    std::env::remove_var("NOGO_SEARCH_MAX_CYCLES");
    std::env::remove_var("NOGO_SEARCH_USE_RAVE");
    std::env::remove_var("NOGO_AGENT_SEED");
}

#[test]
fn test_unparseable_env_override_is_ignored() {
    std::env::set_var("NOGO_ROLLOUT_MAX_PLIES", "not-a-number");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.rollout.max_plies, 74);

    std::env::remove_var("NOGO_ROLLOUT_MAX_PLIES");
}

#[test]
fn test_load_from_path() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]\nstart_cycles = 9\n[opening]\nanti_mirror = true").unwrap();

    let config = load_from_path(&file.path().to_path_buf());
    assert_eq!(config.search.start_cycles, 9);
    assert!(config.opening.anti_mirror);
}

#[test]
fn test_load_from_unreadable_path_falls_back_to_defaults() {
    let config = load_from_path(&std::path::PathBuf::from("/definitely/not/here.toml"));
    assert_eq!(config.search.start_cycles, 128);
}
