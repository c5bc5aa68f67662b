// ABIScope - Contract Interface Analyzer
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use abiscope_engine::{AnalyzerConfig, ConfigError, CostModel, InterfaceAnalyzer, DEFAULT_MAX_DEPTH};
use tracing::info;

#[test]
fn test_default_config() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let config = AnalyzerConfig::default();

    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.cost.base, 21_000);
    assert_eq!(config.cost.per_input, 5_000);
    assert_eq!(config.cost.array_penalty, 20_000);
}

#[test]
fn test_config_builder() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let cost = CostModel { base: 1, per_input: 2, array_penalty: 3 };
    let config = AnalyzerConfig::default().with_max_depth(8).with_cost_model(cost);

    assert_eq!(config.max_depth, 8);
    assert_eq!(config.cost, cost);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let config = AnalyzerConfig::from_toml_str(
        r#"
        [cost]
        base = 50000
        "#,
    )
    .unwrap();

    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.cost.base, 50_000);
    assert_eq!(config.cost.per_input, 5_000);
}

#[test]
fn test_invalid_toml() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let result = AnalyzerConfig::from_toml_str("max_depth = \"deep\"");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_save_and_load_round_trip() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abiscope.toml");

    let config = AnalyzerConfig::default()
        .with_max_depth(12)
        .with_cost_model(CostModel { base: 30_000, per_input: 1_000, array_penalty: 0 });
    config.save(&path).unwrap();

    assert_eq!(AnalyzerConfig::load(&path).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let dir = tempfile::tempdir().unwrap();
    let result = AnalyzerConfig::load(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_cost_model_flows_into_analysis() {
    abiscope_common::logging::ensure_test_logging(None);
    info!("Running test");
    let config = AnalyzerConfig::default().with_cost_model(CostModel {
        base: 100,
        per_input: 10,
        array_penalty: 1_000,
    });
    let analyzer = InterfaceAnalyzer::new(config);
    let interface = analyzer.analyze(
        r#"[{"type":"function","name":"batch","stateMutability":"nonpayable",
             "inputs":[{"name":"ids","type":"uint256[]"}]}]"#,
    );

    assert_eq!(interface.functions()[0].cost_estimate.gas(), Some(1_110));
}
