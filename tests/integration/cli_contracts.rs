use std::fs;

use cabinet::tooling::cli::{Cli, CliContext, Commands};
use cabinet::ApiError;
use clap::Parser;
use tempfile::TempDir;

const NESTED_LAYOUT: &str = r#"
name = "C"
size = "large"

[[folders]]
name = "B"
size = "large"

[[folders.folders]]
name = "A"
size = "small"
folders = [
    { name = "Test1", size = "small" },
    { name = "Test2", size = "medium" },
]

[[folders.folders]]
name = "Test6"
size = "large"

[[folders]]
name = "Test7"
size = "medium"
"#;

fn nested_context(temp_dir: &TempDir) -> CliContext {
    let layout = temp_dir.path().join("layout.toml");
    fs::write(&layout, NESTED_LAYOUT).unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "").unwrap();
    CliContext::new(Some(layout), Some(config)).unwrap()
}

fn json(output: &str) -> serde_json::Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["cabinet", "list"],
        vec!["cabinet", "count", "--format", "json"],
        vec!["cabinet", "find-name", "Test1"],
        vec!["cabinet", "find-name"],
        vec!["cabinet", "find-size", "medium", "--format", "json"],
        vec!["cabinet", "validate"],
        vec!["cabinet", "--layout", "layout.toml", "list"],
        vec!["cabinet", "--log-level", "debug", "--log-format", "json", "count"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_commands() {
    assert!(Cli::try_parse_from(["cabinet"]).is_err());
    assert!(Cli::try_parse_from(["cabinet", "delete"]).is_err());
}

#[test]
fn list_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let cli = nested_context(&temp_dir);

    let output = cli
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed = json(&output);

    assert_eq!(parsed["cabinet"], "C");
    assert_eq!(parsed["count"], 6);
    let folders = parsed["folders"].as_array().expect("folders array");
    let names: Vec<&str> = folders.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["B", "A", "Test1", "Test2", "Test6", "Test7"]);
    let depths: Vec<u64> = folders.iter().map(|f| f["depth"].as_u64().unwrap()).collect();
    assert_eq!(depths, vec![0, 1, 2, 2, 1, 0]);
    assert_eq!(folders[0]["kind"], "cabinet");
    assert_eq!(folders[2]["kind"], "folder");
}

#[test]
fn find_name_json_contract() {
    let temp_dir = TempDir::new().unwrap();
    let cli = nested_context(&temp_dir);

    let output = cli
        .execute(&Commands::FindName {
            name: Some(" TEST1 ".to_string()),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed = json(&output);
    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["folder"]["name"], "Test1");
    assert_eq!(parsed["folder"]["size"], "small");

    let output = cli
        .execute(&Commands::FindName {
            name: None,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed = json(&output);
    assert_eq!(parsed["found"], false);
    assert!(parsed["folder"].is_null());
}

#[test]
fn find_size_json_contract() {
    let temp_dir = TempDir::new().unwrap();
    let cli = nested_context(&temp_dir);

    let output = cli
        .execute(&Commands::FindSize {
            size: Some("medium".to_string()),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed = json(&output);
    assert_eq!(parsed["size"], "medium");
    assert_eq!(parsed["count"], 2);
    let names: Vec<&str> = parsed["folders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Test2", "Test7"]);
}

#[test]
fn find_size_rejects_invalid_size() {
    let temp_dir = TempDir::new().unwrap();
    let cli = nested_context(&temp_dir);

    for size in [None, Some("bogus".to_string())] {
        let err = cli
            .execute(&Commands::FindSize {
                size,
                format: "text".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Query(_)));
        assert_eq!(err.to_string(), "Invalid folder size.");
    }
}

#[test]
fn count_and_validate_json_contracts() {
    let temp_dir = TempDir::new().unwrap();
    let cli = nested_context(&temp_dir);

    let count = json(
        &cli.execute(&Commands::Count {
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(count["cabinet"], "C");
    assert_eq!(count["count"], 6);

    let validate = json(
        &cli.execute(&Commands::Validate {
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(validate["valid"], true);
    assert_eq!(validate["total_checks"], 12);
    assert_eq!(validate["passed_checks"], 12);
    assert!(validate["errors"].as_array().unwrap().is_empty());
}

#[test]
fn layout_path_from_config_file_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let layout = temp_dir.path().join("from-config.json");
    fs::write(
        &layout,
        r#"{"name": "J", "size": "small", "folders": [{"name": "only", "size": "huge"}]}"#,
    )
    .unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        format!("[layout]\npath = {:?}\n", layout.display().to_string()),
    )
    .unwrap();

    let cli = CliContext::new(None, Some(config)).unwrap();
    let output = cli
        .execute(&Commands::Validate {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("Checks passed: 1/2"));
    assert!(output.contains("'only' has invalid size 'huge'"));
    assert!(output.ends_with("Valid: no"));
}

#[test]
fn missing_layout_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    let result = CliContext::new(Some(temp_dir.path().join("missing.toml")), Some(config));
    assert!(matches!(result, Err(ApiError::LayoutError(_))));
}
