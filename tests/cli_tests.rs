//! CLI integration tests using the REAL splitter binary

mod common;

use predicates::prelude::*;

use common::TestWorkspace;

const NO_CASH: &str = "No Coin(s) or Platinum token(s) in the inventory.";

#[test]
fn test_help_output() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("--coins"));
}

#[test]
fn test_version_output() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("splitter"))
        .stdout(predicate::str::contains("Build info"))
        .stdout(predicate::str::contains("Minimum Rust version: 1.85"))
        .stdout(predicate::str::contains("Config file: none (built-in defaults)"))
        .stdout(predicate::str::contains("Default split size: 2"))
        .stdout(predicate::str::contains("Catalog: none"));
}

#[test]
fn test_version_reports_config_and_catalog() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_bones_catalog();
    let config = workspace.write_file(
        "config.yaml",
        &format!(
            "default_split_size: 3\nuse_wiki_prices: true\ncatalog: {}\n",
            catalog.display()
        ),
    );
    workspace
        .splitter_cmd()
        .arg("--config")
        .arg(&config)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Config file: {}",
            config.display()
        )))
        .stdout(predicate::str::contains("Default split size: 3"))
        .stdout(predicate::str::contains("Price source: Wiki"))
        .stdout(predicate::str::contains("(4 items)"));
}

#[test]
fn test_split_coins_by_default_size() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "1000", "split"])
        .assert()
        .success()
        .stdout("Splitting Coins 500, ( 1,000 / 2 )\n");
}

#[test]
fn test_split_platinum_tokens_take_priority() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "1000", "--platinum", "9", "split", "3"])
        .assert()
        .success()
        .stdout("Splitting Platinum tokens 3, ( 9 / 3 )\n");
}

#[test]
fn test_split_without_inventory() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "split"])
        .assert()
        .success()
        .stdout(format!("{NO_CASH}\n"));
}

#[test]
fn test_split_size_without_cash() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "0", "split", "4"])
        .assert()
        .success()
        .stdout(format!("{NO_CASH}\n"));
}

#[test]
fn test_split_by_zero() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "1000", "split", "0"])
        .assert()
        .success()
        .stdout("Unable to split by 0.\n");
}

#[test]
fn test_split_by_negative_size() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "1000", "split", "-3"])
        .assert()
        .success()
        .stdout("Unable to split by -3.\n");
}

#[test]
fn test_zero_default_split_size() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "1000", "--split-size", "0", "split"])
        .assert()
        .success()
        .stdout("Unable to split by 0.\n");
}

#[test]
fn test_split_item_with_trailing_size() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_bones_catalog();
    workspace
        .splitter_cmd()
        .arg("--plain")
        .arg("--catalog")
        .arg(&catalog)
        .args(["split", "dragon", "bones", "5"])
        .assert()
        .success()
        .stdout("Splitting Dragon bones: 480, ( 2,400 / 5 )\n");
}

#[test]
fn test_split_item_with_leading_size() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_bones_catalog();
    workspace
        .splitter_cmd()
        .arg("--plain")
        .arg("--catalog")
        .arg(&catalog)
        .args(["split", "4", "abyssal", "whip"])
        .assert()
        .success()
        .stdout("Splitting Abyssal whip: 375,000, ( 1,500,000 / 4 )\n");
}

#[test]
fn test_split_item_with_wiki_prices() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_bones_catalog();
    workspace
        .splitter_cmd()
        .args(["--plain", "--wiki-prices", "--catalog"])
        .arg(&catalog)
        .args(["split", "dragon", "bones"])
        .assert()
        .success()
        .stdout("Splitting Dragon bones: 1,225, ( 2,450 / 2 )\n");
}

#[test]
fn test_split_unknown_item() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_bones_catalog();
    workspace
        .splitter_cmd()
        .arg("--plain")
        .arg("--catalog")
        .arg(&catalog)
        .args(["split", "rune", "scimitar", "3"])
        .assert()
        .success()
        .stdout("Unable to find item 'rune scimitar'.\n");
}

#[test]
fn test_split_hyphenated_word_is_item_phrase() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_bones_catalog();
    workspace
        .splitter_cmd()
        .arg("--plain")
        .arg("--catalog")
        .arg(&catalog)
        .args(["split", "-whip"])
        .assert()
        .success()
        .stdout("Unable to find item '-whip'.\n");
}

#[test]
fn test_split_item_without_catalog() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "split", "bones"])
        .assert()
        .success()
        .stdout("Unable to find item 'bones'.\n");
}

#[test]
fn test_config_file_sets_defaults() {
    let workspace = TestWorkspace::new();
    workspace.write_bones_catalog();
    let config = workspace.write_file(
        "config.yaml",
        "default_split_size: 3\nuse_wiki_prices: true\ncatalog: items.yaml\n",
    );

    workspace
        .splitter_cmd()
        .arg("--plain")
        .arg("--config")
        .arg(&config)
        .args(["split", "dragon", "bones"])
        .assert()
        .success()
        .stdout("Splitting Dragon bones: 816, ( 2,450 / 3 )\n");
}

#[test]
fn test_config_from_environment() {
    let workspace = TestWorkspace::new();
    let config = workspace.write_file("custom.yaml", "default_split_size: 4\n");

    workspace
        .splitter_cmd()
        .env("SPLITTER_CONFIG", &config)
        .args(["--plain", "--coins", "1000", "split"])
        .assert()
        .success()
        .stdout("Splitting Coins 250, ( 1,000 / 4 )\n");
}

#[test]
fn test_default_config_location_is_used() {
    let workspace = TestWorkspace::new();
    workspace.write_file(".config/splitter/config.yaml", "default_split_size: 5\n");

    let output = workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "1000", "split"])
        .output()
        .expect("Failed to run splitter");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Platforms without XDG lookups fall back to the built-in default of 2
    assert!(
        stdout == "Splitting Coins 200, ( 1,000 / 5 )\n"
            || stdout == "Splitting Coins 500, ( 1,000 / 2 )\n",
        "unexpected output: {stdout}"
    );
}

#[test]
fn test_command_line_overrides_config_file() {
    let workspace = TestWorkspace::new();
    let config = workspace.write_file("config.yaml", "default_split_size: 3\n");

    workspace
        .splitter_cmd()
        .arg("--plain")
        .arg("--config")
        .arg(&config)
        .args(["--split-size", "10", "--coins", "1000", "split"])
        .assert()
        .success()
        .stdout("Splitting Coins 100, ( 1,000 / 10 )\n");
}

#[test]
fn test_missing_config_file_fails() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--config", "does-not-exist.yaml", "split"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config_file_fails() {
    let workspace = TestWorkspace::new();
    let config = workspace.write_file("config.yaml", "default_split_size: [two]\n");

    workspace
        .splitter_cmd()
        .arg("--config")
        .arg(&config)
        .arg("split")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_invalid_catalog_fails() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_file("items.yaml", "items:\n  - name: Bones\n    price: -5\n");

    workspace
        .splitter_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .args(["split", "bones"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid item catalog"));
}

#[test]
fn test_json_catalog() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_file(
        "items.json",
        r#"{"items": [{"name": "Coal", "price": 150}]}"#,
    );

    workspace
        .splitter_cmd()
        .arg("--plain")
        .arg("--catalog")
        .arg(&catalog)
        .args(["split", "coal", "3"])
        .assert()
        .success()
        .stdout("Splitting Coal: 50, ( 150 / 3 )\n");
}

#[test]
fn test_chat_message() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "900", "chat", "!split 3"])
        .assert()
        .success()
        .stdout("Splitting Coins 300, ( 900 / 3 )\n");
}

#[test]
fn test_chat_trigger_ignores_case() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--plain", "--coins", "900", "chat", "!SPLIT 3"])
        .assert()
        .success()
        .stdout("Splitting Coins 300, ( 900 / 3 )\n");
}

#[test]
fn test_chat_message_with_item() {
    let workspace = TestWorkspace::new();
    let catalog = workspace.write_bones_catalog();
    workspace
        .splitter_cmd()
        .arg("--plain")
        .arg("--catalog")
        .arg(&catalog)
        .args(["chat", "!split big bones 2"])
        .assert()
        .success()
        .stdout("Splitting Big bones: 130, ( 260 / 2 )\n");
}

#[test]
fn test_chat_without_trigger_prints_nothing() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["--coins", "900", "chat", "gz on the drop"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["-v", "--plain", "--coins", "1000", "split", "4"])
        .assert()
        .success()
        .stdout("Splitting Coins 250, ( 1,000 / 4 )\n")
        .stderr(predicate::str::contains("Split: 250"));
}

#[test]
fn test_completions_unknown_shell() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_completions_bash() {
    let workspace = TestWorkspace::new();
    workspace
        .splitter_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("splitter"));
}
