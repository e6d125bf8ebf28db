//! End-to-End CLI Tests for pitch
//!
//! Drives the built binary the way a site deploy script would.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command pointing to the pitch binary
fn pitch() -> Command {
    cargo_bin_cmd!("pitch")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        pitch()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("format"));
    }

    #[test]
    fn shows_version() {
        pitch()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_page() {
        pitch().args(["render", "slides"]).assert().failure();
    }
}

// ============================================
// Chart helpers
// ============================================

mod chart_helpers {
    use super::*;

    #[test]
    fn formats_market_values() {
        pitch()
            .args(["format", "1500"])
            .assert()
            .success()
            .stdout("$1.5T\n");
        pitch()
            .args(["format", "731"])
            .assert()
            .success()
            .stdout("$731B\n");
        pitch()
            .args(["format", "7.3"])
            .assert()
            .success()
            .stdout("$7.3B\n");
    }

    #[test]
    fn formats_cost_values() {
        pitch()
            .args(["format", "1460", "--decimals", "2"])
            .assert()
            .success()
            .stdout("$1.46T\n");
        pitch()
            .args(["format", "1460", "--decimals", "2", "--long"])
            .assert()
            .success()
            .stdout("$1.46 Trillion\n");
    }

    #[test]
    fn wraps_long_label() {
        pitch()
            .args(["wrap", "Direct Costs to Private Insurers"])
            .assert()
            .success()
            .stdout("Direct Costs to\nPrivate Insurers\n");
    }

    #[test]
    fn short_label_is_unchanged() {
        pitch()
            .args(["wrap", "TAM"])
            .assert()
            .success()
            .stdout("TAM\n");
    }
}

// ============================================
// Site building
// ============================================

mod site_build {
    use super::*;

    #[test]
    fn builds_both_pages() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site");

        pitch()
            .current_dir(dir.path())
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let deck = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(deck.starts_with("<!DOCTYPE html>"));
        assert!(deck.contains("$615,000"));

        let market = fs::read_to_string(out.join("market/index.html")).unwrap();
        assert!(market.contains("href=\"../index.html\""));
        assert!(market.contains("$1.46T"));
    }

    #[test]
    fn reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pitch.toml"),
            r#"
[site]
title = "Seed Round 2025"
market_path = "invest/10x"

[assets]
chart_runtime_js = "/pkg/pitch_deck_wasm.js"
"#,
        )
        .unwrap();

        pitch()
            .current_dir(dir.path())
            .args(["build", "--out", "dist"])
            .assert()
            .success();

        let deck = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(deck.contains("<title>Seed Round 2025</title>"));

        let market = fs::read_to_string(dir.path().join("dist/invest/10x/index.html")).unwrap();
        assert!(market.contains("href=\"../../index.html\""));
        assert!(market.contains("/pkg/pitch_deck_wasm.js"));
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pitch.toml"), "[site\n").unwrap();

        pitch()
            .current_dir(dir.path())
            .args(["build", "--out", "site"])
            .assert()
            .success()
            .stderr(predicate::str::contains("failed to parse config"));

        assert!(dir.path().join("site/market/index.html").exists());
    }

    #[test]
    fn home_href_flag_wins() {
        pitch()
            .args(["render", "market", "--home-href", "/"])
            .assert()
            .success()
            .stdout(predicate::str::contains("href=\"/\""))
            .stdout(predicate::str::contains("data-role=\"navigate-home\""));
    }

    #[test]
    fn escaping_market_path_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pitch.toml"),
            "[site]\nmarket_path = \"../outside\"\n",
        )
        .unwrap();

        pitch()
            .current_dir(dir.path())
            .args(["build"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("market_path"));
    }
}
