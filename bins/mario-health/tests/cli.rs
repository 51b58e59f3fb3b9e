//! End-to-end tests for the mario-health binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"procedureId": "r1", "procedureName": "MRI Brain", "procedureSlug": "mri-brain",
     "categorySlug": "radiology", "categoryName": "Radiology", "familySlug": "mri", "familyName": "MRI"},
    {"procedureId": "r2", "procedureName": "MRI Knee", "procedureSlug": "mri-knee",
     "categorySlug": "radiology", "categoryName": "Radiology", "familySlug": "mri", "familyName": "MRI"},
    {"procedureId": "r3", "procedureName": "CT Head", "procedureSlug": "ct-head",
     "categorySlug": "radiology", "categoryName": "Radiology", "familySlug": "ct", "familyName": "CT"},
    {"procedureId": "c1", "procedureName": "Stress Test", "procedureSlug": "stress-test",
     "categorySlug": "cardiology", "categoryName": "Cardiology", "familySlug": "stress", "familyName": "Stress"}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("catalog.json"), CATALOG).unwrap();
        Self { dir }
    }

    fn catalog(&self) -> PathBuf {
        self.dir.path().join("catalog.json")
    }

    fn store(&self) -> PathBuf {
        self.dir.path().join("state").join("store.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mario-health").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("MARIO_SEARCH_CONFIG")
            .env_remove("RUST_LOG")
            .env("MARIO_SEARCH_STORE", self.store())
            .env("NO_COLOR", "1");
        cmd
    }
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn distance_prints_edit_count() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["distance", "kitten", "sitting"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn suggest_offers_correction() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["suggest", "mamogram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mammogram"));
}

#[test]
fn suggest_json_reports_no_match() {
    let fx = Fixture::new();
    let value = json_output(fx.cmd().args(["--format", "json", "suggest", "zzzzzz"]));
    assert!(value["suggestion"].is_null());
}

#[test]
fn related_ranks_family_first_and_skips_current() {
    let fx = Fixture::new();
    let value = json_output(fx.cmd().args([
        "--format",
        "json",
        "related",
        "--catalog",
        path_arg(&fx.catalog()),
        "--query",
        "mri brain",
        "--current",
        "r1",
        "--limit",
        "2",
    ]));

    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["r2", "r3"]);
    assert_eq!(value[0]["score"].as_f64().unwrap(), 9.0);
}

#[test]
fn by_category_excludes_ids() {
    let fx = Fixture::new();
    let value = json_output(fx.cmd().args([
        "-f",
        "json",
        "by-category",
        "--catalog",
        path_arg(&fx.catalog()),
        "--category",
        "radiology",
        "--exclude",
        "r1",
        "--limit",
        "5",
    ]));

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|r| r["score"].as_f64().unwrap() == 1.0));
    assert!(items.iter().all(|r| r["id"] != "r1"));
}

#[test]
fn related_fails_on_missing_catalog() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["related", "--catalog", "missing.json", "--query", "mri"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read catalog"));
}

#[test]
fn highlight_json_marks_terms() {
    let fx = Fixture::new();
    let value = json_output(fx.cmd().args(["--format", "json", "highlight", "MRI Brain", "brain"]));
    assert_eq!(value["html"], "MRI <mark>Brain</mark>");
}

#[test]
fn history_add_then_list() {
    let fx = Fixture::new();
    fx.cmd().args(["history", "add", "mri brain", "--location", "10001"]).assert().success();
    fx.cmd().args(["history", "add", "colonoscopy"]).assert().success();

    let value = json_output(fx.cmd().args(["--format", "json", "history", "list"]));
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["query"], "colonoscopy");
    assert_eq!(entries[1]["location"], "10001");
}

#[test]
fn history_remove_out_of_range_fails() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["history", "remove", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn compare_rejects_duplicates() {
    let fx = Fixture::new();
    fx.cmd().args(["compare", "add", "r1", "MRI Brain"]).assert().success();

    let value = json_output(fx.cmd().args(["--format", "json", "compare", "add", "r1", "MRI Brain"]));
    assert_eq!(value["added"], false);

    let value = json_output(fx.cmd().args(["--format", "json", "compare", "list"]));
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn sort_preference_persists() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["sort", "get"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("price-asc"));

    fx.cmd().args(["sort", "set", "rating"]).assert().success();

    let value = json_output(fx.cmd().args(["--format", "json", "sort", "get"]));
    assert_eq!(value["option"], "rating");
    assert_eq!(value["label"], "Rating (Highest)");
}

#[test]
fn sort_set_rejects_unknown_option() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["sort", "set", "cheapest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort option"));
}

#[test]
fn config_file_overrides_limits() {
    let fx = Fixture::new();
    std::fs::write(fx.dir.path().join(".mario-search.toml"), "[search]\nrelated_limit = 1\n").unwrap();

    let value = json_output(fx.cmd().args([
        "--format",
        "json",
        "related",
        "--catalog",
        path_arg(&fx.catalog()),
        "--query",
        "mri brain",
        "--current",
        "r1",
    ]));
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn json_errors_carry_structured_report() {
    let fx = Fixture::new();
    let output = fx
        .cmd()
        .args(["-f", "json", "history", "remove", "3"])
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["code"], "INVALID_INPUT");
    assert_eq!(report["code_str"], "E6000");
    assert_eq!(report["category"], "Validation");
    assert_eq!(report["exit_code"], 2);
    assert!(report["message"].as_str().unwrap().contains("out of range"));
}

#[test]
fn json_config_errors_carry_structured_report() {
    let fx = Fixture::new();
    let output = fx
        .cmd()
        .args(["-f", "json", "--config", "absent.toml", "distance", "a", "b"])
        .assert()
        .code(3)
        .get_output()
        .stderr
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["code"], "CONFIG_NOT_FOUND");
    assert!(report["suggestion"].is_string());
}

#[test]
fn preferences_set_and_show() {
    let fx = Fixture::new();
    let defaults = json_output(fx.cmd().args(["-f", "json", "preferences", "show"]));
    assert_eq!(defaults["defaultRadius"], 50);
    assert_eq!(defaults["language"], "en");

    fx.cmd()
        .args(["preferences", "set", "--zip", "10001", "--radius", "25", "--sms", "true"])
        .assert()
        .success();

    let value = json_output(fx.cmd().args(["-f", "json", "preferences", "show"]));
    assert_eq!(value["defaultZip"], "10001");
    assert_eq!(value["defaultRadius"], 25);
    assert_eq!(value["notifications"]["sms"], true);
    assert_eq!(value["notifications"]["email"], true);
    assert!(value["updatedAt"].is_string());
}

#[test]
fn saved_locations_keep_newest_five() {
    let fx = Fixture::new();
    for i in 0..6 {
        fx.cmd()
            .args(["preferences", "add-location", &format!("Place {}", i), "10001"])
            .assert()
            .success();
    }

    let value = json_output(fx.cmd().args(["-f", "json", "preferences", "show"]));
    let locations = value["savedLocations"].as_array().unwrap();
    assert_eq!(locations.len(), 5);
    assert_eq!(locations[0]["name"], "Place 1");
    assert_eq!(locations[4]["radius"], 50);

    let id = locations[0]["id"].as_str().unwrap();
    let removed = json_output(fx.cmd().args(["-f", "json", "preferences", "remove-location", id]));
    assert_eq!(removed["removed"], true);
}

#[test]
fn rewards_accumulate_points() {
    let fx = Fixture::new();
    fx.cmd().args(["rewards", "earn", "concierge"]).assert().success();
    fx.cmd().args(["rewards", "earn", "marioPick"]).assert().success();

    fx.cmd().args(["rewards", "total"]).assert().success().stdout("75\n");

    let value = json_output(fx.cmd().args(["-f", "json", "rewards", "list"]));
    assert_eq!(value["total"], 75);
    assert_eq!(value["history"][0]["type"], "concierge");
    assert_eq!(value["history"][1]["description"], "Used MarioAI Pick");
}

#[test]
fn rewards_reject_unknown_event() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["rewards", "earn", "signup"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown reward event"));
}
