use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("staff-shared").unwrap();
    cmd.env_remove("STAFF_SHARED_PLACEHOLDER")
        .env_remove("STAFF_SHARED_CONFIG_DIR");
    cmd
}

#[test]
fn snake_converts_identifier() {
    cmd()
        .args(["snake", "staffID"])
        .assert()
        .success()
        .stdout("staff_i_d\n");
}

#[test]
fn normalize_replaces_numeric_segments() {
    let dir = tempdir().unwrap();
    cmd()
        .args(["--config-dir", dir.path().to_str().unwrap()])
        .args(["normalize", "/api/v1/staff/qualification/630/"])
        .assert()
        .success()
        .stdout("/api/v1/staff/qualification/:id\n");
}

#[test]
fn normalize_uses_placeholder_from_env() {
    let dir = tempdir().unwrap();
    cmd()
        .env("STAFF_SHARED_PLACEHOLDER", "{id}")
        .args(["--config-dir", dir.path().to_str().unwrap()])
        .args(["normalize", "/staff/7"])
        .assert()
        .success()
        .stdout("/staff/{id}\n");
}

#[test]
fn coerce_handles_json_and_text() {
    cmd().args(["coerce", "42"]).assert().success().stdout("42\n");
    cmd()
        .args(["coerce", "null", "--fallback", "default"])
        .assert()
        .success()
        .stdout("default\n");
    cmd()
        .args(["coerce", "1.5"])
        .assert()
        .success()
        .stdout("1.500000\n");
    cmd()
        .args(["coerce", "plain words"])
        .assert()
        .success()
        .stdout("plain words\n");
}

#[test]
fn date_format_and_parse() {
    cmd()
        .args(["date", "format", "2024-03-05"])
        .assert()
        .success()
        .stdout("2024-03-05\n");
    cmd()
        .args(["date", "format", "not-a-date"])
        .assert()
        .success()
        .stdout("0001-01-01\n");
    cmd()
        .args(["date", "parse", "not-a-date"])
        .assert()
        .success()
        .stdout("0001-01-01 00:00:00\n");
}

#[test]
fn date_format_keeps_year_one() {
    cmd()
        .args(["date", "format", "0001-01-01"])
        .assert()
        .success()
        .stdout("0001-01-01\n");
}

#[test]
fn verbose_shows_library_fallbacks() {
    cmd()
        .args(["--verbose", "date", "parse", "not-a-date"])
        .assert()
        .success()
        .stderr(contains("Verbose: Could not parse 'not-a-date'"));
    cmd()
        .args(["date", "parse", "not-a-date"])
        .assert()
        .success()
        .stderr(contains("Verbose:").not());
}

#[test]
fn env_reads_variable() {
    cmd()
        .env("STAFF_SHARED_CLI_VAR", "hello")
        .args(["env", "STAFF_SHARED_CLI_VAR"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn env_missing_and_empty_fail_the_same_way() {
    cmd()
        .env_remove("STAFF_SHARED_CLI_MISSING")
        .args(["env", "STAFF_SHARED_CLI_MISSING"])
        .assert()
        .failure()
        .stderr(contains("environment variable is not set"))
        .stderr(contains("Hint: Set the required environment variable"));
    cmd()
        .env("STAFF_SHARED_CLI_MISSING", "")
        .args(["env", "STAFF_SHARED_CLI_MISSING"])
        .assert()
        .failure()
        .stderr(contains("environment variable is not set"));
}

#[test]
fn errors_list_and_show() {
    cmd()
        .args(["errors", "list"])
        .assert()
        .success()
        .stdout(contains("missing_env_var"))
        .stdout(contains("file_too_large"))
        .stdout(contains("use_iso_date"));
    cmd()
        .args(["errors", "show", "qualification_expired"])
        .assert()
        .success()
        .stdout(contains("qualification has expired"))
        .stdout(contains("Fix: Renew the qualification"));
    cmd()
        .args(["errors", "show", "staff_not_found", "--json"])
        .assert()
        .success()
        .stdout(contains("\"code\": \"staff_not_found\""));
    cmd()
        .args(["errors", "show", "nope"])
        .assert()
        .failure()
        .stderr(contains("Unknown error code: nope"));
}

#[test]
fn upload_check_uses_config() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().to_str().unwrap();

    cmd()
        .args(["--config-dir", config_dir, "upload", "check", "cv.pdf", "2048"])
        .assert()
        .success()
        .stdout(contains("cv.pdf accepted"));

    cmd()
        .args(["--config-dir", config_dir, "config", "set", "max_upload_bytes", "1000"])
        .assert()
        .success();

    cmd()
        .args(["--config-dir", config_dir, "upload", "check", "cv.pdf", "2048"])
        .assert()
        .failure()
        .stderr(contains("file exceeds the maximum upload size"));
}

#[test]
fn config_set_and_show() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().to_str().unwrap();

    cmd()
        .args(["--config-dir", config_dir, "config", "set", "placeholder", "<n>"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    cmd()
        .args(["--config-dir", config_dir, "config", "show"])
        .assert()
        .success()
        .stdout(contains("placeholder = <n>"));

    cmd()
        .args(["--config-dir", config_dir, "normalize", "/staff/1/shift/2"])
        .assert()
        .success()
        .stdout("/staff/<n>/shift/<n>\n");

    cmd()
        .args(["--config-dir", config_dir, "config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(contains("Unknown configuration key 'colour'"))
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn config_set_leaves_malformed_file_alone() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let original = "max_upload_bytes = 5000\nallowed_extensions = [\"docx\"\nplaceholder = \"{id}\"\n";
    std::fs::write(&config_path, original).unwrap();

    cmd()
        .args(["--config-dir", dir.path().to_str().unwrap()])
        .args(["config", "set", "placeholder", "<n>"])
        .assert()
        .failure()
        .stderr(contains("Error loading config"));

    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), original);
}
