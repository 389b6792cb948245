use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn barber(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("barber").unwrap();
    cmd.env("BARBER_CLI_DATA_DIR", data_dir.path())
        .env_remove("BARBER_API_URL")
        .env_remove("BARBER_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    barber(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8080/api"))
        .stdout(predicate::str::contains("Request timeout: default"));
}

#[test]
fn test_config_persists_api_url() {
    let dir = TempDir::new().unwrap();
    barber(&dir)
        .args(["config", "--set-api-url", "http://backend.test/api/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    barber(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://backend.test/api"))
        .stdout(predicate::str::contains("http://backend.test/api/").not());
}

#[test]
fn test_api_url_precedence() {
    let dir = TempDir::new().unwrap();
    barber(&dir)
        .env("BARBER_API_URL", "http://from-env/api")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-env/api"));

    barber(&dir)
        .env("BARBER_API_URL", "http://from-env/api")
        .args(["--api-url", "http://from-flag/api", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-flag/api"));
}

#[test]
fn test_protected_commands_require_session() {
    let dir = TempDir::new().unwrap();
    for args in [
        vec!["dashboard"],
        vec!["book"],
        vec!["appointments", "list"],
        vec!["profile", "show"],
    ] {
        barber(&dir)
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Authentication required"))
            .stderr(predicate::str::contains("barber login"));
    }
}

#[test]
fn test_landing_without_session() {
    let dir = TempDir::new().unwrap();
    barber(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("barber login"));
}

#[test]
fn test_session_status_and_logout_without_session() {
    let dir = TempDir::new().unwrap();
    barber(&dir)
        .args(["session", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sin sesión"));

    barber(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sesión cerrada."));
}

#[test]
fn test_book_flags_require_parent_choice() {
    let dir = TempDir::new().unwrap();
    barber(&dir)
        .args(["book", "--barber", "b1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--shop"));
}

#[test]
fn test_login_rejects_google_token_with_email() {
    let dir = TempDir::new().unwrap();
    barber(&dir)
        .args(["login", "--email", "a@b.c", "--google-token", "tok"])
        .assert()
        .failure();
}
