use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlimit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlimit").unwrap();
    cmd.env("SPENDLIMIT_DATA_DIR", dir.path())
        .env_remove("SPENDLIMIT_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    spendlimit(&dir).arg("init").assert().success();
    dir
}

#[test]
fn init_creates_default_categories() {
    let dir = TempDir::new().unwrap();

    spendlimit(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("categories.json").exists());

    spendlimit(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Transport"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    spendlimit(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default sort:    name-asc"))
        .stdout(predicate::str::contains("Initialized:    false"));
}

#[test]
fn spending_add_then_list_sorted() {
    let dir = initialized();

    for (amount, category, name, date) in [
        ("10", "Food", "Bread", "2024-06-02"),
        ("5", "Food", "Apples", "2024-06-01"),
        ("10", "Transport", "Bus", "2024-06-03"),
    ] {
        spendlimit(&dir)
            .args(["spending", "add", amount, category, "--name", name, "--date", date])
            .assert()
            .success()
            .stdout(predicate::str::contains("Recorded spending"));
    }

    let output = spendlimit(&dir)
        .args(["spending", "list", "--sort", "amount-asc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();

    let apples = output.find("Apples").unwrap();
    let bread = output.find("Bread").unwrap();
    let bus = output.find("Bus").unwrap();
    assert!(apples < bread && bread < bus, "unexpected order:\n{}", output);

    spendlimit(&dir)
        .args(["spending", "list", "--category", "Transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus"))
        .stdout(predicate::str::contains("Bread").not());
}

#[test]
fn spending_add_rejects_bad_input() {
    let dir = initialized();

    spendlimit(&dir)
        .args(["spending", "add", "abc", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'abc' is not a valid amount"));

    spendlimit(&dir)
        .args(["spending", "add", "--", "-5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount cannot be negative"));

    spendlimit(&dir)
        .args(["spending", "add", "3.50", "Travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: Travel"));

    spendlimit(&dir)
        .args(["spending", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No spendings found."));
}

#[test]
fn limit_set_overwrites_and_lists_spent() {
    let dir = initialized();

    spendlimit(&dir)
        .args(["spending", "add", "120.40", "Food", "--date", "2024-06-10"])
        .assert()
        .success();

    spendlimit(&dir)
        .args(["limit", "set", "Food", "200", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Limit for Food in 2024-06 set to 200.00"));

    spendlimit(&dir)
        .args(["limit", "set", "Food", "100", "--period", "2024-06"])
        .assert()
        .success();

    spendlimit(&dir)
        .args(["limit", "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00"))
        .stdout(predicate::str::contains("120.40"))
        .stdout(predicate::str::contains("-20.40"))
        .stdout(predicate::str::contains("OVER"))
        .stdout(predicate::str::contains("200.00").not());

    spendlimit(&dir)
        .args(["limit", "list", "--period", "2024-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No limits set for 2024-07."));

    spendlimit(&dir)
        .args(["audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limit Food 2024-06 set to 200.00"))
        .stdout(predicate::str::contains(
            "limit Food 2024-06 changed 200.00 -> 100.00",
        ));

    spendlimit(&dir)
        .args(["audit", "--category", "Transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit records for Transport."));
}

#[test]
fn oversized_amount_is_refused_and_later_commands_still_work() {
    let dir = initialized();

    spendlimit(&dir)
        .args(["spending", "add", "92233720368547758.07", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("larger than the maximum amount 999999999999.99"));

    spendlimit(&dir)
        .args(["spending", "add", "999999999999.99", "Food", "--name", "House"])
        .assert()
        .success();
    spendlimit(&dir)
        .args(["spending", "add", "999999999999.99", "Food", "--name", "Boat"])
        .assert()
        .success();

    spendlimit(&dir)
        .args(["category", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1999999999999.98"));
}

#[test]
fn category_add_summary_and_delete() {
    let dir = initialized();

    spendlimit(&dir)
        .args(["category", "add", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Travel"));

    spendlimit(&dir)
        .args(["category", "add", "Travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category already exists: Travel"));

    spendlimit(&dir)
        .args(["spending", "add", "40", "Travel", "--date", "2024-06-01"])
        .assert()
        .success();
    spendlimit(&dir)
        .args(["spending", "add", "2.50", "Travel", "--date", "2024-07-01"])
        .assert()
        .success();

    spendlimit(&dir)
        .args(["category", "summary", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("40.00"))
        .stdout(predicate::str::contains("42.50").not());

    spendlimit(&dir)
        .args(["category", "delete", "Travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("still in use"));

    spendlimit(&dir)
        .args(["category", "delete", "Other"])
        .assert()
        .success();

    spendlimit(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other").not());
}

#[test]
fn invalid_period_is_rejected_by_the_parser() {
    let dir = initialized();

    spendlimit(&dir)
        .args(["limit", "list", "--period", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month: 13"));
}

#[test]
fn currency_symbol_from_settings() {
    let dir = initialized();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "zł", "audit_enabled": false}"#,
    )
    .unwrap();

    spendlimit(&dir)
        .args(["spending", "add", "3.5", "Food", "--name", "Coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.50 zł"));

    assert!(!dir.path().join("audit.log").exists());
}
