use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "budget";

fn budget(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("MONTHLY_BUDGET_DIR", config_dir.path());
    cmd.env_remove("BUDGET_LOG");
    cmd
}

#[test]
fn summary_shows_default_categories_and_totals() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["summary", "--income", "$2,000", "--set", "Housing/Rent=1200"])
        .assert()
        .success()
        .stdout(contains("Housing"))
        .stdout(contains("Transportation"))
        .stdout(contains("Total Spent: $1,200.00"))
        .stdout(contains("Total Left:  $800.00"));
}

#[test]
fn summary_reports_overspending_as_nothing_left() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args([
            "summary",
            "--income",
            "1000",
            "--set",
            "Food/Groceries=1000.50",
        ])
        .assert()
        .success()
        .stdout(contains("Total Left:  $0.00"))
        .stdout(contains("Overspent by $0.50"));
}

#[test]
fn summary_rows_lists_subcategories() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["summary", "--rows", "--empty", "--set", "Pets/Vet=80"])
        .assert()
        .success()
        .stdout(contains("Subcategory"))
        .stdout(contains("Vet"))
        .stdout(contains("$80.00"))
        .stdout(contains("Housing").not());
}

#[test]
fn malformed_set_is_rejected() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["summary", "--set", "Housing=5"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn unknown_drop_target_is_ignored() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["categories", "--drop", "Nope", "--drop", "Loans"])
        .assert()
        .success()
        .stdout(contains("Housing"))
        .stdout(contains("Loans").not());
}

#[test]
fn categories_prints_tree() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["categories", "--add-category", "Gifts"])
        .assert()
        .success()
        .stdout(contains("├── Rent"))
        .stdout(contains("└── Gas"))
        .stdout(contains("Gifts ($0.00)"));
}

#[test]
fn categories_show_unknown_fails() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["categories", "--show", "Vacation"])
        .assert()
        .failure()
        .stderr(contains("Category not found"));
}

#[test]
fn export_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("budget.csv");

    budget(&dir)
        .arg("export")
        .arg(&output)
        .args(["--set", "Food/Groceries=250"])
        .assert()
        .success()
        .stdout(contains("Budget exported (csv)"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with("Category,Subcategory,Amount"));
    assert!(contents.contains("Food,Groceries,250.00"));
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["export", "-", "--format", "json", "--income", "500"])
        .assert()
        .success()
        .stdout(contains("\"schema_version\": \"1.0.0\""))
        .stdout(contains("\"income\": 500.0"));
}

#[test]
fn export_document_to_stdout() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["export", "-", "--format", "document"])
        .assert()
        .success()
        .stdout(contains("Monthly Budget Summary"))
        .stdout(contains("Total Spent: $0.00"));
}

#[test]
fn init_writes_settings_and_config_reads_them() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Settings written to"))
        .stdout(contains("  - Food (Restaurants, Groceries)"))
        .stdout(contains("  - Loans\n"));
    assert!(dir.path().join("config.json").exists());

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Initialized:      yes"))
        .stdout(contains("Currency symbol:       $"));
}

#[test]
fn settings_change_currency_symbol() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol":"€","seed_defaults":false}"#,
    )
    .unwrap();

    budget(&dir)
        .args(["summary", "--set", "Rent/Flat=700"])
        .assert()
        .success()
        .stdout(contains("€700.00"))
        .stdout(contains("Housing").not());
}

#[test]
fn tui_requires_a_terminal() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .assert()
        .failure()
        .stderr(contains("needs a terminal").or(contains("TUI error")));
}
