use assert_cmd::Command;
use predicates::prelude::*;

fn roster() -> Command {
    Command::cargo_bin("roster").unwrap()
}

#[test]
fn list_searches_names_and_email() {
    roster()
        .args(["list", "--search", "john"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Michael Johnson"))
        .stdout(predicate::str::contains("Jane Smith").not());
}

#[test]
fn search_and_department_filter_intersect() {
    // "john" matches only HR and Marketing people, so intersecting with IT
    // leaves nothing.
    roster()
        .args(["list", "--search", "john", "--department", "IT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."));
}

#[test]
fn second_page_holds_the_remaining_five() {
    roster()
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2"))
        .stdout(predicate::str::contains("Matthew Clark"))
        .stdout(predicate::str::contains("John Doe").not());
}

#[test]
fn list_emits_json_when_asked() {
    let output = roster()
        .args(["list", "--json", "--per-page", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["pagination"]["totalItems"], 15);
    assert_eq!(page["pagination"]["totalPages"], 3);
    assert_eq!(page["employees"][0]["firstName"], "John");
}

#[test]
fn show_prints_one_record_or_fails() {
    roster()
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Smith"))
        .stdout(predicate::str::contains("jane.smith@example.com"));

    roster()
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Employee not found: 99"));
}

#[test]
fn departments_lists_distinct_values_once() {
    let output = roster().arg("departments").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("IT").count(), 1);
    assert!(stdout.contains("Operations"));
}

#[test]
fn validate_reports_field_errors_and_exit_code() {
    roster()
        .args([
            "validate",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--email",
            "not-an-email",
            "--department",
            "IT",
            "--role",
            "Dev",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please enter a valid email address"));

    roster()
        .args([
            "validate",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--email",
            "a@b.com",
            "--department",
            "IT",
            "--role",
            "Dev",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("All fields are valid."));
}

#[test]
fn missing_fields_all_come_back_required() {
    roster()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("First Name is required"))
        .stdout(predicate::str::contains("Last Name is required"))
        .stdout(predicate::str::contains("Email is required"))
        .stdout(predicate::str::contains("Department is required"))
        .stdout(predicate::str::contains("Role is required"));
}

#[test]
fn seed_file_replaces_the_builtin_records() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("seed.json");
    std::fs::write(
        &seed_path,
        r#"[
            { "id": 1, "firstName": "Ada", "lastName": "Lovelace",
              "email": "ada@example.com", "department": "Engineering",
              "role": "Fellow" }
        ]"#,
    )
    .unwrap();

    roster()
        .args(["--seed", seed_path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("John Doe").not())
        .stdout(predicate::str::contains("Page 1 of 1"));
}

#[test]
fn unknown_sort_field_is_rejected_by_the_parser() {
    roster()
        .args(["list", "--sort", "salary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("salary"));
}
