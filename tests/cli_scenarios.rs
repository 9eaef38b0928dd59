use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn stockroom(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn catalog(dir: &Path) -> String {
    fs::read_to_string(dir.join("inventory.txt")).unwrap()
}

fn seed(dir: &Path, contents: &str) {
    fs::write(dir.join("inventory.txt"), contents).unwrap();
}

#[test]
fn first_run_creates_the_catalog_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("inventory.txt created successfully."))
        .stdout(predicate::str::contains("No products found."));

    assert_eq!(catalog(temp_dir.path()), "");
}

#[test]
fn add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .args(["add", "1", "Pen", "10", "2.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added successfully!"));
    assert_eq!(catalog(temp_dir.path()), "1,Pen,10,2.5\n");

    stockroom(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("ID\tName\tQty\tPrice\n1\tPen\t10\t2.50\n");
}

#[test]
fn duplicate_id_is_refused() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "1,Pen,10,2.5\n");

    stockroom(temp_dir.path())
        .args(["add", "1", "Other", "5", "9.00"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Product with ID 1 already exists."));
    assert_eq!(catalog(temp_dir.path()), "1,Pen,10,2.5\n");
}

#[test]
fn negative_values_are_refused() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .args(["add", "1", "Pen", "-3", "2.50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity must be non-negative."));
    assert_eq!(catalog(temp_dir.path()), "");
}

#[test]
fn update_preserves_position() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "1,A,1,1.0\n2,B,2,2.0\n3,C,3,3.0\n");

    stockroom(temp_dir.path())
        .args(["update", "2", "--name", "B2", "--quantity", "20", "--price", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated successfully!"));

    assert_eq!(catalog(temp_dir.path()), "1,A,1,1\n2,B2,20,2.5\n3,C,3,3\n");
}

#[test]
fn update_can_change_id_but_not_to_a_taken_one() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "1,A,1,1.0\n2,B,2,2.0\n3,C,3,3.0\n");

    stockroom(temp_dir.path())
        .args(["update", "2", "--id", "9"])
        .assert()
        .success();
    assert_eq!(catalog(temp_dir.path()), "1,A,1,1\n9,B,2,2\n3,C,3,3\n");

    stockroom(temp_dir.path())
        .args(["update", "1", "--id", "9", "--name", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product with ID 9 already exists."));
    assert_eq!(catalog(temp_dir.path()), "1,A,1,1\n9,B,2,2\n3,C,3,3\n");
}

#[test]
fn delete_then_delete_again() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "1,A,1,1\n2,B,2,2\n3,C,3,3\n");

    stockroom(temp_dir.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product deleted successfully!"));
    assert_eq!(catalog(temp_dir.path()), "1,A,1,1\n3,C,3,3\n");

    stockroom(temp_dir.path())
        .args(["delete", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product ID 2 not found."));
}

#[test]
fn sorted_views_are_stable_and_leave_the_file_alone() {
    let temp_dir = tempfile::tempdir().unwrap();
    let original = "1,A,1,5\n2,B,1,5\n3,A,1,5\n";
    seed(temp_dir.path(), original);

    stockroom(temp_dir.path())
        .args(["sorted", "name"])
        .assert()
        .success()
        .stdout("Sorted by Name:\nID\tName\tQty\tPrice\n1\tA\t1\t5.00\n3\tA\t1\t5.00\n2\tB\t1\t5.00\n");

    stockroom(temp_dir.path())
        .args(["sorted", "price"])
        .assert()
        .success()
        .stdout("Sorted by Price:\nID\tName\tQty\tPrice\n1\tA\t1\t5.00\n2\tB\t1\t5.00\n3\tA\t1\t5.00\n");

    assert_eq!(catalog(temp_dir.path()), original);
}

#[test]
fn summary_totals() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "1,A,3,2.00\n2,B,2,1.50\n");

    stockroom(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(
            "=== Inventory Summary ===\nTotal Products: 2\nTotal Quantity: 5\nTotal Stock Value: 9.00\n",
        );
}

#[test]
fn malformed_lines_are_reported_dropped_and_cleaned_up() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "1,Pen,10,2.5\nbroken line\n2,,3,1.0\n");

    stockroom(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping malformed line 2"))
        .stdout(predicate::str::contains("1\tPen\t10\t2.50\n2\t\t3\t1.00\n"));

    stockroom(temp_dir.path())
        .args(["-q", "add", "3", "Ink", "1", "4"])
        .assert()
        .success();
    assert_eq!(catalog(temp_dir.path()), "1,Pen,10,2.5\n2,,3,1\n3,Ink,1,4\n");
}

#[test]
fn quiet_suppresses_diagnostics() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "broken line\n");

    stockroom(temp_dir.path())
        .args(["list", "--quiet"])
        .assert()
        .success()
        .stdout("No products found.\n");
}

#[test]
fn file_flag_and_config_select_the_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("stockroom.json"),
        r#"{"data_file": "shop.txt", "diagnostics": false}"#,
    )
    .unwrap();

    stockroom(temp_dir.path())
        .args(["add", "1", "Pen", "10", "2.5"])
        .assert()
        .success()
        .stdout("Product added successfully!\n");
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("shop.txt")).unwrap(),
        "1,Pen,10,2.5\n"
    );

    stockroom(temp_dir.path())
        .args(["--file", "other.txt", "list"])
        .assert()
        .success()
        .stdout("No products found.\n");
    assert!(temp_dir.path().join("other.txt").exists());
    assert!(!temp_dir.path().join("inventory.txt").exists());
}

#[test]
fn name_with_comma_is_rejected_at_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .args(["add", "1", "Pen, blue", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("commas"));
}

#[test]
fn unwritable_catalog_location_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .args(["--file", "missing-dir/inventory.txt", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: IO error"));
}
