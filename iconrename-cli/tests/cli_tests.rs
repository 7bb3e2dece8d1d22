use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn iconrename() -> Command {
    Command::cargo_bin("iconrename").unwrap()
}

#[test]
fn test_help_command() {
    iconrename()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Batch-rename icon asset directories",
        ));
}

#[test]
fn test_version_command() {
    iconrename()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("iconrename"));
}

#[test]
fn test_sf6_renames_and_logs() {
    let temp = TempDir::new().unwrap();
    temp.child("64px-SF6_Ryu_Icon.PNG").touch().unwrap();
    temp.child("notes.txt").touch().unwrap();

    iconrename()
        .arg("sf6")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Renamed: 64px-SF6_Ryu_Icon.PNG → ryu.png",
        ));

    temp.child("ryu.png").assert(predicate::path::exists());
    temp.child("64px-SF6_Ryu_Icon.PNG")
        .assert(predicate::path::missing());
    temp.child("notes.txt").assert(predicate::path::exists());
}

#[test]
fn test_stock_renames_and_logs() {
    let temp = TempDir::new().unwrap();
    temp.child("Ryu1.png").touch().unwrap();
    temp.child("Abel11.png").touch().unwrap();
    temp.child("ken1").touch().unwrap();

    iconrename()
        .arg("stock")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed: Ryu1.png → ryu.png"))
        .stdout(predicate::str::contains("Renamed: Abel11.png → abel1.png"))
        .stdout(predicate::str::contains("Renamed: ken1 → ken"));

    temp.child("ryu.png").assert(predicate::path::exists());
    temp.child("abel1.png").assert(predicate::path::exists());
    temp.child("ken").assert(predicate::path::exists());
}

#[test]
fn test_no_match_is_silent() {
    let temp = TempDir::new().unwrap();
    temp.child("random_file.txt").touch().unwrap();

    iconrename()
        .arg("sf6")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.child("random_file.txt").assert(predicate::path::exists());
}

#[test]
fn test_default_directory_is_sf6_icons() {
    let temp = TempDir::new().unwrap();
    temp.child("sf6_icons/64px-SF6_Guile_Icon.png")
        .touch()
        .unwrap();

    iconrename()
        .arg("sf6")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Renamed: 64px-SF6_Guile_Icon.png → guile.png",
        ));

    temp.child("sf6_icons/guile.png")
        .assert(predicate::path::exists());
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    temp.child("Ryu1.png").touch().unwrap();

    iconrename()
        .args(["stock", "--output", "json"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""renames":1"#))
        .stdout(predicate::str::contains(r#""from":"Ryu1.png""#))
        .stdout(predicate::str::contains(r#""to":"ryu.png""#))
        .stdout(predicate::str::contains("Renamed:").not());
}

#[test]
fn test_missing_directory_fails() {
    let temp = TempDir::new().unwrap();

    iconrename()
        .arg("sf6")
        .arg(temp.path().join("does_not_exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_destination_conflict_aborts() {
    let temp = TempDir::new().unwrap();
    temp.child("Ryu1.png").touch().unwrap();
    temp.child("ryu.png").touch().unwrap();

    iconrename()
        .arg("stock")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination already exists"));

    temp.child("Ryu1.png").assert(predicate::path::exists());
}
