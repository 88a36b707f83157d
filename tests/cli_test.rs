use assert_cmd::Command;
use predicates::str::contains;
use skyline::core::trace::TRACE_HEADER;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("skyline").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_skyline_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("city.txt");
    std::fs::write(&input, "2,9,10\n3,7,15\n5,12,12\n15,20,10\n19,24,8\n").unwrap();

    cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout("(2,10)(3,15)(7,12)(12,0)(15,10)(20,8)(24,0)\n");
}

#[test]
fn trace_printed_before_skyline() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pair.txt");
    std::fs::write(&input, "1,5,3\n1,5,7\n").unwrap();

    let expected = format!(
        "{h}[(1,3)(5,0), (1,7)(5,0)]\n{h}[(1,3)(5,0)]\n{h}[(1,7)(5,0)]\n(1,7)(5,0)\n",
        h = TRACE_HEADER
    );

    cmd().arg("-t").arg(&input).assert().success().stdout(expected);
}

#[test]
fn writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("single.txt");
    let out = dir.path().join("skyline.txt");
    std::fs::write(&input, "1,5,3\n").unwrap();

    cmd()
        .arg(&input)
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("The result is stored in"));

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "(1,3)(5,0)");
}

#[test]
fn refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("single.txt");
    let out = dir.path().join("skyline.txt");
    std::fs::write(&input, "1,5,3\n").unwrap();
    std::fs::write(&out, "old").unwrap();

    cmd()
        .arg(&input)
        .arg(&out)
        .assert()
        .code(1)
        .stderr(contains("cannot be overwritten"));

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "old");
}

#[test]
fn missing_input_file() {
    cmd()
        .arg("/definitely/not/here.txt")
        .assert()
        .code(1)
        .stderr(contains("does not exist"));
}

#[test]
fn malformed_record_reports_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.txt");
    std::fs::write(&input, "1,5,3\n2,x,4\n").unwrap();

    cmd()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(contains("Line 2"));
}

#[test]
fn no_arguments() {
    cmd()
        .assert()
        .failure()
        .stderr(contains("Input data required"));
}

#[test]
fn too_many_arguments() {
    cmd()
        .args(["-t", "-v", "--strict", "a.txt", "b.txt"])
        .assert()
        .failure()
        .stderr(contains("Too many arguments"));
}

#[test]
fn help_exits_cleanly() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(contains("Usage: skyline [-t] [-h] <INPUT> [OUTPUT]"));
}
