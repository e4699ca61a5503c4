use std::process::Command;

#[test]
fn test_help_lists_scoped_commands() {
    let bin = env!("CARGO_BIN_EXE_kirby-deploy");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in [
        "content-push",
        "content-pull",
        "accounts-push",
        "accounts-pull",
        "languages-push",
        "languages-pull",
    ] {
        assert!(
            stdout.contains(command),
            "help output should list {command}; got:\n{stdout}"
        );
    }
    assert!(
        stdout.contains("Run 'kirby-deploy' without a command to deploy the whole site."),
        "help output should explain the default deploy; got:\n{stdout}"
    );
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_kirby-deploy");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("kirby-deploy "), "got: {stdout}");
}

#[test]
fn test_unknown_command_fails() {
    let bin = env!("CARGO_BIN_EXE_kirby-deploy");

    let output = Command::new(bin).arg("media-push").output().unwrap();

    assert!(!output.status.success());
}
