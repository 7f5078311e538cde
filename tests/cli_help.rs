use std::process::Command;

#[test]
fn test_help_lists_deployment_flags() {
    let bin = env!("CARGO_BIN_EXE_telegraf-deploy");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--source",
        "--destination",
        "--install-service",
        "--service-name",
        "--service-display-name",
        "--log-path",
        "--dry-run",
        "--confirm",
        "--verbose",
    ] {
        assert!(stdout.contains(flag), "help should mention {flag}; got:\n{stdout}");
    }
    assert!(stdout.contains("Exit codes"));
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_telegraf-deploy");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_usage_errors_exit_2() {
    let bin = env!("CARGO_BIN_EXE_telegraf-deploy");

    for args in [
        vec!["--install-service", "maybe"],
        vec!["--no-such-flag"],
        vec!["--source"],
    ] {
        let output = Command::new(bin).args(&args).output().unwrap();
        assert_eq!(output.status.code(), Some(2), "args: {:?}", args);
    }
}
