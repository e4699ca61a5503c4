mod common;

use common::*;

#[test]
fn missing_config_is_an_error() {
    let env = TestEnv::new();

    let result = env.run(&["--no-dry-run"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("error: no config file found"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn missing_required_keys_are_listed() {
    let env = TestEnv::new();
    env.write_config("remote_dir = \"www\"\nparallel = 0\n");

    let result = env.run(&[]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid properties in"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("host (is required)"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("parallel (must be at least 1)"), "stderr: {}", result.stderr);
}

#[test]
fn invalid_toml_reports_parse_error() {
    let env = TestEnv::new();
    env.write_config("host = \n");

    let result = env.run(&[]);

    assert!(!result.success);
    assert!(result.stderr.contains("failed to parse"), "stderr: {}", result.stderr);
}

#[test]
fn explicit_config_path_must_exist() {
    let env = TestEnv::new();
    env.write_config(&basic_config(""));

    let result = env.run(&["--config", "missing.toml"]);

    assert!(!result.success);
    assert!(result.stderr.contains("missing.toml"), "stderr: {}", result.stderr);
}

#[cfg(unix)]
#[test]
fn webhooks_without_token_fail_before_lftp_runs() {
    let env = TestEnv::new();
    let marker = env.project_path("lftp-was-called");
    let lftp = env.fake_lftp(&format!("touch {}", marker.display()));
    env.write_config(
        "host = \"ftp.example.com\"\n\
         user = \"alice\"\n\
         password = \"secretpw\"\n\
         url = \"https://example.com\"\n",
    );

    let result = env.run_with_env(
        &["--no-dry-run"],
        &[("KIRBY_DEPLOY_LFTP", lftp.to_str().unwrap())],
    );

    assert!(!result.success);
    assert!(
        result.stderr.contains("webhooks are enabled but token is not configured"),
        "stderr: {}",
        result.stderr
    );
    assert!(!marker.exists());
}

#[test]
fn json_mode_reports_errors_as_events() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "content-pull"]);

    assert!(!result.success);
    let line = result.stdout.lines().last().unwrap_or_default();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["event"], "error");
    assert_eq!(event["command"], "content-pull");
}
