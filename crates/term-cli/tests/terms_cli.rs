use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    let binary_path = env!("CARGO_BIN_EXE_term-symbols");
    Command::new(binary_path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("term-symbols should launch")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).unwrap_or_else(|error| {
        panic!("file {} should be writable: {}", path.display(), error)
    });
}

#[test]
fn terms_for_single_s_electron_prints_doublet() {
    let output = run_cli(&["terms", "s"]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        stderr_of(&output)
    );
    assert_eq!(
        stdout_of(&output),
        "Number of electrons = 1\nConfig. = s = s\nParity: even\n\n2 S_1/2  g = 2.000\n\n"
    );
}

#[test]
fn terms_with_target_j_prints_only_that_j() {
    let output = run_cli(&["terms", "p2", "2"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("J = 2 = 2.0\n"));
    assert!(stdout.contains("3 P_2  g = 1.500\n\n1 D_2  g = 1.000\n3 D_2  g = 1.167\n\n"));
    assert!(!stdout.contains("_1 "));
}

#[test]
fn half_integer_j_for_even_electrons_fails_without_output() {
    let output = run_cli(&["terms", "sp2d", "3/2"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty(), "no report should be printed");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("ERROR: [INPUT.INVALID_J]"), "stderr: {stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 2"));
}

#[test]
fn negative_j_is_reported_as_invalid_j() {
    let output = run_cli(&["terms", "p", "-1/2"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("[INPUT.INVALID_J]"));
}

#[test]
fn malformed_configurations_are_input_errors() {
    for (config, code) in [
        ("2p", "[INPUT.CONFIG_PARSE]"),
        ("p123", "[INPUT.CONFIG_PARSE]"),
        ("sj", "[INPUT.UNKNOWN_SYMBOL]"),
        ("", "[INPUT.EMPTY_CONFIG]"),
    ] {
        let output = run_cli(&["terms", config]);
        assert_eq!(output.status.code(), Some(2), "config '{config}'");
        assert!(
            stderr_of(&output).contains(code),
            "config '{config}' stderr: {}",
            stderr_of(&output)
        );
        assert!(stdout_of(&output).is_empty());
    }
}

#[test]
fn json_report_groups_by_l_and_spin() {
    let output = run_cli(&["terms", "p2", "--format", "json"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let parsed: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is JSON");
    assert_eq!(parsed["mode"]["kind"], "allJ");
    assert_eq!(parsed["ranges"]["maxL"], 2);
    assert_eq!(parsed["ranges"]["maxTwoS"], 2);

    let groups = parsed["groups"].as_array().expect("groups array");
    assert_eq!(groups.len(), 6);
    assert_eq!(groups[1]["l"], 0);
    assert_eq!(groups[1]["twoS"], 2);
    assert_eq!(groups[1]["records"][0]["j"], "1");
}

#[test]
fn settings_file_caps_total_l_and_flag_overrides_it() {
    let temp = TempDir::new().expect("tempdir should be created");
    let settings_path = temp.path().join("settings.json");
    write_file(&settings_path, r#"{ "globalMaxL": 2 }"#);
    let settings = settings_path.to_str().expect("utf-8 path");

    let output = run_cli(&["terms", "f3", "--config", settings, "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let parsed: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is JSON");
    assert_eq!(parsed["effectiveMaxL"], 2);

    let output = run_cli(&[
        "terms", "f3", "--config", settings, "--max-l", "1", "--format", "json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let parsed: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is JSON");
    assert_eq!(parsed["effectiveMaxL"], 1);
}

#[test]
fn missing_settings_file_exits_with_io_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("absent.json");

    let output = run_cli(&["terms", "p", "--config", missing.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_of(&output).contains("ERROR: [IO.CLI]"));
}

#[test]
fn output_flag_writes_report_file() {
    let temp = TempDir::new().expect("tempdir should be created");
    let report_path = temp.path().join("terms.txt");

    let output = run_cli(&[
        "terms",
        "sp",
        "--output",
        report_path.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).starts_with("Report written to "));

    let written = fs::read_to_string(&report_path).expect("report file exists");
    assert!(written.starts_with("Number of electrons = 2\nConfig. = sp = sp\nParity: odd\n"));
    assert!(written.contains("3 P_0  g = 0.000\n3 P_1  g = 1.500\n3 P_2  g = 1.500\n"));
}

#[test]
fn expand_prints_l_values() {
    let output = run_cli(&["expand", "sp3d"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Config. = sp3d = spppd\nl = [0, 1, 1, 1, 2]\n"));

    let output = run_cli(&["expand", "d10", "--format", "json"]);
    let parsed: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is JSON");
    assert_eq!(parsed["electronCount"], 10);
    assert_eq!(parsed["parity"], "even");
}

#[test]
fn letters_past_o_map_to_their_table_index() {
    let output = run_cli(&["expand", "sxp"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("l = [0, 19, 1]\n"));

    let output = run_cli(&["terms", "qpp"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "Number of electrons = 3\nConfig. = qpp = qpp\nParity: odd\n\n"
    );
}

#[test]
fn lande_evaluates_one_g_factor() {
    let output = run_cli(&["lande", "--j", "3/2", "--l", "1", "--s", "1/2"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "g = 1.333\n");
}

#[test]
fn help_exits_successfully_and_missing_command_is_usage_error() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("terms"));

    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("[INPUT.CLI_USAGE]"));
}

#[test]
fn verbose_logging_goes_to_stderr_only() {
    let output = run_cli(&["terms", "s", "--verbose"]);

    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("DEBUG"));
    assert!(stderr_of(&output).contains("computed quantum number ranges"));
}
