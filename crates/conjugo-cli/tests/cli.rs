//! End-to-end tests of the `conjugo` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const VERBS: &str = r#"[
    {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1},
    {"lemma": "dīcō", "principal_parts": ["dīcere", "dīxī", "dictum"], "conjugation": 3}
]"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn conjugo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_conjugo"))
        .args(["--color", "never"])
        .args(args)
        .env_remove("CONJUGO_VERBS")
        .env_remove("CONJUGO_IRREGULARS")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =========================================================================
// check
// =========================================================================

#[test]
fn check_reports_counts() {
    let verbs = write_temp(VERBS);
    let output = conjugo(&["check", "--verbs", verbs.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("2 verbs, 0 overrides, 0 problems"));
}

#[test]
fn check_strict_fails_on_warnings() {
    let verbs = write_temp(r#"[{"lemma": "amō"}, {"lemma": "amō"}]"#);
    let path = verbs.path().to_str().unwrap();

    let lenient = conjugo(&["check", "--verbs", path]);
    assert!(lenient.status.success());

    let strict = conjugo(&["check", "--verbs", path, "--strict"]);
    assert_eq!(strict.status.code(), Some(exitcode::DATAERR));
}

#[test]
fn check_json_lists_override_problems() {
    let verbs = write_temp(VERBS);
    let irregulars = write_temp(r#"{"volō": {}, "amō": {"INDICATIVE ACTIVE": {"Present": 1}}}"#);
    let output = conjugo(&[
        "check",
        "--verbs",
        verbs.path().to_str().unwrap(),
        "--irregulars",
        irregulars.path().to_str().unwrap(),
        "--json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["verbs"], 2);
    assert_eq!(json["overrides"], 2);
    assert_eq!(json["problems"].as_array().unwrap().len(), 2);
}

#[test]
fn check_rejects_malformed_json() {
    let verbs = write_temp("[{\"lemma\": }]");
    let output = conjugo(&["check", "--verbs", verbs.path().to_str().unwrap()]);
    assert!(!output.status.success());
}

// =========================================================================
// conjugate
// =========================================================================

#[test]
fn conjugate_prints_tables() {
    let verbs = write_temp(VERBS);
    let output = conjugo(&["conjugate", "amo", "--verbs", verbs.path().to_str().unwrap()]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Verb: amō | Conj: 1 (Active)"));
    assert!(text.contains("INDICATIVE ACTIVE"));
    assert!(text.contains("amāvī"));
}

#[test]
fn conjugate_json_with_derived_verbs() {
    let verbs = write_temp(VERBS);
    let output = conjugo(&[
        "conjugate",
        "dīcō",
        "--verbs",
        verbs.path().to_str().unwrap(),
        "--json",
        "--derived",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["lemma"], "dīcō");
    assert_eq!(json["paradigm"]["INDICATIVE ACTIVE"]["Perfect"][0], "dīxī");
    assert_eq!(json["derived"]["Iterative Verb"]["kind"], "Generated");
    assert!(json.get("compound").is_none());
}

#[test]
fn conjugate_json_carries_record_and_tables_version() {
    let verbs = write_temp(VERBS);
    let output = conjugo(&[
        "conjugate",
        "amo",
        "--verbs",
        verbs.path().to_str().unwrap(),
        "--json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["tables_version"], conjugo::TABLES_VERSION);
    assert_eq!(json["record"]["lemma"], "amō");
    assert_eq!(
        json["record"]["principal_parts"],
        serde_json::json!(["amāre", "amāvī", "amātum"])
    );
}

#[test]
fn unknown_lemma_suggests_close_matches() {
    let verbs = write_temp(VERBS);
    let output = conjugo(&["conjugate", "amox", "--verbs", verbs.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown verb 'amox'"));
    assert!(stderr.contains("did you mean: amō?"));
}

#[test]
fn verbs_path_from_environment() {
    let verbs = write_temp(VERBS);
    let output = Command::new(env!("CARGO_BIN_EXE_conjugo"))
        .args(["--color", "never", "conjugate", "amō"])
        .env("CONJUGO_VERBS", verbs.path())
        .env_remove("CONJUGO_IRREGULARS")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("amāvī"));
}
