//! Tests that drive the quizrun binary over stdin/stdout

mod support;
use support::harness::TestHarness;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_interactive_run() {
    let harness = TestHarness::new();
    let output = harness.run(&[], "Ada\n7B\neasy\n\n1\n3\n4\n1\n2\n\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Enter your name: "));
    assert!(out.contains("Welcome, Ada!"));
    assert!(out.contains("Quiz ended. Your score: 10/10"));
    assert!(out.contains("Grade: A"));
    assert!(out.contains("Time taken: "));
    assert!(out.contains("Correct answers:"));
}

#[test]
fn test_flags_skip_prompts() {
    let harness = TestHarness::new();
    let output = harness.run(
        &["--name", "Ada", "--class", "7B", "--level", "Hard"],
        "\n2\n2\n1\n2\n1\n\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(!out.contains("Enter your name"));
    assert!(out.contains("Quiz ended. Your score: 0/10"));
    assert!(out.contains("Grade: F"));
    assert!(out.contains("In what year did World War II end? Correct answer: 1945"));
}

#[test]
fn test_unknown_level_fails() {
    let harness = TestHarness::new();
    let output = harness.run(&["--name", "Ada", "--class", "7B", "--level", "expert"], "");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown level 'expert'"));
    assert!(!stdout(&output).contains("Welcome"));
}

#[test]
fn test_closed_input_fails() {
    let harness = TestHarness::new();
    let output = harness.run(&["--name", "Ada", "--class", "7B", "--level", "easy"], "\n1\n");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Input closed before the quiz finished"));
}

#[test]
fn test_project_config_levels_and_json() {
    let harness = TestHarness::with_config(
        r#"---
defaults:
  name: Ada
  class: 7B
  output: json
levels:
  rust:
    - prompt: "Which keyword declares an immutable binding?"
      points: 3
      options: ["let", "mut", "static", "var"]
      correct: 1
---
"#,
    );
    let output = harness.run(&["--level", "rust"], "\n1\n\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    for line in out.lines() {
        serde_json::from_str::<serde_json::Value>(line)
            .unwrap_or_else(|e| panic!("not JSON: {:?} ({})", line, e));
    }
    let report: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
    assert_eq!(report["level"], "report");
    assert_eq!(report["score"], 3);
    assert_eq!(report["grade"], "A");
}

#[test]
fn test_explicit_config_path() {
    let harness = TestHarness::new();
    let custom = harness.path().join("other.md");
    std::fs::write(&custom, "---\ndefaults:\n  level: medium\n---\n").unwrap();

    let output = harness.run(
        &["--config", custom.to_str().unwrap(), "--name", "A", "--class", "B"],
        "\n1\n2\n2\n2\n2\n\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Who painted the Mona Lisa?"));
    assert!(stdout(&output).contains("Grade: A"));
}

#[test]
fn test_levels_command() {
    let harness = TestHarness::new();
    let output = harness.run(&["levels"], "");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("easy"));
    assert!(out.contains("medium"));
    assert!(out.contains("hard"));
    assert!(out.contains("5 questions, 10 points"));
}

#[test]
fn test_version_command() {
    let harness = TestHarness::new();
    let output = harness.run(&["version", "--verbose"], "");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("quizrun "));
    assert!(out.contains("commit: "));
}
