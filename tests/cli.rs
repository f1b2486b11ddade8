//! Integration test suite for the `jsonlex` CLI
use assert_cmd::Command;

/// Helper function to run the `main` binary with the given arguments and return a
/// [`assert_cmd::assert::Assert`].
///
/// Color output is disabled so assertions can match plain text.
fn run_main(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jlx").expect("Failed to find main binary");
    cmd.env("NO_COLOR", "1");
    cmd.args(args);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn tokenizes_file_argument() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "{}", r#"{"key": "value"}"#).expect("write temp file");

        let assert = run_main(&[file.path().to_str().expect("UTF-8 path")])
            .assert()
            .success()
            .code(0);
        let output_str =
            String::from_utf8(assert.get_output().stdout.clone())
                .expect("Invalid UTF-8 output");

        let lines: Vec<&str> = output_str.lines().collect();
        assert_eq!(
            lines,
            vec![
                "LeftBrace \"{\"",
                "DoubleQuote \"\\\"\"",
                "Identifier \"key\"",
                "DoubleQuote \"\\\"\"",
                "Colon \":\"",
                "DoubleQuote \"\\\"\"",
                "Identifier \"value\"",
                "DoubleQuote \"\\\"\"",
                "RightBrace \"}\"",
                "EndOfInput \"\"",
            ]
        );
    }

    #[test]
    fn reads_stdin_when_no_file_given() {
        let assert = run_main(&[])
            .write_stdin("{}")
            .assert()
            .success()
            .code(0);
        let output_str =
            String::from_utf8(assert.get_output().stdout.clone())
                .expect("Invalid UTF-8 output");

        assert_eq!(
            output_str.lines().collect::<Vec<_>>(),
            vec!["LeftBrace \"{\"", "RightBrace \"}\"", "EndOfInput \"\""]
        );
    }

    #[test]
    fn dash_argument_reads_stdin() {
        let assert = run_main(&["-"])
            .write_stdin("101")
            .assert()
            .success()
            .code(0);
        let output_str =
            String::from_utf8(assert.get_output().stdout.clone())
                .expect("Invalid UTF-8 output");

        assert_eq!(
            output_str.lines().collect::<Vec<_>>(),
            vec!["Integer \"101\"", "EndOfInput \"\""]
        );
    }

    #[test]
    fn nonexistent_file() {
        let assert = run_main(&["does/not/exist.json"]).assert().failure();
        let stderr_str =
            String::from_utf8(assert.get_output().stderr.clone())
                .expect("Invalid UTF-8 output");
        assert!(
            stderr_str.contains("Failed to read file"),
            "Expected read diagnostic, got: {stderr_str:?}"
        );
    }

    #[test]
    fn illegal_characters_do_not_abort() {
        let assert = run_main(&[])
            .write_stdin("# ; 7")
            .assert()
            .success()
            .code(0);
        let output_str =
            String::from_utf8(assert.get_output().stdout.clone())
                .expect("Invalid UTF-8 output");

        assert_eq!(
            output_str.lines().collect::<Vec<_>>(),
            vec![
                "Illegal \"#\"",
                "Illegal \";\"",
                "Integer \"7\"",
                "EndOfInput \"\"",
            ]
        );
    }

    #[test]
    fn interactive_mode_prompts_and_omits_end_of_input() {
        let assert = run_main(&["--interactive"])
            .write_stdin("{}\n")
            .assert()
            .success()
            .code(0);
        let output_str =
            String::from_utf8(assert.get_output().stdout.clone())
                .expect("Invalid UTF-8 output");

        assert!(output_str.contains(">> "));
        assert!(output_str.contains("LeftBrace \"{\""));
        assert!(output_str.contains("RightBrace \"}\""));
        assert!(!output_str.contains("EndOfInput"));
    }
}
