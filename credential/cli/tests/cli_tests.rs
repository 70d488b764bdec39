use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the cred binary command
fn cred_cmd() -> Command {
    Command::cargo_bin("cred").unwrap()
}

mod demo {
    use super::*;

    #[test]
    fn default_run_is_the_demo() {
        cred_cmd()
            .assert()
            .success()
            .stdout(predicate::str::contains("User: Jim Duncan"))
            .stdout(predicate::str::contains("Password: 0"))
            .stdout(predicate::str::contains("Email: jim.duncan@example.com"))
            .stdout(predicate::str::contains("User: Frank Miller"))
            .stdout(predicate::str::contains("Email: frank.miller@example.com"))
            .stdout(predicate::str::is_match(r"Password: [A-Za-z0-9]{20}\n").unwrap())
            .stdout(predicate::str::is_match(r"Print hash: [a-f0-9]{64}\n").unwrap());
    }

    #[test]
    fn demo_subcommand_matches_default() {
        cred_cmd()
            .arg("demo")
            .assert()
            .success()
            .stdout(predicate::str::contains("Set new name: Frank Miller"));
    }

    #[test]
    fn demo_honors_config_domain() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cred.toml");
        fs::write(&path, "email_domain = \"corp.test\"\n").unwrap();

        cred_cmd()
            .args(["--config", path.to_str().unwrap(), "demo"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Email: frank.miller@corp.test"));
    }
}

mod password_mode {
    use super::*;

    #[test]
    fn default_length_is_eight() {
        cred_cmd()
            .arg("password")
            .assert()
            .success()
            .stdout(predicate::str::is_match("^[A-Za-z0-9]{8}\n$").unwrap());
    }

    #[test]
    fn length_flag_works() {
        cred_cmd()
            .args(["password", "-l", "62"])
            .assert()
            .success()
            .stdout(predicate::str::is_match("^[A-Za-z0-9]{62}\n$").unwrap());
    }

    #[test]
    fn oversized_length_fails() {
        cred_cmd()
            .args(["password", "--length", "63"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("alphabet of 62"));
    }
}

mod hash_mode {
    use super::*;

    #[test]
    fn sha256_is_default() {
        cred_cmd()
            .args(["hash", "abc"])
            .assert()
            .success()
            .stdout("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n");
    }

    #[test]
    fn algorithm_flag_works() {
        cred_cmd()
            .args(["hash", "-a", "md5", "abc"])
            .assert()
            .success()
            .stdout("900150983cd24fb0d6963f7d28e17f72\n");
    }

    #[test]
    fn reads_stdin() {
        cred_cmd()
            .args(["hash", "-"])
            .write_stdin("abc\n")
            .assert()
            .success()
            .stdout("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n");
    }

    #[test]
    fn stdin_keeps_interior_newlines_and_drops_crlf() {
        cred_cmd()
            .args(["hash", "-a", "md5", "-"])
            .write_stdin("abc\r\n")
            .assert()
            .success()
            .stdout("900150983cd24fb0d6963f7d28e17f72\n");

        let expected = cred_cmd()
            .args(["hash", "line one\nline two"])
            .output()
            .expect("Failed");
        cred_cmd()
            .args(["hash", "-"])
            .write_stdin("line one\nline two\n")
            .assert()
            .success()
            .stdout(String::from_utf8(expected.stdout).unwrap());
    }

    #[test]
    fn empty_stdin_fails() {
        cred_cmd()
            .args(["hash", "-"])
            .write_stdin("\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Empty input from stdin"));
    }

    #[test]
    fn unknown_algorithm_fails_with_choices() {
        cred_cmd()
            .args(["hash", "--algorithm", "not-a-real-algo", "abc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown hash algorithm"))
            .stderr(predicate::str::contains("sha256"));
    }

    #[test]
    fn config_algorithm_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cred.toml");
        fs::write(&path, "hash_algorithm = \"sha1\"\n").unwrap();

        cred_cmd()
            .args(["--config", path.to_str().unwrap(), "hash", "abc"])
            .assert()
            .success()
            .stdout("a9993e364706816aba3e25717850c26c9cd0d89d\n");
    }
}

mod user_mode {
    use super::*;

    #[test]
    fn prints_report() {
        cred_cmd()
            .args(["user", "Ada", "Lovelace", "-l", "16"])
            .assert()
            .success()
            .stdout(predicate::str::contains("User: Ada Lovelace"))
            .stdout(predicate::str::contains("Email: ada.lovelace@example.com"))
            .stdout(predicate::str::is_match(r"Password: [A-Za-z0-9]{16}\n").unwrap())
            .stdout(predicate::str::is_match(r"Hash \(sha256\): [a-f0-9]{64}\n").unwrap());
    }

    #[test]
    fn full_name_override() {
        cred_cmd()
            .args(["user", "Jim", "Duncan", "--full-name", "Frank Miller"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Email: frank.miller@example.com"));
    }

    #[test]
    fn malformed_full_name_fails() {
        cred_cmd()
            .args(["user", "Jim", "Duncan", "--full-name", "John Ronald Tolkien"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("malformed full name"));
    }

    #[test]
    fn unknown_algorithm_logs_diagnostic() {
        cred_cmd()
            .env_remove("RUST_LOG")
            .args(["user", "Jim", "Duncan", "-a", "bogus"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("incorrect hash type"))
            .stderr(predicate::str::contains("unknown hash algorithm \"bogus\""));
    }

    #[test]
    fn verbose_shows_progress() {
        cred_cmd()
            .env_remove("RUST_LOG")
            .args(["-v", "user", "Jim", "Duncan", "--full-name", "Frank Miller"])
            .assert()
            .success()
            .stderr(predicate::str::contains("updated full name"))
            .stderr(predicate::str::contains("generated password"));
    }

    #[test]
    fn quiet_by_default() {
        cred_cmd()
            .env_remove("RUST_LOG")
            .args(["user", "Jim", "Duncan"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn json_output() {
        let output = cred_cmd()
            .args(["user", "Ada", "Lovelace", "--json", "-a", "sha512"])
            .output()
            .expect("Failed to execute");
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["full_name"], "Ada Lovelace");
        assert_eq!(report["email"], "ada.lovelace@example.com");
        assert_eq!(report["algorithm"], "sha512");
        assert_eq!(report["password"].as_str().unwrap().len(), 10);
        assert_eq!(report["digest"].as_str().unwrap().len(), 128);
    }
}

mod misc {
    use super::*;

    #[test]
    fn lists_algorithms() {
        cred_cmd()
            .arg("algorithms")
            .assert()
            .success()
            .stdout(predicate::str::contains("sha256\n"))
            .stdout(predicate::str::contains("md5\n"))
            .stdout(predicate::str::contains("blake3\n"));
    }

    #[test]
    fn invalid_config_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cred.toml");
        fs::write(&path, "password_length = 100\n").unwrap();

        cred_cmd()
            .args(["--config", path.to_str().unwrap(), "demo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }

    #[test]
    fn completion_shell_is_case_insensitive() {
        cred_cmd()
            .env("COMPLETE", "ZSH")
            .assert()
            .success()
            .stdout(predicate::str::contains("cred"));
    }

    #[test]
    fn unknown_completion_shell_fails() {
        cred_cmd()
            .env("COMPLETE", "tcsh")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown shell: tcsh"))
            .stderr(predicate::str::contains("bash"));
    }

    #[test]
    fn shows_help() {
        cred_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("SHELL COMPLETIONS"));
    }

    #[test]
    fn generates_completions() {
        cred_cmd()
            .env("COMPLETE", "bash")
            .assert()
            .success()
            .stdout(predicate::str::contains("cred"));
    }
}
