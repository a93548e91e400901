//! End-to-end tests driving the `setup-sync` binary.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn setup_sync() -> Command {
    Command::cargo_bin("setup-sync").expect("binary builds")
}

fn anthropic_key() -> String {
    format!("sk-ant-{}", "a1B2".repeat(11))
}

#[test]
fn missing_target_root_aborts_with_exit_one() {
    let temp = TempDir::new().unwrap();
    temp.child("source").create_dir_all().unwrap();

    setup_sync()
        .arg("--source")
        .arg(temp.child("source").path())
        .arg("--target")
        .arg(temp.child("no-such-repo").path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Target repo not found"));
}

#[test]
fn live_run_sanitizes_and_reports() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("source");
    let target = temp.child("target");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    source
        .child("CLAUDE.md")
        .write_str(&format!("ANTHROPIC_API_KEY={}\n", anthropic_key()))
        .unwrap();

    setup_sync()
        .arg("--force")
        .arg("--source")
        .arg(source.path())
        .arg("--target")
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sanitized 1 API key(s) in CLAUDE.md"))
        .stdout(predicate::str::contains("Added: CLAUDE.md (sanitized)"))
        .stdout(predicate::str::contains("SYNC COMPLETE"));

    target
        .child("CLAUDE.md")
        .assert("ANTHROPIC_API_KEY=${ANTHROPIC_API_KEY}\n");
}

#[test]
fn dry_run_previews_without_writing() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("source");
    let target = temp.child("target");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    source.child("CLAUDE.md").write_str("# Setup\n").unwrap();

    setup_sync()
        .arg("--dry-run")
        .arg("--source")
        .arg(source.path())
        .arg("--target")
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY] Added: CLAUDE.md"))
        .stdout(predicate::str::contains("DRY RUN COMPLETE"));

    target
        .child("CLAUDE.md")
        .assert(predicate::path::missing());
}

#[test]
fn residual_secret_yields_exit_one() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("source");
    let target = temp.child("target");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    source
        .child("CLAUDE.md")
        .write_str(&format!("token: ghp_{}\n", "a1B2".repeat(9)))
        .unwrap();

    setup_sync()
        .arg("--source")
        .arg(source.path())
        .arg("--target")
        .arg(target.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Potential sensitive data (github-pat)",
        ));
}

#[test]
fn examples_are_generated_from_live_config() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("source");
    let target = temp.child("target");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    source
        .child(".claude/settings.local.json")
        .write_str(r#"{"enableAllProjectMcpServers": true}"#)
        .unwrap();
    source
        .child(".codex/config.toml")
        .write_str("model = \"private-model\"\n")
        .unwrap();

    setup_sync()
        .arg("--source")
        .arg(source.path())
        .arg("--target")
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated: settings.local.example.json"))
        .stdout(predicate::str::contains("Generated: .codex/config.toml.example"));

    target
        .child("settings.local.example.json")
        .assert(predicate::str::contains("enabledMcpjsonServers"));
    target
        .child(".codex/config.toml.example")
        .assert(predicate::str::contains("Codex CLI Configuration Example"))
        .assert(predicate::str::contains("private-model").not());
}

#[test]
fn second_run_reports_everything_unchanged() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("source");
    let target = temp.child("target");
    source.create_dir_all().unwrap();
    target.create_dir_all().unwrap();

    source.child("CLAUDE.md").write_str("# Setup\n").unwrap();
    source
        .child(".claude/commands/go.md")
        .write_str("go\n")
        .unwrap();

    let run = || {
        let mut cmd = setup_sync();
        cmd.arg("--source")
            .arg(source.path())
            .arg("--target")
            .arg(target.path());
        cmd
    };

    run().assert().success();
    run()
        .assert()
        .success()
        .stdout(predicate::str::contains("Files copied/updated: 0"))
        .stdout(predicate::str::contains("Files unchanged:      2"));
}
