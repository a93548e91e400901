//! End-to-end pipeline properties, driven through the library engine with
//! the compiled-in default tables.

use sync_core::defaults::default_mapping;
use sync_core::{RunReport, SyncEngine, SyncOptions, WarningKind};
use sync_fs::NormalizedPath;
use sync_policy::defaults::{default_classifier, default_exclusions, default_rewriter};
use sync_test_utils::TestTree;

fn default_engine(tree: &TestTree) -> SyncEngine {
    SyncEngine::new(
        NormalizedPath::new(tree.source_root()),
        NormalizedPath::new(tree.target_root()),
        default_mapping(),
        default_exclusions(),
        default_classifier().unwrap(),
        default_rewriter().unwrap(),
    )
}

fn live() -> SyncOptions {
    SyncOptions { dry_run: false }
}

fn dry() -> SyncOptions {
    SyncOptions { dry_run: true }
}

fn anthropic_key() -> String {
    format!("sk-ant-{}", "a1B2".repeat(11))
}

#[test]
fn anthropic_key_round_trip_is_sanitized() {
    let tree = TestTree::new();
    tree.write_source(
        "CLAUDE.md",
        &format!("ANTHROPIC_API_KEY={}\n", anthropic_key()),
    );
    let engine = default_engine(&tree);

    let mut stats = engine.sync(live()).unwrap();
    engine.generate_examples(&mut stats, false);
    let report = RunReport::new(stats, false);

    assert_eq!(
        tree.read_target("CLAUDE.md"),
        "ANTHROPIC_API_KEY=${ANTHROPIC_API_KEY}\n"
    );
    assert!(
        report
            .stats
            .warnings
            .iter()
            .any(|w| w.message == "Sanitized 1 API key(s) in CLAUDE.md")
    );
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn literal_key_value_never_reaches_the_destination() {
    let tree = TestTree::new();
    let key: String = format!("sk-{}", "x9Yz".repeat(12)); // 48-char shape
    tree.write_source(
        ".claude/hooks/call_api.py",
        &format!("api_key = \"{}\"\n", key),
    );
    let engine = default_engine(&tree);

    engine.sync(live()).unwrap();

    let published = tree.read_target("hooks/call_api.py");
    assert!(!published.contains(&key));
    assert!(published.contains("os.environ.get(\"OPENAI_API_KEY\")"));
}

#[test]
fn sentinel_secret_in_excluded_folder_is_invisible() {
    let tree = TestTree::new();
    // "__pycache__" is on the default exclusion list; the pipeline must
    // never even open this file
    tree.write_source(
        ".claude/hooks/__pycache__/leak.md",
        &format!("ANTHROPIC_API_KEY={}\n", anthropic_key()),
    );
    tree.write_source(".claude/hooks/ok.py", "print('ok')\n");
    let engine = default_engine(&tree);

    let stats = engine.sync(live()).unwrap();

    assert!(stats.warnings.is_empty());
    assert_eq!(stats.files_copied, 1);
    let snapshot = tree.target_snapshot();
    assert!(snapshot.iter().all(|(rel, _)| !rel.contains("leak")));
}

#[test]
fn second_live_run_copies_nothing() {
    let tree = TestTree::new();
    tree.write_source("CLAUDE.md", "# Global instructions\n");
    tree.write_source(".claude/commands/review.md", "review command\n");
    tree.write_source_bytes(".claude/skills/icon.png", &[0x89, 0x50, 0x4e, 0x47, 0x0d]);
    let engine = default_engine(&tree);

    let first = engine.sync(live()).unwrap();
    let second = engine.sync(live()).unwrap();

    assert_eq!(first.files_copied, 3);
    assert_eq!(second.files_copied, 0);
    assert_eq!(second.files_unchanged, 3);
}

#[test]
fn dry_run_leaves_destination_byte_identical() {
    let tree = TestTree::new();
    tree.write_source("CLAUDE.md", "# Instructions\n");
    tree.write_source(".claude/commands/go.md", "go\n");
    tree.write_target("stale.md", "already here\n");
    let engine = default_engine(&tree);

    let before = tree.target_snapshot();
    let preview = engine.sync(dry()).unwrap();
    let after = tree.target_snapshot();

    assert_eq!(before, after);
    assert_eq!(preview.files_copied, 2);
}

#[test]
fn dry_run_report_matches_subsequent_live_run() {
    let tree = TestTree::new();
    tree.write_source("CLAUDE.md", "# Instructions\n");
    tree.write_source(
        ".claude/hooks/setkey.sh",
        &format!("OPENAI_API_KEY=sk-{}\n", "x9Yz".repeat(12)),
    );
    let engine = default_engine(&tree);

    let preview = engine.sync(dry()).unwrap();
    let applied = engine.sync(live()).unwrap();

    assert_eq!(preview.files_copied, applied.files_copied);
    assert_eq!(preview.files_unchanged, applied.files_unchanged);
    assert_eq!(preview.files_skipped, applied.files_skipped);

    let stripped: Vec<String> = preview
        .changes
        .iter()
        .map(|c| c.replace("[DRY] ", ""))
        .collect();
    assert_eq!(stripped, applied.changes);

    let preview_warnings: Vec<_> = preview.warnings.iter().map(|w| &w.message).collect();
    let applied_warnings: Vec<_> = applied.warnings.iter().map(|w| &w.message).collect();
    assert_eq!(preview_warnings, applied_warnings);
}

#[test]
fn documented_placeholder_produces_zero_warnings() {
    let tree = TestTree::new();
    tree.write_source(
        ".claude/commands/keys.md",
        "Set your key: `sk-...`\napi_key = \"EXAMPLE-KEY-FOR-DOCS-ONLY-00000000\"\n",
    );
    let engine = default_engine(&tree);

    let stats = engine.sync(live()).unwrap();

    assert!(stats.warnings.is_empty());
    assert_eq!(stats.files_copied, 1);
}

#[test]
fn matching_binary_destination_is_left_untouched() {
    let tree = TestTree::new();
    let payload = [0x7fu8, 0x45, 0x4c, 0x46, 0x02];
    tree.write_source_bytes(".claude/skills/tool.bin", &payload);
    std::fs::create_dir_all(tree.target_root().join("skills")).unwrap();
    std::fs::write(tree.target_path("skills/tool.bin"), payload).unwrap();
    let engine = default_engine(&tree);

    let stats = engine.sync(live()).unwrap();

    assert_eq!(stats.files_unchanged, 1);
    assert_eq!(stats.files_copied, 0);
    assert!(stats.changes.is_empty());
}

#[test]
fn residual_secret_escalates_exit_code() {
    let tree = TestTree::new();
    // No substitution rule covers GitHub PATs; the finding must escalate
    tree.write_source(
        ".claude/commands/token.md",
        &format!("token: ghp_{}\n", "a1B2".repeat(9)),
    );
    let engine = default_engine(&tree);

    let stats = engine.sync(live()).unwrap();
    let report = RunReport::new(stats, false);

    assert!(
        report
            .stats
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::SensitiveContent)
    );
    assert_eq!(report.exit_code(), 1);
    // Still synced: the finding is warn-only, review happens off-line
    assert_eq!(tree.target_snapshot().len(), 1);
}

#[test]
fn generators_produce_redacted_examples() {
    let tree = TestTree::new();
    tree.write_source(
        ".claude/settings.local.json",
        r#"{"enableAllProjectMcpServers": true, "secretKey": "do-not-publish"}"#,
    );
    tree.write_source(".codex/config.toml", "model = \"private\"\n");
    let engine = default_engine(&tree);

    let mut stats = engine.sync(live()).unwrap();
    engine.generate_examples(&mut stats, false);

    let settings = tree.read_target("settings.local.example.json");
    let parsed: serde_json::Value = serde_json::from_str(&settings).unwrap();
    assert_eq!(parsed["enableAllProjectMcpServers"], true);
    assert!(parsed.get("secretKey").is_none());
    assert!(!settings.contains("do-not-publish"));

    let codex = tree.read_target(".codex/config.toml.example");
    assert!(!codex.contains("private"));
    assert!(codex.contains("# Codex CLI Configuration Example"));
}
