//! Redacted example-file generators
//!
//! Two one-shot transforms run after the main sweep. Unlike the 1:1 copy
//! path, these synthesize their output: the settings example is an
//! allow-list projection of the live config, and the tool-config example
//! is a fixed template that deliberately never reads the live file's
//! values. Both follow the same write-if-different / dry-run symmetry as
//! the main sweep.

use serde_json::{Map, Value};

use sync_fs::{NormalizedPath, io};
use sync_policy::Rewriter;

use crate::Result;
use crate::stats::{SyncStats, WarningKind};

/// Fixed, hand-authored tool-config template. Refreshed at the destination
/// only when this embedded text changes.
const TOOL_CONFIG_TEMPLATE: &str = r#"# Codex CLI Configuration Example
# Copy to ~/.codex/config.toml and customize

model = "gpt-5.2-codex"
model_reasoning_effort = "medium"
windows_wsl_setup_acknowledged = true

# Trust your project directories
# [projects.'C:\Path\To\Project']
# trust_level = "trusted"

[notice]
hide_gpt5_1_migration_prompt = true
"hide_gpt-5.1-codex-max_migration_prompt" = true

[notice.model_migrations]
"gpt-5.2" = "gpt-5.2-codex"

[features]
unified_exec = true
shell_snapshot = true
powershell_utf8 = true
collab = true
steer = true
"#;

/// Generate `settings.local.example.json` from the live local settings.
///
/// No-op when the live file is absent. A generation error is downgraded to
/// a warning; it never aborts the run.
pub fn settings_example(
    source_root: &NormalizedPath,
    target_root: &NormalizedPath,
    rewriter: &Rewriter,
    stats: &mut SyncStats,
    dry_run: bool,
) {
    let src = source_root.join(".claude/settings.local.json");
    let dst = target_root.join("settings.local.example.json");

    if !src.is_file() {
        return;
    }

    let result = build_settings_example(&src, rewriter).and_then(|output| {
        emit(&dst, &output, "settings.local.example.json", stats, dry_run)
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "settings example generation failed");
        stats.warn(
            WarningKind::FileError,
            format!("Error creating settings example: {}", e),
        );
    }
}

/// Generate `.codex/config.toml.example` from the embedded template.
///
/// The live tool config holds project paths; its values are never read.
/// The file's existence only gates whether an example is worth publishing.
pub fn tool_config_example(
    source_root: &NormalizedPath,
    target_root: &NormalizedPath,
    stats: &mut SyncStats,
    dry_run: bool,
) {
    let src = source_root.join(".codex/config.toml");
    let dst = target_root.join(".codex/config.toml.example");

    if !src.is_file() {
        return;
    }

    if let Err(e) = emit(
        &dst,
        TOOL_CONFIG_TEMPLATE,
        ".codex/config.toml.example",
        stats,
        dry_run,
    ) {
        tracing::warn!(error = %e, "tool config example generation failed");
        stats.warn(
            WarningKind::FileError,
            format!("Error creating tool config example: {}", e),
        );
    }
}

/// Project the live settings object into its redacted, fixed-shape form.
///
/// This is an allow-list projection, not a deep copy: unknown top-level
/// keys are dropped.
fn build_settings_example(src: &NormalizedPath, rewriter: &Rewriter) -> Result<String> {
    let raw = io::read_text_lossy(src)?;
    let parsed: Value = serde_json::from_str(&raw)?;

    let mut sanitized = Map::new();
    sanitized.insert(
        "permissions".to_string(),
        serde_json::json!({
            "allow": ["WebFetch(domain:docs.example.com)", "WebSearch"],
            "deny": []
        }),
    );
    sanitized.insert(
        "enableAllProjectMcpServers".to_string(),
        Value::Bool(
            parsed
                .get("enableAllProjectMcpServers")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        ),
    );
    sanitized.insert(
        "enabledMcpjsonServers".to_string(),
        serde_json::json!(["context7", "playwright"]),
    );
    sanitized.insert(
        "hooks".to_string(),
        Value::Object(project_hooks(parsed.get("hooks"), rewriter)),
    );

    Ok(serde_json::to_string_pretty(&Value::Object(sanitized))?)
}

/// Keep the hooks structure — matcher, hook type, status message — while
/// anonymizing paths inside commands.
fn project_hooks(hooks: Option<&Value>, rewriter: &Rewriter) -> Map<String, Value> {
    let mut out = Map::new();
    let Some(Value::Object(hook_map)) = hooks else {
        return out;
    };

    for (hook_type, configs) in hook_map {
        let mut projected_configs = Vec::new();
        if let Value::Array(configs) = configs {
            for config in configs {
                let mut projected = Map::new();
                if let Some(matcher) = config.get("matcher") {
                    projected.insert("matcher".to_string(), matcher.clone());
                }
                if let Some(Value::Array(inner)) = config.get("hooks") {
                    let projected_hooks: Vec<Value> =
                        inner.iter().map(|hook| project_hook(hook, rewriter)).collect();
                    projected.insert("hooks".to_string(), Value::Array(projected_hooks));
                }
                projected_configs.push(Value::Object(projected));
            }
        }
        out.insert(hook_type.clone(), Value::Array(projected_configs));
    }
    out
}

fn project_hook(hook: &Value, rewriter: &Rewriter) -> Value {
    let mut projected = Map::new();
    projected.insert(
        "type".to_string(),
        hook.get("type")
            .cloned()
            .unwrap_or_else(|| Value::String("command".to_string())),
    );
    if let Some(Value::String(command)) = hook.get("command") {
        projected.insert(
            "command".to_string(),
            Value::String(rewriter.anonymize_paths(command)),
        );
    }
    if let Some(message) = hook.get("statusMessage") {
        projected.insert("statusMessage".to_string(), message.clone());
    }
    Value::Object(projected)
}

/// Write-if-different with dry-run symmetry, shared by both generators.
fn emit(
    dst: &NormalizedPath,
    output: &str,
    label: &str,
    stats: &mut SyncStats,
    dry_run: bool,
) -> Result<()> {
    if dst.is_file() {
        let existing = io::read_text_lossy(dst)?;
        if existing == output {
            stats.files_unchanged += 1;
            return Ok(());
        }
    }

    if !dry_run {
        io::write_text(dst, output)?;
    }

    stats.files_copied += 1;
    let marker = if dry_run { "[DRY] " } else { "" };
    stats.record_change(format!("  {}Generated: {}", marker, label));
    Ok(())
}
