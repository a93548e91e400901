//! Compiled-in default sync mapping
//!
//! Source paths are relative to the home directory, destinations to the
//! public repository root. Order is the publication order.

use crate::mapping::SyncMapping;

const MAPPING: &[(&str, &str)] = &[
    // Claude Code
    ("CLAUDE.md", "CLAUDE.md"),
    (".claude/commands", "commands"),
    (".claude/skills", "skills"),
    (".claude/hooks", "hooks"),
    (".claude/agents", "agents"),
    (".claude/settings.json", "settings.json"),
    (".claude/status_lines", "status_lines"),
    (".claude/output-styles", "output-styles"),
    // Gemini CLI
    (".gemini/GEMINI.md", ".gemini/GEMINI.md"),
    (".gemini/settings.json", ".gemini/settings.json"),
    (".gemini/commands", ".gemini/commands"),
    (".gemini/agents", ".gemini/agents"),
    // Codex CLI
    (".codex/skills", ".codex/skills"),
    // Global learnings
    (".ai-docs", "global-learnings"),
];

/// The default source→destination mapping.
pub fn default_mapping() -> SyncMapping {
    SyncMapping::new(MAPPING.iter().copied())
}
