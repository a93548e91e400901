//! Compiled-in default policy tables
//!
//! Built once at startup and passed explicitly into the orchestrator, so
//! synthetic tables can replace them in tests. New provider formats are
//! added here without touching pipeline logic.

use crate::{Classifier, ExclusionSet, Result, Rewriter};

/// Files and folders that never leave the private tree.
const EXCLUDED_FRAGMENTS: &[&str] = &[
    // Claude sensitive
    ".credentials.json",
    "settings.local.json",
    "history.jsonl",
    "stats-cache.json",
    "cache",
    "chrome",
    "debug",
    "file-history",
    "ide",
    "paste-cache",
    "plans",
    "projects",
    "shell-snapshots",
    "statsig",
    "tasks",
    "telemetry",
    "todos",
    ".mcp.json",
    "mcp.json",
    ".env",
    "env",
    "__pycache__",
    ".pyc",
    "node_modules",
    ".git",
    "workflow elements.zip",
    "common-errors-fixes.md",
    // Gemini sensitive
    "oauth_creds.json",
    "google_accounts.json",
    "installation_id",
    "user_id",
    "state.json",
    "antigravity",
    "antigravity-browser-profile",
    "extensions",
    "tmp",
    // Codex sensitive
    "auth.json",
    "config.toml", // has project paths
    "models_cache.json",
    "version.json",
    "sessions",
    "log",
    ".system",
];

/// True-positive detection patterns: real key formats with exact lengths,
/// fixed character classes after known provider prefixes.
const DETECTION_PATTERNS: &[(&str, &str)] = &[
    (r"sk-ant-api[a-zA-Z0-9\-]{40,}", "anthropic-api-key"),
    (r"sk-[a-zA-Z0-9]{48}", "openai-api-key"),
    (r"ghp_[a-zA-Z0-9]{36}", "github-pat"),
    (r"gho_[a-zA-Z0-9]{36}", "github-oauth"),
    (r"fc-[a-f0-9]{32}", "firecrawl-api-key"),
    (r"AIzaSy[a-zA-Z0-9\-_]{33}", "google-api-key"),
    // Actual credential assignments with real-looking values
    (r#""api_key"\s*:\s*"[a-zA-Z0-9\-_]{30,}""#, "json-api-key-assignment"),
    (r#"api_key\s*=\s*['"][a-zA-Z0-9\-_]{30,}['"]"#, "api-key-assignment"),
];

/// Shapes that look like keys but are documentation, regex literals, or
/// template placeholders.
const SAFE_PATTERNS: &[&str] = &[
    r"AIza\[",      // regex pattern documentation
    r"sk-\.\*",     // regex pattern documentation
    r"sk-\.\.\.",   // placeholder
    r"sk-ant-\.\.\.", // placeholder
    r"api_key.*\$", // variable reference
    r"Bearer\s+\{", // template placeholder
    r"Bearer\s+<",  // template placeholder
];

/// User-home fragments replaced with a fixed placeholder. Patterns are
/// disjoint up to convergence, so application order is irrelevant.
const PATH_RULES: &[(&str, &str)] = &[
    (r#"C:\\Users\\[^\\/"]+"#, r"C:\Users\USERNAME"),
    (r#"/c/Users/[^/"'\s]+"#, "/c/Users/USERNAME"),
    (r#"/Users/[^/"'\s]+"#, "/Users/USERNAME"),
    (r#"/home/[^/"'\s]+"#, "/home/USERNAME"),
];

/// Credential shapes rewritten to environment-variable references, in
/// application order. No replacement is matchable by a later rule.
const CREDENTIAL_RULES: &[(&str, &str)] = &[
    // Inline env var assignments before commands (GEMINI_API_KEY=xxx gemini ...)
    (
        r"GEMINI_API_KEY=AIzaSy[a-zA-Z0-9\-_]{33}",
        "GEMINI_API_KEY=${GEMINI_API_KEY}",
    ),
    (
        r"GOOGLE_API_KEY=AIzaSy[a-zA-Z0-9\-_]{33}",
        "GOOGLE_API_KEY=${GOOGLE_API_KEY}",
    ),
    (
        r"OPENAI_API_KEY=sk-[a-zA-Z0-9]{48}",
        "OPENAI_API_KEY=${OPENAI_API_KEY}",
    ),
    (
        r"ANTHROPIC_API_KEY=sk-ant-[a-zA-Z0-9\-]{40,}",
        "ANTHROPIC_API_KEY=${ANTHROPIC_API_KEY}",
    ),
    // Python variable assignments (API_KEY = "..." or api_key = '...')
    (
        r#"API_KEY\s*=\s*['"]AIzaSy[a-zA-Z0-9\-_]{33}['"]"#,
        r#"API_KEY = os.environ.get("GEMINI_API_KEY")"#,
    ),
    (
        r#"api_key\s*=\s*['"]AIzaSy[a-zA-Z0-9\-_]{33}['"]"#,
        r#"api_key=os.environ.get("GEMINI_API_KEY")"#,
    ),
    (
        r#"api_key\s*=\s*['"]sk-[a-zA-Z0-9]{48}['"]"#,
        r#"api_key=os.environ.get("OPENAI_API_KEY")"#,
    ),
    // genai.Client(api_key='...') style
    (
        r#"Client\(api_key=['"]AIzaSy[a-zA-Z0-9\-_]{33}['"]\)"#,
        r#"Client(api_key=os.environ.get("GEMINI_API_KEY"))"#,
    ),
    // OpenAI project keys (sk-proj-...)
    (
        r#"api_key=['"]sk-proj-[a-zA-Z0-9_]{100,}['"]"#,
        r#"api_key=os.environ.get("OPENAI_API_KEY")"#,
    ),
    (
        r#"OpenAI\(api_key=['"]sk-proj-[a-zA-Z0-9_]{100,}['"]\)"#,
        r#"OpenAI(api_key=os.environ.get("OPENAI_API_KEY"))"#,
    ),
    // JSON assignments
    (
        r#""api_key"\s*:\s*"AIzaSy[a-zA-Z0-9\-_]{33}""#,
        r#""api_key": "${GEMINI_API_KEY}""#,
    ),
    (
        r#""api_key"\s*:\s*"sk-[a-zA-Z0-9]{48}""#,
        r#""api_key": "${OPENAI_API_KEY}""#,
    ),
    // Markdown backticks with API keys
    (
        r"`AIzaSy[a-zA-Z0-9\-_]{33}`",
        "`${GEMINI_API_KEY}`",
    ),
    (r"`sk-[a-zA-Z0-9]{48}`", "`${OPENAI_API_KEY}`"),
    // Firecrawl
    (
        r"FIRECRAWL_API_KEY=fc-[a-f0-9]{32}",
        "FIRECRAWL_API_KEY=${FIRECRAWL_API_KEY}",
    ),
    (
        r#""FIRECRAWL_API_KEY"\s*:\s*"fc-[a-f0-9]{32}""#,
        r#""FIRECRAWL_API_KEY": "${FIRECRAWL_API_KEY}""#,
    ),
    // ElevenLabs
    (
        r"ELEVENLABS_API_KEY=[a-zA-Z0-9]{32}",
        "ELEVENLABS_API_KEY=${ELEVENLABS_API_KEY}",
    ),
];

/// The default exclusion set.
pub fn default_exclusions() -> ExclusionSet {
    ExclusionSet::new(EXCLUDED_FRAGMENTS.iter().copied())
}

/// The default classifier over the built-in detection and safe tables.
pub fn default_classifier() -> Result<Classifier> {
    Classifier::new(
        DETECTION_PATTERNS.iter().copied(),
        SAFE_PATTERNS.iter().copied(),
    )
}

/// The default rewriter over the built-in path and credential tables.
pub fn default_rewriter() -> Result<Rewriter> {
    Rewriter::new(PATH_RULES.iter().copied(), CREDENTIAL_RULES.iter().copied())
}
