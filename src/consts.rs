//! Shared constants for the game loop.

// ── Surface ─────────────────────────────────────────────────────

/// Width and height used when a dimension is missing or zero.
pub const DEFAULT_DIMENSION: u32 = 320;

/// Fill colour painted over the whole surface at the start of every frame.
pub const CLEAR_COLOR: &str = "#000000";

// ── Input ───────────────────────────────────────────────────────

/// Logical names bound by [`crate::game::Game::start`], with their browser key names.
pub const DEFAULT_BINDINGS: [(&str, &str); 4] = [
    ("up", "ArrowUp"),
    ("down", "ArrowDown"),
    ("right", "ArrowRight"),
    ("left", "ArrowLeft"),
];

// ── Logging ─────────────────────────────────────────────────────

/// Console log level when the config does not name one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
