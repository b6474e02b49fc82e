//! Error type shared by the game host, platforms, and renderables.

use wasm_bindgen::JsValue;

/// Errors surfaced while creating a game, configuring it, or running a frame.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no `document`.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<body>` to attach the canvas to.
    #[error("document has no body")]
    NoBody,
    /// The canvas did not hand out a 2D context.
    #[error("canvas has no 2d context")]
    NoContext,
    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
    /// A frame was requested while another was still being drawn.
    #[error("a frame is already being drawn")]
    FrameInProgress,
    /// A renderable failed during `update`.
    #[error("object update failed: {0}")]
    Object(String),
    /// The config JSON could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    /// The config named a log level `log` does not know.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    /// The console logger could not be installed.
    #[error("logger init failed: {0}")]
    Logger(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
