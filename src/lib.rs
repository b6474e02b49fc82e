//! Minimal 2D game-loop scaffold for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. A [`game::Game`]
//! owns a drawing surface, a keyboard input map, and an ordered list of
//! [`object::Renderable`] values. Once started it clears the surface to black on
//! every display refresh and asks each object to draw itself, in insertion order.
//!
//! The browser is reached only through the [`platform::Platform`] trait, so the
//! whole loop also runs natively against [`platform::headless::HeadlessPlatform`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`game`] | Game host: surface, objects, input, frame loop |
//! | [`scene`] | Passive grouping of objects |
//! | [`input`] | Key bindings, pressed state, and the shared [`input::Input`] handle |
//! | [`object`] | The [`object::Renderable`] capability |
//! | [`surface`] | Drawing capability and the canvas-backed implementation |
//! | [`platform`] | Surface factory, frame scheduling, and key listeners |
//! | [`config`] | JSON-configurable startup settings |
//! | [`error`] | Crate error type |
//! | [`consts`] | Defaults (surface size, clear colour, arrow bindings) |

pub mod config;
pub mod consts;
pub mod error;
pub mod game;
pub mod input;
pub mod object;
pub mod platform;
pub mod scene;
pub mod surface;

pub use error::GameError;
pub use game::Game;
pub use object::Renderable;
pub use scene::Scene;

/// Route `log` output to the browser console and install the panic hook.
///
/// # Errors
///
/// Returns [`GameError::Logger`] if a logger has already been installed.
pub fn init_logging(level: log::Level) -> Result<(), GameError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level).map_err(|e| GameError::Logger(e.to_string()))
}
