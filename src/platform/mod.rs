//! Host platform capabilities the game depends on.
//!
//! The game never reaches for browser globals directly. Whatever hosts it
//! provides three things: a way to create a drawing surface, a way to run a
//! callback on the next display refresh, and a way to hear about key events.

pub mod browser;
pub mod headless;

use std::rc::Rc;

use crate::error::GameError;
use crate::input::KeyEvent;
use crate::surface::{Dimensions, Surface};

/// One-shot callback run on the next display refresh.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Key listener. Returns `true` when the event matched a binding, in which
/// case the platform suppresses the event's default action.
pub type KeyHandler = Rc<dyn Fn(&KeyEvent) -> bool>;

pub trait Platform {
    type Surface: Surface + 'static;

    /// Create a surface of the given size and attach it to the display.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host cannot produce a 2D drawing surface.
    fn create_surface(&self, dimensions: Dimensions) -> Result<Self::Surface, GameError>;

    /// Schedule `callback` for the next display refresh.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host refuses the request.
    fn request_frame(&self, callback: FrameCallback) -> Result<(), GameError>;

    /// Install `handler` for both key-down and key-up events.
    ///
    /// Every call installs another listener; nothing is deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the listener cannot be registered.
    fn listen_keys(&self, handler: KeyHandler) -> Result<(), GameError>;
}
