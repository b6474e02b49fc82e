use crate::error::GameError;
use crate::surface::Surface;

/// Anything the game can draw.
///
/// `update` is called once per frame, in registration order, after the
/// surface has been cleared. It does all drawing and state changes for the
/// object. Nothing drawn survives into the next frame.
pub trait Renderable {
    /// # Errors
    ///
    /// An `Err` aborts the rest of the frame and stops the loop.
    fn update(&mut self, surface: &mut dyn Surface) -> Result<(), GameError>;
}

impl<F> Renderable for F
where
    F: FnMut(&mut dyn Surface) -> Result<(), GameError>,
{
    fn update(&mut self, surface: &mut dyn Surface) -> Result<(), GameError> {
        self(surface)
    }
}
