use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::GameConfig;
use crate::consts::{CLEAR_COLOR, DEFAULT_BINDINGS};
use crate::error::GameError;
use crate::input::{Input, KeyEvent};
use crate::object::Renderable;
use crate::platform::Platform;
use crate::platform::browser::BrowserPlatform;
use crate::surface::{Dimensions, Surface};

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

/// Per-frame state: the surface and everything drawn onto it.
///
/// Shared between the [`Game`] and the scheduled frame callbacks. No borrow is
/// held while an object updates, so objects may call back into the game.
struct FrameState<S> {
    surface: RefCell<S>,
    objects: RefCell<Vec<Box<dyn Renderable>>>,
    /// Objects added since the draw list was last merged.
    added: RefCell<Vec<Box<dyn Renderable>>>,
    len: Cell<usize>,
    frames: Cell<u64>,
    drawing: Cell<bool>,
}

impl<S: Surface> FrameState<S> {
    fn new(surface: S) -> Self {
        Self {
            surface: RefCell::new(surface),
            objects: RefCell::default(),
            added: RefCell::default(),
            len: Cell::new(0),
            frames: Cell::new(0),
            drawing: Cell::new(false),
        }
    }

    fn add(&self, obj: Box<dyn Renderable>) {
        self.added.borrow_mut().push(obj);
        self.len.set(self.len.get() + 1);
    }

    /// Clear the surface, then update every object in insertion order.
    ///
    /// Objects added during the frame are updated later in the same frame.
    /// Stops at the first failing object; later objects are not updated.
    fn render(&self) -> Result<(), GameError> {
        if self.drawing.replace(true) {
            return Err(GameError::FrameInProgress);
        }

        let mut objects = std::mem::take(&mut *self.objects.borrow_mut());
        let result = self.update_all(&mut objects);
        objects.append(&mut self.added.borrow_mut());
        *self.objects.borrow_mut() = objects;
        self.drawing.set(false);

        if result.is_ok() {
            self.frames.set(self.frames.get() + 1);
            log::trace!("frame {} drew {} objects", self.frames.get(), self.len.get());
        }
        result
    }

    fn update_all(&self, objects: &mut Vec<Box<dyn Renderable>>) -> Result<(), GameError> {
        let mut surface = self.surface.borrow_mut();
        surface.clear(CLEAR_COLOR);

        let mut next = 0;
        loop {
            objects.append(&mut self.added.borrow_mut());
            let Some(obj) = objects.get_mut(next) else {
                return Ok(());
            };
            obj.update(&mut *surface)?;
            next += 1;
        }
    }
}

/// The game host: owns the surface, the object list, input, and the frame loop.
///
/// Lifecycle is constructed → running (after [`Game::start`]). There is no stop;
/// a running loop lives until the page goes away, even if the `Game` is dropped.
pub struct Game<P: Platform> {
    platform: Rc<P>,
    state: Rc<FrameState<P::Surface>>,
    input: Input,
    dimensions: Dimensions,
}

impl<P: Platform + 'static> Game<P> {
    /// Create the game and its surface. A missing or zero dimension becomes 320.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the platform cannot create the surface.
    pub fn new(platform: P, width: Option<u32>, height: Option<u32>) -> Result<Self, GameError> {
        Self::build(platform, Dimensions::resolve(width, height))
    }

    /// Create the game from a parsed [`GameConfig`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the platform cannot create the surface.
    pub fn with_config(platform: P, config: &GameConfig) -> Result<Self, GameError> {
        Self::build(platform, config.dimensions())
    }

    fn build(platform: P, dimensions: Dimensions) -> Result<Self, GameError> {
        let surface = platform.create_surface(dimensions)?;
        log::debug!("game created: {}x{}", dimensions.width, dimensions.height);
        Ok(Self {
            platform: Rc::new(platform),
            state: Rc::new(FrameState::new(surface)),
            input: Input::new(),
            dimensions,
        })
    }

    /// Bind the arrow keys, run the first frame, keep the loop going, and start
    /// listening for keys.
    ///
    /// Not idempotent: a second call starts a second loop and a second
    /// listener, so every frame and key event is then handled twice.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the first frame fails or the platform refuses the
    /// frame request or the listener. In that case listeners are not installed.
    pub fn start(&self) -> Result<(), GameError> {
        for (name, key) in DEFAULT_BINDINGS {
            self.keybind(name, key);
        }

        run_loop(Rc::clone(&self.platform), Rc::clone(&self.state))?;

        let input = self.input.clone();
        self.platform.listen_keys(Rc::new(move |event: &KeyEvent| input.apply(event)))?;

        log::info!("game started");
        Ok(())
    }

    /// Append `obj` to the draw list. Objects draw in the order they were added.
    ///
    /// Safe to call from inside an object's `update`; the new object is
    /// updated later in that same frame.
    pub fn add(&self, obj: impl Renderable + 'static) {
        self.add_boxed(Box::new(obj));
    }

    /// Append an already boxed object, e.g. one taken out of a [`crate::scene::Scene`].
    pub fn add_boxed(&self, obj: Box<dyn Renderable>) {
        self.state.add(obj);
        log::debug!("object added ({} total)", self.state.len.get());
    }

    /// Append every object from `objs`, e.g. the members of a [`crate::scene::Scene`].
    pub fn extend(&self, objs: impl IntoIterator<Item = Box<dyn Renderable>>) {
        for obj in objs {
            self.add_boxed(obj);
        }
    }

    /// Bind logical `name` to browser key `key` and mark it not pressed.
    /// Rebinding a name replaces its key.
    pub fn keybind(&self, name: &str, key: &str) {
        self.input.bind(name, key);
        log::debug!("keybind {name} -> {key}");
    }

    /// Draw one frame now, without scheduling another.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an object's `update`, or
    /// [`GameError::FrameInProgress`] when called from inside a frame.
    pub fn tick(&self) -> Result<(), GameError> {
        self.state.render()
    }

    // --- Queries ---

    /// A handle onto the live input state.
    #[must_use]
    pub fn input(&self) -> Input {
        self.input.clone()
    }

    #[must_use]
    pub fn is_pressed(&self, name: &str) -> bool {
        self.input.is_pressed(name)
    }

    #[must_use]
    pub fn binding(&self, name: &str) -> Option<String> {
        self.input.binding(name)
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len.get()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frames drawn to completion so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.state.frames.get()
    }
}

impl Game<BrowserPlatform> {
    /// Create a game on a fresh `<canvas>` appended to the page body.
    ///
    /// # Errors
    ///
    /// Returns `Err` outside a browser or if the canvas has no 2D context.
    pub fn in_browser(config: &GameConfig) -> Result<Self, GameError> {
        Self::with_config(BrowserPlatform::new()?, config)
    }
}

/// Draw a frame, then ask the platform to do it again on the next refresh.
///
/// A failing frame is not rescheduled, so the loop ends there.
fn run_loop<P>(platform: Rc<P>, state: Rc<FrameState<P::Surface>>) -> Result<(), GameError>
where
    P: Platform + 'static,
{
    state.render()?;

    let next = Rc::clone(&platform);
    platform.request_frame(Box::new(move || {
        if let Err(e) = run_loop(next, state) {
            log::error!("frame loop stopped: {e}");
        }
    }))
}
