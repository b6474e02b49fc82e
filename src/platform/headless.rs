//! In-memory platform for running the loop without a browser.
//!
//! Surfaces record every drawing call instead of producing pixels. Frame
//! requests queue up until [`HeadlessPlatform::run_frame`] is called, and key
//! events are delivered with [`HeadlessPlatform::dispatch`]. Cloning the
//! platform shares its state, so a test can keep a handle after moving one
//! into a [`crate::game::Game`].

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{FrameCallback, KeyHandler, Platform};
use crate::error::GameError;
use crate::input::KeyEvent;
use crate::surface::{Dimensions, Image, Rect, Surface};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillStyle(String),
    StrokeStyle(String),
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    Font(String),
    FillText { text: String, x: f64, y: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
    /// Images are recorded by source URL.
    DrawImage { src: String, x: f64, y: f64 },
    DrawImageRegion { src: String, from: Rect, to: Rect },
}

/// A surface that logs drawing calls into a shared list.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    dimensions: Dimensions,
    calls: Rc<RefCell<Vec<DrawCall>>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions, calls: Rc::default() }
    }

    /// Every call recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    /// Forget all recorded calls.
    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: DrawCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn set_fill_style(&mut self, color: &str) {
        self.record(DrawCall::FillStyle(color.to_owned()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.record(DrawCall::StrokeStyle(color.to_owned()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(DrawCall::FillRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(DrawCall::StrokeRect { x, y, width, height });
    }

    fn set_font(&mut self, font: &str) {
        self.record(DrawCall::Font(font.to_owned()));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), GameError> {
        self.record(DrawCall::FillText { text: text.to_owned(), x, y });
        Ok(())
    }

    fn begin_path(&mut self) {
        self.record(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(DrawCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(DrawCall::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.record(DrawCall::Stroke);
    }

    fn draw_image(&mut self, image: &Image, x: f64, y: f64) -> Result<(), GameError> {
        self.record(DrawCall::DrawImage { src: image.src().to_owned(), x, y });
        Ok(())
    }

    fn draw_image_region(&mut self, image: &Image, from: Rect, to: Rect) -> Result<(), GameError> {
        self.record(DrawCall::DrawImageRegion { src: image.src().to_owned(), from, to });
        Ok(())
    }
}

#[derive(Default)]
struct HeadlessState {
    surfaces: Vec<RecordingSurface>,
    frames: VecDeque<FrameCallback>,
    handlers: Vec<KeyHandler>,
}

/// Platform backed by queues instead of a display.
#[derive(Clone, Default)]
pub struct HeadlessPlatform {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the oldest pending frame callback. Returns `false` if none was pending.
    ///
    /// Callbacks requested while this one runs wait for the next call.
    pub fn run_frame(&self) -> bool {
        let next = self.state.borrow_mut().frames.pop_front();
        match next {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Run every callback pending right now, one display refresh.
    /// Returns how many ran.
    pub fn run_refresh(&self) -> usize {
        let mut ran = 0;
        for _ in 0..self.pending_frames() {
            if self.run_frame() {
                ran += 1;
            }
        }
        ran
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Deliver `event` to every installed handler, in install order.
    /// Returns `true` if any handler reported a match.
    pub fn dispatch(&self, event: &KeyEvent) -> bool {
        let handlers = self.state.borrow().handlers.clone();
        handlers.iter().fold(false, |matched, handler| handler(event) | matched)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().handlers.len()
    }

    /// Surfaces created so far; they share call logs with the ones handed out.
    #[must_use]
    pub fn surfaces(&self) -> Vec<RecordingSurface> {
        self.state.borrow().surfaces.clone()
    }
}

impl Platform for HeadlessPlatform {
    type Surface = RecordingSurface;

    fn create_surface(&self, dimensions: Dimensions) -> Result<RecordingSurface, GameError> {
        let surface = RecordingSurface::new(dimensions);
        self.state.borrow_mut().surfaces.push(surface.clone());
        Ok(surface)
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<(), GameError> {
        self.state.borrow_mut().frames.push_back(callback);
        Ok(())
    }

    fn listen_keys(&self, handler: KeyHandler) -> Result<(), GameError> {
        self.state.borrow_mut().handlers.push(handler);
        Ok(())
    }
}
