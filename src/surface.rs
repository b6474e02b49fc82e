//! Drawing surfaces: the capability objects draw through, and its canvas backing.
//!
//! [`CanvasSurface`] is the only type that draws on a
//! [`web_sys::CanvasRenderingContext2d`]; the browser platform merely creates
//! it. Everything else draws through the [`Surface`] trait so frames can be
//! recorded off-browser.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::DEFAULT_DIMENSION;
use crate::error::GameError;

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// Pixel size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { width: DEFAULT_DIMENSION, height: DEFAULT_DIMENSION }
    }
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Resolve requested dimensions, replacing each missing or zero value with
    /// [`DEFAULT_DIMENSION`].
    ///
    /// Zero is treated the same as "not given"; a 0-pixel surface cannot be requested.
    #[must_use]
    pub fn resolve(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width: or_default(width), height: or_default(height) }
    }
}

fn or_default(value: Option<u32>) -> u32 {
    match value {
        Some(v) if v != 0 => v,
        _ => DEFAULT_DIMENSION,
    }
}

/// An axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// A bitmap that can be blitted onto a surface.
///
/// Loading is up to the host page: wrap an `<img>` that has finished loading
/// with [`Image::from_element`]. A detached image carries only its source and
/// draws nothing on a canvas.
#[derive(Debug, Clone)]
pub struct Image {
    src: String,
    element: Option<HtmlImageElement>,
}

impl Image {
    #[must_use]
    pub fn from_element(element: HtmlImageElement) -> Self {
        Self { src: element.src(), element: Some(element) }
    }

    #[must_use]
    pub fn detached(src: impl Into<String>) -> Self {
        Self { src: src.into(), element: None }
    }

    /// The image's source URL.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }
}

/// 2D drawing capability handed to every object once per frame.
///
/// Colours and fonts are CSS strings, as the canvas API takes them.
pub trait Surface {
    /// Size of the surface in pixels.
    fn dimensions(&self) -> Dimensions;

    fn set_fill_style(&mut self, color: &str);

    fn set_stroke_style(&mut self, color: &str);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_font(&mut self, font: &str);

    /// # Errors
    ///
    /// Returns `Err` if the backing context rejects the call.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), GameError>;

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke the current path with the stroke style.
    fn stroke(&mut self);

    /// Blit `image` at its natural size with its top-left corner at (`x`, `y`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backing context rejects the image.
    fn draw_image(&mut self, image: &Image, x: f64, y: f64) -> Result<(), GameError>;

    /// Blit the `from` region of `image` scaled into `to`, e.g. one cell of a sprite sheet.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backing context rejects the image.
    fn draw_image_region(&mut self, image: &Image, from: Rect, to: Rect) -> Result<(), GameError>;

    /// Paint the whole surface with an opaque colour.
    fn clear(&mut self, color: &str) {
        let Dimensions { width, height } = self.dimensions();
        self.set_fill_style(color);
        self.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.canvas.width(), self.canvas.height())
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), GameError> {
        self.ctx.fill_text(text, x, y)?;
        Ok(())
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn draw_image(&mut self, image: &Image, x: f64, y: f64) -> Result<(), GameError> {
        if let Some(el) = &image.element {
            self.ctx.draw_image_with_html_image_element(el, x, y)?;
        }
        Ok(())
    }

    fn draw_image_region(&mut self, image: &Image, from: Rect, to: Rect) -> Result<(), GameError> {
        if let Some(el) = &image.element {
            self.ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                el,
                from.x,
                from.y,
                from.width,
                from.height,
                to.x,
                to.y,
                to.width,
                to.height,
            )?;
        }
        Ok(())
    }
}
