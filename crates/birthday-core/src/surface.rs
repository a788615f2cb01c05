//! Drawing abstraction over a 2D raster surface.
//!
//! The web front-end binds this to `CanvasRenderingContext2d`; tests and the
//! native runner use [`Recorder`]. Every primitive is fallible so a broken
//! surface surfaces as a frame error instead of a panic.

use glam::Vec2;

use crate::error::{SceneError, SceneResult};

/// Compositing mode applied to subsequent draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Normal painting.
    SourceOver,
    /// Additive glow.
    Lighter,
    /// Erases the destination proportionally to source alpha.
    DestinationOut,
}

impl BlendMode {
    /// Name understood by `globalCompositeOperation`.
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Lighter => "lighter",
            BlendMode::DestinationOut => "destination-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }
}

/// HSL color with saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba(Rgba),
    Hsla(Hsla),
}

impl Color {
    pub fn alpha(&self) -> f32 {
        match self {
            Color::Rgba(c) => c.a,
            Color::Hsla(c) => c.alpha,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Color::Rgba(c) => format!("rgba({},{},{},{})", c.r, c.g, c.b, c.a),
            Color::Hsla(c) => format!(
                "hsla({}, {}%, {}%, {})",
                c.hue, c.saturation, c.lightness, c.alpha
            ),
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

impl From<Hsla> for Color {
    fn from(c: Hsla) -> Self {
        Color::Hsla(c)
    }
}

/// Radial gradient from `center` (radius 0) out to `radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    /// `(offset in 0..=1, color)` pairs in ascending offset order.
    pub stops: Vec<(f32, Color)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Color),
    Radial(RadialGradient),
}

pub trait Surface {
    /// Drawable size in pixels.
    fn size(&self) -> Vec2;
    /// Clears every pixel to transparent.
    fn clear(&mut self) -> SceneResult<()>;
    fn set_blend(&mut self, mode: BlendMode) -> SceneResult<()>;
    /// Fills the whole surface with `color` under the current blend mode.
    fn fill_rect(&mut self, color: Color) -> SceneResult<()>;
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) -> SceneResult<()>;
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color) -> SceneResult<()>;
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Blend(BlendMode),
    FillRect(Color),
    Circle { center: Vec2, radius: f32, fill: Fill },
    Line { from: Vec2, to: Vec2, color: Color },
}

/// In-memory surface that records every call.
#[derive(Clone, Debug)]
pub struct Recorder {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
    fail_after: Option<usize>,
    calls: usize,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
            fail_after: None,
            calls: 0,
        }
    }

    /// Every call after the first `n` fails with [`SceneError::Surface`].
    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn heal(&mut self) {
        self.fail_after = None;
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn blends(&self) -> Vec<BlendMode> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Blend(m) => Some(*m),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, cmd: DrawCommand) -> SceneResult<()> {
        self.calls += 1;
        if let Some(n) = self.fail_after {
            if self.calls > n {
                return Err(SceneError::Surface(format!("recorder failed at call {}", self.calls)));
            }
        }
        self.commands.push(cmd);
        Ok(())
    }
}

impl Surface for Recorder {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) -> SceneResult<()> {
        self.record(DrawCommand::Clear)
    }

    fn set_blend(&mut self, mode: BlendMode) -> SceneResult<()> {
        self.record(DrawCommand::Blend(mode))
    }

    fn fill_rect(&mut self, color: Color) -> SceneResult<()> {
        self.record(DrawCommand::FillRect(color))
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &Fill) -> SceneResult<()> {
        self.record(DrawCommand::Circle {
            center,
            radius,
            fill: fill.clone(),
        })
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color) -> SceneResult<()> {
        self.record(DrawCommand::Line { from, to, color })
    }
}
