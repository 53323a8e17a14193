use serde::Serialize;

use crate::error::ScoreError;

pub const FADE_DURATION_MS: u64 = 2500;
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const GLYPH_HEIGHT_RATIO: f32 = 0.8;
pub const BASELINE_LIFT_RATIO: f32 = 0.15;

/// Detector output in relative coordinates, `[top, left, bottom, right]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionBox {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl TryFrom<&[f32]> for DetectionBox {
    type Error = ScoreError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        match values {
            &[top, left, bottom, right] => Ok(Self {
                top,
                left,
                bottom,
                right,
            }),
            _ => Err(ScoreError::InvalidDetection(values.len())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PixelRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }
}

/// Measured extent of a glyph at a given text size; supplied by the host's
/// text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphMetrics {
    pub width: f32,
    pub height: f32,
}

impl GlyphMetrics {
    pub fn square(text_size: f32) -> Self {
        Self {
            width: text_size,
            height: text_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphPlacement {
    pub text_size: f32,
    pub x: f32,
    pub baseline_y: f32,
}
