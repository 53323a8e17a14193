use crate::model::overlay::{
    BASELINE_LIFT_RATIO, DetectionBox, FADE_DURATION_MS, FRAME_INTERVAL_MS, GLYPH_HEIGHT_RATIO,
    GlyphMetrics, GlyphPlacement, PixelRect,
};

pub fn to_pixels(detection: &DetectionBox, width: u32, height: u32) -> PixelRect {
    let w = width as f32;
    let h = height as f32;
    PixelRect {
        left: detection.left * w,
        top: detection.top * h,
        right: detection.right * w,
        bottom: detection.bottom * h,
    }
}

/// Sizes the glyph to the box height and centres it, lifting the baseline a
/// little so emoji descenders stay inside the box.
pub fn place_glyph<F>(rect: &PixelRect, measure: F) -> GlyphPlacement
where
    F: FnOnce(f32) -> GlyphMetrics,
{
    let box_height = rect.height();
    let text_size = box_height * GLYPH_HEIGHT_RATIO;
    let metrics = measure(text_size);
    let (cx, cy) = rect.center();
    GlyphPlacement {
        text_size,
        x: cx - metrics.width / 2.0,
        baseline_y: cy + metrics.height / 2.0 - box_height * BASELINE_LIFT_RATIO,
    }
}

pub fn fade_progress(elapsed_ms: u64) -> f32 {
    (elapsed_ms as f32 / FADE_DURATION_MS as f32).clamp(0.0, 1.0)
}

pub fn fade_alpha(elapsed_ms: u64) -> u8 {
    (fade_progress(elapsed_ms) * 255.0) as u8
}

/// Frame timestamps from 0 until the first frame at full opacity.
pub fn fade_schedule() -> impl Iterator<Item = u64> {
    let mut next = Some(0u64);
    std::iter::from_fn(move || {
        let t = next?;
        next = if fade_progress(t) < 1.0 {
            Some(t + FRAME_INTERVAL_MS)
        } else {
            None
        };
        Some(t)
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_overlay.rs"]
mod tests;
