use super::*;
use crate::error::ScoreError;

#[test]
fn test_detection_box_needs_four_values() {
    let b = DetectionBox::try_from(&[0.1f32, 0.2, 0.6, 0.8][..]).unwrap();
    assert_eq!(b.top, 0.1);
    assert_eq!(b.right, 0.8);
    assert!(matches!(
        DetectionBox::try_from(&[0.1f32, 0.2][..]),
        Err(ScoreError::InvalidDetection(2))
    ));
}

#[test]
fn test_to_pixels_scales_by_image_size() {
    let b = DetectionBox {
        top: 0.25,
        left: 0.5,
        bottom: 0.75,
        right: 1.0,
    };
    let rect = to_pixels(&b, 200, 400);
    assert_eq!(rect.left, 100.0);
    assert_eq!(rect.top, 100.0);
    assert_eq!(rect.right, 200.0);
    assert_eq!(rect.bottom, 300.0);
    assert_eq!(rect.center(), (150.0, 200.0));
}

#[test]
fn test_place_glyph_centres_and_lifts() {
    let rect = PixelRect {
        left: 0.0,
        top: 0.0,
        right: 100.0,
        bottom: 100.0,
    };
    let placement = place_glyph(&rect, |size| GlyphMetrics {
        width: size / 2.0,
        height: size,
    });
    assert!((placement.text_size - 80.0).abs() < 1e-4);
    assert!((placement.x - 30.0).abs() < 1e-4);
    assert!((placement.baseline_y - 75.0).abs() < 1e-4);
}

#[test]
fn test_fade_alpha_clamps() {
    assert_eq!(fade_alpha(0), 0);
    assert_eq!(fade_alpha(1250), 127);
    assert_eq!(fade_alpha(2500), 255);
    assert_eq!(fade_alpha(5000), 255);
}

#[test]
fn test_fade_schedule_stops_at_full_opacity() {
    let frames = fade_schedule().collect::<Vec<_>>();
    assert_eq!(frames.first(), Some(&0));
    assert_eq!(frames.last(), Some(&2512));
    assert_eq!(frames.len(), 158);
    assert_eq!(fade_alpha(*frames.last().unwrap()), 255);
}
