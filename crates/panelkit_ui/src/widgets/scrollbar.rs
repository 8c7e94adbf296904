//! Scrollbar calculations for item lists
//!
//! Lists scroll by whole items: the offset is the index of the first visible
//! row. These functions map between that offset, the scrollbar thumb and a
//! press on the track. Rendering stays in the widgets.

use crate::constants::SCROLLBAR_MIN_THUMB;
use crate::layout::{Point, Rect};

/// Parameters for thumb calculation
#[derive(Debug, Clone, Copy)]
pub struct ScrollbarParams {
    /// Number of items in the list
    pub item_count: usize,
    /// Rows the list shows at once
    pub max_visible: usize,
    /// Index of the first visible row
    pub scroll_offset: usize,
    /// Track bounds (the full height of the visible list)
    pub track_bounds: Rect,
}

impl ScrollbarParams {
    pub fn new(item_count: usize, max_visible: usize, scroll_offset: usize, track_bounds: Rect) -> Self {
        Self {
            item_count,
            max_visible,
            scroll_offset,
            track_bounds,
        }
    }
}

/// Result of thumb calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarThumb {
    /// Thumb bounds, full track width
    pub bounds: Rect,
    /// Scroll position, 0.0 at the top to 1.0 at the bottom
    pub scroll_ratio: f32,
}

/// Whether a list of `item_count` rows needs a scrollbar.
pub fn needs_scrollbar(item_count: usize, max_visible: usize) -> bool {
    item_count > max_visible
}

/// Largest valid scroll offset.
pub fn max_scroll_offset(item_count: usize, max_visible: usize) -> usize {
    item_count.saturating_sub(max_visible)
}

/// Clamp a scroll offset to the valid range.
pub fn clamp_scroll_offset(offset: usize, item_count: usize, max_visible: usize) -> usize {
    offset.min(max_scroll_offset(item_count, max_visible))
}

/// Smallest change to `offset` that brings `index` into the visible window.
pub fn ensure_visible(offset: usize, index: usize, max_visible: usize) -> usize {
    if index < offset {
        index
    } else if index >= offset + max_visible {
        (index + 1).saturating_sub(max_visible)
    } else {
        offset
    }
}

// =============================================================================
// Thumb Calculation
// =============================================================================

/// Calculate the vertical thumb for a list.
///
/// Returns None if every item fits (no scrollbar).
pub fn calculate_thumb(params: &ScrollbarParams) -> Option<ScrollbarThumb> {
    if !needs_scrollbar(params.item_count, params.max_visible) {
        return None;
    }

    let track = &params.track_bounds;
    let track_height = track.height.max(0);

    // Proportional to the visible fraction, never smaller than the floor.
    // Tracks shorter than the floor get a thumb that fills them.
    let proportional = i64::from(track_height) * params.max_visible as i64 / params.item_count as i64;
    let thumb_height = i32::try_from(proportional)
        .unwrap_or(track_height)
        .max(SCROLLBAR_MIN_THUMB)
        .min(track_height);

    let max_scroll = max_scroll_offset(params.item_count, params.max_visible);
    let scroll_ratio = if max_scroll == 0 {
        0.0
    } else {
        (params.scroll_offset as f32 / max_scroll as f32).clamp(0.0, 1.0)
    };

    let available_travel = track_height - thumb_height;
    let thumb_y = if params.scroll_offset >= max_scroll {
        // Pin to the bottom so rounding never leaves a gap at full scroll
        track.y + available_travel
    } else {
        track.y + (available_travel as f32 * scroll_ratio).round() as i32
    };

    Some(ScrollbarThumb {
        bounds: Rect::new(track.x, thumb_y, track.width, thumb_height),
        scroll_ratio,
    })
}

// =============================================================================
// Scroll Offset from Track Press
// =============================================================================

/// Convert a press at `y` on the track into a scroll offset.
///
/// The offset is proportional to the press position and truncated toward
/// zero. Presses in the last half row snap to the end so the final item is
/// always reachable despite truncation.
pub fn offset_from_track_press(
    y: i32,
    track_bounds: Rect,
    item_count: usize,
    max_visible: usize,
    item_height: i32,
) -> usize {
    let max_scroll = max_scroll_offset(item_count, max_visible);
    if track_bounds.height <= 0 {
        return 0;
    }

    let click_ratio = (y - track_bounds.y) as f32 / track_bounds.height as f32;
    let raw = (max_scroll as f32 * click_ratio).trunc() as i64;
    let offset = clamp_scroll_offset(usize::try_from(raw.max(0)).unwrap_or(0), item_count, max_visible);

    if y >= track_bounds.bottom() - item_height / 2 {
        max_scroll
    } else {
        offset
    }
}

// =============================================================================
// Hit Testing
// =============================================================================

/// Check if a point is inside the scrollbar track (edges inclusive).
pub fn point_in_track(point: Point, track_bounds: Rect) -> bool {
    track_bounds.contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Rect {
        // 3 visible rows of 30px
        Rect::new(190, 30, 10, 90)
    }

    #[test]
    fn test_thumb_not_needed() {
        let params = ScrollbarParams::new(3, 3, 0, track());
        assert!(calculate_thumb(&params).is_none());
        let params = ScrollbarParams::new(0, 3, 0, track());
        assert!(calculate_thumb(&params).is_none());
    }

    #[test]
    fn test_thumb_at_start() {
        let params = ScrollbarParams::new(5, 3, 0, track());
        let thumb = calculate_thumb(&params).unwrap();
        // 90 * 3 / 5 = 54
        assert_eq!(thumb.bounds, Rect::new(190, 30, 10, 54));
        assert_eq!(thumb.scroll_ratio, 0.0);
    }

    #[test]
    fn test_thumb_at_middle_rounds() {
        let params = ScrollbarParams::new(5, 3, 1, track());
        let thumb = calculate_thumb(&params).unwrap();
        // travel 36, ratio 0.5 -> 18
        assert_eq!(thumb.bounds.y, 48);
        assert!((thumb.scroll_ratio - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_thumb_pinned_at_end() {
        let params = ScrollbarParams::new(5, 3, 2, track());
        let thumb = calculate_thumb(&params).unwrap();
        assert_eq!(thumb.bounds.bottom(), track().bottom());
        assert_eq!(thumb.scroll_ratio, 1.0);
    }

    #[test]
    fn test_thumb_has_minimum_height() {
        let params = ScrollbarParams::new(100, 3, 0, track());
        let thumb = calculate_thumb(&params).unwrap();
        // 90 * 3 / 100 = 2, raised to the floor
        assert_eq!(thumb.bounds.height, SCROLLBAR_MIN_THUMB);
    }

    #[test]
    fn test_thumb_end_correction_on_long_list() {
        // travel 80 over 97 steps: rounding alone can miss the bottom
        for offset in 0..=97 {
            let thumb = calculate_thumb(&ScrollbarParams::new(100, 3, offset, track())).unwrap();
            assert!(thumb.bounds.y >= track().y);
            assert!(thumb.bounds.bottom() <= track().bottom());
        }
        let last = calculate_thumb(&ScrollbarParams::new(100, 3, 97, track())).unwrap();
        assert_eq!(last.bounds.bottom(), track().bottom());
    }

    #[test]
    fn test_thumb_never_exceeds_track() {
        let tiny = Rect::new(0, 0, 10, 6);
        let thumb = calculate_thumb(&ScrollbarParams::new(10, 3, 0, tiny)).unwrap();
        assert_eq!(thumb.bounds.height, 6);
        assert_eq!(thumb.bounds.y, 0);
    }

    #[test]
    fn test_press_maps_to_offset() {
        // top of track
        assert_eq!(offset_from_track_press(30, track(), 5, 3, 30), 0);
        // halfway: 2 * 0.5 = 1
        assert_eq!(offset_from_track_press(75, track(), 5, 3, 30), 1);
        // just above halfway truncates toward zero
        assert_eq!(offset_from_track_press(74, track(), 5, 3, 30), 0);
    }

    #[test]
    fn test_press_snaps_in_last_half_row() {
        // bottom - 15 is the start of the snap zone
        assert_eq!(offset_from_track_press(105, track(), 5, 3, 30), 2);
        assert_eq!(offset_from_track_press(120, track(), 5, 3, 30), 2);
        assert_eq!(offset_from_track_press(104, track(), 5, 3, 30), 1);
    }

    #[test]
    fn test_press_on_long_list_reaches_end() {
        let offset = offset_from_track_press(119, track(), 100, 3, 30);
        assert_eq!(offset, 97);
    }

    #[test]
    fn test_press_outside_track_is_clamped() {
        assert_eq!(offset_from_track_press(0, track(), 5, 3, 30), 0);
        assert_eq!(offset_from_track_press(500, track(), 5, 3, 30), 2);
    }

    #[test]
    fn test_clamp_and_max() {
        assert_eq!(max_scroll_offset(5, 3), 2);
        assert_eq!(max_scroll_offset(2, 3), 0);
        assert_eq!(clamp_scroll_offset(9, 5, 3), 2);
        assert_eq!(clamp_scroll_offset(1, 5, 3), 1);
    }

    #[test]
    fn test_ensure_visible() {
        // already visible
        assert_eq!(ensure_visible(1, 2, 3), 1);
        // above the window
        assert_eq!(ensure_visible(2, 0, 3), 0);
        // below the window
        assert_eq!(ensure_visible(0, 4, 3), 2);
        assert_eq!(ensure_visible(0, 3, 3), 1);
    }

    #[test]
    fn test_point_in_track_inclusive() {
        assert!(point_in_track(Point::new(190, 30), track()));
        assert!(point_in_track(Point::new(200, 120), track()));
        assert!(!point_in_track(Point::new(189, 60), track()));
    }
}
