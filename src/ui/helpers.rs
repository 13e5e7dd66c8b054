//! UI helper functions

use ratatui::layout::Rect;

/// Gap between the panel and the right edge of the content area
const RIGHT_MARGIN: u16 = 2;

/// Gap between the panel and the bottom of the content area
const BOTTOM_MARGIN: u16 = 1;

/// Place a `width` x `height` box in the bottom-right corner of `area`
///
/// The box shrinks to fit when `area` is too small, and margins are
/// dropped before the box itself is shrunk.
pub fn anchor_bottom_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let right = RIGHT_MARGIN.min(area.width - width);
    let bottom = BOTTOM_MARGIN.min(area.height - height);

    Rect {
        x: area.x + area.width - width - right,
        y: area.y + area.height - height - bottom,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_with_room() {
        let rect = anchor_bottom_right(Rect::new(0, 0, 80, 24), 44, 10);
        assert_eq!(rect, Rect::new(34, 13, 44, 10));
    }

    #[test]
    fn test_anchor_respects_area_offset() {
        let rect = anchor_bottom_right(Rect::new(5, 3, 60, 20), 20, 5);
        assert_eq!(rect, Rect::new(43, 17, 20, 5));
    }

    #[test]
    fn test_anchor_drops_margins_first() {
        let rect = anchor_bottom_right(Rect::new(0, 0, 45, 10), 44, 10);
        assert_eq!(rect, Rect::new(0, 0, 44, 10));
    }

    #[test]
    fn test_anchor_shrinks_to_area() {
        let rect = anchor_bottom_right(Rect::new(0, 0, 30, 6), 44, 18);
        assert_eq!(rect, Rect::new(0, 0, 30, 6));
    }
}
