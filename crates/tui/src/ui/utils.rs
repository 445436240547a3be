//! Small layout helpers shared by components.

use ratatui::layout::Rect;

/// Index of the area containing the given screen position, if any.
///
/// Components record per-control areas at render time and use this for
/// mouse hit-testing on the next event.
pub fn hit_test(areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    areas
        .iter()
        .position(|area| x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height)
}

/// Clamp a scroll offset so the viewport never scrolls past the content.
pub fn clamp_scroll(scroll: u16, content_lines: usize, viewport_height: u16) -> u16 {
    let max = content_lines.saturating_sub(viewport_height as usize) as u16;
    scroll.min(max)
}

/// Adjust `scroll` so the given content line is visible in a viewport of
/// `height` rows.
pub fn scroll_into_view(scroll: u16, line: usize, height: u16) -> u16 {
    let line = line as u16;
    if line < scroll {
        line
    } else if height > 0 && line >= scroll + height {
        line - height + 1
    } else {
        scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_finds_the_containing_area() {
        let areas = [Rect::new(0, 0, 10, 1), Rect::new(10, 0, 10, 1)];
        assert_eq!(hit_test(&areas, 3, 0), Some(0));
        assert_eq!(hit_test(&areas, 10, 0), Some(1));
        assert_eq!(hit_test(&areas, 25, 0), None);
        assert_eq!(hit_test(&areas, 3, 2), None);
    }

    #[test]
    fn scroll_into_view_moves_only_when_needed() {
        assert_eq!(scroll_into_view(5, 3, 10), 3); // above viewport
        assert_eq!(scroll_into_view(5, 7, 10), 5); // already visible
        assert_eq!(scroll_into_view(0, 12, 10), 3); // below viewport
    }

    #[test]
    fn clamp_scroll_respects_content_length() {
        assert_eq!(clamp_scroll(50, 30, 10), 20);
        assert_eq!(clamp_scroll(5, 30, 10), 5);
        assert_eq!(clamp_scroll(5, 8, 10), 0);
    }
}
