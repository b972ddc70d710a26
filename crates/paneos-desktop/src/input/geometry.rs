//! Pure bounds computation for drag and resize
//!
//! All clamps are size-minimum-first: when a delta would violate the
//! minimum size, the size is pinned at the minimum and the anchored
//! edge absorbs the remainder. Dimensions can never go negative.

use crate::math::{Size, Vec2, FRAME_STYLE, MIN_HEIGHT, MIN_WIDTH, PAD, TASKBAR_HEIGHT};
use crate::window::WindowRegion;

/// Clamp a dragged window position so the window stays padded away
/// from the left/top edges and its title bar stays above the taskbar
/// strip (the title-visible rule: the window body may hang below, the
/// title may not).
pub fn clamp_drag(pos: Vec2, size: Size, viewport: Size) -> Vec2 {
    let max_x = viewport.width - size.width - PAD;
    let max_y = viewport.height - TASKBAR_HEIGHT - FRAME_STYLE.title_bar_height - PAD;
    Vec2::new(pos.x.min(max_x).max(PAD), pos.y.min(max_y).max(PAD))
}

/// Compute new window bounds for a resize gesture.
///
/// `handle` selects which edges follow the pointer: east/south grow
/// the size directly, west/north move the near edge while anchoring
/// the far one, and diagonal handles combine both axes from the same
/// pointer sample.
pub fn calculate_resize(
    handle: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    viewport: Size,
) -> (Vec2, Size) {
    use WindowRegion::*;

    let east = matches!(handle, ResizeE | ResizeNE | ResizeSE);
    let west = matches!(handle, ResizeW | ResizeNW | ResizeSW);
    let north = matches!(handle, ResizeN | ResizeNE | ResizeNW);
    let south = matches!(handle, ResizeS | ResizeSE | ResizeSW);

    let mut x = start_pos.x;
    let mut y = start_pos.y;
    let mut width = start_size.width;
    let mut height = start_size.height;

    // Bottom of the usable area, above the taskbar strip
    let bottom_limit = viewport.height - TASKBAR_HEIGHT - PAD;

    if east {
        let max_width = viewport.width - PAD - x;
        width = (start_size.width + delta.x).clamp(MIN_WIDTH, max_width.max(MIN_WIDTH));
    }
    if west {
        let right = start_pos.x + start_size.width;
        x = (start_pos.x + delta.x).max(PAD);
        width = right - x;
        if width < MIN_WIDTH {
            width = MIN_WIDTH;
            x = right - width;
        }
    }
    if south {
        let max_height = bottom_limit - y;
        height = (start_size.height + delta.y).clamp(MIN_HEIGHT, max_height.max(MIN_HEIGHT));
    }
    if north {
        let bottom = start_pos.y + start_size.height;
        y = (start_pos.y + delta.y).max(PAD);
        height = bottom - y;
        if height < MIN_HEIGHT {
            height = MIN_HEIGHT;
            y = bottom - height;
        }
    }

    (Vec2::new(x, y), Size::new(width, height))
}
