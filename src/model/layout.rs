use egui::Color32;

/// Color of the focused day label.
pub const DAY_ACTIVE: Color32 = Color32::from_rgb(108, 117, 125); // #6c757d
/// Muted variant for neighbors and off-screen items (#6c757d at 60% alpha).
pub const DAY_MUTED: Color32 = Color32::from_rgba_premultiplied(108, 117, 125, 153);

/// Resting x for items that have scrolled past the newer edge.
const OFFSCREEN_BEHIND_X: f32 = -40.0;
/// Half the label width; centers items on their slot.
const ITEM_HALF: f32 = 35.0;
/// Provisional container width used before the real measurement arrives.
pub const FALLBACK_WIDTH: f32 = 480.0;

/// One drag sample forwarded from the gesture layer: whether the pointer is
/// still down, and the cumulative x-delta since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub down: bool,
    pub delta_x: f32,
}

/// Everything the position model needs to lay out the sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    /// The (tentative) clamped navigation index anchoring the window.
    pub index: usize,
    /// Present only while a drag is in progress.
    pub drag: Option<DragSample>,
}

impl LayoutInput {
    pub fn resting(index: usize) -> Self {
        Self { index, drag: None }
    }
}

/// Per-item animation target. Purely derived; never independently mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTarget {
    pub x: f32,
    pub color: Color32,
    pub opacity: f32,
}

/// Compute the target for item `i` given the current layout input and the
/// measured container width. `width == 0` (not yet measured) falls back to
/// the provisional layout so positions stay finite.
pub fn target(i: usize, input: &LayoutInput, width: f32) -> ItemTarget {
    let w = if width > 0.0 { width } else { FALLBACK_WIDTH };
    let index = input.index as i64;
    let rel = (index - i as i64) as f32;

    if (i as i64) < index - 1 {
        // Off-screen ahead (older side).
        return ItemTarget { x: w, color: DAY_MUTED, opacity: 0.0 };
    }
    if i as i64 > index + 1 {
        // Off-screen behind (newer side).
        return ItemTarget { x: OFFSCREEN_BEHIND_X, color: DAY_MUTED, opacity: 0.0 };
    }

    let x = match input.drag {
        Some(drag) => {
            let tracked = if drag.down { drag.delta_x } else { 0.0 };
            rel * (w / 3.0) + w / 2.0 - ITEM_HALF + tracked
        }
        None => rel * (w / 3.0) + w / 3.0 + ITEM_HALF,
    };

    let color = if i as i64 == index { DAY_ACTIVE } else { DAY_MUTED };
    ItemTarget { x, color, opacity: 1.0 }
}

/// Mount-time layout, before any gesture or width measurement: anchored at
/// the fallback width, opaque for the first two items, invisible beyond.
pub fn initial_target(i: usize, index: usize) -> ItemTarget {
    let rel = (index as i64 - i as i64) as f32;
    ItemTarget {
        x: rel * (FALLBACK_WIDTH / 3.0) + FALLBACK_WIDTH / 2.0 - ITEM_HALF,
        color: if i == index { DAY_ACTIVE } else { DAY_MUTED },
        // Focused item and its older neighbor start opaque (for a fresh
        // mount at index 0 that is exactly the first two items).
        opacity: if i >= index && i < index + 2 { 1.0 } else { 0.0 },
    }
}

/// Absolute indices that reach the animation/render layer: within 2 slots of
/// the focused index and clear of the 2 reserved trailing slots. Everything
/// else is culled entirely, not even animated.
pub fn visible_slots(index: usize, len: usize) -> Vec<usize> {
    let limit = len.saturating_sub(2);
    (index.saturating_sub(2)..=index + 2)
        .filter(|&i| i < limit)
        .collect()
}

/// Which day labels slot `p` of the rendered window: absolute below index 2,
/// anchor-relative once enough history exists to center the 5-slot window.
pub fn label_index(index: usize, slot: usize) -> usize {
    if index < 2 {
        slot
    } else {
        index + slot - 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_layout_is_deterministic() {
        let input = LayoutInput::resting(4);
        for i in 0..10 {
            assert_eq!(target(i, &input, 600.0), target(i, &input, 600.0));
        }
    }

    #[test]
    fn resting_formula() {
        let input = LayoutInput::resting(4);
        let t = target(4, &input, 600.0);
        assert_eq!(t.x, 600.0 / 3.0 + 35.0);
        assert_eq!(t.color, DAY_ACTIVE);
        assert_eq!(t.opacity, 1.0);

        let older = target(5, &input, 600.0);
        assert_eq!(older.x, -(600.0 / 3.0) + 600.0 / 3.0 + 35.0);
        assert_eq!(older.color, DAY_MUTED);
        assert_eq!(older.opacity, 1.0);
    }

    #[test]
    fn drag_layout_tracks_finger_only_while_down() {
        let mut input = LayoutInput {
            index: 4,
            drag: Some(DragSample { down: true, delta_x: 22.0 }),
        };
        let down = target(4, &input, 600.0);
        assert_eq!(down.x, 600.0 / 2.0 - 35.0 + 22.0);

        input.drag = Some(DragSample { down: false, delta_x: 22.0 });
        let released = target(4, &input, 600.0);
        assert_eq!(released.x, 600.0 / 2.0 - 35.0);
    }

    #[test]
    fn off_screen_rows() {
        let input = LayoutInput::resting(5);
        let ahead = target(2, &input, 600.0);
        assert_eq!((ahead.x, ahead.opacity), (600.0, 0.0));
        let behind = target(8, &input, 600.0);
        assert_eq!((behind.x, behind.opacity), (-40.0, 0.0));
    }

    #[test]
    fn zero_width_falls_back_and_stays_finite() {
        let input = LayoutInput {
            index: 0,
            drag: Some(DragSample { down: true, delta_x: -12.0 }),
        };
        for i in 0..6 {
            let t = target(i, &input, 0.0);
            assert!(t.x.is_finite());
            assert!(t.opacity.is_finite());
        }
        assert_eq!(target(0, &input, 0.0).x, 480.0 / 2.0 - 35.0 - 12.0);
    }

    #[test]
    fn initial_layout_matches_provisional_width() {
        let t0 = initial_target(0, 0);
        assert_eq!(t0.x, 480.0 / 2.0 - 35.0);
        assert_eq!(t0.color, DAY_ACTIVE);
        assert_eq!(t0.opacity, 1.0);
        assert_eq!(initial_target(1, 0).opacity, 1.0);
        assert_eq!(initial_target(2, 0).opacity, 0.0);
    }

    #[test]
    fn culling_window() {
        assert_eq!(visible_slots(0, 30), vec![0, 1, 2]);
        assert_eq!(visible_slots(1, 30), vec![0, 1, 2, 3]);
        assert_eq!(visible_slots(5, 30), vec![3, 4, 5, 6, 7]);
        // Reserved trailing slots are never rendered.
        assert_eq!(visible_slots(27, 30), vec![25, 26, 27]);
        // Tiny sequences render nothing past len - 2.
        assert_eq!(visible_slots(0, 3), vec![0]);
    }

    #[test]
    fn label_rule() {
        assert_eq!(label_index(1, 0), 0);
        assert_eq!(label_index(5, 2), 5);
        assert_eq!(label_index(0, 2), 2);
        assert_eq!(label_index(7, 4), 9);
    }
}
