use crate::model::days::clamp_index;
use crate::model::layout::{DragSample, LayoutInput};

/// Default cumulative distance (px) at which a drag commits one index step.
pub const DEFAULT_COMMIT_DISTANCE: f32 = 30.0;

/// Gesture lifecycle. A gesture that has committed is `Cancelled`: further
/// updates from the same pointer-down are ignored until release, so one
/// flick moves exactly one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    Cancelled,
}

/// One raw pointer-drag update, in the shape the drag source supplies:
/// cumulative delta and distance since pointer-down, plus the direction sign
/// of the most recent movement (positive = toward older days).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub down: bool,
    pub delta_x: f32,
    pub direction: f32,
    pub distance: f32,
}

/// Effects produced by one reducer step. The caller applies `commit` to the
/// navigation index (and notifies the host), forwards `arm_exit` to the
/// exit gate, and always re-targets the position model with `layout`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEffects {
    pub commit: Option<usize>,
    pub arm_exit: bool,
    pub layout: LayoutInput,
}

/// Pure reducer: `(state, update, current index, sequence length)` to
/// `(next state, effects)`. No rendering environment required.
pub fn update(
    state: GestureState,
    ev: DragUpdate,
    index: usize,
    len: usize,
    commit_distance: f32,
) -> (GestureState, DragEffects) {
    let step: i64 = if ev.direction > 0.0 { 1 } else { -1 };
    let candidate = clamp_index(index as i64 + step, len);

    // Dragging past the newest day arms the exit gate regardless of commit.
    let arm_exit = index == 0 && ev.direction < 0.0;

    if state == GestureState::Cancelled && ev.down {
        // Swallow the rest of a committed gesture; the visual settles on the
        // index the commit already moved us to.
        let layout = LayoutInput {
            index,
            drag: Some(DragSample { down: false, delta_x: ev.delta_x }),
        };
        return (
            GestureState::Cancelled,
            DragEffects { commit: None, arm_exit, layout },
        );
    }

    let commits = ev.down && ev.distance > commit_distance;
    let next = if commits {
        GestureState::Cancelled
    } else if ev.down {
        GestureState::Dragging
    } else {
        GestureState::Idle
    };

    // The visual tracks the finger before the threshold is crossed: below it
    // the layout stays anchored on the current index with the live offset
    // applied; the anchor moves to the candidate only when the step commits.
    let layout = LayoutInput {
        index: if commits { candidate } else { index },
        drag: Some(DragSample { down: ev.down && !commits, delta_x: ev.delta_x }),
    };

    let commit = commits.then_some(candidate);
    (next, DragEffects { commit, arm_exit, layout })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(down: bool, delta_x: f32, direction: f32, distance: f32) -> DragUpdate {
        DragUpdate { down, delta_x, direction, distance }
    }

    #[test]
    fn below_threshold_never_commits() {
        let mut state = GestureState::Idle;
        for d in [2.0, 10.0, 25.0, 30.0] {
            let (next, fx) = update(state, drag(true, d, 1.0, d), 4, 30, DEFAULT_COMMIT_DISTANCE);
            assert_eq!(fx.commit, None, "distance {d}");
            assert_eq!(next, GestureState::Dragging);
            state = next;
        }
    }

    #[test]
    fn first_update_past_threshold_commits_one_step() {
        let (state, fx) = update(GestureState::Dragging, drag(true, 31.0, 1.0, 31.0), 4, 30, DEFAULT_COMMIT_DISTANCE);
        assert_eq!(fx.commit, Some(5));
        assert_eq!(state, GestureState::Cancelled);

        // Subsequent updates of the same gesture are swallowed.
        let (state, fx) = update(state, drag(true, 80.0, 1.0, 80.0), 5, 30, DEFAULT_COMMIT_DISTANCE);
        assert_eq!(fx.commit, None);
        assert_eq!(state, GestureState::Cancelled);

        // Release re-arms for the next gesture.
        let (state, _) = update(state, drag(false, 80.0, 1.0, 80.0), 5, 30, DEFAULT_COMMIT_DISTANCE);
        assert_eq!(state, GestureState::Idle);
    }

    #[test]
    fn newer_direction_steps_down() {
        let (_, fx) = update(GestureState::Dragging, drag(true, -31.0, -1.0, 31.0), 4, 30, DEFAULT_COMMIT_DISTANCE);
        assert_eq!(fx.commit, Some(3));
    }

    #[test]
    fn boundaries_hold() {
        // At the newest day, a further "newer" flick stays at 0.
        let (_, fx) = update(GestureState::Dragging, drag(true, -40.0, -1.0, 40.0), 0, 30, DEFAULT_COMMIT_DISTANCE);
        assert_eq!(fx.commit, Some(0));
        // At the oldest navigable day, a further "older" flick stays put.
        let (_, fx) = update(GestureState::Dragging, drag(true, 40.0, 1.0, 40.0), 27, 30, DEFAULT_COMMIT_DISTANCE);
        assert_eq!(fx.commit, Some(27));
    }

    #[test]
    fn overdrag_at_newest_arms_exit() {
        let (_, fx) = update(GestureState::Dragging, drag(true, -5.0, -1.0, 5.0), 0, 30, DEFAULT_COMMIT_DISTANCE);
        assert!(fx.arm_exit);
        // Same drag away from index 0 does not.
        let (_, fx) = update(GestureState::Dragging, drag(true, -5.0, -1.0, 5.0), 3, 30, DEFAULT_COMMIT_DISTANCE);
        assert!(!fx.arm_exit);
        // Older-direction drag at index 0 does not.
        let (_, fx) = update(GestureState::Dragging, drag(true, 5.0, 1.0, 5.0), 0, 30, DEFAULT_COMMIT_DISTANCE);
        assert!(!fx.arm_exit);
    }

    #[test]
    fn layout_tracks_finger_before_commit() {
        let (_, fx) = update(GestureState::Dragging, drag(true, 12.0, 1.0, 12.0), 4, 30, DEFAULT_COMMIT_DISTANCE);
        assert_eq!(fx.layout.index, 4);
        let sample = fx.layout.drag.unwrap();
        assert!(sample.down);
        assert_eq!(sample.delta_x, 12.0);
    }

    #[test]
    fn layout_settles_on_commit() {
        let (_, fx) = update(GestureState::Dragging, drag(true, 31.0, 1.0, 31.0), 4, 30, DEFAULT_COMMIT_DISTANCE);
        assert_eq!(fx.layout.index, 5);
        // The live offset is dropped once the step is committed.
        assert!(!fx.layout.drag.unwrap().down);
    }
}
