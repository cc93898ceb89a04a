use std::time::Instant;

use egui::{Align2, Pos2, Sense, Ui, Vec2};

use crate::model::days::WINDOW_RESERVE;
use crate::model::{gesture, keys, layout};
use crate::model::{
    DaySequence, DayVisual, DragUpdate, ExitGate, GestureState, LayoutInput, ScrubConfig,
    TimelineKey,
};
use crate::ui::theme;

/// Pointer bookkeeping for the drag in flight: where it started and the sign
/// of its most recent movement.
#[derive(Debug, Clone, Copy)]
struct PointerTrack {
    origin_x: f32,
    last_x: f32,
    direction: f32,
}

/// What the scrubber reported back to the host this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineResponse {
    /// A newly committed day index; the host updates its selected date.
    pub committed: Option<usize>,
    /// The host should leave timeline mode.
    pub exit: bool,
}

/// The date-scrubbing strip: owns the per-day springs, the gesture state and
/// the exit gate. The navigation index and the day sequence stay with the
/// host.
pub struct TimelineView {
    springs: Vec<DayVisual>,
    gesture: GestureState,
    pointer: Option<PointerTrack>,
    exit: ExitGate,
}

impl TimelineView {
    /// Build the mount-time layout: provisional width, first two items
    /// opaque, everything older invisible.
    pub fn new(len: usize, index: usize) -> Self {
        let springs = (0..len)
            .map(|i| DayVisual::resting_at(layout::initial_target(i, index)))
            .collect();
        Self {
            springs,
            gesture: GestureState::Idle,
            pointer: None,
            exit: ExitGate::Idle,
        }
    }

    /// Rebuild after the sequence changed (epoch edited) or on re-entry.
    pub fn reset(&mut self, len: usize, index: usize) {
        *self = Self::new(len, index);
    }

    /// Forget a pending exit deadline (host left timeline mode).
    pub fn disarm_exit(&mut self) {
        self.exit.disarm();
    }

    pub fn show(
        &mut self,
        days: &DaySequence,
        index: &mut usize,
        cfg: &ScrubConfig,
        ui: &mut Ui,
    ) -> TimelineResponse {
        let mut response = TimelineResponse::default();
        let len = days.len();
        if days.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No days to browse yet — check the epoch in Settings")
                        .color(theme::TEXT_DIM),
                );
            });
            return response;
        }

        let (rect, resp) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), theme::TIMELINE_HEIGHT),
            Sense::click_and_drag(),
        );
        let width = rect.width();
        let now = Instant::now();

        // Gesture events may arrive alongside key presses in one frame; only
        // the latest layout input ever reaches the springs.
        let mut latest_layout: Option<LayoutInput> = None;

        // ── Keyboard ────────────────────────────────────────────────
        let presses = ui.input(|i| {
            [
                (i.key_pressed(egui::Key::ArrowLeft), TimelineKey::Older),
                (i.key_pressed(egui::Key::ArrowRight), TimelineKey::Newer),
                (i.key_pressed(egui::Key::Escape), TimelineKey::Exit),
            ]
        });
        for (pressed, key) in presses {
            if !pressed {
                continue;
            }
            let fx = keys::update(key, *index, len);
            if let Some(committed) = fx.commit {
                *index = committed;
                response.committed = Some(committed);
            }
            if fx.exit {
                response.exit = true;
            }
            if fx.layout.is_some() {
                latest_layout = fx.layout;
            }
        }

        // ── Pointer drag ────────────────────────────────────────────
        if resp.drag_started() {
            if let Some(pos) = resp.interact_pointer_pos() {
                self.pointer = Some(PointerTrack {
                    origin_x: pos.x,
                    last_x: pos.x,
                    direction: 0.0,
                });
            }
        }
        if resp.dragged() || resp.drag_stopped() {
            if let Some(mut track) = self.pointer {
                let x = resp
                    .interact_pointer_pos()
                    .map(|p| p.x)
                    .unwrap_or(track.last_x);
                let step = x - track.last_x;
                if step != 0.0 {
                    track.direction = step.signum();
                }
                track.last_x = x;

                let delta_x = x - track.origin_x;
                let ev = DragUpdate {
                    down: resp.dragged(),
                    delta_x,
                    direction: track.direction,
                    distance: delta_x.abs(),
                };
                let (next, fx) =
                    gesture::update(self.gesture, ev, *index, len, cfg.commit_distance);
                self.gesture = next;

                if let Some(committed) = fx.commit {
                    *index = committed;
                    response.committed = Some(committed);
                }
                if fx.arm_exit {
                    self.exit.arm(now, cfg.exit_delay);
                }
                latest_layout = Some(fx.layout);

                self.pointer = if resp.drag_stopped() { None } else { Some(track) };
            }
        }

        debug_assert!(*index <= len.saturating_sub(WINDOW_RESERVE));

        // ── Exit gate ───────────────────────────────────────────────
        if self.exit.poll(now) {
            response.exit = true;
        }

        // ── Springs: retarget, tick, paint ──────────────────────────
        let anchor = latest_layout.map(|l| l.index).unwrap_or(*index);
        let slots = layout::visible_slots(anchor, len);

        if let Some(input) = latest_layout {
            for &i in &slots {
                self.springs[i].retarget(layout::target(i, &input, width));
            }
        }

        let dt = ui.input(|i| i.stable_dt).min(0.1);
        let mut animating = false;
        for &i in &slots {
            animating |= self.springs[i].tick(dt);
        }
        if animating || self.exit.is_armed() {
            ui.ctx().request_repaint();
        }

        let painter = ui.painter_at(rect);
        for (p, &i) in slots.iter().enumerate() {
            let visual = &self.springs[i];
            if let Some(day) = days.get(layout::label_index(anchor, p)) {
                painter.text(
                    Pos2::new(rect.left() + visual.x.value(), rect.center().y),
                    Align2::LEFT_CENTER,
                    day.format("%d %b").to_string(),
                    theme::font_day(),
                    visual.color(),
                );
            }
        }

        painter.text(
            Pos2::new(rect.center().x, rect.bottom() - 10.0),
            Align2::CENTER_BOTTOM,
            "drag · ← → to scrub · Esc to close",
            theme::font_hint(),
            theme::TEXT_DIM,
        );

        response
    }
}
