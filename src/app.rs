use chrono::NaiveDate;
use std::path::PathBuf;

use crate::io::settings::{self, AppSettings};
use crate::model::{clamp_index, DaySequence, ScrubConfig};
use crate::ui;
use crate::ui::timeline::TimelineView;

/// Main application state. Owns the day sequence and the navigation index;
/// the timeline view owns everything transient (springs, gesture, exit gate).
pub struct ScrubberApp {
    pub config: ScrubConfig,
    pub days: DaySequence,
    pub index: usize,
    pub selected: NaiveDate,
    pub timeline_mode: bool,
    pub timeline: TimelineView,

    // Dialog state
    pub show_about: bool,
    pub show_settings: bool,
    pub pending_epoch: NaiveDate,

    // Status message
    pub status_message: String,

    settings_path: Option<PathBuf>,
}

impl ScrubberApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings_path = settings::settings_path();
        let stored = settings_path
            .as_ref()
            .map(|p| settings::load_settings(p))
            .unwrap_or_default();

        let config = ScrubConfig {
            epoch: stored.epoch,
            ..ScrubConfig::default()
        };

        let today = chrono::Local::now().date_naive();
        let days = DaySequence::generate(config.epoch, today);
        let selected = days.get(0).unwrap_or(today);
        let pending_epoch = config.epoch;
        let timeline = TimelineView::new(days.len(), 0);

        Self {
            config,
            days,
            index: 0,
            selected,
            timeline_mode: false,
            timeline,
            show_about: false,
            show_settings: false,
            pending_epoch,
            status_message: "Ready".to_string(),
            settings_path,
        }
    }

    // --- Mode & navigation operations ---

    pub fn enter_timeline(&mut self) {
        self.timeline.reset(self.days.len(), self.index);
        self.timeline_mode = true;
        self.status_message = "Browsing timeline".to_string();
    }

    pub fn leave_timeline(&mut self) {
        self.timeline_mode = false;
        self.timeline.disarm_exit();
        self.status_message = "Ready".to_string();
    }

    pub fn jump_to_today(&mut self) {
        self.set_index(0);
        self.status_message = "Jumped to today".to_string();
    }

    /// Commit a new navigation index and update the selected day.
    pub fn set_index(&mut self, index: usize) {
        self.index = clamp_index(index as i64, self.days.len());
        if let Some(day) = self.days.get(self.index) {
            self.selected = day;
        }
    }

    /// A date picked directly from the calendar; snap it into the navigable
    /// range.
    pub fn pick_date(&mut self, date: NaiveDate) {
        if let Some(newest) = self.days.get(0) {
            self.set_index((newest - date).num_days().max(0) as usize);
            self.status_message = format!("Selected {}", self.selected.format("%Y-%m-%d"));
        }
    }

    // --- Settings ---

    pub fn open_settings(&mut self) {
        self.pending_epoch = self.config.epoch;
        self.show_settings = true;
    }

    /// Apply the epoch from the settings dialog: persist it and rebuild the
    /// day sequence around it.
    pub fn apply_epoch(&mut self) {
        self.config.epoch = self.pending_epoch;

        if let Some(ref path) = self.settings_path {
            let stored = AppSettings { epoch: self.config.epoch };
            match settings::save_settings(&stored, path) {
                Ok(()) => self.status_message = "Settings saved".to_string(),
                Err(e) => self.status_message = format!("Error saving settings: {}", e),
            }
        }

        let today = chrono::Local::now().date_naive();
        self.days = DaySequence::generate(self.config.epoch, today);
        self.set_index(self.index);
        self.timeline.reset(self.days.len(), self.index);
    }
}

impl eframe::App for ScrubberApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_STATUS)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Day {} of {}",
                                self.index + 1,
                                self.days.len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: timeline scrubber or the resting day view
        let frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            if self.timeline_mode {
                ui.add_space((ui.available_height() - ui::theme::TIMELINE_HEIGHT).max(0.0) / 2.0);
                let response = self.timeline.show(&self.days, &mut self.index, &self.config, ui);
                if let Some(committed) = response.committed {
                    if let Some(day) = self.days.get(committed) {
                        self.selected = day;
                    }
                    if let Some(iso) = self.days.iso(committed) {
                        self.status_message = format!("Selected {}", iso);
                    }
                }
                if response.exit {
                    self.leave_timeline();
                }
            } else {
                let action = ui::day_view::show_day_view(&mut self.selected, ui);
                if action.browse {
                    self.enter_timeline();
                }
                if let Some(picked) = action.picked {
                    self.pick_date(picked);
                }
            }
        });

        // Dialogs
        if self.show_settings {
            ui::dialogs::show_settings_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
