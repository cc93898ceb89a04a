use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::ui::theme;

/// What the non-timeline day view asked for this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayViewAction {
    /// Enter timeline mode.
    pub browse: bool,
    /// A date picked directly from the calendar popup.
    pub picked: Option<NaiveDate>,
}

/// The resting view: the selected date front and center, with the scrubber
/// and a calendar picker as the two ways to change it.
pub fn show_day_view(selected: &mut NaiveDate, ui: &mut Ui) -> DayViewAction {
    let mut action = DayViewAction::default();
    let before = *selected;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.28);
        ui.label(
            RichText::new(selected.format("%d %B %Y").to_string())
                .font(theme::font_date_hero())
                .color(theme::TEXT_PRIMARY),
        );
        ui.label(
            RichText::new(selected.format("%A").to_string())
                .font(theme::font_menu())
                .color(theme::TEXT_SECONDARY),
        );
        ui.add_space(18.0);

        ui.horizontal(|ui| {
            // Center the pair of controls by hand.
            let spacing = ui.spacing().item_spacing.x;
            let width = 150.0 + 40.0 + spacing;
            ui.add_space((ui.available_width() - width).max(0.0) / 2.0);

            let browse = ui.button(format!(
                "{}  Browse timeline",
                egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE
            ));
            if browse.clicked() {
                action.browse = true;
            }
            ui.add(egui_extras::DatePickerButton::new(selected).id_salt("day_picker"));
        });
    });

    if *selected != before {
        action.picked = Some(*selected);
    }
    action
}
