use crate::app::ScrubberApp;
use egui::{Context, RichText};

/// Settings dialog: edit the epoch date the day sequence starts from.
pub fn show_settings_dialog(app: &mut ScrubberApp, ctx: &Context) {
    let mut open = app.show_settings;
    let mut apply = false;
    let mut cancel = false;

    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("First day of the navigable history:");
            ui.add(egui_extras::DatePickerButton::new(&mut app.pending_epoch).id_salt("epoch_picker"));
            ui.label(
                RichText::new("The timeline covers every day after this date.")
                    .small()
                    .weak(),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    apply = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if apply {
        app.apply_epoch();
        open = false;
    }
    if cancel {
        open = false;
    }
    app.show_settings = open;
}

/// About dialog.
pub fn show_about_dialog(app: &mut ScrubberApp, ctx: &Context) {
    let mut open = app.show_about;
    egui::Window::new("About")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Day Scrubber");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(6.0);
                ui.label("A date-scrubbing timeline for browsing one day at a time.");
                ui.add_space(6.0);
                if ui.link("Source repository").clicked() {
                    let _ = open::that(env!("CARGO_PKG_REPOSITORY"));
                }
            });
        });
    app.show_about = open;
}
