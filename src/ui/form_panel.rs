use eframe::egui;
use std::sync::mpsc::Sender;

use crate::engine::gemini_client::ApiKey;
use crate::engine::protocol::EngineCommand;
use crate::model::ad_request::{AgeGroup, CallToAction, Tone};
use crate::ui::app::{LeftTab, UiState};
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

pub fn draw_left_panel(
    ctx: &egui::Context,
    state: &mut UiState,
    settings: &mut UiSettings,
    model: &str,
    cmd_tx: &Sender<EngineCommand>,
) {
    egui::SidePanel::left("left")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.left_tab, LeftTab::Campaign, "Campaign");
                ui.selectable_value(&mut state.left_tab, LeftTab::Options, "Options");
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match state.left_tab {
                LeftTab::Campaign => draw_campaign(ui, state, cmd_tx),
                LeftTab::Options => draw_options(ui, settings, model),
            });
        });
}

fn draw_campaign(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.heading("Campaign");

    ui.label("Your Advertising Idea");
    ui.text_edit_singleline(&mut state.form.idea);

    ui.label("Keywords to emphasize");
    ui.text_edit_singleline(&mut state.form.keywords);

    ui.add_space(4.0);

    egui::ComboBox::from_label("Tone")
        .selected_text(state.form.tone.label())
        .show_ui(ui, |ui| {
            for tone in Tone::ALL {
                ui.selectable_value(&mut state.form.tone, tone, tone.label());
            }
        });

    egui::ComboBox::from_label("Age Group")
        .selected_text(state.form.audience.label())
        .show_ui(ui, |ui| {
            for group in AgeGroup::ALL {
                ui.selectable_value(&mut state.form.audience, group, group.label());
            }
        });

    egui::ComboBox::from_label("Call to Action")
        .selected_text(
            state
                .form
                .call_to_action
                .map(CallToAction::label)
                .unwrap_or("None"),
        )
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.form.call_to_action, None, "None");
            for cta in CallToAction::ALL {
                ui.selectable_value(&mut state.form.call_to_action, Some(cta), cta.label());
            }
        });

    ui.add_space(4.0);
    ui.label("Ad Variation (1-10)");
    ui.add(egui::Slider::new(&mut state.form.variation, 1..=10));

    ui.separator();

    ui.label("Google API Key");
    ui.add(egui::TextEdit::singleline(&mut state.api_key).password(true));

    ui.add_space(8.0);

    let idea_ok = !state.form.idea.trim().is_empty();
    let key_ok = !state.api_key.trim().is_empty();
    let can_submit = idea_ok && key_ok && !state.in_flight;

    let clicked = ui
        .add_enabled(can_submit, egui::Button::new("Generate Advertisements"))
        .clicked();

    if !idea_ok {
        ui.weak("Please enter an advertising idea first.");
    } else if !key_ok {
        ui.weak("Please enter your Google API key to continue.");
    }

    if clicked {
        state.error = None;
        state.export_error = None;
        state.in_flight = true;

        let _ = cmd_tx.send(EngineCommand::Generate {
            request: state.form.to_request(),
            api_key: ApiKey::new(state.api_key.trim()),
        });
    }
}

fn draw_options(ui: &mut egui::Ui, settings: &mut UiSettings, model: &str) {
    ui.heading("Options");

    ui.label("UI Scale");
    if ui
        .add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0))
        .changed()
    {
        settings_io::save_settings(settings);
    }

    ui.separator();
    ui.label(format!("Model: {model}"));
}
