use std::path::Path;

use anyhow::Context;
use eframe::egui;
use egui::Color32;
use log::info;

use crate::export::to_csv;
use crate::model::ad_record::AdRecord;
use crate::ui::app::{BatchView, UiState};

pub fn draw_results_panel(ctx: &egui::Context, state: &mut UiState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Generated Advertisements");
        ui.separator();

        if state.in_flight {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating advertisements…");
            });
            return;
        }

        if let Some(error) = &state.error {
            ui.colored_label(Color32::RED, error);
            ui.add_space(4.0);
        }

        let mut export_error = state.export_error.take();

        match &state.results {
            Some(view) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    draw_batch(ui, view, &mut export_error);
                });
            }
            None => {
                if state.error.is_none() {
                    ui.weak("Fill in the campaign form to generate a batch of advertisements.");
                }
            }
        }

        state.export_error = export_error;
    });
}

fn draw_batch(ui: &mut egui::Ui, view: &BatchView, export_error: &mut Option<String>) {
    if view.records.is_empty() {
        ui.colored_label(
            Color32::YELLOW,
            "Could not parse the generated advertisements for CSV download.",
        );
    } else {
        if view.skipped > 0 {
            ui.colored_label(
                Color32::YELLOW,
                format!(
                    "{} ad block(s) could not be parsed and were skipped.",
                    view.skipped
                ),
            );
            ui.add_space(4.0);
        }

        draw_table(ui, &view.records);

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Download CSV").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("advertisements.csv")
                    .save_file()
                {
                    match write_csv(&path, &view.records) {
                        Ok(()) => {
                            info!(
                                "exported {} records to {}",
                                view.records.len(),
                                path.display()
                            );
                            *export_error = None;
                        }
                        Err(e) => *export_error = Some(format!("{e:#}")),
                    }
                }
            }

            if let Some(message) = export_error.as_deref() {
                ui.colored_label(Color32::RED, message);
            }
        });
    }

    ui.add_space(8.0);

    ui.collapsing("Raw model reply", |ui| {
        let mut raw = view.raw_reply.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut raw)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
    });

    ui.collapsing("Follow-up Information", |ui| {
        ui.strong("Question:");
        ui.label(&view.follow_up.question);
        ui.add_space(4.0);
        ui.strong("Answer:");
        ui.label(&view.follow_up.answer);
        ui.add_space(4.0);
        ui.strong("Contact:");
        ui.label(&view.follow_up.contact);
    });
}

fn draw_table(ui: &mut egui::Ui, records: &[AdRecord]) {
    egui::Grid::new("ad_records")
        .striped(true)
        .num_columns(3)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Ad Number");
            ui.strong("Headline");
            ui.strong("Description");
            ui.end_row();

            for record in records {
                ui.label(&record.number);
                ui.label(&record.headline);
                ui.label(&record.description);
                ui.end_row();
            }
        });
}

fn write_csv(path: &Path, records: &[AdRecord]) -> anyhow::Result<()> {
    std::fs::write(path, to_csv(records))
        .with_context(|| format!("could not write {}", path.display()))
}
