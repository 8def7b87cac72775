use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use eframe::egui;

use crate::config::AppConfig;
use crate::engine::engine::Engine;
use crate::engine::gemini_client::GeminiClient;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::ad_record::AdRecord;
use crate::model::ad_request::{AdRequest, AgeGroup, CallToAction, Tone};
use crate::model::follow_up::FollowUp;
use crate::ui::settings::UiSettings;
use crate::ui::{form_panel, results_panel, settings_io};

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftTab {
    Campaign,
    Options,
}

impl Default for LeftTab {
    fn default() -> Self {
        LeftTab::Campaign
    }
}

/* =========================
   Form state
   ========================= */

/// Mutable form state bound to the campaign widgets. Turned into an
/// immutable [`AdRequest`] at submit time.
pub struct AdForm {
    pub idea: String,
    pub keywords: String,
    pub tone: Tone,
    pub audience: AgeGroup,
    pub call_to_action: Option<CallToAction>,
    pub variation: u8,
}

impl Default for AdForm {
    fn default() -> Self {
        Self {
            idea: String::new(),
            keywords: String::new(),
            tone: Tone::default(),
            audience: AgeGroup::default(),
            call_to_action: Some(CallToAction::ShopNow),
            variation: 5,
        }
    }
}

impl AdForm {
    pub fn to_request(&self) -> AdRequest {
        AdRequest {
            idea: self.idea.trim().to_string(),
            tone: self.tone,
            audience: self.audience,
            keywords: self.keywords.trim().to_string(),
            call_to_action: self.call_to_action,
            variation: self.variation,
        }
    }
}

/* =========================
   UI State
   ========================= */

/// Last successful generation, kept around for display and export.
pub struct BatchView {
    pub raw_reply: String,
    pub records: Vec<AdRecord>,
    pub skipped: usize,
    pub follow_up: FollowUp,
}

#[derive(Default)]
pub struct UiState {
    pub form: AdForm,
    pub api_key: String,
    pub in_flight: bool,
    pub results: Option<BatchView>,
    pub error: Option<String>,
    pub export_error: Option<String>,
    pub left_tab: LeftTab,
}

/* =========================
   App
   ========================= */

pub struct AdApp {
    pub ui: UiState,
    pub settings: UiSettings,
    pub model: String,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl AdApp {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let client = GeminiClient::new(&config).context("could not build the HTTP client")?;

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(client, cmd_rx, resp_tx);
            engine.run();
        });

        Ok(Self {
            ui: UiState::default(),
            settings: settings_io::load_settings(),
            model: config.model,
            cmd_tx,
            resp_rx,
        })
    }
}

impl eframe::App for AdApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            self.ui.in_flight = false;
            match resp {
                EngineResponse::BatchReady {
                    raw_reply,
                    records,
                    skipped,
                    follow_up,
                } => {
                    self.ui.error = None;
                    self.ui.export_error = None;
                    self.ui.results = Some(BatchView {
                        raw_reply,
                        records,
                        skipped,
                        follow_up,
                    });
                }
                EngineResponse::GenerationFailed { message } => {
                    self.ui.error = Some(message);
                }
            }
        }

        form_panel::draw_left_panel(
            ctx,
            &mut self.ui,
            &mut self.settings,
            &self.model,
            &self.cmd_tx,
        );

        draw_footer(ctx);

        results_panel::draw_results_panel(ctx, &mut self.ui);

        if self.ui.in_flight {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn draw_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.weak("Powered by Google Gemini | © 2025 Advertising Solutions");
    });
}
