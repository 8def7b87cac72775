use std::sync::mpsc::{Receiver, Sender};

use log::{error, info, warn};

use crate::engine::followup::follow_up_for;
use crate::engine::gemini_client::{ApiKey, GeminiClient};
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::response_parser::parse_ads;
use crate::model::ad_request::AdRequest;

/// Worker that owns the blocking HTTP client. Runs on its own thread;
/// the UI talks to it over the two channels and never blocks itself.
pub struct Engine {
    client: GeminiClient,
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
}

impl Engine {
    pub fn new(
        client: GeminiClient,
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
    ) -> Self {
        Self { client, rx, tx }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Generate { request, api_key } => {
                    let response = self.generate(&request, &api_key);
                    let _ = self.tx.send(response);
                }
            }
        }
    }

    fn generate(&self, request: &AdRequest, api_key: &ApiKey) -> EngineResponse {
        if let Err(e) = request.validate() {
            warn!("rejected generation request: {e}");
            return EngineResponse::GenerationFailed {
                message: e.to_string(),
            };
        }

        let prompt = PromptBuilder::build(request);
        info!("requesting ad batch ({} prompt bytes)", prompt.len());

        match self.client.generate(api_key, &prompt) {
            Ok(raw_reply) => {
                let batch = parse_ads(&raw_reply);
                info!(
                    "parsed {} ads from {} reply bytes",
                    batch.records.len(),
                    raw_reply.len()
                );
                if batch.skipped > 0 {
                    warn!("skipped {} malformed ad block(s)", batch.skipped);
                }

                EngineResponse::BatchReady {
                    follow_up: follow_up_for(request),
                    records: batch.records,
                    skipped: batch.skipped,
                    raw_reply,
                }
            }
            Err(e) => {
                error!("generation failed: {e}");
                EngineResponse::GenerationFailed {
                    message: e.to_string(),
                }
            }
        }
    }
}
