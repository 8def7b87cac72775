use crate::engine::gemini_client::ApiKey;
use crate::model::ad_record::AdRecord;
use crate::model::ad_request::AdRequest;
use crate::model::follow_up::FollowUp;

pub enum EngineCommand {
    Generate { request: AdRequest, api_key: ApiKey },
}

pub enum EngineResponse {
    BatchReady {
        raw_reply: String,
        records: Vec<AdRecord>,
        skipped: usize,
        follow_up: FollowUp,
    },

    GenerationFailed {
        message: String,
    },
}
