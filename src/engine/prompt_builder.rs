use crate::model::ad_request::AdRequest;

/// Number of advertisements every prompt asks the model for. The parser
/// makes no assumption that the reply actually contains this many.
pub const AD_COUNT: usize = 10;

/// Builds the full prompt sent to the LLM.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking, no engine logic.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(request: &AdRequest) -> String {
        let mut prompt = String::new();

        push_task(&mut prompt, request);
        push_targeting(&mut prompt, request);
        push_emphasis(&mut prompt, request);
        push_variation(&mut prompt, request);
        push_format_instructions(&mut prompt);

        prompt
    }
}

fn push_task(prompt: &mut String, request: &AdRequest) {
    prompt.push_str(&format!(
        "Generate {} unique advertisement ideas for {}.\n",
        AD_COUNT, request.idea
    ));
}

fn push_targeting(prompt: &mut String, request: &AdRequest) {
    prompt.push_str(&format!("Target audience: {}.\n", request.audience.label()));
    prompt.push_str(&format!("Tone: {}.\n", request.tone.label()));
}

fn push_emphasis(prompt: &mut String, request: &AdRequest) {
    if !request.keywords.trim().is_empty() {
        prompt.push_str(&format!(
            "Emphasize these keywords: {}.\n",
            request.keywords
        ));
    }

    if let Some(cta) = request.call_to_action {
        prompt.push_str(&format!(
            "Include this call to action: {}.\n",
            cta.label()
        ));
    }
}

fn push_variation(prompt: &mut String, request: &AdRequest) {
    prompt.push_str(&format!(
        "Vary the advertisements to a level of {} out of 10, \
         1 being minimal variation and 10 being high variation.\n",
        request.variation
    ));
}

fn push_format_instructions(prompt: &mut String) {
    prompt.push_str("For each advertisement, provide:\n");
    prompt.push_str("1. A catchy headline\n");
    prompt.push_str("2. A brief description (2-3 sentences)\n");
    prompt.push_str("Format each ad as:\n");
    prompt.push_str("Ad [Number]:\n");
    prompt.push_str("Headline: [Your headline]\n");
    prompt.push_str("Description: [Your description]\n");
}
