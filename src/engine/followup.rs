use crate::model::ad_request::AdRequest;
use crate::model::follow_up::FollowUp;

const CONTACT: &str = "For a detailed marketing strategy tailored to your needs, \
                       contact our advertising experts at: marketing@solutions.com \
                       or call us at (555) 123-4567.";

/// Derives the follow-up block shown under the results. Pure templating,
/// same shape for every request.
pub fn follow_up_for(request: &AdRequest) -> FollowUp {
    let question = format!(
        "How can I effectively promote {} to reach my target audience ({}) with a {} tone?",
        request.idea,
        request.audience.label(),
        request.tone.label()
    );

    let answer = format!(
        "To effectively promote {} to your target audience ({}) with a {} tone, \
         consider using the creative concepts generated above, tailored to your \
         specific audience through multiple channels like social media, print, \
         and digital advertising. Emphasize content and messaging that resonates \
         with their interests and preferences.",
        request.idea,
        request.audience.label(),
        request.tone.label()
    );

    FollowUp {
        question,
        answer,
        contact: CONTACT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ad_request::{AgeGroup, Tone};

    #[test]
    fn follow_up_interpolates_request_fields() {
        let request = AdRequest {
            idea: "reusable water bottles".into(),
            tone: Tone::Inspirational,
            audience: AgeGroup::Over55,
            keywords: String::new(),
            call_to_action: None,
            variation: 5,
        };

        let follow_up = follow_up_for(&request);

        assert!(follow_up.question.contains("reusable water bottles"));
        assert!(follow_up.question.contains("Over 55"));
        assert!(follow_up.question.contains("Inspirational"));
        assert!(follow_up.answer.contains("reusable water bottles"));
        assert!(follow_up.contact.contains("marketing@solutions.com"));
    }
}
