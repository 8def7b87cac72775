use thiserror::Error;

/// Advertising tone offered by the campaign form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Informative,
    Humorous,
    Serious,
    Exciting,
    Friendly,
    Authoritative,
    Witty,
    Empathetic,
    Trendy,
    Inspirational,
}

impl Tone {
    pub const ALL: [Tone; 10] = [
        Tone::Informative,
        Tone::Humorous,
        Tone::Serious,
        Tone::Exciting,
        Tone::Friendly,
        Tone::Authoritative,
        Tone::Witty,
        Tone::Empathetic,
        Tone::Trendy,
        Tone::Inspirational,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Informative => "Informative",
            Tone::Humorous => "Humorous",
            Tone::Serious => "Serious",
            Tone::Exciting => "Exciting",
            Tone::Friendly => "Friendly",
            Tone::Authoritative => "Authoritative",
            Tone::Witty => "Witty",
            Tone::Empathetic => "Empathetic",
            Tone::Trendy => "Trendy",
            Tone::Inspirational => "Inspirational",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Informative
    }
}

/// Target age bracket. Labels match the ranges shown in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Under18,
    From18To25,
    From26To35,
    From36To45,
    From46To55,
    Over55,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Under18,
        AgeGroup::From18To25,
        AgeGroup::From26To35,
        AgeGroup::From36To45,
        AgeGroup::From46To55,
        AgeGroup::Over55,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Under18 => "0-18",
            AgeGroup::From18To25 => "18-25",
            AgeGroup::From26To35 => "26-35",
            AgeGroup::From36To45 => "36-45",
            AgeGroup::From46To55 => "46-55",
            AgeGroup::Over55 => "Over 55",
        }
    }
}

impl Default for AgeGroup {
    fn default() -> Self {
        AgeGroup::Under18
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
    ShopNow,
    LearnMore,
    SignUp,
    ContactUs,
    VisitWebsite,
    FreeTrial,
}

impl CallToAction {
    pub const ALL: [CallToAction; 6] = [
        CallToAction::ShopNow,
        CallToAction::LearnMore,
        CallToAction::SignUp,
        CallToAction::ContactUs,
        CallToAction::VisitWebsite,
        CallToAction::FreeTrial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CallToAction::ShopNow => "Shop Now",
            CallToAction::LearnMore => "Learn More",
            CallToAction::SignUp => "Sign Up",
            CallToAction::ContactUs => "Contact Us",
            CallToAction::VisitWebsite => "Visit Website",
            CallToAction::FreeTrial => "Free Trial",
        }
    }
}

/// Everything the user tells us about the batch they want.
/// Built fresh from the form for every generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdRequest {
    pub idea: String,
    pub tone: Tone,
    pub audience: AgeGroup,
    pub keywords: String,
    pub call_to_action: Option<CallToAction>,
    pub variation: u8,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("please enter an advertising idea first")]
    EmptyIdea,
    #[error("ad variation must be between 1 and 10, got {0}")]
    VariationOutOfRange(u8),
}

impl AdRequest {
    /// Caller-side validation. The prompt builder itself never sanitizes.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.idea.trim().is_empty() {
            return Err(InvalidRequest::EmptyIdea);
        }
        if !(1..=10).contains(&self.variation) {
            return Err(InvalidRequest::VariationOutOfRange(self.variation));
        }
        Ok(())
    }
}
