//! Soil advisor.
//!
//! The one piece of fully local logic: a rule table mapping nutrient and pH
//! thresholds to textual recommendations. Every applicable rule fires, in
//! table order; no network access.

/// A soil sample entered by the user. Never transmitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

impl SoilSample {
    /// Builds a sample from raw form strings.
    ///
    /// Unparsable nutrients default to 0 (assumed deficient); unparsable pH
    /// defaults to 7, the no-action midpoint. The asymmetry is inherited
    /// behavior.
    pub fn from_fields(nitrogen: &str, phosphorus: &str, potassium: &str, ph: &str) -> Self {
        Self {
            nitrogen: nitrogen.trim().parse().unwrap_or(0.0),
            phosphorus: phosphorus.trim().parse().unwrap_or(0.0),
            potassium: potassium.trim().parse().unwrap_or(0.0),
            ph: ph.trim().parse().unwrap_or(7.0),
        }
    }
}

pub const NITROGEN_ADVICE: &str = "Add nitrogen-rich fertilizers like urea.";
pub const PHOSPHORUS_ADVICE: &str = "Use phosphorus fertilizer (superphosphate).";
pub const POTASSIUM_ADVICE: &str = "Apply potassium fertilizers (muriate of potash).";
pub const ACIDIC_ADVICE: &str = "Soil is acidic, apply lime.";
pub const ALKALINE_ADVICE: &str = "Soil is alkaline, add sulfur or organic matter.";
pub const BALANCED_ADVICE: &str = "Soil is balanced. Maintain good practices.";

/// Evaluates the rule table against a sample.
///
/// All applicable rules fire in order; when none fires the single balanced
/// message is returned.
pub fn advise(sample: &SoilSample) -> Vec<String> {
    let mut advice = Vec::new();

    if sample.nitrogen < 50.0 {
        advice.push(NITROGEN_ADVICE.to_string());
    }
    if sample.phosphorus < 20.0 {
        advice.push(PHOSPHORUS_ADVICE.to_string());
    }
    if sample.potassium < 120.0 {
        advice.push(POTASSIUM_ADVICE.to_string());
    }
    if sample.ph < 5.5 {
        advice.push(ACIDIC_ADVICE.to_string());
    }
    if sample.ph > 7.5 {
        advice.push(ALKALINE_ADVICE.to_string());
    }
    if advice.is_empty() {
        advice.push(BALANCED_ADVICE.to_string());
    }

    advice
}
