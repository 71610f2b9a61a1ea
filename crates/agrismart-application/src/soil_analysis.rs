//! Soil analysis screen controller.
//!
//! Evaluated entirely locally; never touches the network. Blank or
//! unparsable fields take the advisor's defaults rather than failing
//! validation.

use agrismart_core::advisor::{self, SoilSample};
use agrismart_core::form::{FormFields, SubmitState};

pub struct SoilAnalysisController {
    fields: FormFields,
    state: SubmitState<Vec<String>>,
}

impl SoilAnalysisController {
    pub fn new() -> Self {
        Self {
            fields: FormFields::new(),
            state: SubmitState::Idle,
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.set(name, value);
    }

    pub fn state(&self) -> &SubmitState<Vec<String>> {
        &self.state
    }

    /// Runs the rule table against the current fields. Synchronous; cannot
    /// fail.
    pub fn analyze(&mut self) {
        let sample = SoilSample::from_fields(
            self.fields.get("Nitrogen").unwrap_or(""),
            self.fields.get("Phosporus").unwrap_or(""),
            self.fields.get("Potassium").unwrap_or(""),
            self.fields.get("pH").unwrap_or(""),
        );
        self.state = SubmitState::Success(advisor::advise(&sample));
    }
}

impl Default for SoilAnalysisController {
    fn default() -> Self {
        Self::new()
    }
}
