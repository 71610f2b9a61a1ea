//! Use-case layer: one form controller per screen, the session context, and
//! the router. Controllers own their field map and submit state; screens
//! share nothing but the session.

pub mod crop_recommendation;
pub mod crop_yield;
pub mod image_assessment;
pub mod login;
pub mod router;
pub mod session_context;
pub mod signup;
pub mod soil_analysis;
pub mod weather;

#[cfg(test)]
mod test_support;

pub use crate::crop_recommendation::CropRecommendationController;
pub use crate::crop_yield::CropYieldController;
pub use crate::image_assessment::ImageAssessmentController;
pub use crate::login::LoginController;
pub use crate::router::Router;
pub use crate::session_context::SessionContext;
pub use crate::signup::SignupController;
pub use crate::soil_analysis::SoilAnalysisController;
pub use crate::weather::WeatherController;
