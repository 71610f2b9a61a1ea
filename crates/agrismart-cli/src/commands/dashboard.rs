//! Dashboard commands: the four advisory tools behind the session gate.

use std::path::PathBuf;
use std::sync::Arc;

use agrismart_application::{
    CropRecommendationController, CropYieldController, ImageAssessmentController, Router,
    SessionContext, SoilAnalysisController, WeatherController,
};
use agrismart_core::form::SubmitState;
use agrismart_core::route::Route;
use agrismart_gateway::backend::BackendApi;
use agrismart_gateway::weather::{WeatherApi, WeatherClient};
use anyhow::{Result, bail};

/// Protected commands resolve the dashboard route first; an unauthenticated
/// session redirects to login, which here means refusing the command.
fn require_dashboard(session: &SessionContext) -> Result<()> {
    if Router::navigate("/AgriDashboard", session) != Route::Dashboard {
        bail!("Not logged in. Run `agrismart login` first.");
    }
    Ok(())
}

pub async fn predict(
    backend: Arc<dyn BackendApi>,
    session: &SessionContext,
    fields: [(&str, String); 6],
) -> Result<()> {
    require_dashboard(session)?;

    let mut controller = CropYieldController::new(backend);
    for (name, value) in fields {
        controller.set_field(name, &value);
    }

    controller.submit().await;
    match controller.state() {
        SubmitState::Success(outcome) => {
            println!("Predicted yield: {}", outcome.prediction);
            Ok(())
        }
        SubmitState::Error(message) => bail!("{}", message),
        SubmitState::Idle => unreachable!("predict submit always resolves"),
    }
}

pub async fn recommend(
    backend: Arc<dyn BackendApi>,
    session: &SessionContext,
    fields: [(&str, String); 7],
) -> Result<()> {
    require_dashboard(session)?;

    let mut controller = CropRecommendationController::new(backend);
    for (name, value) in fields {
        controller.set_field(name, &value);
    }

    controller.submit().await;
    match controller.state() {
        SubmitState::Success(recommendation) => {
            println!("Recommended crop: {}", recommendation);
            Ok(())
        }
        SubmitState::Error(message) => bail!("{}", message),
        SubmitState::Idle => unreachable!("recommend submit always resolves"),
    }
}

pub fn soil(
    session: &SessionContext,
    nitrogen: &str,
    phosphorus: &str,
    potassium: &str,
    ph: &str,
) -> Result<()> {
    require_dashboard(session)?;

    let mut controller = SoilAnalysisController::new();
    controller.set_field("Nitrogen", nitrogen);
    controller.set_field("Phosporus", phosphorus);
    controller.set_field("Potassium", potassium);
    controller.set_field("pH", ph);

    controller.analyze();
    if let Some(advice) = controller.state().success() {
        for line in advice {
            println!("- {}", line);
        }
    }
    Ok(())
}

pub async fn weather(session: &SessionContext, city: &str) -> Result<()> {
    require_dashboard(session)?;

    let provider = WeatherClient::try_from_env()
        .map(|client| Arc::new(client) as Arc<dyn WeatherApi>);
    let mut controller = WeatherController::new(provider);
    controller.set_field("city", city);

    controller.submit().await;
    match controller.state() {
        SubmitState::Success(report) => {
            println!("{}", report.name);
            if let Some(condition) = report.weather.first() {
                println!("{} ({})", condition.main, condition.description);
            }
            println!("Temperature: {}°C", report.main.temp);
            println!("Humidity: {}%", report.main.humidity);
            println!("Wind speed: {} m/s", report.wind.speed);
            Ok(())
        }
        SubmitState::Error(message) => bail!("{}", message),
        SubmitState::Idle => unreachable!("weather submit always resolves"),
    }
}

pub async fn assess(
    backend: Arc<dyn BackendApi>,
    session: &SessionContext,
    image: PathBuf,
) -> Result<()> {
    require_dashboard(session)?;

    let mut controller = ImageAssessmentController::new(backend);
    controller.select_image(image);

    controller.submit().await;
    match controller.state() {
        SubmitState::Success(outcome) => {
            println!("Quality: {}", outcome.quality.as_deref().unwrap_or("N/A"));
            match outcome.price_suggestion {
                Some(price) => println!("Price suggestion: ₹{}", price),
                None => println!("Price suggestion: N/A"),
            }
            if let Some(confidence) = outcome.confidence {
                println!("Confidence: {}%", (confidence * 100.0).round());
            }
            Ok(())
        }
        SubmitState::Error(message) => bail!("{}", message),
        SubmitState::Idle => unreachable!("assess submit resolves once an image is selected"),
    }
}
