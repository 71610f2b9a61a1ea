use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use agrismart_application::SessionContext;
use agrismart_gateway::backend::{BackendApi, BackendClient, DEFAULT_BASE_URL};
use agrismart_infrastructure::{AgriPaths, FileSessionRepository};

mod commands;

#[derive(Parser)]
#[command(name = "agrismart")]
#[command(about = "AgriSmart - crop yield prediction and farm advisory client", long_about = None)]
struct Cli {
    /// Prediction backend base URL.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    backend_url: String,

    /// Config directory override (session and secrets live here).
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Signup {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        user_id: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Log in and persist the session
    Login {
        #[arg(long, default_value = "")]
        user_id: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the current session
    Status,
    /// Predict crop yield from country-level features
    Predict {
        #[arg(long, default_value = "2013")]
        year: String,
        /// Average rainfall (mm/year)
        #[arg(long, default_value = "")]
        rainfall: String,
        /// Pesticides (tonnes)
        #[arg(long, default_value = "")]
        pesticides: String,
        /// Average temperature (°C)
        #[arg(long, default_value = "")]
        temp: String,
        #[arg(long, default_value = "")]
        area: String,
        #[arg(long, default_value = "")]
        item: String,
    },
    /// Recommend a crop for soil and climate readings
    Recommend {
        #[arg(long, default_value = "")]
        nitrogen: String,
        #[arg(long, default_value = "")]
        phosphorus: String,
        #[arg(long, default_value = "")]
        potassium: String,
        #[arg(long, default_value = "")]
        temperature: String,
        #[arg(long, default_value = "")]
        humidity: String,
        #[arg(long, default_value = "")]
        ph: String,
        #[arg(long, default_value = "")]
        rainfall: String,
    },
    /// Analyze soil nutrients locally, no network
    Soil {
        #[arg(long, default_value = "")]
        nitrogen: String,
        #[arg(long, default_value = "")]
        phosphorus: String,
        #[arg(long, default_value = "")]
        potassium: String,
        #[arg(long, default_value = "")]
        ph: String,
    },
    /// Current weather for a city (defaults to Delhi)
    Weather { city: Option<String> },
    /// Assess crop quality from an image
    Assess { image: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let paths = match &cli.config_dir {
        Some(dir) => AgriPaths::new(dir),
        None => AgriPaths::default_location()?,
    };
    let repository = Arc::new(FileSessionRepository::new(&paths)?);
    let mut session = SessionContext::new(repository);
    session.restore()?;

    let backend: Arc<dyn BackendApi> = Arc::new(BackendClient::new(cli.backend_url.clone()));

    match cli.command {
        Commands::Signup {
            username,
            user_id,
            password,
        } => commands::auth::signup(backend, &username, &user_id, &password).await,
        Commands::Login { user_id, password } => {
            commands::auth::login(backend, &mut session, &user_id, &password).await
        }
        Commands::Logout => commands::auth::logout(&mut session),
        Commands::Status => commands::auth::status(&session),
        Commands::Predict {
            year,
            rainfall,
            pesticides,
            temp,
            area,
            item,
        } => {
            commands::dashboard::predict(
                backend,
                &session,
                [
                    ("Year", year),
                    ("average_rain_fall_mm_per_year", rainfall),
                    ("pesticides_tonnes", pesticides),
                    ("avg_temp", temp),
                    ("Area", area),
                    ("Item", item),
                ],
            )
            .await
        }
        Commands::Recommend {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        } => {
            commands::dashboard::recommend(
                backend,
                &session,
                [
                    ("Nitrogen", nitrogen),
                    ("Phosporus", phosphorus),
                    ("Potassium", potassium),
                    ("Temperature", temperature),
                    ("Humidity", humidity),
                    ("pH", ph),
                    ("Rainfall", rainfall),
                ],
            )
            .await
        }
        Commands::Soil {
            nitrogen,
            phosphorus,
            potassium,
            ph,
        } => commands::dashboard::soil(&session, &nitrogen, &phosphorus, &potassium, &ph),
        Commands::Weather { city } => {
            commands::dashboard::weather(&session, city.as_deref().unwrap_or("")).await
        }
        Commands::Assess { image } => commands::dashboard::assess(backend, &session, image).await,
    }
}
