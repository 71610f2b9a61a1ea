//! Account commands: signup, login, logout, status.

use std::sync::Arc;

use agrismart_application::{LoginController, SessionContext, SignupController};
use agrismart_core::form::SubmitState;
use agrismart_gateway::backend::BackendApi;
use anyhow::{Result, bail};

pub async fn signup(
    backend: Arc<dyn BackendApi>,
    username: &str,
    user_id: &str,
    password: &str,
) -> Result<()> {
    let mut controller = SignupController::new(backend);
    controller.set_field("username", username);
    controller.set_field("userId", user_id);
    controller.set_field("password", password);

    controller.submit().await;
    match controller.state() {
        SubmitState::Success(outcome) => {
            println!("{}", outcome.message);
            println!("You can now log in with `agrismart login`.");
            Ok(())
        }
        SubmitState::Error(message) => bail!("{}", message),
        SubmitState::Idle => unreachable!("signup submit always resolves"),
    }
}

pub async fn login(
    backend: Arc<dyn BackendApi>,
    session: &mut SessionContext,
    user_id: &str,
    password: &str,
) -> Result<()> {
    let mut controller = LoginController::new(backend);
    controller.set_field("userId", user_id);
    controller.set_field("password", password);

    controller.submit(session).await;
    match controller.state() {
        SubmitState::Success(outcome) => {
            println!("{}", outcome.message);
            println!("Logged in as {}.", outcome.user_id);
            Ok(())
        }
        SubmitState::Error(message) => bail!("{}", message),
        SubmitState::Idle => unreachable!("login submit always resolves"),
    }
}

pub fn logout(session: &mut SessionContext) -> Result<()> {
    session.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn status(session: &SessionContext) -> Result<()> {
    match session.user_id() {
        Some(user_id) => println!("Logged in as {}.", user_id),
        None => println!("Not logged in."),
    }
    Ok(())
}
