use busconecta_core::account::{SessionStore, UserStore};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register screen: validate the form, create the account, sign in.
pub async fn register(state: &AppState, request: RegisterRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
        || request.confirm_password.is_empty()
    {
        return Err(AppError::Validation(
            "Fill in all required fields.".to_string(),
        ));
    }

    let min_length = state.config.account.min_password_length;
    if request.password.chars().count() < min_length {
        return Err(AppError::Validation(format!(
            "The password must have at least {} characters.",
            min_length
        )));
    }

    if request.password != request.confirm_password {
        return Err(AppError::Validation("The passwords do not match.".to_string()));
    }

    let user = state
        .users
        .register(&request.name, &request.email, &request.password)
        .await?;
    state.session.set_current(&user.email).await?;

    info!("account created and signed in: {}", user.email);
    Ok(())
}

/// Login screen: validate the form, check credentials, mark the session.
pub async fn login(state: &AppState, request: LoginRequest) -> Result<(), AppError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "Enter e-mail and password.".to_string(),
        ));
    }

    let user = state
        .users
        .login(&request.email, &request.password)
        .await?;
    state.session.set_current(&user.email).await?;
    Ok(())
}

pub async fn logout(state: &AppState) -> Result<(), AppError> {
    state.session.clear().await?;
    Ok(())
}

/// Display name for the dashboard greeting. Storage trouble here is
/// swallowed; the greeting falls back to a generic salutation.
pub async fn current_user_name(state: &AppState) -> Option<String> {
    let email = state.session.current().await.ok().flatten()?;
    state
        .users
        .find_by_email(&email)
        .await
        .ok()
        .flatten()
        .map(|user| user.name)
}
