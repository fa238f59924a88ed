//! Auth flow: register, login, logout, whoami

use super::App;
use crate::client::ApiError;
use crate::store::{analytics, session};
use anyhow::Result;

pub async fn register(app: &App, name: &str, email: &str, password: &str) -> Result<()> {
    let response = app.client.register(name, email, password).await?;
    tracing::debug!(user_id = response.user_id, "Registered");
    println!("{}", app.locale.tr("auth.register_success"));
    Ok(())
}

pub async fn login(app: &App, email: &str, password: &str) -> Result<()> {
    let login = match app.client.login(email, password).await {
        Ok(login) => login,
        // 401 here means bad credentials, not an expired session
        Err(ApiError::AuthRequired(message)) => anyhow::bail!(message),
        Err(e) => return Err(e.into()),
    };

    session::save_token(&app.db, &login.token).await?;
    session::save_user(&app.db, &login.user).await?;
    analytics::bump_quietly(&app.db, "logins").await;

    println!("{} {}", app.locale.tr("auth.login_success"), login.user.name);
    Ok(())
}

pub async fn logout(app: &App) -> Result<()> {
    session::clear_session(&app.db).await?;
    println!("{}", app.locale.tr("auth.logout_success"));
    Ok(())
}

pub async fn whoami(app: &App) -> Result<()> {
    match session::load_user(&app.db).await? {
        Some(user) => println!("{} <{}>", user.name, user.email),
        None => println!("{}", app.locale.tr("auth.not_logged_in")),
    }
    Ok(())
}
