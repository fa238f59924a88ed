//! Backend cache maintenance commands

use super::App;
use anyhow::Result;

pub async fn stats(app: &App) -> Result<()> {
    let stats = app.client.cache_stats().await?;
    app.renderer().cache_stats(&stats);
    Ok(())
}

pub async fn clear(app: &App, expired_only: bool) -> Result<()> {
    let cleared = app
        .client
        .clear_cache(expired_only)
        .await
        .map_err(|e| app.describe_api_error(e))?;

    println!("{}", cleared.message);
    Ok(())
}
