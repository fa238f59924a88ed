//! XP/Badges panel

use super::App;
use anyhow::Result;

pub async fn run(app: &App) -> Result<()> {
    let summary = app
        .client
        .xp()
        .await
        .map_err(|e| app.describe_api_error(e))?;

    app.renderer().xp(&summary);
    Ok(())
}
