//! Free-tier quota status

use super::App;
use crate::store::session;
use anyhow::Result;

pub async fn status(app: &App) -> Result<()> {
    let client_id = session::client_id(&app.db).await?;
    let status = app.client.free_status(&client_id).await?;
    app.renderer().free_status(&status);
    Ok(())
}
