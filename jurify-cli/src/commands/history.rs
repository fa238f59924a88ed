//! History panel: list, show, delete

use super::App;
use crate::client::ApiError;
use anyhow::Result;

pub async fn list(app: &App, search: Option<&str>) -> Result<()> {
    let items = app
        .client
        .history(search)
        .await
        .map_err(|e| app.describe_api_error(e))?;

    app.renderer().history_list(&items);
    Ok(())
}

pub async fn show(app: &App, id: i64) -> Result<()> {
    match app.client.history_item(id).await {
        Ok(item) => {
            app.renderer().history_item(&item);
            Ok(())
        }
        Err(ApiError::NotFound(_)) => {
            println!("{}", app.locale.tr("history.not_found"));
            Ok(())
        }
        Err(e) => Err(app.describe_api_error(e)),
    }
}

pub async fn delete(app: &App, id: i64) -> Result<()> {
    match app.client.delete_history_item(id).await {
        Ok(_) => {
            println!("{}", app.locale.tr("history.deleted"));
            Ok(())
        }
        Err(ApiError::NotFound(_)) => {
            println!("{}", app.locale.tr("history.not_found"));
            Ok(())
        }
        Err(e) => Err(app.describe_api_error(e)),
    }
}
