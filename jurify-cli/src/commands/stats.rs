//! Local analytics counters

use super::App;
use crate::store::analytics;
use anyhow::Result;

pub async fn run(app: &App, reset: bool) -> Result<()> {
    if reset {
        analytics::reset(&app.db).await?;
        println!("{}", app.locale.tr("stats.reset"));
        return Ok(());
    }

    let counters = analytics::all(&app.db).await?;
    app.renderer().analytics(&counters);
    Ok(())
}
