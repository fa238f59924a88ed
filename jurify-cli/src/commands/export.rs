//! PDF export of a processed issue
//!
//! Exports either the last successful response (default) or a specific
//! history item fetched from the server.

use super::App;
use crate::pdf::{self, NoticeDocument};
use crate::store::{analytics, session};
use anyhow::Result;
use jurify_common::locale::language_name;
use std::path::PathBuf;

pub async fn run(app: &App, id: Option<i64>, out: Option<PathBuf>) -> Result<()> {
    let notice = match id {
        Some(id) => from_history(app, id).await?,
        None => from_last_response(app).await?,
    };

    let path = out.unwrap_or_else(default_output_path);

    pdf::write_notice_pdf(&notice, &path)?;
    analytics::bump_quietly(&app.db, "pdf_exports").await;

    println!("{} {}", app.locale.tr("pdf.exported"), path.display());
    Ok(())
}

/// Default output path: `jurify-notice-<date>.pdf` in the working directory
pub fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "jurify-notice-{}.pdf",
        chrono::Local::now().format("%Y-%m-%d")
    ))
}

async fn from_history(app: &App, id: i64) -> Result<NoticeDocument> {
    let item = app
        .client
        .history_item(id)
        .await
        .map_err(|e| app.describe_api_error(e))?;

    Ok(NoticeDocument {
        title: "JuriFy Legal Notice".to_string(),
        issue: item.issue,
        language: language_name(&item.language).to_string(),
        created_at: item.created_at,
        sections: sections(
            app,
            [
                item.rights.unwrap_or_default(),
                item.steps.unwrap_or_default(),
                item.docs.unwrap_or_default(),
                item.notice.unwrap_or_default(),
            ],
        ),
    })
}

async fn from_last_response(app: &App) -> Result<NoticeDocument> {
    let stored = session::load_last_response(&app.db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("No stored response to export; run `jurify ask` first"))?;

    Ok(NoticeDocument {
        title: "JuriFy Legal Notice".to_string(),
        issue: stored.issue,
        language: language_name(&stored.language).to_string(),
        created_at: stored.received_at,
        sections: sections(
            app,
            [
                stored.advice.rights,
                stored.advice.steps,
                stored.advice.docs,
                stored.advice.notice,
            ],
        ),
    })
}

fn sections(app: &App, texts: [String; 4]) -> Vec<(String, String)> {
    let labels = [
        "section.rights",
        "section.steps",
        "section.docs",
        "section.notice",
    ];

    labels
        .into_iter()
        .zip(texts)
        .map(|(key, text)| (app.locale.tr(key).to_string(), text))
        .collect()
}
