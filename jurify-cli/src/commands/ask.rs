//! Issue submission
//!
//! Validates the issue text, dispatches to the authenticated or free-tier
//! endpoint, renders the four result sections, persists the response for
//! later export, and bumps the local analytics counters.

use super::App;
use crate::client::ApiError;
use crate::store::{analytics, session};
use crate::voice;
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use clap::Args;
use jurify_common::api::{AdviceResponse, FreeProcessRequest, ProcessRequest};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

/// Backend rejects issues shorter than this; checked before any network call
const MIN_ISSUE_CHARS: usize = 10;

#[derive(Debug, Args)]
pub struct AskArgs {
    /// Issue text; omit to read from --file, --dictate, or piped stdin
    pub issue: Option<String>,

    /// Read the issue text from a file
    #[arg(long, conflicts_with = "issue")]
    pub file: Option<PathBuf>,

    /// Capture the issue text via the configured transcriber command
    #[arg(long, conflicts_with_all = ["issue", "file"])]
    pub dictate: bool,

    /// Ask for a condensed response
    #[arg(long)]
    pub summarize: bool,

    /// Bypass the backend response cache (authenticated only)
    #[arg(long)]
    pub fresh: bool,
}

pub async fn run(app: &App, args: &AskArgs) -> Result<()> {
    let (issue, voice_used) = resolve_issue_text(app, args).await?;

    let issue = issue.trim().to_string();
    if issue.is_empty() {
        anyhow::bail!("{}", app.locale.tr("issue.empty"));
    }
    if issue.chars().count() < MIN_ISSUE_CHARS {
        anyhow::bail!("{}", app.locale.tr("issue.too_short"));
    }

    let advice = if app.client.has_token() {
        submit_authenticated(app, &issue, args, voice_used).await?
    } else {
        match submit_free_tier(app, &issue, args).await? {
            Some(advice) => advice,
            // Quota gate refused the submission; already reported
            None => return Ok(()),
        }
    };

    app.renderer().advice(&advice).await;

    // A failed call above leaves the previously stored response untouched
    let stored = session::StoredResponse {
        issue,
        language: app.language.clone(),
        received_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        advice: advice.clone(),
    };
    session::save_last_response(&app.db, &stored).await?;

    analytics::bump_quietly(&app.db, "queries_submitted").await;
    let cache_counter = if advice.from_cache {
        "cache_hits"
    } else {
        "fresh_responses"
    };
    analytics::bump_quietly(&app.db, cache_counter).await;
    if voice_used {
        analytics::bump_quietly(&app.db, "voice_dictations").await;
    }

    Ok(())
}

async fn submit_authenticated(
    app: &App,
    issue: &str,
    args: &AskArgs,
    voice_used: bool,
) -> Result<AdviceResponse> {
    let request = ProcessRequest {
        issue: issue.to_string(),
        language: app.language.clone(),
        summarize: args.summarize,
        voice_used,
        skip_cache: args.fresh,
    };

    app.client
        .process(&request)
        .await
        .map_err(|e| app.describe_api_error(e))
}

/// Free-tier path: check the quota gate first so an exhausted client never
/// burns a request, then submit. Returns None when the gate refused.
async fn submit_free_tier(
    app: &App,
    issue: &str,
    args: &AskArgs,
) -> Result<Option<AdviceResponse>> {
    if args.fresh {
        tracing::debug!("--fresh ignored on the free tier (backend always uses its cache)");
    }

    let client_id = session::client_id(&app.db).await?;

    let status = app.client.free_status(&client_id).await?;
    if status.remaining <= 0 {
        println!(
            "{} ({}/day). {}: {:.1}",
            app.locale.tr("free.limit_reached"),
            status.daily_limit,
            app.locale.tr("free.reset_in"),
            status.reset_in_hours
        );
        return Ok(None);
    }

    let request = FreeProcessRequest {
        client_id,
        issue: issue.to_string(),
        language: app.language.clone(),
        summarize: args.summarize,
    };

    match app.client.free_process(&request).await {
        Ok(advice) => Ok(Some(advice)),
        // The server may still refuse if the quota raced out underneath us
        Err(ApiError::QuotaExceeded {
            message,
            reset_in_hours,
        }) => {
            println!("{}", message);
            println!("{}: {:.1}", app.locale.tr("free.reset_in"), reset_in_hours);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Issue text precedence: argument, file, dictation, piped stdin
async fn resolve_issue_text(app: &App, args: &AskArgs) -> Result<(String, bool)> {
    if let Some(issue) = &args.issue {
        return Ok((issue.clone(), false));
    }

    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)?;
        return Ok((text, false));
    }

    if args.dictate {
        let command = app.transcriber_command.as_deref().unwrap_or("");
        let text = voice::dictate(command).await?;
        return Ok((text, true));
    }

    if !std::io::stdin().is_terminal() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok((text, false));
    }

    anyhow::bail!("No issue text given; pass it as an argument, --file, --dictate, or pipe it in")
}
