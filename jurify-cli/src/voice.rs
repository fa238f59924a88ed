//! Voice dictation capture
//!
//! The browser client captured speech through the Web Speech API. Here
//! capture is delegated to an external transcriber command configured as
//! `transcriber_command` in config.toml (e.g. a whisper CLI wrapper). The
//! command's stdout, trimmed, becomes the issue text.

use jurify_common::{Error, Result};
use tokio::process::Command;

/// Run the configured transcriber and return the dictated text
pub async fn dictate(command: &str) -> Result<String> {
    if command.trim().is_empty() {
        return Err(Error::Config(
            "No transcriber_command configured; set one in config.toml to use --dictate"
                .to_string(),
        ));
    }

    tracing::info!(command, "Starting voice dictation");

    let output = run_shell(command).await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Internal(format!(
            "Transcriber command failed ({}): {}",
            output.status,
            stderr.trim()
        )));
    }

    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        return Err(Error::InvalidInput(
            "Transcriber produced no text".to_string(),
        ));
    }

    tracing::debug!(chars = text.chars().count(), "Dictation captured");
    Ok(text)
}

async fn run_shell(command: &str) -> Result<std::process::Output> {
    let output = if cfg!(windows) {
        Command::new("cmd").args(["/C", command]).output().await?
    } else {
        Command::new("sh").args(["-c", command]).output().await?
    };
    Ok(output)
}
