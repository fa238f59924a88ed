//! Terminal rendering of backend responses
//!
//! The browser client rendered into fixed DOM containers; here every panel
//! is printed to stdout. Labels go through the active locale table. Result
//! sections support a typewriter reveal, disabled when stdout is not a TTY.

use jurify_common::api::{AdviceResponse, CacheStats, FreeStatus, HistoryItem, XpSummary};
use jurify_common::Locale;
use std::io::Write;
use std::time::Duration;

/// Characters printed per typewriter tick
const TYPEWRITER_CHUNK: usize = 3;
/// Delay between typewriter ticks
const TYPEWRITER_TICK: Duration = Duration::from_millis(12);

/// Cells in the XP progress bar (level spans 100 XP)
const XP_BAR_CELLS: i64 = 20;

/// Renderer bound to one locale
pub struct Renderer<'a> {
    locale: &'a Locale,
    typewriter: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(locale: &'a Locale, typewriter: bool) -> Self {
        Self { locale, typewriter }
    }

    /// Print the four result sections plus cache/XP/quota metadata
    pub async fn advice(&self, advice: &AdviceResponse) {
        let sections = [
            ("section.rights", &advice.rights),
            ("section.steps", &advice.steps),
            ("section.docs", &advice.docs),
            ("section.notice", &advice.notice),
        ];

        for (key, text) in sections {
            println!();
            println!("━━━ {} ━━━", self.locale.tr(key));
            self.reveal(text).await;
            println!();
        }

        println!();
        if advice.from_cache {
            println!("⚡ {}", self.locale.tr("result.cache_hit"));
        } else {
            println!("✦ {}", self.locale.tr("result.fresh"));
        }

        if let Some(xp) = advice.xp_reward {
            println!("{}: +{}", self.locale.tr("result.xp_earned"), xp);
        }

        if advice.free_tier {
            if let Some(remaining) = advice.queries_remaining {
                println!(
                    "{}: {}/{}",
                    self.locale.tr("result.queries_remaining"),
                    remaining,
                    advice.daily_limit.unwrap_or(remaining)
                );
            }
        }
    }

    /// Print one history row per line: id, date, language, XP, issue excerpt
    pub fn history_list(&self, items: &[HistoryItem]) {
        if items.is_empty() {
            println!("{}", self.locale.tr("history.empty"));
            return;
        }

        for item in items {
            println!(
                "#{:<5} {}  [{}] +{:<3} {}",
                item.id,
                date_part(&item.created_at),
                item.language,
                item.xp_reward,
                truncate(&item.issue, 60)
            );
        }
    }

    /// Print a full history item with all four sections (no typewriter)
    pub fn history_item(&self, item: &HistoryItem) {
        println!("#{} — {}", item.id, item.created_at);
        println!("{}", item.issue);

        let sections = [
            ("section.rights", &item.rights),
            ("section.steps", &item.steps),
            ("section.docs", &item.docs),
            ("section.notice", &item.notice),
        ];

        for (key, text) in sections {
            println!();
            println!("━━━ {} ━━━", self.locale.tr(key));
            println!("{}", text.as_deref().unwrap_or(""));
        }
    }

    /// Print level, progress bar, totals, and the badge set
    pub fn xp(&self, summary: &XpSummary) {
        println!(
            "{} {}  [{}] {}/100",
            self.locale.tr("xp.level"),
            summary.level,
            progress_bar(summary.xp_in_level),
            summary.xp_in_level
        );
        println!("{}: {}", self.locale.tr("xp.total"), summary.total_xp);
        println!("{}: {}", self.locale.tr("xp.queries"), summary.query_count);

        let badges = [
            ("badge.bronze", summary.badges.bronze, 3),
            ("badge.silver", summary.badges.silver, 10),
            ("badge.gold", summary.badges.gold, 25),
            ("badge.diamond", summary.badges.diamond, 50),
        ];

        for (key, earned, threshold) in badges {
            let state = if earned {
                self.locale.tr("badge.earned")
            } else {
                self.locale.tr("badge.locked")
            };
            println!(
                "  {} {:<8} ({}+ {}) — {}",
                if earned { "🏅" } else { "·" },
                self.locale.tr(key),
                threshold,
                self.locale.tr("badge.threshold"),
                state
            );
        }
    }

    /// Print the free-tier quota panel
    pub fn free_status(&self, status: &FreeStatus) {
        println!(
            "{}: {}",
            self.locale.tr("free.status.limit"),
            status.daily_limit
        );
        println!("{}: {}", self.locale.tr("free.status.used"), status.used);
        println!(
            "{}: {}",
            self.locale.tr("free.status.remaining"),
            status.remaining
        );
        println!(
            "{}: {:.1}",
            self.locale.tr("free.reset_in"),
            status.reset_in_hours
        );
    }

    /// Print backend cache statistics
    pub fn cache_stats(&self, stats: &CacheStats) {
        let rows = [
            ("cache.entries", stats.total_entries),
            ("cache.hits", stats.total_hits),
            ("cache.expired", stats.expired_entries),
            ("cache.expiry_hours", stats.expiry_hours),
        ];

        for (key, value) in rows {
            println!("{:<16} {}", self.locale.tr(key), value);
        }
    }

    /// Print local analytics counters
    pub fn analytics(&self, counters: &[(&str, i64)]) {
        for (name, value) in counters {
            let key = format!("stats.{}", name);
            println!("{:<18} {}", self.locale.tr(&key), value);
        }
    }

    /// Reveal text incrementally when the typewriter is on
    async fn reveal(&self, text: &str) {
        if !self.typewriter {
            println!("{}", text);
            return;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut stdout = std::io::stdout();

        for chunk in chars.chunks(TYPEWRITER_CHUNK) {
            let piece: String = chunk.iter().collect();
            print!("{}", piece);
            let _ = stdout.flush();
            tokio::time::sleep(TYPEWRITER_TICK).await;
        }
        println!();
    }
}

/// 20-cell bar for xp_in_level out of 100
fn progress_bar(xp_in_level: i64) -> String {
    let filled = (xp_in_level.clamp(0, 100) * XP_BAR_CELLS) / 100;
    let mut bar = String::with_capacity(XP_BAR_CELLS as usize);
    for i in 0..XP_BAR_CELLS {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// Char-aware truncation with ellipsis
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", head)
}

/// Date portion of an ISO 8601 timestamp
fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
