//! Text rendering of the active view.

use std::fmt::Write;

use ecoquest_progress::application::query_handlers::{HistoryView, StatusView};
use ecoquest_progress::domain::session::{Session, View};

/// Command reference shown by `help`.
pub const HELP: &str = "\
Commands:
  1, 2, ...   pick a choice for the current story
  done        mark the active quest as completed
  history     open or close the history log
  home, back  return to the day view (also leaves history)
  reset       wipe streak and history (asks first)
  quit        exit";

/// Question asked before wiping progress.
pub const RESET_PROMPT: &str = "Reset all data (streak and history)? [y/N]";

const PROGRESS_BAR_WIDTH: u32 = 14;

fn status_header(status: &StatusView) -> String {
    format!(
        "Streak: {} day(s) 🔥   Today: {} / {} 🌱",
        status.streak, status.daily_completions, status.daily_limit
    )
}

fn reward_footer(status: &StatusView) -> String {
    let filled = status.reward_progress * PROGRESS_BAR_WIDTH / status.reward_cycle_days;
    let bar: String = (0..PROGRESS_BAR_WIDTH)
        .map(|i| if i < filled { '#' } else { '.' })
        .collect();
    format!(
        "Next reward: {} / {} days [{bar}]",
        status.reward_progress, status.reward_cycle_days
    )
}

fn home_body(out: &mut String, session: &Session, status: &StatusView) {
    if status.day_complete {
        out.push_str("✅ Today's missions are done!\n");
        out.push_str("You have already completed every quest for today.\n");
        return;
    }
    let Some(story) = session.story() else {
        return;
    };
    let _ = writeln!(
        out,
        "TODAY'S STORY  (quest {}/{})",
        status.next_quest_number, status.daily_limit
    );
    let _ = writeln!(out, "{}", story.text);
    out.push('\n');
    for (i, choice) in story.choices.iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", i + 1, choice.label);
    }
}

fn quest_body(out: &mut String, session: &Session) {
    if let Some(quest) = session.quest() {
        out.push_str("ACTIVE QUEST\n");
        let _ = writeln!(out, "{}", quest.title);
        let _ = writeln!(out, "{}", quest.description);
        out.push_str("\nType `done` when you have finished. ✨\n");
    }
}

fn day_complete_body(out: &mut String, status: &StatusView) {
    out.push_str("🌳 All of today's quests are complete!\n");
    out.push_str("You finished three eco actions today. Great job!\n\n");
    let _ = writeln!(out, "Your badge: {}", status.badge.label());
    out.push_str("\n\"A new story will be waiting for you tomorrow!\"\n");
}

fn history_body(out: &mut String, history: &HistoryView) {
    out.push_str("📅 RECENT HISTORY\n");
    if history.entries.is_empty() {
        out.push_str("No completed quests yet.\n");
        return;
    }
    for entry in &history.entries {
        let _ = writeln!(out, "  {}  {:<32} [{}]", entry.date, entry.title, entry.tag);
    }
}

/// Renders the whole screen for the current session state.
#[must_use]
pub fn render_screen(session: &Session, status: &StatusView, history: &HistoryView) -> String {
    let mut out = String::new();
    out.push_str(&status_header(status));
    out.push_str("\n\n");

    match session.view() {
        View::Home => home_body(&mut out, session, status),
        View::QuestActive => quest_body(&mut out, session),
        View::DayComplete => day_complete_body(&mut out, status),
        View::History => history_body(&mut out, history),
    }

    if session.view() != View::History {
        out.push('\n');
        out.push_str(&reward_footer(status));
        out.push('\n');
    }
    out
}
