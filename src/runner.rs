//! Terminal host for the conversation store.
//!
//! Plays the part of both collaborators at the store boundary: captures key
//! events and maps them through [`crate::input`], renders the transcript and
//! composer through [`crate::render`], and drains the scroll request only
//! after the redraw has happened.

use std::io::{stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use tracing::info;

use crate::config::Profile;
use crate::input::{self, ComposerAction};
use crate::render;
use crate::seed;
use crate::state::{ConversationStore, StagedFile};

/// Host options assembled from the CLI.
pub struct HostConfig {
    pub profile: Profile,
    /// Files to pre-stage before the loop starts.
    pub attach: Vec<PathBuf>,
}

/// Build a staged-file handle from a path on disk. The handle carries
/// metadata only; the bytes are never read.
fn stage_from_path(path: &Path) -> Result<StagedFile> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("cannot stat attachment {}", path.display()))?;
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());
    Ok(StagedFile::new(name, meta.len()))
}

/// Run the interactive composer until Esc or Ctrl+C.
pub fn run(config: HostConfig) -> Result<()> {
    let mut store =
        ConversationStore::with_messages(config.profile.author(), seed::conversation());

    let staged: Vec<StagedFile> = config
        .attach
        .iter()
        .map(|p| stage_from_path(p))
        .collect::<Result<_>>()?;
    if !staged.is_empty() {
        store.stage_files(staged);
    }

    let local_name = config.profile.name.clone();
    let mut draft = String::new();

    terminal::enable_raw_mode().context("cannot enter raw mode")?;
    let result = event_loop(&mut store, &mut draft, &local_name);
    terminal::disable_raw_mode().ok();
    result
}

fn event_loop(store: &mut ConversationStore, draft: &mut String, local_name: &str) -> Result<()> {
    redraw(store, draft, local_name)?;

    loop {
        let Event::Key(key) = event::read().context("cannot read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if !handle_key(store, draft, &key) {
            info!("composer exited");
            return Ok(());
        }
        redraw(store, draft, local_name)?;
        if store.take_scroll_request() {
            // Best effort only: a terminal that rejects the cursor move is
            // not a reason to drop the message that was already sent.
            let _ = scroll_to_latest();
        }
    }
}

/// Apply one key press. Returns `false` when the host should exit.
fn handle_key(store: &mut ConversationStore, draft: &mut String, key: &KeyEvent) -> bool {
    if let Some(action) = input::composer_action(key) {
        match action {
            ComposerAction::Submit => {
                if store.compose(draft).is_some() {
                    draft.clear();
                }
            }
            ComposerAction::InsertNewline => draft.push('\n'),
        }
        return true;
    }

    if let Some(cmd) = input::format_command(key) {
        // Plain-text stand-in for the rich-text surface: insert the marker.
        draft.push_str(cmd.marker());
        return true;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return false;
        }
        // Toggle reply-selection on the newest message.
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => {
            if let Some(last) = store.messages().last().map(|m| m.id) {
                store.select_for_reply(last);
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => store.clear_selection(),
        // Unstage the most recently staged file; no-op when nothing is staged.
        (KeyModifiers::CONTROL, KeyCode::Char('x')) => {
            store.unstage_file(store.staged_files().len().wrapping_sub(1));
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            draft.pop();
        }
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            draft.push(c);
        }
        _ => {}
    }
    true
}

fn redraw(store: &ConversationStore, draft: &str, local_name: &str) -> Result<()> {
    let mut out = stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let body = format!(
        "{}\n{}",
        render::transcript(store, local_name),
        render::composer(store, draft)
    );
    // Raw mode needs explicit carriage returns.
    write!(out, "{}", body.replace('\n', "\r\n"))?;
    out.flush()?;
    Ok(())
}

fn scroll_to_latest() -> std::io::Result<()> {
    execute!(stdout(), cursor::MoveToColumn(0))
}
