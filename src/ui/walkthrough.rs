//! Headless walkthrough of the onboarding funnel.
//!
//! Drives the TUI [`App`] with scripted actions on a simulated clock and
//! prints every step, either as plain screens or as JSON snapshots.

use std::io::{self, Write};
use std::time::Instant;

use owo_colors::OwoColorize;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use crate::navigation::{GoalId, NavigationSnapshot, Screen, StageId};
use crate::ui::colors::Theme;
use crate::ui::keyboard::UiAction;
use crate::ui::tui::App;

/// Errors raised while printing a walkthrough.
#[derive(Debug, Error)]
pub enum WalkthroughError {
    /// Writing to the output failed.
    #[error("failed to write walkthrough output: {0}")]
    Io(#[from] io::Error),

    /// A snapshot could not be encoded.
    #[error("failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A guard kept the funnel from advancing.
    #[error("cannot leave the {screen} screen: {reason}")]
    Blocked {
        screen: Screen,
        reason: &'static str,
    },
}

/// How steps are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rendered screens
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Choices for a walkthrough run.
#[derive(Debug, Clone)]
pub struct WalkthroughOptions {
    /// Stage picked on the stage screen
    pub stage: StageId,
    /// Goals toggled, in order; repeating a goal deselects it
    pub goals: Vec<GoalId>,
    pub format: OutputFormat,
    /// Colour step banners (text format only)
    pub color: bool,
    /// Dashboard date line
    pub date: String,
}

impl Default for WalkthroughOptions {
    fn default() -> Self {
        Self {
            stage: StageId::Menopause,
            goals: vec![GoalId::Mood],
            format: OutputFormat::Text,
            color: false,
            date: chrono::Local::now().format("%A, %B %-d, %Y").to_string(),
        }
    }
}

#[derive(Serialize)]
struct StepRecord<'a> {
    step: usize,
    action: &'a str,
    #[serde(flatten)]
    snapshot: NavigationSnapshot,
}

struct Walkthrough<'w, W: Write> {
    app: App,
    now: Instant,
    step: usize,
    options: &'w WalkthroughOptions,
    theme: Theme,
    out: &'w mut W,
}

impl<W: Write> Walkthrough<'_, W> {
    fn act(&mut self, action: UiAction) {
        self.app.handle_action(action, self.now);
        self.settle();
    }

    /// Jump the simulated clock to the end of any running fade.
    fn settle(&mut self) {
        if let Some(done) = self.app.controller().idle_at() {
            self.now = self.now.max(done);
        }
        self.app.tick(self.now);
    }

    fn expect_screen(&self, screen: Screen, reason: &'static str) -> Result<(), WalkthroughError> {
        let current = self.app.controller().current_screen();
        if current == screen {
            Ok(())
        } else {
            Err(WalkthroughError::Blocked {
                screen: current,
                reason,
            })
        }
    }

    fn emit(&mut self, action: &str) -> Result<(), WalkthroughError> {
        self.step += 1;
        let snapshot = self.app.controller().snapshot(self.now);
        info!(step = self.step, action, screen = %snapshot.screen, "walkthrough step");

        match self.options.format {
            OutputFormat::Json => {
                let record = StepRecord {
                    step: self.step,
                    action,
                    snapshot,
                };
                serde_json::to_writer(&mut *self.out, &record)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => {
                let banner = format!("== Step {}: {} ({}) ==", self.step, action, snapshot.screen);
                let hint = self.app.hint();
                if self.options.color {
                    let color = if snapshot.screen == Screen::Dashboard {
                        self.theme.success
                    } else {
                        self.theme.brand
                    };
                    writeln!(self.out, "{}", banner.color(color).bold())?;
                    writeln!(self.out, "{}", self.app.render_to_string(self.now))?;
                    writeln!(self.out, "{}", hint.color(self.theme.muted))?;
                } else {
                    writeln!(self.out, "{}", banner)?;
                    writeln!(self.out, "{}", self.app.render_to_string(self.now))?;
                    writeln!(self.out, "{}", hint)?;
                }
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

/// Walk Welcome -> Stage -> Goals -> Dashboard, writing each step to `out`.
pub fn run_walkthrough<W: Write>(
    config: &AppConfig,
    options: &WalkthroughOptions,
    out: &mut W,
) -> Result<(), WalkthroughError> {
    let now = Instant::now();
    let app = App::new(config.clone(), now).with_date(options.date.clone());
    let mut walk = Walkthrough {
        app,
        now,
        step: 0,
        options,
        theme: Theme::default(),
        out,
    };

    walk.settle();
    walk.emit("launch")?;

    walk.act(UiAction::Confirm);
    walk.expect_screen(Screen::StageSelect, "start was not accepted")?;
    walk.emit("start")?;

    walk.act(UiAction::Pick(options.stage.index()));
    walk.emit(&format!("select {}", options.stage))?;

    walk.act(UiAction::Confirm);
    walk.expect_screen(Screen::GoalSelect, "no stage selected")?;
    walk.emit("continue")?;

    for goal in &options.goals {
        walk.act(UiAction::Pick(goal.index()));
    }
    walk.emit("toggle goals")?;

    walk.act(UiAction::Confirm);
    if walk.app.controller().dialog().is_none() {
        return Err(WalkthroughError::Blocked {
            screen: Screen::GoalSelect,
            reason: "no goals selected",
        });
    }
    walk.emit("complete setup")?;

    walk.act(UiAction::Confirm);
    walk.expect_screen(Screen::Dashboard, "confirmation was not accepted")?;
    walk.emit("continue to dashboard")?;

    Ok(())
}
