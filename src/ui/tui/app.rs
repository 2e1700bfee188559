//! TUI application state and event loop.
//!
//! The [`App`] owns the navigation controller plus the purely visual state
//! (card cursor), translates [`UiAction`]s into controller operations and
//! renders the current screen with the live fade opacity.

use std::io::{self, stdout, Stdout};
use std::time::Instant;

use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::screens::{
    lines_to_string, DashboardWidget, DialogWidget, GoalSelectWidget, StageSelectWidget,
    WelcomeWidget,
};
use crate::config::AppConfig;
use crate::navigation::{GoalId, Intent, NavigationController, Screen, StageId};
use crate::ui::colors::{faded, DARK, GRAY};
use crate::ui::keyboard::{render_hint, Direction, KeyBindings, UiAction};

/// Lifecycle of the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Handling input and drawing frames
    Running,
    /// Quit requested; the loop ends after this frame
    Exiting,
}

/// The onboarding TUI.
pub struct App {
    state: AppState,
    controller: NavigationController,
    bindings: KeyBindings,
    config: AppConfig,
    /// Card under the cursor on the stage / goal screens
    cursor: usize,
    /// Screen the cursor belongs to; a different screen resets it
    cursor_screen: Screen,
    /// Dashboard date line
    date: String,
}

impl App {
    /// Create the app; the entrance fade starts at `now`.
    pub fn new(config: AppConfig, now: Instant) -> Self {
        let controller = NavigationController::new(config.animation.timings(), now);
        Self {
            state: AppState::Running,
            controller,
            bindings: KeyBindings::default(),
            config,
            cursor: 0,
            cursor_screen: Screen::Welcome,
            date: chrono::Local::now().format("%A, %B %-d, %Y").to_string(),
        }
    }

    /// Replace the dashboard date line.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Navigation state.
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Key bindings in use.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Current card cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get current state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Check if should continue running.
    pub fn is_running(&self) -> bool {
        self.state == AppState::Running
    }

    /// Advance fades and keep the cursor attached to the visible screen.
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
        let screen = self.controller.current_screen();
        if screen != self.cursor_screen {
            self.cursor_screen = screen;
            self.cursor = 0;
        }
    }

    /// Apply a user action at `now`.
    pub fn handle_action(&mut self, action: UiAction, now: Instant) {
        if action == UiAction::Quit {
            info!("quit requested");
            self.state = AppState::Exiting;
            return;
        }

        if self.controller.dialog().is_some() {
            match action {
                UiAction::Confirm => {
                    self.controller.acknowledge_dialog(now);
                }
                UiAction::Dismiss => {
                    self.controller.dismiss_dialog();
                }
                _ => {}
            }
            return;
        }

        let screen = self.controller.current_screen();
        match (screen, action) {
            (_, UiAction::Move(direction)) => self.move_cursor(direction),
            (Screen::StageSelect, UiAction::Pick(index)) => self.pick_stage(index),
            (Screen::StageSelect, UiAction::Select) => self.pick_stage(self.cursor),
            (Screen::GoalSelect, UiAction::Pick(index)) => self.pick_goal(index),
            (Screen::GoalSelect, UiAction::Select) => self.pick_goal(self.cursor),
            (_, UiAction::Confirm) => {
                if let Some(intent) = screen.intents().first() {
                    self.dispatch(*intent, now);
                }
            }
            (Screen::Welcome, UiAction::Skip) => self.dispatch(Intent::Skip, now),
            (Screen::Dashboard, UiAction::Restart) => self.dispatch(Intent::Restart, now),
            (Screen::Dashboard, UiAction::Coach) => {
                self.controller.show_coach_message();
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, intent: Intent, now: Instant) {
        let outcome = self.controller.dispatch(intent, now);
        debug!(?intent, ?outcome, "intent dispatched");
    }

    fn item_count(&self) -> usize {
        match self.controller.current_screen() {
            Screen::StageSelect => StageId::ALL.len(),
            Screen::GoalSelect => GoalId::ALL.len(),
            Screen::Welcome | Screen::Dashboard => 0,
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.cursor = match direction {
            Direction::Up | Direction::Left => self.cursor.checked_sub(1).unwrap_or(count - 1),
            Direction::Down | Direction::Right => (self.cursor + 1) % count,
        };
    }

    fn pick_stage(&mut self, index: usize) {
        if let Some(stage) = StageId::ALL.get(index) {
            self.cursor = index;
            self.controller.select_stage(*stage);
        }
    }

    fn pick_goal(&mut self, index: usize) {
        if let Some(goal) = GoalId::ALL.get(index) {
            self.cursor = index;
            self.controller.toggle_goal(*goal);
        }
    }

    /// Footer hint for the current screen.
    pub fn hint(&self) -> String {
        if self.controller.dialog().is_some() {
            return render_hint(&self.bindings, &["[enter] ok", "[esc] close"]);
        }
        let parts: &[&str] = match self.controller.current_screen() {
            Screen::Welcome => &["[enter] start", "[s] skip"],
            Screen::StageSelect => &["[↑↓] move", "[space] select", "[enter] continue"],
            Screen::GoalSelect => &["[↑↓] move", "[space] toggle", "[enter] complete"],
            Screen::Dashboard => &["[r] restart", "[c] coach"],
        };
        render_hint(&self.bindings, parts)
    }

    fn screen_lines(&self, opacity: f64) -> Vec<ratatui::text::Line<'static>> {
        let selection = self.controller.selection();
        match self.controller.current_screen() {
            Screen::Welcome => WelcomeWidget::new(opacity).lines(),
            Screen::StageSelect => {
                StageSelectWidget::new(selection.stage(), self.cursor, opacity).lines()
            }
            Screen::GoalSelect => {
                GoalSelectWidget::new(selection.goals(), self.cursor, opacity).lines()
            }
            Screen::Dashboard => DashboardWidget::new(
                self.config.profile.display_name.clone(),
                self.date.clone(),
                opacity,
            )
            .lines(),
        }
    }

    /// Render the current view as plain text.
    pub fn render_to_string(&self, now: Instant) -> String {
        let mut output = lines_to_string(&self.screen_lines(self.controller.opacity(now)));
        if let Some(dialog) = self.controller.dialog() {
            output.push_str("\n\n");
            output.push_str(&DialogWidget::new(dialog).render_string());
        }
        output
    }

    /// Render to a ratatui frame.
    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let background = faded(DARK, 1.0);
        frame.render_widget(Block::default().style(Style::default().bg(background)), area);

        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .margin(1)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let opacity = self.controller.opacity(now);
        frame.render_widget(
            Paragraph::new(self.screen_lines(opacity))
                .wrap(ratatui::widgets::Wrap { trim: false }),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(self.hint(), Style::default().fg(faded(GRAY, 1.0)))),
            chunks[1],
        );

        if let Some(dialog) = self.controller.dialog() {
            let widget = DialogWidget::new(dialog);
            let width = 56_u16.min(area.width.saturating_sub(4));
            let height = widget.height(width).min(area.height.saturating_sub(2));
            let dialog_area = Rect {
                x: area.x + (area.width.saturating_sub(width)) / 2,
                y: area.y + (area.height.saturating_sub(height)) / 2,
                width,
                height,
            };
            frame.render_widget(Clear, dialog_area);
            frame.render_widget(widget, dialog_area);
        }
    }
}

/// Initialize terminal for TUI mode.
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal from TUI mode.
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Run the full-screen onboarding until the user quits.
pub async fn run(config: AppConfig) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, config).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: AppConfig,
) -> io::Result<()> {
    let mut frames = tokio::time::interval(config.animation.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut app = App::new(config, Instant::now());
    let mut events = EventStream::new();

    while app.is_running() {
        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                app.tick(now);
                terminal.draw(|frame| app.render(frame, now))?;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = app.bindings().action_for(key) {
                        app.handle_action(action, Instant::now());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err),
                None => break,
            }
        }
    }
    Ok(())
}
