//! Ratatui widgets for the four screens and the modal dialog.
//!
//! Every widget can also render itself as plain text, which the headless
//! walkthrough and the tests use.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::navigation::catalog::{
    APP_NAME, COACH_INSIGHT, FEATURES, GOALS, HEALTH_CARDS, STAGES, TAGLINE, WELCOME_CARD,
};
use crate::navigation::{Dialog, GoalId, Intent, StageId};
use crate::ui::colors::{
    faded, goal_color, health_card_color, stage_color, Rgb8, GRAY, LIGHT_GRAY, PRIMARY,
    PRIMARY_LIGHT, SUCCESS, WHITE,
};

fn style(color: Rgb8, opacity: f64) -> Style {
    Style::default().fg(faded(color, opacity))
}

fn bold(color: Rgb8, opacity: f64) -> Style {
    style(color, opacity).add_modifier(Modifier::BOLD)
}

fn text(content: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(Span::styled(content.into(), style))
}

fn button(key: &str, intent: Intent, opacity: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{}] ", key), style(GRAY, opacity)),
        Span::styled(intent.label().to_string(), bold(PRIMARY_LIGHT, opacity)),
    ])
}

/// Join the text of styled lines, dropping styles.
pub fn lines_to_string(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_lines(lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

/// Selection marks shared by the stage and goal lists.
fn card_prefix(index: usize, cursor: usize, selected: bool) -> String {
    let pointer = if index == cursor { "›" } else { " " };
    let mark = if selected { "●" } else { "○" };
    format!("{} {} {}. ", pointer, mark, index + 1)
}

// ============================================================================
// Welcome
// ============================================================================

/// Logo, pitch, feature badges and the two entry buttons.
#[derive(Debug, Clone)]
pub struct WelcomeWidget {
    opacity: f64,
}

impl WelcomeWidget {
    pub fn new(opacity: f64) -> Self {
        Self { opacity }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let o = self.opacity;
        let features = FEATURES
            .iter()
            .map(|(icon, label)| format!("{} {}", icon, label))
            .collect::<Vec<_>>()
            .join("   ");

        vec![
            text(APP_NAME, bold(PRIMARY_LIGHT, o)),
            text(TAGLINE, style(LIGHT_GRAY, o)),
            Line::default(),
            text(WELCOME_CARD.0, bold(WHITE, o)),
            text(WELCOME_CARD.1, style(GRAY, o)),
            Line::default(),
            text(features, style(LIGHT_GRAY, o)),
            Line::default(),
            button("enter", Intent::Start, o),
            button("s", Intent::Skip, o),
        ]
    }

    pub fn render_string(&self) -> String {
        lines_to_string(&self.lines())
    }
}

impl Widget for WelcomeWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(self.lines(), area, buf);
    }
}

// ============================================================================
// Stage selection
// ============================================================================

/// The three stage cards.
#[derive(Debug, Clone)]
pub struct StageSelectWidget {
    selected: Option<StageId>,
    cursor: usize,
    can_continue: bool,
    opacity: f64,
}

impl StageSelectWidget {
    pub fn new(selected: Option<StageId>, cursor: usize, opacity: f64) -> Self {
        Self {
            selected,
            cursor,
            can_continue: selected.is_some(),
            opacity,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let o = self.opacity;
        let mut lines = vec![
            text("What stage are you in?", bold(WHITE, o)),
            text("This helps us personalize your experience", style(GRAY, o)),
            Line::default(),
        ];

        for (index, stage) in STAGES.iter().enumerate() {
            let selected = self.selected == Some(stage.id);
            let card = if selected {
                bold(SUCCESS, o)
            } else {
                style(stage_color(stage.id), o)
            };
            lines.push(Line::from(vec![
                Span::styled(card_prefix(index, self.cursor, selected), card),
                Span::styled(stage.title.to_string(), card),
                Span::styled(format!("  ({})", stage.age_range), style(GRAY, o)),
            ]));
            lines.push(text(format!("       {}", stage.description), style(GRAY, o)));
        }

        if self.can_continue {
            lines.push(Line::default());
            lines.push(button("enter", Intent::Continue, o));
        }
        lines
    }

    pub fn render_string(&self) -> String {
        lines_to_string(&self.lines())
    }
}

impl Widget for StageSelectWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(self.lines(), area, buf);
    }
}

// ============================================================================
// Goal selection
// ============================================================================

/// The six goal cards (multi-select).
#[derive(Debug, Clone)]
pub struct GoalSelectWidget {
    selected: Vec<GoalId>,
    cursor: usize,
    opacity: f64,
}

impl GoalSelectWidget {
    pub fn new(selected: &[GoalId], cursor: usize, opacity: f64) -> Self {
        Self {
            selected: selected.to_vec(),
            cursor,
            opacity,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let o = self.opacity;
        let mut lines = vec![
            text("What are your goals?", bold(WHITE, o)),
            text("Select all that apply", style(GRAY, o)),
            Line::default(),
        ];

        for (index, goal) in GOALS.iter().enumerate() {
            let selected = self.selected.contains(&goal.id);
            let card = if selected {
                bold(SUCCESS, o)
            } else {
                style(goal_color(goal.id), o)
            };
            lines.push(text(
                format!(
                    "{}{} {}",
                    card_prefix(index, self.cursor, selected),
                    goal.icon,
                    goal.title
                ),
                card,
            ));
        }

        if !self.selected.is_empty() {
            lines.push(Line::default());
            lines.push(button("enter", Intent::CompleteSetup, o));
        }
        lines
    }

    pub fn render_string(&self) -> String {
        lines_to_string(&self.lines())
    }
}

impl Widget for GoalSelectWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(self.lines(), area, buf);
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Static health dashboard mock.
#[derive(Debug, Clone)]
pub struct DashboardWidget {
    display_name: String,
    date: String,
    opacity: f64,
}

impl DashboardWidget {
    pub fn new(display_name: impl Into<String>, date: impl Into<String>, opacity: f64) -> Self {
        Self {
            display_name: display_name.into(),
            date: date.into(),
            opacity,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let o = self.opacity;
        let mut lines = vec![
            text(format!("Hello, {}", self.display_name), bold(WHITE, o)),
            text(self.date.clone(), style(LIGHT_GRAY, o)),
            Line::default(),
            text("Your Health Today", bold(PRIMARY_LIGHT, o)),
        ];

        for card in HEALTH_CARDS.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} {:<10} ", card.icon, card.label),
                    style(health_card_color(card.kind), o),
                ),
                Span::styled(card.value.to_string(), bold(WHITE, o)),
                Span::styled(format!("  {}", card.subtext), style(GRAY, o)),
            ]));
        }

        lines.extend([
            Line::default(),
            text("Daily Insights", bold(PRIMARY_LIGHT, o)),
            text("✨ AI Coach Says:", bold(PRIMARY, o)),
            text(COACH_INSIGHT, style(LIGHT_GRAY, o)),
            Line::default(),
            button("r", Intent::Restart, o),
            Line::from(vec![
                Span::styled("[c] ", style(GRAY, o)),
                Span::styled("🤖 AI Coach", bold(PRIMARY_LIGHT, o)),
            ]),
        ]);
        lines
    }

    pub fn render_string(&self) -> String {
        lines_to_string(&self.lines())
    }
}

impl Widget for DashboardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(self.lines(), area, buf);
    }
}

// ============================================================================
// Dialog
// ============================================================================

/// Bordered modal for a [`Dialog`].
#[derive(Debug, Clone)]
pub struct DialogWidget {
    dialog: Dialog,
}

impl DialogWidget {
    pub fn new(dialog: &Dialog) -> Self {
        Self {
            dialog: dialog.clone(),
        }
    }

    fn body(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = self
            .dialog
            .message
            .lines()
            .map(|line| text(line.to_string(), style(WHITE, 1.0)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[enter] ", style(GRAY, 1.0)),
            Span::styled(self.dialog.action.clone(), bold(PRIMARY_LIGHT, 1.0)),
            Span::styled("   [esc] close", style(GRAY, 1.0)),
        ]));
        lines
    }

    /// Rows needed to show the dialog inside its border at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2).max(1) as usize;
        let rows: usize = self
            .body()
            .iter()
            .map(|line| line.width().max(1).div_ceil(inner))
            .sum();
        rows as u16 + 2
    }

    pub fn render_string(&self) -> String {
        let mut lines = vec![text(self.dialog.title.clone(), Style::default())];
        lines.extend(self.body());
        lines_to_string(&lines)
    }
}

impl Widget for DialogWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style(PRIMARY_LIGHT, 1.0))
            .title(Span::styled(
                format!(" {} ", self.dialog.title),
                bold(WHITE, 1.0),
            ));
        Paragraph::new(self.body())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::navigation::DialogKind;

    #[test]
    fn test_welcome_lists_features_and_buttons() {
        let output = WelcomeWidget::new(1.0).render_string();
        assert!(output.starts_with("Amazora"));
        assert!(output.contains("Symptom Tracking"));
        assert!(output.contains("[enter] Start Your Journey"));
        assert!(output.contains("[s] I already have an account"));
    }

    #[test]
    fn test_stage_continue_only_with_selection() {
        let without = StageSelectWidget::new(None, 0, 1.0).render_string();
        assert!(!without.contains("Continue"));

        let with = StageSelectWidget::new(Some(StageId::Menopause), 0, 1.0).render_string();
        assert!(with.contains("[enter] Continue"));
        assert!(with.contains("● 2. Menopause"));
        assert!(with.contains("› ○ 1. Perimenopause"));
    }

    #[test]
    fn test_goal_marks_follow_selection() {
        let output =
            GoalSelectWidget::new(&[GoalId::Sleep, GoalId::Mood], 3, 1.0).render_string();
        assert!(output.contains("› ● 4. 😴 Better Sleep"));
        assert!(output.contains("● 5. 🧘 Mood Balance"));
        assert!(output.contains("  ○ 1. "));
        assert!(output.contains("Manage Symptoms"));
        assert!(output.contains("[enter] Complete Setup"));

        let empty = GoalSelectWidget::new(&[], 0, 1.0).render_string();
        assert!(!empty.contains("Complete Setup"));
    }

    #[test]
    fn test_dashboard_greets_by_name() {
        let output = DashboardWidget::new("Ana", "Monday, March 2, 2026", 1.0).render_string();
        assert!(output.starts_with("Hello, Ana\nMonday, March 2, 2026"));
        assert!(output.contains("1892 calories today"));
        assert!(output.contains("AI Coach Says:"));
        assert!(output.contains("Back to Welcome"));
    }

    #[test]
    fn test_opacity_dims_foreground() {
        let lines = WelcomeWidget::new(0.0).lines();
        let logo = &lines[0].spans[0];
        assert_eq!(logo.style.fg, Some(Color::Rgb(31, 41, 55)));
    }

    #[test]
    fn test_dialog_render_and_height() {
        let dialog = Dialog {
            kind: DialogKind::SetupComplete,
            title: "Setup Complete! 🎉".to_string(),
            message: "Stage: menopause\nGoals: 1 selected".to_string(),
            action: "Continue to Dashboard".to_string(),
        };
        let widget = DialogWidget::new(&dialog);
        let output = widget.render_string();
        assert!(output.contains("Stage: menopause"));
        assert!(output.contains("[enter] Continue to Dashboard"));
        // two message rows, a spacer and the action row, plus borders
        assert_eq!(widget.height(80), 6);
    }
}
