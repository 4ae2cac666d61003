//! TUI rendering with ratatui
//!
//! A console transcript on the left, the scoreboard on the right.

use super::app::{App, ConsoleLine};
use crate::core::Outcome;
use crate::game::{MessageStyle, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<O>(f: &mut Frame, app: &App<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Console
            Constraint::Percentage(35), // Scoreboard
        ])
        .split(chunks[1]);

    render_console(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("✊ ✋ ✌  ROCK PAPER SCISSORS - Console")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn message_color(style: MessageStyle) -> Color {
    match style {
        MessageStyle::Info => Color::White,
        MessageStyle::Success => Color::Green,
        MessageStyle::Warning => Color::Yellow,
        MessageStyle::Error => Color::Red,
    }
}

fn prompt_line<'a>(prompt: &str, input: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::styled(format!("> {prompt}: "), Style::default().fg(Color::Cyan)),
        Span::styled(input, Style::default().add_modifier(Modifier::BOLD)),
    ]
}

fn render_console<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let mut lines: Vec<Line> = app
        .transcript
        .iter()
        .map(|line| match line {
            ConsoleLine::Output(message) => Line::styled(
                message.text.as_str(),
                Style::default().fg(message_color(message.style)),
            ),
            ConsoleLine::Echo { prompt, input } => {
                Line::from(prompt_line(prompt, input)).style(Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    // Active prompt with a block cursor
    if let Some(prompt) = app.session.prompt() {
        let mut spans = prompt_line(&prompt, &app.input_buffer);
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
        lines.push(Line::from(spans));
    }

    // Keep the newest rows in view, counting wrapped lines as the rows they fill
    let console = Paragraph::new(lines).wrap(Wrap { trim: false });
    let rows = console.line_count(area.width.saturating_sub(2));
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = u16::try_from(rows.saturating_sub(visible)).unwrap_or(u16::MAX);

    let console = console
        .block(
            Block::default()
                .title(" Console ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .scroll((scroll, 0));

    f.render_widget(console, area);
}

fn render_info_panel<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Score
            Constraint::Length(3), // Match progress
            Constraint::Min(4),    // Rounds
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_match_progress(f, app, chunks[1]);
    render_rounds(f, app, chunks[2]);
}

fn render_score<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let state = app.session.state();
    let stats = app.session.stats();

    let content = vec![
        Line::from(vec![
            Span::raw("You:      "),
            Span::styled(
                state.player_score().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Computer: "),
            Span::styled(
                state.computer_score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Matches:  {} (W {} / L {} / T {})",
            stats.total(),
            stats.matches_won,
            stats.matches_lost,
            stats.matches_tied
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_match_progress<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let state = app.session.state();
    let played = state.rounds_played();
    let target = state.rounds_target();
    let percent = (u64::from(played) * 100 / u64::from(target)).min(100) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("Round {played}/{target}"));

    f.render_widget(gauge, area);
}

fn render_rounds<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .rounds()
        .iter()
        .rev()
        .map(|round| {
            let color = match round.outcome {
                Outcome::Win => Color::Green,
                Outcome::Lose => Color::Yellow,
                Outcome::Tie => Color::White,
            };
            ListItem::new(format!(
                "{}: {:<8} vs {:<8} {}",
                round.round,
                round.player.name(),
                round.computer.name(),
                round.outcome.message()
            ))
            .style(Style::default().fg(color))
        })
        .collect();

    let rounds = List::new(items).block(Block::default().title(" Rounds ").borders(Borders::ALL));

    f.render_widget(rounds, area);
}

fn render_status<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let phase_text = match app.session.phase() {
        Phase::NotStarted | Phase::InProgress => "Playing",
        Phase::AwaitingReplayDecision => "Match over",
        Phase::Ended => "Finished",
    };
    let phase = Paragraph::new(format!("Status: {phase_text}"))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(phase, chunks[0]);

    let help_text = if app.session.is_over() {
        "Press any key to exit"
    } else {
        "Enter: Submit | Backspace: Edit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
