use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::constants::GENERIC_ERROR_FALLBACK;
use crate::core::message::{Message, Role};
use crate::core::session::{SessionStore, Status};
use crate::ui::composer::Composer;
use crate::ui::wrap::wrap_text;

const CLEAR_HINT: &str = "Ctrl+L clear";
const COMPOSER_HINT: &str = "Enter to send, Alt+Enter for a new line, Esc to quit";
const USER_LABEL: &str = "You";
const AGENT_LABEL: &str = "Agent";
/// Columns kept free on the opposite side of each bubble.
const BUBBLE_MARGIN: u16 = 4;

#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}

pub fn ui(
    f: &mut Frame,
    header: &Header<'_>,
    store: &SessionStore,
    composer: &Composer,
    since_start: Duration,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(composer.height() + 2), // +2 for borders
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], header);
    render_transcript(f, chunks[1], store, since_start);
    f.render_widget(composer.widget(), chunks[2]);
    f.render_widget(
        Paragraph::new(COMPOSER_HINT).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn render_header(f: &mut Frame, area: Rect, header: &Header<'_>) {
    let width = usize::from(area.width);
    let title_width = UnicodeWidthStr::width(header.title);
    let hint_width = UnicodeWidthStr::width(CLEAR_HINT);
    let padding = width.saturating_sub(title_width + hint_width);

    let title_line = Line::from(vec![
        Span::styled(
            header.title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(CLEAR_HINT, Style::default().fg(Color::DarkGray)),
    ]);
    let subtitle_line = Line::from(Span::styled(
        header.subtitle.to_string(),
        Style::default().fg(Color::Gray),
    ));

    let paragraph = Paragraph::new(vec![title_line, subtitle_line])
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

fn render_transcript(f: &mut Frame, area: Rect, store: &SessionStore, since_start: Duration) {
    let lines = build_transcript_lines(store, area.width, since_start);
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    // The newest content stays in view.
    let scroll = total.saturating_sub(area.height);
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

/// Pre-wrapped transcript rows: every message, then the pending indicator or
/// the error panel depending on the session status.
pub fn build_transcript_lines(
    store: &SessionStore,
    width: u16,
    since_start: Duration,
) -> Vec<Line<'static>> {
    let bubble_width = usize::from(width.saturating_sub(BUBBLE_MARGIN).max(1));
    let mut lines = Vec::new();

    for message in store.messages() {
        push_message_lines(&mut lines, message, bubble_width);
        lines.push(Line::from(""));
    }

    match store.status() {
        Status::AwaitingReply => lines.push(thinking_line(since_start)),
        Status::Errored => {
            let detail = store.error().unwrap_or(GENERIC_ERROR_FALLBACK);
            let style = Style::default().fg(Color::Red);
            for row in wrap_text(&format!("⚠ {detail}"), usize::from(width.max(1))) {
                lines.push(Line::from(Span::styled(row, style)));
            }
        }
        Status::Idle => {}
    }

    lines
}

fn push_message_lines(lines: &mut Vec<Line<'static>>, message: &Message, width: usize) {
    let (label, label_style, text_style, alignment) = match message.role() {
        Role::User => (
            USER_LABEL,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Cyan),
            Alignment::Right,
        ),
        Role::Agent => (
            AGENT_LABEL,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Style::default(),
            Alignment::Left,
        ),
    };

    lines.push(Line::from(Span::styled(label, label_style)).alignment(alignment));
    for row in wrap_text(message.content(), width) {
        lines.push(Line::from(Span::styled(row, text_style)).alignment(alignment));
    }
}

fn thinking_line(since_start: Duration) -> Line<'static> {
    let dots = (since_start.as_millis() / 400 % 4) as usize;
    Line::from(Span::styled(
        format!("Thinking{}", ".".repeat(dots)),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
}
