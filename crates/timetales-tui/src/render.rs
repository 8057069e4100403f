//! Ratatui rendering for the date explorer.
//!
//! Layout, top to bottom: title header, the selected-date bar, the
//! results area (loading notice, empty notice, or event cards), and a
//! one-line key hint footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{DateExplorer, ResultsState};

/// Accent color for the title, years, and the date bar.
const ACCENT: Color = Color::Cyan;

/// Draw one full frame.
pub fn draw(frame: &mut Frame<'_>, app: &DateExplorer) {
    let [header, date_bar, results, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header);
    draw_date_bar(frame, date_bar, app);
    draw_results(frame, results, app);
    draw_footer(frame, footer);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "TimeTales",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Discover historical events on any day",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_date_bar(frame: &mut Frame<'_>, area: Rect, app: &DateExplorer) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.selection.label(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Date "));
    frame.render_widget(bar, area);
}

fn draw_results(frame: &mut Frame<'_>, area: Rect, app: &DateExplorer) {
    if app.results == ResultsState::Loading {
        let notice = Paragraph::new(Line::from(Span::styled(
            app.heading(),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(notice, area);
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            app.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for card in app.cards() {
        lines.push(Line::from(Span::styled(
            card.year,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(card.text));
        lines.push(Line::from(Span::styled(
            format!("Learn more: {}", card.link),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::default());
    }

    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(results, area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        "←/→ day  ↑/↓ month  t today  r refresh  j/k scroll  q quit",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}
