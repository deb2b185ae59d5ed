//! Stateless UI rendering for word scramble.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use strictly_scramble::{GameSession, SessionPhase, letter_count};

use super::app::{Alert, App};

/// Renders the whole screen.
pub fn draw<D, W>(frame: &mut Frame, app: &App<D, W>) {
    let area = frame.area();
    let session = app.session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(5),    // Words
            Constraint::Length(3), // Score + status
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_title(frame, chunks[0], session);
    draw_input(frame, chunks[1], app);

    if session.phase() == SessionPhase::GameEnded {
        draw_recap(frame, chunks[2], session);
    } else {
        draw_words(frame, chunks[2], session.history());
    }

    draw_footer(frame, chunks[3], session, app.status_message());

    let help = match session.phase() {
        SessionPhase::InRound => {
            "Enter submit · Ctrl+N new word · Ctrl+E end round · Ctrl+R restart · Esc quit"
        }
        SessionPhase::RoundEndedNeedsAdvance => "Enter next word · Ctrl+R restart · Esc quit",
        SessionPhase::GameEnded => "r play again · q quit",
    };
    frame.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[4],
    );

    if let Some(alert) = app.alert() {
        draw_alert(frame, area, alert);
    }
}

fn draw_title<D, W>(frame: &mut Frame, area: Rect, session: &GameSession<D, W>) {
    let title = format!("Round {}/{}", session.round(), session.round_limit());
    let root = Paragraph::new(session.root_word().as_str().to_uppercase())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(root, area);
}

fn draw_input<D, W>(frame: &mut Frame, area: Rect, app: &App<D, W>) {
    let editable = app.session().phase() == SessionPhase::InRound && app.alert().is_none();
    let style = if editable {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(app.input())
        .style(style)
        .block(Block::default().title("Enter your word").borders(Borders::ALL));
    frame.render_widget(input, area);

    if editable {
        frame.set_cursor_position((cursor_x(area, app.input()), area.y + 1));
    }
}

/// Column just after the typed text, kept inside the input box.
fn cursor_x(area: Rect, input: &str) -> u16 {
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2))
}

fn draw_words(frame: &mut Frame, area: Rect, words: &[String]) {
    let items: Vec<ListItem> = words
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("({:>2}) ", letter_count(word)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("Words ({})", words.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn draw_recap<D, W>(frame: &mut Frame, area: Rect, session: &GameSession<D, W>) {
    let items: Vec<ListItem> = session
        .summaries()
        .iter()
        .map(|summary| {
            ListItem::new(format!(
                "Round {:>2}  {:<12} {:>3} words  {:>4} points",
                summary.round(),
                summary.root_word().as_str(),
                summary.words().len(),
                summary.score()
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("Game over - {} points", session.game_score()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn draw_footer<D, W>(frame: &mut Frame, area: Rect, session: &GameSession<D, W>, status: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!("Score {}  ", session.score()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("Total {}  ", session.game_score()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(status.to_string(), Style::default().fg(Color::Yellow)),
    ]);
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let popup = center_rect(area, 50, 7);
    let body = Paragraph::new(vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("OK (Enter)", Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(alert.title.as_str())
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_input() {
        let area = Rect::new(0, 3, 40, 3);
        assert_eq!(cursor_x(area, ""), 1);
        assert_eq!(cursor_x(area, "silk"), 5);
    }

    #[test]
    fn test_cursor_stays_inside_box_for_long_input() {
        let area = Rect::new(2, 3, 40, 3);
        assert_eq!(cursor_x(area, &"w".repeat(100)), 40);
        assert_eq!(cursor_x(area, &"w".repeat(70_000)), 40);

        let edge = Rect::new(u16::MAX - 10, 0, 10, 3);
        assert_eq!(cursor_x(edge, &"w".repeat(70_000)), edge.right() - 2);
    }
}
