//! TUI rendering with ratatui
//!
//! Board, palette and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{Code, Color as PegColor, Score};
use crate::engine::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
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
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the code")
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

/// Style a palette color, falling back to plain white without a swatch
fn peg_style(app: &App, color: &PegColor) -> Style {
    app.swatches
        .rgb_for(color)
        .map_or_else(Style::default, |(r, g, b)| {
            Style::default().fg(Color::Rgb(r, g, b))
        })
}

fn code_spans(app: &App, code: &Code) -> Vec<Span<'static>> {
    code.colors()
        .iter()
        .map(|c| Span::styled(" ● ", peg_style(app, c)))
        .collect()
}

fn score_spans(score: Score, slots: usize) -> Vec<Span<'static>> {
    vec![
        Span::styled("●".repeat(score.exact), Style::default().fg(Color::Green)),
        Span::styled("○".repeat(score.partial), Style::default().fg(Color::Yellow)),
        Span::styled(
            "·".repeat(score.misses(slots)),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.state;
    let active = (!state.is_finished()).then_some(state.current_turn());

    let rows: Vec<ListItem> = state
        .history()
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let mut spans = vec![Span::styled(
                format!("{:>3} ", row + 1),
                Style::default().fg(Color::DarkGray),
            )];

            if let Some(entry) = entry {
                spans.extend(code_spans(app, &entry.guess));
                spans.push(Span::raw("   "));
                spans.extend(score_spans(entry.score, state.slots()));
            } else if active == Some(row) {
                for (slot, color) in state.current_guess().slots().iter().enumerate() {
                    let (text, mut style) = match color {
                        Some(color) => (" ● ", peg_style(app, color)),
                        None => (" ○ ", Style::default().fg(Color::DarkGray)),
                    };
                    if slot == app.selected_slot {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(Span::styled(text, style));
                }
                if state.current_guess().is_complete() {
                    spans.push(Span::styled("   ◀ ready", Style::default().fg(Color::Green)));
                } else {
                    spans.push(Span::styled("   ◀", Style::default().fg(Color::Cyan)));
                }
            } else {
                spans.push(Span::styled(
                    " · ".repeat(state.slots()),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let board = List::new(rows).block(
        Block::default()
            .title(format!(" Board - {} ", app.attempt_label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.swatches.as_slice().len() as u16 + 2), // Palette
            Constraint::Length(4),                                        // Code / hint
            Constraint::Length(3),                                        // Attempts gauge
            Constraint::Length(5),                                        // Statistics
            Constraint::Min(4),                                           // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_code(f, app, chunks[1]);
    render_attempts(f, app, chunks[2]);
    render_stats(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .swatches
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, swatch)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled("●●", peg_style(app, &swatch.color)),
                Span::raw(format!(" {}", swatch.color)),
            ])
        })
        .collect();

    let palette = Paragraph::new(lines).block(
        Block::default()
            .title(" Palette ")
            .borders(Borders::ALL),
    );
    f.render_widget(palette, area);
}

fn render_code(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = if let Some(secret) = app.state.revealed_secret() {
        let headline = match app.state.outcome() {
            Outcome::Won => Span::styled("Solved!", Style::default().fg(Color::Green)),
            Outcome::Lost => Span::styled("Out of attempts", Style::default().fg(Color::Red)),
            Outcome::GivenUp | Outcome::InProgress => Span::styled("Given up", Style::default().fg(Color::Yellow)),
        };
        (
            " Secret ",
            vec![Line::from(headline), Line::from(code_spans(app, secret))],
        )
    } else if let Some(hint) = &app.hint {
        (
            " Hint ",
            vec![Line::from(vec![
                Span::raw(format!("Slot {} holds ", hint.slot + 1)),
                Span::styled("●", peg_style(app, &hint.color)),
                Span::raw(format!(" {}", hint.color)),
            ])],
        )
    } else {
        (
            " Secret ",
            vec![Line::from(Span::styled(
                " ? ".repeat(app.state.slots()),
                Style::default().fg(Color::DarkGray),
            ))],
        )
    };

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.state.attempts_used();
    let max = app.state.max_rows();
    let percent = (used * 100 / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let distribution = stats
        .attempts_distribution
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(attempts, count)| format!("{attempts}:{count}"))
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(format!(
            "Games: {} | Won: {} | Win rate: {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(format!(
            "Lost: {} | Given up: {}",
            stats.games_lost, stats.games_given_up
        )),
        Line::from(format!("Wins by attempts: {distribution}")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.state.is_finished() {
        "n: New Game | q: Quit"
    } else {
        "1-9: Color | ←/→: Slot | ⌫: Erase | Enter: Submit | h: Hint | g: Give up | n: New | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, GameConfig};
    use crate::palettes::Swatches;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_palette() {
        let app = App::new(Engine::seeded(1), GameConfig::default(), Swatches::embedded());
        let screen = draw(&app);

        assert!(screen.contains("MASTERMIND"));
        assert!(screen.contains("Attempt 1/10"));
        assert!(screen.contains("violet"));
        assert!(screen.contains("0/10 used"));
        assert!(!screen.contains("ready"));
    }

    #[test]
    fn complete_row_is_marked_ready() {
        let mut app = App::new(Engine::seeded(1), GameConfig::default(), Swatches::embedded());
        for _ in 0..3 {
            app.place_color(0);
        }
        assert!(!draw(&app).contains("ready"));

        app.place_color(1);
        assert!(draw(&app).contains("◀ ready"));
    }

    #[test]
    fn renders_secret_after_give_up() {
        let mut app = App::new(Engine::seeded(1), GameConfig::default(), Swatches::embedded());
        app.give_up();
        let screen = draw(&app);

        assert!(screen.contains("Given up"));
        assert!(screen.contains("n: New Game | q: Quit"));
    }
}
