//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Mark, Position, Square, jump_list, status_line, winning_line};

use crate::app::{App, Focus};

const CELL_WIDTH: u16 = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(42)])
        .split(frame.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(4), // Status
            Constraint::Length(2), // Help
        ])
        .split(columns[0]);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, left[0]);

    draw_board(frame, left[1], app);
    draw_status(frame, left[2], app);

    let help = Paragraph::new(
        "arrows/hjkl move  enter place  tab board/history\nu back  r forward  n new game  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, left[3]);

    draw_history(frame, columns[1], app);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.game().current_snapshot();
    let board = snapshot.board();
    let side = board.size().side();
    let winning: Vec<usize> = winning_line(board).map(|(_, line)| line).unwrap_or_default();
    let show_cursor = app.focus() == Focus::Board;

    let mut lines = Vec::with_capacity(side * 2);
    for (row, squares) in board.rows().enumerate() {
        if row > 0 {
            let rule = vec!["─".repeat(CELL_WIDTH as usize); side].join("┼");
            lines.push(Line::styled(rule, Style::default().fg(Color::DarkGray)));
        }

        let mut spans = Vec::with_capacity(side * 2);
        for (col, square) in squares.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let position = Position::new(row, col);
            let index = row * side + col;
            spans.push(cell_span(
                *square,
                show_cursor && position == app.cursor(),
                winning.contains(&index),
            ));
        }
        lines.push(Line::from(spans));
    }

    // Each cell plus one separator column, and one rule line per row.
    let width = (side as u16) * (CELL_WIDTH + 1) + 1;
    let height = (side as u16) * 2 + 1;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(show_cursor));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, center_rect(area, width, height));
}

fn cell_span(square: Square, under_cursor: bool, winning: bool) -> Span<'static> {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.game().status();
    let status_style = if status.is_decided() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut lines = vec![Line::styled(status_line(&status), status_style)];
    if let Some(message) = app.message() {
        lines.push(Line::styled(message.to_string(), Style::default().fg(Color::Red)));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = jump_list(app.game())
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(entry.label, style))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("History")
                .borders(Borders::ALL)
                .border_style(focus_border(focused)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(if focused {
        app.selected()
    } else {
        app.game().current_index()
    }));
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
