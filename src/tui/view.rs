use crate::tui::state::{AppState, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    // --- Item List ---
    let rows: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| {
            let line = if item.is_editing {
                // Inline editor: show the live form fields instead of the
                // stored values. The active field follows the input buffer.
                let (name_field, qty_field) = match state.mode {
                    InputMode::EditingName => {
                        (state.input_buffer.clone(), state.original_quantity.clone())
                    }
                    InputMode::EditingQuantity => {
                        (state.pending_name.clone(), state.input_buffer.clone())
                    }
                    _ => (item.name.clone(), item.quantity.to_string()),
                };
                Line::from(Span::styled(
                    format!("[ {} ] x [ {} ]", name_field, qty_field),
                    Style::default().fg(Color::Yellow),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        item.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  x{}", item.quantity),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    let title = format!(" Shopping List ({}) ", state.items.len());
    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
    f.render_stateful_widget(list, chunks[0], &mut state.list_state);

    // --- Footer / Input ---
    let footer_area = chunks[1];
    match state.mode {
        InputMode::AddingName
        | InputMode::AddingQuantity
        | InputMode::EditingName
        | InputMode::EditingQuantity => {
            let (title, color) = match state.mode {
                InputMode::AddingName => (" New Item (name) ", Color::Yellow),
                InputMode::AddingQuantity => (" New Item (quantity) ", Color::Yellow),
                InputMode::EditingName => (" Edit Item (name) ", Color::Magenta),
                _ => (" Edit Item (quantity) ", Color::Magenta),
            };
            let prefix = "> ";
            let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer))
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(input, footer_area);
            let cursor_x =
                footer_area.x + 1 + prefix.chars().count() as u16 + state.visual_cursor();
            let cursor_y = footer_area.y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
        InputMode::Normal => {
            let f_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(footer_area);
            let status = Paragraph::new(state.message.clone())
                .style(Style::default().fg(Color::Cyan))
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                        .title(" Status "),
                );
            let help_text = "a:Add | e:Edit | d:Del | j/k:Move | q:Quit";
            let help = Paragraph::new(help_text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right)
                .block(
                    Block::default()
                        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                        .title(" Actions "),
                );
            f.render_widget(status, f_chunks[0]);
            f.render_widget(help, f_chunks[1]);
        }
    }
}
