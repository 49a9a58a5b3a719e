use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, AppState, ViewSnapshot};

use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, &snapshot, chunks[0]);
    render_main_content(frame, app, &snapshot, chunks[1]);
    render_status_bar(frame, &snapshot, chunks[2]);

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, snapshot: &ViewSnapshot, area: Rect) {
    let title = "  Hangar";
    let right = if snapshot.loading {
        "Loading..."
    } else {
        "[?] Help"
    };
    let right_style = if snapshot.loading {
        styles::loading_style()
    } else {
        styles::muted_style()
    };

    let padding = area
        .width
        .saturating_sub(title.len() as u16 + right.len() as u16 + 4) as usize;

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, right_style),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::border_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, snapshot: &ViewSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_ships(frame, app, snapshot, chunks[0]);
    render_pilots(frame, snapshot, chunks[1]);
}

fn render_ships(frame: &mut Frame, app: &App, snapshot: &ViewSnapshot, area: Rect) {
    let items: Vec<ListItem> = snapshot
        .ships
        .iter()
        .map(|ship| {
            let style = if Some(ship.name.as_str()) == snapshot.selected_ship {
                styles::highlight_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(Line::from(Span::styled(ship.name.clone(), style)))
        })
        .collect();

    let title = format!(
        " Starships - page {} ({}) ",
        snapshot.page_number,
        snapshot.ships.len()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style()),
        )
        .highlight_style(styles::selected_style());

    let mut state = ListState::default();
    if !snapshot.ships.is_empty() {
        state.select(Some(app.cursor.min(snapshot.ships.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_pilots(frame: &mut Frame, snapshot: &ViewSnapshot, area: Rect) {
    let title = match snapshot.selected_ship {
        Some(name) => format!(" Pilots - {} ", name),
        None => " Pilots ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style());

    match snapshot.selected_pilots {
        Some(pilots) => {
            let items: Vec<ListItem> = pilots
                .iter()
                .map(|pilot| {
                    ListItem::new(Line::from(Span::styled(
                        pilot.name.clone(),
                        styles::list_item_style(),
                    )))
                })
                .collect();
            frame.render_widget(List::new(items).block(block), area);
        }
        None => {
            // Placeholder, vertically and horizontally centered
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .split(inner);

            let placeholder = Paragraph::new(Line::from(Span::styled(
                "No data",
                styles::muted_style(),
            )))
            .centered();
            frame.render_widget(placeholder, rows[1]);
        }
    }
}

fn render_status_bar(frame: &mut Frame, snapshot: &ViewSnapshot, area: Rect) {
    let (left_text, left_style) = match snapshot.status {
        Some(status) => (format!(" {} ", status), styles::error_style()),
        None if snapshot.loading => (" Loading... ".to_string(), styles::loading_style()),
        None => (" Ready ".to_string(), styles::muted_style()),
    };

    // Navigation hints appear only when the API reports another page
    let mut hints: Vec<&str> = Vec::new();
    if snapshot.can_go_previous {
        hints.push("[p]revious");
    }
    if snapshot.can_go_next {
        hints.push("[n]ext");
    }
    hints.push("[enter] pilots");
    hints.push("[q]uit");
    let right_text = format!(" {} ", hints.join(" | "));

    let padding = (area.width as usize)
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());

    let status_line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, styles::muted_style()),
    ]);

    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(44, 14, frame.area());

    let bindings = [
        ("Up/k, Down/j", "Move the cursor"),
        ("Enter", "View the ship's pilots"),
        ("n / Right", "Next page"),
        ("p / Left", "Previous page"),
        ("r", "Reload the current page"),
        ("?", "Toggle this help"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in bindings {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<14}", key), styles::help_key_style()),
            Span::styled(desc, styles::help_desc_style()),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style());

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A fixed-size rect centered in `area`, clamped to fit.
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
