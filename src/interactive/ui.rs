use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::app::{AppMode, FormField, InteractiveApp};
use super::layout::app_layout;
use super::notifications;
use crate::formatting::truncate;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let layout = app_layout(frame.size(), app.visible_notifications().len());

    draw_header(frame, layout.header, app);
    draw_form(frame, layout.form, app);
    draw_user_cards(frame, layout.main, app);
    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width = area.width as usize;

    let left = vec![Span::styled(
        " Users",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    let mut right = Vec::new();
    let in_flight = app.controller().in_flight();
    if in_flight > 0 {
        right.push(Span::styled(
            format!("⟳ {} in flight  ", in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }
    right.push(Span::styled(
        truncate(&app.base_url, width / 2),
        Style::default().fg(Color::DarkGray),
    ));
    right.push(Span::raw(" "));

    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let right_len: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + right_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right);

    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let editing = app.mode == AppMode::Form;
    let border_color = if editing { Color::Green } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New User ")
        .border_style(Style::default().fg(border_color));

    let draft = app.draft();
    let max_value_width = (area.width as usize).saturating_sub(14);
    let lines = vec![
        form_line("Name", &draft.name, editing && app.field == FormField::Name, max_value_width),
        form_line("Email", &draft.email, editing && app.field == FormField::Email, max_value_width),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn form_line(label: &str, value: &str, active: bool, max_width: usize) -> Line<'static> {
    let label_style = if active {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let indicator = if active { "\u{25b6} " } else { "  " };

    let mut spans = vec![
        Span::styled(indicator, label_style),
        Span::styled(format!("{:<7}", label), label_style),
    ];

    if value.is_empty() && !active {
        spans.push(Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)));
    } else {
        // Keep the tail visible while typing
        let shown: String = if value.chars().count() > max_width {
            let skip = value.chars().count() - max_width;
            value.chars().skip(skip).collect()
        } else {
            value.to_string()
        };
        spans.push(Span::styled(shown, Style::default().fg(Color::White)));
    }

    if active {
        spans.push(Span::styled(
            " ",
            Style::default().bg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

fn draw_user_cards(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let users = app.users();
    let border_color = if app.mode == AppMode::Browse { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Users ({}) ", users.len()))
        .border_style(Style::default().fg(border_color));

    if users.is_empty() {
        let message = if app.controller().in_flight() > 0 {
            "Loading..."
        } else {
            "No users yet. Press n to create one."
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let max_width = (area.width as usize).saturating_sub(6);
    let items: Vec<ListItem> = users
        .iter()
        .map(|user| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate(&user.name, max_width),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate(&user.email, max_width),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let highlight = if app.mode == AppMode::Browse {
        Style::default().bg(Color::Rgb(40, 44, 60))
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▌ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hints = match app.mode {
        AppMode::Browse => "j/k: Move  n: New user  d: Delete  c: Clear messages  q: Quit",
        AppMode::Form => "Tab: Next field  Enter: Create  Esc: Back to list",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", hints),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, area);
}
