use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Form box: two input rows plus borders
pub const FORM_HEIGHT: u16 = 4;

/// Calculate the top-level layout
pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(notif_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        form: chunks[1],
        main: chunks[2],
        notifications: chunks[3],
        footer: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_take_no_space_when_empty() {
        let layout = app_layout(Rect::new(0, 0, 80, 24), 0);
        assert_eq!(layout.notifications.height, 0);
        assert_eq!(layout.form.height, FORM_HEIGHT);
        assert_eq!(layout.main.height, 24 - 1 - FORM_HEIGHT - 1);
    }

    #[test]
    fn notification_area_is_capped_at_three_rows() {
        let layout = app_layout(Rect::new(0, 0, 80, 30), 7);
        assert_eq!(layout.notifications.height, 5);
    }
}
