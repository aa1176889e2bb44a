use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::constants::{MAX_NOTIFICATIONS, NOTIFICATION_TTL_SECS};
use crate::formatting::format_user_label;
use crate::models::{User, UserId};
use crate::sync::{Completion, Draft, SyncController, SyncEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Moving between user cards
    Browse,
    /// Typing into the create form
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
}

impl FormField {
    pub fn toggle(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Name,
        }
    }
}

/// Remote work requested by a key press. The run loop hands these to the
/// controller; the app itself never performs I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Create,
    Delete(UserId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub dismissed: bool,
}

pub struct InteractiveApp {
    pub mode: AppMode,
    pub field: FormField,
    pub selected_index: usize,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
    pub base_url: String,
    controller: SyncController,
}

impl InteractiveApp {
    pub fn new(controller: SyncController, base_url: impl Into<String>) -> Self {
        Self {
            mode: AppMode::Browse,
            field: FormField::Name,
            selected_index: 0,
            notifications: Vec::new(),
            should_quit: false,
            base_url: base_url.into(),
            controller,
        }
    }

    pub fn controller(&self) -> &SyncController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SyncController {
        &mut self.controller
    }

    pub fn users(&self) -> &[User] {
        self.controller.users()
    }

    pub fn draft(&self) -> &Draft {
        self.controller.draft()
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users().get(self.selected_index)
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<Dispatch> {
        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::Form => self.handle_form_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyCode) -> Option<Dispatch> {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Char('g') | KeyCode::Home => self.selected_index = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.selected_index = self.users().len().saturating_sub(1);
            }
            KeyCode::Char('n') | KeyCode::Char('i') | KeyCode::Tab => {
                self.mode = AppMode::Form;
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                return self.selected_user().map(|user| Dispatch::Delete(user.id));
            }
            KeyCode::Char('c') => self.notifications.clear(),
            _ => {}
        }
        None
    }

    fn handle_form_key(&mut self, key: KeyCode) -> Option<Dispatch> {
        match key {
            KeyCode::Esc => self.mode = AppMode::Browse,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.field = self.field.toggle();
            }
            KeyCode::Enter => return Some(Dispatch::Create),
            KeyCode::Backspace => {
                self.focused_value().pop();
            }
            KeyCode::Char(c) => self.focused_value().push(c),
            _ => {}
        }
        None
    }

    fn focused_value(&mut self) -> &mut String {
        let field = self.field;
        let draft = self.controller.draft_mut();
        match field {
            FormField::Name => &mut draft.name,
            FormField::Email => &mut draft.email,
        }
    }

    /// Apply a finished remote call and report the outcome to the user.
    pub fn handle_completion(&mut self, completion: Completion) {
        let action = match &completion {
            Completion::Loaded(_) => "load users".to_string(),
            Completion::Created(_) => "create user".to_string(),
            Completion::Deleted { id, .. } => format!("delete user #{}", id),
        };

        match self.controller.apply(completion) {
            Ok(SyncEvent::Loaded { count }) => {
                self.notify(NotificationKind::Info, format!("Loaded {} users", count));
            }
            Ok(SyncEvent::Created(user)) => {
                self.selected_index = 0;
                self.field = FormField::Name;
                self.notify(
                    NotificationKind::Success,
                    format!("Created {}", format_user_label(&user)),
                );
            }
            Ok(SyncEvent::Deleted { id, removed: true }) => {
                self.notify(NotificationKind::Success, format!("Deleted user #{}", id));
            }
            Ok(SyncEvent::Deleted { id, removed: false }) => {
                self.notify(NotificationKind::Info, format!("User #{} was already gone", id));
            }
            Err(e) => {
                self.notify(NotificationKind::Error, format!("Could not {}: {}", action, e));
            }
        }

        self.clamp_selection();
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            dismissed: false,
        });

        // Errors never expire on their own, so keep only the newest
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }

    /// Expire success and info notifications. Errors stay until cleared.
    pub fn on_tick(&mut self) {
        let ttl = Duration::from_secs(NOTIFICATION_TTL_SECS);
        for notification in &mut self.notifications {
            let expired = notification.created_at.elapsed() >= ttl;
            if notification.kind != NotificationKind::Error && expired {
                notification.dismissed = true;
            }
        }
        self.notifications.retain(|n| !n.dismissed);
    }

    /// Newest first, at most three.
    pub fn visible_notifications(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .rev()
            .filter(|n| !n.dismissed)
            .take(3)
            .collect()
    }

    fn move_selection_down(&mut self) {
        let len = self.users().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    fn move_selection_up(&mut self) {
        let len = self.users().len();
        if len > 0 {
            if self.selected_index == 0 {
                self.selected_index = len - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.users().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}
