//! Application state: the chat session plus view-only state.

use crate::config::TuiConfig;
use crate::events::RequestKind;
use crate::keys::InputMode;
use crate::nav::Panel;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::FreshTheme;
use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;
use fitcoach_core::wire::{ChatRequest, ChatResponse};
use fitcoach_core::{ChatSession, Workout, WORKOUT_CATEGORIES};
use ratatui::widgets::{Block, Borders};
use std::collections::VecDeque;
use tui_textarea::TextArea;

const SCROLL_STEP: u16 = 5;
/// Older notifications are dropped once this many are queued.
pub const MAX_NOTIFICATIONS: usize = 16;

pub struct App {
    pub config: TuiConfig,
    pub theme: FreshTheme,
    pub session: ChatSession,
    pub input: TextArea<'static>,
    pub focus: Panel,
    /// Lines scrolled away from the default position, per panel.
    pub scroll: [u16; 5],
    pub workout_picker: Option<WorkoutPicker>,
    pub notifications: VecDeque<Notification>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            config,
            theme: FreshTheme::fresh(),
            session: ChatSession::new(),
            input: new_input(),
            focus: Panel::Chat,
            scroll: [0; 5],
            workout_picker: None,
            notifications: VecDeque::with_capacity(MAX_NOTIFICATIONS),
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.workout_picker.is_some() {
            InputMode::WorkoutPicker
        } else {
            InputMode::Chat
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        if self.notifications.len() == MAX_NOTIFICATIONS {
            self.notifications.pop_front();
        }
        self.notifications.push_back(Notification::new(level, message));
    }

    /// Most recent notification younger than a few seconds.
    pub fn current_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notifications
            .back()
            .filter(|note| note.is_fresh(now, chrono::Duration::seconds(6)))
    }

    pub fn edit_input(&mut self, key: KeyEvent) {
        self.input.input(key);
    }

    /// Submit whatever is in the input box.
    ///
    /// While a reply is pending the input is kept and nothing is sent.
    /// Whitespace-only input is ignored; anything else is sent as typed.
    pub fn submit_input(&mut self) -> Option<ChatRequest> {
        if self.session.is_loading() {
            self.notify(NotificationLevel::Warning, "Still waiting for the coach to reply");
            return None;
        }
        let text = self.input.lines().join("\n");
        if text.trim().is_empty() {
            return None;
        }
        self.input = new_input();
        self.submit(text)
    }

    /// Optimistically append a user message and produce the request to send.
    pub fn submit(&mut self, text: impl Into<String>) -> Option<ChatRequest> {
        let request = self.session.begin_submit(text);
        self.scroll[Panel::Chat.index()] = 0;
        tracing::info!(
            conversation_id = %request.conversation_id,
            chars = request.message.len(),
            "User message submitted"
        );
        Some(request)
    }

    pub fn apply_reply(&mut self, kind: RequestKind, response: Option<ChatResponse>) {
        let outcome = match kind {
            RequestKind::Boot => self.session.apply_boot(response),
            RequestKind::Submit => self.session.apply_reply(response),
        };
        match outcome {
            Some(outcome) => {
                tracing::info!(
                    ?kind,
                    messages = outcome.messages_added,
                    events = outcome.events_added,
                    "Chat response merged"
                );
                self.scroll[Panel::Chat.index()] = 0;
                self.scroll[Panel::Events.index()] = 0;
                if outcome.workout_selector_requested {
                    self.open_workout_picker();
                }
            }
            None => {
                tracing::error!(?kind, "No data returned from chat API");
                self.notify(NotificationLevel::Error, "No reply from the chat backend");
            }
        }
    }

    pub fn next_panel(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_panel(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn scroll_up(&mut self) {
        let slot = &mut self.scroll[self.focus.index()];
        *slot = slot.saturating_add(SCROLL_STEP);
    }

    pub fn scroll_down(&mut self) {
        let slot = &mut self.scroll[self.focus.index()];
        *slot = slot.saturating_sub(SCROLL_STEP);
    }

    pub fn scroll_of(&self, panel: Panel) -> u16 {
        self.scroll[panel.index()]
    }

    pub fn open_workout_picker(&mut self) {
        if self.workout_picker.is_none() {
            self.workout_picker = Some(WorkoutPicker::new());
        }
    }

    pub fn close_workout_picker(&mut self) {
        self.workout_picker = None;
    }

    /// Choose the workout under the cursor and send it as a user message.
    ///
    /// While a reply is pending the picker stays open so the choice can be
    /// made again once the coach has answered.
    pub fn choose_workout(&mut self) -> Option<ChatRequest> {
        self.workout_picker.as_ref()?;
        if self.session.is_loading() {
            self.notify(NotificationLevel::Warning, "Still waiting for the coach to reply");
            return None;
        }
        let workout = self.workout_picker.as_mut()?.select();
        self.close_workout_picker();
        self.notify(
            NotificationLevel::Info,
            format!("Selected: {}", fitcoach_core::selection_label(workout.id)),
        );
        self.submit(workout.name)
    }
}

fn new_input() -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_block(Block::default().borders(Borders::ALL).title("Message"));
    input.set_placeholder_text("Ask your coach anything... (Enter to send)");
    input
}

/// Cursor and highlight over the static workout catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutPicker {
    pub category: usize,
    pub index: usize,
    /// Id of the last chosen workout, highlighted until the picker closes.
    pub selected: Option<&'static str>,
}

impl WorkoutPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static Workout {
        &WORKOUT_CATEGORIES[self.category].workouts[self.index]
    }

    pub fn move_left(&mut self) {
        let len = WORKOUT_CATEGORIES[self.category].workouts.len();
        self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
    }

    pub fn move_right(&mut self) {
        let len = WORKOUT_CATEGORIES[self.category].workouts.len();
        self.index = (self.index + 1) % len;
    }

    pub fn move_up(&mut self) {
        let len = WORKOUT_CATEGORIES.len();
        self.category = if self.category == 0 { len - 1 } else { self.category - 1 };
        self.clamp_index();
    }

    pub fn move_down(&mut self) {
        self.category = (self.category + 1) % WORKOUT_CATEGORIES.len();
        self.clamp_index();
    }

    pub fn select(&mut self) -> &'static Workout {
        let workout = self.current();
        self.selected = Some(workout.id);
        workout
    }

    pub fn is_selected(&self, workout: &Workout) -> bool {
        self.selected == Some(workout.id)
    }

    fn clamp_index(&mut self) {
        let len = WORKOUT_CATEGORIES[self.category].workouts.len();
        self.index = self.index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcoach_core::{Role, WORKOUT_SELECTOR_SENTINEL};
    use serde_json::json;

    fn app() -> App {
        App::new(TuiConfig::default())
    }

    fn response(value: serde_json::Value) -> Option<ChatResponse> {
        Some(serde_json::from_value(value).unwrap())
    }

    fn type_text(app: &mut App, text: &str) {
        app.input.insert_str(text);
    }

    #[test]
    fn submit_input_clears_box_and_appends_message() {
        let mut app = app();
        type_text(&mut app, "  plan my week  ");
        let request = app.submit_input().unwrap();

        assert_eq!(request.message, "  plan my week  ");
        assert_eq!(app.input.lines().join(""), "");
        assert_eq!(app.session.messages().len(), 1);
        assert_eq!(app.session.messages()[0].role, Role::User);
        assert!(app.session.is_loading());
    }

    #[test]
    fn blank_input_is_not_sent() {
        let mut app = app();
        type_text(&mut app, "   ");
        assert!(app.submit_input().is_none());
        assert!(app.session.messages().is_empty());
    }

    #[test]
    fn pending_reply_blocks_second_submit_but_keeps_text() {
        let mut app = app();
        type_text(&mut app, "first");
        app.submit_input().unwrap();
        type_text(&mut app, "second");

        assert!(app.submit_input().is_none());
        assert_eq!(app.input.lines().join(""), "second");
        assert_eq!(app.session.messages().len(), 1);
    }

    #[test]
    fn failed_reply_notifies_and_clears_loading() {
        let mut app = app();
        app.submit("hello").unwrap();
        app.apply_reply(RequestKind::Submit, None);

        assert!(!app.session.is_loading());
        assert_eq!(app.session.messages().len(), 1);
        let note = app.notifications.back().unwrap();
        assert_eq!(note.level, NotificationLevel::Error);
    }

    #[test]
    fn failed_boot_keeps_session_unbooted() {
        let mut app = app();
        app.apply_reply(RequestKind::Boot, None);
        assert!(!app.session.is_booted());
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn sentinel_reply_opens_picker() {
        let mut app = app();
        app.submit("what should I train").unwrap();
        app.apply_reply(
            RequestKind::Submit,
            response(json!({"messages": [{"content": WORKOUT_SELECTOR_SENTINEL}]})),
        );
        assert_eq!(app.input_mode(), InputMode::WorkoutPicker);
    }

    #[test]
    fn choosing_workout_submits_its_name() {
        let mut app = app();
        app.open_workout_picker();
        let picker = app.workout_picker.as_mut().unwrap();
        picker.move_down();
        let request = app.choose_workout().unwrap();

        assert_eq!(request.message, "Upper Body");
        assert!(app.workout_picker.is_none());
        assert_eq!(app.session.messages().last().unwrap().content, "Upper Body");
        assert_eq!(
            app.notifications.back().unwrap().message,
            "Selected: UPPER BODY"
        );
    }

    #[test]
    fn choosing_workout_while_waiting_keeps_picker_open() {
        let mut app = app();
        app.submit("pick one for me").unwrap();
        app.open_workout_picker();

        assert!(app.choose_workout().is_none());
        let picker = app.workout_picker.as_ref().unwrap();
        assert_eq!(picker.selected, None);
        assert_eq!(app.session.messages().len(), 1);

        app.apply_reply(RequestKind::Submit, response(json!({})));
        let request = app.choose_workout().unwrap();
        assert_eq!(request.message, "Running");
        assert!(app.workout_picker.is_none());
    }

    #[test]
    fn multiline_input_is_sent_as_typed() {
        let mut app = app();
        type_text(&mut app, "legs today");
        app.input.insert_newline();
        type_text(&mut app, "  and core");
        let request = app.submit_input().unwrap();
        assert_eq!(request.message, "legs today\n  and core");
    }

    #[test]
    fn notification_queue_is_bounded() {
        let mut app = app();
        for i in 0..(MAX_NOTIFICATIONS + 5) {
            app.notify(NotificationLevel::Info, format!("note {}", i));
        }
        assert_eq!(app.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(app.notifications.front().unwrap().message, "note 5");
        assert_eq!(
            app.current_notification(Utc::now()).unwrap().message,
            format!("note {}", MAX_NOTIFICATIONS + 4)
        );
    }

    #[test]
    fn picker_wraps_within_category() {
        let mut picker = WorkoutPicker::new();
        picker.move_left();
        assert_eq!(picker.current().id, "hiit");
        picker.move_right();
        assert_eq!(picker.current().id, "running");
        picker.move_up();
        assert_eq!(picker.current().id, "yoga");
    }

    #[test]
    fn picker_marks_selection() {
        let mut picker = WorkoutPicker::new();
        let chosen = picker.select();
        assert!(picker.is_selected(chosen));
        picker.move_right();
        assert!(!picker.is_selected(picker.current()));
    }

    #[test]
    fn scrolling_is_per_panel() {
        let mut app = app();
        app.scroll_up();
        app.next_panel();
        app.scroll_up();
        app.scroll_up();
        app.scroll_down();
        assert_eq!(app.scroll_of(Panel::Chat), SCROLL_STEP);
        assert_eq!(app.scroll_of(Panel::Agents), SCROLL_STEP);
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.scroll_of(Panel::Agents), 0);
    }
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
