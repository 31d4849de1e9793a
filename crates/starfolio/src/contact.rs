//! Contact form with a simulated submission.
//!
//! Nothing is sent anywhere. A submit runs `Sending` for 1.5 s, then shows
//! `Sent` with the fields cleared for 5 s, then returns to `Idle`.

use std::time::Duration;

use tracing::debug;

use crate::timer::{TimerId, Timers};

const SENDING_DELAY: Duration = Duration::from_millis(1500);
const SENT_DISPLAY: Duration = Duration::from_millis(5000);

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
    Submit,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Name, Field::Email, Field::Message, Field::Submit];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Maximum stored length in characters. The submit button holds no text.
    pub fn max_len(self) -> usize {
        match self {
            Field::Name => 100,
            Field::Email => 200,
            Field::Message => 2000,
            Field::Submit => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormEvent {
    Delivered,
    Reset,
}

fn escape(ch: char) -> Option<&'static str> {
    match ch {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\'' => Some("&#x27;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

/// Escape the characters that could form markup.
pub fn sanitize(input: &str) -> String {
    sanitize_within(input, usize::MAX)
}

/// Escape `input`, keeping at most `max` characters. An escape sequence is
/// kept whole or dropped, never cut.
fn sanitize_within(input: &str, max: usize) -> String {
    let mut out = String::with_capacity(input.len().min(max));
    let mut count = 0;
    for ch in input.chars() {
        let len = escape(ch).map_or(1, str::len);
        if count + len > max {
            break;
        }
        match escape(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
        count += len;
    }
    out
}

/// Form state owned by the contact view.
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: Option<Field>,
    status: Status,
    timers: Timers<FormEvent>,
    pending: Option<TimerId>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::Submit => "",
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The focused element, if the form has focus at all.
    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    /// True when a text field has focus and should receive typed characters.
    pub fn is_editing(&self) -> bool {
        matches!(
            self.focus,
            Some(Field::Name | Field::Email | Field::Message)
        )
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(Field::Name, Field::next));
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map_or(Field::Submit, Field::prev));
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
            Field::Submit => None,
        }
    }

    /// Replace a field's value, sanitized and cut to the field's limit.
    pub fn set_value(&mut self, field: Field, value: &str) {
        if let Some(slot) = self.field_mut(field) {
            *slot = sanitize_within(value, field.max_len());
        }
    }

    /// Type one character into the focused field.
    pub fn insert_char(&mut self, ch: char) {
        let Some(field) = self.focus else { return };
        let mut value = self.value(field).to_string();
        value.push(ch);
        self.set_value(field, &value);
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus
            && let Some(slot) = self.field_mut(field)
        {
            slot.pop();
        }
    }

    /// Start a submission. Returns false when a field is empty or a send is in flight.
    pub fn submit(&mut self, now: Duration) -> bool {
        if self.status == Status::Sending
            || self.name.is_empty()
            || self.email.is_empty()
            || self.message.is_empty()
        {
            return false;
        }
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }
        self.status = Status::Sending;
        self.pending = Some(self.timers.schedule(now, SENDING_DELAY, FormEvent::Delivered));
        debug!("contact form sending");
        true
    }

    /// Apply any transitions that are due.
    pub fn tick(&mut self, now: Duration) {
        for event in self.timers.drain_due(now) {
            match event {
                FormEvent::Delivered => {
                    self.status = Status::Sent;
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                    self.pending = Some(self.timers.schedule(now, SENT_DISPLAY, FormEvent::Reset));
                    debug!("contact form sent");
                }
                FormEvent::Reset => {
                    self.status = Status::Idle;
                    self.pending = None;
                }
            }
        }
    }

    /// Drop every pending transition.
    pub fn dispose(&mut self) {
        self.timers.cancel_all();
        self.pending = None;
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "Ana");
        form.set_value(Field::Email, "ana@example.com");
        form.set_value(Field::Message, "Olá!");
        form
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("<script>"), "&lt;script&gt;");
        assert_eq!(sanitize("it's \"ok\""), "it&#x27;s &quot;ok&quot;");
        assert_eq!(sanitize("plain"), "plain");
    }

    #[test]
    fn test_values_are_sanitized_and_limited() {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "<b>");
        assert_eq!(form.name(), "&lt;b&gt;");

        form.set_value(Field::Name, &"x".repeat(150));
        assert_eq!(form.name().chars().count(), 100);

        form.set_value(Field::Message, &"é".repeat(2500));
        assert_eq!(form.message().chars().count(), 2000);
    }

    #[test]
    fn test_escape_at_limit_is_never_cut() {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, &"x".repeat(97));
        form.focus_next();
        assert_eq!(form.focus(), Some(Field::Name));

        form.insert_char('<');
        assert_eq!(form.name().len(), 97);
        assert!(!form.name().contains('&'));

        form.set_value(Field::Name, &"x".repeat(96));
        form.insert_char('<');
        assert!(form.name().ends_with("&lt;"));
        assert_eq!(form.name().chars().count(), 100);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::new();
        form.insert_char('x');
        assert_eq!(form.name(), "");

        form.focus_next();
        form.insert_char('h');
        form.insert_char('i');
        form.focus_next();
        form.insert_char('<');
        assert_eq!(form.name(), "hi");
        assert_eq!(form.email(), "&lt;");

        form.backspace();
        assert_eq!(form.email(), "&lt");
    }

    #[test]
    fn test_focus_cycles_in_tab_order() {
        let mut form = ContactForm::new();
        assert_eq!(form.focus(), None);
        form.focus_next();
        assert_eq!(form.focus(), Some(Field::Name));
        form.focus_prev();
        assert_eq!(form.focus(), Some(Field::Submit));
        assert!(!form.is_editing());
        form.focus_next();
        assert_eq!(form.focus(), Some(Field::Name));
        assert!(form.is_editing());
    }

    #[test]
    fn test_empty_field_keeps_idle() {
        let mut form = filled();
        form.set_value(Field::Email, "");
        assert!(!form.submit(ms(0)));
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut form = filled();
        assert!(form.submit(ms(0)));
        assert_eq!(form.status(), Status::Sending);

        form.tick(ms(1499));
        assert_eq!(form.status(), Status::Sending);
        assert_eq!(form.name(), "Ana");

        form.tick(ms(1500));
        assert_eq!(form.status(), Status::Sent);
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.message(), "");

        form.tick(ms(6499));
        assert_eq!(form.status(), Status::Sent);
        form.tick(ms(6500));
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn test_submit_while_sending_is_ignored() {
        let mut form = filled();
        assert!(form.submit(ms(0)));
        assert!(!form.submit(ms(1000)));
        form.tick(ms(1500));
        assert_eq!(form.status(), Status::Sent);
    }

    #[test]
    fn test_dispose_drops_pending_transitions() {
        let mut form = filled();
        form.submit(ms(0));
        form.dispose();
        form.tick(ms(10_000));
        assert_eq!(form.status(), Status::Sending);
        assert_eq!(form.name(), "Ana");
    }
}
