//! Application state, frame driver and input handling.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
};
use starfolio_background::BackgroundState;
use starfolio_config::Config;
use starfolio_core::{BackgroundStyle, Language, Route, Section, Variant, nav_items, theme};
use tracing::info;

use crate::contact::{ContactForm, Field};
use crate::one_page::OnePage;
use crate::routed::Routed;
use crate::scroll::{LINE_STEP, PAGE_STEP};
use crate::ui::{self, nav::NavBar};

/// Where terminal input comes from.
pub trait EventSource {
    /// Wait up to `timeout` for an event to become readable.
    fn poll(&mut self, timeout: Duration) -> std::io::Result<bool>;

    fn read(&mut self) -> std::io::Result<Event>;
}

/// The process terminal, through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> std::io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> std::io::Result<Event> {
        event::read()
    }
}

/// The mounted presentation variant.
#[derive(Debug)]
pub enum View {
    OnePage(OnePage),
    Routed(Routed),
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    variant: Variant,
    language: Language,
    /// Configured style; `Auto` is resolved against the variant each frame.
    background_style: BackgroundStyle,
    background: BackgroundState,
    view: View,
    /// Time budget of one frame.
    frame_interval: Duration,
    started: Instant,
    /// Area of the last drawn frame, for mouse hit tests.
    area: Rect,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        let view = match config.variant {
            Variant::OnePage => View::OnePage(OnePage::new(Duration::ZERO)),
            Variant::Routed => View::Routed(Routed::default()),
        };
        Self {
            running: false,
            variant: config.variant,
            language: config.language,
            background_style: config.background,
            background: BackgroundState::new(config.animation.canvas_scale(), config.animation.seed),
            view,
            frame_interval: config.animation.frame_interval(),
            started: Instant::now(),
            area: Rect::default(),
        }
    }

    pub fn background(&self) -> &BackgroundState {
        &self.background
    }

    /// Time since startup on the frame clock.
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut events = TerminalEvents;
        while self.running {
            let deadline = Instant::now() + self.frame_interval;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events(&mut events, deadline)?;
            self.tick(self.now());
        }
        Ok(())
    }

    /// Advance every timer owned by the mounted view.
    pub fn tick(&mut self, now: Duration) {
        match &mut self.view {
            View::OnePage(page) => page.tick(now),
            View::Routed(routed) => routed.tick(now),
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.area = area;

        let style = self.background_style.resolve(self.variant);
        if style == BackgroundStyle::None {
            frame
                .buffer_mut()
                .set_style(area, Style::new().bg(theme::BACKGROUND));
        } else {
            let elapsed_ms = self.now().as_millis() as u64;
            self.background.render(frame, style, elapsed_ms);
        }

        let [nav, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let language = self.language;
        match &mut self.view {
            View::OnePage(page) => page.render(frame, body, language),
            View::Routed(routed) => routed.render(frame, body, language),
        }
        frame.render_widget(&self.nav_bar(), nav);
        frame.render_widget(ui::help_line(self.help_bindings()), help);
    }

    fn nav_bar(&self) -> NavBar<'static> {
        let compact = ui::is_mobile(self.area.width);
        match &self.view {
            View::OnePage(page) => NavBar {
                labels: nav_items(self.language).to_vec(),
                active: page.scroll().active_section().index(),
                solid: page.scroll().scrolled(),
                language: self.language,
                compact,
            },
            View::Routed(routed) => NavBar {
                labels: Route::ALL.iter().map(|r| r.label(self.language)).collect(),
                active: routed.route().index(),
                solid: true,
                language: self.language,
                compact,
            },
        }
    }

    fn help_bindings(&self) -> &'static [(&'static str, &'static str)] {
        if self.form().is_some_and(|form| form.focus().is_some()) {
            return &[("Tab", "next field"), ("Enter", "submit"), ("Esc", "leave form")];
        }
        match self.view {
            View::OnePage(_) => &[
                ("1-5", "section"),
                ("↑↓", "scroll"),
                ("Tab", "contact"),
                ("L", "language"),
                ("b", "background"),
                ("q", "quit"),
            ],
            View::Routed(_) => &[
                ("1-4", "page"),
                ("←→", "navigate"),
                ("L", "language"),
                ("b", "background"),
                ("q", "quit"),
            ],
        }
    }

    fn form(&self) -> Option<&ContactForm> {
        match &self.view {
            View::OnePage(page) => Some(page.form()),
            View::Routed(routed) => routed.form(),
        }
    }

    fn form_mut(&mut self) -> Option<&mut ContactForm> {
        match &mut self.view {
            View::OnePage(page) => Some(page.form_mut()),
            View::Routed(routed) => routed.form_mut(),
        }
    }

    /// Dispatch input until the frame deadline passes, so a burst of events
    /// never draws or steps the background more than once per frame.
    fn handle_events(
        &mut self,
        events: &mut impl EventSource,
        deadline: Instant,
    ) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !events.poll(timeout)? {
                break;
            }
            match events.read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }
        if self.on_form_key(key) {
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char('L') | KeyCode::Char('l') => self.set_language(self.language.next()),
            KeyCode::Char('p') => self.set_language(Language::Pt),
            KeyCode::Char('e') => self.set_language(Language::En),
            KeyCode::Char('s') => self.set_language(Language::Es),
            KeyCode::Char('b') => self.cycle_background(),
            KeyCode::Tab => self.enter_form(),
            _ => match &mut self.view {
                View::OnePage(page) => on_one_page_key(page, key.code),
                View::Routed(routed) => on_routed_key(routed, key.code),
            },
        }
    }

    /// Keys for a focused contact form. Returns false when the key is not the form's.
    fn on_form_key(&mut self, key: KeyEvent) -> bool {
        let now = self.now();
        let Some(form) = self.form_mut() else {
            return false;
        };
        if form.focus().is_none() {
            return false;
        }
        match key.code {
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Esc => form.blur(),
            KeyCode::Enter if form.focus() == Some(Field::Submit) => {
                form.submit(now);
            }
            KeyCode::Enter => form.focus_next(),
            KeyCode::Backspace if form.is_editing() => form.backspace(),
            KeyCode::Char(ch) if form.is_editing() => form.insert_char(ch),
            _ => return false,
        }
        true
    }

    /// Move focus into the contact form, scrolling to it on the single page.
    fn enter_form(&mut self) {
        if let View::OnePage(page) = &mut self.view {
            page.scroll_mut().jump_to(Section::Contact);
        }
        if let Some(form) = self.form_mut() {
            form.focus_next();
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.background.pointer_moved(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown => self.scroll_by(LINE_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-LINE_STEP),
            MouseEventKind::Down(MouseButton::Left) if mouse.row == self.area.y => {
                let column = mouse.column.saturating_sub(self.area.x);
                if let Some(index) = self.nav_bar().hit(column) {
                    self.select_nav(index);
                }
            }
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: f32) {
        if let View::OnePage(page) = &mut self.view {
            page.scroll_mut().scroll_by(delta);
        }
    }

    fn select_nav(&mut self, index: usize) {
        match &mut self.view {
            View::OnePage(page) => {
                if let Some(section) = Section::from_index(index) {
                    page.scroll_mut().jump_to(section);
                }
            }
            View::Routed(routed) => {
                if let Some(route) = Route::from_index(index) {
                    routed.navigate(route);
                }
            }
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            self.language = language;
            info!(%language, "language changed");
        }
    }

    /// Cycle through the concrete background styles.
    fn cycle_background(&mut self) {
        self.background_style = self.background_style.resolve(self.variant).next();
        info!(style = self.background_style.name(), "background changed");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn digit(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(ch @ '1'..='9') => Some(ch as usize - '1' as usize),
        _ => None,
    }
}

fn on_one_page_key(page: &mut OnePage, code: KeyCode) {
    if let Some(section) = digit(code).and_then(Section::from_index) {
        page.scroll_mut().jump_to(section);
        return;
    }
    let scroll = page.scroll_mut();
    match code {
        KeyCode::Down | KeyCode::Char('j') => scroll.scroll_by(LINE_STEP),
        KeyCode::Up | KeyCode::Char('k') => scroll.scroll_by(-LINE_STEP),
        KeyCode::PageDown | KeyCode::Char(' ') => scroll.scroll_by(PAGE_STEP),
        KeyCode::PageUp => scroll.scroll_by(-PAGE_STEP),
        KeyCode::Home => scroll.scroll_to_top(),
        KeyCode::Char('t') if scroll.show_top_button() => scroll.scroll_to_top(),
        KeyCode::End => scroll.jump_to(Section::Contact),
        _ => {}
    }
}

fn on_routed_key(routed: &mut Routed, code: KeyCode) {
    let target = match code {
        KeyCode::Right => Some(routed.route().next()),
        KeyCode::Left => Some(routed.route().prev()),
        other => digit(other).and_then(Route::from_index),
    };
    if let Some(route) = target {
        routed.navigate(route);
    }
}
