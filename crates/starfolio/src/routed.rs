//! The routed layout: one page per route.
//!
//! Entering a route builds that page's state from scratch; leaving drops it,
//! which cancels any timers the page started.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use starfolio_core::{Language, Route, TECH_STACK, WORK_ITEMS, theme, translate};
use starfolio_fonts::build_banner;
use tracing::info;

use crate::contact::ContactForm;
use crate::ui::{self, contact};

/// State owned by the current page.
#[derive(Debug)]
pub enum Page {
    Home,
    About,
    Work,
    Contact(ContactForm),
}

impl Page {
    fn mount(route: Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Work => Page::Work,
            Route::Contact => Page::Contact(ContactForm::new()),
        }
    }
}

#[derive(Debug)]
pub struct Routed {
    route: Route,
    page: Page,
}

impl Default for Routed {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Routed {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            page: Page::mount(route),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Switch routes. Returns false if `route` is already shown.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.route {
            return false;
        }
        self.route = route;
        self.page = Page::mount(route);
        info!(path = route.path(), "route changed");
        true
    }

    pub fn form_mut(&mut self) -> Option<&mut ContactForm> {
        match &mut self.page {
            Page::Contact(form) => Some(form),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&ContactForm> {
        match &self.page {
            Page::Contact(form) => Some(form),
            _ => None,
        }
    }

    pub fn tick(&mut self, now: Duration) {
        if let Some(form) = self.form_mut() {
            form.tick(now);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, language: Language) {
        if area.is_empty() {
            return;
        }
        let column = ui::content_column(area);
        let width = usize::from(column.width);
        let mobile = ui::is_mobile(frame.area().width);
        let lines = match &self.page {
            Page::Home => return render_home(frame, area, language),
            Page::About => about_lines(width, language, mobile),
            Page::Work => work_lines(width, language),
            Page::Contact(form) => contact_lines(form, width, language, mobile),
        };

        let height = (lines.len() as u16).min(column.height);
        let [body] = Layout::vertical([Constraint::Length(height)])
            .flex(ratatui::layout::Flex::Center)
            .areas(column);
        frame.render_widget(Paragraph::new(lines), body);
    }
}

fn title_lines(key: &str, language: Language) -> Vec<Line<'static>> {
    translate(language, key)
        .lines()
        .map(|l| {
            Line::from(l.to_uppercase()).style(Style::new().fg(theme::TEXT).bold())
        })
        .collect()
}

fn muted(text: &str, width: usize) -> Vec<Line<'static>> {
    ui::wrap(text, width)
        .into_iter()
        .map(|l| Line::from(l).style(Style::new().fg(theme::TEXT_MUTED)))
        .collect()
}

fn render_home(frame: &mut Frame, area: Rect, language: Language) {
    let mut lines: Vec<Line> = Vec::new();
    for word in ["EDUARDO", "KAMO"] {
        if starfolio_fonts::banner_width(word) <= usize::from(area.width) {
            lines.extend(build_banner(word).into_iter().map(|row| {
                Line::from(row)
                    .style(Style::new().fg(theme::TEXT).bold())
                    .centered()
            }));
        } else {
            lines.push(Line::from(word).bold().centered());
        }
        lines.push(Line::default());
    }
    lines.push(
        Line::from(translate(language, "home.role").to_uppercase())
            .style(Style::new().fg(theme::TEXT_MUTED))
            .centered(),
    );

    let [_, hero, _, explore] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(lines.len() as u16),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(lines), hero);

    let hint = vec![
        Line::from(translate(language, "home.explore").to_uppercase())
            .style(Style::new().fg(theme::TEXT_DARK))
            .centered(),
        Line::from("→ [2]").style(Style::new().fg(theme::TEXT_DARK)).centered(),
    ];
    frame.render_widget(Paragraph::new(hint), explore);
}

pub fn about_lines(width: usize, language: Language, mobile: bool) -> Vec<Line<'static>> {
    let text_width = if mobile { width } else { width * 3 / 5 };
    let mut left = title_lines("about.title", language);
    left.push(Line::default());
    for key in ["about.p1", "about.p2", "about.p3"] {
        left.extend(muted(translate(language, key), text_width));
        left.push(Line::default());
    }

    let side_width = if mobile {
        width
    } else {
        width.saturating_sub(text_width + 4)
    };
    let mut right = vec![
        Line::from(translate(language, "about.focus").to_uppercase())
            .style(Style::new().fg(theme::TEXT_DARK)),
    ];
    right.extend(muted(translate(language, "about.focus.text"), side_width));
    right.push(Line::default());
    right.push(
        Line::from(translate(language, "about.tech").to_uppercase())
            .style(Style::new().fg(theme::TEXT_DARK)),
    );
    for row in ui::wrap(&TECH_STACK.join(" · "), side_width) {
        right.push(Line::from(row).style(Style::new().fg(theme::SILVER)));
    }

    if mobile {
        left.extend(right);
        left
    } else {
        ui::side_by_side(left, right, text_width + 4)
    }
}

pub fn work_lines(width: usize, language: Language) -> Vec<Line<'static>> {
    let mut lines = title_lines("work.title", language);
    lines.push(Line::default());
    for (index, item) in WORK_ITEMS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:02} ", index + 1), Style::new().fg(theme::TEXT_DARK)),
            Span::styled(item.title.to_uppercase(), Style::new().fg(theme::TEXT).bold()),
        ]));
        lines.extend(muted(translate(language, item.description_key), width));
        lines.push(Line::from(item.tech.join(" · ")).style(Style::new().fg(theme::SILVER)));
        lines.push(
            Line::from(format!("↗ {}", item.link)).style(Style::new().fg(theme::PRIMARY)),
        );
        lines.push(Line::default());
    }
    lines
}

pub fn contact_lines(
    form: &ContactForm,
    width: usize,
    language: Language,
    mobile: bool,
) -> Vec<Line<'static>> {
    let mut lines = title_lines("contact.title", language);
    lines.push(Line::default());
    lines.extend(muted(translate(language, "contact.subtitle"), width));
    lines.push(Line::default());

    let form_width = if mobile { width } else { (width / 2).saturating_sub(2) };
    let form = contact::form_lines(form, language, form_width);
    let info = contact::info_lines(language);
    if mobile {
        lines.extend(form);
        lines.push(Line::default());
        lines.extend(info);
    } else {
        lines.extend(ui::side_by_side(form, info, width / 2));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Field, Status};
    use ratatui::{Terminal, backend::TestBackend};

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_navigate_mounts_fresh_state() {
        let mut routed = Routed::default();
        assert!(routed.form().is_none());
        assert!(!routed.navigate(Route::Home));

        assert!(routed.navigate(Route::Contact));
        let form = routed.form_mut().unwrap();
        form.set_value(Field::Name, "Ana");
        form.set_value(Field::Email, "a@b.c");
        form.set_value(Field::Message, "oi");
        assert!(form.submit(Duration::ZERO));

        routed.navigate(Route::Work);
        routed.navigate(Route::Contact);
        let form = routed.form().unwrap();
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.name(), "");
    }

    #[test]
    fn test_tick_reaches_contact_form() {
        let mut routed = Routed::new(Route::Contact);
        let form = routed.form_mut().unwrap();
        form.set_value(Field::Name, "Ana");
        form.set_value(Field::Email, "a@b.c");
        form.set_value(Field::Message, "oi");
        form.submit(Duration::ZERO);
        routed.tick(Duration::from_millis(1500));
        assert_eq!(routed.form().unwrap().status(), Status::Sent);
    }

    #[test]
    fn test_pages_follow_language() {
        let about = text(&about_lines(90, Language::Es, false));
        assert!(about.contains("SOBRE"));
        assert!(about.contains("ENFOQUE ACTUAL"));
        assert!(about.contains("Zustand"));

        let work = text(&work_lines(90, Language::En));
        assert!(work.contains("ARCADERANK"));
        assert!(work.contains("DELBICOS"));
        assert!(work.contains("https://www.delbicos.com.br/"));
    }

    #[test]
    fn test_render_home() {
        let routed = Routed::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| routed.render(frame, frame.area(), Language::Pt))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("DESENVOLVEDOR DE SOFTWARE"));
        assert!(screen.contains("EXPLORAR"));
    }
}
