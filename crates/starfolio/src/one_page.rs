//! The single scrolling page: hero, about, projects, skills and contact.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use starfolio_core::{
    Language, ORBIT_SKILLS, PROJECTS, Project, SKILLS, Section, TIMELINE, theme, translate,
};
use starfolio_fonts::{banner_width, build_banner};
use tracing::debug;

use crate::contact::ContactForm;
use crate::reveal::{RevealTracker, visible_fraction};
use crate::scroll::{CONTACT_ROWS, ScrollState, section_rows};
use crate::typewriter::Typewriter;
use crate::ui::{self, contact, footer};

const NAME: &str = "EDUARDO KAMO";
const ROLE: &str = "FULL-STACK & MOBILE DEVELOPER";

/// State of the mounted single page.
#[derive(Debug)]
pub struct OnePage {
    scroll: ScrollState,
    reveal: RevealTracker,
    typewriter: Typewriter,
    form: ContactForm,
}

impl OnePage {
    pub fn new(now: Duration) -> Self {
        Self {
            scroll: ScrollState::new(),
            reveal: RevealTracker::new(),
            typewriter: Typewriter::new(ROLE, now),
            form: ContactForm::new(),
        }
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.reveal.is_revealed(section)
    }

    pub fn tick(&mut self, now: Duration) {
        self.typewriter.tick(now);
        self.form.tick(now);
    }

    /// Fit scrolling to a view of `rows` rows and reveal what is on screen.
    pub fn layout(&mut self, rows: u16) {
        self.scroll.set_view_rows(rows);
        let top = self.scroll.top_row();
        for section in Section::ALL {
            let (start, len) = section_rows(section);
            let fraction = visible_fraction(start, len, top, usize::from(rows));
            if self.reveal.observe(section, fraction) {
                debug!(section = section.id(), "section revealed");
            }
        }
    }

    /// Every row of the page, hidden sections blank.
    pub fn lines(&self, width: usize, language: Language, mobile: bool) -> Vec<Line<'static>> {
        let mut page = Vec::new();
        for section in Section::ALL {
            let (_, rows) = section_rows(section);
            let lines = if self.reveal.is_revealed(section) {
                match section {
                    Section::Home => self.hero(width, language),
                    Section::About => about(width, language),
                    Section::Projects => projects(width, language, mobile),
                    Section::Skills => skills(width, language),
                    Section::Contact => self.contact(width, language, mobile),
                }
            } else {
                Vec::new()
            };
            page.extend(ui::fit(lines, rows));
        }
        page
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, language: Language) {
        if area.is_empty() {
            return;
        }
        self.layout(area.height);
        let column = ui::content_column(area);
        let page = self.lines(
            usize::from(column.width),
            language,
            ui::is_mobile(frame.area().width),
        );
        let visible: Vec<Line> = page
            .into_iter()
            .skip(self.scroll.top_row())
            .take(usize::from(area.height))
            .collect();
        frame.render_widget(Paragraph::new(visible), column);

        if self.scroll.show_top_button() {
            let label = format!(" ↑ [t] {} ", translate(language, "ui.top"));
            let button = Line::from(label)
                .style(Style::new().fg(theme::BACKGROUND).bg(theme::PRIMARY))
                .right_aligned();
            let row = Rect::new(area.x, area.bottom() - 1, area.width.saturating_sub(1), 1);
            frame.render_widget(button, row);
        }
    }

    fn hero(&self, width: usize, language: Language) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default(); 3];
        lines.push(
            Line::from(format!("◈ {} ◈", translate(language, "contact.available")))
                .style(Style::new().fg(theme::SECONDARY))
                .centered(),
        );
        lines.push(Line::default());
        for row in banner(width) {
            lines.push(
                Line::from(row)
                    .style(Style::new().fg(theme::PRIMARY).bold())
                    .centered(),
            );
        }
        lines.push(Line::default());
        lines.push(
            Line::from(vec![
                Span::styled(self.typewriter.visible(), Style::new().fg(theme::TEXT)),
                Span::styled("▌", Style::new().fg(theme::PRIMARY)),
            ])
            .centered(),
        );
        lines.push(Line::default());
        lines.push(
            Line::from(format!(
                "{}   │   {}",
                translate(language, "home.exp"),
                translate(language, "home.projects")
            ))
            .style(Style::new().fg(theme::SILVER))
            .centered(),
        );
        lines.push(Line::default());
        lines.push(
            Line::from("↓ scroll")
                .style(Style::new().fg(theme::TEXT_DARK))
                .centered(),
        );
        lines
    }

    fn contact(&self, width: usize, language: Language, mobile: bool) -> Vec<Line<'static>> {
        let mut lines = vec![
            ui::section_heading(4, Section::Contact.label(language)),
            Line::default(),
            Line::from(translate(language, "contact.title").replace('\n', " "))
                .style(Style::new().fg(theme::TEXT).bold()),
        ];
        lines.extend(paragraph(translate(language, "contact.subtitle"), width));
        lines.push(Line::default());

        let form_width = if mobile { width } else { (width / 2).saturating_sub(2) };
        let form = contact::form_lines(&self.form, language, form_width);
        let info = contact::info_lines(language);
        if mobile {
            lines.extend(form);
            lines.push(Line::default());
            lines.extend(info);
        } else {
            lines.extend(ui::side_by_side(form, info, width / 2));
        }

        let footer = footer::footer_lines(width);
        let mut lines = ui::fit(lines, CONTACT_ROWS - footer.len());
        lines.extend(footer);
        lines
    }

    pub fn dispose(&mut self) {
        self.typewriter.dispose();
        self.form.dispose();
    }
}

/// Hero banner rows: one line when it fits, stacked names when it doesn't,
/// plain text on very narrow terminals.
fn banner(width: usize) -> Vec<String> {
    if banner_width(NAME) <= width {
        return build_banner(NAME);
    }
    let (first, last) = NAME.split_once(' ').unwrap_or((NAME, ""));
    if banner_width(first) <= width {
        let mut rows = build_banner(first);
        rows.push(String::new());
        rows.extend(build_banner(last));
        return rows;
    }
    vec![NAME.to_string()]
}

fn paragraph(text: &str, width: usize) -> Vec<Line<'static>> {
    ui::wrap(text, width)
        .into_iter()
        .map(|l| Line::from(l).style(Style::new().fg(theme::TEXT_MUTED)))
        .collect()
}

fn about(width: usize, language: Language) -> Vec<Line<'static>> {
    let mut lines = vec![
        ui::section_heading(1, Section::About.label(language)),
        Line::default(),
    ];
    for key in ["about.p1", "about.p2", "about.p3"] {
        lines.extend(paragraph(translate(language, key), width));
        lines.push(Line::default());
    }
    for entry in TIMELINE {
        lines.push(Line::from(vec![
            Span::styled(entry.year, Style::new().fg(theme::PRIMARY).bold()),
            Span::styled(" ─ ", Style::new().fg(theme::TEXT_DARK)),
            Span::styled(entry.title, Style::new().fg(theme::TEXT).bold()),
        ]));
        lines.push(
            Line::from(format!("     @ {}", entry.company)).style(Style::new().fg(theme::SECONDARY)),
        );
        for row in ui::wrap(entry.desc, width.saturating_sub(5)) {
            lines.push(Line::from(format!("     {row}")).style(Style::new().fg(theme::TEXT_MUTED)));
        }
        lines.push(Line::default());
    }
    lines
}

fn project_card(project: &Project, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", project.icon), Style::new().fg(project.color)),
        Span::styled(project.title, Style::new().fg(project.color).bold()),
    ])];
    for row in ui::wrap(project.desc, width) {
        lines.push(Line::from(row).style(Style::new().fg(theme::TEXT_MUTED)));
    }
    for row in ui::wrap(&project.tech.join(" · "), width) {
        lines.push(Line::from(row).style(Style::new().fg(theme::TEXT_DARK)));
    }
    lines.push(Line::default());
    lines
}

fn projects(width: usize, language: Language, mobile: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        ui::section_heading(2, Section::Projects.label(language)),
        Line::default(),
    ];
    if mobile {
        for project in &PROJECTS {
            lines.extend(project_card(project, width));
        }
    } else {
        let column = (width / 2).saturating_sub(2);
        for pair in PROJECTS.chunks(2) {
            let left = project_card(&pair[0], column);
            let right = pair.get(1).map(|p| project_card(p, column)).unwrap_or_default();
            lines.extend(ui::side_by_side(left, right, width / 2));
        }
    }
    lines
}

fn skill_bar(name: &str, level: u8, color: ratatui::style::Color, width: usize) -> Line<'static> {
    let bar = width.saturating_sub(30).clamp(10, 40);
    let filled = usize::from(level.min(100)) * bar / 100;
    Line::from(vec![
        Span::styled(format!("{name:<22}"), Style::new().fg(theme::TEXT)),
        Span::styled("█".repeat(filled), Style::new().fg(color)),
        Span::styled("░".repeat(bar - filled), Style::new().fg(theme::TEXT_DARK)),
        Span::styled(format!(" {level:>3}%"), Style::new().fg(theme::TEXT_MUTED)),
    ])
}

/// Skill labels placed around an ellipse, one per 45°.
pub fn orbit_lines(cols: usize, rows: usize) -> Vec<String> {
    let mut grid = vec![vec![' '; cols]; rows];
    let (cx, cy) = (cols as f32 / 2.0, rows as f32 / 2.0);
    let rx = (cx - 6.0).max(1.0);
    let ry = (cy - 1.0).max(1.0);

    let mut place = |text: &str, x: f32, y: f32| {
        let len = text.chars().count();
        let row = y.round().clamp(0.0, rows.saturating_sub(1) as f32) as usize;
        let start = (x - len as f32 / 2.0).round().clamp(0.0, cols.saturating_sub(len) as f32);
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(start as usize + i)) {
                *cell = ch;
            }
        }
    };

    place("◉ CORE", cx, cy);
    for skill in &ORBIT_SKILLS {
        let angle = skill.angle.to_radians();
        place(skill.label, cx + angle.cos() * rx, cy + angle.sin() * ry);
    }
    grid.into_iter().map(|r| r.into_iter().collect()).collect()
}

fn skills(width: usize, language: Language) -> Vec<Line<'static>> {
    let mut lines = vec![
        ui::section_heading(3, Section::Skills.label(language)),
        Line::default(),
    ];
    for skill in &SKILLS {
        lines.push(skill_bar(skill.name, skill.level, skill.color, width));
    }
    lines.push(Line::default());
    for row in orbit_lines(width.min(60), 13) {
        lines.push(
            Line::from(row)
                .style(Style::new().fg(theme::SILVER))
                .centered(),
        );
    }
    lines
}
