//! Contact form and social links, drawn as lines.

use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};
use starfolio_core::{Language, SOCIALS, theme, translate};

use crate::contact::{ContactForm, Field, Status};

pub const LOCATION: &str = "Votorantim, SP - Brasil";

/// Show only the tail of `value` that fits in `width` columns.
fn tail(value: &str, width: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(width)).collect()
}

fn input_line(form: &ContactForm, field: Field, placeholder: &str, width: usize) -> Line<'static> {
    let focused = form.focus() == Some(field);
    let value = form.value(field);
    let inner = width.saturating_sub(4).max(1);

    let available = inner - usize::from(focused);

    let border = if focused { theme::PRIMARY } else { theme::TEXT_DARK };
    let text = if value.is_empty() {
        Span::styled(tail(placeholder, available), Style::new().fg(theme::TEXT_DARK))
    } else {
        Span::styled(tail(value, available), Style::new().fg(theme::TEXT))
    };
    let used = text.width();
    let mut spans = vec![Span::styled("[ ", Style::new().fg(border)), text];
    if focused {
        spans.push(Span::styled("▌", Style::new().fg(theme::PRIMARY)));
    }
    spans.push(Span::raw(" ".repeat(available.saturating_sub(used))));
    spans.push(Span::styled(" ]", Style::new().fg(border)));
    Line::from(spans)
}

/// The form, or the success card while the form shows `Sent`.
pub fn form_lines(form: &ContactForm, language: Language, width: usize) -> Vec<Line<'static>> {
    if form.status() == Status::Sent {
        return vec![
            Line::default(),
            Line::from("✦").style(Style::new().fg(theme::PRIMARY)),
            Line::from(translate(language, "contact.sent"))
                .style(Style::new().fg(theme::SUCCESS).bold()),
            Line::from(translate(language, "contact.sent.text"))
                .style(Style::new().fg(theme::TEXT_MUTED)),
            Line::default(),
        ];
    }

    let mut lines = vec![
        input_line(form, Field::Name, translate(language, "contact.name"), width),
        Line::default(),
        input_line(form, Field::Email, translate(language, "contact.email"), width),
        Line::default(),
        input_line(
            form,
            Field::Message,
            translate(language, "contact.message"),
            width,
        ),
        Line::default(),
    ];

    let (label, color) = match form.status() {
        Status::Sending => (translate(language, "contact.sending"), theme::PRIMARY),
        _ => (translate(language, "contact.send"), theme::TEXT),
    };
    let mut button = Style::new().fg(color).bold();
    if form.focus() == Some(Field::Submit) {
        button = button.reversed();
    }
    lines.push(Line::from(Span::styled(format!("  {label} →  "), button)));
    lines
}

/// Social links, location and availability.
pub fn info_lines(language: Language) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(translate(language, "contact.socials"))
            .style(Style::new().fg(theme::TEXT_MUTED).bold()),
    ];
    for social in SOCIALS {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", social.icon), Style::new().fg(theme::PRIMARY)),
            Span::styled(format!("{:<10}", social.label), Style::new().fg(theme::TEXT)),
            Span::styled(
                format!(" ↗ {}", social.url),
                Style::new().fg(theme::TEXT_DARK),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(
        Line::from(translate(language, "contact.location"))
            .style(Style::new().fg(theme::TEXT_MUTED).bold()),
    );
    lines.push(Line::from(format!("⌖ {LOCATION}")).style(Style::new().fg(theme::TEXT)));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("● ", Style::new().fg(theme::SUCCESS)),
        Span::styled(
            translate(language, "contact.available"),
            Style::new().fg(theme::SUCCESS),
        ),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_placeholders_are_localized() {
        let form = ContactForm::new();
        let pt = text(&form_lines(&form, Language::Pt, 40));
        assert!(pt.contains("Seu nome"));
        assert!(pt.contains("Enviar Mensagem"));
        let en = text(&form_lines(&form, Language::En, 40));
        assert!(en.contains("Send Message"));
    }

    #[test]
    fn test_input_keeps_fixed_width() {
        let mut form = ContactForm::new();
        form.focus_next();
        form.set_value(Field::Name, &"a".repeat(300));
        let line = input_line(&form, Field::Name, "Seu nome", 30);
        assert_eq!(line.width(), 30);
        let empty = input_line(&form, Field::Email, "seu@email.com", 30);
        assert_eq!(empty.width(), 30);
    }

    #[test]
    fn test_sent_card_replaces_form() {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "a");
        form.set_value(Field::Email, "b");
        form.set_value(Field::Message, "c");
        form.submit(std::time::Duration::ZERO);
        form.tick(std::time::Duration::from_millis(1500));
        let lines = text(&form_lines(&form, Language::Pt, 40));
        assert!(lines.contains("Mensagem Enviada!"));
        assert!(!lines.contains("Seu nome"));
    }

    #[test]
    fn test_info_lists_socials_and_location() {
        let lines = text(&info_lines(Language::Es));
        for social in SOCIALS {
            assert!(lines.contains(social.label));
        }
        assert!(lines.contains(LOCATION));
        assert!(lines.contains("Disponible para Proyectos"));
    }
}
