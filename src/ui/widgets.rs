use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::data::City;
use crate::format::NOT_AVAILABLE;
use crate::selection::{Focus, Selection};

pub const COLOR_ACCENT: Color = Color::Cyan;

pub fn city_color(city: City) -> Color {
    match city {
        City::Fortaleza => Color::Green,
        City::SaoPaulo => Color::Cyan,
        City::Salvador => Color::Magenta,
        City::BeloHorizonte => Color::Yellow,
    }
}

/// "FOR Fortaleza  SAO São Paulo ..." in each city's color
pub fn city_legend() -> Line<'static> {
    let mut spans = vec![Span::styled("Legenda: ", Style::default().fg(Color::Gray))];
    for &city in City::all() {
        spans.push(Span::styled(
            format!("{} ", city.code()),
            Style::default().fg(city_color(city)).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!("{}  ", city.name())));
    }
    Line::from(spans)
}

/// Bordered block with the bold accent title every section uses
pub fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
}

fn selector_spans(label: &str, value: String, focused: bool) -> Vec<Span<'static>> {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("◀ {} ▶", value), value_style),
        Span::raw("   "),
    ]
}

/// One-line row of dropdown-like selectors. `with_compare` adds the second city.
pub fn render_selectors(
    frame: &mut Frame,
    area: Rect,
    selection: &Selection,
    focus: Focus,
    with_compare: bool,
) {
    let mut spans = selector_spans(
        Focus::City.label(),
        selection.city.name().to_string(),
        focus == Focus::City,
    );
    spans.extend(selector_spans(
        Focus::Year.label(),
        selection.year.to_string(),
        focus == Focus::Year,
    ));
    if with_compare {
        spans.extend(selector_spans(
            Focus::Compare.label(),
            selection.compare.name().to_string(),
            focus == Focus::Compare,
        ));
    }

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Labeled metric panel. "N/D" is dimmed.
pub fn render_metric(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let value_style = if value == NOT_AVAILABLE {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let metric = Paragraph::new(vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(value.to_string(), value_style)),
    ])
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(metric, area);
}

pub fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    let notice = Paragraph::new(Line::from(vec![
        Span::styled("Obs: ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(text.to_string(), Style::default().fg(Color::Yellow)),
    ]))
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Left);

    frame.render_widget(notice, area);
}

/// Accent-colored heading line
pub fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    ))
}

pub fn bullet(text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(COLOR_ACCENT)),
        Span::raw(text.to_string()),
    ])
}

/// "label: value" with the label dimmed
pub fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
