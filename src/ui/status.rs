use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Section;
use crate::selection::Selection;

const COLOR_KEY: Color = Color::Cyan;

pub fn render_status_bar(frame: &mut Frame, area: Rect, section: &Section, selection: &Selection) {
    let mut spans = vec![
        Span::styled(
            "FUNDEB/FUNDEPE ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled("Município: ", Style::default().fg(Color::Gray)),
        Span::styled(selection.city.name(), Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled("Ano: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", selection.year), Style::default().fg(Color::White)),
        Span::raw("  "),
    ];

    // Section indicators
    for (i, sec) in Section::all().iter().enumerate() {
        let style = if section == sec {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" [{}] ", i + 1), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("[q]", Style::default().fg(COLOR_KEY)),
        Span::raw(" sair  "),
        Span::styled("[j/k]", Style::default().fg(COLOR_KEY)),
        Span::raw(" seção  "),
        Span::styled("[1-6]", Style::default().fg(COLOR_KEY)),
        Span::raw(" ir para  "),
        Span::styled("[Tab]", Style::default().fg(COLOR_KEY)),
        Span::raw(" seletor  "),
        Span::styled("[h/l]", Style::default().fg(COLOR_KEY)),
        Span::raw(" alterar  "),
        Span::styled("[i]", Style::default().fg(COLOR_KEY)),
        Span::raw(" sobre"),
    ]))
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
