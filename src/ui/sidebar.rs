use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::Section;

/// Radio-style section menu
pub fn render_sidebar(frame: &mut Frame, area: Rect, current: &Section) {
    let items: Vec<ListItem> = Section::all()
        .iter()
        .map(|sec| {
            let (marker, style) = if sec == current {
                (
                    "(•) ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                ("( ) ", Style::default().fg(Color::Gray))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(sec.name(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Navegação ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(list, area);
}
