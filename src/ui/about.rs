use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::widgets::field;
use crate::data::{City, DataStore, YEARS};

pub fn render_about_view(frame: &mut Frame, area: Rect, data: &DataStore) {
    let lines = vec![
        Line::styled(
            "Estes valores são simulações fictícias. Futuramente serão substituídos pelos dados oficiais do MEC.",
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        field("Registros na tabela", data.len().to_string()),
        field("Municípios", City::all().len().to_string()),
        field(
            "Anos",
            YEARS.iter().map(|y| y.to_string()).collect::<Vec<_>>().join(", "),
        ),
        field("Ausentes", "exibidos como N/D".to_string()),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
