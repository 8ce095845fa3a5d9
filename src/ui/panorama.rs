use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::charts::{render_grouped_bar_chart, BarSpec};
use super::widgets::{
    city_color, city_legend, render_metric, render_notice, render_selectors, titled_block,
};
use crate::app::Section;
use crate::data::{DataStore, YEARS};
use crate::selection::{Focus, Selection};

pub fn render_panorama(
    frame: &mut Frame,
    area: Rect,
    data: &DataStore,
    selection: &Selection,
    focus: Focus,
) {
    let block = titled_block(Section::Panorama.name());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Selectors
            Constraint::Length(1), // Subheading
            Constraint::Length(4), // Metrics
            Constraint::Length(2), // Notice
            Constraint::Min(8),    // Chart
            Constraint::Length(1), // Legend
        ])
        .split(inner);

    render_selectors(frame, chunks[0], selection, focus, false);

    let record = data.lookup(selection.city.name(), selection.year);

    let mut spans = vec![
        Span::styled("Dados simulados para ", Style::default().fg(Color::Gray)),
        Span::styled(
            selection.city.name(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" em ", Style::default().fg(Color::Gray)),
        Span::styled(
            selection.year.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(":", Style::default().fg(Color::Gray)),
    ];
    if !record.is_available() {
        spans.push(Span::styled(
            " sem registro na tabela de demonstração",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);

    let (enrollment, amount) = record.formatted();

    let metrics = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_metric(frame, metrics[0], "Número de Matrículas", &enrollment);
    render_metric(frame, metrics[1], "Valor FUNDEB/FUNDEPE Recebido", &amount);

    render_notice(
        frame,
        chunks[3],
        "estes valores são simulações fictícias. Futuramente serão substituídos pelos dados oficiais do MEC.",
    );

    let groups: Vec<(String, Vec<BarSpec>)> = YEARS
        .iter()
        .map(|&year| {
            let bars = data
                .rows_for_year(year)
                .into_iter()
                .map(|(city, f)| (city.code().to_string(), f.amount_received, city_color(city)))
                .collect();
            (year.to_string(), bars)
        })
        .collect();
    render_grouped_bar_chart(
        frame,
        chunks[4],
        "Valor recebido por ano (R$)",
        &groups,
        data.max_amount(),
    );

    frame.render_widget(Paragraph::new(city_legend()), chunks[5]);
}
