use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::charts::{render_bar_chart, BarSpec};
use super::widgets::{city_color, render_selectors, titled_block, COLOR_ACCENT};
use crate::app::Section;
use crate::data::{City, DataStore, Funding};
use crate::format::{format_number, FieldKind};
use crate::selection::{Focus, Selection};

pub fn render_ranking(
    frame: &mut Frame,
    area: Rect,
    data: &DataStore,
    selection: &Selection,
    focus: Focus,
) {
    let block = titled_block(Section::Ranking.name());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    render_selectors(frame, chunks[0], selection, focus, false);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let ranking = data.ranking(selection.year);
    render_ranking_table(frame, body[0], &ranking, selection);

    let bars: Vec<BarSpec> = ranking
        .iter()
        .map(|(city, f)| (city.code().to_string(), f.amount_received, city_color(*city)))
        .collect();
    render_bar_chart(
        frame,
        body[1],
        &format!("Valor recebido em {}", selection.year),
        &bars,
        data.max_amount(),
    );
}

fn render_ranking_table(
    frame: &mut Frame,
    area: Rect,
    ranking: &[(City, Funding)],
    selection: &Selection,
) {
    let header_cells = ["#", "Município", "Matrículas", "Valor Recebido"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells).height(1).bottom_margin(0);

    let rows: Vec<Row> = ranking
        .iter()
        .enumerate()
        .map(|(i, (city, f))| {
            let row_style = if *city == selection.city {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}º", i + 1)),
                Cell::from(city.name()).style(Style::default().fg(city_color(*city))),
                Cell::from(format_number(Some(f.enrollment_count), FieldKind::Count)),
                Cell::from(format_number(Some(f.amount_received), FieldKind::Amount)),
            ])
            .style(row_style)
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(4),   // Position
        Constraint::Length(16),  // City
        Constraint::Length(12),  // Enrollment
        Constraint::Min(18),     // Amount
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Classificação por valor ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let missing: Vec<&str> = City::all()
        .iter()
        .filter(|c| !ranking.iter().any(|(r, _)| r == *c))
        .map(|c| c.name())
        .collect();

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(Table::new(rows, widths).header(header), parts[0]);

    if !missing.is_empty() {
        let note = Paragraph::new(Line::from(vec![
            Span::styled("Sem dados (N/D): ", Style::default().fg(Color::DarkGray)),
            Span::styled(missing.join(", "), Style::default().fg(Color::Gray)),
        ]));
        frame.render_widget(note, parts[1]);
    }
}
