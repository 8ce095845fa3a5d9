use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::charts::render_line_chart;
use super::widgets::{city_color, render_selectors, titled_block, COLOR_ACCENT};
use crate::app::Section;
use crate::data::{DataStore, YEARS};
use crate::selection::{Focus, Selection};

pub fn render_evolucao(
    frame: &mut Frame,
    area: Rect,
    data: &DataStore,
    selection: &Selection,
    focus: Focus,
) {
    let block = titled_block(Section::Evolucao.name());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(YEARS.len() as u16 + 3),
        ])
        .split(inner);

    render_selectors(frame, chunks[0], selection, focus, false);

    let city = selection.city;
    let points: Vec<(f64, f64)> = data
        .series_for_city(city)
        .iter()
        .map(|(year, f)| (*year as f64, f.amount_received as f64))
        .collect();

    let x_bounds = [YEARS[0] as f64 - 0.25, YEARS[YEARS.len() - 1] as f64 + 0.25];
    render_line_chart(
        frame,
        chunks[1],
        &format!("{} - Valor recebido (R$)", city.name()),
        &points,
        x_bounds,
        data.max_amount() as f64 * 1.1,
        city_color(city),
    );

    // Every offered year, N/D where absent
    let header = Row::new(
        ["Ano", "Matrículas", "Valor Recebido"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))),
    );
    let rows: Vec<Row> = YEARS
        .iter()
        .map(|&year| {
            let (enrollment, amount) = data.lookup(city.name(), year).formatted();
            Row::new(vec![Cell::from(year.to_string()), Cell::from(enrollment), Cell::from(amount)])
        })
        .collect();
    let widths = [Constraint::Length(6), Constraint::Length(14), Constraint::Min(18)];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Série anual "));
    frame.render_widget(table, chunks[2]);
}
