use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use super::charts::{render_bar_chart, BarSpec};
use super::widgets::{city_color, render_metric, render_selectors, titled_block};
use crate::app::Section;
use crate::data::{City, DataStore};
use crate::selection::{Focus, Selection};

pub fn render_comparador(
    frame: &mut Frame,
    area: Rect,
    data: &DataStore,
    selection: &Selection,
    focus: Focus,
) {
    let block = titled_block(Section::Comparador.name());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(10), Constraint::Min(8)])
        .split(inner);

    render_selectors(frame, chunks[0], selection, focus, true);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_city_column(frame, columns[0], data, selection.city, selection.year);
    render_city_column(frame, columns[1], data, selection.compare, selection.year);

    // Cities without a row for this year get no bar
    let bars: Vec<BarSpec> = [selection.city, selection.compare]
        .iter()
        .filter_map(|&city| {
            data.get(city.name(), selection.year)
                .map(|f| (city.code().to_string(), f.amount_received, city_color(city)))
        })
        .collect();
    render_bar_chart(
        frame,
        chunks[2],
        &format!("Comparação {}", selection.year),
        &bars,
        data.max_amount(),
    );
}

fn render_city_column(frame: &mut Frame, area: Rect, data: &DataStore, city: City, year: u16) {
    let block = Block::default().borders(Borders::ALL).title(Line::from(Span::styled(
        format!(" {} ", city.name()),
        Style::default().fg(city_color(city)).add_modifier(Modifier::BOLD),
    )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (enrollment, amount) = data.lookup(city.name(), year).formatted();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4)])
        .split(inner);
    render_metric(frame, rows[0], "Número de Matrículas", &enrollment);
    render_metric(frame, rows[1], "Valor FUNDEB/FUNDEPE Recebido", &amount);
}
