use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::format::format_compact_amount;

/// One bar: label, value, color
pub type BarSpec = (String, u64, Color);

fn chart_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn to_bar(spec: &BarSpec) -> Bar<'static> {
    let (label, value, color) = spec;
    Bar::default()
        .value(*value)
        .label(Line::from(label.clone()))
        .text_value(format_compact_amount(*value))
        .style(Style::default().fg(*color))
        .value_style(Style::default().fg(Color::Black).bg(*color))
}

/// Bars grouped under a label each (e.g. one group per year)
pub fn render_grouped_bar_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    groups: &[(String, Vec<BarSpec>)],
    max: u64,
) {
    let mut chart = BarChart::default()
        .block(chart_block(title, Color::White))
        .bar_width(7)
        .bar_gap(1)
        .group_gap(3)
        .max(max.max(1));

    for (label, bars) in groups {
        let bars: Vec<Bar> = bars.iter().map(to_bar).collect();
        chart = chart.data(BarGroup::default().label(Line::from(label.clone())).bars(&bars));
    }

    frame.render_widget(chart, area);
}

pub fn render_bar_chart(frame: &mut Frame, area: Rect, title: &str, bars: &[BarSpec], max: u64) {
    let bars: Vec<Bar> = bars.iter().map(to_bar).collect();

    let chart = BarChart::default()
        .block(chart_block(title, Color::White))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .max(max.max(1));

    frame.render_widget(chart, area);
}

/// Line with point markers over years; `points` are (year, amount)
pub fn render_line_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[(f64, f64)],
    x_bounds: [f64; 2],
    y_max: f64,
    color: Color,
) {
    if points.is_empty() {
        frame.render_widget(chart_block(&format!("{} - Sem dados", title), Color::Yellow), area);
        return;
    }

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .data(points),
    ];

    let y_max = y_max.max(1.0);
    let x_labels: Vec<Span> = {
        let (lo, hi) = (x_bounds[0].ceil() as i64, x_bounds[1].floor() as i64);
        (lo..=hi).map(|y| Span::from(y.to_string())).collect()
    };

    let chart = Chart::new(datasets)
        .block(chart_block(title, color))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::from("0"),
                    Span::from(format_compact_amount((y_max / 2.0) as u64)),
                    Span::from(format_compact_amount(y_max as u64)),
                ]),
        );

    frame.render_widget(chart, area);
}
