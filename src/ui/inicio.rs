use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::widgets::{bullet, heading, titled_block};
use crate::app::Section;

pub fn render_inicio(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Distribuição do FUNDEB/FUNDEPE",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Por: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Debora", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        heading("Objetivo do App"),
        Line::from(
            "Consultar e visualizar informações sobre a distribuição do FUNDEB/FUNDEPE no Brasil. \
             O FUNDEB é o principal fundo de financiamento da educação básica, e o MEC publica \
             portarias trimestrais que detalham:",
        ),
        bullet("Recursos recebidos por estado;"),
        bullet("Complementações da União;"),
        bullet("Matrículas por município;"),
        bullet("Distribuição consolidada final."),
        Line::from("Este app é um protótipo para explorar esses dados de forma simples, interativa e acessível."),
        Line::from(""),
        heading("Estrutura do App"),
        bullet("Consulta por Município e Ano: matrículas e valores recebidos (Panorama FUNDEB)."),
        bullet("Visualização dos Dados: gráficos comparando municípios e anos."),
        bullet("Relatórios: exportação PDF/CSV/XLSX prevista para versões futuras."),
        Line::from(""),
        heading("Bases de Dados Previstas"),
        bullet("Portarias do MEC sobre FUNDEB/FUNDEPE (anuais, atualizadas a cada 3 meses);"),
        bullet("Anexo I: valores repassados por estado;"),
        bullet("Anexo II: complementações da União;"),
        bullet("Anexo III: matrículas por município;"),
        bullet("Anexo IV: distribuição consolidada final."),
        Line::from(""),
        heading("Conclusão"),
        Line::from("Próximas etapas do protótipo:"),
        bullet("Carregamento dos dados reais a partir das portarias do MEC;"),
        bullet("Gráficos interativos (barras, linhas, mapas);"),
        bullet("Exportação de relatórios em PDF e Excel."),
    ];

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(titled_block(Section::Inicio.name()));

    frame.render_widget(page, area);
}
