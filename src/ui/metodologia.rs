use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::widgets::{bullet, heading, titled_block};
use crate::app::Section;

/// Glossary of federal complementation categories
const GLOSSARY: [(&str, &str); 4] = [
    ("FUNDEB", "Fundo de Manutenção e Desenvolvimento da Educação Básica."),
    ("VAAF", "Valor Anual por Aluno: complementação da União aos fundos estaduais abaixo do mínimo."),
    ("VAAT", "Valor Anual Total por Aluno: complementação às redes com menor receita total."),
    ("VAAR", "Valor Anual por Aluno por Resultado: complementação condicionada a indicadores."),
];

pub fn render_metodologia(frame: &mut Frame, area: Rect) {
    let block = titled_block(Section::Metodologia.name());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(GLOSSARY.len() as u16 + 2)])
        .split(inner);

    let sources = Paragraph::new(vec![
        heading("Fontes"),
        bullet("Portarias do MEC sobre FUNDEB/FUNDEPE, publicadas anualmente e revistas a cada trimestre."),
        bullet("Anexo I: valores repassados por estado."),
        bullet("Anexo II: complementações da União (VAAF, VAAT, VAAR)."),
        bullet("Anexo III: matrículas por município."),
        bullet("Anexo IV: distribuição consolidada final."),
        Line::from(""),
        heading("Metodologia"),
        Line::from(
            "Os valores exibidos são simulações fictícias mantidas em uma tabela fixa por \
             município e ano. Combinações sem registro aparecem como N/D. Matrículas são \
             contagens inteiras; valores estão em reais, sem casas decimais.",
        ),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(sources, chunks[0]);

    let glossary: Vec<Line> = GLOSSARY
        .iter()
        .map(|(term, meaning)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<7}", term),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*meaning),
            ])
        })
        .collect();
    let glossary = Paragraph::new(glossary)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Glossário "));
    frame.render_widget(glossary, chunks[1]);
}
