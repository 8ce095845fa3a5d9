use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    DefaultTerminal, Frame,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::data::{fold, DataStore};
use crate::selection::{Focus, Selection};
use crate::ui::about::render_about_view;
use crate::ui::comparador::render_comparador;
use crate::ui::evolucao::render_evolucao;
use crate::ui::inicio::render_inicio;
use crate::ui::metodologia::render_metodologia;
use crate::ui::panorama::render_panorama;
use crate::ui::ranking::render_ranking;
use crate::ui::sidebar::render_sidebar;
use crate::ui::status::{render_help_bar, render_status_bar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Panorama,
    Ranking,
    Evolucao,
    Comparador,
    Metodologia,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inicio => "Início",
            Self::Panorama => "Panorama FUNDEB",
            Self::Ranking => "Ranking de Municípios",
            Self::Evolucao => "Evolução Temporal",
            Self::Comparador => "Comparador",
            Self::Metodologia => "Metodologia & Fontes",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Inicio => "inicio",
            Self::Panorama => "panorama",
            Self::Ranking => "ranking",
            Self::Evolucao => "evolucao",
            Self::Comparador => "comparador",
            Self::Metodologia => "metodologia",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Inicio,
            Section::Panorama,
            Section::Ranking,
            Section::Evolucao,
            Section::Comparador,
            Section::Metodologia,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold(s);
        Self::all()
            .iter()
            .copied()
            .find(|sec| sec.slug() == wanted || fold(sec.name()) == wanted)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::all().iter().map(|sec| sec.slug()).collect();
                format!("unknown section '{}' (expected one of: {})", s, valid.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    About,
}

pub struct App {
    data: DataStore,
    section: Section,
    selection: Selection,
    focus: Focus,
    overlay: Overlay,
    should_quit: bool,
}

impl App {
    pub fn new(selection: Selection, section: Section) -> Self {
        Self {
            data: DataStore::demo(),
            section,
            selection,
            focus: Focus::City,
            overlay: Overlay::None,
            should_quit: false,
        }
    }

    #[allow(dead_code)]
    pub fn section(&self) -> Section {
        self.section
    }

    #[allow(dead_code)]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!(section = self.section.slug(), "dashboard started");

        loop {
            terminal
                .draw(|frame| self.render(frame))
                .context("Failed to draw frame")?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("dashboard closed");
        Ok(())
    }

    /// Apply one key press. Returns true once the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return self.should_quit;
        }

        // While the overlay is open only close/quit keys apply
        if self.overlay != Overlay::None {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i') => {
                    self.overlay = Overlay::None;
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return self.should_quit;
        }

        let before = (self.section, self.selection);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.section = self.section.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.section = self.section.next(),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.section = Section::all()[idx];
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Left | KeyCode::Char('h') => {
                self.selection = self.focus.step(self.selection, false);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selection = self.focus.step(self.selection, true);
            }
            KeyCode::Char('i') => self.overlay = Overlay::About,
            _ => {}
        }

        if before != (self.section, self.selection) {
            debug!(
                section = self.section.slug(),
                city = self.selection.city.name(),
                year = self.selection.year,
                compare = self.selection.compare.name(),
                "selection changed"
            );
        }
        self.should_quit
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        render_status_bar(frame, chunks[0], &self.section, &self.selection);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(chunks[1]);

        render_sidebar(frame, body[0], &self.section);

        let area = body[1];
        match self.section {
            Section::Inicio => render_inicio(frame, area),
            Section::Panorama => render_panorama(frame, area, &self.data, &self.selection, self.focus),
            Section::Ranking => render_ranking(frame, area, &self.data, &self.selection, self.focus),
            Section::Evolucao => render_evolucao(frame, area, &self.data, &self.selection, self.focus),
            Section::Comparador => {
                render_comparador(frame, area, &self.data, &self.selection, self.focus)
            }
            Section::Metodologia => render_metodologia(frame, area),
        }

        render_help_bar(frame, chunks[2]);

        if self.overlay == Overlay::About {
            self.render_overlay(frame, "Sobre", |f, area| {
                render_about_view(f, area, &self.data);
            });
        }
    }

    fn render_overlay<F>(&self, frame: &mut Frame, title: &str, render_fn: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let area = frame.area();

        // Center the overlay, taking 60% of screen
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.6) as u16;
        let popup_x = (area.width - popup_width) / 2;
        let popup_y = (area.height - popup_height) / 2;

        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        render_fn(frame, inner);

        if popup_height < 3 || popup_width < 5 {
            return;
        }
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Pressione ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" ou ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" para fechar", Style::default().fg(Color::DarkGray)),
        ]));
        let hint_area = Rect::new(popup_x + 2, popup_y + popup_height - 1, popup_width - 4, 1);
        frame.render_widget(hint, hint_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::City;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_section_navigation_wraps() {
        let mut app = App::new(Selection::default(), Section::Inicio);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.section(), Section::Metodologia);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.section(), Section::Inicio);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.section(), Section::Evolucao);
    }

    #[test]
    fn test_selector_keys() {
        let mut app = App::new(Selection::default(), Section::Panorama);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selection().city, City::SaoPaulo);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.selection().year, 2024);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selection().compare, City::Fortaleza);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.selection().city, City::Fortaleza);
    }

    #[test]
    fn test_overlay_swallows_navigation() {
        let mut app = App::new(Selection::default(), Section::Inicio);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.section(), Section::Inicio);
        assert!(!press(&mut app, KeyCode::Esc));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.section(), Section::Panorama);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_help_and_overlay_text_is_portuguese() {
        let mut app = App::new(Selection::default(), Section::Inicio);
        let text = screen_text(&app);
        assert!(text.contains(" sair "));
        assert!(text.contains(" seção "));
        assert!(!text.contains(" quit "));

        press(&mut app, KeyCode::Char('i'));
        let text = screen_text(&app);
        assert!(text.contains("Pressione Esc ou Enter para fechar"));
        assert!(!text.contains("to close"));
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("ranking".parse::<Section>(), Ok(Section::Ranking));
        assert_eq!("Evolução Temporal".parse::<Section>(), Ok(Section::Evolucao));
        assert!("mapas".parse::<Section>().is_err());
    }

    #[test]
    fn test_panorama_shows_formatted_metrics() {
        let sel = Selection { city: City::SaoPaulo, year: 2023, ..Selection::default() };
        let text = screen_text(&App::new(sel, Section::Panorama));
        assert!(text.contains("1.200.000"));
        assert!(text.contains("R$ 9.800.000.000"));
    }

    #[test]
    fn test_panorama_shows_not_available() {
        let sel = Selection { city: City::Salvador, year: 2022, ..Selection::default() };
        let text = screen_text(&App::new(sel, Section::Panorama));
        assert!(text.contains("N/D"));
        assert!(!text.contains("R$ 2.950.000.000"));
    }

    #[test]
    fn test_every_section_renders() {
        for &section in Section::all() {
            let text = screen_text(&App::new(Selection::default(), section));
            assert!(text.contains(section.name()), "missing title for {:?}", section);
        }
    }
}
