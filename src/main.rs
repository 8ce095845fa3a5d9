mod app;
mod data;
mod format;
mod selection;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::app::{App, Section};
use crate::data::{City, DataStore};
use crate::selection::Selection;

#[derive(Parser, Debug)]
#[command(name = "fundeb_top")]
#[command(about = "A TUI for browsing FUNDEB/FUNDEPE funding demonstration figures", long_about = None)]
struct Args {
    /// Initial city
    #[arg(long, default_value = "Fortaleza")]
    city: City,

    /// Initial year
    #[arg(long, default_value_t = 2023, value_parser = clap::value_parser!(u16).range(2022..=2024))]
    year: u16,

    /// Initial city for the Comparador section
    #[arg(long, default_value = "São Paulo")]
    compare: City,

    /// Initial section (inicio, panorama, ranking, evolucao, comparador, metodologia)
    #[arg(long, default_value = "inicio")]
    section: Section,

    /// Print the figures for --city/--year and exit
    #[arg(long)]
    print: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The TUI owns the terminal, so logs only go to a file while it runs
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Headless output for `--print`
fn print_lookup(w: &mut impl Write, data: &DataStore, selection: &Selection) -> io::Result<()> {
    let record = data.lookup(selection.city.name(), selection.year);
    let (enrollment, amount) = record.formatted();
    writeln!(w, "Dados simulados para {} em {}:", record.location, record.period)?;
    writeln!(w, "  Número de Matrículas: {}", enrollment)?;
    writeln!(w, "  Valor FUNDEB/FUNDEPE Recebido: {}", amount)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.print)?;

    let selection = Selection {
        city: args.city,
        year: args.year,
        compare: args.compare,
    };

    if args.print {
        tracing::info!(city = selection.city.name(), year = selection.year, "headless lookup");
        print_lookup(&mut io::stdout().lock(), &DataStore::demo(), &selection)
            .context("Failed to write lookup")?;
        return Ok(());
    }

    // Initialize terminal
    let terminal = ratatui::init();

    // Run app
    let app = App::new(selection, args.section);
    let result = app.run(terminal);

    // Restore terminal
    ratatui::restore();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("fundeb_top").chain(args.iter().copied()))
    }

    fn printed(city: City, year: u16) -> String {
        let selection = Selection { city, year, ..Selection::default() };
        let mut out = Vec::new();
        print_lookup(&mut out, &DataStore::demo(), &selection).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.city, City::Fortaleza);
        assert_eq!(args.year, 2023);
        assert_eq!(args.compare, City::SaoPaulo);
        assert_eq!(args.section, Section::Inicio);
        assert!(!args.print);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        assert!(parse(&["--year", "2021"]).is_err());
        assert!(parse(&["--year", "2025"]).is_err());
        assert_eq!(parse(&["--year", "2024"]).unwrap().year, 2024);
    }

    #[test]
    fn test_city_slug_and_section() {
        let args = parse(&["--city", "sao-paulo", "--section", "ranking"]).unwrap();
        assert_eq!(args.city, City::SaoPaulo);
        assert_eq!(args.section, Section::Ranking);
    }

    #[test]
    fn test_unknown_choices_list_valid_values() {
        let err = parse(&["--city", "Recife"]).unwrap_err().to_string();
        assert!(err.contains("Recife"));
        assert!(err.contains("Belo Horizonte"));

        let err = parse(&["--section", "mapas"]).unwrap_err().to_string();
        assert!(err.contains("metodologia"));
    }

    #[test]
    fn test_print_lookup_present() {
        let text = printed(City::SaoPaulo, 2023);
        assert!(text.starts_with("Dados simulados para São Paulo em 2023:"));
        assert!(text.contains("Número de Matrículas: 1.200.000"));
        assert!(text.contains("Valor FUNDEB/FUNDEPE Recebido: R$ 9.800.000.000"));
    }

    #[test]
    fn test_print_lookup_not_available() {
        let text = printed(City::Salvador, 2022);
        assert!(text.contains("Número de Matrículas: N/D"));
        assert!(text.contains("Valor FUNDEB/FUNDEPE Recebido: N/D"));
    }
}
