#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use roulement::{
    io,
    render::{holiday_notice, prepare_board, TextBoard},
    RotationConfig, RotationEngine,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning de rotation (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de config (défaut : tables embarquées)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher le tableau de service d'une semaine
    Week {
        /// Date YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Afficher la grille d'un mois et exporter le planning
    Month {
        #[arg(long)]
        year: Option<i32>,
        /// 1-12
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Lister les fériés d'une année
    Holidays {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Afficher le prochain férié de l'année
    NextHoliday {
        /// Date YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        from: Option<String>,
    },

    /// Écrire la config embarquée dans un fichier JSON
    ConfigInit {
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = match &cli.config {
        Some(path) => io::load_config_from_file(path)?,
        None => RotationConfig::builtin(),
    };
    let engine = RotationEngine::new(config)?;
    let today = Utc::now().date_naive();

    let code = match cli.cmd {
        Commands::Week { date, out_json } => {
            let date: NaiveDate = match date {
                Some(raw) => raw.parse()?,
                None => today,
            };
            let board = prepare_board(&engine, date, &TextBoard);
            print!("{}", board.content);
            if let Some(path) = out_json {
                let schedule = io::month_schedule(&engine, date.year(), date.month())?;
                io::export_month_json(path, &schedule)?;
            }
            0
        }
        Commands::Month {
            year,
            month,
            out_json,
            out_csv,
        } => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            let schedule = io::month_schedule(&engine, year, month)?;
            print_month(&schedule);
            if let Some(path) = out_json {
                io::export_month_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_month_csv(path, &schedule)?;
            }
            0
        }
        Commands::Holidays { year } => {
            let year = year.unwrap_or_else(|| today.year());
            for h in &engine.config().holidays {
                match NaiveDate::from_ymd_opt(year, h.month, h.day) {
                    Some(date) => println!("{} | {}", date, h.name),
                    // 29/02 hors année bissextile
                    None => println!("{year}-{:02}-{:02} (absent) | {}", h.month, h.day, h.name),
                }
            }
            0
        }
        Commands::NextHoliday { from } => {
            let from: NaiveDate = match from {
                Some(raw) => raw.parse()?,
                None => today,
            };
            let notice = holiday_notice(&engine, from);
            println!("{notice}");
            // Code 2 = plus aucun férié cette année
            if engine.next_holiday(from).is_none() {
                2
            } else {
                0
            }
        }
        Commands::ConfigInit { out } => {
            io::export_config_json(&out, engine.config())?;
            println!("Config written to {out}");
            0
        }
    };

    std::process::exit(code);
}

fn print_month(schedule: &io::MonthSchedule) {
    let first = NaiveDate::from_ymd_opt(schedule.year, schedule.month, 1);
    let title = first
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    println!("{title}");
    println!("Mo Tu We Th Fr Sa Su");
    for row in &schedule.weeks {
        let line: Vec<String> = row
            .iter()
            .map(|slot| match slot {
                Some(day) => format!("{day:2}"),
                None => "  ".to_string(),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    for day in &schedule.days {
        if let Some(name) = &day.holiday {
            println!("{} | {}", day.date, name);
        }
    }
}
