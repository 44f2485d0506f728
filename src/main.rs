use catalog::Catalog;
use cli::{Format, Mode, Options};
use error::BacklogError;
use game::Game;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::process::ExitCode;

mod catalog;
mod cli;
mod config;
mod error;
mod game;

fn main() -> ExitCode {
    let opts = Options::from_matches(&cli::build_command().get_matches());

    if let Err(e) = init_logger(opts.log_level) {
        eprintln!("ERROR: {e}");
        return ExitCode::FAILURE;
    }

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(level: log::LevelFilter) -> Result<(), BacklogError> {
    let config = ConfigBuilder::new()
        .set_thread_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;

    Ok(())
}

fn run(opts: &Options) -> Result<(), BacklogError> {
    let catalog = config::load_catalog(&opts.config)?;

    if catalog.is_empty() {
        log::warn!("{} has no games.", opts.config.display());
    }

    let flagged = catalog.flag_suspicious();
    if flagged > 0 {
        log::warn!("{flagged} entry(ies) look suspicious; values were kept as written.");
    }

    let selected = Catalog::new(catalog.filter(&opts.filter).into_iter().cloned().collect());
    log::debug!("{} of {} game(s) match the filter.", selected.len(), catalog.len());

    match opts.mode {
        Mode::List => match opts.format {
            Format::Json => println!("{}", catalog::to_json(&selected).pretty(2)),
            Format::Text => {
                for game in &selected {
                    println!("{game}");
                }
            }
        },
        Mode::Summary => print!("{}", selected.summary()),
        Mode::Suggest => print!("{}", suggestion(selected.suggest(&mut rand::thread_rng()))),
    }

    Ok(())
}

/// Stdout text for `--suggest`, including the notice when nothing qualifies.
fn suggestion(pick: Option<&Game>) -> String {
    match pick {
        Some(game) if game.description.is_empty() => format!("{game}\n"),
        Some(game) => format!("{game}\n    {}\n", game.description),
        None => "Nothing left to play: every matching game is completed.\n".to_string(),
    }
}
