use clap::{command, Arg, ArgAction, ArgGroup, ArgMatches, Command, ValueHint};
use std::path::PathBuf;

use crate::catalog::Filter;

pub const DEFAULT_CONFIG: &str = "games.yaml";

pub fn build_command() -> Command {
    command!()
        .args([
            Arg::new("config")
                .short('c')
                .long("config-file")
                .alias("config")
                .value_hint(ValueHint::FilePath)
                .value_name("PATH")
                .default_value(DEFAULT_CONFIG)
                .help("Path to the YAML game catalog."),
            Arg::new("platform")
                .short('p')
                .long("platform")
                .value_name("NAME")
                .help("Only games on this platform (case-insensitive)."),
            Arg::new("completed")
                .long("completed")
                .action(ArgAction::SetTrue)
                .conflicts_with("unfinished")
                .help("Only completed games."),
            Arg::new("unfinished")
                .long("unfinished")
                .action(ArgAction::SetTrue)
                .help("Only games not yet completed."),
            Arg::new("hunting")
                .long("hunting")
                .action(ArgAction::SetTrue)
                .conflicts_with("not_hunting")
                .help("Only games being trophy hunted."),
            Arg::new("not_hunting")
                .long("not-hunting")
                .action(ArgAction::SetTrue)
                .help("Only games not being trophy hunted."),
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format for listings."),
            Arg::new("summary")
                .long("summary")
                .action(ArgAction::SetTrue)
                .help("Print counts and average completion instead of a listing."),
            Arg::new("suggest")
                .long("suggest")
                .action(ArgAction::SetTrue)
                .help("Pick a random unfinished game to play next."),
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging."),
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log warnings and errors."),
        ])
        .group(ArgGroup::new("mode").args(["summary", "suggest"]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Summary,
    Suggest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug)]
pub struct Options {
    pub config: PathBuf,
    pub filter: Filter,
    pub mode: Mode,
    pub format: Format,
    pub log_level: log::LevelFilter,
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let flag = |id: &str| matches.get_flag(id);
        let either = |yes: &str, no: &str| match (flag(yes), flag(no)) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        let mode = if flag("summary") {
            Mode::Summary
        } else if flag("suggest") {
            Mode::Suggest
        } else {
            Mode::List
        };

        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => Format::Json,
            _ => Format::Text,
        };

        let log_level = if flag("verbose") {
            log::LevelFilter::Debug
        } else if flag("quiet") {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        };

        Self {
            config: matches
                .get_one::<String>("config")
                .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from),
            filter: Filter {
                platform: matches.get_one::<String>("platform").cloned(),
                completed: either("completed", "unfinished"),
                trophy_hunting: either("hunting", "not_hunting"),
            },
            mode,
            format,
            log_level,
        }
    }
}
