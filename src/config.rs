use crate::catalog::Catalog;
use crate::error::BacklogError;
use crate::game::Game;
use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

pub fn load_catalog(path: &Path) -> Result<Catalog, BacklogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| BacklogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&contents)?;

    log::info!(
        "Loaded {} game(s) from {}.",
        catalog.len(),
        path.display()
    );

    Ok(catalog)
}

/// Reads the `games` list of the first YAML document.
pub fn parse_catalog(contents: &str) -> Result<Catalog, BacklogError> {
    let docs = YamlLoader::load_from_str(contents)?;

    // An empty file is an empty catalog
    let Some(doc) = docs.first() else {
        return Ok(Catalog::default());
    };

    let games = match &doc["games"] {
        Yaml::BadValue | Yaml::Null => return Ok(Catalog::default()),
        Yaml::Array(entries) => entries,
        _ => return Err(BacklogError::Catalog("`games` must be a list".to_string())),
    };

    let games = games
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_game(index, entry))
        .collect::<Result<Vec<Game>, BacklogError>>()?;

    Ok(Catalog::new(games))
}

fn parse_game(index: usize, entry: &Yaml) -> Result<Game, BacklogError> {
    if entry.as_hash().is_none() {
        return Err(BacklogError::Catalog(format!(
            "entry #{index} is not a mapping"
        )));
    }

    let game = Game::new(
        required_str(index, entry, "title")?,
        required(index, entry, "completed", Yaml::as_bool)?,
        optional(index, entry, "description", scalar_text)?
            .unwrap_or_default(),
        required_alias(
            index,
            entry,
            "completion_percentage",
            "completionPercentage",
            Yaml::as_i64,
        )?,
        required_str(index, entry, "platform")?,
        optional_alias(index, entry, "trophy_hunting", "trophyHunting", Yaml::as_bool)?
            .unwrap_or(false),
    );

    log::debug!("Parsed entry #{index}: {game}");

    Ok(game)
}

fn lookup<'a>(entry: &'a Yaml, key: &str, alias: Option<&str>) -> Option<&'a Yaml> {
    let found = &entry[key];
    if !found.is_badvalue() {
        return Some(found);
    }

    let found = &entry[alias?];
    (!found.is_badvalue()).then_some(found)
}

fn optional_alias<T>(
    index: usize,
    entry: &Yaml,
    key: &str,
    alias: &str,
    convert: impl Fn(&Yaml) -> Option<T>,
) -> Result<Option<T>, BacklogError> {
    convert_value(index, key, lookup(entry, key, Some(alias)), convert)
}

fn optional<T>(
    index: usize,
    entry: &Yaml,
    key: &str,
    convert: impl Fn(&Yaml) -> Option<T>,
) -> Result<Option<T>, BacklogError> {
    convert_value(index, key, lookup(entry, key, None), convert)
}

fn convert_value<T>(
    index: usize,
    key: &str,
    value: Option<&Yaml>,
    convert: impl Fn(&Yaml) -> Option<T>,
) -> Result<Option<T>, BacklogError> {
    match value {
        None | Some(Yaml::Null) => Ok(None),
        Some(value) => convert(value).map(Some).ok_or_else(|| {
            BacklogError::Catalog(format!("entry #{index}: `{key}` has the wrong type"))
        }),
    }
}

fn required_alias<T>(
    index: usize,
    entry: &Yaml,
    key: &str,
    alias: &str,
    convert: impl Fn(&Yaml) -> Option<T>,
) -> Result<T, BacklogError> {
    optional_alias(index, entry, key, alias, convert)?.ok_or_else(|| missing(index, key))
}

fn required<T>(
    index: usize,
    entry: &Yaml,
    key: &str,
    convert: impl Fn(&Yaml) -> Option<T>,
) -> Result<T, BacklogError> {
    optional(index, entry, key, convert)?.ok_or_else(|| missing(index, key))
}

/// Text fields take any scalar as written, so `title: 2048` stays a title.
fn scalar_text(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

fn required_str(index: usize, entry: &Yaml, key: &str) -> Result<String, BacklogError> {
    required(index, entry, key, scalar_text)
}

fn missing(index: usize, key: &str) -> BacklogError {
    BacklogError::Catalog(format!("entry #{index}: missing `{key}`"))
}
