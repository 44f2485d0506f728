use crate::game::Game;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered, read-only collection of catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    games: Vec<Game>,
}

/// Every `Some` field must match for a game to pass.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Compared case-insensitively against the trimmed platform label.
    pub platform: Option<String>,
    pub completed: Option<bool>,
    pub trophy_hunting: Option<bool>,
}

fn same_platform(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl Filter {
    pub fn matches(&self, game: &Game) -> bool {
        if let Some(platform) = &self.platform {
            if !same_platform(&game.platform, platform) {
                return false;
            }
        }

        if self.completed.is_some_and(|c| c != game.completed) {
            return false;
        }

        if self.trophy_hunting.is_some_and(|t| t != game.trophy_hunting) {
            return false;
        }

        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub trophy_hunting: usize,
    /// `None` for an empty set. Out-of-range percentages count as stored.
    pub average_percentage: Option<f64>,
    /// Platforms grouped the way `Filter` compares them, labelled as first seen.
    pub platforms: Vec<(String, usize)>,
}

impl Summary {
    pub fn from_games<'a>(games: impl IntoIterator<Item = &'a Game>) -> Self {
        let mut total = 0;
        let mut completed = 0;
        let mut trophy_hunting = 0;
        let mut percentage_sum: i128 = 0;
        let mut platforms: Vec<(String, usize)> = Vec::new();

        for game in games {
            total += 1;
            completed += usize::from(game.completed);
            trophy_hunting += usize::from(game.trophy_hunting);
            percentage_sum += i128::from(game.completion_percentage);

            match platforms.iter_mut().find(|(p, _)| same_platform(p, &game.platform)) {
                Some((_, count)) => *count += 1,
                None => platforms.push((game.platform.clone(), 1)),
            }
        }

        let average_percentage = (total > 0).then(|| percentage_sum as f64 / total as f64);

        Self {
            total,
            completed,
            trophy_hunting,
            average_percentage,
            platforms,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Games: {}", self.total)?;
        writeln!(f, "Completed: {}", self.completed)?;
        writeln!(f, "Trophy hunting: {}", self.trophy_hunting)?;

        match self.average_percentage {
            Some(avg) => writeln!(f, "Average completion: {avg:.1}%")?,
            None => writeln!(f, "Average completion: n/a")?,
        }

        for (platform, count) in &self.platforms {
            writeln!(f, "  {platform}: {count}")?;
        }

        Ok(())
    }
}

impl Catalog {
    pub const fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.games.iter()
    }

    pub fn filter(&self, filter: &Filter) -> Vec<&Game> {
        self.iter().filter(|g| filter.matches(g)).collect()
    }

    pub fn summary(&self) -> Summary {
        Summary::from_games(self.games())
    }

    pub fn suggest<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Game> {
        let unfinished: Vec<&Game> = self.games.iter().filter(|g| !g.completed).collect();
        unfinished.choose(rng).copied()
    }

    /// Logs entries with a blank title or a percentage outside 0..=100.
    /// Entries are never altered. Returns the number flagged.
    pub fn flag_suspicious(&self) -> usize {
        let mut flagged = 0;

        for (index, game) in self.games.iter().enumerate() {
            let mut suspicious = false;

            if !game.has_title() {
                log::warn!("Entry #{index} has a blank title.");
                suspicious = true;
            }

            if !game.percentage_in_range() {
                log::warn!(
                    "Entry #{index} ({}) has completion percentage {} outside 0-100.",
                    game.title,
                    game.completion_percentage
                );
                suspicious = true;
            }

            flagged += usize::from(suspicious);
        }

        flagged
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn to_json<'a>(games: impl IntoIterator<Item = &'a Game>) -> json::JsonValue {
    json::JsonValue::Array(games.into_iter().map(Game::to_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(title: &str, completed: bool, pct: i64, platform: &str, hunting: bool) -> Game {
        Game::new(
            title.to_string(),
            completed,
            String::new(),
            pct,
            platform.to_string(),
            hunting,
        )
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            game("Celeste", true, 100, "Switch", false),
            game("Elden Ring", false, 40, "PlayStation 5", true),
            game("Hades", false, 70, "Steam (PC)", false),
            game("Bloodborne", true, 100, "playstation 5 ", true),
        ])
    }

    fn titles(games: &[&Game]) -> Vec<String> {
        games.iter().map(|g| g.title.clone()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let catalog = sample();
        let all = catalog.filter(&Filter::default());

        assert_eq!(
            titles(&all),
            ["Celeste", "Elden Ring", "Hades", "Bloodborne"]
        );
    }

    #[test]
    fn platform_filter_ignores_case_and_padding() {
        let catalog = sample();
        let filter = Filter {
            platform: Some("PLAYSTATION 5".to_string()),
            ..Default::default()
        };

        assert_eq!(titles(&catalog.filter(&filter)), ["Elden Ring", "Bloodborne"]);
    }

    #[test]
    fn filters_combine() {
        let catalog = sample();
        let filter = Filter {
            completed: Some(false),
            trophy_hunting: Some(false),
            ..Default::default()
        };

        assert_eq!(titles(&catalog.filter(&filter)), ["Hades"]);
    }

    #[test]
    fn summary_counts() {
        let summary = sample().summary();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.trophy_hunting, 2);
        assert_eq!(summary.average_percentage, Some(77.5));
        assert_eq!(
            summary.platforms,
            vec![
                ("Switch".to_string(), 1),
                ("PlayStation 5".to_string(), 2),
                ("Steam (PC)".to_string(), 1),
            ]
        );
    }

    #[test]
    fn summary_groups_platforms_like_the_filter() {
        let catalog = sample();
        let filter = Filter {
            platform: Some("playstation 5".to_string()),
            ..Default::default()
        };

        let summary = Summary::from_games(catalog.filter(&filter));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.platforms, vec![("PlayStation 5".to_string(), 2)]);
    }

    #[test]
    fn iter_and_into_iter_agree() {
        let catalog = sample();
        let by_iter: Vec<&Game> = catalog.iter().collect();
        let mut by_loop: Vec<&Game> = Vec::new();
        for game in &catalog {
            by_loop.push(game);
        }

        assert_eq!(by_iter, by_loop);
        assert_eq!(by_iter.len(), catalog.len());
        assert_eq!(by_iter[2].title, "Hades");
    }

    #[test]
    fn summary_of_empty_catalog_has_no_average() {
        let summary = Catalog::default().summary();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_percentage, None);
        assert!(summary.to_string().contains("Average completion: n/a"));
    }

    #[test]
    fn summary_does_not_clamp_percentages() {
        let catalog = Catalog::new(vec![
            game("A", false, 150, "PC", false),
            game("B", false, 50, "PC", false),
        ]);

        let summary = catalog.summary();
        assert_eq!(summary.average_percentage, Some(100.0));
        assert_eq!(summary.platforms, vec![("PC".to_string(), 2)]);
    }

    #[test]
    fn suggest_only_picks_unfinished_games() {
        let catalog = sample();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let pick = catalog.suggest(&mut rng).unwrap();
            assert!(!pick.completed, "{pick} is already completed");
        }
    }

    #[test]
    fn suggest_returns_none_when_everything_is_done() {
        let catalog = Catalog::new(vec![game("Celeste", true, 100, "Switch", false)]);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(catalog.suggest(&mut rng).is_none());
        assert!(Catalog::default().suggest(&mut rng).is_none());
    }

    #[test]
    fn flag_suspicious_counts_entries_not_problems() {
        let catalog = Catalog::new(vec![
            game("", false, 150, "PC", false),
            game("Fine", false, 50, "PC", false),
            game("Negative", false, -3, "PC", false),
        ]);

        assert_eq!(catalog.flag_suspicious(), 2);
        assert_eq!(catalog.games()[0].completion_percentage, 150);
    }

    #[test]
    fn json_array_preserves_order() {
        let catalog = sample();
        let value = to_json(&catalog);

        assert!(value.is_array());
        assert_eq!(value.len(), 4);
        assert_eq!(value[0]["title"], "Celeste");
        assert_eq!(value[3]["title"], "Bloodborne");
    }
}
