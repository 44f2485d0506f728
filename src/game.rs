/// A single video-game entry in a user's catalog.
///
/// Values are stored exactly as given. Nothing here clamps the percentage or
/// rejects an empty title; use [`Game::percentage_in_range`] and
/// [`Game::has_title`] to flag such entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub title: String,
    pub completed: bool,
    pub description: String,
    /// Intended to be 0..=100.
    pub completion_percentage: i64,
    pub platform: String,
    pub trophy_hunting: bool,
}

impl Game {
    pub const fn new(
        title: String,
        completed: bool,
        description: String,
        completion_percentage: i64,
        platform: String,
        trophy_hunting: bool,
    ) -> Self {
        Self {
            title,
            completed,
            description,
            completion_percentage,
            platform,
            trophy_hunting,
        }
    }

    pub const fn percentage_in_range(&self) -> bool {
        self.completion_percentage >= 0 && self.completion_percentage <= 100
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn to_json(&self) -> json::JsonValue {
        let mut obj = json::JsonValue::new_object();
        obj["title"] = self.title.as_str().into();
        obj["completed"] = self.completed.into();
        obj["description"] = self.description.as_str().into();
        obj["completionPercentage"] = self.completion_percentage.into();
        obj["platform"] = self.platform.as_str().into();
        obj["trophyHunting"] = self.trophy_hunting.into();
        obj
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let done = if self.completed { "x" } else { " " };
        write!(
            f,
            "[{done}] {} ({}) {}%",
            self.title, self.platform, self.completion_percentage
        )?;

        if self.trophy_hunting {
            write!(f, " [trophy hunting]")?;
        }

        Ok(())
    }
}
