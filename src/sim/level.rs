//! Enemy categories and level definitions

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Enemy category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Text-generation models
    Text,
    /// Video-generation models
    Video,
    /// Boss minions, only dropped during the boss fight
    Glitch,
}

impl Category {
    /// Display-name pool for this category
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Category::Text => &["GPT", "Gemini", "Llama", "Claude"],
            Category::Video => &["Sora", "Runway", "Kling", "Haiper"],
            Category::Glitch => &["Deepfake", "Hallucination", "Spam"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Text => "TEXT",
            Category::Video => "VIDEO",
            Category::Glitch => "GLITCH",
        }
    }
}

/// How a level is won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelGoal {
    /// Reach this many points within the level
    Score { threshold: u64 },
    /// Boss fight: the boss spawns with this many hit points and must reach 0
    Boss { hp: u32 },
    /// Never completes; the run ends only by losing
    Endless,
}

/// One level of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    /// One-line briefing shown on the HUD
    pub instruction: String,
    /// Category that scores when destroyed
    pub target: Category,
    /// Category that costs fuel when shot or touched (`None` in the boss fight,
    /// where every contact punishes)
    pub penalty: Option<Category>,
    /// Downward speed of enemies and power-ups, per tick
    pub scroll_speed: f32,
    /// Probability that a regular spawn is the target category
    pub target_weight: f64,
    /// Shooting the penalty category costs fuel and pays nothing; when off,
    /// every bullet kill pays its category's points
    #[serde(default = "default_shot_penalty")]
    pub shot_penalty: bool,
    pub goal: LevelGoal,
}

fn default_shot_penalty() -> bool {
    true
}

impl LevelDef {
    /// The three-level campaign: text hunt, video hunt, boss
    pub fn campaign() -> Vec<LevelDef> {
        vec![
            LevelDef {
                name: "Text Sweep".to_string(),
                instruction: "Shoot TEXT AIs. Avoid VIDEO AIs.".to_string(),
                target: Category::Text,
                penalty: Some(Category::Video),
                scroll_speed: 3.5,
                target_weight: 0.5,
                shot_penalty: true,
                goal: LevelGoal::Score { threshold: 1500 },
            },
            LevelDef {
                name: "Video Purge".to_string(),
                instruction: "Now shoot VIDEO AIs. Avoid TEXT AIs.".to_string(),
                target: Category::Video,
                penalty: Some(Category::Text),
                scroll_speed: 4.2,
                target_weight: 0.5,
                shot_penalty: true,
                goal: LevelGoal::Score { threshold: 1500 },
            },
            LevelDef {
                name: "Core Meltdown".to_string(),
                instruction: "Destroy the rogue core. Dodge its glitches.".to_string(),
                target: Category::Glitch,
                penalty: None,
                scroll_speed: 4.5,
                target_weight: 1.0,
                shot_penalty: true,
                goal: LevelGoal::Boss { hp: 30 },
            },
        ]
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.goal, LevelGoal::Boss { .. })
    }

    /// Whether touching an enemy of this category applies the escalating penalty
    pub fn punishes_contact(&self, category: Category) -> bool {
        self.is_boss() || self.penalty == Some(category)
    }

    /// Categories the spawner may draw from: (target, other)
    pub fn spawn_categories(&self) -> (Category, Category) {
        (self.target, self.penalty.unwrap_or(self.target))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scroll_speed.is_finite() || self.scroll_speed < 0.0 {
            return Err(ConfigError::invalid("levels.scroll_speed", "must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.target_weight) {
            return Err(ConfigError::invalid("levels.target_weight", "must be in [0, 1]"));
        }
        if self.penalty == Some(self.target) {
            return Err(ConfigError::invalid(
                "levels.penalty",
                format!("level `{}` targets and penalizes the same category", self.name),
            ));
        }
        if let LevelGoal::Boss { hp: 0 } = self.goal {
            return Err(ConfigError::invalid("levels.goal", "boss hp must be > 0"));
        }
        Ok(())
    }
}
