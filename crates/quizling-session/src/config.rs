use serde::{Deserialize, Serialize};

/// Per-session configuration: time limit, lives, and points per correct
/// answer. Defaults to 60 seconds, 3 lives, 10 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_initial_lives")]
    pub initial_lives: u32,
    #[serde(default = "default_award_points")]
    pub award_points: u32,
}

fn default_duration_ms() -> u64 {
    60_000
}

fn default_initial_lives() -> u32 {
    3
}

fn default_award_points() -> u32 {
    10
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            initial_lives: default_initial_lives(),
            award_points: default_award_points(),
        }
    }
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    duration_ms: Option<u64>,
    initial_lives: Option<u32>,
    award_points: Option<u32>,
}

impl SessionConfigBuilder {
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn initial_lives(mut self, lives: u32) -> Self {
        self.initial_lives = Some(lives);
        self
    }

    pub fn award_points(mut self, points: u32) -> Self {
        self.award_points = Some(points);
        self
    }

    pub fn build(self) -> SessionConfig {
        let default = SessionConfig::default();
        SessionConfig {
            duration_ms: self.duration_ms.unwrap_or(default.duration_ms),
            initial_lives: self.initial_lives.unwrap_or(default.initial_lives),
            award_points: self.award_points.unwrap_or(default.award_points),
        }
    }
}
