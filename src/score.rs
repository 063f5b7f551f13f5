/// Score keeping and level progression.

/// A new level is reached every time the score lands on a multiple of this.
pub const POINTS_PER_LEVEL: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreLevel {
    score: u32,
    level: u32,
    last_seen: u32,
}

impl Default for ScoreLevel {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreLevel {
    pub fn new() -> Self {
        ScoreLevel { score: 0, level: 1, last_seen: 0 }
    }

    pub fn add_score(&mut self) {
        self.score += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Edge-triggered level check.  May be called any number of times per
    /// score value: only the first call after the score changes can return
    /// `true`, and only when the new score is a multiple of
    /// `POINTS_PER_LEVEL`.
    pub fn check_level_up(&mut self) -> bool {
        if self.score == self.last_seen {
            return false;
        }
        self.last_seen = self.score;
        if self.score % POINTS_PER_LEVEL == 0 {
            self.level += 1;
            return true;
        }
        false
    }
}
