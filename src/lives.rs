/// Remaining lives and their on-screen heart markers.

use log::debug;

use crate::entities::LifeMarker;

#[derive(Clone, Debug, PartialEq)]
pub struct LivesTracker {
    remaining: u32,
    markers: Vec<LifeMarker>,
}

impl LivesTracker {
    /// Start with `count` lives, markers indexed `0..count`.
    pub fn initialize(count: u32) -> Self {
        LivesTracker {
            remaining: count,
            markers: (0..count).map(|index| LifeMarker { index }).collect(),
        }
    }

    /// Take one life away and drop the highest-indexed heart.  Does nothing
    /// once the count has reached zero.
    pub fn lose_life(&mut self) {
        if self.remaining == 0 {
            debug!("lose_life called with no lives left; ignored");
            return;
        }
        self.remaining -= 1;
        let gone = self.remaining;
        self.markers.retain(|m| m.index != gone);
    }

    pub fn has_lives_remaining(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn markers(&self) -> &[LifeMarker] {
        &self.markers
    }
}
