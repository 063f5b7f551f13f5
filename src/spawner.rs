/// Monster creation and the live set of falling objects.

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::FallingObject;

#[derive(Clone, Debug)]
pub struct ObjectSpawner {
    width: i32,
    height: i32,
    max_x: i32,
    wiggle: i32,
    max_speed: i32,
    next_id: u32,
    live: Vec<FallingObject>,
}

impl ObjectSpawner {
    pub fn new(config: &GameConfig) -> Self {
        ObjectSpawner {
            width: config.monster_width,
            height: config.monster_depth,
            max_x: config.monster_max_x(),
            wiggle: config.wiggle,
            max_speed: config.max_speed,
            next_id: 0,
            live: Vec::new(),
        }
    }

    /// Drop a new monster in at the top edge with a random column and a
    /// random speed in `1..=max_speed`.
    pub fn spawn(&mut self, rng: &mut impl Rng) -> &FallingObject {
        let object = FallingObject {
            id: self.next_id,
            x: rng.gen_range(0..=self.max_x),
            y: 0,
            width: self.width,
            height: self.height,
            drift: self.wiggle,
            speed: rng.gen_range(1..=self.max_speed),
            max_x: self.max_x,
        };
        self.next_id += 1;
        debug!("spawned monster #{} at x={} speed={}", object.id, object.x, object.speed);
        self.live.push(object);
        &self.live[self.live.len() - 1]
    }

    pub fn live(&self) -> &[FallingObject] {
        &self.live
    }

    /// The game loop removes caught and landed monsters through this.
    pub fn live_mut(&mut self) -> &mut Vec<FallingObject> {
        &mut self.live
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
