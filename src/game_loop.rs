/// The game state machine: Running ⇄ Paused, Running → GameOver.
///
/// `update` is the per-frame simulation and touches no I/O apart from the
/// audio player owned by the sound scheduler.  `frame` and `run` wire it to
/// the input, renderer and clock collaborators.

use std::io;

use log::{debug, info};
use rand::Rng;

use crate::config::{ConfigError, GameConfig};
use crate::entities::{Catcher, Drawable, FallingObject, Rect, GREEN, LIGHT_BLUE, WHITE};
use crate::lives::LivesTracker;
use crate::platform::{AudioPlayer, Event, FrameClock, InputSource, Key, Renderer};
use crate::score::ScoreLevel;
use crate::sound::{SoundClip, SoundScheduler};
use crate::spawner::ObjectSpawner;

pub const PAUSE_TEXT: &str = "Game is Paused";
pub const GAME_OVER_TEXT: &str = "Game Over";
/// Distance of the score text from the right edge.
const SCORE_OFFSET: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// What a single running frame did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub missed: u32,
    pub caught: u32,
    pub leveled_up: bool,
    pub bonus_spawned: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    GameOver { score: u32, level: u32 },
}

pub struct GameLoop<A: AudioPlayer, G: Rng> {
    config: GameConfig,
    rng: G,
    spawner: ObjectSpawner,
    catcher: Catcher,
    score: ScoreLevel,
    lives: LivesTracker,
    sound: SoundScheduler<A>,
    status: GameStatus,
    /// Frames until the next bonus monster; `None` when no bonus is pending.
    countdown: Option<u32>,
}

impl<A: AudioPlayer, G: Rng> GameLoop<A, G> {
    /// Set up a fresh game with one monster already falling.  The config is
    /// validated first; a rejected config never reaches the RNG.
    pub fn new(config: GameConfig, audio: A, mut rng: G) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut spawner = ObjectSpawner::new(&config);
        spawner.spawn(&mut rng);

        let catcher = Catcher::new(
            (config.screen_width - config.basket_width) / 2,
            config.sky_depth - config.basket_depth,
            config.basket_width,
            config.basket_depth,
        );
        let mut sound = SoundScheduler::new(
            audio,
            config.sound_delay,
            SoundClip::Move1,
            config.sound_wait_limit(),
        );
        if let Some(clip) = config.secondary_sound {
            sound = sound.with_secondary(clip);
        }

        Ok(GameLoop {
            lives: LivesTracker::initialize(config.initial_lives),
            score: ScoreLevel::new(),
            config,
            rng,
            spawner,
            catcher,
            sound,
            status: GameStatus::Running,
            countdown: None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn spawner(&self) -> &ObjectSpawner {
        &self.spawner
    }

    pub fn spawner_mut(&mut self) -> &mut ObjectSpawner {
        &mut self.spawner
    }

    pub fn catcher(&self) -> &Catcher {
        &self.catcher
    }

    pub fn score(&self) -> &ScoreLevel {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut ScoreLevel {
        &mut self.score
    }

    pub fn lives(&self) -> &LivesTracker {
        &self.lives
    }

    pub fn sound(&self) -> &SoundScheduler<A> {
        &self.sound
    }

    pub fn countdown(&self) -> Option<u32> {
        self.countdown
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// React to one input event.  Space toggles pause (drawing or erasing the
    /// banner once, on the transition); quit is honoured in every state.
    pub fn handle_event<R: Renderer>(
        &mut self,
        event: Event,
        renderer: &mut R,
    ) -> io::Result<Control> {
        match event {
            Event::Quit => return Ok(Control::Quit),
            Event::KeyDown(Key::Char(' ')) => match self.status {
                GameStatus::Running => {
                    self.status = GameStatus::Paused;
                    info!("paused");
                    self.draw_pause_banner(renderer)?;
                }
                GameStatus::Paused => {
                    self.status = GameStatus::Running;
                    info!("resumed");
                    self.erase_pause_banner(renderer)?;
                }
                GameStatus::GameOver => {}
            },
            Event::KeyDown(_) => {}
        }
        Ok(Control::Continue)
    }

    // ── Per-frame simulation ──────────────────────────────────────────────────

    /// Advance one running frame.  Steps run in a fixed order; in particular
    /// landings are resolved before catches, so a monster that is both on the
    /// grass and in the basket counts as a miss.
    pub fn update(&mut self, pointer_x: i32) -> FrameReport {
        let mut report = FrameReport::default();

        // ── 1. Move every monster ────────────────────────────────────────────
        for object in self.spawner.live_mut().iter_mut() {
            object.advance(&mut self.rng);
        }

        // ── 2. Landings ──────────────────────────────────────────────────────
        let floor = self.config.floor_line();
        let landed: Vec<FallingObject> = {
            let live = self.spawner.live_mut();
            let (gone, kept): (Vec<_>, Vec<_>) = live.drain(..).partition(|o| o.y > floor);
            *live = kept;
            gone
        };
        for object in landed {
            debug!("monster #{} landed at x={}", object.id, object.x);
            self.sound.override_and_play(true, SoundClip::Landed);
            self.lives.lose_life();
            report.missed += 1;
            if self.lives.has_lives_remaining() {
                self.spawner.spawn(&mut self.rng);
            }
        }

        // ── 3. Catches ───────────────────────────────────────────────────────
        let basket = self.catcher.rect();
        let caught: Vec<FallingObject> = {
            let live = self.spawner.live_mut();
            let (hit, kept): (Vec<_>, Vec<_>) =
                live.drain(..).partition(|o| o.rect().intersects(&basket));
            *live = kept;
            hit
        };
        for object in caught {
            debug!("monster #{} caught at x={}", object.id, object.x);
            self.sound.override_and_play(true, SoundClip::Caught);
            self.score.add_score();
            report.caught += 1;
            self.spawner.spawn(&mut self.rng);
        }

        // ── 4. Level up ──────────────────────────────────────────────────────
        if self.score.check_level_up() {
            let frames = self
                .rng
                .gen_range(self.config.countdown_min..=self.config.countdown_max());
            self.countdown = Some(frames);
            self.sound.adjust_cooldown(-1);
            report.leveled_up = true;
            info!(
                "level {} reached at score {}; bonus monster in {} frames",
                self.score.level(),
                self.score.score(),
                frames
            );
        }

        // ── 5. Bonus countdown ───────────────────────────────────────────────
        match self.countdown {
            Some(0) => {
                self.spawner.spawn(&mut self.rng);
                self.countdown = None;
                report.bonus_spawned = true;
            }
            Some(n) => self.countdown = Some(n - 1),
            None => {}
        }

        // ── 6. Basket follows the pointer ────────────────────────────────────
        self.catcher.follow_pointer(pointer_x);

        // ── 7. Ambient sound ─────────────────────────────────────────────────
        self.sound.maybe_play_ambient();

        report
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Paint the sky and grass once, before the first frame.
    pub fn draw_background<R: Renderer>(&self, renderer: &mut R) -> io::Result<()> {
        let c = &self.config;
        renderer.fill_region(LIGHT_BLUE, Rect::new(0, 0, c.screen_width, c.sky_depth))?;
        renderer.fill_region(
            GREEN,
            Rect::new(0, c.sky_depth, c.screen_width, c.grass_depth()),
        )?;
        renderer.flip()
    }

    /// Redraw every entity, the hearts and the score.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> io::Result<()> {
        let mut entities: Vec<&dyn Drawable> = Vec::new();
        for object in self.spawner.live() {
            entities.push(object);
        }
        entities.push(&self.catcher);
        for marker in self.lives.markers() {
            entities.push(marker);
        }

        renderer.clear(LIGHT_BLUE)?;
        renderer.draw(&entities)?;

        let text = format!("Score: {}", self.score.score());
        renderer.draw_text(&text, self.config.screen_width - SCORE_OFFSET, 0, WHITE, LIGHT_BLUE)
    }

    fn centred_x<R: Renderer>(&self, renderer: &R, text: &str) -> i32 {
        let (width, _) = renderer.text_size(text);
        self.config.screen_width / 2 - width / 2
    }

    fn draw_pause_banner<R: Renderer>(&self, renderer: &mut R) -> io::Result<()> {
        let x = self.centred_x(renderer, PAUSE_TEXT);
        renderer.draw_text(PAUSE_TEXT, x, self.config.screen_depth / 2, WHITE, LIGHT_BLUE)
    }

    fn erase_pause_banner<R: Renderer>(&self, renderer: &mut R) -> io::Result<()> {
        let (width, height) = renderer.text_size(PAUSE_TEXT);
        let x = self.centred_x(renderer, PAUSE_TEXT);
        renderer.fill_region(
            LIGHT_BLUE,
            Rect::new(x, self.config.screen_depth / 2, width, height),
        )
    }

    fn draw_game_over<R: Renderer>(&self, renderer: &mut R) -> io::Result<()> {
        let x = self.centred_x(renderer, GAME_OVER_TEXT);
        renderer.draw_text(GAME_OVER_TEXT, x, self.config.screen_depth / 2, WHITE, LIGHT_BLUE)?;
        renderer.flip()
    }

    // ── Driving the loop ──────────────────────────────────────────────────────

    /// One loop iteration: input, simulation and drawing (unless paused),
    /// frame throttling, then flip.
    pub fn frame<I, R, C>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        clock: &mut C,
    ) -> io::Result<Control>
    where
        I: InputSource,
        R: Renderer,
        C: FrameClock,
    {
        for event in input.poll_events()? {
            if self.handle_event(event, renderer)? == Control::Quit {
                return Ok(Control::Quit);
            }
        }

        if self.status == GameStatus::Running {
            let report = self.update(input.pointer_x());
            if report.missed > 0 {
                debug!("{} lives left", self.lives.remaining());
            }
            self.render(renderer)?;
        }

        clock.tick(self.config.frames_per_second);
        renderer.flip()?;

        if !self.lives.has_lives_remaining() {
            self.status = GameStatus::GameOver;
        }
        Ok(Control::Continue)
    }

    /// Play until the player quits or runs out of lives.
    pub fn run<I, R, C>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        clock: &mut C,
    ) -> io::Result<Outcome>
    where
        I: InputSource,
        R: Renderer,
        C: FrameClock,
    {
        info!("game started with {} lives", self.lives.remaining());
        self.draw_background(renderer)?;
        // Discard anything typed before the game began.
        input.poll_events()?;

        while self.status != GameStatus::GameOver {
            if self.frame(input, renderer, clock)? == Control::Quit {
                info!("quit at score {}", self.score.score());
                return Ok(Outcome::Quit);
            }
        }

        info!(
            "game over: score {} at level {}",
            self.score.score(),
            self.score.level()
        );
        self.draw_game_over(renderer)?;
        clock.hold(self.config.game_over_hold());
        Ok(Outcome::GameOver {
            score: self.score.score(),
            level: self.score.level(),
        })
    }
}
