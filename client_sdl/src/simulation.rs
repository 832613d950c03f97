use game_core::systems::CollisionPolicy;
use game_core::{snapshot, spawn_match, step, Config, KeyState, PixelBuffer, Snapshot};
use hecs::World;

/// Single-player match against the AI, with its own framebuffer
pub struct LocalGame {
    pub world: World,
    pub config: Config,
    pub policy: CollisionPolicy,
    buffer: PixelBuffer,
    frames: u64,
}

impl LocalGame {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        spawn_match(&mut world, &config);

        Self {
            world,
            config,
            policy: CollisionPolicy::default(),
            buffer: PixelBuffer::from_config(&config),
            frames: 0,
        }
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Render the current state and advance one frame
    pub fn step(&mut self, keys: &KeyState) {
        step(
            &mut self.world,
            &self.config,
            self.policy,
            keys,
            &mut self.buffer,
        );
        self.frames += 1;
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        snapshot(&self.world)
    }
}
