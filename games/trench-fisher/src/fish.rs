use trench_engine::{Body, BodyHandle, BoundedWorld, Rng};

/// Acceleration applied to the hook while a direction is held.
pub const HOOK_ACCEL: f32 = 100.0;
/// Seconds of hooked time needed to land a fish.
const CATCH_SECONDS: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishType {
    pub name: &'static str,
    pub accel: f32,
}

pub const FISH_TYPES: [FishType; 6] = [
    FishType { name: "Tigerfish", accel: 32.0 },
    FishType { name: "Vundu", accel: 24.0 },
    FishType { name: "bream", accel: 12.0 },
    FishType { name: "Tilapia", accel: 22.0 },
    FishType { name: "pike", accel: 24.0 },
    FishType { name: "catfish", accel: 40.0 },
];

impl FishType {
    pub fn random(rng: &mut Rng) -> FishType {
        rng.choose(&FISH_TYPES).copied().unwrap_or(FISH_TYPES[0])
    }
}

/// The hook-and-fish race on a bar a quarter of the canvas wide.
///
/// The hook is steered and stops dead at the bar ends; the fish swims on its
/// own and turns around at them. Keeping the hook within an eighth of the bar
/// of the fish fills `progress`; at 1.0 the fish is caught.
#[derive(Debug, Clone)]
pub struct Minigame {
    world: BoundedWorld,
    hook: BodyHandle,
    fish: BodyHandle,
    fish_type: FishType,
    bar_width: f32,
    progress: f32,
    hooked: bool,
}

impl Minigame {
    pub fn new(canvas_width: f32, fish_type: FishType) -> Self {
        let bar_width = canvas_width / 4.0;
        let mut world = BoundedWorld::new(bar_width);
        let fish = world.spawn(
            Body::new(bar_width / 2.0)
                .with_acceleration(fish_type.accel)
                .with_reflect_bound(bar_width),
        );
        // Starts off the bar; the world clamps it on the first tick.
        let hook = world.spawn(Body::new(canvas_width / 2.0));
        Self {
            world,
            hook,
            fish,
            fish_type,
            bar_width,
            progress: 0.0,
            hooked: false,
        }
    }

    /// Advance one tick. `steer` is the held direction: -1, 0 or +1.
    pub fn tick(&mut self, delta: f32, steer: f32) {
        if let Some(hook) = self.world.body_mut(self.hook) {
            hook.steer(HOOK_ACCEL, steer);
        }
        self.world.update(delta);

        self.hooked = (self.hook_position() - self.fish_position()).abs() < self.bar_width / 8.0;
        if self.hooked {
            self.progress += delta / CATCH_SECONDS;
        }
    }

    pub fn is_caught(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn is_hooked(&self) -> bool {
        self.hooked
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn fish_type(&self) -> FishType {
        self.fish_type
    }

    pub fn bar_width(&self) -> f32 {
        self.bar_width
    }

    pub fn hook_position(&self) -> f32 {
        self.world.position(self.hook)
    }

    pub fn fish_position(&self) -> f32 {
        self.world.position(self.fish)
    }

    /// Swimming direction of the fish (-1 or +1).
    pub fn fish_direction(&self) -> f32 {
        self.world.body(self.fish).map(|b| b.direction).unwrap_or(1.0)
    }

    pub fn world(&self) -> &BoundedWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut BoundedWorld {
        &mut self.world
    }

    pub fn hook(&self) -> BodyHandle {
        self.hook
    }
}
