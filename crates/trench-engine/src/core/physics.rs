// ---------------------------------------------------------------------------
// 1D point-mass physics.
//
// Two boundary policies:
// - a Body with a reflect bound flips its own direction when it leaves
//   [0, bound] (no velocity loss);
// - a BoundedWorld clamps every body into [0, width] and zeroes velocity
//   on clamp (inelastic wall stop).
// ---------------------------------------------------------------------------

/// A 1D point mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: f32,
    pub velocity: f32,
    pub acceleration: f32,
    /// -1, 0 or +1. Acceleration is applied along this sign.
    pub direction: f32,
    /// Upper bound for the self-reflect rule. `None` disables reflection.
    reflect_bound: Option<f32>,
}

impl Body {
    /// Create a body at rest, facing +1.
    pub fn new(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            acceleration: 0.0,
            direction: 1.0,
            reflect_bound: None,
        }
    }

    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Enable the self-reflect rule over [0, bound].
    pub fn with_reflect_bound(mut self, bound: f32) -> Self {
        self.reflect_bound = Some(bound);
        self
    }

    pub fn reflect_bound(&self) -> Option<f32> {
        self.reflect_bound
    }

    /// Steer the body: sets acceleration magnitude and direction sign.
    pub fn steer(&mut self, acceleration: f32, direction: f32) {
        self.acceleration = acceleration;
        self.direction = if direction > 0.0 {
            1.0
        } else if direction < 0.0 {
            -1.0
        } else {
            0.0
        };
    }

    /// Integrate one step of `delta` seconds.
    pub fn update(&mut self, delta: f32) {
        self.velocity += self.acceleration * delta * self.direction;
        self.position += self.velocity * delta;
        if let Some(bound) = self.reflect_bound {
            if self.position < 0.0 || self.position > bound {
                self.direction = -self.direction;
            }
        }
    }
}

/// Handle to a body owned by a `BoundedWorld`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

/// Owns a set of bodies and keeps all of them inside [0, width].
#[derive(Debug, Clone)]
pub struct BoundedWorld {
    width: f32,
    bodies: Vec<Body>,
}

impl BoundedWorld {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            bodies: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Add a body to the world. Returns its handle.
    pub fn spawn(&mut self, body: Body) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() as u32 - 1)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0 as usize)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0 as usize)
    }

    /// Position of a body, or 0.0 for an unknown handle.
    pub fn position(&self, handle: BodyHandle) -> f32 {
        self.body(handle).map(|b| b.position).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Step every body, then clamp it into [0, width].
    pub fn update(&mut self, delta: f32) {
        let width = self.width;
        for body in self.bodies.iter_mut() {
            body.update(delta);
            if body.position < 0.0 {
                body.position = 0.0;
                body.velocity = 0.0;
            }
            if body.position > width {
                body.position = width;
                body.velocity = 0.0;
            }
        }
    }
}
