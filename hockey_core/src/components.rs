use glam::Vec2;

use crate::map::Aabb;

/// Which goalie a score or paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Bot,
}

/// Collision shape of an arcade body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { half: Vec2 },
    Circle { radius: f32 },
}

impl Shape {
    /// Distance from the body center to its bounding box edge, per axis
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Rect { half } => half,
            Shape::Circle { radius } => Vec2::splat(radius),
        }
    }
}

/// Velocity-based arcade body shared by paddles, puck and goals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub shape: Shape,
    pub immovable: bool,
    pub bounce: f32,
    pub drag: f32,
    pub collide_world_bounds: bool,
}

impl Body {
    pub fn rect(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            shape: Shape::Rect { half: size / 2.0 },
            immovable: false,
            bounce: 0.0,
            drag: 0.0,
            collide_world_bounds: false,
        }
    }

    pub fn circle(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            shape: Shape::Circle { radius },
            immovable: false,
            bounce: 0.0,
            drag: 0.0,
            collide_world_bounds: false,
        }
    }

    pub fn immovable(mut self) -> Self {
        self.immovable = true;
        self
    }

    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    pub fn collide_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn bounds(&self) -> Aabb {
        let half = self.shape.half_extents();
        Aabb::new(self.pos - half, self.pos + half)
    }

    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Rect { .. } => None,
        }
    }
}

/// Marker for the keyboard-controlled goalie
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerPaddle;

/// Marker for the scripted goalie
#[derive(Debug, Clone, Copy, Default)]
pub struct BotPaddle;

/// Marker for the puck
#[derive(Debug, Clone, Copy, Default)]
pub struct Puck;

/// Non-colliding region that registers a score on overlap with the puck
#[derive(Debug, Clone, Copy)]
pub struct GoalSensor {
    pub scorer: Side,
}

/// Directional keys held during this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Keys {
    pub fn none() -> Self {
        Self::default()
    }
}
