use glam::Vec2;

use crate::components::Side;
use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Point of the box closest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = self.closest_point(center);
        (center - closest).length_squared() <= radius * radius
    }
}

/// Purely visual rink markings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkingStyle {
    CenterLine,
    FaceoffCircle,
    Crease,
    BorderDash,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkingShape {
    Rect(Aabb),
    Circle { center: Vec2, radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marking {
    pub style: MarkingStyle,
    pub shape: MarkingShape,
}

/// Goal sensor placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalArea {
    /// Side credited when the puck enters this goal
    pub scorer: Side,
    pub area: Aabb,
}

/// Static stage: field bounds, goals and markings
#[derive(Debug, Clone)]
pub struct Rink {
    pub width: f32,
    pub height: f32,
    pub goals: [GoalArea; 2],
    pub markings: Vec<Marking>,
}

impl Rink {
    const DASH_SPACING: f32 = 40.0;
    const DASH_LONG: f32 = 20.0;
    const DASH_SHORT: f32 = 10.0;
    const CENTER_LINE_THICKNESS: f32 = 4.0;
    const FACEOFF_RADIUS: f32 = 50.0;
    const CREASE_SIZE: Vec2 = Vec2::new(120.0, 40.0);

    pub fn new(config: &Config) -> Self {
        let width = config.arena_width;
        let height = config.arena_height;
        let center_x = width / 2.0;
        let goal_size = Vec2::new(config.goal_width, config.goal_height);

        // Top goal is the bot's net, so entering it credits the player
        let goals = [
            GoalArea {
                scorer: Side::Player,
                area: Aabb::from_center_size(Vec2::new(center_x, goal_size.y / 2.0), goal_size),
            },
            GoalArea {
                scorer: Side::Bot,
                area: Aabb::from_center_size(
                    Vec2::new(center_x, height - goal_size.y / 2.0),
                    goal_size,
                ),
            },
        ];

        Self {
            width,
            height,
            goals,
            markings: Self::markings(width, height),
        }
    }

    fn markings(width: f32, height: f32) -> Vec<Marking> {
        let center = Vec2::new(width / 2.0, height / 2.0);
        let mut markings = vec![
            Marking {
                style: MarkingStyle::CenterLine,
                shape: MarkingShape::Rect(Aabb::from_center_size(
                    center,
                    Vec2::new(width, Self::CENTER_LINE_THICKNESS),
                )),
            },
            Marking {
                style: MarkingStyle::FaceoffCircle,
                shape: MarkingShape::Circle {
                    center,
                    radius: Self::FACEOFF_RADIUS,
                },
            },
            Marking {
                style: MarkingStyle::Crease,
                shape: MarkingShape::Rect(Aabb::from_center_size(
                    Vec2::new(center.x, height - Self::CREASE_SIZE.y / 2.0),
                    Self::CREASE_SIZE,
                )),
            },
            Marking {
                style: MarkingStyle::Crease,
                shape: MarkingShape::Rect(Aabb::from_center_size(
                    Vec2::new(center.x, Self::CREASE_SIZE.y / 2.0),
                    Self::CREASE_SIZE,
                )),
            },
        ];

        let dash = |center: Vec2, size: Vec2| Marking {
            style: MarkingStyle::BorderDash,
            shape: MarkingShape::Rect(Aabb::from_center_size(center, size)),
        };

        let horizontal = Vec2::new(Self::DASH_LONG, Self::DASH_SHORT);
        let mut x = 0.0;
        while x < width {
            markings.push(dash(Vec2::new(x, 0.0), horizontal));
            markings.push(dash(Vec2::new(x, height), horizontal));
            x += Self::DASH_SPACING;
        }

        let vertical = Vec2::new(Self::DASH_SHORT, Self::DASH_LONG);
        let mut y = 0.0;
        while y < height {
            markings.push(dash(Vec2::new(0.0, y), vertical));
            markings.push(dash(Vec2::new(width, y), vertical));
            y += Self::DASH_SPACING;
        }

        markings
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Y coordinate splitting the bot's half (above) from the player's half
    pub fn midline(&self) -> f32 {
        self.height / 2.0
    }

    pub fn puck_spawn(&self) -> Vec2 {
        self.center()
    }

    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        let y = match side {
            Side::Player => config.player_spawn_y,
            Side::Bot => config.bot_spawn_y,
        };
        Vec2::new(self.width / 2.0, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersects_circle() {
        let aabb = Aabb::from_center_size(Vec2::new(400.0, 10.0), Vec2::new(200.0, 20.0));
        assert!(aabb.intersects_circle(Vec2::new(400.0, 25.0), 15.0));
        assert!(aabb.intersects_circle(Vec2::new(499.0, 15.0), 15.0));
        assert!(!aabb.intersects_circle(Vec2::new(400.0, 40.0), 15.0));
        assert!(!aabb.intersects_circle(Vec2::new(530.0, 10.0), 15.0));
    }

    #[test]
    fn test_goal_layout() {
        let rink = Rink::new(&Config::new());
        let top = rink.goals[0];
        let bottom = rink.goals[1];

        assert_eq!(top.scorer, Side::Player);
        assert_eq!(top.area.center(), Vec2::new(400.0, 10.0));
        assert_eq!(top.area.size(), Vec2::new(200.0, 20.0));

        assert_eq!(bottom.scorer, Side::Bot);
        assert_eq!(bottom.area.center(), Vec2::new(400.0, 590.0));
    }

    #[test]
    fn test_spawns_and_midline() {
        let config = Config::new();
        let rink = Rink::new(&config);
        assert_eq!(rink.midline(), 300.0);
        assert_eq!(rink.puck_spawn(), Vec2::new(400.0, 300.0));
        assert_eq!(rink.paddle_spawn(Side::Player, &config), Vec2::new(400.0, 550.0));
        assert_eq!(rink.paddle_spawn(Side::Bot, &config), Vec2::new(400.0, 50.0));
    }

    #[test]
    fn test_border_dashes() {
        let rink = Rink::new(&Config::new());
        let dashes = rink
            .markings
            .iter()
            .filter(|m| m.style == MarkingStyle::BorderDash)
            .count();
        // 20 columns top and bottom, 15 rows left and right
        assert_eq!(dashes, 20 * 2 + 15 * 2);
        assert_eq!(
            rink.markings
                .iter()
                .filter(|m| m.style == MarkingStyle::Crease)
                .count(),
            2
        );
    }
}
