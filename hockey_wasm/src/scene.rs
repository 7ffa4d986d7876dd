//! Turns a simulation snapshot into an ordered list of instanced draws

use hockey_core::{Aabb, Body, MarkingShape, MarkingStyle, Rink, Shape, Snapshot};

/// Instance data for rendering (matches shader InstanceInput)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    Quad,
    Circle,
}

/// Consecutive instances drawn with the same mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    pub mesh: MeshKind,
    pub start: u32,
    pub end: u32,
}

const fn rgb(hex: u32, alpha: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

pub const BACKGROUND: [f32; 4] = rgb(0xaad7f9, 1.0);
pub const PLAYER: [f32; 4] = rgb(0x228b22, 1.0);
pub const BOT: [f32; 4] = rgb(0x8b0000, 1.0);
pub const PUCK: [f32; 4] = rgb(0x000000, 1.0);
pub const GOAL: [f32; 4] = rgb(0xffd700, 0.3);

fn marking_tint(style: MarkingStyle) -> [f32; 4] {
    match style {
        MarkingStyle::CenterLine | MarkingStyle::BorderDash => rgb(0xffffff, 1.0),
        MarkingStyle::FaceoffCircle => rgb(0xffffff, 0.2),
        MarkingStyle::Crease => rgb(0xeeeeee, 0.3),
    }
}

/// Everything to draw this frame, back to front
#[derive(Debug, Default)]
pub struct Scene {
    pub instances: Vec<InstanceData>,
    pub batches: Vec<Batch>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.batches.clear();
    }

    fn push(&mut self, mesh: MeshKind, instance: InstanceData) {
        let index = self.instances.len() as u32;
        self.instances.push(instance);
        match self.batches.last_mut() {
            Some(batch) if batch.mesh == mesh && batch.end == index => batch.end += 1,
            _ => self.batches.push(Batch {
                mesh,
                start: index,
                end: index + 1,
            }),
        }
    }

    fn push_rect(&mut self, rect: Aabb, tint: [f32; 4]) {
        let center = rect.center();
        let size = rect.size();
        self.push(
            MeshKind::Quad,
            InstanceData {
                transform: [center.x, center.y, size.x, size.y],
                tint,
            },
        );
    }

    fn push_body(&mut self, body: &Body, tint: [f32; 4]) {
        match body.shape {
            Shape::Rect { half } => self.push(
                MeshKind::Quad,
                InstanceData {
                    transform: [body.pos.x, body.pos.y, half.x * 2.0, half.y * 2.0],
                    tint,
                },
            ),
            Shape::Circle { radius } => self.push(
                MeshKind::Circle,
                InstanceData {
                    transform: [body.pos.x, body.pos.y, radius * 2.0, radius * 2.0],
                    tint,
                },
            ),
        }
    }

    /// Rebuild from the rink markings and the current bodies
    pub fn build(&mut self, rink: &Rink, snapshot: &Snapshot) {
        self.clear();

        for marking in &rink.markings {
            let tint = marking_tint(marking.style);
            match marking.shape {
                MarkingShape::Rect(rect) => self.push_rect(rect, tint),
                MarkingShape::Circle { center, radius } => self.push(
                    MeshKind::Circle,
                    InstanceData {
                        transform: [center.x, center.y, radius * 2.0, radius * 2.0],
                        tint,
                    },
                ),
            }
        }

        for goal in &snapshot.goals {
            self.push_rect(*goal, GOAL);
        }

        self.push_body(&snapshot.player, PLAYER);
        self.push_body(&snapshot.bot, BOT);
        self.push_body(&snapshot.puck, PUCK);
    }
}
