pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::scene::Scene;
use resources::RinkBuffers;
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 48;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: RinkBuffers,
    pub quad: Mesh,
    pub circle: Mesh,
}

impl Renderer {
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        width: f32,
        height: f32,
    ) -> Result<Self, String> {
        let ctx = init::init_gpu(canvas).await?;
        let camera = Camera::orthographic(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let (vertices, indices) = create_rectangle();
        let quad = Mesh::new(&ctx.device, "Quad", &vertices, &indices);
        let (vertices, indices) = create_circle(CIRCLE_SEGMENTS);
        let circle = Mesh::new(&ctx.device, "Circle", &vertices, &indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            quad,
            circle,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), String> {
        draw::draw_frame(self, scene)
    }
}
