use super::Renderer;
use crate::scene::{MeshKind, Scene, BACKGROUND};
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws to the reconfigured surface
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    renderer.buffers.write_camera(&renderer.queue, &renderer.camera);
    renderer
        .buffers
        .write_instances(&renderer.device, &renderer.queue, &scene.instances);

    {
        let [r, g, b, a] = BACKGROUND;
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Rink Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_scene(renderer, &mut pass, scene);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn draw_scene(renderer: &Renderer, pass: &mut RenderPass<'_>, scene: &Scene) {
    if scene.instances.is_empty() {
        return;
    }

    pass.set_pipeline(&renderer.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    for batch in &scene.batches {
        let mesh = match batch.mesh {
            MeshKind::Quad => &renderer.quad,
            MeshKind::Circle => &renderer.circle,
        };
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..mesh.index_count, 0, batch.start..batch.end);
    }
}
