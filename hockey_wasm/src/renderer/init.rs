//! WebGPU device and canvas surface setup

use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct GpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

/// Tints are sRGB hex colors written as-is, so a linear-encoded target would
/// wash them out. Fall back to whatever the surface offers first.
fn preferred_format(formats: &[TextureFormat]) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

fn surface_config(format: TextureFormat, (width, height): (u32, u32)) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: Vec::new(),
        desired_maximum_frame_latency: 2,
    }
}

async fn open_device(
    instance: &Instance,
    surface: &Surface<'_>,
) -> Result<(Adapter, Device, Queue), String> {
    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            compatible_surface: Some(surface),
            ..Default::default()
        })
        .await
        .ok_or("No WebGPU adapter for this canvas")?;

    let descriptor = DeviceDescriptor {
        label: Some("Rink Device"),
        required_limits: Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits()),
        ..Default::default()
    };
    let (device, queue) = adapter
        .request_device(&descriptor, None)
        .await
        .map_err(|e| format!("WebGPU device request failed: {e}"))?;

    Ok((adapter, device, queue))
}

/// Bind the renderer to `canvas` at its current pixel size
pub async fn init_gpu(canvas: HtmlCanvasElement) -> Result<GpuContext, String> {
    let size = (canvas.width().max(1), canvas.height().max(1));

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Canvas surface unavailable: {e}"))?;

    let (adapter, device, queue) = open_device(&instance, &surface).await?;

    let format = preferred_format(&surface.get_capabilities(&adapter).formats)
        .ok_or("Canvas surface reports no formats")?;
    let config = surface_config(format, size);
    surface.configure(&device, &config);

    tracing::info!(
        width = size.0,
        height = size.1,
        ?format,
        adapter = %adapter.get_info().name,
        "wgpu surface ready"
    );

    Ok(GpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}
