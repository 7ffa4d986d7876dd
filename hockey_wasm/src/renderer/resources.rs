use crate::camera::{Camera, CameraUniform};
use crate::scene::InstanceData;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Room for every marking plus bodies before the buffer has to grow
const INITIAL_INSTANCE_CAPACITY: usize = 128;

pub struct RinkBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub instance_capacity: usize,
}

pub fn create_camera_buffer(device: &Device, camera: &Camera) -> Buffer {
    let camera_uniform = CameraUniform::from_camera(camera);
    device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    })
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Rink Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn create_buffers(device: &Device, camera: &Camera) -> RinkBuffers {
    RinkBuffers {
        camera: create_camera_buffer(device, camera),
        instances: create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
        instance_capacity: INITIAL_INSTANCE_CAPACITY,
    }
}

impl RinkBuffers {
    /// Upload this frame's instances, reallocating if they no longer fit
    pub fn write_instances(&mut self, device: &Device, queue: &Queue, instances: &[InstanceData]) {
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instances = create_instance_buffer(device, self.instance_capacity);
            tracing::debug!(capacity = self.instance_capacity, "grew instance buffer");
        }
        queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(instances));
    }

    pub fn write_camera(&self, queue: &Queue, camera: &Camera) {
        let uniform = CameraUniform::from_camera(camera);
        queue.write_buffer(&self.camera, 0, bytemuck::cast_slice(&[uniform]));
    }
}
