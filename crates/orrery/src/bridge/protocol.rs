//! Flat buffers read by the JavaScript renderer straight out of wasm memory.
//! Must stay in sync with the renderer's `protocol.ts`.
//!
//! ```text
//! [Instances: body_count × 8 floats]
//! [Paths:     body_count × points_per_body × 3 floats]
//! ```

use bytemuck::{Pod, Zeroable};
use glam::DVec3;

/// Per-body render data. 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Self-rotation about the body's y axis, radians.
    pub spin: f32,
    /// Display radius in scene units.
    pub radius: f32,
    /// 1.0 when this body is selected.
    pub selected: f32,
    /// 1.0 when the orbit line should be drawn.
    pub orbit_visible: f32,
    pub _pad: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Instance buffer for all orbiting bodies.
pub struct InstanceBuffer {
    instances: Vec<BodyInstance>,
    capacity: usize,
}

impl InstanceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Push an instance. Returns false once the buffer is full.
    pub fn push(&mut self, instance: BodyInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data viewed as raw floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for direct memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

/// Pre-sampled orbit paths, xyz per point, every body the same length.
pub struct PathBuffer {
    floats: Vec<f32>,
    points_per_body: usize,
}

impl PathBuffer {
    /// Pack paths. All paths must have `points_per_body` points.
    pub fn from_paths(paths: &[Vec<DVec3>], points_per_body: usize) -> Self {
        let mut floats = Vec::with_capacity(paths.len() * points_per_body * 3);
        for path in paths {
            debug_assert_eq!(path.len(), points_per_body);
            for p in path {
                floats.extend_from_slice(&p.as_vec3().to_array());
            }
        }
        Self {
            floats,
            points_per_body,
        }
    }

    pub fn points_per_body(&self) -> usize {
        self.points_per_body
    }

    /// Floats for one body's path, or `None` if out of range.
    pub fn body(&self, index: usize) -> Option<&[f32]> {
        let stride = self.points_per_body * 3;
        let start = index.checked_mul(stride)?;
        let end = start.checked_add(stride)?;
        self.floats.get(start..end)
    }

    pub fn as_floats(&self) -> &[f32] {
        &self.floats
    }

    pub fn len(&self) -> usize {
        self.floats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }

    pub fn paths_ptr(&self) -> *const f32 {
        self.floats.as_ptr()
    }
}
