//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.03, 0.08, 1.0];
    pub const BANK: [f32; 4] = [0.08, 0.35, 0.15, 1.0];
    pub const BANK_TRACE: [f32; 4] = [0.3, 0.8, 0.4, 1.0];
    pub const PLAYER: [f32; 4] = [0.9, 0.9, 0.95, 1.0];
    pub const SHIELD: [f32; 4] = [0.3, 0.9, 1.0, 0.6];
    pub const BULLET: [f32; 4] = [1.0, 0.9, 0.3, 1.0];
    pub const ENEMY_TEXT: [f32; 4] = [0.3, 0.6, 1.0, 1.0];
    pub const ENEMY_VIDEO: [f32; 4] = [1.0, 0.3, 0.3, 1.0];
    pub const ENEMY_GLITCH: [f32; 4] = [0.85, 0.3, 1.0, 1.0];
    /// Outline marking the current level's target category
    pub const TARGET_MARK: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
    pub const POWER_UP: [f32; 4] = [0.2, 1.0, 0.8, 1.0];
    pub const BOSS: [f32; 4] = [0.6, 0.1, 0.6, 1.0];
    pub const BOSS_HP_BACK: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const BOSS_HP: [f32; 4] = [1.0, 0.2, 0.4, 1.0];
    /// Dims the playfield while between levels or after the run ends
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.55];
}
