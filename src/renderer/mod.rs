//! WebGPU rendering module
//!
//! `scene` turns a simulation snapshot into colored triangles in playfield
//! coordinates; `pipeline` uploads them and draws a frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::frame_vertices;
