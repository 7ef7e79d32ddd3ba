//! Rendering subsystem
//!
//! Thin facades over the windowing layer and the OpenGL context (window,
//! shader, texture, mesh) plus the orbit camera and the fixed lighting rig.
//! GL bind state is current-context state: each bind persists until the next
//! bind, so callers must issue binds in frame order.

pub mod camera;
pub mod lighting;
pub mod mesh;
pub mod shader;
pub mod texture;
pub mod window;

pub use camera::{OrbitCamera, StepDirection};
pub use lighting::{Light, LightingRig};
pub use mesh::{GpuMesh, MarkerVertex, MeshError, ModelVertex};
pub use shader::{ShaderError, ShaderProgram};
pub use texture::{Texture, TextureError};
pub use window::{Window, WindowError};
