//! # Scene Engine
//!
//! A small rendering engine for static model viewers: GLFW windowing, an
//! OpenGL 3.3 core renderer driven through `glow`, and an orbit camera.
//!
//! ## Features
//!
//! - **Orbit Camera**: spherical azimuth/altitude controls with FOV zoom,
//!   focus reset and discrete yaw stepping
//! - **Input Tracking**: sparse key/button state with cursor-delta baselining
//! - **Mesh Assets**: structured vertex/index records loaded from RON files
//!   and validated independently of any GPU context
//! - **Thin GL Facades**: shader compile/link, texture upload, and indexed
//!   mesh drawing with fail-fast diagnostics
//!
//! The engine owns no scene: applications assemble meshes, textures and
//! shaders themselves and run their own frame loop.

pub mod assets;
pub mod foundation;
pub mod input;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::assets::mesh_data::{
        MarkerMeshData, MeshData, MeshDataError, ModelMeshData,
    };
    pub use crate::foundation::{
        math::{Mat4, Mat4Ext, Vec3},
        time::Timer,
    };
    pub use crate::input::InputState;
    pub use crate::render::{
        camera::{OrbitCamera, StepDirection},
        lighting::{Light, LightingRig},
        mesh::{GpuMesh, MarkerVertex, ModelVertex},
        shader::ShaderProgram,
        texture::Texture,
        window::Window,
    };
}
