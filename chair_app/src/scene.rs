//! Chair scene assembly
//!
//! Loads the four mesh data files, uploads them to the GPU, loads the two
//! textures and shader pairs, and provides the per-instance model matrices:
//! the frame mesh is a quarter-panel drawn four times at 90-degree yaw
//! offsets, and the lamp marker is drawn four times, scaled down and placed
//! at the key light.

use scene_engine::assets::mesh_data::MeshDataError;
use scene_engine::foundation::math::utils;
use scene_engine::prelude::*;
use scene_engine::render::mesh::MeshError;
use scene_engine::render::shader::ShaderError;
use scene_engine::render::texture::TextureError;
use thiserror::Error;

use crate::config::ViewerConfig;

/// Scene asset loading errors
#[derive(Error, Debug)]
pub enum SceneError {
    #[error(transparent)]
    MeshData(#[from] MeshDataError),

    #[error(transparent)]
    MeshUpload(#[from] MeshError),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error(transparent)]
    Shader(#[from] ShaderError),
}

/// Number of instances drawn for the frame mesh and the lamp marker
pub const INSTANCE_COUNT: usize = 4;

/// Per-instance translations (all zero: the rotations alone build the
/// symmetric chair from one quarter-panel)
pub const INSTANCE_POSITIONS: [[f32; 3]; INSTANCE_COUNT] = [[0.0; 3]; INSTANCE_COUNT];

/// Per-instance yaw in degrees
pub const INSTANCE_ROTATIONS_DEG: [f32; INSTANCE_COUNT] = [0.0, 90.0, 180.0, -90.0];

// Lamp markers render at 1/8 offset and 1/8 scale of the model instances
const LAMP_OFFSET_DIVISOR: f32 = 8.0;
const LAMP_SCALE: f32 = 0.125;

/// Model matrix for one frame instance
pub fn frame_instance_matrix(index: usize) -> Mat4 {
    let position = Vec3::from(INSTANCE_POSITIONS[index]);
    Mat4::new_translation(&position)
        * Mat4::rotation_y(utils::deg_to_rad(INSTANCE_ROTATIONS_DEG[index]))
}

/// Model matrix for one lamp-marker instance, positioned relative to the
/// light
pub fn lamp_instance_matrix(index: usize, light_position: Vec3) -> Mat4 {
    let position = Vec3::from(INSTANCE_POSITIONS[index]) / LAMP_OFFSET_DIVISOR + light_position;
    Mat4::new_translation(&position)
        * Mat4::rotation_y(utils::deg_to_rad(INSTANCE_ROTATIONS_DEG[index]))
        * Mat4::new_scaling(LAMP_SCALE)
}

/// All GPU resources the render loop draws each frame
pub struct Scene {
    /// Quarter-panel frame mesh, drawn four times
    pub frame: GpuMesh,
    /// Chair back, single instance at identity
    pub back: GpuMesh,
    /// Chair seat, single instance at identity
    pub seat: GpuMesh,
    /// Lamp marker, drawn four times at the key light
    pub lamp: GpuMesh,
    /// Wood texture for frame and back
    pub wood: Texture,
    /// Fabric texture for the seat
    pub fabric: Texture,
    /// Lit, textured program for the chair meshes
    pub model_shader: ShaderProgram,
    /// Solid-color program for the lamp marker
    pub lamp_shader: ShaderProgram,
    /// Two-light rig and object color
    pub lighting: LightingRig,
}

impl Scene {
    /// Load every asset the scene needs. Any failure aborts startup.
    pub fn load(gl: &glow::Context, config: &ViewerConfig) -> Result<Self, SceneError> {
        let (frame_data, back_data, seat_data, lamp_data) = load_mesh_data(config)?;

        let frame = GpuMesh::upload_model(gl, &frame_data.vertices, &frame_data.indices)?;
        let back = GpuMesh::upload_model(gl, &back_data.vertices, &back_data.indices)?;
        let seat = GpuMesh::upload_model(gl, &seat_data.vertices, &seat_data.indices)?;
        let lamp = GpuMesh::upload_marker(gl, &lamp_data.vertices, &lamp_data.indices)?;

        let wood = Texture::from_file(gl, &config.texture_path("wood.png"))?;
        let fabric = Texture::from_file(gl, &config.texture_path("fabric.png"))?;

        let model_shader = ShaderProgram::from_files(
            gl,
            &config.shader_path("model.vert"),
            &config.shader_path("model.frag"),
        )?;
        let lamp_shader = ShaderProgram::from_files(
            gl,
            &config.shader_path("lamp.vert"),
            &config.shader_path("lamp.frag"),
        )?;

        log::info!("scene assets loaded");

        Ok(Self {
            frame,
            back,
            seat,
            lamp,
            wood,
            fabric,
            model_shader,
            lamp_shader,
            lighting: LightingRig::chair_default(),
        })
    }

    /// Release every GPU resource, the lamp marker included.
    pub fn destroy(&self, gl: &glow::Context) {
        self.frame.destroy(gl);
        self.back.destroy(gl);
        self.seat.destroy(gl);
        self.lamp.destroy(gl);
        self.wood.destroy(gl);
        self.fabric.destroy(gl);
        self.model_shader.destroy(gl);
        self.lamp_shader.destroy(gl);
        log::info!("scene assets released");
    }
}

/// Load and validate the four mesh data files without touching the GPU, so
/// the geometry can be checked independently of rendering.
pub fn load_mesh_data(
    config: &ViewerConfig,
) -> Result<(ModelMeshData, ModelMeshData, ModelMeshData, MarkerMeshData), MeshDataError> {
    Ok((
        ModelMeshData::load(&config.mesh_path("chair_frame.ron"))?,
        ModelMeshData::load(&config.mesh_path("chair_back.ron"))?,
        ModelMeshData::load(&config.mesh_path("chair_seat.ron"))?,
        MarkerMeshData::load(&config.mesh_path("lamp_marker.ron"))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scene_engine::foundation::math::Point3;
    use std::path::Path;

    // Config rooted at this crate's resources, independent of the test cwd
    fn manifest_config() -> ViewerConfig {
        let mut config = ViewerConfig::default();
        config.resources.root = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
        config
    }

    #[test]
    fn shipped_mesh_assets_load_and_validate() {
        let config = manifest_config();
        let (frame, back, seat, lamp) = load_mesh_data(&config).unwrap();

        assert_eq!(frame.vertices.len(), 14);
        assert_eq!(frame.indices.len(), 57);
        assert_eq!(back.vertices.len(), 16);
        assert_eq!(back.indices.len(), 72);
        assert_eq!(seat.vertices.len(), 8);
        assert_eq!(seat.indices.len(), 36);
        assert_eq!(lamp.vertices.len(), 4);
        assert_eq!(lamp.indices.len(), 12);
    }

    #[test]
    fn frame_instances_cover_all_four_quadrants() {
        // Rotating +90 degrees about Y sends +X to -Z
        let rotated = frame_instance_matrix(1).transform_vector(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, -1.0, epsilon = 1e-6);

        // Instance 0 is the identity
        let unrotated = frame_instance_matrix(0).transform_vector(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(unrotated.x, 1.0, epsilon = 1e-6);

        // Instance 2 mirrors across the origin
        let mirrored = frame_instance_matrix(2).transform_vector(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(mirrored.x, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn lamp_instances_sit_scaled_at_the_light() {
        let light = Vec3::new(0.0, 1.0, 1.0);
        let matrix = lamp_instance_matrix(0, light);

        // The mesh origin lands exactly on the light position
        let origin = matrix.transform_point(&Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(origin.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(origin.z, 1.0, epsilon = 1e-6);

        // Marker geometry shrinks to 1/8 scale
        let tip = matrix.transform_point(&Point3::new(0.0, 0.4, 0.0));
        assert_relative_eq!(tip.y, 1.0 + 0.4 * 0.125, epsilon = 1e-6);
    }

    #[test]
    fn lamp_instance_rotation_spins_the_marker_about_the_light() {
        let light = Vec3::new(0.0, 1.0, 1.0);
        let matrix = lamp_instance_matrix(1, light);
        let corner = matrix.transform_point(&Point3::new(0.3, 0.0, -0.3));
        // +90 degrees about Y: (x, z) -> (z, -x), then 1/8 scale and offset
        assert_relative_eq!(corner.x, -0.3 * 0.125, epsilon = 1e-6);
        assert_relative_eq!(corner.z, 1.0 - 0.3 * 0.125, epsilon = 1e-6);
    }
}
