//! Vertex formats and GPU mesh upload
//!
//! Two interleaved vertex layouts: the 11-float model layout
//! (position/color/uv/normal) and the 3-float marker layout (position only).
//! Indices are 8-bit. A [`GpuMesh`] owns its VAO/VBO/EBO for the process
//! lifetime and is destroyed explicitly at shutdown.

use glow::HasContext as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mesh upload errors
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("failed to allocate GPU buffers: {0}")]
    Allocation(String),
}

pub type MeshResult<T> = Result<T, MeshError>;

/// Interleaved model vertex: position, color, UV, normal (11 floats)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelVertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Vertex color
    pub color: [f32; 3],
    /// Texture coordinates
    pub uv: [f32; 2],
    /// Normal used for lighting
    pub normal: [f32; 3],
}

// Only f32 fields, no padding: safe to hand the GL a raw byte view
unsafe impl bytemuck::Pod for ModelVertex {}
unsafe impl bytemuck::Zeroable for ModelVertex {}

/// Marker vertex: position only (3 floats)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerVertex {
    /// Position in model space
    pub position: [f32; 3],
}

unsafe impl bytemuck::Pod for MarkerVertex {}
unsafe impl bytemuck::Zeroable for MarkerVertex {}

/// GPU-resident mesh: VAO + vertex/index buffers + index count.
///
/// Immutable after upload. Draws always cover the mesh's actual index count
/// as 8-bit-indexed triangles.
pub struct GpuMesh {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    ebo: glow::NativeBuffer,
    index_count: i32,
}

impl GpuMesh {
    /// Upload model-layout vertices with the fixed four-attribute layout.
    pub fn upload_model(
        gl: &glow::Context,
        vertices: &[ModelVertex],
        indices: &[u8],
    ) -> MeshResult<Self> {
        let stride = std::mem::size_of::<ModelVertex>() as i32;
        unsafe {
            let (vao, vbo, ebo) = Self::upload_raw(gl, bytemuck::cast_slice(vertices), indices)?;

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 12);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(2, 2, glow::FLOAT, false, stride, 24);
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(3, 3, glow::FLOAT, false, stride, 32);
            gl.enable_vertex_attrib_array(3);

            Self::finish_vao(gl);

            Ok(Self {
                vao,
                vbo,
                ebo,
                index_count: indices.len() as i32,
            })
        }
    }

    /// Upload marker-layout vertices (position attribute only).
    pub fn upload_marker(
        gl: &glow::Context,
        vertices: &[MarkerVertex],
        indices: &[u8],
    ) -> MeshResult<Self> {
        let stride = std::mem::size_of::<MarkerVertex>() as i32;
        unsafe {
            let (vao, vbo, ebo) = Self::upload_raw(gl, bytemuck::cast_slice(vertices), indices)?;

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);

            Self::finish_vao(gl);

            Ok(Self {
                vao,
                vbo,
                ebo,
                index_count: indices.len() as i32,
            })
        }
    }

    /// Bind this mesh's vertex array; persists until the next bind
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(Some(self.vao)) };
    }

    /// Issue an indexed triangle draw over the whole index buffer.
    ///
    /// The vertex array must currently be bound.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe { gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_BYTE, 0) };
    }

    /// Number of indices drawn per call
    pub fn index_count(&self) -> i32 {
        self.index_count
    }

    /// Release the VAO and both buffers
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            gl.delete_buffer(self.ebo);
        }
    }

    unsafe fn upload_raw(
        gl: &glow::Context,
        vertex_bytes: &[u8],
        indices: &[u8],
    ) -> MeshResult<(
        glow::NativeVertexArray,
        glow::NativeBuffer,
        glow::NativeBuffer,
    )> {
        let vao = gl.create_vertex_array().map_err(MeshError::Allocation)?;
        let vbo = gl.create_buffer().map_err(MeshError::Allocation)?;
        let ebo = gl.create_buffer().map_err(MeshError::Allocation)?;

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, vertex_bytes, glow::STATIC_DRAW);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
        gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, indices, glow::STATIC_DRAW);

        Ok((vao, vbo, ebo))
    }

    unsafe fn finish_vao(gl: &glow::Context) {
        // Unbind the VAO first so it keeps its element-buffer association
        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_vertex_layout_is_eleven_floats() {
        assert_eq!(std::mem::size_of::<ModelVertex>(), 11 * 4);
    }

    #[test]
    fn marker_vertex_layout_is_three_floats() {
        assert_eq!(std::mem::size_of::<MarkerVertex>(), 3 * 4);
    }

    #[test]
    fn model_vertices_cast_to_interleaved_bytes() {
        let vertex = ModelVertex {
            position: [1.0, 2.0, 3.0],
            color: [0.5, 0.5, 0.5],
            uv: [0.0, 1.0],
            normal: [0.0, 0.0, 1.0],
        };
        let bytes: &[u8] = bytemuck::cast_slice(std::slice::from_ref(&vertex));
        assert_eq!(bytes.len(), 44);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[6], 0.0); // first UV component
        assert_eq!(floats[10], 1.0); // last normal component
    }
}
