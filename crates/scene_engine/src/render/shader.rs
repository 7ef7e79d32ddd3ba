//! GLSL shader program facade
//!
//! Two-stage compile-and-link from a pair of source files. Compile and link
//! failures carry the driver's info log and are fatal: the viewer never
//! enters its loop with an unusable program. Uniform locations are looked up
//! by name and cached; a name the program does not expose is warned about
//! once and then ignored.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glow::HasContext as _;
use thiserror::Error;

use crate::foundation::math::{Mat4, Vec3};

/// Shader compilation and linking errors
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("failed to read shader source {path}: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to allocate shader objects: {0}")]
    Allocation(String),

    #[error("vertex shader compilation failed for {path}: {info_log}")]
    VertexCompile { path: String, info_log: String },

    #[error("fragment shader compilation failed for {path}: {info_log}")]
    FragmentCompile { path: String, info_log: String },

    #[error("shader program linking failed: {info_log}")]
    Link { info_log: String },
}

pub type ShaderResult<T> = Result<T, ShaderError>;

/// Linked vertex+fragment program with cached uniform locations
pub struct ShaderProgram {
    program: glow::NativeProgram,
    uniforms: HashMap<String, Option<glow::NativeUniformLocation>>,
}

impl ShaderProgram {
    /// Read, compile and link a vertex/fragment source pair.
    pub fn from_files(
        gl: &glow::Context,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> ShaderResult<Self> {
        let vertex_src = read_source(vertex_path)?;
        let fragment_src = read_source(fragment_path)?;

        let vertex = compile_stage(gl, glow::VERTEX_SHADER, &vertex_src).map_err(|info_log| {
            ShaderError::VertexCompile {
                path: vertex_path.display().to_string(),
                info_log,
            }
        })?;
        let fragment = match compile_stage(gl, glow::FRAGMENT_SHADER, &fragment_src) {
            Ok(shader) => shader,
            Err(info_log) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(ShaderError::FragmentCompile {
                    path: fragment_path.display().to_string(),
                    info_log,
                });
            }
        };

        let program = unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(message) => {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return Err(ShaderError::Allocation(message));
                }
            };
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let info_log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link { info_log });
            }
            program
        };

        log::debug!(
            "linked shader program from {} + {}",
            vertex_path.display(),
            fragment_path.display()
        );

        Ok(Self {
            program,
            uniforms: HashMap::new(),
        })
    }

    /// Make this program current
    pub fn use_program(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// Upload a 4x4 matrix uniform (column-major, as GL expects)
    pub fn set_mat4(&mut self, gl: &glow::Context, name: &str, value: &Mat4) {
        if let Some(location) = self.location(gl, name) {
            unsafe { gl.uniform_matrix_4_f32_slice(Some(&location), false, value.as_slice()) };
        }
    }

    /// Upload a vec3 uniform
    pub fn set_vec3(&mut self, gl: &glow::Context, name: &str, value: Vec3) {
        if let Some(location) = self.location(gl, name) {
            unsafe { gl.uniform_3_f32(Some(&location), value.x, value.y, value.z) };
        }
    }

    /// Upload a vec3 array uniform (`name[0]`, `name[1]`, ...)
    pub fn set_vec3_array(&mut self, gl: &glow::Context, name: &str, values: &[Vec3]) {
        if let Some(location) = self.location(gl, name) {
            let flat: Vec<f32> = values.iter().flat_map(|v| [v.x, v.y, v.z]).collect();
            unsafe { gl.uniform_3_f32_slice(Some(&location), &flat) };
        }
    }

    /// Release the GL program object
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }

    fn location(&mut self, gl: &glow::Context, name: &str) -> Option<glow::NativeUniformLocation> {
        if let Some(cached) = self.uniforms.get(name) {
            return cached.clone();
        }
        let location = unsafe { gl.get_uniform_location(self.program, name) };
        if location.is_none() {
            log::warn!("shader program has no uniform named '{name}'");
        }
        self.uniforms.insert(name.to_owned(), location.clone());
        location
    }
}

fn read_source(path: &Path) -> ShaderResult<String> {
    fs::read_to_string(path).map_err(|source| ShaderError::SourceRead {
        path: path.display().to_string(),
        source,
    })
}

fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    source: &str,
) -> Result<glow::NativeShader, String> {
    unsafe {
        let shader = gl.create_shader(stage)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let info_log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(info_log);
        }
        Ok(shader)
    }
}
