//! Mesh data assets
//!
//! Vertex/index tables live in RON files as arrays of structured records
//! rather than inlined literals, so the geometry can be validated and tested
//! without a GPU context. Loading validates eagerly: every index must be in
//! range and the index count must describe whole triangles.

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::render::mesh::{MarkerVertex, ModelVertex};

/// Mesh data loading and validation errors
#[derive(Error, Debug)]
pub enum MeshDataError {
    #[error("failed to read mesh file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mesh file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("mesh '{name}': index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        name: String,
        index: u8,
        vertex_count: usize,
    },

    #[error("mesh '{name}': index count {count} is not a multiple of 3")]
    PartialTriangle { name: String, count: usize },
}

pub type MeshDataResult<T> = Result<T, MeshDataError>;

/// A named mesh as stored on disk: vertex records plus 8-bit triangle
/// indices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshData<V> {
    /// Role of the mesh in the scene (e.g. "chair-frame")
    pub name: String,
    /// Vertex records
    pub vertices: Vec<V>,
    /// Triangle indices into `vertices`
    pub indices: Vec<u8>,
}

/// Mesh data in the 11-float model vertex layout
pub type ModelMeshData = MeshData<ModelVertex>;

/// Mesh data in the 3-float marker vertex layout
pub type MarkerMeshData = MeshData<MarkerVertex>;

impl<V: DeserializeOwned> MeshData<V> {
    /// Load and validate a mesh data file.
    pub fn load(path: &Path) -> MeshDataResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| MeshDataError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let data: Self = ron::from_str(&text).map_err(|source| MeshDataError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        data.validate()?;
        log::debug!(
            "loaded mesh '{}': {} vertices, {} indices",
            data.name,
            data.vertices.len(),
            data.indices.len()
        );
        Ok(data)
    }
}

impl<V> MeshData<V> {
    /// Check index bounds and triangle divisibility.
    pub fn validate(&self) -> MeshDataResult<()> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshDataError::PartialTriangle {
                name: self.name.clone(),
                count: self.indices.len(),
            });
        }
        let vertex_count = self.vertices.len();
        for &index in &self.indices {
            if usize::from(index) >= vertex_count {
                return Err(MeshDataError::IndexOutOfRange {
                    name: self.name.clone(),
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Number of triangles described by the index buffer
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER_RON: &str = r#"(
        name: "marker",
        vertices: [
            (position: (0.0, 0.4, 0.0)),
            (position: (-0.3, 0.0, -0.3)),
            (position: (0.3, 0.0, -0.3)),
            (position: (0.0, 0.0, 0.0)),
        ],
        indices: [0, 1, 2, 0, 2, 3],
    )"#;

    #[test]
    fn marker_mesh_parses_from_ron() {
        let data: MarkerMeshData = ron::from_str(MARKER_RON).unwrap();
        assert_eq!(data.name, "marker");
        assert_eq!(data.vertices.len(), 4);
        assert_eq!(data.triangle_count(), 2);
        data.validate().unwrap();
    }

    #[test]
    fn model_mesh_parses_from_ron() {
        let text = r#"(
            name: "panel",
            vertices: [
                (position: (0.0, 0.0, 0.0), color: (1.0, 0.0, 0.0), uv: (0.0, 0.0), normal: (0.0, 0.0, 1.0)),
                (position: (1.0, 0.0, 0.0), color: (0.0, 1.0, 0.0), uv: (1.0, 0.0), normal: (0.0, 0.0, 1.0)),
                (position: (1.0, 1.0, 0.0), color: (0.0, 0.0, 1.0), uv: (1.0, 1.0), normal: (0.0, 0.0, 1.0)),
            ],
            indices: [0, 1, 2],
        )"#;
        let data: ModelMeshData = ron::from_str(text).unwrap();
        assert_eq!(data.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(data.vertices[2].uv, [1.0, 1.0]);
        data.validate().unwrap();
    }

    #[test]
    fn validation_rejects_out_of_range_indices() {
        let data = MarkerMeshData {
            name: "bad".to_owned(),
            vertices: vec![
                MarkerVertex {
                    position: [0.0, 0.0, 0.0],
                },
                MarkerVertex {
                    position: [1.0, 0.0, 0.0],
                },
            ],
            indices: vec![0, 1, 2],
        };
        match data.validate() {
            Err(MeshDataError::IndexOutOfRange { index, vertex_count, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn validation_rejects_partial_triangles() {
        let data = MarkerMeshData {
            name: "bad".to_owned(),
            vertices: vec![MarkerVertex {
                position: [0.0, 0.0, 0.0],
            }],
            indices: vec![0, 0],
        };
        assert!(matches!(
            data.validate(),
            Err(MeshDataError::PartialTriangle { count: 2, .. })
        ));
    }

    #[test]
    fn load_reports_missing_files() {
        let result = MarkerMeshData::load(Path::new("definitely/not/here.ron"));
        assert!(matches!(result, Err(MeshDataError::Read { .. })));
    }
}
