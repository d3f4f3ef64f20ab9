//! Input-validation boundary.
//!
//! Host meshes arrive either as nested vertex lists or as a flat coordinate
//! buffer plus per-face index lists. Everything is checked here, before any
//! classification starts, so a malformed object fails as a whole instead of
//! part-way through a scan.
//!
//! # Coordinate layout
//! Flat buffers hold `dim` values per vertex, `dim` being **2** or **3**.
//! Planar coordinates are lifted to `z = 0`.

use crate::geometry::Point3;
use crate::mesh_error::FaceClassError;
use serde::{Deserialize, Serialize};

/// A face as an ordered list of vertex positions.
pub type Polygon = Vec<Point3>;

/// The faces of one source object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshGroup {
    pub name: String,
    pub polygons: Vec<Polygon>,
}

impl MeshGroup {
    /// Wrap polygons without checking them.
    ///
    /// Call [`validate`](Self::validate) before scanning untrusted data, or
    /// use [`from_arrays`](Self::from_arrays) / [`from_indexed`](Self::from_indexed).
    /// Unchecked triangles with non-finite vertices are not classified; scans
    /// tally them in `non_finite`.
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        Self {
            name: name.into(),
            polygons,
        }
    }

    /// Build a group from nested `[x, y, z]` arrays.
    pub fn from_arrays(
        name: impl Into<String>,
        faces: &[Vec<[f64; 3]>],
    ) -> Result<Self, FaceClassError> {
        let mut polygons = Vec::with_capacity(faces.len());
        let mut vertex = 0usize;
        for face in faces {
            let mut polygon = Vec::with_capacity(face.len());
            for xyz in face {
                let p = Point3::from(*xyz);
                if !p.is_finite() {
                    return Err(FaceClassError::NonFiniteCoordinate { vertex });
                }
                polygon.push(p);
                vertex += 1;
            }
            polygons.push(polygon);
        }
        Ok(Self::new(name, polygons))
    }

    /// Build a group from a flat coordinate buffer and face index lists.
    ///
    /// `coords.len()` must be a multiple of `dim`, every coordinate must be
    /// finite, and every face index must address a vertex in `coords`.
    pub fn from_indexed(
        name: impl Into<String>,
        dim: usize,
        coords: &[f64],
        faces: &[Vec<usize>],
    ) -> Result<Self, FaceClassError> {
        let vertices = gather_vertices(dim, coords)?;
        let polygons = faces
            .iter()
            .map(|face| {
                face.iter()
                    .map(|&index| {
                        vertices
                            .get(index)
                            .copied()
                            .ok_or(FaceClassError::VertexIndexOutOfRange {
                                index,
                                len: vertices.len(),
                            })
                    })
                    .collect::<Result<Polygon, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, polygons))
    }

    /// Reject any NaN or infinite vertex.
    ///
    /// The reported index counts vertices across all polygons in order.
    pub fn validate(&self) -> Result<(), FaceClassError> {
        match self.polygons.iter().flatten().position(|p| !p.is_finite()) {
            Some(vertex) => Err(FaceClassError::NonFiniteCoordinate { vertex }),
            None => Ok(()),
        }
    }

    /// Number of faces with exactly three vertices.
    pub fn triangle_count(&self) -> usize {
        self.polygons.iter().filter(|p| p.len() == 3).count()
    }
}

fn gather_vertices(dim: usize, coords: &[f64]) -> Result<Vec<Point3>, FaceClassError> {
    if dim != 2 && dim != 3 {
        return Err(FaceClassError::InvalidDimension(dim));
    }
    if coords.len() % dim != 0 {
        return Err(FaceClassError::RaggedCoordinates {
            len: coords.len(),
            dim,
        });
    }
    coords
        .chunks_exact(dim)
        .enumerate()
        .map(|(vertex, slice)| {
            let p = if dim == 2 {
                Point3::from_xy(slice[0], slice[1])
            } else {
                Point3::new(slice[0], slice[1], slice[2])
            };
            if p.is_finite() {
                Ok(p)
            } else {
                Err(FaceClassError::NonFiniteCoordinate { vertex })
            }
        })
        .collect()
}
