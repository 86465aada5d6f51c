/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Degeneracy, Result, ScatterError};
use crate::mesh::face::Face;

pub mod face;

#[cfg(test)]
mod tests;

/// Extent of the mesh along each axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    }
}

impl BoundingBox {
    pub fn around<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::default();
        };
        points.fold(
            Self {
                min: *first,
                max: *first,
            },
            |BoundingBox { min, max }, point| BoundingBox {
                min: min.min(*point),
                max: max.max(*point),
            },
        )
    }

    pub fn size(&self) -> Size {
        let extent = self.max - self.min;
        Size {
            width: extent.x,
            height: extent.y,
            depth: extent.z,
        }
    }
}

/// A triangulated title, already separated into independent faces.
///
/// The mesh is read by the animator but never mutated by it.
#[derive(Debug, Clone, Default)]
pub struct TextMesh {
    faces: Vec<Face>,
    bounds: BoundingBox,
}

impl TextMesh {
    pub fn from_faces(triangles: impl IntoIterator<Item = [Vec3; 3]>) -> Self {
        let faces: Vec<Face> = triangles
            .into_iter()
            .enumerate()
            .map(|(index, vertices)| Face::new(index, vertices))
            .collect();
        let bounds = BoundingBox::around(faces.iter().flat_map(|face| face.vertices.iter()));
        Self { faces, bounds }
    }

    /// Separate an indexed triangle list so that every face owns its vertices.
    pub fn from_triangles(positions: &[Vec3], indices: &[u32]) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(ScatterError::InvalidMesh(format!(
                "{} indices do not form whole triangles",
                indices.len()
            )));
        }
        let lookup = |index: u32| {
            positions.get(index as usize).copied().ok_or_else(|| {
                ScatterError::InvalidMesh(format!(
                    "index {index} out of range for {} positions",
                    positions.len()
                ))
            })
        };
        let triangles = indices
            .chunks_exact(3)
            .map(|corner| Ok([lookup(corner[0])?, lookup(corner[1])?, lookup(corner[2])?]))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_faces(triangles))
    }

    /// Translate by `-size * anchor`, so an anchor of (0.5, 0.5, 0) centers the
    /// title on the origin.
    pub fn anchored(&self, anchor: Vec3) -> Self {
        let size = self.size();
        let translation = -Vec3::new(size.width, size.height, size.depth) * anchor;
        self.translated(translation)
    }

    pub fn translated(&self, translation: Vec3) -> Self {
        Self {
            faces: self.faces.iter().map(|face| face.translated(translation)).collect(),
            bounds: BoundingBox {
                min: self.bounds.min + translation,
                max: self.bounds.max + translation,
            },
        }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.faces.len() * 3
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// Rest positions in vertex order, three per face.
    pub fn rest_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.faces.iter().flat_map(|face| face.vertices)
    }

    pub fn degeneracies(&self) -> Vec<Degeneracy> {
        let size = self.size();
        let mut found = Vec::new();
        if self.faces.is_empty() {
            found.push(Degeneracy::NoFaces);
        }
        if size.width == 0.0 {
            found.push(Degeneracy::ZeroWidth);
        }
        if size.height == 0.0 {
            found.push(Degeneracy::ZeroHeight);
        }
        found
    }

    /// The first degeneracy, if any. Degenerate meshes still animate with
    /// zero delays on the collapsed axis.
    pub fn check(&self) -> Result<()> {
        match self.degeneracies().first() {
            Some(degeneracy) => Err(ScatterError::DegenerateGeometry(*degeneracy)),
            None => Ok(()),
        }
    }
}
