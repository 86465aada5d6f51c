/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */
use glam::Vec3;

/// One triangle of the separated text mesh. It owns its three vertices, so
/// moving it never drags a neighbour along.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub index: usize,
    pub vertices: [Vec3; 3],
}

impl Face {
    pub fn new(index: usize, vertices: [Vec3; 3]) -> Self {
        Self { index, vertices }
    }

    pub fn centroid(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }

    pub fn translated(&self, translation: Vec3) -> Self {
        Self {
            index: self.index,
            vertices: self.vertices.map(|vertex| vertex + translation),
        }
    }
}
