/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::animator::FaceScatterAnimator;
use crate::error::Result;
use crate::mesh::Size;
use crate::scatter::FaceAnimation;

#[derive(Serialize)]
struct ExportData {
    created: String,
    size: Size,
    total_duration: f32,
    /// Per-face attributes, one entry per face
    faces: Vec<FaceAnimation>,
    /// All captured frames
    frames: Vec<FrameExport>,
}

#[derive(Serialize)]
struct FrameExport {
    frame: u64,
    progress: f32,
    time: f32,
    positions: Vec<[f32; 3]>,
}

/// Collects evaluated frames of an animator and writes them as JSON.
pub struct ScatterExporter {
    output_dir: PathBuf,
    frames: Vec<FrameExport>,
}

impl ScatterExporter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            frames: Vec::new(),
        }
    }

    pub fn capture(&mut self, frame: u64, animator: &FaceScatterAnimator) {
        self.frames.push(FrameExport {
            frame,
            progress: animator.progress(),
            time: *animator.time(),
            positions: animator.positions().into_iter().map(|p| p.to_array()).collect(),
        });
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn create_export_data(&mut self, animator: &FaceScatterAnimator) -> ExportData {
        ExportData {
            created: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            size: animator.mesh().size(),
            total_duration: *animator.clock().total_duration(),
            faces: animator.animations().to_vec(),
            frames: std::mem::take(&mut self.frames),
        }
    }

    /// Write everything captured so far, returning the file written.
    pub fn save(&mut self, animator: &FaceScatterAnimator) -> Result<PathBuf> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let path = self.output_dir.join(format!("scatter_{timestamp}.json"));
        self.save_to(&path, animator)?;
        Ok(path)
    }

    pub fn save_to(&mut self, path: &Path, animator: &FaceScatterAnimator) -> Result<()> {
        let export_data = self.create_export_data(animator);
        let json = serde_json::to_string_pretty(&export_data)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        log::info!("Saved {} frames to {:?}", export_data.frames.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::config::ScatterConfig;
    use crate::mesh::TextMesh;
    use crate::random::SeededRandom;
    use crate::units::Seconds;

    #[test]
    fn writes_faces_and_frames() {
        let mesh = TextMesh::from_faces([[Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0)]]);
        let mut animator = FaceScatterAnimator::attach(&mesh, &ScatterConfig::default(), &mut SeededRandom::new(2)).unwrap();
        let mut exporter = ScatterExporter::new(std::env::temp_dir());
        exporter.capture(0, &animator);
        animator.tick(Seconds(1.0));
        exporter.capture(1, &animator);
        assert_eq!(exporter.frame_count(), 2);

        let path = std::env::temp_dir().join(format!("scatter_export_test_{}.json", std::process::id()));
        exporter.save_to(&path, &animator).unwrap();
        assert_eq!(exporter.frame_count(), 0);

        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["faces"].as_array().unwrap().len(), 1);
        assert_eq!(written["frames"].as_array().unwrap().len(), 2);
        assert_eq!(written["frames"][1]["positions"].as_array().unwrap().len(), 3);
        std::fs::remove_file(path).unwrap();
    }
}
