use std::fmt;
use std::io;

/// Ways in which a mesh can be degenerate while still being animatable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// The mesh has no faces at all
    NoFaces,
    /// The bounding box has zero width, so horizontal delays fall back to zero
    ZeroWidth,
    /// The bounding box has zero height, so vertical delays fall back to zero
    ZeroHeight,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::NoFaces => write!(f, "mesh has no faces"),
            Degeneracy::ZeroWidth => write!(f, "mesh has zero width"),
            Degeneracy::ZeroHeight => write!(f, "mesh has zero height"),
        }
    }
}

/// Error types that can occur while preparing a scatter animation
#[derive(Debug)]
pub enum ScatterError {
    /// Animation parameters were rejected before any attribute was computed
    InvalidParams(String),
    /// Geometry that can only be animated with the zero-guard in place
    DegenerateGeometry(Degeneracy),
    /// The triangle list does not describe faces
    InvalidMesh(String),
    /// Configuration could not be read or parsed
    Config(String),
    /// Writing an export failed
    Io(io::Error),
}

impl fmt::Display for ScatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScatterError::InvalidParams(reason) => write!(f, "Invalid animation parameters: {reason}"),
            ScatterError::DegenerateGeometry(degeneracy) => write!(f, "Degenerate geometry: {degeneracy}"),
            ScatterError::InvalidMesh(reason) => write!(f, "Invalid mesh: {reason}"),
            ScatterError::Config(reason) => write!(f, "Configuration error: {reason}"),
            ScatterError::Io(error) => write!(f, "IO error: {error}"),
        }
    }
}

impl std::error::Error for ScatterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScatterError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for ScatterError {
    fn from(error: io::Error) -> Self {
        ScatterError::Io(error)
    }
}

impl From<serde_json::Error> for ScatterError {
    fn from(error: serde_json::Error) -> Self {
        ScatterError::Config(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScatterError>;
