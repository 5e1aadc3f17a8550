//! Pick one camera out of an enumerated list.

use std::fmt;
use std::str::FromStr;

use super::types::CameraDescriptor;

/// How the user refers to a camera: by index or by part of its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraSelector {
    Index(u32),
    Name(String),
}

impl FromStr for CameraSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Camera selector must not be empty".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return s
                .parse()
                .map(CameraSelector::Index)
                .map_err(|_| format!("Camera index '{}' is out of range", s));
        }
        Ok(CameraSelector::Name(s.to_string()))
    }
}

impl fmt::Display for CameraSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraSelector::Index(i) => write!(f, "{}", i),
            CameraSelector::Name(n) => write!(f, "{}", n),
        }
    }
}

impl CameraSelector {
    fn matches(&self, camera: &CameraDescriptor) -> bool {
        match self {
            CameraSelector::Index(i) => camera.index == *i,
            CameraSelector::Name(n) => camera.name.to_lowercase().contains(&n.to_lowercase()),
        }
    }
}

/// Errors from resolving a selector against the camera list.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("No cameras found")]
    NoCameras,

    #[error("Camera '{requested}' not found.\n\nAvailable cameras:\n{}", list_available(.available))]
    NotFound {
        requested: String,
        available: Vec<CameraDescriptor>,
    },
}

fn list_available(available: &[CameraDescriptor]) -> String {
    available
        .iter()
        .map(|c| format!("  {}", c))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Return the first camera the selector matches, in list order.
pub fn select<'a>(
    cameras: &'a [CameraDescriptor],
    selector: &CameraSelector,
) -> Result<&'a CameraDescriptor, SelectError> {
    if cameras.is_empty() {
        return Err(SelectError::NoCameras);
    }

    cameras
        .iter()
        .find(|c| selector.matches(c))
        .ok_or_else(|| SelectError::NotFound {
            requested: selector.to_string(),
            available: cameras.to_vec(),
        })
}
