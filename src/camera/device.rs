//! Camera device enumeration through nokhwa.

use clap::ValueEnum;
use nokhwa::query;
use nokhwa::utils::{ApiBackend, CameraIndex, CameraInfo};
use nokhwa::NokhwaError;
use serde::Deserialize;
use std::fmt;

use super::lister::CameraLister;
use super::types::{CameraDescriptor, CameraEnumerator, CameraRecord};

/// Platform camera API to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Let nokhwa pick the native API for this platform
    #[default]
    Auto,
    /// macOS / iOS
    #[value(name = "avfoundation")]
    #[serde(rename = "avfoundation")]
    AvFoundation,
    /// Linux V4L2
    #[value(name = "video4linux")]
    #[serde(rename = "video4linux")]
    Video4Linux,
    /// Windows Media Foundation
    MediaFoundation,
}

impl From<Backend> for ApiBackend {
    fn from(b: Backend) -> Self {
        match b {
            Backend::Auto => ApiBackend::Auto,
            Backend::AvFoundation => ApiBackend::AVFoundation,
            Backend::Video4Linux => ApiBackend::Video4Linux,
            Backend::MediaFoundation => ApiBackend::MediaFoundation,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Auto => "auto",
            Backend::AvFoundation => "avfoundation",
            Backend::Video4Linux => "video4linux",
            Backend::MediaFoundation => "media-foundation",
        };
        f.write_str(name)
    }
}

/// Errors from querying the platform camera API.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to query cameras: {0}")]
    Query(#[from] NokhwaError),

    #[error("Camera '{name}' has non-numeric index '{index}'")]
    NonNumericIndex { name: String, index: String },
}

/// One camera as reported by nokhwa, with a numeric index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub index: u32,
    pub name: String,
    pub description: String,
    pub misc: String,
}

impl TryFrom<&CameraInfo> for DeviceRecord {
    type Error = BackendError;

    fn try_from(info: &CameraInfo) -> Result<Self, Self::Error> {
        let name = info.human_name();
        let index = match info.index() {
            CameraIndex::Index(i) => *i,
            CameraIndex::String(s) => {
                s.parse::<u32>()
                    .map_err(|_| BackendError::NonNumericIndex {
                        name: name.clone(),
                        index: s.clone(),
                    })?
            }
        };

        Ok(Self {
            index,
            name,
            description: info.description().to_string(),
            misc: info.misc(),
        })
    }
}

impl CameraRecord for DeviceRecord {
    fn index(&self) -> u32 {
        self.index
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Enumerates cameras with `nokhwa::query` on the chosen backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NokhwaEnumerator {
    backend: Backend,
}

impl NokhwaEnumerator {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

/// Convert every device nokhwa reported, failing on the first one that has
/// no numeric index.
fn records_from(devices: &[CameraInfo]) -> Result<Vec<DeviceRecord>, BackendError> {
    devices
        .iter()
        .map(|info| {
            let record = DeviceRecord::try_from(info);
            match &record {
                Ok(r) => log::trace!(
                    "found camera [{}] {} ({}) {}",
                    r.index,
                    r.name,
                    r.description,
                    r.misc
                ),
                Err(e) => log::warn!("{}", e),
            }
            record
        })
        .collect()
}

impl CameraEnumerator for NokhwaEnumerator {
    type Record = DeviceRecord;
    type Error = BackendError;

    fn enumerate_cameras(&self) -> Result<Vec<DeviceRecord>, BackendError> {
        log::debug!("querying cameras via {} backend", self.backend);
        let devices = query(self.backend.into())?;
        records_from(&devices)
    }
}

/// List cameras on the system's default camera API.
///
/// If no cameras are found, returns an empty vector (not an error).
pub fn enumerate_cameras() -> Result<Vec<CameraDescriptor>, BackendError> {
    enumerate_cameras_with(Backend::Auto)
}

/// List cameras on a specific camera API.
pub fn enumerate_cameras_with(backend: Backend) -> Result<Vec<CameraDescriptor>, BackendError> {
    CameraLister::new(NokhwaEnumerator::new(backend)).enumerate_cameras()
}
