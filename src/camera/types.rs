//! Camera types and the enumeration seam.

use serde::Serialize;
use std::fmt;

/// A camera as reported by whatever discovers devices on this machine.
///
/// The index is assigned by the discovery mechanism and may change between
/// calls or reboots.
pub trait CameraRecord {
    /// Device index for selection
    fn index(&self) -> u32;
    /// Human-readable device name (may be empty)
    fn name(&self) -> &str;
}

/// Something that can list the cameras currently attached.
pub trait CameraEnumerator {
    type Record: CameraRecord;
    type Error;

    /// Query the available cameras, in the order the platform reports them.
    fn enumerate_cameras(&self) -> Result<Vec<Self::Record>, Self::Error>;
}

impl<F, R, E> CameraEnumerator for F
where
    F: Fn() -> Result<Vec<R>, E>,
    R: CameraRecord,
{
    type Record = R;
    type Error = E;

    fn enumerate_cameras(&self) -> Result<Vec<R>, E> {
        self()
    }
}

/// The `(index, name)` pair handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CameraDescriptor {
    pub index: u32,
    pub name: String,
}

impl CameraDescriptor {
    pub fn new(index: u32, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

impl From<CameraDescriptor> for (u32, String) {
    fn from(d: CameraDescriptor) -> Self {
        (d.index, d.name)
    }
}

impl fmt::Display for CameraDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.name)
    }
}

impl CameraRecord for CameraDescriptor {
    fn index(&self) -> u32 {
        self.index
    }

    fn name(&self) -> &str {
        &self.name
    }
}
