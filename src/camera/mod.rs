//! Camera discovery.
//!
//! - Enumeration seam via [`CameraEnumerator`] and [`CameraRecord`]
//! - `(index, name)` listing via [`CameraLister`] and [`enumerate_cameras`]
//! - Platform backend via [`NokhwaEnumerator`]
//! - Picking one camera via [`select`]

mod device;
mod lister;
mod select;
mod types;

pub use device::{
    enumerate_cameras, enumerate_cameras_with, Backend, BackendError, DeviceRecord,
    NokhwaEnumerator,
};
pub use lister::CameraLister;
pub use select::{select, CameraSelector, SelectError};
pub use types::{CameraDescriptor, CameraEnumerator, CameraRecord};
