//! Reduce whatever the enumerator reports to `(index, name)` descriptors.

use super::types::{CameraDescriptor, CameraEnumerator, CameraRecord};

/// Lists cameras through a single enumerator.
///
/// Each call queries the enumerator exactly once. Records are copied into
/// descriptors in the order they arrive, and any enumerator error is handed
/// back untouched.
#[derive(Debug, Clone)]
pub struct CameraLister<E> {
    enumerator: E,
}

impl<E: CameraEnumerator> CameraLister<E> {
    pub fn new(enumerator: E) -> Self {
        Self { enumerator }
    }

    pub fn enumerator(&self) -> &E {
        &self.enumerator
    }

    /// List the cameras currently available.
    ///
    /// An empty list is a valid result, not an error.
    pub fn enumerate_cameras(&self) -> Result<Vec<CameraDescriptor>, E::Error> {
        let records = self.enumerator.enumerate_cameras()?;
        log::debug!("enumerator returned {} camera record(s)", records.len());

        Ok(records
            .iter()
            .map(|r| CameraDescriptor::new(r.index(), r.name()))
            .collect())
    }
}
