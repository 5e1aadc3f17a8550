//! Behaviour of `CameraLister` with in-process enumerators.

use camera_lister::camera::{
    CameraDescriptor, CameraEnumerator, CameraLister, CameraRecord, DeviceRecord,
};
use std::cell::RefCell;
use std::fmt;

/// A record shaped like what a discovery library hands back.
struct Found {
    index: u32,
    name: String,
}

impl CameraRecord for Found {
    fn index(&self) -> u32 {
        self.index
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn found(index: u32, name: &str) -> Found {
    Found {
        index,
        name: name.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DiscoveryError {
    DeviceAccess { device: String, code: i32 },
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::DeviceAccess { device, code } => {
                write!(f, "cannot access {} (code {})", device, code)
            }
        }
    }
}

/// Scripted enumerator returning a fixed outcome and recording calls.
struct Scripted {
    outcome: Result<Vec<(u32, &'static str)>, DiscoveryError>,
    calls: RefCell<usize>,
}

impl Scripted {
    fn new(outcome: Result<Vec<(u32, &'static str)>, DiscoveryError>) -> Self {
        Self {
            outcome,
            calls: RefCell::new(0),
        }
    }
}

impl CameraEnumerator for Scripted {
    type Record = Found;
    type Error = DiscoveryError;

    fn enumerate_cameras(&self) -> Result<Vec<Found>, DiscoveryError> {
        *self.calls.borrow_mut() += 1;
        self.outcome
            .clone()
            .map(|list| list.into_iter().map(|(i, n)| found(i, n)).collect())
    }
}

#[test]
fn test_integrated_and_usb_cameras() {
    let lister = CameraLister::new(Scripted::new(Ok(vec![
        (0, "Integrated Camera"),
        (1, "USB Webcam"),
    ])));

    let cameras: Vec<(u32, String)> = lister
        .enumerate_cameras()
        .unwrap()
        .into_iter()
        .map(Into::into)
        .collect();

    assert_eq!(
        cameras,
        vec![
            (0, "Integrated Camera".to_string()),
            (1, "USB Webcam".to_string()),
        ]
    );
    assert_eq!(*lister.enumerator().calls.borrow(), 1);
}

#[test]
fn test_no_cameras_gives_empty_list() {
    let lister = CameraLister::new(Scripted::new(Ok(vec![])));
    assert_eq!(lister.enumerate_cameras(), Ok(vec![]));
}

#[test]
fn test_device_access_error_is_returned_unchanged() {
    let error = DiscoveryError::DeviceAccess {
        device: "/dev/video0".to_string(),
        code: 13,
    };
    let lister = CameraLister::new(Scripted::new(Err(error.clone())));

    let result = lister.enumerate_cameras();
    assert_eq!(result, Err(error));
    assert_eq!(*lister.enumerator().calls.borrow(), 1);
}

#[test]
fn test_length_order_and_fields_preserved() {
    let script = vec![
        (3, "Rear"),
        (0, ""),
        (3, "Rear"),
        (1, "Caméra USB 😀"),
        (2, "Zeta"),
    ];
    let lister = CameraLister::new(Scripted::new(Ok(script.clone())));

    let cameras = lister.enumerate_cameras().unwrap();
    assert_eq!(cameras.len(), script.len());
    for (camera, (index, name)) in cameras.iter().zip(&script) {
        assert_eq!(camera, &CameraDescriptor::new(*index, *name));
    }
}

#[test]
fn test_extra_record_fields_are_dropped() {
    let lister = CameraLister::new(|| {
        Ok::<_, DiscoveryError>(vec![DeviceRecord {
            index: 4,
            name: "Capture Card".to_string(),
            description: "HDMI input".to_string(),
            misc: "/dev/video4".to_string(),
        }])
    });
    let cameras = lister.enumerate_cameras().unwrap();
    assert_eq!(cameras, vec![CameraDescriptor::new(4, "Capture Card")]);
}
