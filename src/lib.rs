//! camera-lister library crate.
//!
//! Lists the cameras attached to this machine as `(index, name)` pairs.
//!
//! ```no_run
//! for camera in camera_lister::enumerate_cameras()? {
//!     println!("{} {}", camera.index, camera.name);
//! }
//! # Ok::<(), camera_lister::camera::BackendError>(())
//! ```

pub mod camera;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use camera::enumerate_cameras;
