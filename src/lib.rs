//! # jhead
//!
//! A Rust wrapper library for Matthias Wandel's jhead command-line tool.
//!
//! All actual EXIF decoding, JPEG section rewriting and lossless rotation
//! happens inside the external `jhead` binary; this crate builds the
//! argument list for each operation, runs the tool as a subprocess over a
//! file-glob pattern, and parses its tabular text output back into typed
//! values.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use jhead::{Jhead, JheadError};
//!
//! fn main() -> Result<(), JheadError> {
//!     let jhead = Jhead::new("photos/*.jpg");
//!
//!     // Read metadata for every matched file.
//!     for info in jhead.metadata()? {
//!         println!(
//!             "{}: {:?} by {:?}",
//!             info.file_name.display(),
//!             info.resolution,
//!             info.camera_model,
//!         );
//!     }
//!
//!     // Rotate per the orientation tag, then fix up file times.
//!     jhead.autorotate()?;
//!     jhead.set_file_time_from_exif()?;
//!
//!     // Strip everything but the image data before uploading.
//!     Jhead::new("upload/*.jpg").pure_jpg()?;
//!     Ok(())
//! }
//! ```
//!
//! Operations only process the files the pattern matches; the tool's own
//! matching options narrow that further:
//!
//! ```no_run
//! use jhead::{Jhead, JheadError};
//! use chrono::TimeDelta;
//!
//! fn main() -> Result<(), JheadError> {
//!     // The camera clock was an hour fast, but only fix the Canon shots.
//!     Jhead::new("roll/*.jpg")
//!         .model("Canon")
//!         .adjust_time(TimeDelta::hours(-1))?;
//!     Ok(())
//! }
//! ```

// Public API
mod error;
mod jhead;
mod metadata;

pub use error::JheadError;
pub use jhead::Jhead;
pub use metadata::ImageInfo;

mod execute;
mod parse;
