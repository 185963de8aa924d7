use crate::parse;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Metadata for one file, parsed from jhead's tabular output.
///
/// One typed field per label jhead prints. Values that carry a unit or
/// free-form detail (focal length, aperture, GPS coordinates) stay
/// strings; labels this wrapper has no field for land in [`other`]
/// verbatim, including IPTC fields.
///
/// [`other`]: ImageInfo::other
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub file_name: PathBuf,
    /// `File size` in bytes.
    pub file_size: Option<u64>,
    /// `File date` — the filesystem mtime.
    pub file_date: Option<NaiveDateTime>,
    pub camera_make: Option<String>,
    pub camera_model: Option<String>,
    /// `Date/Time` — when the picture was taken.
    pub date_time: Option<NaiveDateTime>,
    /// `Resolution` as (width, height).
    pub resolution: Option<(u32, u32)>,
    pub orientation: Option<String>,
    pub color_bw: Option<String>,
    pub flash_used: Option<bool>,
    pub focal_length: Option<String>, // "7.0mm  (35mm equivalent: 35mm)", keep as string due to unit
    pub digital_zoom: Option<String>,
    pub ccd_width: Option<String>,
    pub exposure_time: Option<String>, // "0.0080 s  (1/125)"
    pub aperture: Option<String>,      // "f/4.9"
    pub focus_distance: Option<String>,
    pub iso: Option<u32>,
    pub exposure_bias: Option<String>,
    pub whitebalance: Option<String>,
    pub light_source: Option<String>,
    pub metering_mode: Option<String>,
    pub exposure: Option<String>,
    pub exposure_mode: Option<String>,
    pub focus_range: Option<String>,
    pub jpeg_process: Option<String>,
    pub jpeg_quality: Option<u32>,
    pub gps_latitude: Option<String>,
    pub gps_longitude: Option<String>,
    pub gps_altitude: Option<String>,
    /// Multi-line comments are rejoined with `\n`.
    pub comment: Option<String>,
    /// Labels without a typed field, kept verbatim.
    pub other: BTreeMap<String, String>,
}

impl ImageInfo {
    /// Parses captured jhead output into one `ImageInfo` per file.
    ///
    /// Sections that lack a `File name` line are dropped; a typed field
    /// whose value does not parse falls back into [`other`] so nothing
    /// the tool printed is lost.
    ///
    /// [`other`]: ImageInfo::other
    pub fn parse_output(output: &str) -> Vec<ImageInfo> {
        parse::table::blocks(output)
            .into_iter()
            .filter_map(ImageInfo::from_fields)
            .collect()
    }

    /// Image width from the `Resolution` pair.
    pub fn width(&self) -> Option<u32> {
        self.resolution.map(|(w, _)| w)
    }

    /// Image height from the `Resolution` pair.
    pub fn height(&self) -> Option<u32> {
        self.resolution.map(|(_, h)| h)
    }

    pub(crate) fn from_fields(fields: Vec<(String, String)>) -> Option<ImageInfo> {
        let mut info = ImageInfo::default();
        let mut has_name = false;

        for (label, value) in fields {
            match label.as_str() {
                "File name" => {
                    info.file_name = PathBuf::from(&value);
                    has_name = true;
                }
                "File size" => match parse::num::u64_prefix(&value) {
                    Some(n) => info.file_size = Some(n),
                    None => {
                        info.other.insert(label, value);
                    }
                },
                "File date" => match parse::datetime::naive(&value) {
                    Some(ts) => info.file_date = Some(ts),
                    None => {
                        info.other.insert(label, value);
                    }
                },
                "Camera make" => info.camera_make = Some(value),
                "Camera model" => info.camera_model = Some(value),
                "Date/Time" => match parse::datetime::naive(&value) {
                    Some(ts) => info.date_time = Some(ts),
                    None => {
                        info.other.insert(label, value);
                    }
                },
                "Resolution" => match parse::resolution::pair(&value) {
                    Some(pair) => info.resolution = Some(pair),
                    None => {
                        info.other.insert(label, value);
                    }
                },
                "Orientation" => info.orientation = Some(value),
                "Color/bw" => info.color_bw = Some(value),
                "Flash used" => match parse::flag::yes_no(&value) {
                    Some(flag) => info.flash_used = Some(flag),
                    None => {
                        info.other.insert(label, value);
                    }
                },
                "Focal length" => info.focal_length = Some(value),
                "Digital Zoom" => info.digital_zoom = Some(value),
                "CCD width" => info.ccd_width = Some(value),
                "Exposure time" => info.exposure_time = Some(value),
                "Aperture" => info.aperture = Some(value),
                "Focus dist." => info.focus_distance = Some(value),
                "ISO equiv." => match parse::num::u32_prefix(&value) {
                    Some(n) => info.iso = Some(n),
                    None => {
                        info.other.insert(label, value);
                    }
                },
                "Exposure bias" => info.exposure_bias = Some(value),
                "Whitebalance" => info.whitebalance = Some(value),
                "Light Source" => info.light_source = Some(value),
                "Metering Mode" => info.metering_mode = Some(value),
                "Exposure" => info.exposure = Some(value),
                "Exposure Mode" => info.exposure_mode = Some(value),
                "Focus range" => info.focus_range = Some(value),
                "JPEG Process" => info.jpeg_process = Some(value),
                "JPEG Quality" => match parse::num::u32_prefix(&value) {
                    Some(n) => info.jpeg_quality = Some(n),
                    None => {
                        info.other.insert(label, value);
                    }
                },
                "GPS Latitude" => info.gps_latitude = Some(value),
                "GPS Longitude" => info.gps_longitude = Some(value),
                "GPS Altitude" => info.gps_altitude = Some(value),
                "Comment" => match &mut info.comment {
                    Some(comment) => {
                        comment.push('\n');
                        comment.push_str(&value);
                    }
                    None => info.comment = Some(value),
                },
                _ => {
                    info.other.insert(label, value);
                }
            }
        }

        has_name.then_some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
File name    : photos/paris.jpg
File size    : 463023 bytes
File date    : 2011:04:06 12:13:05
Camera make  : Canon
Camera model : Canon PowerShot S40
Date/Time    : 2003:12:14 12:01:44
Resolution   : 2272 x 1704
Flash used   : No
Focal length :  7.0mm  (35mm equivalent: 35mm)
CCD width    : 7.11mm
Exposure time: 0.0080 s  (1/125)
Aperture     : f/4.9
Focus dist.  : 1.07m
ISO equiv.   : 100
Whitebalance : Auto
Metering Mode: pattern
Exposure     : program (auto)
JPEG Quality : 97
";

    #[test]
    fn test_typed_fields() {
        let infos = ImageInfo::parse_output(SAMPLE);
        assert_eq!(infos.len(), 1);
        let info = &infos[0];

        assert_eq!(info.file_name, PathBuf::from("photos/paris.jpg"));
        assert_eq!(info.file_size, Some(463023));
        assert_eq!(info.camera_make.as_deref(), Some("Canon"));
        assert_eq!(info.camera_model.as_deref(), Some("Canon PowerShot S40"));
        assert_eq!(
            info.date_time.map(|ts| ts.date()),
            NaiveDate::from_ymd_opt(2003, 12, 14)
        );
        assert_eq!(info.resolution, Some((2272, 1704)));
        assert_eq!(info.width(), Some(2272));
        assert_eq!(info.height(), Some(1704));
        assert_eq!(info.flash_used, Some(false));
        assert_eq!(
            info.focal_length.as_deref(),
            Some("7.0mm  (35mm equivalent: 35mm)")
        );
        assert_eq!(info.iso, Some(100));
        assert_eq!(info.jpeg_quality, Some(97));
        assert!(info.other.is_empty());
    }

    #[test]
    fn test_unknown_labels_preserved() {
        let output = "\
File name    : a.jpg
JPEG Process : Baseline
Shutter Prio : on
";
        let info = &ImageInfo::parse_output(output)[0];
        assert_eq!(info.jpeg_process.as_deref(), Some("Baseline"));
        assert_eq!(info.other.get("Shutter Prio").map(String::as_str), Some("on"));
    }

    #[test]
    fn test_unparsable_value_falls_back() {
        let output = "\
File name    : a.jpg
Resolution   : unknown
Date/Time    : 0000:00:00 00:00:00
";
        let info = &ImageInfo::parse_output(output)[0];
        assert_eq!(info.resolution, None);
        assert_eq!(info.date_time, None);
        assert_eq!(
            info.other.get("Resolution").map(String::as_str),
            Some("unknown")
        );
        assert_eq!(
            info.other.get("Date/Time").map(String::as_str),
            Some("0000:00:00 00:00:00")
        );
    }

    #[test]
    fn test_multiline_comment() {
        let output = "\
File name    : a.jpg
Comment      : first line
Comment      : second line
";
        let info = &ImageInfo::parse_output(output)[0];
        assert_eq!(info.comment.as_deref(), Some("first line\nsecond line"));
    }

    #[test]
    fn test_block_without_file_name_dropped() {
        let output = "Camera make  : Canon\n";
        assert!(ImageInfo::parse_output(output).is_empty());
    }

    #[test]
    fn test_serializes_round_trip() {
        let info = &ImageInfo::parse_output(SAMPLE)[0];
        let json = serde_json::to_string(info).unwrap();
        let back: ImageInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, info);
    }
}
