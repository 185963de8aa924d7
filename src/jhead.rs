use crate::error::JheadError;
use crate::execute;
use crate::metadata::ImageInfo;
use crate::parse;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Main struct for interacting with the jhead tool.
///
/// A `Jhead` value targets a file-glob pattern. Every operation expands
/// the pattern, runs one `jhead` subprocess over all matched files and
/// classifies the result; nothing is executed at construction time, so
/// building a `Jhead` is free.
///
/// The tool prints per-file errors on stderr and may still exit zero,
/// so failures are classified from stderr before the exit status.
///
/// # Example
/// ```no_run
/// use jhead::{Jhead, JheadError};
///
/// fn main() -> Result<(), JheadError> {
///     let jhead = Jhead::new("photos/*.jpg");
///     for info in jhead.metadata()? {
///         println!("{}: {:?}", info.file_name.display(), info.resolution);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Jhead {
    executable: PathBuf,
    pattern: String,
    model: Option<String>,
    exif_only: bool,
    orientation: Option<Orientation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Portrait,
    Landscape,
}

impl Jhead {
    /// Targets `pattern` using the `jhead` binary found on `PATH`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_executable(Path::new("jhead"), pattern)
    }

    /// Targets `pattern` using a specific `jhead` binary.
    pub fn with_executable(executable: &Path, pattern: impl Into<String>) -> Self {
        Self {
            executable: executable.to_path_buf(),
            pattern: pattern.into(),
            model: None,
            exif_only: false,
            orientation: None,
        }
    }

    // --- File matching options, forwarded to the tool ---

    /// Only process files whose camera model contains `substring` (`-model`).
    pub fn model(mut self, substring: impl Into<String>) -> Self {
        self.model = Some(substring.into());
        self
    }

    /// Only process files that contain an EXIF header (`-exonly`).
    pub fn exif_only(mut self) -> Self {
        self.exif_only = true;
        self
    }

    /// Only process portrait-orientation images (`-orp`).
    pub fn portraits_only(mut self) -> Self {
        self.orientation = Some(Orientation::Portrait);
        self
    }

    /// Only process landscape-orientation images (`-orl`).
    pub fn landscapes_only(mut self) -> Self {
        self.orientation = Some(Orientation::Landscape);
        self
    }

    // --- Target selection ---

    /// The glob pattern this instance targets.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Expands the pattern to the matched paths, sorted.
    ///
    /// This is the file list every operation runs against. The `-model`,
    /// `-exonly`, `-orp`/`-orl` options filter further inside the tool,
    /// which is the only place the EXIF data needed for them exists.
    pub fn files(&self) -> Result<Vec<PathBuf>, JheadError> {
        let entries = glob::glob(&self.pattern).map_err(|source| JheadError::BadPattern {
            pattern: self.pattern.clone(),
            source,
        })?;
        let mut files = Vec::new();
        for entry in entries {
            files.push(entry.map_err(glob::GlobError::into_error)?);
        }
        files.sort();
        Ok(files)
    }

    /// Number of files the pattern matches.
    pub fn count(&self) -> Result<usize, JheadError> {
        Ok(self.files()?.len())
    }

    // --- Tool version ---

    /// Version of the `jhead` binary on `PATH`.
    ///
    /// Runs `jhead -V` and extracts the version number from the banner.
    pub fn version() -> Result<String, JheadError> {
        Self::version_of(Path::new("jhead"))
    }

    /// Version of a specific `jhead` binary.
    pub fn version_of(executable: &Path) -> Result<String, JheadError> {
        let banner = execute::execute_text(executable, &["-V".to_string()])?;
        parse::version::from_banner(&banner)
            .ok_or(JheadError::VersionNotRecognized { banner })
    }

    // --- Reading metadata ---

    /// Reads metadata for every matched file.
    ///
    /// Runs `jhead {files...}` and parses the tabular output into one
    /// [`ImageInfo`] per file. An empty match yields an empty vector.
    pub fn metadata(&self) -> Result<Vec<ImageInfo>, JheadError> {
        match self.run(&[])? {
            Some(output) => Ok(ImageInfo::parse_output(&output)),
            None => Ok(Vec::new()),
        }
    }

    /// Reads metadata for a pattern that matches exactly one file.
    ///
    /// Any other match count is a [`JheadError::NotOneFile`] error.
    pub fn info(&self) -> Result<ImageInfo, JheadError> {
        let matched = self.count()?;
        if matched != 1 {
            return Err(JheadError::NotOneFile {
                pattern: self.pattern.clone(),
                matched,
            });
        }
        self.metadata()?
            .into_iter()
            .next()
            .ok_or_else(|| JheadError::UnexpectedOutput {
                pattern: self.pattern.clone(),
            })
    }

    // --- EXIF and section editing ---

    /// Transplants the EXIF header of `donor` into the matched files (`-te`).
    ///
    /// The donor path may use the tool's `&i` substitution to derive one
    /// donor per matched file.
    pub fn transplant_exif(&self, donor: &Path) -> Result<(), JheadError> {
        self.run_quiet(&["-te".into(), donor.to_string_lossy().into_owned()])
    }

    /// Deletes the JPEG comment section (`-dc`).
    pub fn delete_comment(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-dc".into()])
    }

    /// Deletes the entire EXIF header (`-de`).
    pub fn delete_exif(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-de".into()])
    }

    /// Deletes the IPTC section (`-di`).
    pub fn delete_iptc(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-di".into()])
    }

    /// Deletes the XMP section (`-dx`).
    pub fn delete_xmp(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-dx".into()])
    }

    /// Deletes unknown JPEG sections (`-du`).
    pub fn delete_unknown(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-du".into()])
    }

    /// Strips everything that is not essential image data (`-purejpg`).
    pub fn pure_jpg(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-purejpg".into()])
    }

    /// Creates a minimal EXIF header from scratch (`-mkexif`).
    pub fn make_exif(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-mkexif".into()])
    }

    /// Sets the JPEG comment to a literal string (`-cl`).
    pub fn set_comment(&self, comment: &str) -> Result<(), JheadError> {
        self.run_quiet(&["-cl".into(), comment.to_string()])
    }

    /// Saves each file's comment to `dest` (`-cs`, `&i` substitution applies).
    pub fn save_comment(&self, dest: &Path) -> Result<(), JheadError> {
        self.run_quiet(&["-cs".into(), dest.to_string_lossy().into_owned()])
    }

    /// Replaces each file's comment with the contents of `src` (`-ci`).
    pub fn insert_comment(&self, src: &Path) -> Result<(), JheadError> {
        self.run_quiet(&["-ci".into(), src.to_string_lossy().into_owned()])
    }

    // --- Date and time ---

    /// Sets each file's mtime from its EXIF timestamp (`-ft`).
    pub fn set_file_time_from_exif(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-ft".into()])
    }

    /// Sets each file's EXIF timestamp from its mtime (`-dsft`).
    pub fn set_exif_from_file_time(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-dsft".into()])
    }

    /// Renames the matched files according to their EXIF timestamp (`-n`).
    ///
    /// `format` is passed through verbatim and may use the tool's
    /// strftime-style codes, e.g. `%Y%m%d-%H%M%S`. `None` uses the
    /// tool's default numbering scheme.
    pub fn rename(&self, format: Option<&str>) -> Result<(), JheadError> {
        let arg = match format {
            Some(format) => format!("-n{format}"),
            None => "-n".to_string(),
        };
        self.run_quiet(&[arg])
    }

    /// Shifts the EXIF timestamp by a signed offset (`-ta±h:mm:ss`).
    ///
    /// Sub-second precision is dropped; the tool only understands whole
    /// seconds.
    pub fn adjust_time(&self, delta: TimeDelta) -> Result<(), JheadError> {
        self.run_quiet(&[time_adjust_arg(delta)])
    }

    /// Adjusts the EXIF date by the difference of two dates (`-da`).
    ///
    /// Used to fix a camera whose date was set wrong: pass the date a
    /// picture should carry and the date it actually carries.
    pub fn adjust_date(&self, new: NaiveDate, old: NaiveDate) -> Result<(), JheadError> {
        self.run_quiet(&[format!(
            "-da{}-{}",
            new.format("%Y:%m:%d"),
            old.format("%Y:%m:%d")
        )])
    }

    /// Sets the EXIF timestamp to a fixed value (`-ts`).
    pub fn set_datetime(&self, timestamp: NaiveDateTime) -> Result<(), JheadError> {
        self.run_quiet(&[format!("-ts{}", timestamp.format("%Y:%m:%d-%H:%M:%S"))])
    }

    /// Sets the date part of the EXIF timestamp, keeping the time (`-ds`).
    pub fn set_date(&self, date: NaiveDate) -> Result<(), JheadError> {
        self.run_quiet(&[format!("-ds{}", date.format("%Y:%m:%d"))])
    }

    // --- Thumbnails ---

    /// Deletes the embedded thumbnail (`-dt`).
    pub fn delete_thumbnail(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-dt".into()])
    }

    /// Saves each file's thumbnail to `dest` (`-st`, `&i` substitution applies).
    pub fn save_thumbnail(&self, dest: &Path) -> Result<(), JheadError> {
        self.run_quiet(&["-st".into(), dest.to_string_lossy().into_owned()])
    }

    /// Replaces the embedded thumbnail with the image in `src` (`-rt`).
    ///
    /// Only works on files that already have a thumbnail; the tool cannot
    /// grow a new thumbnail slot.
    pub fn replace_thumbnail(&self, src: &Path) -> Result<(), JheadError> {
        self.run_quiet(&["-rt".into(), src.to_string_lossy().into_owned()])
    }

    /// Replaces the embedded thumbnail with raw JPEG bytes.
    ///
    /// Spools the bytes to a temporary file and runs `-rt` against it.
    pub fn replace_thumbnail_bytes<D: AsRef<[u8]>>(&self, data: D) -> Result<(), JheadError> {
        let mut temp_file = NamedTempFile::new()?;
        temp_file.write_all(data.as_ref())?;
        temp_file.flush()?;

        let temp_path = temp_file.path().to_string_lossy().into_owned();
        // temp_file is dropped (and deleted) after the tool ran.
        self.run_quiet(&["-rt".into(), temp_path])
    }

    /// Regenerates the thumbnail from the image data (`-rgt`).
    ///
    /// `max_size` bounds the longer thumbnail dimension in pixels. The
    /// tool shells out to `mogrify` for this, which must be installed.
    pub fn regenerate_thumbnail(&self, max_size: Option<u32>) -> Result<(), JheadError> {
        let arg = match max_size {
            Some(size) => format!("-rgt{size}"),
            None => "-rgt".to_string(),
        };
        self.run_quiet(&[arg])
    }

    // --- Rotation ---

    /// Losslessly rotates the matched files per their orientation tag and
    /// clears the tag (`-autorot`). The tool shells out to `jpegtran`.
    pub fn autorotate(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-autorot".into()])
    }

    /// Clears the orientation tag without touching the image (`-norot`).
    pub fn clear_rotation(&self) -> Result<(), JheadError> {
        self.run_quiet(&["-norot".into()])
    }

    // --- Misc ---

    /// Runs a shell command on each matched file (`-cmd`).
    ///
    /// The command sees each file as `&i`; the tool re-reads the file
    /// afterwards and keeps the EXIF date intact.
    pub fn run_command(&self, command: &str) -> Result<(), JheadError> {
        self.run_quiet(&["-cmd".into(), command.to_string()])
    }

    // --- Plumbing ---

    fn match_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(model) = &self.model {
            args.push("-model".to_string());
            args.push(model.clone());
        }
        if self.exif_only {
            args.push("-exonly".to_string());
        }
        match self.orientation {
            Some(Orientation::Portrait) => args.push("-orp".to_string()),
            Some(Orientation::Landscape) => args.push("-orl".to_string()),
            None => {}
        }
        args
    }

    /// Runs `jhead {match_args} {op_args} {files...}` over the matched
    /// files. `Ok(None)` when the pattern matches nothing: the tool treats
    /// an empty file list as a usage error, so it is never invoked.
    fn run(&self, op_args: &[String]) -> Result<Option<String>, JheadError> {
        let files = self.files()?;
        if files.is_empty() {
            log::debug!("pattern '{}' matched no files, skipping", self.pattern);
            return Ok(None);
        }

        let mut args = self.match_args();
        args.extend_from_slice(op_args);
        args.extend(files.iter().map(|p| p.to_string_lossy().into_owned()));

        execute::execute_text(&self.executable, &args).map(Some)
    }

    /// Like [`run`](Self::run), for operations whose stdout is only
    /// progress chatter ("Modified: x.jpg").
    fn run_quiet(&self, op_args: &[String]) -> Result<(), JheadError> {
        if let Some(output) = self.run(op_args)? {
            for line in output.lines().filter(|l| !l.trim().is_empty()) {
                log::debug!("jhead: {}", line.trim());
            }
        }
        Ok(())
    }
}

fn time_adjust_arg(delta: TimeDelta) -> String {
    let total = delta.num_seconds();
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    format!(
        "-ta{sign}{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod arg_tests {
    use super::*;

    #[test]
    fn test_time_adjust_arg() {
        assert_eq!(time_adjust_arg(TimeDelta::hours(1)), "-ta+1:00:00");
        assert_eq!(time_adjust_arg(TimeDelta::seconds(3690)), "-ta+1:01:30");
        assert_eq!(time_adjust_arg(TimeDelta::seconds(-45)), "-ta-0:00:45");
        // Offsets beyond a day stay in hours, the tool has no day unit.
        assert_eq!(time_adjust_arg(TimeDelta::hours(-26)), "-ta-26:00:00");
        assert_eq!(time_adjust_arg(TimeDelta::zero()), "-ta+0:00:00");
    }

    #[test]
    fn test_match_args_order() {
        let jhead = Jhead::new("*.jpg")
            .model("Canon")
            .exif_only()
            .landscapes_only();
        assert_eq!(
            jhead.match_args(),
            vec!["-model", "Canon", "-exonly", "-orl"]
        );
        assert!(Jhead::new("*.jpg").match_args().is_empty());
    }
}
