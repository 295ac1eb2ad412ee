//! Pre-flight checks run before the encoder is launched.

use std::path::Path;

use crate::errors::{CombineError, CombineResult};
use crate::models::{InputRole, MuxRequest};

/// Check that an input exists as a regular file.
///
/// The file is not opened; readability is left to the encoder.
pub fn check_input(role: InputRole, path: &Path) -> CombineResult<()> {
    if path.is_file() {
        tracing::debug!("{} input found: {}", role, path.display());
        Ok(())
    } else {
        Err(CombineError::missing_input(role, path))
    }
}

/// Check both inputs, video first.
pub fn check_inputs(request: &MuxRequest) -> CombineResult<()> {
    check_input(InputRole::Video, &request.video)?;
    check_input(InputRole::Audio, &request.audio)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_existing_file() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        fs::write(&video, b"v").unwrap();

        assert!(check_input(InputRole::Video, &video).is_ok());
    }

    #[test]
    fn rejects_directory() {
        let dir = tempdir().unwrap();
        let result = check_input(InputRole::Audio, dir.path());
        assert!(matches!(
            result,
            Err(CombineError::MissingInput {
                role: InputRole::Audio,
                ..
            })
        ));
    }

    #[test]
    fn video_is_checked_before_audio() {
        let dir = tempdir().unwrap();
        let request = MuxRequest::new(
            dir.path().join("missing.mp4"),
            dir.path().join("missing.wav"),
            dir.path().join("final.mp4"),
        );

        match check_inputs(&request) {
            Err(CombineError::MissingInput { role, path }) => {
                assert_eq!(role, InputRole::Video);
                assert!(path.ends_with("missing.mp4"));
            }
            other => panic!("expected missing video, got {:?}", other),
        }
    }

    #[test]
    fn reports_missing_audio() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        fs::write(&video, b"v").unwrap();
        let request = MuxRequest::new(&video, dir.path().join("missing.wav"), "final.mp4");

        let err = check_inputs(&request).unwrap_err();
        assert!(err.to_string().contains("missing.wav"));
    }
}
