//! Fixed encoder settings.

/// Codec, quality and container settings passed to ffmpeg.
///
/// There is exactly one profile in use, [`EncodeProfile::STANDARD`]. It is
/// not read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeProfile {
    /// Stream taken from the first input.
    pub video_map: &'static str,
    /// Stream taken from the second input.
    pub audio_map: &'static str,
    pub video_codec: &'static str,
    /// Constant rate factor (lower is higher quality).
    pub crf: u8,
    pub preset: &'static str,
    pub tune: &'static str,
    pub audio_codec: &'static str,
    pub audio_bitrate: &'static str,
    pub sample_rate: u32,
    pub pixel_format: &'static str,
    /// Stop at the end of the shorter input.
    pub shortest: bool,
    /// `+faststart` moves the moov atom to the front for progressive download.
    pub movflags: &'static str,
}

impl EncodeProfile {
    /// H.264 (x264, CRF 18, slow, film) + AAC 384k @ 48 kHz, yuv420p, faststart.
    pub const STANDARD: EncodeProfile = EncodeProfile {
        video_map: "0:v:0",
        audio_map: "1:a:0",
        video_codec: "libx264",
        crf: 18,
        preset: "slow",
        tune: "film",
        audio_codec: "aac",
        audio_bitrate: "384k",
        sample_rate: 48000,
        pixel_format: "yuv420p",
        shortest: true,
        movflags: "+faststart",
    };
}

impl Default for EncodeProfile {
    fn default() -> Self {
        Self::STANDARD
    }
}
