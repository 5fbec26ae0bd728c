use thiserror::Error;

const LOGO_PNG: &[u8] = include_bytes!("../../assets/logo.png");

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("failed to decode logo image: {0}")]
    Decode(#[source] image::ImageError),
}

/// Decoded logo pixels.
#[derive(Debug, Clone)]
pub struct DecodedLogo {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8.
    pub rgba: Vec<u8>,
}

/// The organization logo, embedded in the binary.
///
/// UI toolkits render it from [`bytes`](Self::bytes); hosts that need raw
/// pixels (window icons, tray icons) use [`decode`](Self::decode).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoImage;

impl LogoImage {
    /// The encoded PNG.
    pub fn bytes() -> &'static [u8] {
        LOGO_PNG
    }

    pub fn decode() -> Result<DecodedLogo, LogoError> {
        let img = image::load_from_memory(LOGO_PNG)
            .map_err(LogoError::Decode)?
            .into_rgba8();
        let (width, height) = img.dimensions();
        Ok(DecodedLogo {
            width,
            height,
            rgba: img.into_raw(),
        })
    }
}
