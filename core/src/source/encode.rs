//! Local QR encoding source

use std::fmt;
use std::str::FromStr;

use image::{imageops, DynamicImage, Luma, Rgba, RgbaImage};
use qrcode::QrCode;
use tracing::debug;

use super::{Bitmap, QrImage};
use crate::constants::{DEFAULT_MODULE_PX, DEFAULT_QUIET_ZONE, MAX_IMAGE_SIDE};
use crate::grid::ModuleLayout;
use crate::{Error, Result};

/// QR error-correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for EcLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(EcLevel::L),
            "M" => Ok(EcLevel::M),
            "Q" => Ok(EcLevel::Q),
            "H" => Ok(EcLevel::H),
            other => Err(Error::InvalidParameter(format!(
                "unknown error-correction level '{}' (expected L, M, Q or H)",
                other
            ))),
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(s)
    }
}

/// How a payload is rendered locally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub ec_level: EcLevel,
    /// Pixels per module edge
    pub module_px: u32,
    /// Blank border width in modules
    pub quiet_zone: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::default(),
            module_px: DEFAULT_MODULE_PX,
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }
}

/// Encode `payload` into a QR bitmap with a known layout.
pub fn encode_local(payload: &str, options: &EncodeOptions) -> Result<QrImage> {
    if options.module_px == 0 {
        return Err(Error::InvalidParameter("module size must be at least 1 pixel".to_string()));
    }

    let code = QrCode::with_error_correction_level(payload.as_bytes(), options.ec_level.into())
        .map_err(|e| Error::Encode(e.to_string()))?;
    let modules = code.width() as u32;

    let side = modules
        .checked_add(options.quiet_zone.saturating_mul(2))
        .and_then(|n| n.checked_mul(options.module_px))
        .filter(|&side| side <= MAX_IMAGE_SIDE)
        .ok_or_else(|| {
            Error::InvalidParameter(format!(
                "{} modules with a {}-module quiet zone at {} px per module exceed {} px",
                modules, options.quiet_zone, options.module_px, MAX_IMAGE_SIDE
            ))
        })?;
    let border = options.quiet_zone * options.module_px;

    let symbol = code
        .render::<Luma<u8>>()
        .module_dimensions(options.module_px, options.module_px)
        .quiet_zone(false)
        .build();

    let mut canvas = RgbaImage::from_pixel(side, side, Rgba([255, 255, 255, 255]));
    imageops::overlay(
        &mut canvas,
        &DynamicImage::ImageLuma8(symbol).to_rgba8(),
        i64::from(border),
        i64::from(border),
    );

    debug!(
        modules,
        module_px = options.module_px,
        quiet_zone = options.quiet_zone,
        side,
        "Encoded QR code locally"
    );

    let layout = ModuleLayout::with_quiet_zone(side, side, options.module_px, options.quiet_zone)?;
    Ok(QrImage {
        bitmap: Bitmap::from(canvas),
        layout: Some(layout),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ec_level_parse() {
        assert_eq!("h".parse::<EcLevel>().unwrap(), EcLevel::H);
        assert_eq!("M".parse::<EcLevel>().unwrap(), EcLevel::M);
        assert!("X".parse::<EcLevel>().is_err());
        assert_eq!(EcLevel::Q.to_string(), "Q");
    }

    #[test]
    fn test_encode_version_1() {
        // Short payloads fit in a version 1 symbol (21x21 modules)
        let options = EncodeOptions { ec_level: EcLevel::L, module_px: 3, quiet_zone: 2 };
        let image = encode_local("hello", &options).unwrap();

        assert_eq!(image.bitmap.width(), (21 + 4) * 3);
        assert_eq!(image.bitmap.height(), (21 + 4) * 3);

        let layout = image.layout.unwrap();
        assert_eq!(layout.cols, 21);
        assert_eq!(layout.rows, 21);

        // Quiet zone is blank, the finder corner is dark
        assert!(!image.bitmap.is_ink(0, 0));
        assert!(!image.bitmap.is_ink(5, 5));
        assert!(image.bitmap.is_ink(6, 6));
    }

    #[test]
    fn test_encode_rejects_zero_module_size() {
        let options = EncodeOptions { module_px: 0, ..Default::default() };
        assert!(matches!(
            encode_local("hello", &options),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_encode_rejects_oversized_image() {
        for options in [
            EncodeOptions { ec_level: EcLevel::L, module_px: 200_000_000, quiet_zone: 4 },
            EncodeOptions { ec_level: EcLevel::L, module_px: 1, quiet_zone: u32::MAX },
            EncodeOptions { ec_level: EcLevel::L, module_px: 600, quiet_zone: 4 },
        ] {
            assert!(
                matches!(encode_local("hello", &options), Err(Error::InvalidParameter(_))),
                "{:?}",
                options
            );
        }
    }

    #[test]
    fn test_encode_payload_too_long() {
        let payload = "x".repeat(8000);
        assert!(matches!(
            encode_local(&payload, &EncodeOptions::default()),
            Err(Error::Encode(_))
        ));
    }
}
