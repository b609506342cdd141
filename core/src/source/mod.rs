//! QR bitmap sources
//!
//! - Remote chart endpoint (layout detected from the image)
//! - Local `qrcode` encoder (layout known exactly)

mod bitmap;
mod chart;
mod encode;

pub use bitmap::Bitmap;
pub use chart::{chart_url, fetch_chart};
pub use encode::{encode_local, EcLevel, EncodeOptions};

use crate::grid::ModuleLayout;

/// A QR bitmap plus, when the source knows it, its module layout
#[derive(Debug, Clone)]
pub struct QrImage {
    pub bitmap: Bitmap,
    pub layout: Option<ModuleLayout>,
}

impl QrImage {
    /// Layout reported by the source, or one detected from the bitmap
    pub fn layout(&self) -> crate::Result<ModuleLayout> {
        match &self.layout {
            Some(layout) => Ok(layout.clone()),
            None => ModuleLayout::detect(&self.bitmap),
        }
    }
}
