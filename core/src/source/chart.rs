//! Remote chart endpoint source

use tracing::{debug, info};

use super::{Bitmap, QrImage};
use crate::constants::CHART_CHARSET;
use crate::{Config, Error, Result};

/// Build the chart request URL for a payload.
///
/// The payload is percent-encoded so URLs containing `&` or `?` survive
/// as a single `chl` parameter.
pub fn chart_url(endpoint: &str, size: u32, payload: &str) -> String {
    format!(
        "{}?chs={}x{}&cht=qr&chl={}&choe={}",
        endpoint,
        size,
        size,
        urlencoding::encode(payload),
        CHART_CHARSET,
    )
}

/// Fetch a rendered QR image for `payload` from the configured endpoint.
///
/// The module layout of a remote image is unknown, so the returned
/// [`QrImage`] carries none and callers detect it from the pixels.
pub async fn fetch_chart(config: &Config, payload: &str) -> Result<QrImage> {
    let url = chart_url(&config.chart_endpoint, config.chart_size, payload);
    info!(%url, "Fetching QR chart");

    let resp = reqwest::get(&url).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Fetch(format!("{} returned {}", config.chart_endpoint, status)));
    }

    let bytes = resp.bytes().await?;
    let bitmap = Bitmap::from_bytes(&bytes)?;
    debug!(width = bitmap.width(), height = bitmap.height(), "Decoded chart image");

    Ok(QrImage { bitmap, layout: None })
}
