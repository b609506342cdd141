//! Fitting the grid into the maximum bounding dimension

use crate::{Error, Result};

/// Uniform scale mapping the grid onto the requested bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Multiplier applied to both horizontal axes
    pub factor: f64,
    /// Final model size `[x, y]` after scaling
    pub extent: [f64; 2],
}

impl Scale {
    /// Scale so the longer of `rows`/`cols` spans exactly `max_dim`.
    ///
    /// The shorter axis keeps the grid's aspect ratio.
    pub fn fit(rows: usize, cols: usize, block_size: f64, max_dim: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidParameter("cannot scale an empty grid".to_string()));
        }
        if !(block_size > 0.0) || !(max_dim > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "block size ({}) and max dimension ({}) must be positive",
                block_size, max_dim
            )));
        }

        let longest = rows.max(cols) as f64;
        let factor = max_dim / (longest * block_size);
        Ok(Self {
            factor,
            extent: [
                cols as f64 * block_size * factor,
                rows as f64 * block_size * factor,
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_longer_axis_hits_max_dim() {
        for (rows, cols) in [(21, 21), (25, 21), (10, 40), (1, 1)] {
            let scale = Scale::fit(rows, cols, 2.0, 74.0).unwrap();
            let longest = rows.max(cols) as f64;
            assert!((longest * 2.0 * scale.factor - 74.0).abs() < EPS);
            assert!((scale.extent[0].max(scale.extent[1]) - 74.0).abs() < EPS);
        }
    }

    #[test]
    fn test_narrow_grid_keeps_aspect() {
        // Narrower than tall: x extent below y extent
        let scale = Scale::fit(30, 20, 2.0, 150.0).unwrap();
        assert!(scale.extent[0] < scale.extent[1]);
        assert!((scale.extent[1] - 150.0).abs() < EPS);
        assert!((scale.extent[0] - 100.0).abs() < EPS);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(Scale::fit(0, 3, 2.0, 10.0).is_err());
        assert!(Scale::fit(3, 3, 0.0, 10.0).is_err());
        assert!(Scale::fit(3, 3, 2.0, -1.0).is_err());
        assert!(Scale::fit(3, 3, 2.0, f64::NAN).is_err());
    }
}
