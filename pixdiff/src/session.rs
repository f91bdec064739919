//! Comparison session
//!
//! [`DiffSession`] keeps the state an interactive front end works with:
//! the two loaded images, the settings of the last comparison, its result,
//! and an optional selected region with that region's metrics.
//!
//! Starting a new comparison drops the selection. Changing the tolerance
//! recomputes the selected region's metrics but leaves the rendered diff
//! alone until the next [`DiffSession::compare`].

use log::debug;
use pixdiff_core::{
    Comparison, DEFAULT_TOLERANCE, Metrics, PixelBuffer, Rect, RenderMode, Result, compare,
    compare_region,
};

/// Two images under comparison plus the latest results
#[derive(Debug, Clone)]
pub struct DiffSession {
    first: PixelBuffer,
    second: PixelBuffer,
    mode: RenderMode,
    tolerance: u8,
    comparison: Comparison,
    selection: Option<Selection>,
}

#[derive(Debug, Clone, Copy)]
struct Selection {
    rect: Rect,
    metrics: Metrics,
}

impl DiffSession {
    /// Start a session and run an initial comparison with the default mode
    /// and tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`pixdiff_core::Error::DimensionMismatch`] if the images
    /// differ in size.
    pub fn new(first: PixelBuffer, second: PixelBuffer) -> Result<Self> {
        Self::with_settings(first, second, RenderMode::default(), DEFAULT_TOLERANCE)
    }

    /// Start a session whose initial comparison uses `mode` and `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns [`pixdiff_core::Error::DimensionMismatch`] if the images
    /// differ in size.
    pub fn with_settings(
        first: PixelBuffer,
        second: PixelBuffer,
        mode: RenderMode,
        tolerance: u8,
    ) -> Result<Self> {
        let comparison = compare(&first, &second, mode, tolerance)?;
        Ok(Self {
            first,
            second,
            mode,
            tolerance,
            comparison,
            selection: None,
        })
    }

    /// Reference image
    pub fn first(&self) -> &PixelBuffer {
        &self.first
    }

    /// Image compared against the reference
    pub fn second(&self) -> &PixelBuffer {
        &self.second
    }

    /// Mode of the last comparison
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Current tolerance
    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    /// Result of the last comparison
    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// Compare again with new settings. Any selected region is cleared.
    pub fn compare(&mut self, mode: RenderMode, tolerance: u8) -> Result<&Comparison> {
        self.comparison = compare(&self.first, &self.second, mode, tolerance)?;
        self.mode = mode;
        self.tolerance = tolerance;
        self.selection = None;
        Ok(&self.comparison)
    }

    /// Select a region and compute its metrics at the current tolerance.
    ///
    /// A rectangle with zero or negative width or height clears the
    /// selection instead and yields `None`.
    pub fn select_region(&mut self, rect: Rect) -> Result<Option<&Metrics>> {
        if rect.is_empty() {
            debug!("empty selection {:?}, clearing region", rect);
            self.selection = None;
            return Ok(None);
        }
        let metrics = compare_region(&self.first, &self.second, rect, self.tolerance)?;
        let selection = self.selection.insert(Selection { rect, metrics });
        Ok(Some(&selection.metrics))
    }

    /// Change the tolerance. Metrics of a selected region are recomputed;
    /// the rendered diff is not.
    pub fn set_tolerance(&mut self, tolerance: u8) -> Result<()> {
        self.tolerance = tolerance;
        if let Some(sel) = self.selection.as_mut() {
            sel.metrics = compare_region(&self.first, &self.second, sel.rect, tolerance)?;
        }
        Ok(())
    }

    /// Drop the selected region.
    pub fn clear_region(&mut self) {
        self.selection = None;
    }

    /// Selected region, if any
    pub fn region(&self) -> Option<Rect> {
        self.selection.map(|s| s.rect)
    }

    /// Metrics of the selected region, if any
    pub fn region_metrics(&self) -> Option<&Metrics> {
        self.selection.as_ref().map(|s| &s.metrics)
    }
}
