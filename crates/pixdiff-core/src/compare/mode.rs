//! Render modes
//!
//! A render mode decides what each output pixel of a comparison looks
//! like. Output alpha is always opaque.

use super::kernel::PixelDiff;
use crate::color::{self, MAX_VALUE};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Color painted over differing pixels in [`RenderMode::Highlight`]
pub const ALERT_COLOR: [u8; 3] = [239, 68, 68];

/// Upper bound of the heatmap green channel
pub const HEATMAP_GREEN_CAP: u8 = 80;

/// How differences are drawn into the output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Differing pixels in [`ALERT_COLOR`], unchanged pixels as image A
    /// dimmed to 60% brightness
    #[default]
    Highlight,
    /// Blue-to-red ramp driven by the mean channel difference
    Heatmap,
    /// Raw per-channel absolute differences as the output color
    DiffRgb,
}

impl RenderMode {
    /// All modes, in display order
    pub const ALL: [RenderMode; 3] = [Self::Highlight, Self::Heatmap, Self::DiffRgb];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Self::Highlight => "highlight",
            Self::Heatmap => "heatmap",
            Self::DiffRgb => "diffRGB",
        }
    }

    /// Output pixel for one compared position.
    ///
    /// `source` is image A's pixel at that position; only `Highlight`
    /// reads it.
    #[inline]
    pub fn render(self, source: &[u8], diff: PixelDiff, differs: bool) -> [u8; 4] {
        match self {
            Self::Highlight => {
                if differs {
                    let [r, g, b] = ALERT_COLOR;
                    color::opaque(r, g, b)
                } else {
                    let (r, g, b) = color::rgb(source);
                    color::opaque(dim(r), dim(g), dim(b))
                }
            }
            Self::Heatmap => {
                let strength = heat_strength(diff);
                let green = (strength as u32 * 3 / 10).min(HEATMAP_GREEN_CAP as u32) as u8;
                color::opaque(strength, green, MAX_VALUE - strength)
            }
            Self::DiffRgb => color::opaque(diff.dr, diff.dg, diff.db),
        }
    }
}

/// 60% brightness, rounded to nearest
#[inline]
fn dim(v: u8) -> u8 {
    color::scale_channel(v, 3, 5)
}

/// `floor(avgDiff)` clamped to a channel value
#[inline]
fn heat_strength(diff: PixelDiff) -> u8 {
    (diff.channel_sum() / 3).min(MAX_VALUE as u32) as u8
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "highlight" => Ok(Self::Highlight),
            "heatmap" => Ok(Self::Heatmap),
            "diffrgb" | "diff-rgb" | "diff_rgb" => Ok(Self::DiffRgb),
            _ => Err(Error::UnknownRenderMode(s.to_string())),
        }
    }
}
