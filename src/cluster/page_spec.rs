//! Paper sizes and orientation

use std::fmt;
use std::str::FromStr;

use crate::error::{PageFitError, Result};

/// Which paper dimension runs along the map's x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Short side horizontal
    #[default]
    Portrait,
    /// Long side horizontal
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }

    pub fn flipped(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

/// Result files store orientation as `true` for landscape and `false` for portrait
impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.is_landscape())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "true" => Ok(Orientation::Landscape),
            "false" => Ok(Orientation::Portrait),
            other => Err(format!("expected `true` or `false` orientation, got {other:?}")),
        }
    }
}

/// Paper dimensions, map scale and the orientation a page is laid out in
///
/// Dimensions are kept in portrait canonical form (width <= height) and
/// never change after construction. Orientation is the only mutable part.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    unscaled_width: f64,
    unscaled_height: f64,
    scale: f64,
    orientation: Orientation,
    page_id: String,
}

impl PageSpec {
    /// Creates a portrait page spec
    ///
    /// # Arguments
    ///
    /// * `width` - Paper width in paper units (short side)
    /// * `height` - Paper height in paper units (long side)
    /// * `scale` - Multiplier from paper units to map units
    /// * `page_id` - Paper name written to result files, e.g. `A3`
    pub fn new(width: f64, height: f64, scale: f64, page_id: impl Into<String>) -> Result<Self> {
        let page_id = page_id.into();
        for (param, value) in [("page width", width), ("page height", height), ("scale", scale)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PageFitError::invalid(
                    param,
                    format!("must be positive and finite, got {value}"),
                ));
            }
        }
        if width > height {
            return Err(PageFitError::invalid(
                "page width",
                format!("width {width} exceeds height {height}; give dimensions in portrait form"),
            ));
        }
        if page_id.trim().is_empty() {
            return Err(PageFitError::invalid("page id", "must not be empty"));
        }

        Ok(PageSpec {
            unscaled_width: width,
            unscaled_height: height,
            scale,
            orientation: Orientation::Portrait,
            page_id,
        })
    }

    /// A3 map sheet, 0.297 x 0.420 m
    pub fn a3(scale: f64) -> Result<Self> {
        Self::new(0.297, 0.420, scale, "A3")
    }

    /// A4 map sheet printable area, 0.190 x 0.277 m
    pub fn a4(scale: f64) -> Result<Self> {
        Self::new(0.190, 0.277, scale, "A4")
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_portrait(&mut self) {
        self.orientation = Orientation::Portrait;
    }

    pub fn set_landscape(&mut self) {
        self.orientation = Orientation::Landscape;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    /// Horizontal paper extent for the current orientation
    pub fn unscaled_width(&self) -> f64 {
        self.unscaled_width_for(self.orientation)
    }

    /// Vertical paper extent for the current orientation
    pub fn unscaled_height(&self) -> f64 {
        self.unscaled_height_for(self.orientation)
    }

    /// Horizontal map extent for the current orientation
    pub fn scaled_width(&self) -> f64 {
        self.scaled_width_for(self.orientation)
    }

    /// Vertical map extent for the current orientation
    pub fn scaled_height(&self) -> f64 {
        self.scaled_height_for(self.orientation)
    }

    pub fn scaled_width_for(&self, orientation: Orientation) -> f64 {
        self.unscaled_width_for(orientation) * self.scale
    }

    pub fn scaled_height_for(&self, orientation: Orientation) -> f64 {
        self.unscaled_height_for(orientation) * self.scale
    }

    fn unscaled_width_for(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Portrait => self.unscaled_width,
            Orientation::Landscape => self.unscaled_height,
        }
    }

    fn unscaled_height_for(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Portrait => self.unscaled_height,
            Orientation::Landscape => self.unscaled_width,
        }
    }
}
