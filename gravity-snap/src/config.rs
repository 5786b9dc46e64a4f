use crate::ConfigError;

pub const DEFAULT_SCROLL_MS_PER_INCH: f32 = 100.0;

/// An upper bound on fling travel.
///
/// A distance bound and a size-fraction bound are mutually exclusive: setting one replaces the
/// other.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlingLimit {
    #[default]
    Disabled,
    /// Absolute bound in pixels.
    Distance(u32),
    /// Bound as a fraction of the viewport extent on the active axis.
    SizeFraction(f32),
}

impl FlingLimit {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Resolves the bound in pixels for a viewport of `extent` pixels.
    pub fn resolve(&self, extent: i32) -> Option<u32> {
        match *self {
            Self::Disabled => None,
            Self::Distance(px) => Some(px),
            Self::SizeFraction(f) => {
                let px = extent.max(0) as f32 * f;
                Some(px as u32)
            }
        }
    }
}

/// How a fling picks its snap target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SnapMode {
    /// The fling travels its (limited) ballistic distance, then snaps to the closest item.
    #[default]
    Linear,
    /// A fling moves to the neighbouring item in its direction and no further.
    Pager,
}

/// Configuration for [`crate::GravitySnapHelper`].
///
/// Read-only during a single locate/compute pass; the helper mutates it only through its
/// setters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapConfig {
    /// Snap to the padding edge instead of the viewport edge.
    pub snap_to_padding: bool,
    /// Allow snapping while the list sits at its edge, at the cost of the first/last item not
    /// being completely visible.
    pub snap_last_item: bool,
    /// Whether `Start`/`End` are mirrored.
    ///
    /// [`crate::GravitySnapHelper::attach`] overwrites this with the host's
    /// [`crate::GeometryQuery::is_rtl_locale`], so there is no builder for it.
    pub is_rtl: bool,
    pub fling_limit: FlingLimit,
    pub snap_mode: SnapMode,
    /// Smooth snap speed, in milliseconds per inch of travel.
    pub scroll_ms_per_inch: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            snap_to_padding: false,
            snap_last_item: false,
            is_rtl: false,
            fling_limit: FlingLimit::Disabled,
            snap_mode: SnapMode::Linear,
            scroll_ms_per_inch: DEFAULT_SCROLL_MS_PER_INCH,
        }
    }
}

impl SnapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snap_to_padding(mut self, snap_to_padding: bool) -> Self {
        self.snap_to_padding = snap_to_padding;
        self
    }

    pub fn with_snap_last_item(mut self, snap_last_item: bool) -> Self {
        self.snap_last_item = snap_last_item;
        self
    }

    /// Bounds fling travel to `px` pixels, clearing any size-fraction bound.
    pub fn with_max_fling_distance(mut self, px: Option<u32>) -> Self {
        self.fling_limit = px.map_or(FlingLimit::Disabled, FlingLimit::Distance);
        self
    }

    /// Bounds fling travel to a fraction of the viewport, clearing any distance bound.
    pub fn with_max_fling_size_fraction(mut self, fraction: Option<f32>) -> Self {
        self.fling_limit = fraction.map_or(FlingLimit::Disabled, FlingLimit::SizeFraction);
        self
    }

    pub fn with_snap_mode(mut self, snap_mode: SnapMode) -> Self {
        self.snap_mode = snap_mode;
        self
    }

    pub fn with_scroll_ms_per_inch(mut self, ms: f32) -> Self {
        self.scroll_ms_per_inch = ms;
        self
    }

    pub fn max_fling_distance(&self) -> Option<u32> {
        match self.fling_limit {
            FlingLimit::Distance(px) => Some(px),
            _ => None,
        }
    }

    pub fn max_fling_size_fraction(&self) -> Option<f32> {
        match self.fling_limit {
            FlingLimit::SizeFraction(f) => Some(f),
            _ => None,
        }
    }

    /// Checks the float fields (which builders and deserialization accept unchecked).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let FlingLimit::SizeFraction(f) = self.fling_limit {
            validate_fraction(f)?;
        }
        validate_ms_per_inch(self.scroll_ms_per_inch)
    }
}

pub(crate) fn validate_fraction(f: f32) -> Result<(), ConfigError> {
    if f.is_finite() && f > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFlingSizeFraction(f))
    }
}

pub(crate) fn validate_ms_per_inch(ms: f32) -> Result<(), ConfigError> {
    if ms.is_finite() && ms > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScrollMsPerInch(ms))
    }
}
