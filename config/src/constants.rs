//! # Configuration Constants
//!
//! Centralized constants for the building mesh generator. Shape defaults,
//! side-count bounds, and OBJ output precision are defined here.
//!
//! ## Categories
//!
//! - **Shape Defaults**: Values substituted for missing or invalid input
//! - **Limits**: Side-count clamp range
//! - **Output**: OBJ formatting parameters
//! - **Precision**: Tolerances for geometry checks

use std::fmt;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default number of sides around the building.
///
/// Used when the side count is missing or not a finite number.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SIDES;
///
/// let user_sides: Option<u32> = None;
/// assert_eq!(user_sides.unwrap_or(DEFAULT_SIDES), 8);
/// ```
pub const DEFAULT_SIDES: u32 = 8;

/// Default building height along +Y.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_HEIGHT;
///
/// let user_height = f64::NAN;
/// let height = if user_height.is_finite() { user_height } else { DEFAULT_HEIGHT };
/// assert_eq!(height, 6.0);
/// ```
pub const DEFAULT_HEIGHT: f64 = 6.0;

/// Default radius of the bottom rim (y = 0).
pub const DEFAULT_BASE_RADIUS: f64 = 1.0;

/// Default radius of the top rim (y = height).
///
/// Smaller than [`DEFAULT_BASE_RADIUS`] so the default shape tapers.
pub const DEFAULT_TOP_RADIUS: f64 = 0.8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of sides.
///
/// A closed prism needs at least a triangular cross-section.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SIDES;
///
/// let requested = 1;
/// assert_eq!(requested.max(MIN_SIDES), 3);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Maximum number of sides.
///
/// Caps the tessellation at 10 degree steps.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SIDES;
///
/// let requested = 50;
/// assert_eq!(requested.min(MAX_SIDES), 36);
/// ```
pub const MAX_SIDES: u32 = 36;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Number of decimal digits written for `v` and `vn` coordinates.
///
/// # Example
///
/// ```rust
/// use config::constants::OBJ_DECIMALS;
///
/// let line = format!("{:.*}", OBJ_DECIMALS, 0.5);
/// assert_eq!(line, "0.5000");
/// ```
pub const OBJ_DECIMALS: usize = 4;

/// Prefix of the OBJ `o` object name.
///
/// The full name appends the four shape parameters separated by `_`.
pub const OBJECT_NAME_PREFIX: &str = "Building";

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when checking that a normal has unit length.
pub const NORMAL_TOLERANCE: f64 = 1e-9;

// =============================================================================
// PARAMETER LIMITS
// =============================================================================

/// Inclusive side-count range applied by the parameter normalizer.
///
/// # Examples
/// ```
/// use config::constants::ParamLimits;
/// let limits = ParamLimits::default();
/// assert_eq!(limits.clamp_sides(50), 36);
/// assert_eq!(limits.clamp_sides(-4), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamLimits {
    /// Smallest accepted side count.
    pub min_sides: u32,
    /// Largest accepted side count.
    pub max_sides: u32,
}

impl ParamLimits {
    /// Builds limits, rejecting ranges that cannot form a closed prism.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ParamLimits;
    /// let limits = ParamLimits::new(4, 12).expect("valid limits");
    /// assert_eq!(limits.clamp_sides(20), 12);
    /// ```
    pub fn new(min_sides: u32, max_sides: u32) -> Result<Self, ConfigError> {
        if min_sides < MIN_SIDES {
            return Err(ConfigError::InvalidMinSides(min_sides));
        }
        if min_sides > max_sides {
            return Err(ConfigError::EmptySideRange {
                min: min_sides,
                max: max_sides,
            });
        }
        Ok(Self {
            min_sides,
            max_sides,
        })
    }

    /// Clamps a (possibly negative) integer side count into range.
    #[inline]
    pub fn clamp_sides(&self, sides: i64) -> u32 {
        sides.clamp(i64::from(self.min_sides), i64::from(self.max_sides)) as u32
    }
}

impl Default for ParamLimits {
    fn default() -> Self {
        Self {
            min_sides: MIN_SIDES,
            max_sides: MAX_SIDES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the minimum side count is below a triangle.
    InvalidMinSides(u32),
    /// Raised when the minimum exceeds the maximum.
    EmptySideRange { min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinSides(value) => {
                write!(f, "min_sides must be >= {MIN_SIDES}: {value}")
            }
            ConfigError::EmptySideRange { min, max } => {
                write!(f, "min_sides ({min}) exceeds max_sides ({max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
