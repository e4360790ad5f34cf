//! Linear mapping between domain values and pixel positions.

use crate::config::{ConfigError, ConfigResult};
use serde::Serialize;

/// The legal input range of the selector, in domain units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Create a domain. Both bounds must be finite, `min < max`, and the
    /// span must be a normal float.
    pub fn new(min: f64, max: f64) -> ConfigResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFinite("domain"));
        }
        if min >= max || !(max - min).is_normal() {
            return Err(ConfigError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the domain (`max - min`).
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value into the domain. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        clamp_or_min(value, self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The on-screen extent the domain is mapped onto, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelRange {
    min: f64,
    max: f64,
}

impl PixelRange {
    /// Create a pixel range. Both bounds must be finite, `min < max`, and
    /// the span must be a normal float.
    pub fn new(min: f64, max: f64) -> ConfigResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFinite("pixel_range"));
        }
        if min >= max || !(max - min).is_normal() {
            return Err(ConfigError::InvalidPixelRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the range in pixels.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a pixel coordinate into the range. NaN maps to `min`.
    pub fn clamp(&self, pixel: f64) -> f64 {
        clamp_or_min(pixel, self.min, self.max)
    }
}

fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Upper bound on the tick count honored by [`LinearScale::ticks`].
pub const MAX_TICKS: usize = 1_000;

/// Linear scale from a [`Domain`] onto a [`PixelRange`].
///
/// Both ends are validated on construction so the mapping is always
/// invertible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: Domain,
    range: PixelRange,
}

impl LinearScale {
    /// Create a new scale.
    pub fn new(domain: Domain, range: PixelRange) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn range(&self) -> PixelRange {
        self.range
    }

    /// Convert a domain value to a pixel position.
    pub fn to_pixel(&self, value: f64) -> f64 {
        self.range.min + (value - self.domain.min) / self.domain.span() * self.range.span()
    }

    /// Convert a pixel position back to a domain value.
    pub fn to_domain(&self, pixel: f64) -> f64 {
        self.domain.min + (pixel - self.range.min) / self.range.span() * self.domain.span()
    }

    /// Bring an untrusted pointer coordinate back into the pixel range.
    ///
    /// Returns the sanitized pixel and whether it had to be changed.
    pub fn sanitize_pixel(&self, pixel: f64) -> (f64, bool) {
        let clamped = self.range.clamp(pixel);
        (clamped, clamped != pixel)
    }

    /// Generate roughly `count` evenly spaced, human-friendly tick values
    /// covering the domain. Steps are 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }

        let raw_step = self.domain.span() / count.min(MAX_TICKS) as f64;
        if !raw_step.is_normal() {
            return Vec::new();
        }
        let power = raw_step.log10().floor();
        let error = raw_step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        // Negative powers: divide by an integer increment to keep 0.2 exact.
        if power < 0.0 {
            let inverse = 10f64.powf(-power) / factor;
            if !inverse.is_finite() {
                return Vec::new();
            }
            let start = (self.domain.min * inverse).ceil() as i64;
            let stop = (self.domain.max * inverse).floor() as i64;
            (start..=stop).map(|i| i as f64 / inverse).collect()
        } else {
            let step = factor * 10f64.powf(power);
            if !step.is_finite() || step <= 0.0 {
                return Vec::new();
            }
            let start = (self.domain.min / step).ceil() as i64;
            let stop = (self.domain.max / step).floor() as i64;
            (start..=stop).map(|i| i as f64 * step).collect()
        }
    }
}
