/// Configuration for the equation solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Distance from the focal point below which a divisor counts as zero
    /// and the conjugate distance is reported as infinite.
    pub focal_tolerance: f64,
    /// Object height synthesized as `ratio * |f|` when no height is given.
    pub default_height_ratio: f64,
    /// Decimal places kept in reported values.
    pub decimals: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            focal_tolerance: 1e-6,
            default_height_ratio: 0.3,
            decimals: 3,
        }
    }
}

impl SolverConfig {
    /// Validates the tolerance, height ratio, and precision.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, the
    /// height ratio is not strictly positive and finite, or more than 15
    /// decimals are requested.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.focal_tolerance.is_finite() || self.focal_tolerance < 0.0 {
            return Err("focal_tolerance must be finite and non-negative");
        }
        if !self.default_height_ratio.is_finite() || self.default_height_ratio <= 0.0 {
            return Err("default_height_ratio must be finite and positive");
        }
        if self.decimals > 15 {
            return Err("decimals must not exceed 15");
        }
        Ok(())
    }
}
