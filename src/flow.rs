// ------------------------------------------------------------------------------- MODULES

mod collision;
mod distributions;
mod lattice;
pub mod post;
mod properties;
mod streaming;
mod tracer;

// ------------------------------------------------------------------------------- IMPORTS

use crate::prelude_crate::*;
pub use distributions::{Distributions, Extent};
pub use lattice::Lattice;
pub use post::EdgePressureCalc;
pub use properties::{NodeProperties, PropertyCalc, SystemProperties};
pub use tracer::{Tracer, TracerBounds};

// -------------------------------------------------------------------- STRUCT: Parameters

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub width: usize,
    pub height: usize,
    pub omega: Float,
    /// Ambient temperature in degrees Celsius.
    pub temperature: Float,
    /// Free-stream speed along x in the units of the thermal speed. Negative values blow toward -x.
    pub wind_speed: Float,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            width: 10,
            height: 10,
            omega: 0.5,
            temperature: 20.0,
            wind_speed: 0.0,
        }
    }
}

impl Parameters {
    pub fn new(width: usize, height: usize) -> Self {
        Parameters {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> LbResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LbError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(OMEGA_MIN..=OMEGA_MAX).contains(&self.omega) {
            return Err(LbError::InvalidOmega(self.omega));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(LbError::InvalidParameter {
                name: "temperature",
                value: self.temperature,
            });
        }
        if !self.wind_speed.is_finite() {
            return Err(LbError::InvalidParameter {
                name: "wind_speed",
                value: self.wind_speed,
            });
        }
        Ok(())
    }

    pub fn get_thermal_speed(&self) -> Float {
        (self.temperature / THERMAL_CONSTANT).sqrt()
    }

    /// Wind speed in lattice units, scaled so the initial state stays stable.
    ///
    /// # Examples
    /// ```
    /// # use lbfoil::flow::Parameters;
    /// let parameters = Parameters { wind_speed: 100.0, ..Default::default() };
    ///
    /// // Thermal speed at 20 degrees is 400.
    /// assert!((parameters.get_scaled_wind_speed() - 0.125).abs() < 1e-12);
    /// assert_eq!(Parameters::default().get_scaled_wind_speed(), 0.0);
    ///
    /// let reversed = Parameters { wind_speed: -100.0, ..Default::default() };
    /// assert!((reversed.get_scaled_wind_speed() + 0.125).abs() < 1e-12);
    /// ```
    pub fn get_scaled_wind_speed(&self) -> Float {
        let reference_speed = STABILITY_FACTOR * (self.get_thermal_speed() + self.wind_speed.abs());
        if reference_speed == 0.0 {
            return 0.0;
        }
        self.wind_speed / reference_speed
    }

    pub fn get_viscosity(&self) -> Float {
        viscosity_from_omega(self.omega)
    }
}

// ----------------------------------------------------------------------------- FUNCTIONS

/// # Examples
/// ```
/// # use lbfoil::flow::{omega_from_viscosity, viscosity_from_omega};
/// assert!((omega_from_viscosity(1.0 / 6.0) - 1.0).abs() < 1e-12);
/// assert!((viscosity_from_omega(omega_from_viscosity(0.04)) - 0.04).abs() < 1e-12);
/// ```
pub fn omega_from_viscosity(viscosity: Float) -> Float {
    DELTA_T / (viscosity * CS_2_INV + 0.5 * DELTA_T)
}

pub fn viscosity_from_omega(omega: Float) -> Float {
    CS_2 * (DELTA_T / omega - 0.5 * DELTA_T)
}
