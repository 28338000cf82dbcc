use std::fmt;

use crate::engine::Engine;
use crate::error::Result;
use crate::handle::OwnedHandle;
use crate::properties::SaturatedProps;

/// Refrigerant saturation properties inside EnergyPlus.
///
/// As with [`Glycol`](crate::Glycol), only the built-in fluid (`"steam"`)
/// exists without an input file.  Every query passes the owned handle as
/// its first argument.
pub struct Refrigerant<'e, E: Engine> {
    handle: OwnedHandle<'e, E>,
    name: String,
}

impl<'e, E: Engine> Refrigerant<'e, E> {
    pub(crate) fn new(engine: &'e E, name: &str) -> Result<Self> {
        let handle = OwnedHandle::acquire(
            engine,
            "refrigerant",
            name,
            E::refrigerant_new,
            E::refrigerant_delete,
        )?;
        Ok(Self {
            handle,
            name: name.to_string(),
        })
    }

    /// The identifier this refrigerant was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Saturation pressure (Pa) at `temperature` (°C).
    pub fn saturation_pressure(&self, temperature: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .refrigerant_saturation_pressure(self.handle.as_raw(), temperature)
        }
    }

    /// Saturation temperature (°C) at `pressure` (Pa).
    pub fn saturation_temperature(&self, pressure: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .refrigerant_saturation_temperature(self.handle.as_raw(), pressure)
        }
    }

    /// Saturated enthalpy (J/kg) at `temperature` (°C) and `quality` (0–1).
    pub fn saturated_enthalpy(&self, temperature: f64, quality: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .refrigerant_saturated_enthalpy(self.handle.as_raw(), temperature, quality)
        }
    }

    /// Saturated density (kg/m³) at `temperature` (°C) and `quality` (0–1).
    pub fn saturated_density(&self, temperature: f64, quality: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .refrigerant_saturated_density(self.handle.as_raw(), temperature, quality)
        }
    }

    /// Saturated specific heat (J/(kg·K)) at `temperature` (°C) and
    /// `quality` (0–1).
    pub fn saturated_specific_heat(&self, temperature: f64, quality: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .refrigerant_saturated_specific_heat(self.handle.as_raw(), temperature, quality)
        }
    }

    /// Enthalpy, density and specific heat of the saturated mixture.
    pub fn saturated_state(&self, temperature: f64, quality: f64) -> SaturatedProps {
        SaturatedProps {
            temperature,
            quality,
            enthalpy: self.saturated_enthalpy(temperature, quality),
            density: self.saturated_density(temperature, quality),
            specific_heat: self.saturated_specific_heat(temperature, quality),
        }
    }
}

impl<E: Engine> fmt::Debug for Refrigerant<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refrigerant")
            .field("name", &self.name)
            .field("handle", &self.handle)
            .finish()
    }
}
