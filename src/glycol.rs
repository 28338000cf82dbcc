use std::fmt;

use crate::engine::Engine;
use crate::error::Result;
use crate::handle::OwnedHandle;
use crate::properties::GlycolProps;

/// Glycol property calculations inside EnergyPlus.
///
/// Only plain `"water"` is available through the functional API: other
/// glycols are initialized by EnergyPlus only when an input file declares
/// them, and there is no input file here.
///
/// Obtained from [`Functional::glycol`](crate::Functional::glycol).  The
/// engine handle is released when the value is dropped.
///
/// ```no_run
/// use eplus_functional::{Functional, Hosting};
///
/// let api = Functional::from_env(Hosting::Standalone)?;
/// let water = api.glycol("water")?;
/// println!("rho(20 °C) = {:.2} kg/m³", water.density(20.0));
/// # Ok::<(), eplus_functional::FunctionalError>(())
/// ```
///
/// A released glycol cannot be queried:
///
/// ```compile_fail
/// use eplus_functional::{Functional, Hosting};
///
/// let api = Functional::load("libenergyplusapi.so", Hosting::Standalone)?;
/// let water = api.glycol("water")?;
/// drop(water);
/// water.density(20.0);
/// # Ok::<(), eplus_functional::FunctionalError>(())
/// ```
///
/// and neither can one whose session is gone:
///
/// ```compile_fail
/// use eplus_functional::{Functional, Hosting};
///
/// let api = Functional::load("libenergyplusapi.so", Hosting::Standalone)?;
/// let water = api.glycol("water")?;
/// drop(api);
/// water.density(20.0);
/// # Ok::<(), eplus_functional::FunctionalError>(())
/// ```
pub struct Glycol<'e, E: Engine> {
    handle: OwnedHandle<'e, E>,
    name: String,
}

impl<'e, E: Engine> Glycol<'e, E> {
    pub(crate) fn new(engine: &'e E, name: &str) -> Result<Self> {
        let handle = OwnedHandle::acquire(
            engine,
            "glycol",
            name,
            E::glycol_new,
            E::glycol_delete,
        )?;
        Ok(Self {
            handle,
            name: name.to_string(),
        })
    }

    /// The identifier this glycol was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Specific heat (J/(kg·K)) at `temperature` (°C).
    pub fn specific_heat(&self, temperature: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .glycol_specific_heat(self.handle.as_raw(), temperature)
        }
    }

    /// Density (kg/m³) at `temperature` (°C).
    pub fn density(&self, temperature: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .glycol_density(self.handle.as_raw(), temperature)
        }
    }

    /// Thermal conductivity (W/(m·K)) at `temperature` (°C).
    pub fn conductivity(&self, temperature: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .glycol_conductivity(self.handle.as_raw(), temperature)
        }
    }

    /// Dynamic viscosity (Pa·s) at `temperature` (°C).
    pub fn viscosity(&self, temperature: f64) -> f64 {
        // SAFETY: the handle is live for as long as `self`.
        unsafe {
            self.handle
                .engine()
                .glycol_viscosity(self.handle.as_raw(), temperature)
        }
    }

    /// Evaluate all four properties at one temperature.
    pub fn properties(&self, temperature: f64) -> GlycolProps {
        GlycolProps {
            temperature,
            specific_heat: self.specific_heat(temperature),
            density: self.density(temperature),
            conductivity: self.conductivity(temperature),
            viscosity: self.viscosity(temperature),
        }
    }
}

impl<E: Engine> fmt::Debug for Glycol<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glycol")
            .field("name", &self.name)
            .field("handle", &self.handle)
            .finish()
    }
}
