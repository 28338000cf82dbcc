//! # eplus_functional
//!
//! Safe Rust bindings for the
//! [EnergyPlus](https://energyplus.net) functional API — glycol,
//! refrigerant and psychrometric property routines exported by the
//! `energyplusapi` shared library.
//!
//! ## Highlights
//!
//! * **Runtime loading** — the library is opened with `libloading` and
//!   every entry point is resolved once, up front
//! * **Owned handles** — `Glycol` and `Refrigerant` release their engine
//!   handle exactly once, when dropped
//! * **Explicit session** — [`Functional`] initializes the engine once, or
//!   not at all when running inside an EnergyPlus plugin
//! * **Pass-through** — inputs and results cross the boundary untouched;
//!   units are whatever EnergyPlus uses (°C, Pa, kg/m³, J/kg, …)
//!
//! ## Quick example
//!
//! ```no_run
//! use eplus_functional::{Functional, Hosting};
//!
//! let api = Functional::from_env(Hosting::Standalone)?;
//!
//! let water = api.glycol("water")?;
//! println!("rho(20 °C) = {:.2} kg/m³", water.density(20.0));
//!
//! let steam = api.refrigerant("steam")?;
//! println!("Psat(100 °C) = {:.0} Pa", steam.saturation_pressure(100.0));
//!
//! let psy = api.psychrometrics();
//! println!("Twb = {:.2} °C", psy.wet_bulb(30.0, 0.01, 101_325.0));
//! # Ok::<(), eplus_functional::FunctionalError>(())
//! ```
//!
//! ## Testing without EnergyPlus
//!
//! Everything above is generic over the [`Engine`] trait.  Implement it
//! on a mock to exercise code without the native library:
//! `Functional::new(my_mock, Hosting::Standalone)`.

// ── Internal modules ─────────────────────────────────────────────────
mod handle;
pub mod engine;
pub mod error;
pub mod functional;
pub mod glycol;
pub mod properties;
pub mod psychrometrics;
pub mod refrigerant;
pub mod sys;
pub mod version;

// ── Public re-exports ────────────────────────────────────────────────
pub use engine::{Engine, RawHandle};
pub use error::{FunctionalError, Result};
pub use functional::{ENERGYPLUS_PATH_VAR, Functional, Hosting, SessionState};
pub use glycol::Glycol;
pub use properties::{GlycolProps, SaturatedProps};
pub use psychrometrics::{PsyCall, PsyRelation, Psychrometrics};
pub use refrigerant::Refrigerant;
pub use sys::{EngineLibrary, EngineSysError};
pub use version::{EngineVersion, ParseVersionError};
