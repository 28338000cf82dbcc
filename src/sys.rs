//! Low-level FFI bindings for the EnergyPlus functional API.
//!
//! This module dynamically loads the `energyplusapi` shared library at
//! runtime via [`libloading`] and pre-resolves every entry point into a
//! typed function pointer, so calls never go through a symbol lookup.

use std::ffi::{CStr, c_char, c_double, c_void};
use std::path::Path;

use libloading::Library;
use log::{debug, info, trace};
use thiserror::Error;

use crate::engine::{Engine, RawHandle};
use crate::psychrometrics::{PsyCall, PsyRelation};

// ── Error type ──────────────────────────────────────────────────────
#[derive(Error, Debug)]
pub enum EngineSysError {
    /// The shared library could not be found or loaded.
    #[error("EnergyPlus library load failed: {0}")]
    LibraryLoadFailed(String),
    /// A required symbol was not found in the library.
    #[error("Symbol not found in EnergyPlus library: {0}")]
    SymbolNotFound(String),
}

// ── Function pointer type aliases ───────────────────────────────────
// Plain C ABI: handles are `void*`, reals are `double` by value.

/// initializeFunctionalAPI()
type FnInit = unsafe extern "C" fn() -> *mut c_void;

/// glycolNew / refrigerantNew
type FnNew = unsafe extern "C" fn(*const c_char) -> *mut c_void;

/// glycolDelete / refrigerantDelete
type FnDelete = unsafe extern "C" fn(*mut c_void);

/// glycol<Prop>(h, T), refrigerantSaturation<Prop>(h, T|P)
type FnHandle1 = unsafe extern "C" fn(*mut c_void, c_double) -> c_double;

/// refrigerantSaturated<Prop>(h, T, x)
type FnHandle2 = unsafe extern "C" fn(*mut c_void, c_double, c_double) -> c_double;

/// psy<Relation> with one, two or three inputs.
type FnScalar1 = unsafe extern "C" fn(c_double) -> c_double;
type FnScalar2 = unsafe extern "C" fn(c_double, c_double) -> c_double;
type FnScalar3 = unsafe extern "C" fn(c_double, c_double, c_double) -> c_double;

/// A resolved psychrometric entry point, typed by its arity.
#[derive(Clone, Copy)]
enum PsyFn {
    One(FnScalar1),
    Two(FnScalar2),
    Three(FnScalar3),
}

// ── Dynamic library wrapper ─────────────────────────────────────────

/// Holds a dynamically-loaded EnergyPlus API library with
/// **pre-resolved function pointers**.
///
/// All symbols are resolved once at construction time.  If any required
/// symbol is missing the constructor returns an error instead of failing
/// later at call time.
pub struct EngineLibrary {
    /// Must stay alive to keep the function pointers valid.
    _lib: Library,

    fn_init: FnInit,

    fn_glycol_new: FnNew,
    fn_glycol_delete: FnDelete,
    fn_glycol_specific_heat: FnHandle1,
    fn_glycol_density: FnHandle1,
    fn_glycol_conductivity: FnHandle1,
    fn_glycol_viscosity: FnHandle1,

    fn_refrigerant_new: FnNew,
    fn_refrigerant_delete: FnDelete,
    fn_refrigerant_saturation_pressure: FnHandle1,
    fn_refrigerant_saturation_temperature: FnHandle1,
    fn_refrigerant_saturated_enthalpy: FnHandle2,
    fn_refrigerant_saturated_density: FnHandle2,
    fn_refrigerant_saturated_specific_heat: FnHandle2,

    /// Indexed by `PsyRelation as usize`.
    psy: Vec<PsyFn>,
}

impl EngineLibrary {
    // ── Symbol resolution ───────────────────────────────────────────

    /// Resolve a single symbol as a typed function pointer.
    fn resolve<T: Copy>(lib: &Library, name: &str) -> Result<T, EngineSysError> {
        // SAFETY: `T` is one of the aliases above, each matching the C
        // declaration of the entry point it is resolved for.
        let sym: libloading::Symbol<T> = unsafe { lib.get(name.as_bytes()) }
            .map_err(|_| EngineSysError::SymbolNotFound(name.to_string()))?;
        Ok(*sym)
    }

    fn resolve_psy(lib: &Library, relation: PsyRelation) -> Result<PsyFn, EngineSysError> {
        let name = relation.symbol();
        Ok(match relation.arity() {
            1 => PsyFn::One(Self::resolve(lib, name)?),
            2 => PsyFn::Two(Self::resolve(lib, name)?),
            _ => PsyFn::Three(Self::resolve(lib, name)?),
        })
    }

    /// Resolve **all** required symbols.  Fails on the first missing one.
    fn resolve_all(lib: Library) -> Result<Self, EngineSysError> {
        let psy = PsyRelation::ALL
            .iter()
            .map(|&r| Self::resolve_psy(&lib, r))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fn_init: Self::resolve(&lib, "initializeFunctionalAPI")?,
            fn_glycol_new: Self::resolve(&lib, "glycolNew")?,
            fn_glycol_delete: Self::resolve(&lib, "glycolDelete")?,
            fn_glycol_specific_heat: Self::resolve(&lib, "glycolSpecificHeat")?,
            fn_glycol_density: Self::resolve(&lib, "glycolDensity")?,
            fn_glycol_conductivity: Self::resolve(&lib, "glycolConductivity")?,
            fn_glycol_viscosity: Self::resolve(&lib, "glycolViscosity")?,
            fn_refrigerant_new: Self::resolve(&lib, "refrigerantNew")?,
            fn_refrigerant_delete: Self::resolve(&lib, "refrigerantDelete")?,
            fn_refrigerant_saturation_pressure: Self::resolve(
                &lib,
                "refrigerantSaturationPressure",
            )?,
            fn_refrigerant_saturation_temperature: Self::resolve(
                &lib,
                "refrigerantSaturationTemperature",
            )?,
            fn_refrigerant_saturated_enthalpy: Self::resolve(&lib, "refrigerantSaturatedEnthalpy")?,
            fn_refrigerant_saturated_density: Self::resolve(&lib, "refrigerantSaturatedDensity")?,
            fn_refrigerant_saturated_specific_heat: Self::resolve(
                &lib,
                "refrigerantSaturatedSpecificHeat",
            )?,
            psy,
            _lib: lib,
        })
    }

    // ── Constructors ────────────────────────────────────────────────

    /// File names the API library ships under on this platform.
    pub fn candidate_names() -> &'static [&'static str] {
        if cfg!(target_os = "windows") {
            &["energyplusapi.dll", "EnergyPlusAPI.dll"]
        } else if cfg!(target_os = "macos") {
            &["libenergyplusapi.dylib", "libEnergyPlusAPI.dylib"]
        } else {
            &["libenergyplusapi.so", "libEnergyPlusAPI.so"]
        }
    }

    /// Load the API library from a **directory** (usually the EnergyPlus
    /// install root).  Candidate files present in `dir` are opened in
    /// order; the system search path is the fallback.
    pub fn load_from_dir(dir: &Path) -> Result<Self, EngineSysError> {
        let candidates = Self::candidate_names();
        let present = candidates.iter().map(|name| dir.join(name)).filter(|p| p.is_file());

        let mut unloadable = Vec::new();
        for file in present {
            // SAFETY: loading runs the library's initializers, which the
            // EnergyPlus API is trusted to keep sound.
            match unsafe { Library::new(&file) } {
                Ok(lib) => {
                    info!("loaded EnergyPlus API from {}", file.display());
                    return Self::resolve_all(lib);
                }
                Err(e) => unloadable.push(format!("{}: {e}", file.display())),
            }
        }

        // SAFETY: as above.
        let system = candidates
            .iter()
            .find_map(|&name| unsafe { Library::new(name) }.ok().map(|lib| (name, lib)));
        if let Some((name, lib)) = system {
            info!("loaded EnergyPlus API {name} from the system search path");
            return Self::resolve_all(lib);
        }

        Err(EngineSysError::LibraryLoadFailed(if unloadable.is_empty() {
            format!(
                "No EnergyPlus API library found in {} (tried: {candidates:?})",
                dir.display()
            )
        } else {
            format!(
                "EnergyPlus API library found but could not be loaded:\n  - {}",
                unloadable.join("\n  - ")
            )
        }))
    }

    /// Load the API library from an **exact file path**.
    pub fn load_from_file(path: &Path) -> Result<Self, EngineSysError> {
        let lib = unsafe { Library::new(path) }
            .map_err(|e| EngineSysError::LibraryLoadFailed(format!("{}: {e}", path.display())))?;
        info!("loaded EnergyPlus API from {}", path.display());
        Self::resolve_all(lib)
    }
}

// ── Entry point forwarding ──────────────────────────────────────────
//
// Every method is a single call through a cached pointer.  Inputs and
// results are never touched.

impl Engine for EngineLibrary {
    fn initialize_functional_api(&self) {
        debug!("initializeFunctionalAPI()");
        // SAFETY: takes no arguments; the returned pointer is unused.
        let _ = unsafe { (self.fn_init)() };
    }

    fn glycol_new(&self, name: &CStr) -> RawHandle {
        // SAFETY: `name` is NUL-terminated and outlives the call.
        unsafe { (self.fn_glycol_new)(name.as_ptr()) }
    }

    unsafe fn glycol_delete(&self, glycol: RawHandle) {
        unsafe { (self.fn_glycol_delete)(glycol) }
    }

    unsafe fn glycol_specific_heat(&self, glycol: RawHandle, temperature: f64) -> f64 {
        trace!("glycolSpecificHeat({glycol:p}, {temperature})");
        unsafe { (self.fn_glycol_specific_heat)(glycol, temperature) }
    }

    unsafe fn glycol_density(&self, glycol: RawHandle, temperature: f64) -> f64 {
        trace!("glycolDensity({glycol:p}, {temperature})");
        unsafe { (self.fn_glycol_density)(glycol, temperature) }
    }

    unsafe fn glycol_conductivity(&self, glycol: RawHandle, temperature: f64) -> f64 {
        trace!("glycolConductivity({glycol:p}, {temperature})");
        unsafe { (self.fn_glycol_conductivity)(glycol, temperature) }
    }

    unsafe fn glycol_viscosity(&self, glycol: RawHandle, temperature: f64) -> f64 {
        trace!("glycolViscosity({glycol:p}, {temperature})");
        unsafe { (self.fn_glycol_viscosity)(glycol, temperature) }
    }

    fn refrigerant_new(&self, name: &CStr) -> RawHandle {
        // SAFETY: `name` is NUL-terminated and outlives the call.
        unsafe { (self.fn_refrigerant_new)(name.as_ptr()) }
    }

    unsafe fn refrigerant_delete(&self, refrigerant: RawHandle) {
        unsafe { (self.fn_refrigerant_delete)(refrigerant) }
    }

    unsafe fn refrigerant_saturation_pressure(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
    ) -> f64 {
        trace!("refrigerantSaturationPressure({refrigerant:p}, {temperature})");
        unsafe { (self.fn_refrigerant_saturation_pressure)(refrigerant, temperature) }
    }

    unsafe fn refrigerant_saturation_temperature(
        &self,
        refrigerant: RawHandle,
        pressure: f64,
    ) -> f64 {
        trace!("refrigerantSaturationTemperature({refrigerant:p}, {pressure})");
        unsafe { (self.fn_refrigerant_saturation_temperature)(refrigerant, pressure) }
    }

    unsafe fn refrigerant_saturated_enthalpy(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64 {
        trace!("refrigerantSaturatedEnthalpy({refrigerant:p}, {temperature}, {quality})");
        unsafe { (self.fn_refrigerant_saturated_enthalpy)(refrigerant, temperature, quality) }
    }

    unsafe fn refrigerant_saturated_density(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64 {
        trace!("refrigerantSaturatedDensity({refrigerant:p}, {temperature}, {quality})");
        unsafe { (self.fn_refrigerant_saturated_density)(refrigerant, temperature, quality) }
    }

    unsafe fn refrigerant_saturated_specific_heat(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64 {
        trace!("refrigerantSaturatedSpecificHeat({refrigerant:p}, {temperature}, {quality})");
        unsafe { (self.fn_refrigerant_saturated_specific_heat)(refrigerant, temperature, quality) }
    }

    fn psychrometric(&self, call: PsyCall) -> f64 {
        let relation = call.relation();
        trace!("{relation}({:?})", call.inputs());
        let [a, b, c] = call.padded();
        // SAFETY: scalar-only entry points; the pointer was resolved with
        // the arity recorded for `relation`, and the entry point reads only
        // that many of the inputs.
        unsafe {
            match self.psy[relation as usize] {
                PsyFn::One(f) => f(a),
                PsyFn::Two(f) => f(a, b),
                PsyFn::Three(f) => f(a, b, c),
            }
        }
    }
}
