//! The seam between the typed accessors and the native engine.
//!
//! [`Engine`] has one method per exported entry point (the psychrometric
//! relations share a single table-dispatched method).  The real
//! implementation is [`EngineLibrary`](crate::sys::EngineLibrary); tests
//! substitute a recording mock.

use std::ffi::{CStr, c_void};

use crate::psychrometrics::PsyCall;

/// Opaque engine-side reference, as returned by a `*New` entry point.
/// Null means the engine refused to create the entity.
pub type RawHandle = *mut c_void;

/// Entry points of the EnergyPlus functional API.
///
/// # Safety contract for handle-taking methods
///
/// Every `unsafe` method takes a handle that must have been returned
/// non-null by the matching `*_new` method of the **same** engine and not
/// yet passed to the matching `*_delete` method.  The safe accessors in
/// this crate uphold that by owning each handle exclusively and releasing
/// it in `Drop`.
pub trait Engine {
    /// `initializeFunctionalAPI()`.  The returned pointer carries no
    /// information for callers and is discarded.
    fn initialize_functional_api(&self);

    // ── Glycol ──────────────────────────────────────────────────────

    /// `glycolNew(name)`
    fn glycol_new(&self, name: &CStr) -> RawHandle;

    /// `glycolDelete(handle)`
    ///
    /// # Safety
    /// See the trait-level contract.  The handle is dead afterwards.
    unsafe fn glycol_delete(&self, glycol: RawHandle);

    /// `glycolSpecificHeat(handle, T)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn glycol_specific_heat(&self, glycol: RawHandle, temperature: f64) -> f64;

    /// `glycolDensity(handle, T)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn glycol_density(&self, glycol: RawHandle, temperature: f64) -> f64;

    /// `glycolConductivity(handle, T)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn glycol_conductivity(&self, glycol: RawHandle, temperature: f64) -> f64;

    /// `glycolViscosity(handle, T)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn glycol_viscosity(&self, glycol: RawHandle, temperature: f64) -> f64;

    // ── Refrigerant ─────────────────────────────────────────────────

    /// `refrigerantNew(name)`
    fn refrigerant_new(&self, name: &CStr) -> RawHandle;

    /// `refrigerantDelete(handle)`
    ///
    /// # Safety
    /// See the trait-level contract.  The handle is dead afterwards.
    unsafe fn refrigerant_delete(&self, refrigerant: RawHandle);

    /// `refrigerantSaturationPressure(handle, T)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn refrigerant_saturation_pressure(&self, refrigerant: RawHandle, temperature: f64)
    -> f64;

    /// `refrigerantSaturationTemperature(handle, P)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn refrigerant_saturation_temperature(&self, refrigerant: RawHandle, pressure: f64)
    -> f64;

    /// `refrigerantSaturatedEnthalpy(handle, T, x)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn refrigerant_saturated_enthalpy(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64;

    /// `refrigerantSaturatedDensity(handle, T, x)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn refrigerant_saturated_density(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64;

    /// `refrigerantSaturatedSpecificHeat(handle, T, x)`
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn refrigerant_saturated_specific_heat(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64;

    // ── Psychrometrics ──────────────────────────────────────────────

    /// Forward `call.inputs()` to the `psy*` entry point named by
    /// `call.relation()`.  Calls are only built by
    /// [`Psychrometrics`](crate::Psychrometrics), so the number of inputs
    /// always equals the relation's arity.
    fn psychrometric(&self, call: PsyCall) -> f64;
}
