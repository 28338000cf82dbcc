#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::ffi::{CStr, c_void};
use std::ptr;

use eplus_functional::{Engine, PsyCall, RawHandle};

/// One recorded entry-point call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub entry: &'static str,
    pub handle: Option<usize>,
    pub name: Option<String>,
    pub args: Vec<f64>,
}

/// Engine stand-in that records every call and answers every property
/// query with `reply`.
///
/// Querying or deleting a handle that is not live panics, so a test
/// fails as soon as the binding misuses a handle.
#[derive(Default)]
pub struct MockEngine {
    calls: RefCell<Vec<Call>>,
    next_handle: Cell<usize>,
    live: RefCell<HashSet<usize>>,
    reply: Cell<f64>,
    /// Names `*New` accepts; empty accepts everything.
    accepted: Vec<String>,
    psy_calls: RefCell<Vec<PsyCall>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(reply: f64) -> Self {
        let engine = Self::default();
        engine.reply.set(reply);
        engine
    }

    /// Only `names` produce a handle; anything else gets null.
    pub fn accepting(names: &[&str]) -> Self {
        Self {
            accepted: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn set_reply(&self, reply: f64) {
        self.reply.set(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls
            .borrow()
            .last()
            .cloned()
            .expect("no engine call recorded")
    }

    pub fn count(&self, entry: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.entry == entry).count()
    }

    /// Psychrometric calls exactly as the binding handed them over.
    pub fn psy_calls(&self) -> Vec<PsyCall> {
        self.psy_calls.borrow().clone()
    }

    pub fn live_handles(&self) -> usize {
        self.live.borrow().len()
    }

    fn record(
        &self,
        entry: &'static str,
        handle: Option<usize>,
        name: Option<String>,
        args: Vec<f64>,
    ) {
        self.calls.borrow_mut().push(Call {
            entry,
            handle,
            name,
            args,
        });
    }

    fn create(&self, entry: &'static str, name: &CStr) -> RawHandle {
        let name = name.to_string_lossy().into_owned();
        self.record(entry, None, Some(name.clone()), Vec::new());
        if !self.accepted.is_empty() && !self.accepted.contains(&name) {
            return ptr::null_mut();
        }
        let id = self.next_handle.get() + 1;
        self.next_handle.set(id);
        self.live.borrow_mut().insert(id);
        ptr::without_provenance_mut::<c_void>(id)
    }

    fn release(&self, entry: &'static str, handle: RawHandle) {
        let id = handle.addr();
        self.record(entry, Some(id), None, Vec::new());
        assert!(self.live.borrow_mut().remove(&id), "{entry} on dead handle {id}");
    }

    fn query(&self, entry: &'static str, handle: RawHandle, args: Vec<f64>) -> f64 {
        let id = handle.addr();
        assert!(self.live.borrow().contains(&id), "{entry} on dead handle {id}");
        self.record(entry, Some(id), None, args);
        self.reply.get()
    }
}

impl Engine for MockEngine {
    fn initialize_functional_api(&self) {
        self.record("initializeFunctionalAPI", None, None, Vec::new());
    }

    fn glycol_new(&self, name: &CStr) -> RawHandle {
        self.create("glycolNew", name)
    }

    unsafe fn glycol_delete(&self, glycol: RawHandle) {
        self.release("glycolDelete", glycol)
    }

    unsafe fn glycol_specific_heat(&self, glycol: RawHandle, temperature: f64) -> f64 {
        self.query("glycolSpecificHeat", glycol, vec![temperature])
    }

    unsafe fn glycol_density(&self, glycol: RawHandle, temperature: f64) -> f64 {
        self.query("glycolDensity", glycol, vec![temperature])
    }

    unsafe fn glycol_conductivity(&self, glycol: RawHandle, temperature: f64) -> f64 {
        self.query("glycolConductivity", glycol, vec![temperature])
    }

    unsafe fn glycol_viscosity(&self, glycol: RawHandle, temperature: f64) -> f64 {
        self.query("glycolViscosity", glycol, vec![temperature])
    }

    fn refrigerant_new(&self, name: &CStr) -> RawHandle {
        self.create("refrigerantNew", name)
    }

    unsafe fn refrigerant_delete(&self, refrigerant: RawHandle) {
        self.release("refrigerantDelete", refrigerant)
    }

    unsafe fn refrigerant_saturation_pressure(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
    ) -> f64 {
        self.query("refrigerantSaturationPressure", refrigerant, vec![temperature])
    }

    unsafe fn refrigerant_saturation_temperature(
        &self,
        refrigerant: RawHandle,
        pressure: f64,
    ) -> f64 {
        self.query("refrigerantSaturationTemperature", refrigerant, vec![pressure])
    }

    unsafe fn refrigerant_saturated_enthalpy(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64 {
        self.query("refrigerantSaturatedEnthalpy", refrigerant, vec![temperature, quality])
    }

    unsafe fn refrigerant_saturated_density(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64 {
        self.query("refrigerantSaturatedDensity", refrigerant, vec![temperature, quality])
    }

    unsafe fn refrigerant_saturated_specific_heat(
        &self,
        refrigerant: RawHandle,
        temperature: f64,
        quality: f64,
    ) -> f64 {
        self.query("refrigerantSaturatedSpecificHeat", refrigerant, vec![temperature, quality])
    }

    fn psychrometric(&self, call: PsyCall) -> f64 {
        self.psy_calls.borrow_mut().push(call);
        self.record(call.relation().symbol(), None, None, call.inputs().to_vec());
        self.reply.get()
    }
}

/// Route `log` output through the test harness; `RUST_LOG=debug` shows
/// handle lifecycle messages.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
