//! Stateless psychrometric relations.
//!
//! Every method on [`Psychrometrics`] is a direct call to one `psy*` entry
//! point with its inputs in the order listed.  The relation table below
//! is the single source for the method names, the entry-point symbols and
//! their arity; the library resolves symbols from the same table.
//!
//! Abbreviations follow EnergyPlus: `Tdb` dry-bulb temperature (°C), `W`
//! humidity ratio (kg water/kg dry air), `Pb` barometric pressure (Pa),
//! `Rh` relative humidity (fraction), `H` enthalpy (J/kg), `Twb` wet-bulb
//! temperature (°C), `Tdp` dew-point temperature (°C), `Rhov` vapor density
//! (kg/m³).

use std::fmt;

use crate::engine::Engine;

/// One psychrometric call: a relation and its inputs in entry-point order.
///
/// Only [`Psychrometrics`] builds these, from the same table that fixes
/// each relation's arity, so the inputs always fit the entry point.  Code
/// outside this crate can inspect a call but not assemble one:
///
/// ```compile_fail
/// use eplus_functional::{PsyCall, PsyRelation};
///
/// let call = PsyCall { relation: PsyRelation::PsatFnTemp, inputs: [1.0, 2.0, 3.0] };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsyCall {
    relation: PsyRelation,
    /// Unused trailing slots are zero.
    inputs: [f64; 3],
}

impl PsyCall {
    fn new(relation: PsyRelation, inputs: &[f64]) -> Self {
        let mut padded = [0.0; 3];
        for (slot, &value) in padded.iter_mut().zip(inputs) {
            *slot = value;
        }
        Self { relation, inputs: padded }
    }

    pub fn relation(&self) -> PsyRelation {
        self.relation
    }

    /// Exactly `relation().arity()` values.
    pub fn inputs(&self) -> &[f64] {
        &self.inputs[..self.relation.arity()]
    }

    pub(crate) fn padded(&self) -> [f64; 3] {
        self.inputs
    }
}

macro_rules! psychrometric_relations {
    ($(
        $(#[$doc:meta])*
        $method:ident => $variant:ident = $symbol:literal ($($arg:ident),+);
    )+) => {
        /// One `psy*` entry point of the engine.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PsyRelation {
            $($variant,)+
        }

        impl PsyRelation {
            /// Every relation, in declaration order (`r as usize` indexes it).
            pub const ALL: &'static [PsyRelation] = &[$(PsyRelation::$variant,)+];

            /// Exported symbol name.
            pub fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }

            /// Number of scalar inputs.
            pub fn arity(self) -> usize {
                match self {
                    $(Self::$variant => [$(stringify!($arg)),+].len(),)+
                }
            }

            /// Name of the [`Psychrometrics`] method bound to this relation.
            pub fn method(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($method),)+
                }
            }

            /// Input names, in call order.
            pub fn inputs(self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$(stringify!($arg)),+],)+
                }
            }
        }

        impl<E: Engine> Psychrometrics<'_, E> {
            $(
                $(#[$doc])*
                pub fn $method(&self, $($arg: f64),+) -> f64 {
                    self.engine.psychrometric(PsyCall::new(PsyRelation::$variant, &[$($arg),+]))
                }
            )+
        }
    };
}

/// Psychrometric functions of the engine.  Holds no engine state.
///
/// Obtained from [`Functional::psychrometrics`](crate::Functional::psychrometrics).
pub struct Psychrometrics<'e, E: Engine> {
    engine: &'e E,
}

impl<'e, E: Engine> Psychrometrics<'e, E> {
    pub(crate) fn new(engine: &'e E) -> Self {
        Self { engine }
    }
}

impl<E: Engine> fmt::Debug for Psychrometrics<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Psychrometrics").finish_non_exhaustive()
    }
}

impl fmt::Display for PsyRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

psychrometric_relations! {
    /// Moist-air density (kg/m³).
    density => RhoFnPbTdbW = "psyRhoFnPbTdbW" (barometric_pressure, dry_bulb_temp, humidity_ratio);

    /// Latent energy of air, `hfg` (J/kg).
    latent_energy_of_air => HfgAirFnWTdb = "psyHfgAirFnWTdb" (dry_bulb_temp);

    /// Enthalpy of the moisture in air, `hg` (J/kg).
    latent_energy_of_moisture_in_air => HgAirFnWTdb = "psyHgAirFnWTdb" (dry_bulb_temp);

    /// Moist-air enthalpy (J/kg).
    enthalpy => HFnTdbW = "psyHFnTdbW" (dry_bulb_temp, humidity_ratio);

    /// Moist-air enthalpy (J/kg) from relative humidity.
    enthalpy_b => HFnTdbRhPb = "psyHFnTdbRhPb"
        (dry_bulb_temp, relative_humidity_fraction, barometric_pressure);

    /// Moist-air specific heat (J/(kg·K)).
    specific_heat => CpAirFnWTdb = "psyCpAirFnWTdb" (humidity_ratio, dry_bulb_temp);

    /// Dry-bulb temperature (°C) from enthalpy and humidity ratio.
    dry_bulb => TdbFnHW = "psyTdbFnHW" (enthalpy, humidity_ratio);

    /// Vapor density (kg/m³).
    vapor_density => RhovFnTdbWPb = "psyRhovFnTdbWPb"
        (dry_bulb_temp, humidity_ratio, barometric_pressure);

    /// Relative humidity (fraction) from vapor density.
    relative_humidity => RhFnTdbRhov = "psyRhFnTdbRhov" (dry_bulb_temp, vapor_density);

    /// Relative humidity (fraction) from humidity ratio.
    relative_humidity_b => RhFnTdbWPb = "psyRhFnTdbWPb"
        (dry_bulb_temp, humidity_ratio, barometric_pressure);

    /// Wet-bulb temperature (°C).
    wet_bulb => TwbFnTdbWPb = "psyTwbFnTdbWPb"
        (dry_bulb_temp, humidity_ratio, barometric_pressure);

    /// Specific volume (m³/kg).
    specific_volume => VFnTdbWPb = "psyVFnTdbWPb"
        (dry_bulb_temp, humidity_ratio, barometric_pressure);

    /// Saturation pressure (Pa).
    saturation_pressure => PsatFnTemp = "psyPsatFnTemp" (dry_bulb_temp);

    /// Saturation temperature (°C) from enthalpy.
    saturation_temperature => TsatFnHPb = "psyTsatFnHPb" (enthalpy, barometric_pressure);

    /// Vapor density (kg/m³) from relative humidity.
    vapor_density_b => RhovFnTdbRh = "psyRhovFnTdbRh" (dry_bulb_temp, relative_humidity_fraction);

    /// Humidity ratio from enthalpy.
    humidity_ratio => WFnTdbH = "psyWFnTdbH" (dry_bulb_temp, enthalpy);

    /// Humidity ratio from dew point.
    humidity_ratio_b => WFnTdpPb = "psyWFnTdpPb" (dew_point_temp, barometric_pressure);

    /// Humidity ratio from relative humidity.
    humidity_ratio_c => WFnTdbRhPb = "psyWFnTdbRhPb"
        (dry_bulb_temp, relative_humidity_fraction, barometric_pressure);

    /// Humidity ratio from wet bulb.
    humidity_ratio_d => WFnTdbTwbPb = "psyWFnTdbTwbPb"
        (dry_bulb_temp, wet_bulb_temp, barometric_pressure);

    /// Dew-point temperature (°C) from humidity ratio.
    dew_point => TdpFnWPb = "psyTdpFnWPb" (humidity_ratio, barometric_pressure);

    /// Dew-point temperature (°C) from wet bulb.
    dew_point_b => TdpFnTdbTwbPb = "psyTdpFnTdbTwbPb"
        (dry_bulb_temp, wet_bulb_temp, barometric_pressure);
}
