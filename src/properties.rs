use serde::{Deserialize, Serialize};

// ── Glycol properties at one temperature ────────────────────────────

/// All four glycol queries evaluated at the same temperature.
///
/// **EnergyPlus units (SI):**
///
/// | Field          | Unit      |
/// |----------------|-----------|
/// | temperature    | °C        |
/// | specific_heat  | J/(kg·K)  |
/// | density        | kg/m³     |
/// | conductivity   | W/(m·K)   |
/// | viscosity      | Pa·s      |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlycolProps {
    pub temperature: f64,
    pub specific_heat: f64,
    pub density: f64,
    pub conductivity: f64,
    pub viscosity: f64,
}

impl std::fmt::Display for GlycolProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "T   = {:.2} °C", self.temperature)?;
        writeln!(f, "Cp  = {:.4} J/(kg·K)", self.specific_heat)?;
        writeln!(f, "D   = {:.4} kg/m³", self.density)?;
        writeln!(f, "k   = {:.6} W/(m·K)", self.conductivity)?;
        write!(f, "mu  = {:.6e} Pa·s", self.viscosity)
    }
}

// ── Refrigerant saturated state ─────────────────────────────────────

/// Saturated-mixture properties at a given temperature and quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturatedProps {
    /// Saturation temperature (°C)
    pub temperature: f64,
    /// Vapor quality (0 = saturated liquid, 1 = saturated vapor)
    pub quality: f64,
    /// Enthalpy (J/kg)
    pub enthalpy: f64,
    /// Density (kg/m³)
    pub density: f64,
    /// Specific heat (J/(kg·K))
    pub specific_heat: f64,
}

impl std::fmt::Display for SaturatedProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "T_sat = {:.2} °C", self.temperature)?;
        writeln!(f, "x     = {:.4}", self.quality)?;
        writeln!(f, "H     = {:.2} J/kg", self.enthalpy)?;
        writeln!(f, "D     = {:.4} kg/m³", self.density)?;
        write!(f, "Cp    = {:.4} J/(kg·K)", self.specific_heat)
    }
}
