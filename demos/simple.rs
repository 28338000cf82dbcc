use eplus_functional::{Functional, Hosting};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ENERGYPLUS_PATH is read from the .env file automatically.
    // You can also set it as an environment variable:
    //   export ENERGYPLUS_PATH=/usr/local/EnergyPlus-9-3-0
    let api = Functional::from_env(Hosting::Standalone)?;
    println!("=== EnergyPlus {} ===\n", Functional::ep_version());

    // ── Glycol ──────────────────────────────────────────────────────
    let water = api.glycol("water")?;
    println!("Water at 20 °C:\n{}\n", water.properties(20.0));

    // ── Refrigerant ─────────────────────────────────────────────────
    let steam = api.refrigerant("steam")?;
    let p_sat = steam.saturation_pressure(100.0);
    println!("Steam Psat(100 °C) = {p_sat:.0} Pa");
    println!("Steam saturated vapor at 100 °C:\n{}\n", steam.saturated_state(100.0, 1.0));

    // ── Psychrometrics ──────────────────────────────────────────────
    let psy = api.psychrometrics();
    let pb = 101_325.0;
    let w = psy.humidity_ratio_c(24.0, 0.5, pb);
    println!("W(24 °C, 50 %)   = {w:.5} kg/kg");
    println!("h                = {:.0} J/kg", psy.enthalpy(24.0, w));
    println!("T_wb             = {:.2} °C", psy.wet_bulb(24.0, w, pb));
    println!("T_dp             = {:.2} °C", psy.dew_point(w, pb));
    println!("rho              = {:.4} kg/m³", psy.density(pb, 24.0, w));

    Ok(())
}
