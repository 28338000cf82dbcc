mod common;

use common::{MockEngine, init_logging};
use eplus_functional::{Functional, FunctionalError, Hosting};

// ═══════════════════════════════════════════════════════════════════
//  Pass-through
// ═══════════════════════════════════════════════════════════════════

#[test]
fn water_density_is_forwarded_once_and_returned_unchanged() {
    init_logging();
    let api = Functional::new(MockEngine::with_reply(998.2), Hosting::Standalone);
    let water = api.glycol("water").unwrap();

    let rho = water.density(20.0);

    assert_eq!(rho, 998.2);
    let engine = api.engine();
    assert_eq!(engine.count("glycolDensity"), 1);
    let call = engine.last_call();
    assert_eq!(call.entry, "glycolDensity");
    assert_eq!(call.args, vec![20.0]);

    let created = engine.calls().into_iter().find(|c| c.entry == "glycolNew").unwrap();
    assert_eq!(created.name.as_deref(), Some("water"));
    assert_eq!(call.handle, Some(1));
}

#[test]
fn every_query_hits_its_own_entry_point() {
    let api = Functional::new(MockEngine::new(), Hosting::Standalone);
    let water = api.glycol("water").unwrap();
    let engine = api.engine();

    engine.set_reply(4180.5);
    assert_eq!(water.specific_heat(15.0), 4180.5);
    assert_eq!(engine.last_call().entry, "glycolSpecificHeat");
    assert_eq!(engine.last_call().args, vec![15.0]);

    engine.set_reply(0.598);
    assert_eq!(water.conductivity(-5.5), 0.598);
    assert_eq!(engine.last_call().entry, "glycolConductivity");
    assert_eq!(engine.last_call().args, vec![-5.5]);

    engine.set_reply(1.0e-3);
    assert_eq!(water.viscosity(80.0), 1.0e-3);
    assert_eq!(engine.last_call().entry, "glycolViscosity");
    assert_eq!(engine.last_call().args, vec![80.0]);
}

#[test]
fn out_of_range_inputs_are_not_filtered() {
    let api = Functional::new(MockEngine::with_reply(f64::NAN), Hosting::Standalone);
    let water = api.glycol("water").unwrap();

    assert!(water.density(-500.0).is_nan());
    assert_eq!(api.engine().last_call().args, vec![-500.0]);
}

#[test]
fn properties_snapshot_queries_each_entry_point_once() {
    let api = Functional::new(MockEngine::with_reply(2.5), Hosting::Standalone);
    let water = api.glycol("water").unwrap();

    let props = water.properties(30.0);

    assert_eq!(props.temperature, 30.0);
    assert_eq!(props.density, 2.5);
    for entry in [
        "glycolSpecificHeat",
        "glycolDensity",
        "glycolConductivity",
        "glycolViscosity",
    ] {
        assert_eq!(api.engine().count(entry), 1, "{entry}");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Handle lifecycle
// ═══════════════════════════════════════════════════════════════════

#[test]
fn handle_is_released_exactly_once_on_drop() {
    let api = Functional::new(MockEngine::new(), Hosting::Standalone);
    {
        let water = api.glycol("water").unwrap();
        water.density(10.0);
        assert_eq!(api.engine().count("glycolDelete"), 0);
    }

    let engine = api.engine();
    assert_eq!(engine.count("glycolNew"), 1);
    assert_eq!(engine.count("glycolDelete"), 1);
    assert_eq!(engine.live_handles(), 0);
    assert_eq!(engine.last_call().handle, Some(1));
}

#[test]
fn release_follows_every_query() {
    let api = Functional::new(MockEngine::new(), Hosting::Standalone);
    let water = api.glycol("water").unwrap();
    water.density(10.0);
    water.viscosity(10.0);
    drop(water);

    let entries: Vec<_> = api.engine().calls().into_iter().map(|c| c.entry).collect();
    assert_eq!(
        entries,
        [
            "initializeFunctionalAPI",
            "glycolNew",
            "glycolDensity",
            "glycolViscosity",
            "glycolDelete",
        ]
    );
}

#[test]
fn independent_glycols_own_independent_handles() {
    let api = Functional::new(MockEngine::new(), Hosting::Standalone);
    let a = api.glycol("water").unwrap();
    let b = api.glycol("water").unwrap();

    a.density(1.0);
    assert_eq!(api.engine().last_call().handle, Some(1));
    b.density(2.0);
    assert_eq!(api.engine().last_call().handle, Some(2));

    drop(b);
    assert_eq!(api.engine().live_handles(), 1);
    a.density(3.0);
    drop(a);
    assert_eq!(api.engine().count("glycolDelete"), 2);
    assert_eq!(api.engine().live_handles(), 0);
}

// ═══════════════════════════════════════════════════════════════════
//  Construction failures
// ═══════════════════════════════════════════════════════════════════

#[test]
fn null_handle_is_reported_and_never_released() {
    let api = Functional::new(MockEngine::accepting(&["water"]), Hosting::Standalone);

    let err = api.glycol("propylene_glycol").unwrap_err();

    match err {
        FunctionalError::HandleCreation { entity, name } => {
            assert_eq!(entity, "glycol");
            assert_eq!(name, "propylene_glycol");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(api.engine().count("glycolNew"), 1);
    assert_eq!(api.engine().count("glycolDelete"), 0);
}

#[test]
fn name_with_nul_never_reaches_the_engine() {
    let api = Functional::new(MockEngine::new(), Hosting::Standalone);

    let err = api.glycol("wa\0ter").unwrap_err();

    assert!(matches!(err, FunctionalError::InvalidName(_)));
    assert_eq!(api.engine().count("glycolNew"), 0);
}

#[test]
fn name_is_kept_for_diagnostics() {
    let api = Functional::new(MockEngine::new(), Hosting::Standalone);
    let water = api.glycol("water").unwrap();
    assert_eq!(water.name(), "water");
    assert!(format!("{water:?}").contains("water"));
}
