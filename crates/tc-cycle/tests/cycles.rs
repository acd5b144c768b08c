use std::sync::Arc;
use tc_core::{nearly_equal, Tolerances};
use tc_cycle::{Cycle, CycleError, Process};
use tc_eos::{EdgeClass, EosError, IdealGas, Property, VanDerWaals};

const R: f64 = 287.0;

fn otto(samples: usize) -> Cycle {
    let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 4, samples).unwrap();
    let v1 = R * 300.0 / 1e5;
    cycle.add_state_named(&[("P", 1e5), ("T", 300.0)]).unwrap();
    cycle.add_state_named(&[("v", v1 / 8.0)]).unwrap();
    cycle.add_state_named(&[("T", 1500.0)]).unwrap();
    cycle.add_state_named(&[("v", v1)]).unwrap();
    for p in [
        Process::Isentropic,
        Process::Isochoric,
        Process::Isentropic,
        Process::Isochoric,
    ] {
        cycle.process(p).unwrap();
    }
    cycle
}

#[test]
fn otto_analytic_and_numeric_agree() {
    let cycle = otto(20);
    assert!(cycle.is_closed());

    let analytic = cycle.analytic_efficiency().unwrap();
    let numeric = cycle.numeric_efficiency().unwrap();
    let expected = 1.0 - 8.0_f64.powf(1.0 - 1005.0 / 718.0);

    assert!((analytic.value - expected).abs() < 1e-6);
    assert!((numeric.value - analytic.value).abs() / analytic.value < 0.01);
    assert!(numeric.value < cycle.carnot_efficiency().unwrap());

    let classes: Vec<EdgeClass> = analytic.edges.iter().map(|e| e.class).collect();
    assert_eq!(
        classes,
        vec![
            EdgeClass::Isentropic,
            EdgeClass::Unclassified,
            EdgeClass::Isentropic,
            EdgeClass::Unclassified
        ]
    );
    assert_eq!(analytic.unclassified(), vec![1, 3]);
}

#[test]
fn otto_states_follow_isentropes() {
    let cycle = otto(5);
    let s1 = cycle.state(1).unwrap().entropy().unwrap();
    let s2 = cycle.state(2).unwrap().entropy().unwrap();
    assert!(nearly_equal(s1, s2, Tolerances::classification()));
    let t2 = cycle.state(2).unwrap().temperature().unwrap();
    assert!((t2 - 300.0 * 8.0_f64.powf(R / 718.0)).abs() < 1e-6);
    for s in cycle.interior(0) {
        let s_i = s.entropy().unwrap();
        assert!((s_i - s1).abs() < 1e-6);
    }
}

#[test]
fn ideal_gas_carnot_cycle_reaches_carnot_bound() {
    let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 4, 40).unwrap();
    cycle.add_state_named(&[("P", 1e5), ("T", 300.0)]).unwrap();
    cycle.add_state_named(&[("T", 600.0)]).unwrap();
    cycle.isentropic().unwrap();
    let v2 = cycle.state(2).unwrap().specific_volume().unwrap();
    cycle.add_state_named(&[("v", 3.0 * v2)]).unwrap();
    cycle.add_state_named(&[("T", 300.0)]).unwrap();
    cycle.isothermal().unwrap();
    cycle.isentropic().unwrap();
    cycle.isothermal().unwrap();

    let carnot = cycle.carnot_efficiency().unwrap();
    assert!((carnot - 0.5).abs() < 1e-12);
    let analytic = cycle.analytic_efficiency().unwrap();
    assert!((analytic.value - 0.5).abs() < 1e-6);
    let numeric = cycle.numeric_efficiency().unwrap();
    assert!((numeric.value - 0.5).abs() < 0.01);
}

#[test]
fn heat_transfer_edge_derives_outlet_entropy() {
    let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 2, 10).unwrap();
    cycle.add_state_named(&[("P", 1e5), ("T", 400.0)]).unwrap();
    cycle.add_state(&[]).unwrap();
    cycle.heat_transfer(40_000.0).unwrap();

    let inlet = cycle.state(1).unwrap();
    let outlet = cycle.state(2).unwrap();
    assert!(outlet.is_complete());
    let ds = outlet.entropy().unwrap() - inlet.entropy().unwrap();
    assert!((ds - 100.0).abs() < 1e-6);
    assert!((outlet.temperature().unwrap() - 400.0).abs() < 1e-9);
    assert_eq!(cycle.interior(0).len(), 10);
}

#[test]
fn van_der_waals_cycle_is_numeric_only() {
    let mut cycle = Cycle::new(Arc::new(VanDerWaals::water()), 3, 6).unwrap();
    cycle.add_state_named(&[("P", 1e6), ("T", 600.0)]).unwrap();
    cycle.add_state_named(&[("v", 0.4)]).unwrap();
    cycle.add_state_named(&[("P", 1e6)]).unwrap();
    cycle.isothermal().unwrap();
    cycle.isochoric().unwrap();
    cycle.isobaric().unwrap();
    assert!(cycle.is_closed());

    let err = cycle.analytic_efficiency().unwrap_err();
    assert!(matches!(err, CycleError::Eos(EosError::NotSupported { .. })));
    let numeric = cycle.numeric_efficiency().unwrap();
    assert!(numeric.value.is_finite());
    for s in cycle.states() {
        assert!(s.is_complete());
        assert!(s.get(Property::Quality).is_some());
    }
}

#[test]
fn two_phase_edge_carries_quality_into_interior_states() {
    let mut cycle = Cycle::new(Arc::new(VanDerWaals::water()), 2, 5).unwrap();
    cycle.add_state_named(&[("x", 0.2), ("P", 2e6), ("T", 500.0)]).unwrap();
    cycle.add_state_named(&[("x", 0.8), ("P", 2e6), ("T", 500.0)]).unwrap();
    let edge = cycle.isobaric().unwrap();
    assert_eq!(edge.interior.len(), 5);

    let v1 = cycle.state(1).unwrap().specific_volume().unwrap();
    let v2 = cycle.state(2).unwrap().specific_volume().unwrap();
    let split = VanDerWaals::water().phase_split(500.0, 2e6, 0.2).unwrap();
    assert_eq!(v1, split.mixture);
    assert!(v2 > v1);

    let qualities: Vec<f64> = cycle.interior(0).iter().map(|s| s.quality()).collect();
    assert!(qualities.windows(2).all(|w| w[1] > w[0]));
    assert!(qualities[0] > 0.2 && qualities[4] < 0.8);
    assert!((qualities[2] - 0.5).abs() < 1e-12);
    for s in cycle.interior(0) {
        let v = s.specific_volume().unwrap();
        assert!(v > v1 && v < v2);
        let p = s.pressure().unwrap();
        assert!(nearly_equal(p, 2e6, Tolerances { abs: 1e-3, rel: 1e-9 }), "{p}");
    }
}
