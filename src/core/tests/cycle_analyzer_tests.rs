use crate::core::builder::parser::parse_declarations;
use crate::core::execution::config::SimulationConfig;
use crate::core::execution::cycle_analyzer::CycleAnalyzer;
use crate::core::execution::errors::AnalysisError;
use crate::core::execution::press_simulator::PressSimulator;
use crate::core::graph::ModuleGraph;
use crate::core::types::ModuleId;

/// Two binary counters gating `hub -> rx`: c0/c1 wrap every 3 presses,
/// d0..d2 every 5. Each detector fires on its count and pulses bit 0 to
/// wrap the counter, so `inv3` and `inv5` both hold high in the same wave
/// when `hub` sees them.
fn counters_3_and_5() -> ModuleGraph {
    parse_declarations([
        "broadcaster -> c0, d0",
        "%c0 -> c1, det3",
        "%c1 -> det3",
        "&det3 -> inv3, c0",
        "&inv3 -> hub",
        "%d0 -> d1, det5",
        "%d1 -> d2",
        "%d2 -> det5",
        "&det5 -> inv5, d1, d0",
        "&inv5 -> hub",
        "&hub -> rx",
    ])
    .unwrap()
}

/// Counters with periods 3 and 4 whose inverters go high and back low
/// before the other one arrives, so `hub` never holds both inputs high.
fn staggered_counters() -> ModuleGraph {
    parse_declarations([
        "broadcaster -> c1, d1",
        "%c1 -> c2, det3",
        "%c2 -> det3",
        "&det3 -> inv3, c1",
        "&inv3 -> hub",
        "%d1 -> d2",
        "%d2 -> d3",
        "%d3 -> det4",
        "&det4 -> inv4, d3",
        "&inv4 -> hub",
        "&hub -> rx",
    ])
    .unwrap()
}

#[test]
fn test_lcm_of_first_high_presses() {
    let graph = counters_3_and_5();
    let analyzer = CycleAnalyzer::new(&graph, "rx", SimulationConfig::default()).unwrap();
    assert_eq!(
        analyzer.monitored(),
        &[ModuleId::from("inv3"), ModuleId::from("inv5")]
    );

    let report = analyzer.run().unwrap();

    assert_eq!(report.sink, ModuleId::from("rx"));
    assert_eq!(report.cycles.get("inv3"), Some(&3));
    assert_eq!(report.cycles.get("inv5"), Some(&5));
    assert_eq!(report.presses_simulated, 5);
    assert_eq!(report.convergence_press, 15);
}

#[test]
fn test_periodicity_check_accepts_resetting_counters() {
    let graph = counters_3_and_5();
    let config = SimulationConfig::new().with_periodicity_check(true);

    let report = CycleAnalyzer::new(&graph, "rx", config).unwrap().run().unwrap();

    assert_eq!(report.convergence_press, 15);
    assert_eq!(report.presses_simulated, 10);
}

#[test]
fn test_prediction_matches_exhaustive_pressing() {
    let graph = counters_3_and_5();
    let predicted = CycleAnalyzer::new(&graph, "rx", SimulationConfig::default())
        .unwrap()
        .run()
        .unwrap()
        .convergence_press;

    let mut sim = PressSimulator::new(&graph, SimulationConfig::new().with_max_presses(100));
    assert_eq!(sim.presses_until_low("rx"), Ok(predicted));
    assert_eq!(predicted, 15);
}

#[test]
fn test_periodic_but_staggered_inputs_never_converge() {
    // Both inverters are periodic from press zero, so the check passes
    let graph = staggered_counters();
    let config = SimulationConfig::new().with_periodicity_check(true);
    let report = CycleAnalyzer::new(&graph, "rx", config).unwrap().run().unwrap();
    assert_eq!(report.convergence_press, 12);

    // yet rx is never reached
    let mut sim = PressSimulator::new(&graph, SimulationConfig::new().with_max_presses(200));
    assert_eq!(
        sim.presses_until_low("rx"),
        Err(AnalysisError::PressLimitExceeded {
            limit: 200,
            unresolved: vec![ModuleId::from("rx")],
        })
    );
}

#[test]
fn test_immediate_module_has_cycle_one() {
    let graph = parse_declarations(["broadcaster -> a", "%a -> hub", "&hub -> rx"]).unwrap();

    let report = CycleAnalyzer::new(&graph, "rx", SimulationConfig::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(report.convergence_press, 1);
    assert_eq!(report.presses_simulated, 1);
}

#[test]
fn test_periodicity_check_rejects_phase_offset() {
    // a sends high on presses 1, 3, 5, ...: period 2, offset 1
    let graph = parse_declarations(["broadcaster -> a", "%a -> hub", "&hub -> rx"]).unwrap();
    let config = SimulationConfig::new().with_periodicity_check(true);

    let result = CycleAnalyzer::new(&graph, "rx", config).unwrap().run();

    assert_eq!(
        result,
        Err(AnalysisError::NonPeriodic {
            module: ModuleId::from("a"),
            first: 1,
            second: 3,
        })
    );
}

#[test]
fn test_missing_sink() {
    let graph = counters_3_and_5();
    let result = CycleAnalyzer::new(&graph, "nowhere", SimulationConfig::default());
    assert!(matches!(
        result,
        Err(AnalysisError::MissingSink { ref sink }) if sink == "nowhere"
    ));

    // rx's only predecessor is fed by nothing
    let orphan = parse_declarations(["broadcaster -> a", "&hub -> rx"]).unwrap();
    assert!(matches!(
        CycleAnalyzer::new(&orphan, "rx", SimulationConfig::default()),
        Err(AnalysisError::MissingSink { .. })
    ));
}

#[test]
fn test_press_limit_reports_unresolved_modules() {
    let graph = counters_3_and_5();
    let config = SimulationConfig::new().with_max_presses(3);

    let result = CycleAnalyzer::new(&graph, "rx", config).unwrap().run();

    assert_eq!(
        result,
        Err(AnalysisError::PressLimitExceeded {
            limit: 3,
            unresolved: vec![ModuleId::from("inv5")],
        })
    );
}
