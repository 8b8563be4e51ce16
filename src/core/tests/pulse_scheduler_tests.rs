use crate::core::builder::parser::parse_declarations;
use crate::core::execution::config::SimulationConfig;
use crate::core::execution::pulse::PulseCounts;
use crate::core::execution::pulse_scheduler::PulseScheduler;
use crate::core::graph::ModuleGraph;
use crate::core::state::ModuleState;
use crate::core::types::{ModuleId, PulseLevel};

fn graph(lines: &[&str]) -> ModuleGraph {
    parse_declarations(lines.iter().copied()).unwrap()
}

fn press_counts(graph: &ModuleGraph, presses: usize) -> Vec<(u64, u64)> {
    let mut scheduler = PulseScheduler::new(&SimulationConfig::default());
    let mut state = ModuleState::new(graph);
    (0..presses)
        .map(|_| scheduler.run_press(graph, &mut state).counts.into())
        .collect()
}

#[test]
fn test_single_press_on_inverter_loop() {
    let graph = graph(&[
        "broadcaster -> a, b, c",
        "%a -> b",
        "%b -> c",
        "%c -> inv",
        "&inv -> a",
    ]);
    let mut scheduler = PulseScheduler::new(&SimulationConfig::default());
    let mut state = ModuleState::new(&graph);

    let outcome = scheduler.run_press(&graph, &mut state);

    assert_eq!(outcome.counts, PulseCounts::new(8, 4));
    assert!(!scheduler.has_pulses());
    assert_eq!(scheduler.delivered(), 12);

    // a, b, c each switch on and then off again within the press
    assert!(state.is_initial());
    let senders: Vec<&str> = outcome.high_senders.iter().map(|m| m.as_str()).collect();
    assert_eq!(senders, vec!["a", "b", "c", "inv"]);
    assert!(outcome.received_low("broadcaster"));
    assert!(outcome.received_low("inv"));
}

#[test]
fn test_state_carries_across_presses() {
    let graph = graph(&[
        "broadcaster -> a",
        "%a -> inv, con",
        "&inv -> b",
        "%b -> con",
        "&con -> output",
    ]);
    assert_eq!(press_counts(&graph, 4), vec![(4, 4), (4, 2), (5, 3), (4, 2)]);

    let mut scheduler = PulseScheduler::new(&SimulationConfig::default());
    let mut state = ModuleState::new(&graph);
    scheduler.run_press(&graph, &mut state);

    assert_eq!(state.toggle_state("a"), Some(true));
    assert_eq!(state.toggle_state("b"), Some(true));
    let con = state.detector_memory("con").unwrap();
    assert_eq!(con.get("a"), Some(PulseLevel::High));
    assert_eq!(con.get("b"), Some(PulseLevel::High));

    scheduler.run_press(&graph, &mut state);
    assert_eq!(state.toggle_state("a"), Some(false));
    assert_eq!(state.toggle_state("b"), Some(true));
    assert_eq!(
        state.detector_memory("inv").unwrap().get("a"),
        Some(PulseLevel::Low)
    );
}

#[test]
fn test_delivery_is_breadth_first() {
    // Both toggles feed the detector within the same wave. Delivering the
    // later-sent pulses first would give (6, 3) and (5, 4) for presses 2
    // and 3.
    let graph = graph(&["broadcaster -> b, a", "%a -> c", "%b -> c", "&c -> a"]);
    assert_eq!(press_counts(&graph, 3), vec![(5, 4), (4, 3), (7, 4)]);
}

#[test]
fn test_duplicate_destinations_each_get_a_pulse() {
    let graph = graph(&["broadcaster -> a, a", "%a -> b, b", "&b -> c"]);
    assert_eq!(press_counts(&graph, 1), vec![(7, 4)]);

    let state = ModuleState::new(&graph);
    assert_eq!(state.detector_memory("b").unwrap().len(), 1);
}

#[test]
fn test_sink_pulses_are_counted() {
    let graph = graph(&["broadcaster -> rx, rx"]);
    assert_eq!(press_counts(&graph, 2), vec![(3, 0), (3, 0)]);
}

#[test]
fn test_missing_broadcaster_only_counts_button_pulse() {
    let graph = graph(&["%a -> b"]);
    assert_eq!(press_counts(&graph, 3), vec![(1, 0), (1, 0), (1, 0)]);
}

#[test]
fn test_custom_entry_module() {
    let graph = graph(&["%start -> out"]);
    let config = SimulationConfig::new()
        .with_entry_module("start")
        .with_button_name("trigger");
    let mut scheduler = PulseScheduler::new(&config);
    let mut state = ModuleState::from_config(&graph, &config);

    let outcome = scheduler.run_press(&graph, &mut state);
    assert_eq!(outcome.counts, PulseCounts::new(1, 1));
    assert_eq!(state.toggle_state("start"), Some(true));
    assert!(outcome.sent_high("start"));
    assert!(!outcome.high_senders.contains(&ModuleId::from("trigger")));
}

#[test]
fn test_detector_as_entry_module() {
    let graph = graph(&["&start -> out"]);
    let config = SimulationConfig::new().with_entry_module("start");
    let mut scheduler = PulseScheduler::new(&config);
    let mut state = ModuleState::from_config(&graph, &config);

    // Low from the button: not all inputs high, so start sends high
    let outcome = scheduler.run_press(&graph, &mut state);
    assert_eq!(outcome.counts, PulseCounts::new(1, 1));
    assert!(outcome.sent_high("start"));

    let memory = state.detector_memory("start").unwrap();
    assert_eq!(memory.len(), 1);
    assert_eq!(memory.get("button"), Some(PulseLevel::Low));
}
