//! Reading AT&T symbol tables and automata from files, then decoding the
//! result with the acyclic shortest distance.

use std::path::PathBuf;

use wfsa::{AttConfig, AttLabel, AutomatonError, Cost, Direction, Semiring, SymbolTable, Weight, read_att_file};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn label(input: &[&str], output: &[&str], cost: f64) -> AttLabel {
    AttLabel::new(
        input.iter().map(|s| s.to_string()).collect(),
        output.iter().map(|s| s.to_string()).collect(),
        Cost::new(cost),
    )
}

fn read() -> wfsa::Automaton<usize, AttLabel> {
    let symbols = SymbolTable::from_file(data("symbols.txt")).unwrap();
    read_att_file(data("lattice.att"), &symbols, &symbols, &AttConfig::default()).unwrap()
}

#[test]
fn symbol_table_from_file() {
    let symbols = SymbolTable::from_file(data("symbols.txt")).unwrap();
    assert_eq!(symbols.empty_symbol(), Some("<eps>"));
    assert_eq!(symbols.id("<del>"), Some(0));
    assert_eq!(symbols.id("a"), Some(3));
    assert_eq!(symbols.id("sil"), Some(10));
    assert_eq!(symbols.len(), 11);
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        SymbolTable::from_file(data("no-such-file.txt")),
        Err(AutomatonError::Io(_))
    ));
}

#[test]
fn automaton_structure() {
    let automaton = read();
    for state in 0..5 {
        assert!(automaton.has_state(&state));
    }
    assert_eq!(automaton.arc_count(), 5);

    let starts: Vec<_> = automaton.terminal_states(Direction::Forward).collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(*starts[0].0, 0);
    assert!(starts[0].1.is_one());

    let finals: Vec<(usize, f64)> = automaton
        .terminal_states(Direction::Backward)
        .map(|(state, weight)| (*state, weight.clone().resolve().cost().value()))
        .collect();
    assert_eq!(finals, [(3, 0.0), (4, 2.0)]);

    let from_zero: Vec<_> = automaton.arcs_on(Direction::Forward, &0).unwrap().collect();
    assert_eq!(from_zero.len(), 1);
    assert_eq!(*from_zero[0].state(Direction::Backward), 0);
    assert_eq!(*from_zero[0].state(Direction::Forward), 1);
    assert_eq!(*from_zero[0].label(), label(&["a"], &["a"], 0.0));

    let into_two: Vec<AttLabel> = automaton
        .arcs_on(Direction::Backward, &2)
        .unwrap()
        .map(|arc| arc.label().clone())
        .collect();
    assert_eq!(into_two, [label(&["b"], &["b"], 2.0), label(&["c"], &["c"], 0.0)]);
}

#[test]
fn decode_best_path() {
    let automaton = read();
    let initial: Vec<(usize, AttLabel)> = automaton
        .terminal_states(Direction::Forward)
        .map(|(state, weight)| (*state, weight.clone().resolve()))
        .collect();
    let distances: Vec<(usize, AttLabel)> = automaton
        .shortest_distance_acyclic(initial, Direction::Forward)
        .unwrap()
        .map(|(state, distance)| (*state, distance))
        .collect();

    assert_eq!(
        distances,
        [
            (0, AttLabel::one()),
            (1, label(&["a"], &["a"], 0.0)),
            (2, label(&["a", "c"], &["a", "c"], 0.0)),
            (3, label(&["a", "c"], &["a", "c", "sil"], 0.5)),
            (4, label(&["a", "c", "d"], &["a", "c"], 1.0)),
        ]
    );

    // Close the paths with the final weights and keep the best one.
    let best = distances
        .into_iter()
        .filter_map(|(state, distance)| {
            let final_weight = automaton.terminal_label(Direction::Backward, &state).ok()?;
            (!final_weight.is_zero()).then(|| Weight::Value(distance).times(&final_weight))
        })
        .reduce(|best, next| Weight::Value(best.resolve().plus(&next.resolve())));
    assert_eq!(
        best,
        Some(Weight::Value(label(&["a", "c"], &["a", "c", "sil"], 0.5)))
    );
}
