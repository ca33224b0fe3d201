// AT&T text format reader producing transducers with `AttLabel` weights.

use std::fmt;
use std::path::Path;

use wfsa_core::{Cost, Direction, Semiring, Sole, Weight};

use crate::AutomatonError;
use crate::automaton::Automaton;
use crate::config::AttConfig;
use crate::symbols::SymbolTable;

/// Arc label of a transducer read from AT&T text: the input and output
/// symbol sequences together with a cost.
///
/// As a semiring, `plus` keeps the cheaper alternative (the left one on a
/// tie) and `times` concatenates both sequences and adds the costs. The
/// empty symbol contributes nothing to a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AttLabel {
    input: Vec<String>,
    output: Vec<String>,
    cost: Cost,
}

impl AttLabel {
    pub fn new(input: Vec<String>, output: Vec<String>, cost: Cost) -> Self {
        Self { input, output, cost }
    }

    /// A label that only carries a cost, such as a final weight.
    pub fn cost_only(cost: Cost) -> Self {
        Self::new(Vec::new(), Vec::new(), cost)
    }

    pub fn input(&self) -> &[String] {
        &self.input
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}

impl Semiring for AttLabel {
    fn zero() -> Self {
        Self::cost_only(Cost::zero())
    }

    fn one() -> Self {
        Self::cost_only(Cost::one())
    }

    fn plus(&self, other: &Self) -> Self {
        if other.cost.value() < self.cost.value() {
            other.clone()
        } else {
            self.clone()
        }
    }

    fn times(&self, other: &Self) -> Self {
        let concat = |left: &[String], right: &[String]| {
            let mut joined = Vec::with_capacity(left.len() + right.len());
            joined.extend_from_slice(left);
            joined.extend_from_slice(right);
            joined
        };
        Self {
            input: concat(&self.input, &other.input),
            output: concat(&self.output, &other.output),
            cost: self.cost.times(&other.cost),
        }
    }

    fn is_zero(&self) -> bool {
        self.cost.is_zero()
    }

    fn is_one(&self) -> bool {
        self.cost.is_one() && self.input.is_empty() && self.output.is_empty()
    }
}

impl fmt::Display for AttLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]:[{}]/{}",
            self.input.join(" "),
            self.output.join(" "),
            self.cost
        )
    }
}

/// Read an automaton in AT&T text format.
///
/// Each non-blank line is either an arc, `source target input output [cost]`,
/// or a final state, `state [cost]`. States are non-negative integers and are
/// added on first mention. A missing cost means One. Symbols are looked up in
/// `input_symbols` and `output_symbols`; the empty symbol becomes an empty
/// sequence.
pub fn read_att(
    text: &str,
    input_symbols: &SymbolTable,
    output_symbols: &SymbolTable,
    config: &AttConfig,
) -> Result<Automaton<usize, AttLabel>, AutomatonError> {
    let mut automaton = Automaton::new();
    let mut seen_arc = false;

    for (number, line) in text.lines().enumerate() {
        let number = number + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {}
            [source, target, input, output, rest @ ..] if rest.len() <= 1 => {
                let source = parse_state(number, source)?;
                let target = parse_state(number, target)?;
                let cost = parse_cost(number, rest.first().copied())?;
                let input = symbol(number, input_symbols, input, config)?;
                let output = symbol(number, output_symbols, output, config)?;

                ensure_state(&mut automaton, source)?;
                if !seen_arc {
                    seen_arc = true;
                    if config.first_state_initial {
                        automaton.set_terminal_label(Direction::Forward, &source, Sole::One.weight())?;
                    }
                }
                ensure_state(&mut automaton, target)?;

                let label = AttLabel::new(input, output, cost.unwrap_or_else(Cost::one));
                automaton.add_arc(&source, &target, label)?;
            }
            [state, rest @ ..] if rest.len() <= 1 => {
                let state = parse_state(number, state)?;
                let weight = match parse_cost(number, rest.first().copied())? {
                    Some(cost) => Weight::Value(AttLabel::cost_only(cost)),
                    None => Weight::One,
                };
                ensure_state(&mut automaton, state)?;
                automaton.set_terminal_label(Direction::Backward, &state, weight)?;
            }
            _ => {
                return Err(AutomatonError::parse(
                    number,
                    format!("expected 1, 2, 4 or 5 fields, found {}", fields.len()),
                ));
            }
        }
    }

    tracing::debug!(
        states = automaton.state_count(),
        arcs = automaton.arc_count(),
        "AT&T automaton read"
    );
    Ok(automaton)
}

/// Read an automaton from an AT&T text file. See [`read_att`].
pub fn read_att_file(
    path: impl AsRef<Path>,
    input_symbols: &SymbolTable,
    output_symbols: &SymbolTable,
    config: &AttConfig,
) -> Result<Automaton<usize, AttLabel>, AutomatonError> {
    let text = std::fs::read_to_string(path)?;
    read_att(&text, input_symbols, output_symbols, config)
}

fn ensure_state(automaton: &mut Automaton<usize, AttLabel>, state: usize) -> Result<(), AutomatonError> {
    if !automaton.has_state(&state) {
        automaton.add_state(state)?;
    }
    Ok(())
}

fn parse_state(line: usize, field: &str) -> Result<usize, AutomatonError> {
    field
        .parse()
        .map_err(|_| AutomatonError::parse(line, format!("invalid state: {field}")))
}

fn parse_cost(line: usize, field: Option<&str>) -> Result<Option<Cost>, AutomatonError> {
    field
        .map(|field| {
            field
                .parse::<f64>()
                .map(Cost::new)
                .map_err(|_| AutomatonError::parse(line, format!("invalid cost: {field}")))
        })
        .transpose()
}

fn symbol(line: usize, table: &SymbolTable, name: &str, config: &AttConfig) -> Result<Vec<String>, AutomatonError> {
    if table.is_empty_symbol(name) {
        return Ok(Vec::new());
    }
    if config.strict_symbols && !table.contains(name) {
        return Err(AutomatonError::parse(line, format!("unknown symbol: {name}")));
    }
    Ok(vec![name.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(input: &[&str], output: &[&str], cost: f64) -> AttLabel {
        AttLabel::new(
            input.iter().map(|s| s.to_string()).collect(),
            output.iter().map(|s| s.to_string()).collect(),
            Cost::new(cost),
        )
    }

    fn symbols() -> SymbolTable {
        SymbolTable::parse("<eps> 0\na 1\nb 2\nc 3\n").unwrap()
    }

    #[test]
    fn label_plus_keeps_cheaper() {
        let x = label(&["a"], &["b"], 1.0);
        let y = label(&["c"], &[], 0.5);
        assert_eq!(x.plus(&y), y);
        assert_eq!(y.plus(&x), y);
        let tie = label(&["b"], &[], 1.0);
        assert_eq!(x.plus(&tie), x);
    }

    #[test]
    fn label_times_concatenates() {
        let x = label(&["a"], &["b"], 1.0);
        let y = label(&["c"], &[], 0.5);
        assert_eq!(x.times(&y), label(&["a", "c"], &["b"], 1.5));
        assert_eq!(y.times(&x), label(&["c", "a"], &["b"], 1.5));
    }

    #[test]
    fn label_identities() {
        let x = label(&["a"], &["b"], 1.0);
        assert_eq!(x.times(&AttLabel::one()), x);
        assert_eq!(AttLabel::one().times(&x), x);
        assert_eq!(x.plus(&AttLabel::zero()), x);
        assert!(x.times(&AttLabel::zero()).is_zero());
        assert!(AttLabel::one().is_one());
        assert!(!x.is_one());
    }

    #[test]
    fn label_display() {
        assert_eq!(label(&["a", "b"], &["c"], 1.5).to_string(), "[a b]:[c]/1.5");
    }

    #[test]
    fn reads_arcs_and_final_states() {
        let text = "0 1 a a\n1 2 b <eps> 2\n1 2 c c 0\n2 3 a b 0.5\n3\n2 1.5\n";
        let automaton = read_att(text, &symbols(), &symbols(), &AttConfig::default()).unwrap();

        assert_eq!(automaton.states().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!(automaton.arc_count(), 4);

        let initial: Vec<_> = automaton.terminal_states(Direction::Forward).collect();
        assert_eq!(initial, [(&0, &Weight::One)]);
        let finals: Vec<(usize, Weight<AttLabel>)> = automaton
            .terminal_states(Direction::Backward)
            .map(|(s, w)| (*s, w.clone()))
            .collect();
        assert_eq!(
            finals,
            [(3, Weight::One), (2, Weight::Value(label(&[], &[], 1.5)))]
        );

        let into_two: Vec<AttLabel> = automaton
            .arcs_on(Direction::Backward, &2)
            .unwrap()
            .map(|arc| arc.label().clone())
            .collect();
        assert_eq!(into_two, [label(&["b"], &[], 2.0), label(&["c"], &["c"], 0.0)]);
    }

    #[test]
    fn first_state_initial_can_be_disabled() {
        let config = AttConfig::default().with_first_state_initial(false);
        let automaton = read_att("0 1 a a\n1\n", &symbols(), &symbols(), &config).unwrap();
        assert_eq!(automaton.terminal_states(Direction::Forward).len(), 0);
    }

    #[test]
    fn unknown_symbols() {
        // Unknown names are accepted as literal symbols by default.
        let automaton = read_att("0 1 a z\n", &symbols(), &symbols(), &AttConfig::default()).unwrap();
        let arc = automaton.arcs_on(Direction::Forward, &0).unwrap().next().cloned();
        assert_eq!(arc.map(|a| a.label().clone()), Some(label(&["a"], &["z"], 0.0)));

        let strict = AttConfig::default().with_strict_symbols(true);
        let err = read_att("0 1 a z\n", &symbols(), &symbols(), &strict).unwrap_err();
        assert!(matches!(err, AutomatonError::Parse { line: 1, .. }));
    }

    #[test]
    fn malformed_lines() {
        let config = AttConfig::default();
        for (text, line) in [
            ("0 1 a\n", 1),
            ("0 1 a a 1 2\n", 1),
            ("0 1 a a\nx\n", 2),
            ("0 1 a a x\n", 1),
            ("0 1 a a\n1 y\n", 2),
        ] {
            match read_att(text, &symbols(), &symbols(), &config) {
                Err(AutomatonError::Parse { line: found, .. }) => assert_eq!(found, line, "{text:?}"),
                other => panic!("expected parse error for {text:?}, got {other:?}"),
            }
        }
    }
}
