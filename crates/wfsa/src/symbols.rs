// Symbol table: name-to-id mapping read from an AT&T symbol list.

use std::path::Path;

use hashbrown::HashMap;

use crate::AutomatonError;

/// Symbols read from an AT&T symbol file.
///
/// The file has one `name index` pair per line. Index 0, if present, names
/// the empty (epsilon) symbol; the remaining indices must run densely from 1.
/// Ordinary symbols get ids one less than their index in the file, so ids
/// start at 0 either way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    /// Name of the empty symbol, if the file declares one.
    empty: Option<String>,
    /// Symbol names indexed by id.
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl SymbolTable {
    /// Parse a symbol table from text.
    ///
    /// Blank lines are skipped. Duplicate names or indices, a lowest index
    /// other than 0 or 1, and gaps between indices are reported as
    /// [`AutomatonError::Parse`].
    pub fn parse(text: &str) -> Result<Self, AutomatonError> {
        // (index, name, line)
        let mut mappings: Vec<(usize, &str, usize)> = Vec::new();
        let mut by_name: HashMap<&str, usize> = HashMap::new();
        let mut by_index: HashMap<usize, &str> = HashMap::new();

        for (number, line) in text.lines().enumerate() {
            let number = number + 1;
            let mut fields = line.split_whitespace();
            let Some(name) = fields.next() else {
                continue;
            };
            let index = match (fields.next(), fields.next()) {
                (Some(index), None) => index.parse::<usize>().map_err(|_| {
                    AutomatonError::parse(number, format!("invalid symbol index: {index}"))
                })?,
                _ => return Err(AutomatonError::parse(number, "expected `name index`")),
            };

            if let Some(other) = by_index.get(&index) {
                return Err(AutomatonError::parse(
                    number,
                    format!("duplicate index: {index} (for {other} and {name})"),
                ));
            }
            if let Some(other) = by_name.get(name) {
                return Err(AutomatonError::parse(
                    number,
                    format!("duplicate name: {name} (with {other} and {index})"),
                ));
            }
            by_index.insert(index, name);
            by_name.insert(name, index);
            mappings.push((index, name, number));
        }

        mappings.sort_unstable_by_key(|&(index, _, _)| index);
        let mut mappings = mappings.into_iter().peekable();

        let mut table = SymbolTable::default();
        if let Some(&(lowest, name, line)) = mappings.peek() {
            match lowest {
                0 => {
                    table.empty = Some(name.to_string());
                    mappings.next();
                }
                1 => {}
                _ => {
                    return Err(AutomatonError::parse(
                        line,
                        format!("lowest index must be 0 or 1, not {lowest} (for {name})"),
                    ));
                }
            }
        }

        for (index, name, line) in mappings {
            let expected = table.names.len() + 1;
            if index != expected {
                return Err(AutomatonError::parse(
                    line,
                    format!("indices must be dense: expected {expected}, found {index} (for {name})"),
                ));
            }
            table.ids.insert(name.to_string(), table.names.len());
            table.names.push(name.to_string());
        }

        tracing::debug!(
            symbols = table.names.len(),
            has_empty = table.empty.is_some(),
            "symbol table parsed"
        );
        Ok(table)
    }

    /// Read and parse a symbol table file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AutomatonError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn empty_symbol(&self) -> Option<&str> {
        self.empty.as_deref()
    }

    pub fn has_empty_symbol(&self) -> bool {
        self.empty.is_some()
    }

    /// Whether `name` is the empty symbol.
    pub fn is_empty_symbol(&self, name: &str) -> bool {
        self.empty.as_deref() == Some(name)
    }

    /// Id of an ordinary symbol. The empty symbol has no id.
    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Whether `name` is declared, as the empty symbol or an ordinary one.
    pub fn contains(&self, name: &str) -> bool {
        self.is_empty_symbol(name) || self.ids.contains_key(name)
    }

    /// Number of ordinary symbols.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
