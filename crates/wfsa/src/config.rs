// Reader configuration for the AT&T text format.

/// Options for [`read_att`](crate::att::read_att).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttConfig {
    /// Give the source state of the first arc line an initial label of One.
    /// The AT&T format has no other way to mark a start state.
    pub first_state_initial: bool,
    /// Reject arc symbols that are missing from the symbol table. Off by
    /// default, in which case unknown names are taken as literal symbols.
    pub strict_symbols: bool,
}

impl Default for AttConfig {
    fn default() -> Self {
        Self {
            first_state_initial: true,
            strict_symbols: false,
        }
    }
}

impl AttConfig {
    pub fn with_first_state_initial(mut self, enabled: bool) -> Self {
        self.first_state_initial = enabled;
        self
    }

    pub fn with_strict_symbols(mut self, enabled: bool) -> Self {
        self.strict_symbols = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_att_conventions() {
        let config = AttConfig::default();
        assert!(config.first_state_initial);
        assert!(!config.strict_symbols);
    }

    #[test]
    fn builder_overrides() {
        let config = AttConfig::default()
            .with_first_state_initial(false)
            .with_strict_symbols(true);
        assert_eq!(
            config,
            AttConfig {
                first_state_initial: false,
                strict_symbols: true,
            }
        );
    }
}
