use crate::card::Card;
use crate::rules::Rules;

/// Dequeues allowed to the relaxed search before it gives up.
pub const DEFAULT_RELAXED_BUDGET: usize = 100_000;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("card {0} appears more than once in the rank order")]
    DuplicateRank(Card),
    #[error("relaxed search budget must be at least 1")]
    ZeroBudget,
}

/// Everything a [`Solver`](crate::solver::Solver) needs besides the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub rules: Rules,
    pub relaxed_budget: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            relaxed_budget: DEFAULT_RELAXED_BUDGET,
        }
    }
}

impl SolverConfig {
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_relaxed_budget(mut self, budget: usize) -> Self {
        self.relaxed_budget = budget;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relaxed_budget == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SolverConfig::default();
        assert_eq!(config.relaxed_budget, DEFAULT_RELAXED_BUDGET);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_budget_rejected() {
        let config = SolverConfig::default().with_relaxed_budget(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBudget));
    }
}
