//! Interest rule timeline
//!
//! Rules are keyed by their effective date. At most one rule exists per date;
//! defining a rule for a date that already has one replaces it. The collection is
//! kept sorted ascending by date after every insertion.

use crate::types::{parse_rate, InterestRule, LedgerDate, LedgerError};

/// Date-ordered set of interest rules
#[derive(Debug, Default)]
pub struct InterestRuleStore {
    rules: Vec<InterestRule>,
}

impl InterestRuleStore {
    pub fn new() -> Self {
        InterestRuleStore { rules: Vec::new() }
    }

    /// Validate and insert an interest rule, replacing any rule on the same date
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat` for a malformed date and
    /// `InvalidInterestRate` for a rate outside (0, 100). The timeline is left
    /// untouched on error.
    pub fn add(
        &mut self,
        date: &str,
        rule_id: &str,
        rate: &str,
    ) -> Result<InterestRule, LedgerError> {
        let date = LedgerDate::parse(date)?;
        let rate = parse_rate(rate)?;

        let rule = InterestRule {
            date,
            rule_id: rule_id.to_string(),
            rate,
        };

        self.rules.retain(|existing| existing.date != rule.date);
        self.rules.push(rule.clone());
        self.rules.sort_by(|a, b| a.date.cmp(&b.date));

        Ok(rule)
    }

    /// All rules ascending by date, or `None` when no rule is defined
    pub fn list(&self) -> Option<&[InterestRule]> {
        if self.rules.is_empty() {
            None
        } else {
            Some(&self.rules)
        }
    }

    /// The rule in force on `date`: the latest rule dated on or before it
    pub fn effective_rule(&self, date: &LedgerDate) -> Option<&InterestRule> {
        let idx = self.rules.partition_point(|rule| &rule.date <= date);
        idx.checked_sub(1).map(|i| &self.rules[i])
    }
}
