//! Turns a free-text command such as "find parking near Munich in 30 minutes"
//! into a [`Query`].
//!
//! Extraction is driven by an ordered list of [`ExtractionRule`]s. Each rule feeds one
//! query field; for every field the first rule that produces a value wins and fields no
//! rule fills fall back to [`IntentDefaults`]. Extraction never fails.

use crate::domain::model::Query;
use regex::Regex;
use std::sync::LazyLock;

/// "to <word>" or "near <word>", anywhere in the text, any case. One alternation so the
/// leftmost keyword in the command wins.
///
/// `\w` is deliberately Unicode-aware so "near Düsseldorf" captures the whole name rather
/// than stopping at the first non-ASCII letter.
static DESTINATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)to\s+(\w+)|near\s+(\w+)").expect("destination pattern is valid")
});

/// "<digits> minutes", case-sensitive.
static TIME_BUDGET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s+minutes").expect("time pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Destination,
    TimeBudget,
}

#[derive(Debug, Clone)]
pub struct ExtractionRule {
    field: QueryField,
    pattern: Regex,
}

impl ExtractionRule {
    pub fn new(field: QueryField, pattern: Regex) -> Self {
        Self { field, pattern }
    }

    pub fn destination(pattern: Regex) -> Self {
        Self::new(QueryField::Destination, pattern)
    }

    pub fn time_budget(pattern: Regex) -> Self {
        Self::new(QueryField::TimeBudget, pattern)
    }

    pub fn field(&self) -> QueryField {
        self.field
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// First participating capture group of the first match.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = self.pattern.captures(text)?;
        caps.iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .find(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentDefaults {
    pub destination: String,
    pub time_budget: u32,
}

impl Default for IntentDefaults {
    fn default() -> Self {
        Self {
            destination: "Munich".to_string(),
            time_budget: 30,
        }
    }
}

/// A query together with which of its fields came from defaults.
///
/// A command that literally says "near Munich" and one that says nothing at all both
/// produce destination "Munich" under the stock defaults; these flags tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub query: Query,
    pub destination_defaulted: bool,
    pub time_budget_defaulted: bool,
}

#[derive(Debug, Clone)]
pub struct IntentExtractor {
    rules: Vec<ExtractionRule>,
    defaults: IntentDefaults,
}

impl IntentExtractor {
    /// Extractor with the built-in "to/near <word>" and "<N> minutes" rules.
    pub fn new(defaults: IntentDefaults) -> Self {
        Self::with_rules(defaults, Self::builtin_rules())
    }

    pub fn with_rules(defaults: IntentDefaults, rules: Vec<ExtractionRule>) -> Self {
        Self { rules, defaults }
    }

    pub fn builtin_rules() -> Vec<ExtractionRule> {
        vec![
            ExtractionRule::destination(DESTINATION_PATTERN.clone()),
            ExtractionRule::time_budget(TIME_BUDGET_PATTERN.clone()),
        ]
    }

    /// Appends a rule; it is consulted only when every earlier rule for its field misses.
    pub fn push_rule(&mut self, rule: ExtractionRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[ExtractionRule] {
        &self.rules
    }

    pub fn defaults(&self) -> &IntentDefaults {
        &self.defaults
    }

    pub fn extract(&self, raw: &str) -> Query {
        self.explain(raw).query
    }

    pub fn explain(&self, raw: &str) -> Extraction {
        let destination = self.first_value(QueryField::Destination, raw, |s| Some(s.to_string()));
        let time_budget = self.first_value(QueryField::TimeBudget, raw, parse_minutes);

        let extraction = Extraction {
            destination_defaulted: destination.is_none(),
            time_budget_defaulted: time_budget.is_none(),
            query: Query {
                destination: destination.unwrap_or_else(|| self.defaults.destination.clone()),
                time_budget: time_budget.unwrap_or(self.defaults.time_budget),
            },
        };

        tracing::debug!(
            raw,
            destination = %extraction.query.destination,
            time_budget = extraction.query.time_budget,
            destination_defaulted = extraction.destination_defaulted,
            time_budget_defaulted = extraction.time_budget_defaulted,
            "Extracted search intent"
        );

        extraction
    }

    fn first_value<T>(
        &self,
        field: QueryField,
        raw: &str,
        convert: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .find_map(|rule| rule.capture(raw).and_then(&convert))
    }
}

impl Default for IntentExtractor {
    fn default() -> Self {
        Self::new(IntentDefaults::default())
    }
}

/// Digits only; anything past `u32::MAX` saturates instead of being rejected.
fn parse_minutes(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}
