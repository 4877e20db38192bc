//! Rule registry and the allow/deny policy applied to it.

use lumen_config::LintConfig;
use lumen_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};

use crate::rules::register_builtin_rules;
use crate::{Analysis, LintRule};

/// One entry of an `allow` or `deny` list.
///
/// Entries that parse as a code (`W102`, `w102`) match by code; anything
/// else matches a rule's kebab-case name exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
enum RuleSelector {
    Code(DiagnosticCode),
    Name(String),
}

impl RuleSelector {
    fn parse(entry: &str) -> Self {
        let entry = entry.trim();
        match entry.parse::<DiagnosticCode>() {
            Ok(code) => RuleSelector::Code(code),
            Err(_) => RuleSelector::Name(entry.to_string()),
        }
    }

    fn matches(&self, rule: &dyn LintRule) -> bool {
        match self {
            RuleSelector::Code(code) => rule.code() == *code,
            RuleSelector::Name(name) => rule.name() == name.as_str(),
        }
    }
}

/// Runs the registered rules over an [`Analysis`] under a lint policy.
pub struct LintEngine {
    rules: Vec<Box<dyn LintRule>>,
    denied: Vec<RuleSelector>,
    allowed: Vec<RuleSelector>,
}

impl LintEngine {
    /// Builds an engine with every builtin rule and the given policy.
    pub fn new(config: &LintConfig) -> Self {
        let mut engine = Self::empty(config);
        register_builtin_rules(&mut engine);
        engine.report_unmatched();
        engine
    }

    /// Builtin rules with nothing allowed or denied.
    pub fn with_defaults() -> Self {
        Self::new(&LintConfig::default())
    }

    fn empty(config: &LintConfig) -> Self {
        let selectors =
            |list: &[String]| -> Vec<RuleSelector> { list.iter().map(|e| RuleSelector::parse(e)).collect() };
        Self {
            rules: Vec::new(),
            denied: selectors(&config.deny),
            allowed: selectors(&config.allow),
        }
    }

    // A misspelled entry silently does nothing, so at least say so in the log.
    fn report_unmatched(&self) {
        for selector in self.denied.iter().chain(&self.allowed) {
            if !self.rules.iter().any(|r| selector.matches(r.as_ref())) {
                tracing::warn!(entry = ?selector, "lint policy entry matches no rule");
            }
        }
    }

    /// Adds a rule after the builtins.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Kebab-case names of the registered rules, in registration order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Iterates over the registered rules.
    pub fn rules(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Returns `true` if `rule` is switched off by the allow list.
    pub fn is_allowed(&self, rule: &dyn LintRule) -> bool {
        self.allowed.iter().any(|s| s.matches(rule))
    }

    /// Returns `true` if `rule` is promoted to error by the deny list.
    pub fn is_denied(&self, rule: &dyn LintRule) -> bool {
        self.denied.iter().any(|s| s.matches(rule))
    }

    /// Runs every rule not on the allow list.
    ///
    /// Each rule writes into its own scratch sink so that a denied rule's
    /// findings can be promoted before they reach `sink`.
    pub fn run(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        for rule in &self.rules {
            if self.is_allowed(rule.as_ref()) {
                tracing::debug!(rule = rule.name(), "skipping allowed rule");
                continue;
            }

            let scratch = DiagnosticSink::new();
            rule.check(analysis, &scratch);
            let denied = self.is_denied(rule.as_ref());
            tracing::trace!(
                rule = rule.name(),
                found = scratch.warning_count() + scratch.error_count(),
                denied,
                "rule finished"
            );

            for mut diag in scratch.take_all() {
                if denied {
                    diag.severity = Severity::Error;
                }
                sink.emit(diag);
            }
        }
    }
}
