//! Layered rule-set override resolution
//!
//! Resolution starts from the empty table, merges each named base rule set
//! in declared order (later bases override earlier ones key-wise), then
//! merges the document's own override layer last. The result is one flat
//! rule table containing every key contributed by any layer; for a key
//! present in several layers the last-applied source wins.
//!
//! Resolving a base name to its rule table is external to this crate; the
//! [`RuleSetProvider`] trait is that seam.

use crate::document::{ConfigDocument, Settings};
use crate::error::{LintrcError, Result};
use crate::rules::RuleMap;
use std::collections::HashMap;

/// Resolves named base rule sets to their rule tables
pub trait RuleSetProvider {
    /// Look up the rule table for a base rule-set name
    fn rule_set(&self, name: &str) -> Option<RuleMap>;
}

/// In-memory provider backed by a name registry
#[derive(Debug, Clone, Default)]
pub struct StaticRuleSets {
    sets: HashMap<String, RuleMap>,
}

impl StaticRuleSets {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule table under a name, replacing any previous entry
    pub fn register(&mut self, name: impl Into<String>, rules: RuleMap) {
        self.sets.insert(name.into(), rules);
    }

    /// Registered names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

impl RuleSetProvider for StaticRuleSets {
    fn rule_set(&self, name: &str) -> Option<RuleMap> {
        self.sets.get(name).cloned()
    }
}

/// How to treat override rules that no base layer defines
///
/// The legacy format passes unknown rule identifiers through to the
/// effective table and lets the rule-evaluation engine decide whether to
/// honor them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Pass unknown rule identifiers through (legacy behavior)
    #[default]
    Permissive,
    /// Reject an override whose rule appears in no base layer
    Strict,
}

/// The fully resolved view of one configuration document
///
/// `parser`, `plugins`, and `settings` are the document's values passed
/// through verbatim for the external rule-evaluation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub parser: Option<String>,
    pub plugins: Vec<String>,
    pub settings: Settings,
    pub rules: RuleMap,
}

/// Deterministic layered merge of base rule sets and an override layer
#[derive(Debug)]
pub struct Resolver<'p, P: RuleSetProvider> {
    provider: &'p P,
    strictness: Strictness,
}

impl<'p, P: RuleSetProvider> Resolver<'p, P> {
    /// Create a resolver with the default (permissive) strictness
    pub fn new(provider: &'p P) -> Self {
        Self::with_strictness(provider, Strictness::default())
    }

    /// Create a resolver with an explicit strictness mode
    pub fn with_strictness(provider: &'p P, strictness: Strictness) -> Self {
        Self {
            provider,
            strictness,
        }
    }

    /// Merge the named bases (in order) and the override layer into one
    /// effective rule table.
    ///
    /// `extends` must name at least one base; an unresolvable name is a
    /// fatal error identifying the reference. Pure over its inputs.
    pub fn resolve(&self, extends: &[String], overrides: &RuleMap) -> Result<RuleMap> {
        if extends.is_empty() {
            return Err(LintrcError::config_error(
                "`extends` must reference at least one base rule set",
            ));
        }

        let mut effective = RuleMap::new();
        for name in extends {
            let base = self
                .provider
                .rule_set(name)
                .ok_or_else(|| LintrcError::UnknownRuleSet { name: name.clone() })?;
            tracing::debug!(rule_set = %name, rules = base.len(), "merging base rule set");
            effective.merge_with(&base);
        }

        for rule_id in overrides.keys() {
            if !effective.contains(rule_id) {
                if self.strictness == Strictness::Strict {
                    return Err(LintrcError::UnknownRule {
                        rule_id: rule_id.to_string(),
                    });
                }
                tracing::debug!(rule = %rule_id, "override names a rule no base defines");
            }
        }

        effective.merge_with(overrides);
        Ok(effective)
    }

    /// Resolve a whole document, passing the opaque engine fields through
    pub fn resolve_document(&self, document: &ConfigDocument) -> Result<ResolvedConfig> {
        let rules = self.resolve(&document.extends, &document.rules)?;
        Ok(ResolvedConfig {
            parser: document.parser.clone(),
            plugins: document.plugins.clone(),
            settings: document.settings.clone(),
            rules,
        })
    }
}
