//! Rule directives and rule tables
//!
//! A rule table maps namespaced rule identifiers (e.g.
//! `import/prefer-default-export`) to directives. A directive is either a
//! bare severity or a severity plus rule-specific option payloads, written
//! in source documents as `"off"`, `"warn"`, `"error"`, a legacy numeric
//! code `0`/`1`/`2`, or `[severity, option, ...]`.

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeSeq};
use std::fmt;

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Warning (doesn't fail the run)
    Warn,
    /// Error (fails the run)
    Error,
}

impl Severity {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Parse the legacy numeric encoding (`0`/`1`/`2`)
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(Severity::Off),
            "warn" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}

struct SeverityVisitor;

impl<'de> Visitor<'de> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#""off", "warn", "error", or a numeric code 0-2"#)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Severity, E> {
        Severity::from_name(value)
            .ok_or_else(|| E::custom(format!("invalid severity '{value}'")))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Severity, E> {
        Severity::from_code(value)
            .ok_or_else(|| E::custom(format!("invalid severity code {value}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Severity, E> {
        u64::try_from(value)
            .ok()
            .and_then(Severity::from_code)
            .ok_or_else(|| E::custom(format!("invalid severity code {value}")))
    }

    // JSON5 input surfaces numeric literals as floats
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Severity, E> {
        if value.fract() == 0.0 && (0.0..=2.0).contains(&value) {
            self.visit_u64(value as u64)
        } else {
            Err(E::custom(format!("invalid severity code {value}")))
        }
    }
}

/// The effective value for one rule
///
/// Either a bare severity, or a severity with rule-specific option payloads.
/// Option payloads are opaque here; the rule-evaluation engine interprets
/// them. A directive always replaces a lower layer's directive wholesale, so
/// `off` suppresses a rule even when the lower layer carried options.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleDirective {
    /// Bare severity (`"error"`, `2`, ...)
    Severity(Severity),
    /// `[severity, option, ...]` with opaque option payloads
    WithOptions {
        severity: Severity,
        options: Vec<serde_json::Value>,
    },
}

impl RuleDirective {
    /// The directive's severity
    pub fn severity(&self) -> Severity {
        match self {
            RuleDirective::Severity(severity) => *severity,
            RuleDirective::WithOptions { severity, .. } => *severity,
        }
    }

    /// Option payloads, empty for bare severities
    pub fn options(&self) -> &[serde_json::Value] {
        match self {
            RuleDirective::Severity(_) => &[],
            RuleDirective::WithOptions { options, .. } => options,
        }
    }

    /// Whether the rule is active at all
    pub fn is_enabled(&self) -> bool {
        self.severity() != Severity::Off
    }
}

impl From<Severity> for RuleDirective {
    fn from(severity: Severity) -> Self {
        RuleDirective::Severity(severity)
    }
}

impl Serialize for RuleDirective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleDirective::Severity(severity) => severity.serialize(serializer),
            RuleDirective::WithOptions { severity, options } => {
                let mut seq = serializer.serialize_seq(Some(1 + options.len()))?;
                seq.serialize_element(severity)?;
                for option in options {
                    seq.serialize_element(option)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RuleDirective {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DirectiveVisitor)
    }
}

struct DirectiveVisitor;

impl<'de> Visitor<'de> for DirectiveVisitor {
    type Value = RuleDirective;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a severity or a [severity, option, ...] array")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RuleDirective, E> {
        SeverityVisitor.visit_str(value).map(RuleDirective::Severity)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RuleDirective, E> {
        SeverityVisitor.visit_u64(value).map(RuleDirective::Severity)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RuleDirective, E> {
        SeverityVisitor.visit_i64(value).map(RuleDirective::Severity)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RuleDirective, E> {
        SeverityVisitor.visit_f64(value).map(RuleDirective::Severity)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleDirective, A::Error> {
        let severity: Severity = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let mut options = Vec::new();
        while let Some(option) = seq.next_element::<serde_json::Value>()? {
            options.push(option);
        }
        Ok(RuleDirective::WithOptions { severity, options })
    }
}

/// Insertion-ordered mapping of rule identifier to directive
///
/// Keys are unique; deserializing a source layer that declares the same rule
/// twice is rejected with the offending identifier named, rather than
/// silently keeping the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleMap(IndexMap<String, RuleDirective>);

impl RuleMap {
    /// Create an empty rule map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rules in the map
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no rules
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the directive for a rule
    pub fn get(&self, rule_id: &str) -> Option<&RuleDirective> {
        self.0.get(rule_id)
    }

    /// Whether the map has an entry for a rule
    pub fn contains(&self, rule_id: &str) -> bool {
        self.0.contains_key(rule_id)
    }

    /// Whether a rule is present and not `off`
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.get(rule_id).is_some_and(RuleDirective::is_enabled)
    }

    /// Insert a directive, returning the previous one for the same rule.
    ///
    /// Programmatic construction follows map semantics (last write wins);
    /// duplicate detection applies to source documents at parse time.
    pub fn insert(
        &mut self,
        rule_id: impl Into<String>,
        directive: impl Into<RuleDirective>,
    ) -> Option<RuleDirective> {
        self.0.insert(rule_id.into(), directive.into())
    }

    /// Insert a directive, rejecting a rule already present.
    ///
    /// This is the construction path for source layers, where a duplicate
    /// rule identifier is an error rather than a silent overwrite.
    pub fn try_insert(
        &mut self,
        rule_id: impl Into<String>,
        directive: impl Into<RuleDirective>,
    ) -> crate::error::Result<()> {
        let rule_id = rule_id.into();
        if self.0.contains_key(&rule_id) {
            return Err(crate::error::LintrcError::DuplicateRule { rule_id });
        }
        self.0.insert(rule_id, directive.into());
        Ok(())
    }

    /// Iterate rules in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleDirective)> {
        self.0.iter().map(|(id, directive)| (id.as_str(), directive))
    }

    /// Iterate rule identifiers in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge another rule map into this one (key-wise overwrite)
    ///
    /// Entries from `other` replace entries for the same rule wholesale;
    /// rules only present in `self` are kept.
    pub fn merge_with(&mut self, other: &RuleMap) {
        for (rule_id, directive) in &other.0 {
            self.0.insert(rule_id.clone(), directive.clone());
        }
    }
}

impl<K: Into<String>, D: Into<RuleDirective>> FromIterator<(K, D)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        let mut rules = RuleMap::new();
        for (rule_id, directive) in iter {
            rules.insert(rule_id, directive);
        }
        rules
    }
}

impl<'a> IntoIterator for &'a RuleMap {
    type Item = (&'a String, &'a RuleDirective);
    type IntoIter = indexmap::map::Iter<'a, String, RuleDirective>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for RuleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RuleMapVisitor)
    }
}

struct RuleMapVisitor;

impl<'de> Visitor<'de> for RuleMapVisitor {
    type Value = RuleMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of rule identifiers to directives")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RuleMap, A::Error> {
        let mut rules = RuleMap::new();
        while let Some((rule_id, directive)) = access.next_entry::<String, RuleDirective>()? {
            rules.try_insert(rule_id, directive).map_err(de::Error::custom)?;
        }
        Ok(rules)
    }
}
