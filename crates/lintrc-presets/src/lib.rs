//! Shipped rule-set presets
//!
//! Two presets for TypeScript projects, embedded as JSON documents:
//!
//! - [`typescript_base`]: plain TypeScript, extends `airbnb-base` and the
//!   `@typescript-eslint` recommended set.
//! - [`typescript`]: TypeScript + React, extends `airbnb` and adds the
//!   JSX/React rule overrides.
//!
//! [`registry`] exposes both rule tables as named base rule sets, so
//! downstream documents can extend them:
//!
//! ```
//! use lintrc_core::{ConfigDocument, Resolver};
//!
//! let sets = lintrc_presets::registry().unwrap();
//! let document = ConfigDocument::from_json(
//!     r#"{
//!         "extends": ["lintrc/typescript-base"],
//!         "rules": { "no-lonely-if": "error" }
//!     }"#,
//! )
//! .unwrap();
//!
//! let effective = Resolver::new(&sets)
//!     .resolve(&document.extends, &document.rules)
//!     .unwrap();
//! assert!(effective.is_enabled("no-lonely-if"));
//! ```
//!
//! The presets' own `extends` entries (`airbnb`, `airbnb-base`,
//! `plugin:@typescript-eslint/recommended`) are opaque references; resolving
//! a preset document itself requires registering those names with a provider.

use lintrc_core::{ConfigDocument, Result, StaticRuleSets};

/// Registry name of the TypeScript base preset
pub const TYPESCRIPT_BASE: &str = "lintrc/typescript-base";

/// Registry name of the TypeScript + React preset
pub const TYPESCRIPT: &str = "lintrc/typescript";

const TYPESCRIPT_BASE_SOURCE: &str = include_str!("../assets/typescript-base.json");
const TYPESCRIPT_SOURCE: &str = include_str!("../assets/typescript.json");

/// The TypeScript base preset document (no framework rules)
pub fn typescript_base() -> Result<ConfigDocument> {
    ConfigDocument::from_json(TYPESCRIPT_BASE_SOURCE)
}

/// The TypeScript + React preset document
pub fn typescript() -> Result<ConfigDocument> {
    ConfigDocument::from_json(TYPESCRIPT_SOURCE)
}

/// Provider registry holding every shipped preset's rule table
pub fn registry() -> Result<StaticRuleSets> {
    let mut sets = StaticRuleSets::new();
    sets.register(TYPESCRIPT_BASE, typescript_base()?.rules);
    sets.register(TYPESCRIPT, typescript()?.rules);
    Ok(sets)
}
