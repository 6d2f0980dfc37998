//! lintrc core
//!
//! Layered lint rule-set configuration: declarative documents that name base
//! rule-set presets and override individual rules, plus a deterministic
//! resolver that flattens the layers into one effective rule table. The rule
//! tables are consumed by an external rule-evaluation engine; this crate only
//! produces the configuration payload.
//!
//! ## Configuration Files
//!
//! Documents can be written as JSON, JSONC (comments and trailing commas),
//! YAML, or TOML:
//!
//! ```jsonc
//! {
//!   "root": true,
//!   "parser": "@typescript-eslint/parser",
//!   "plugins": ["@typescript-eslint", "import"],
//!   "extends": ["airbnb-base", "plugin:@typescript-eslint/recommended"],
//!   "settings": {
//!     "import/resolver": { "typescript": {} }
//!   },
//!   "rules": {
//!     "no-lonely-if": "off",
//!     "object-curly-newline": ["error", { "minProperties": 8 }]
//!   }
//! }
//! ```
//!
//! ## Resolution
//!
//! ```
//! use lintrc_core::{Resolver, RuleMap, StaticRuleSets};
//!
//! let mut sets = StaticRuleSets::new();
//! sets.register(
//!     "recommended",
//!     serde_json::from_value(serde_json::json!({ "no-lonely-if": "error" })).unwrap(),
//! );
//!
//! let overrides: RuleMap =
//!     serde_json::from_value(serde_json::json!({ "no-lonely-if": "off" })).unwrap();
//! let effective = Resolver::new(&sets)
//!     .resolve(&["recommended".to_string()], &overrides)
//!     .unwrap();
//! assert!(!effective.is_enabled("no-lonely-if"));
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod rules;

// Re-export commonly used types
pub use document::{ConfigDocument, Settings};
pub use error::{LintrcError, Result};
pub use loader::ConfigLoader;
pub use resolver::{ResolvedConfig, Resolver, RuleSetProvider, StaticRuleSets, Strictness};
pub use rules::{RuleDirective, RuleMap, Severity};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintrc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
