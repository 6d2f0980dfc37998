//! The top-level configuration document
//!
//! A document expresses `{ root, parser, plugins, extends, settings, rules }`
//! shaped data. `extends` is the ordered list of base rule-set references
//! (low to high precedence); `rules` is the document's override layer;
//! `settings`, `parser`, and `plugins` are opaque and forwarded unmodified to
//! the rule-evaluation engine. A document is constructed once from its source
//! representation and never mutated afterwards.

use crate::error::{LintrcError, Result};
use crate::rules::RuleMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Opaque engine settings, passed through unmodified
pub type Settings = serde_json::Map<String, serde_json::Value>;

/// A declarative lint configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    /// Stop upward config discovery at this document
    pub root: bool,

    /// Parser identifier, forwarded to the external engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    /// Plugin identifiers, forwarded to the external engine
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Base rule-set references, applied low-to-high precedence
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Opaque key-value settings for the external engine
    #[serde(skip_serializing_if = "Settings::is_empty")]
    pub settings: Settings,

    /// The document's rule override layer
    #[serde(skip_serializing_if = "RuleMap::is_empty")]
    pub rules: RuleMap,
}

impl ConfigDocument {
    /// Deserialize a document from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let document: ConfigDocument =
            serde_json::from_str(content).map_err(|e| LintrcError::Config {
                message: format!("Failed to parse JSON config: {e}"),
            })?;
        document.validate()?;
        Ok(document)
    }

    /// Deserialize a document from JSONC (comments and trailing commas)
    pub fn from_jsonc(content: &str) -> Result<Self> {
        let document: ConfigDocument = json5::from_str(content).map_err(|e| LintrcError::Config {
            message: format!("Failed to parse JSONC config: {e}"),
        })?;
        document.validate()?;
        Ok(document)
    }

    /// Deserialize a document from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let document: ConfigDocument =
            serde_yaml::from_str(content).map_err(|e| LintrcError::Config {
                message: format!("Failed to parse YAML config: {e}"),
            })?;
        document.validate()?;
        Ok(document)
    }

    /// Deserialize a document from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        let document: ConfigDocument = toml::from_str(content).map_err(|e| LintrcError::Config {
            message: format!("Failed to parse TOML config: {e}"),
        })?;
        document.validate()?;
        Ok(document)
    }

    /// Load a document from a file, dispatching on the extension
    ///
    /// Recognizes `.json`, `.jsonc`, `.yaml`/`.yml`, and `.toml`. Files
    /// without a recognized extension are sniffed by content shape: a leading
    /// `{` means JSON, anything else is tried as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| LintrcError::io_error(path, e))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("jsonc") => Self::from_jsonc(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("toml") => Self::from_toml(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json(&content)
                } else {
                    Self::from_toml(&content)
                }
            }
        }
    }

    /// Serialize the document to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LintrcError::Config {
            message: format!("Failed to serialize config to JSON: {e}"),
        })
    }

    /// Validate the document for structural correctness
    ///
    /// Duplicate rule identifiers are already rejected at parse time; this
    /// checks what the parser cannot: empty identifiers and references.
    pub fn validate(&self) -> Result<()> {
        for (index, reference) in self.extends.iter().enumerate() {
            if reference.is_empty() {
                return Err(LintrcError::Config {
                    message: format!("extends entry {index} must not be empty"),
                });
            }
        }

        for (index, plugin) in self.plugins.iter().enumerate() {
            if plugin.is_empty() {
                return Err(LintrcError::Config {
                    message: format!("plugins entry {index} must not be empty"),
                });
            }
        }

        if self.parser.as_deref() == Some("") {
            return Err(LintrcError::Config {
                message: "parser must not be empty".to_string(),
            });
        }

        for (rule_id, _) in self.rules.iter() {
            if rule_id.is_empty() {
                return Err(LintrcError::Config {
                    message: "Rule ID cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Generate the JSON schema for configuration documents
    pub fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "lintrc configuration",
            "description": "Layered lint rule-set configuration document",
            "type": "object",
            "properties": {
                "root": {
                    "description": "Stop upward config discovery at this document",
                    "type": "boolean",
                    "default": false
                },
                "parser": {
                    "description": "Parser identifier, forwarded to the external engine",
                    "type": "string"
                },
                "plugins": {
                    "description": "Plugin identifiers, forwarded to the external engine",
                    "type": "array",
                    "items": { "type": "string" }
                },
                "extends": {
                    "description": "Base rule-set references, low to high precedence",
                    "type": "array",
                    "items": { "type": "string" }
                },
                "settings": {
                    "description": "Opaque key-value settings for the external engine",
                    "type": "object",
                    "additionalProperties": true
                },
                "rules": {
                    "description": "Rule overrides applied after all bases",
                    "type": "object",
                    "additionalProperties": { "$ref": "#/definitions/Directive" }
                }
            },
            "definitions": {
                "Severity": {
                    "anyOf": [
                        { "type": "string", "enum": ["off", "warn", "error"] },
                        { "type": "integer", "minimum": 0, "maximum": 2 }
                    ]
                },
                "Directive": {
                    "anyOf": [
                        { "$ref": "#/definitions/Severity" },
                        {
                            "type": "array",
                            "items": [{ "$ref": "#/definitions/Severity" }],
                            "additionalItems": true,
                            "minItems": 1
                        }
                    ]
                }
            }
        })
    }

    /// Get the JSON schema as a formatted string
    pub fn json_schema_string() -> Result<String> {
        serde_json::to_string_pretty(&Self::json_schema()).map_err(|e| LintrcError::Config {
            message: format!("Failed to serialize JSON schema: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleDirective, Severity};
    use serde_json::json;

    #[test]
    fn test_parse_full_document() {
        let document = ConfigDocument::from_json(
            r#"{
                "root": true,
                "parser": "@typescript-eslint/parser",
                "plugins": ["@typescript-eslint", "import"],
                "extends": ["airbnb-base", "plugin:@typescript-eslint/recommended"],
                "settings": {
                    "import/resolver": { "typescript": {} }
                },
                "rules": {
                    "no-lonely-if": "off",
                    "@typescript-eslint/ban-ts-comment": 2,
                    "object-curly-newline": ["error", { "minProperties": 8 }]
                }
            }"#,
        )
        .unwrap();

        assert!(document.root);
        assert_eq!(document.parser.as_deref(), Some("@typescript-eslint/parser"));
        assert_eq!(document.plugins, ["@typescript-eslint", "import"]);
        assert_eq!(
            document.extends,
            ["airbnb-base", "plugin:@typescript-eslint/recommended"]
        );
        assert_eq!(document.rules.len(), 3);
        assert_eq!(
            document.rules.get("@typescript-eslint/ban-ts-comment"),
            Some(&RuleDirective::Severity(Severity::Error))
        );
    }

    #[test]
    fn test_settings_pass_through_verbatim() {
        let document = ConfigDocument::from_json(
            r#"{
                "settings": {
                    "import/resolver": { "typescript": {} },
                    "threshold": 7
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            document.settings.get("import/resolver"),
            Some(&json!({ "typescript": {} }))
        );
        assert_eq!(document.settings.get("threshold"), Some(&json!(7)));
    }

    #[test]
    fn test_parse_yaml_document() {
        let document = ConfigDocument::from_yaml(
            r#"
root: true
extends:
  - airbnb-base
rules:
  no-lonely-if: off2
"#,
        );
        // `off2` is not a severity
        assert!(document.is_err());

        let document = ConfigDocument::from_yaml(
            r#"
root: true
extends:
  - airbnb-base
rules:
  no-lonely-if: "off"
  import/prefer-default-export: 0
"#,
        )
        .unwrap();
        assert!(!document.rules.is_enabled("no-lonely-if"));
        assert!(!document.rules.is_enabled("import/prefer-default-export"));
    }

    #[test]
    fn test_parse_toml_document() {
        let document = ConfigDocument::from_toml(
            r#"
root = true
extends = ["airbnb-base"]

[rules]
"no-lonely-if" = "off"
"object-curly-newline" = ["error", { minProperties = 8 }]
"#,
        )
        .unwrap();

        assert!(document.root);
        assert_eq!(document.rules.len(), 2);
        let directive = document.rules.get("object-curly-newline").unwrap();
        assert_eq!(directive.severity(), Severity::Error);
        assert_eq!(directive.options(), [json!({ "minProperties": 8 })]);
    }

    #[test]
    fn test_parse_jsonc_document() {
        let document = ConfigDocument::from_jsonc(
            r#"{
                // bases first
                "extends": ["airbnb-base"],
                "rules": {
                    "no-lonely-if": "off", // trailing comma below
                    "@typescript-eslint/ban-ts-comment": 2,
                },
            }"#,
        )
        .unwrap();

        assert_eq!(document.extends, ["airbnb-base"]);
        assert_eq!(
            document
                .rules
                .get("@typescript-eslint/ban-ts-comment")
                .map(RuleDirective::severity),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_duplicate_rule_fails_at_parse_time() {
        let result = ConfigDocument::from_json(
            r#"{ "rules": { "no-lonely-if": "off", "no-lonely-if": "error" } }"#,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Duplicate rule 'no-lonely-if'"), "{message}");
    }

    #[test]
    fn test_validate_rejects_empty_entries() {
        let result = ConfigDocument::from_json(r#"{ "extends": [""] }"#);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("extends entry 0 must not be empty")
        );

        let result = ConfigDocument::from_json(r#"{ "rules": { "": "error" } }"#);
        assert!(result.unwrap_err().to_string().contains("Rule ID cannot be empty"));
    }

    #[test]
    fn test_json_serialization_roundtrip() {
        let document = ConfigDocument::from_json(
            r#"{
                "root": true,
                "extends": ["airbnb-base"],
                "rules": { "no-lonely-if": "off" }
            }"#,
        )
        .unwrap();

        let json = document.to_json().unwrap();
        let reparsed = ConfigDocument::from_json(&json).unwrap();
        assert_eq!(document, reparsed);
    }

    #[test]
    fn test_json_schema_generation() {
        let schema = ConfigDocument::json_schema();
        assert!(schema["properties"]["extends"].is_object());
        assert!(schema["properties"]["rules"].is_object());
        assert!(schema["definitions"]["Directive"].is_object());

        let schema_string = ConfigDocument::json_schema_string().unwrap();
        let _: serde_json::Value = serde_json::from_str(&schema_string).unwrap();
    }
}
