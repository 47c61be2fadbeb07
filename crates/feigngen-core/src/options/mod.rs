//! Recognized generator options and the step that turns raw option input into
//! a [`GenerationContext`].
//!
//! Validation happens once, in [`OptionRegistry::apply_options`]. Nothing in
//! this module fails: unknown keys are ignored, malformed booleans resolve to
//! `false`, and an unsupported library is reported as a [`Diagnostic`] while
//! the run carries on with serialization detection switched off.
//!
//! # Examples
//!
//! ```
//! use feigngen_core::options::{OptionRegistry, RawOptions};
//!
//! let registry = OptionRegistry::new();
//! let mut raw = RawOptions::new();
//! raw.insert("clientName", "PetClient").insert("useBeanValidation", "TRUE");
//!
//! let ctx = registry.apply_options(&raw);
//! assert_eq!(ctx.client_file_name(), "PetClient.java");
//! assert!(ctx.use_bean_validation());
//! assert!(ctx.is_jackson());
//! ```

pub mod raw;

pub use raw::{parse_boolean, RawOptions};

use crate::context::{
    Diagnostic, GenerationContext, Library, LibrarySelection, ReservedWords, DEFAULT_CLIENT_NAME,
};

// External imports (alphabetized)
use serde::Serialize;

/// Use BeanValidation API annotations
pub const USE_BEAN_VALIDATION: &str = "useBeanValidation";
/// Name of the generated ApiClient class and file
pub const CLIENT_NAME: &str = "clientName";
/// Name of the consul service lookup
pub const CONSUL_NAME: &str = "consulName";
/// Library template (sub-template) selector
pub const LIBRARY: &str = "library";

/// Value shape of a recognized option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum OptionKind {
    Boolean {
        default: bool,
    },
    String,
    /// One of a fixed set of values, each with a description
    Enum {
        values: Vec<(String, String)>,
        default: String,
    },
}

/// Help metadata for one recognized option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliOption {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub kind: OptionKind,
}

impl CliOption {
    fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::Boolean { default: false },
        }
    }

    fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::String,
        }
    }

    /// The default rendered for help output, if the option has one
    pub fn default_value(&self) -> Option<String> {
        match &self.kind {
            OptionKind::Boolean { default } => Some(default.to_string()),
            OptionKind::String => None,
            OptionKind::Enum { default, .. } => Some(default.clone()),
        }
    }
}

/// Declares recognized options and builds the generation context.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    options: Vec<CliOption>,
    default_client_name: String,
    default_library: String,
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionRegistry {
    pub fn new() -> Self {
        let library_values = Library::all()
            .map(|l| (l.as_str().to_string(), l.description().to_string()))
            .collect();

        Self {
            options: vec![
                CliOption::boolean(USE_BEAN_VALIDATION, "Use BeanValidation API annotations"),
                CliOption::string(CLIENT_NAME, "sets the name of the ApiClient file."),
                CliOption::string(CONSUL_NAME, "sets the name of the consul lookup."),
                CliOption {
                    name: LIBRARY,
                    description: "library template (sub-template) to use",
                    kind: OptionKind::Enum {
                        values: library_values,
                        default: Library::default().as_str().to_string(),
                    },
                },
            ],
            default_client_name: DEFAULT_CLIENT_NAME.to_string(),
            default_library: Library::default().as_str().to_string(),
        }
    }

    /// Use `name` as the client name when the input does not set one.
    pub fn with_default_client_name(mut self, name: impl Into<String>) -> Self {
        self.default_client_name = name.into();
        self
    }

    /// Use `library` when the input does not select one.
    pub fn with_default_library(mut self, library: impl Into<String>) -> Self {
        self.default_library = library.into();
        self
    }

    /// The recognized options, for help output.
    pub fn register_options(&self) -> &[CliOption] {
        &self.options
    }

    pub fn is_recognized(&self, key: &str) -> bool {
        self.options.iter().any(|o| o.name == key)
    }

    /// Validate `raw` and produce the run's generation context.
    pub fn apply_options(&self, raw: &RawOptions) -> GenerationContext {
        for (key, _) in raw.iter().filter(|(key, _)| !self.is_recognized(key)) {
            log::debug!("Ignoring unrecognized option '{}'", key);
        }

        let use_bean_validation = raw.get(USE_BEAN_VALIDATION).is_some_and(parse_boolean);

        let mut reserved_words = ReservedWords::java();
        let client_name = match raw.get(CLIENT_NAME) {
            Some(name) => {
                reserved_words.insert(name);
                name.to_string()
            }
            None => self.default_client_name.clone(),
        };

        let consul_name = raw.get(CONSUL_NAME).map(str::to_string);
        if consul_name.as_deref() == Some("") {
            log::debug!("Option '{}' is set to an empty string", CONSUL_NAME);
        }

        let mut diagnostics = Vec::new();
        let selected_library =
            LibrarySelection::resolve(raw.get(LIBRARY).unwrap_or(self.default_library.as_str()));
        let serialization_library = match &selected_library {
            LibrarySelection::Supported(library) => Some(library.serialization()),
            LibrarySelection::Unsupported(name) => {
                let diagnostic = Diagnostic::UnknownLibrary { name: name.clone() };
                log::error!("{}", diagnostic);
                diagnostics.push(diagnostic);
                None
            }
        };

        GenerationContext {
            use_bean_validation,
            client_name,
            consul_name,
            selected_library,
            serialization_library,
            reserved_words,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SerializationLibrary;

    fn raw(pairs: &[(&str, &str)]) -> RawOptions {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_register_options() {
        let registry = OptionRegistry::new();
        let names: Vec<_> = registry.register_options().iter().map(|o| o.name).collect();
        assert_eq!(names, vec![USE_BEAN_VALIDATION, CLIENT_NAME, CONSUL_NAME, LIBRARY]);

        let bean = &registry.register_options()[0];
        assert_eq!(bean.kind, OptionKind::Boolean { default: false });
        assert_eq!(bean.default_value().as_deref(), Some("false"));

        let library = &registry.register_options()[3];
        assert_eq!(library.default_value().as_deref(), Some("feign"));
        match &library.kind {
            OptionKind::Enum { values, .. } => {
                assert_eq!(values.len(), 1);
                assert_eq!(values[0].0, "feign");
                assert!(values[0].1.contains("Netflix Feign"));
            }
            other => panic!("expected enum option, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let ctx = OptionRegistry::new().apply_options(&RawOptions::new());
        assert_eq!(ctx, GenerationContext::default());
        assert!(!ctx.use_bean_validation());
        assert_eq!(ctx.selected_library(), &LibrarySelection::Supported(Library::Feign));
        assert_eq!(ctx.serialization_library(), Some(SerializationLibrary::Jackson));
    }

    #[test]
    fn test_bean_validation_truthy_spellings() {
        let registry = OptionRegistry::new();
        for value in ["true", "True", "TRUE", "tRuE"] {
            let ctx = registry.apply_options(&raw(&[(USE_BEAN_VALIDATION, value)]));
            assert!(ctx.use_bean_validation(), "{value} should parse as true");
        }
        for value in ["false", "yes", "1", "on", "", "true "] {
            let ctx = registry.apply_options(&raw(&[(USE_BEAN_VALIDATION, value)]));
            assert!(!ctx.use_bean_validation(), "{value} should parse as false");
        }
    }

    #[test]
    fn test_bean_validation_stored_as_boolean() {
        let ctx = OptionRegistry::new().apply_options(&raw(&[(USE_BEAN_VALIDATION, "TRUE")]));
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["useBeanValidation"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_client_name_is_reserved() {
        let registry = OptionRegistry::new();
        let ctx = registry.apply_options(&raw(&[(CLIENT_NAME, "MyApiClient")]));
        assert_eq!(ctx.client_name(), "MyApiClient");
        assert_eq!(ctx.client_file_name(), "MyApiClient.java");
        assert!(ctx.is_reserved_word("MyApiClient"));
        assert!(ctx.reserved_words().iter().any(|w| w == "myapiclient"));
        assert_eq!(ctx.reserved_words().len(), ReservedWords::java().len() + 1);

        let defaulted = registry.apply_options(&RawOptions::new());
        assert!(!defaulted.is_reserved_word("MyApiClient"));
    }

    #[test]
    fn test_default_client_name_override() {
        let registry = OptionRegistry::new().with_default_client_name("FeignClient");
        let ctx = registry.apply_options(&RawOptions::new());
        assert_eq!(ctx.client_name(), "FeignClient");
    }

    #[test]
    fn test_consul_name_passes_through() {
        let registry = OptionRegistry::new();
        let ctx = registry.apply_options(&raw(&[(CONSUL_NAME, "pet-service")]));
        assert_eq!(ctx.consul_name(), Some("pet-service"));

        let empty = registry.apply_options(&raw(&[(CONSUL_NAME, "")]));
        assert_eq!(empty.consul_name(), Some(""));
        assert!(empty.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_library_is_non_fatal() {
        let ctx = OptionRegistry::new().apply_options(&raw(&[(LIBRARY, "okhttp-gson")]));
        assert_eq!(
            ctx.selected_library(),
            &LibrarySelection::Unsupported("okhttp-gson".to_string())
        );
        assert_eq!(ctx.serialization_library(), None);
        assert!(!ctx.is_jackson());
        assert_eq!(
            ctx.diagnostics(),
            &[Diagnostic::UnknownLibrary {
                name: "okhttp-gson".to_string()
            }]
        );
        assert_eq!(
            ctx.diagnostics()[0].to_string(),
            "Unknown library option (-l/--library): okhttp-gson"
        );
    }

    #[test]
    fn test_unsupported_default_library() {
        let registry = OptionRegistry::new().with_default_library("jersey2");
        let ctx = registry.apply_options(&RawOptions::new());
        assert!(!ctx.is_jackson());
        assert_eq!(ctx.diagnostics().len(), 1);

        let explicit = registry.apply_options(&raw(&[(LIBRARY, "feign")]));
        assert!(explicit.is_jackson());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let registry = OptionRegistry::new();
        let ctx = registry.apply_options(&raw(&[
            ("dateLibrary", "java8"),
            ("hideGenerationTimestamp", "true"),
        ]));
        assert_eq!(ctx, GenerationContext::default());
        assert!(!registry.is_recognized("dateLibrary"));
        assert!(registry.is_recognized(CLIENT_NAME));
    }
}
