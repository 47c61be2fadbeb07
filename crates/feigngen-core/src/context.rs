//! The generation context: a validated, canonical snapshot of run-wide
//! options.
//!
//! A [`GenerationContext`] is produced once per run by
//! [`OptionRegistry::apply_options`](crate::options::OptionRegistry::apply_options)
//! and is read-only afterwards. Every model annotation and every
//! supporting-file destination reads from the same instance.

// Internal imports (std, crate)
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tera::Context;

/// Default client class name supplied by the template set.
pub const DEFAULT_CLIENT_NAME: &str = "ApiClient";

/// Extension of every generated Java source file.
const JAVA_EXTENSION: &str = "java";

/// Java keywords and literals that can never be used as generated identifiers.
const JAVA_RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
    "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// HTTP client libraries this generator has templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// Netflix Feign with Jackson JSON processing
    #[default]
    Feign,
}

impl Library {
    /// Returns the library identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feign => "feign",
        }
    }

    /// Human-readable description shown next to the library in help output
    pub fn description(&self) -> &'static str {
        match self {
            Self::Feign => "HTTP client: Netflix Feign 8.16.0. JSON processing: Jackson 2.8.x",
        }
    }

    /// The JSON serialization library the templates for this library rely on
    pub fn serialization(&self) -> SerializationLibrary {
        match self {
            Self::Feign => SerializationLibrary::Jackson,
        }
    }

    /// Returns an iterator over all supported libraries
    pub fn all() -> impl Iterator<Item = Self> {
        [Library::Feign].iter().copied()
    }
}

impl FromStr for Library {
    type Err = String;

    // Library names are matched exactly; `Feign` is not `feign`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feign" => Ok(Library::Feign),
            _ => Err(format!("Unknown library: {}", s)),
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The library requested for a run, which may not be one we support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "name")]
pub enum LibrarySelection {
    Supported(Library),
    Unsupported(String),
}

impl LibrarySelection {
    /// Resolve a requested library name.
    pub fn resolve(name: &str) -> Self {
        match name.parse::<Library>() {
            Ok(library) => Self::Supported(library),
            Err(_) => Self::Unsupported(name.to_string()),
        }
    }

    /// The requested name, whether supported or not.
    pub fn name(&self) -> &str {
        match self {
            Self::Supported(library) => library.as_str(),
            Self::Unsupported(name) => name,
        }
    }

    pub fn library(&self) -> Option<Library> {
        match self {
            Self::Supported(library) => Some(*library),
            Self::Unsupported(_) => None,
        }
    }
}

impl Default for LibrarySelection {
    fn default() -> Self {
        Self::Supported(Library::default())
    }
}

/// Serialization library whose annotations generated models must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationLibrary {
    Jackson,
}

/// Identifiers that generated code must not collide with.
///
/// Entries are stored lower-cased and lookups ignore case, so a model named
/// `apiclient` collides with a client named `ApiClient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservedWords(BTreeSet<String>);

impl ReservedWords {
    /// The Java keyword set.
    pub fn java() -> Self {
        Self(JAVA_RESERVED_WORDS.iter().map(|w| w.to_string()).collect())
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.0.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::java()
    }
}

/// A non-fatal anomaly found while building the context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Diagnostic {
    /// The requested library is not one we have templates for
    UnknownLibrary { name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLibrary { name } => {
                write!(f, "Unknown library option (-l/--library): {}", name)
            }
        }
    }
}

/// Validated run-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    pub(crate) use_bean_validation: bool,
    pub(crate) client_name: String,
    pub(crate) consul_name: Option<String>,
    pub(crate) selected_library: LibrarySelection,
    pub(crate) serialization_library: Option<SerializationLibrary>,
    pub(crate) reserved_words: ReservedWords,
    #[serde(default)]
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Default for GenerationContext {
    fn default() -> Self {
        let selected_library = LibrarySelection::default();
        Self {
            use_bean_validation: false,
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            consul_name: None,
            serialization_library: selected_library.library().map(|l| l.serialization()),
            selected_library,
            reserved_words: ReservedWords::default(),
            diagnostics: Vec::new(),
        }
    }
}

impl GenerationContext {
    pub fn use_bean_validation(&self) -> bool {
        self.use_bean_validation
    }

    /// Class name of the generated API client
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// File name of the generated API client; other generated files refer to
    /// the client by exactly this name.
    pub fn client_file_name(&self) -> String {
        format!("{}.{}", self.client_name, JAVA_EXTENSION)
    }

    /// Service name used for consul lookups, if configured
    pub fn consul_name(&self) -> Option<&str> {
        self.consul_name.as_deref()
    }

    pub fn selected_library(&self) -> &LibrarySelection {
        &self.selected_library
    }

    pub fn serialization_library(&self) -> Option<SerializationLibrary> {
        self.serialization_library
    }

    /// Whether models need Jackson annotations.
    pub fn is_jackson(&self) -> bool {
        self.serialization_library == Some(SerializationLibrary::Jackson)
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        &self.reserved_words
    }

    pub fn is_reserved_word(&self, word: &str) -> bool {
        self.reserved_words.contains(word)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The variables templates are rendered with.
    pub fn template_variables(&self) -> TemplateVariables {
        TemplateVariables {
            use_bean_validation: self.use_bean_validation,
            client_name: self.client_name.clone(),
            client_file_name: self.client_file_name(),
            consul_name: self.consul_name.clone(),
            library: self.selected_library.name().to_string(),
            jackson: self.is_jackson(),
        }
    }

    /// The template variables as a Tera context.
    pub fn to_tera_context(&self) -> crate::Result<Context> {
        Ok(Context::from_serialize(self.template_variables())?)
    }
}

/// Flat, template-facing view of a [`GenerationContext`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariables {
    pub use_bean_validation: bool,
    pub client_name: String,
    pub client_file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consul_name: Option<String>,
    pub library: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub jackson: bool,
}
