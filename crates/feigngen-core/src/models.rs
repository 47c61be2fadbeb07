//! Model descriptors and the annotators that decorate them with marker
//! imports.
//!
//! A [`ModelDescriptor`] describes one data model slated for generation. A
//! [`ModelAnnotator`] inspects it alongside the run's [`GenerationContext`] and
//! adds the [`MarkerImport`]s its generated class needs. The renderer resolves
//! markers to concrete import lines via [`MarkerImport::qualified_name`].

// Internal imports (std, crate)
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::context::GenerationContext;
use crate::options::{parse_boolean, raw::scalar_to_string};

// External imports (alphabetized)
use serde::{Deserialize, Deserializer, Serialize};
use serde_value::Value as SerdeValue;
use tokio::fs;

/// Package holding the Jackson annotations.
const JACKSON_ANNOTATION_PACKAGE: &str = "com.fasterxml.jackson.annotation";

/// A tag for an annotation a generated model must import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarkerImport {
    /// Jackson `@JsonProperty` on every serialized field
    #[serde(rename = "JsonProperty")]
    PropertySerialization,
    /// Jackson `@JsonCreator` on the enum factory method
    #[serde(rename = "JsonCreator")]
    EnumConstruction,
}

impl MarkerImport {
    /// Simple name of the annotation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PropertySerialization => "JsonProperty",
            Self::EnumConstruction => "JsonCreator",
        }
    }

    /// Fully qualified name, as it appears in an import statement
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", JACKSON_ANNOTATION_PACKAGE, self.as_str())
    }
}

impl fmt::Display for MarkerImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One data model slated for code generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model class name
    pub name: String,

    /// Whether the model is an enumeration; absent or malformed means `false`
    #[serde(default, alias = "isEnum", deserialize_with = "deserialize_lenient_bool")]
    pub is_enumeration: bool,

    /// Names of the model's properties
    #[serde(default)]
    pub properties: Vec<String>,

    /// Marker imports attached by annotation
    #[serde(default)]
    pub imports: BTreeSet<MarkerImport>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A descriptor for an enumeration model
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            is_enumeration: true,
            ..Self::new(name)
        }
    }

    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Import lines the renderer should emit for this model.
    pub fn import_statements(&self) -> Vec<String> {
        self.imports
            .iter()
            .map(|marker| format!("import {};", marker.qualified_name()))
            .collect()
    }
}

/// Decides which marker imports a model needs.
pub trait ModelAnnotator {
    /// Attach marker imports to `model`. Never fails; running it twice adds
    /// nothing new.
    fn annotate(&self, model: ModelDescriptor, ctx: &GenerationContext) -> ModelDescriptor;

    fn annotate_all(
        &self,
        models: Vec<ModelDescriptor>,
        ctx: &GenerationContext,
    ) -> Vec<ModelDescriptor> {
        models
            .into_iter()
            .map(|model| self.annotate(model, ctx))
            .collect()
    }
}

/// Adds Jackson annotation markers when Jackson serialization is active.
///
/// | enumeration | Jackson | added |
/// |---|---|---|
/// | no | yes | `JsonProperty` |
/// | yes | yes | `JsonCreator` |
/// | any | no | nothing |
///
/// The decision ignores the model's properties: an empty non-enum model
/// still gets `JsonProperty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JacksonModelAnnotator;

impl ModelAnnotator for JacksonModelAnnotator {
    fn annotate(&self, mut model: ModelDescriptor, ctx: &GenerationContext) -> ModelDescriptor {
        if !ctx.is_jackson() {
            return model;
        }

        let marker = if model.is_enumeration {
            MarkerImport::EnumConstruction
        } else {
            MarkerImport::PropertySerialization
        };
        if model.imports.insert(marker) {
            log::debug!("Added import {} to model {}", marker, model.name);
        }
        model
    }
}

/// Load model descriptors from a YAML or JSON list.
pub async fn load_models<P: AsRef<Path>>(path: P) -> crate::Result<Vec<ModelDescriptor>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).await?;
    let models = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(models)
}

/// Accept booleans, `"true"` strings in any case, or anything else as `false`.
fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SerdeValue::deserialize(deserializer)?;
    Ok(scalar_to_string(value).is_some_and(|s| parse_boolean(&s)))
}
