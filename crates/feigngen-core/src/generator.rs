//! The `java2` generator: configuration, option processing, supporting files
//! and model annotation composed into one run.

// Internal imports (std, crate)
use std::fmt;

use crate::{
    config::Config,
    context::GenerationContext,
    error::Result,
    models::{JacksonModelAnnotator, ModelAnnotator, ModelDescriptor},
    options::{OptionRegistry, RawOptions},
    supporting::SupportingFilePlan,
};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// What kind of artifact a generator produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodegenType {
    Client,
    Server,
    Documentation,
}

impl fmt::Display for CodegenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Documentation => "documentation",
        };
        write!(f, "{}", s)
    }
}

/// Everything a renderer needs besides the models.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRun {
    pub context: GenerationContext,
    pub supporting_files: SupportingFilePlan,
}

/// Java client generator targeting Feign with Jackson.
#[derive(Debug, Clone)]
pub struct Java2Generator<A = JacksonModelAnnotator> {
    config: Config,
    registry: OptionRegistry,
    annotator: A,
}

impl Java2Generator {
    pub fn new(config: Config) -> Self {
        Self::with_annotator(config, JacksonModelAnnotator)
    }
}

impl Default for Java2Generator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<A: ModelAnnotator> Java2Generator<A> {
    pub fn with_annotator(config: Config, annotator: A) -> Self {
        Self {
            config,
            registry: OptionRegistry::new(),
            annotator,
        }
    }

    pub fn name(&self) -> &'static str {
        "java2"
    }

    pub fn tag(&self) -> CodegenType {
        CodegenType::Client
    }

    pub fn help(&self) -> &'static str {
        "Generates a Java client library."
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Merge the configured options with `overrides`, validate them, and
    /// plan the supporting files.
    pub fn process_opts(&self, overrides: &RawOptions) -> Result<GenerationRun> {
        let raw = self.config.options.merged_with(overrides);
        let context = self.registry.apply_options(&raw);
        let supporting_files = SupportingFilePlan::build(&self.config, &context)?;

        log::debug!(
            "Processed {} option(s) for library {}, client file {}",
            raw.len(),
            context.selected_library().name(),
            context.client_file_name()
        );

        Ok(GenerationRun {
            context,
            supporting_files,
        })
    }

    /// Attach marker imports to every model.
    pub fn post_process_models(
        &self,
        models: Vec<ModelDescriptor>,
        ctx: &GenerationContext,
    ) -> Vec<ModelDescriptor> {
        self.annotator.annotate_all(models, ctx)
    }
}
