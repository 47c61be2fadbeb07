//! Supporting files: extra outputs registered once per run, independent of
//! the models in the source document.
//!
//! Destinations are Tera templates rendered against the run's
//! [`TemplateVariables`](crate::context::TemplateVariables), which is how the
//! client file picks up the configured `clientName`.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::context::{GenerationContext, Library};
use crate::utils::package_folder;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tera::Tera;

/// One extra output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingFile {
    /// Template the file is rendered from
    pub template: String,
    /// Folder relative to the output folder; empty for the root
    pub folder: String,
    /// File name
    pub destination: String,
    /// Optional files are never overwritten once they exist
    #[serde(default)]
    pub optional: bool,
}

impl SupportingFile {
    /// Path of the file relative to the output folder
    pub fn relative_path(&self) -> PathBuf {
        if self.folder.is_empty() {
            PathBuf::from(&self.destination)
        } else {
            Path::new(&self.folder).join(&self.destination)
        }
    }
}

/// Which per-item documentation templates the run renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocTemplates {
    pub model_doc: bool,
    pub api_doc: bool,
}

impl Default for DocTemplates {
    fn default() -> Self {
        Self {
            model_doc: true,
            api_doc: true,
        }
    }
}

/// A supporting file before its destination is rendered.
struct FileEntry {
    template: &'static str,
    in_invoker_folder: bool,
    destination: &'static str,
    optional: bool,
}

const SUPPORTING_FILES: &[FileEntry] = &[
    FileEntry {
        template: "build.gradle.mustache",
        in_invoker_folder: false,
        destination: "build.gradle",
        optional: true,
    },
    FileEntry {
        template: "settings.gradle.mustache",
        in_invoker_folder: false,
        destination: "settings.gradle",
        optional: true,
    },
    FileEntry {
        template: "ApiClient.mustache",
        in_invoker_folder: true,
        destination: "{{ clientFileName }}",
        optional: false,
    },
    FileEntry {
        template: "StringUtil.mustache",
        in_invoker_folder: true,
        destination: "StringUtil.java",
        optional: false,
    },
    FileEntry {
        template: "FormAwareEncoder.mustache",
        in_invoker_folder: true,
        destination: "FormAwareEncoder.java",
        optional: false,
    },
];

/// The supporting files and documentation templates for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingFilePlan {
    pub files: Vec<SupportingFile>,
    pub doc_templates: DocTemplates,
}

impl SupportingFilePlan {
    /// Build the plan for `config` and `ctx`.
    ///
    /// Optional files that already exist under the output folder are left
    /// out so a hand-edited build file survives regeneration.
    pub fn build(config: &Config, ctx: &GenerationContext) -> crate::Result<Self> {
        let invoker_folder = package_folder(&config.source_folder, &config.invoker_package);
        let tera_ctx = ctx.to_tera_context()?;
        let output_folder = Path::new(&config.output_folder);

        let mut files = Vec::with_capacity(SUPPORTING_FILES.len());
        for entry in SUPPORTING_FILES {
            let file = SupportingFile {
                template: entry.template.to_string(),
                folder: if entry.in_invoker_folder {
                    invoker_folder.clone()
                } else {
                    String::new()
                },
                destination: Tera::one_off(entry.destination, &tera_ctx, false)?,
                optional: entry.optional,
            };

            if file.optional && output_folder.join(file.relative_path()).exists() {
                log::debug!(
                    "Skipping optional file {}, it already exists",
                    file.relative_path().display()
                );
                continue;
            }
            files.push(file);
        }

        let doc_templates = match ctx.selected_library().library() {
            Some(Library::Feign) => DocTemplates {
                model_doc: false,
                api_doc: false,
            },
            None => DocTemplates::default(),
        };

        Ok(Self {
            files,
            doc_templates,
        })
    }

    /// The generated API client file
    pub fn client_file(&self) -> Option<&SupportingFile> {
        self.files
            .iter()
            .find(|file| file.template == "ApiClient.mustache")
    }
}
