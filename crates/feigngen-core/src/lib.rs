//! feigngen Core Library
//!
//! This library customizes Java client generation for the Feign HTTP library:
//! it declares the extra generator options, validates them into a
//! [`GenerationContext`], plans the supporting files, and decides which
//! Jackson marker imports each generated model needs.

pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod models;
pub mod options;
pub mod supporting;
pub mod utils;

pub use crate::{
    config::Config,
    context::{GenerationContext, Library, LibrarySelection, SerializationLibrary},
    error::{Error, Result},
    generator::{GenerationRun, Java2Generator},
    models::{JacksonModelAnnotator, MarkerImport, ModelAnnotator, ModelDescriptor},
    options::{OptionRegistry, RawOptions},
    supporting::{SupportingFile, SupportingFilePlan},
};
