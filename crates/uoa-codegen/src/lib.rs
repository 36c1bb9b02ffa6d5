//! Descriptor generation for online-accounts plugins.
//!
//! Transforms a [`uoa_core::PluginTable`] into the build manifest, provider
//! descriptors, service descriptors and their manifests using Handlebars
//! templates. Output is held in memory as [`GeneratedCode`]; writing it to
//! disk is the job of `uoa-files`.
//!
//! # Examples
//!
//! ```
//! use uoa_codegen::DescriptorGenerator;
//! use uoa_core::PluginTable;
//!
//! let generator = DescriptorGenerator::new()?;
//! let code = generator.generate(&PluginTable::builtin())?;
//!
//! // 14 providers + 14 services + 3 manifests
//! assert_eq!(code.file_count(), 31);
//! assert!(code.get("providers/jabber.provider").is_some());
//! # Ok::<(), uoa_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod template_engine;
pub mod types;

pub use generator::{
    BUILD_MANIFEST, DescriptorGenerator, PROVIDERS_DIR, SERVICES_DIR, continuation_list,
};
pub use template_engine::TemplateEngine;
pub use types::{GeneratedCode, GeneratedFile};
