//! Descriptor generator.
//!
//! Renders, for an ordered plugin table:
//!
//! ```text
//! Makefile.am                       plugin_LTLIBRARIES + one build block per plugin
//! providers/<protocol>.provider     one per plugin
//! providers/Makefile.am             providers_DATA list
//! services/<protocol>-im.service    one per plugin
//! services/Makefile.am              services_DATA list
//! ```
//!
//! Every list keeps the table order. Nothing depends on the clock or the
//! environment, so identical input yields byte-identical output.
//!
//! # Examples
//!
//! ```
//! use uoa_codegen::DescriptorGenerator;
//! use uoa_core::{PluginRecord, PluginTable};
//!
//! let table = PluginTable::new(vec![
//!     PluginRecord::parse("Salut", "salut", "local-xmpp", "people-nearby")?,
//! ])?;
//! let code = DescriptorGenerator::new()?.generate(&table)?;
//!
//! let makefile = code.get("Makefile.am").unwrap().content();
//! assert!(makefile.contains("liblocal_xmpp_la_SOURCES"));
//! assert!(code.get("services/local-xmpp-im.service").is_some());
//! # Ok::<(), uoa_core::Error>(())
//! ```

use crate::template_engine::TemplateEngine;
use crate::types::{GeneratedCode, GeneratedFile};
use serde::Serialize;
use tracing::{debug, info};
use uoa_core::{DEFAULT_GENERATED_BY, PluginRecord, PluginTable, Result};

/// Path of the top-level build manifest.
pub const BUILD_MANIFEST: &str = "Makefile.am";

/// Directory holding provider descriptors and their manifest.
pub const PROVIDERS_DIR: &str = "providers";

/// Directory holding service descriptors and their manifest.
pub const SERVICES_DIR: &str = "services";

/// Separator between build blocks in the top-level manifest.
const BLOCK_SEPARATOR: &str = "\n\n";

#[derive(Serialize)]
struct BuildManifestContext<'a> {
    generated_by: &'a str,
    library_list: String,
    build_blocks: String,
}

#[derive(Serialize)]
struct BuildBlockContext {
    target: String,
}

#[derive(Serialize)]
struct ProviderContext<'a> {
    generated_by: &'a str,
    id: &'a str,
    name: &'a str,
    icon: &'a str,
}

#[derive(Serialize)]
struct ServiceContext<'a> {
    generated_by: &'a str,
    id: String,
    name: &'a str,
    icon: &'a str,
    provider: &'a str,
    manager: &'a str,
    protocol: &'a str,
}

#[derive(Serialize)]
struct FileListContext<'a> {
    generated_by: &'a str,
    file_list: String,
}

/// Joins entries into an automake continuation list body.
///
/// Each entry is tab-indented; entries are separated by `\` and a newline.
/// The caller's template appends the final ` \`, newline and `$(NULL)`.
///
/// # Examples
///
/// ```
/// use uoa_codegen::continuation_list;
///
/// assert_eq!(continuation_list(["a.provider", "b.provider"]), "\ta.provider\\\n\tb.provider");
/// ```
pub fn continuation_list<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| format!("\t{}", entry.as_ref()))
        .collect::<Vec<_>>()
        .join("\\\n")
}

/// Generates build manifests and account descriptors from a plugin table.
#[derive(Debug)]
pub struct DescriptorGenerator {
    engine: TemplateEngine<'static>,
    generated_by: String,
}

impl DescriptorGenerator {
    /// Creates a generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self::with_engine(TemplateEngine::new()?))
    }

    /// Creates a generator around a caller-supplied template engine.
    #[must_use]
    pub fn with_engine(engine: TemplateEngine<'static>) -> Self {
        Self {
            engine,
            generated_by: DEFAULT_GENERATED_BY.to_string(),
        }
    }

    /// Sets the generator name written into every file header.
    #[must_use]
    pub fn with_generated_by(mut self, generated_by: impl Into<String>) -> Self {
        self.generated_by = generated_by.into();
        self
    }

    /// Generator name written into file headers.
    #[must_use]
    pub fn generated_by(&self) -> &str {
        &self.generated_by
    }

    /// Renders every output file for the table.
    ///
    /// For N records the result holds 2N + 3 files: the build manifest,
    /// N provider descriptors, the providers manifest, N service
    /// descriptors and the services manifest, in that order.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if any template fails to render.
    pub fn generate(&self, table: &PluginTable) -> Result<GeneratedCode> {
        info!("Generating descriptors for {} plugins", table.len());

        let mut code = GeneratedCode::new();
        code.add_file(self.build_manifest(table)?);

        for record in table {
            code.add_file(self.provider_file(record)?);
        }
        code.add_file(self.providers_manifest(table)?);

        for record in table {
            code.add_file(self.service_file(record)?);
        }
        code.add_file(self.services_manifest(table)?);

        info!("Generated {} files", code.file_count());
        Ok(code)
    }

    /// Renders the provider and service descriptor of a single record.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if rendering fails.
    pub fn generate_record(&self, record: &PluginRecord) -> Result<GeneratedCode> {
        let mut code = GeneratedCode::new();
        code.add_file(self.provider_file(record)?);
        code.add_file(self.service_file(record)?);
        Ok(code)
    }

    fn build_manifest(&self, table: &PluginTable) -> Result<GeneratedFile> {
        let library_list = continuation_list(table.iter().map(|r| r.protocol_id().library_name()));

        let build_blocks = table
            .iter()
            .map(|record| self.build_block(record))
            .collect::<Result<Vec<_>>>()?
            .join(BLOCK_SEPARATOR);

        let content = self.engine.render(
            "makefile/toplevel",
            &BuildManifestContext {
                generated_by: &self.generated_by,
                library_list,
                build_blocks,
            },
        )?;

        debug!("Rendered {BUILD_MANIFEST}");
        Ok(GeneratedFile::new(BUILD_MANIFEST, content))
    }

    fn build_block(&self, record: &PluginRecord) -> Result<String> {
        self.engine.render(
            "makefile/build-block",
            &BuildBlockContext {
                target: record.protocol_id().target_name(),
            },
        )
    }

    fn provider_file(&self, record: &PluginRecord) -> Result<GeneratedFile> {
        let id = record.protocol_id();
        let content = self.engine.render(
            "providers/provider",
            &ProviderContext {
                generated_by: &self.generated_by,
                id: id.as_str(),
                name: record.display_name(),
                icon: record.icon_name(),
            },
        )?;

        let path = format!("{PROVIDERS_DIR}/{}", id.provider_file_name());
        debug!("Rendered {path}");
        Ok(GeneratedFile::new(path, content))
    }

    fn providers_manifest(&self, table: &PluginTable) -> Result<GeneratedFile> {
        let file_list =
            continuation_list(table.iter().map(|r| r.protocol_id().provider_file_name()));
        let content = self.engine.render(
            "providers/makefile",
            &FileListContext {
                generated_by: &self.generated_by,
                file_list,
            },
        )?;

        Ok(GeneratedFile::new(
            format!("{PROVIDERS_DIR}/{BUILD_MANIFEST}"),
            content,
        ))
    }

    fn service_file(&self, record: &PluginRecord) -> Result<GeneratedFile> {
        let id = record.protocol_id();
        let content = self.engine.render(
            "services/service",
            &ServiceContext {
                generated_by: &self.generated_by,
                id: id.service_id(),
                name: record.display_name(),
                icon: record.icon_name(),
                provider: id.as_str(),
                manager: record.connection_manager(),
                protocol: id.as_str(),
            },
        )?;

        let path = format!("{SERVICES_DIR}/{}", id.service_file_name());
        debug!("Rendered {path}");
        Ok(GeneratedFile::new(path, content))
    }

    fn services_manifest(&self, table: &PluginTable) -> Result<GeneratedFile> {
        let file_list =
            continuation_list(table.iter().map(|r| r.protocol_id().service_file_name()));
        let content = self.engine.render(
            "services/makefile",
            &FileListContext {
                generated_by: &self.generated_by,
                file_list,
            },
        )?;

        Ok(GeneratedFile::new(
            format!("{SERVICES_DIR}/{BUILD_MANIFEST}"),
            content,
        ))
    }
}
