//! The expander: renders every registry entry at every arity.
//!
//! One outer loop over the registry, one inner loop over arities. A
//! fresh `Tera` instance is built per entry and discarded after it;
//! the only shared input across iterations is the read-only template
//! root. Each file write truncates whatever was there before, so
//! re-running against unchanged templates is byte-for-byte idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::registry::{ARITIES, REGISTRY, RegistryEntry, TEMPLATE_PATH, output_file_name};

/// Render all registry entries at all arities under `root`.
///
/// `root` is the project directory the template root and destination
/// directories resolve against. Returns every path written, in write
/// order. The first failure aborts the run; files written before it
/// stay in place.
pub fn expand_all(root: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for entry in &REGISTRY {
        written.extend(expand_entry(root, entry)?);
    }

    info!(files = written.len(), "generation complete");
    Ok(written)
}

/// Render one registry entry at every arity.
pub fn expand_entry(root: &Path, entry: &RegistryEntry) -> Result<Vec<PathBuf>> {
    let template_path = root
        .join(TEMPLATE_PATH)
        .join(format!("{}.template", entry.template));

    let source = fs::read_to_string(&template_path)
        .map_err(|e| Error::load_io(&template_path, e))?;

    // Fresh engine per entry; a parse failure here is a load error,
    // the template never became usable.
    let mut tera = Tera::default();
    tera.add_raw_template(entry.template, &source)
        .map_err(|e| Error::load_parse(&template_path, e))?;

    let mut written = Vec::with_capacity(ARITIES.clone().count());

    for arity in ARITIES {
        let rendered = render(&tera, entry.template, arity)?;

        let path = root
            .join(entry.output_dir)
            .join(output_file_name(entry.template, arity));

        // Truncating write; destination directories are never created
        // here, a missing one surfaces as a write error per file.
        fs::write(&path, rendered).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), arity, "wrote generated source");
        written.push(path);
    }

    info!(
        template = entry.template,
        output_dir = entry.output_dir,
        files = written.len(),
        "expanded template"
    );
    Ok(written)
}

/// Render a registered template with the arity bound as `types`.
pub fn render(tera: &Tera, template: &str, arity: u8) -> Result<String> {
    let mut context = Context::new();
    context.insert("types", &arity);

    tera.render(template, &context)
        .map_err(|source| Error::TemplateSyntax {
            template: template.to_string(),
            source,
        })
}
