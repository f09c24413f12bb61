//! Template output

use super::Template;
use crate::render::{PdfRenderer, SvgRenderer, TemplateRenderer};
use crate::types::*;
use std::path::{Path, PathBuf};

/// Serialize a template in the given format
pub fn render_template(template: &Template, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Svg => SvgRenderer.render(template),
        OutputFormat::Pdf => PdfRenderer.render(template),
    }
}

/// Render and save a template.
///
/// The document is written to a temporary sibling file and renamed into
/// place, so `path` either holds the complete document or is untouched.
pub async fn save_template(
    template: &Template,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref().to_owned();
    let partial = partial_path(&path)?;

    let template = template.clone();
    let bytes =
        tokio::task::spawn_blocking(move || render_template(&template, format)).await??;

    if let Err(e) = write_then_rename(&partial, &path, &bytes).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e);
    }

    log::info!("Template saved to {}", path.display());
    Ok(())
}

async fn write_then_rename(partial: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(partial, bytes).await?;
    tokio::fs::rename(partial, path).await?;
    Ok(())
}

fn partial_path(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        CboxError::Config(format!("Output path has no file name: {}", path.display()))
    })?;
    let mut partial = std::ffi::OsString::from(".");
    partial.push(file_name);
    partial.push(".partial");
    Ok(path.with_file_name(partial))
}
