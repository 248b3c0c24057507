// Export module for heatmap
// Writes the chart as an HTML page or a standalone SVG document

pub mod html;
pub mod svg;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::chart::model::ChartModel;
use crate::config::ChartConfig;
use crate::domain::Dataset;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the full page (chart, legend, tooltip script) to `path`.
pub async fn write_page(
    path: &Path,
    dataset: &Dataset,
    config: &ChartConfig,
) -> Result<(), ExportError> {
    let page = html::render_page(dataset, config);
    write(path, page).await?;
    info!(path = %path.display(), "page written");
    Ok(())
}

/// Write only the chart canvas as an SVG document.
pub async fn write_svg(
    path: &Path,
    dataset: &Dataset,
    config: &ChartConfig,
) -> Result<(), ExportError> {
    let model = ChartModel::new(dataset, config);
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
        svg::chart_svg(dataset, &model, config)
    );
    write(path, document).await?;
    info!(path = %path.display(), "svg written");
    Ok(())
}

async fn write(path: &Path, contents: String) -> Result<(), ExportError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })
}
