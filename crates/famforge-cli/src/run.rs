//! Sequential generate-then-render batch loop plus run artifacts.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use famforge_generate::{generate_record, record_sections, GenerationError, HouseholdRecord};
use famforge_render::{write_bytes_atomic, DocumentRenderer, RenderError};

/// Running header printed on every page of every document.
pub const DOCUMENT_HEADER: &str = "Family Information Document";

/// Errors surfaced by the batch driver. Render and generate failures
/// carry the 1-based index of the failing document; the batch stops
/// there and earlier outputs stay on disk.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("failed to write manifest to {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
    #[error("failed to generate document {index}: {source}")]
    Generate {
        index: u32,
        #[source]
        source: GenerationError,
    },
    #[error("failed to render document {index} to {}: {source}", .path.display())]
    Render {
        index: u32,
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

/// Options for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// How many documents to generate.
    pub count: u32,
    /// Directory receiving the rendered documents and the manifest.
    pub out_dir: PathBuf,
    /// Output names are `{prefix}_{index}.pdf`, index starting at 1.
    pub prefix: String,
    /// Seed recorded in the manifest when the run is deterministic.
    pub seed: Option<u64>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: 10,
            out_dir: PathBuf::from("out"),
            prefix: "household_record".to_string(),
            seed: None,
        }
    }
}

/// Summary of a completed batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub run_id: String,
    pub outputs: Vec<PathBuf>,
}

/// Manifest written next to the rendered documents.
#[derive(Debug, Serialize)]
struct RunManifest<'a> {
    run_id: &'a str,
    started_at: String,
    count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    documents: &'a [PathBuf],
}

/// Generate and render `options.count` documents with distinct names.
///
/// Each iteration is independent: one record is sampled from `rng`, its
/// nine sections are emitted to the renderer in fixed order, and the
/// document is finalized under the templated name. A count of zero is a
/// valid no-op that never touches the renderer or the filesystem.
pub fn run_batch<R>(
    options: &BatchOptions,
    rng: &mut impl Rng,
    renderer: &mut R,
) -> Result<BatchReport, BatchError>
where
    R: DocumentRenderer,
{
    if options.prefix.trim().is_empty() {
        return Err(BatchError::InvalidConfig(
            "output prefix must not be empty".to_string(),
        ));
    }

    let run_id = uuid::Uuid::new_v4().to_string();
    let started_at = Utc::now();

    let mut outputs = Vec::with_capacity(options.count as usize);
    if options.count == 0 {
        info!(run_id = %run_id, "empty batch requested, nothing to do");
        return Ok(BatchReport { run_id, outputs });
    }

    create_dir_all(&options.out_dir)?;
    info!(
        run_id = %run_id,
        count = options.count,
        out_dir = %options.out_dir.display(),
        seed = options.seed,
        "batch started"
    );

    for index in 1..=options.count {
        let record =
            generate_record(rng).map_err(|source| BatchError::Generate { index, source })?;
        let path = options
            .out_dir
            .join(format!("{}_{}.pdf", options.prefix, index));
        let written = render_document(renderer, &record, &path)
            .map_err(|source| BatchError::Render {
                index,
                path: path.clone(),
                source,
            })?;
        info!(index, path = %written.display(), "document written");
        outputs.push(written);
    }

    let manifest = RunManifest {
        run_id: &run_id,
        started_at: started_at.to_rfc3339(),
        count: options.count,
        seed: options.seed,
        documents: &outputs,
    };
    let manifest_path = options.out_dir.join("manifest.json");
    write_bytes_atomic(&manifest_path, &serde_json::to_vec_pretty(&manifest)?).map_err(
        |source| BatchError::ManifestWrite {
            path: manifest_path.clone(),
            source,
        },
    )?;

    info!(run_id = %run_id, documents = outputs.len(), "batch finished");
    Ok(BatchReport { run_id, outputs })
}

fn render_document<R>(
    renderer: &mut R,
    record: &HouseholdRecord,
    path: &Path,
) -> Result<PathBuf, RenderError>
where
    R: DocumentRenderer,
{
    renderer.begin_document(DOCUMENT_HEADER)?;
    for section in record_sections(record) {
        renderer.section_title(&section.title)?;
        renderer.body_block(&section.body)?;
    }
    renderer.finalize(path)
}
