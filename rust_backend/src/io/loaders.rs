use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::models::Catalog;
use crate::parsing::catalog_parser;

/// Where catalog data was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSourceType {
    /// One JSON object mapping course codes to section arrays
    CatalogFile,
    /// A directory of saved per-course API responses named `<CODE>.json`
    ResponseDirectory,
}

/// Result of loading catalog data
#[derive(Debug)]
pub struct CatalogLoadResult {
    pub catalog: Catalog,
    pub source_type: CatalogSourceType,
    pub num_sections: usize,
}

impl CatalogLoadResult {
    pub fn new(catalog: Catalog, source_type: CatalogSourceType) -> Self {
        let num_sections = catalog.section_count();
        Self {
            catalog,
            source_type,
            num_sections,
        }
    }
}

/// Unified interface for loading course catalogs
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a `.json` file or a directory of course responses
    pub fn load(path: &Path) -> Result<CatalogLoadResult> {
        if path.is_dir() {
            return Self::load_from_response_dir(path);
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Self::load_from_file(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load a catalog JSON file
    pub fn load_from_file(json_path: &Path) -> Result<CatalogLoadResult> {
        let catalog = catalog_parser::parse_catalog_json(json_path)
            .context("Failed to parse catalog file")?;

        info!(
            "Loaded {} courses ({} sections) from {}",
            catalog.len(),
            catalog.section_count(),
            json_path.display()
        );
        Ok(CatalogLoadResult::new(catalog, CatalogSourceType::CatalogFile))
    }

    /// Load a catalog from a JSON string
    pub fn load_from_str(json_str: &str) -> Result<CatalogLoadResult> {
        let catalog = catalog_parser::parse_catalog_json_str(json_str)
            .context("Failed to parse catalog string")?;

        Ok(CatalogLoadResult::new(catalog, CatalogSourceType::CatalogFile))
    }

    /// Load every `<CODE>.json` course response in a directory
    ///
    /// Files are read in name order; non-JSON entries are skipped.
    pub fn load_from_response_dir(dir: &Path) -> Result<CatalogLoadResult> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            })
            .collect();
        paths.sort();

        let mut catalog = Catalog::new();
        for path in paths {
            let code = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .with_context(|| format!("Invalid file name: {}", path.display()))?
                .to_string();
            let body = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read course response: {}", path.display()))?;
            let sections = catalog_parser::parse_course_response_str(&code, &body)?;
            if catalog.get(&code).is_some() {
                anyhow::bail!(
                    "Course code {} has more than one response file in {} (codes are case-insensitive)",
                    code,
                    dir.display()
                );
            }
            catalog.insert(&code, sections);
        }

        info!(
            "Loaded {} course responses ({} sections) from {}",
            catalog.len(),
            catalog.section_count(),
            dir.display()
        );
        Ok(CatalogLoadResult::new(
            catalog,
            CatalogSourceType::ResponseDirectory,
        ))
    }
}
