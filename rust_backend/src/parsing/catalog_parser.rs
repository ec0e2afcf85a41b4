use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::models::{Catalog, ModelResult, Period, Section, SectionNumber, TimeOfDay, Weekday};

/// Raw JSON structure for one weekly meeting
#[derive(Debug, Clone, Deserialize)]
pub struct RawPeriod {
    pub day: String,
    pub room: String,
    pub start_hour: u8,
    pub start_minute: u8,
    pub end_hour: u8,
    pub end_minute: u8,
}

/// Raw JSON structure for a section as served by the course API
#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    pub title: String,
    pub section: u32,
    pub teacher: String,
    pub periods: Vec<RawPeriod>,
}

/// The `{ "code": 200, "data": [...] }` envelope around one course's sections
#[derive(Debug, Deserialize)]
struct CourseEnvelope {
    data: Vec<RawSection>,
}

impl TryFrom<RawPeriod> for Period {
    type Error = crate::models::ModelError;

    fn try_from(raw: RawPeriod) -> ModelResult<Self> {
        Period::new(
            Weekday::from_name(&raw.day)?,
            raw.room,
            TimeOfDay::new(raw.start_hour, raw.start_minute)?,
            TimeOfDay::new(raw.end_hour, raw.end_minute)?,
        )
    }
}

impl TryFrom<RawSection> for Section {
    type Error = crate::models::ModelError;

    fn try_from(raw: RawSection) -> ModelResult<Self> {
        let periods = raw
            .periods
            .into_iter()
            .map(Period::try_from)
            .collect::<ModelResult<Vec<_>>>()?;

        Ok(Section {
            title: raw.title,
            number: SectionNumber::new(raw.section),
            teacher: raw.teacher,
            periods,
        })
    }
}

/// Parse a catalog file mapping course codes to section arrays
pub fn parse_catalog_json(json_path: &Path) -> Result<Catalog> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read catalog file: {}", json_path.display()))?;

    parse_catalog_json_str(&json_content)
}

/// Parse a catalog from a JSON string
///
/// Expected shape: `{ "<course code>": [ { title, section, teacher, periods }, ... ], ... }`
pub fn parse_catalog_json_str(json_str: &str) -> Result<Catalog> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let raw: BTreeMap<String, Vec<RawSection>> = serde_path_to_error::deserialize(deserializer)
        .with_context(|| {
            let preview = if json_str.len() > 200 {
                format!("{}...", json_str.chars().take(200).collect::<String>())
            } else {
                json_str.to_string()
            };
            format!("Invalid catalog JSON. First 200 chars: {}", preview)
        })?;

    let mut catalog = Catalog::new();
    for (code, sections) in raw {
        let sections = convert_sections(&code, sections)?;
        if catalog.get(&code).is_some() {
            anyhow::bail!(
                "Course code {} appears more than once in the catalog (codes are case-insensitive)",
                code
            );
        }
        catalog.insert(&code, sections);
    }
    Ok(catalog)
}

/// Parse one course's sections from an API response body
///
/// Accepts both `{ "code": 200, "data": [...] }` and a bare section array.
pub fn parse_course_response_str(course_code: &str, json_str: &str) -> Result<Vec<Section>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let parsed = if json_str.trim_start().starts_with('{') {
        serde_path_to_error::deserialize::<_, CourseEnvelope>(deserializer).map(|e| e.data)
    } else {
        serde_path_to_error::deserialize::<_, Vec<RawSection>>(deserializer)
    };
    let raw = parsed.with_context(|| format!("Invalid course response for {}", course_code))?;

    convert_sections(course_code, raw)
}

/// Convert raw sections to domain sections, naming the failing record on error
fn convert_sections(course_code: &str, raw: Vec<RawSection>) -> Result<Vec<Section>> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, raw_section)| {
            let number = raw_section.section;
            Section::try_from(raw_section).with_context(|| {
                format!(
                    "Invalid section {:05} of {} (index {})",
                    number, course_code, idx
                )
            })
        })
        .collect()
}
