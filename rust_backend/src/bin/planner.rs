//! Course planner command-line driver.
//!
//! Loads a catalog, builds the selection from a config file and/or command
//! line, and prints one combination as a weekly grid.
//!
//! # Usage
//!
//! ```bash
//! # Everything from planner.toml
//! course-planner --config planner.toml
//!
//! # Ad hoc selection, showing the second combination
//! course-planner --catalog catalog.json --course 603-101-MQ:1 --course 201-NYA-05 --index 2
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use course_planner::algorithms::{find_conflicts, Combination};
use course_planner::config::{build_selection, CourseSettings, PlannerConfig};
use course_planner::io::{render_text, CatalogLoader};
use course_planner::models::{Section, SectionFilter, Selection, TimeOfDay};
use course_planner::services::ScheduleBrowser;

#[derive(Debug, Parser)]
#[command(name = "course-planner", version, about = "Browse conflict-free course schedules")]
struct Cli {
    /// Planner config file (defaults to planner.toml in the usual places)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON file or directory of course responses; overrides the config
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Course as CODE (try all sections) or CODE:SECTION; replaces the config's courses
    #[arg(long = "course", value_parser = parse_course)]
    courses: Vec<CourseSettings>,

    /// 1-based combination to show
    #[arg(long, default_value_t = 1)]
    index: usize,

    /// Print every combination before the grid
    #[arg(long)]
    list: bool,

    /// Emit the grid as JSON instead of a text table
    #[arg(long)]
    json: bool,

    /// Characters of each title shown in the grid
    #[arg(long)]
    title_width: Option<usize>,
}

fn parse_course(arg: &str) -> Result<CourseSettings, String> {
    match arg.split_once(':') {
        Some((code, "*")) => Ok(CourseSettings {
            code: code.to_string(),
            section: None,
        }),
        Some((code, section)) => section
            .trim()
            .parse::<u32>()
            .map(|number| CourseSettings {
                code: code.to_string(),
                section: Some(number),
            })
            .map_err(|e| format!("invalid section '{}': {}", section, e)),
        None => Ok(CourseSettings {
            code: arg.to_string(),
            section: None,
        }),
    }
}

fn load_config(cli: &Cli) -> Result<PlannerConfig> {
    let mut config = match (&cli.config, &cli.catalog) {
        (Some(path), _) => PlannerConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        (None, Some(_)) => PlannerConfig::default(),
        (None, None) => PlannerConfig::from_default_location()
            .context("Pass --config or --catalog, or create planner.toml")?,
    };

    if let Some(catalog) = &cli.catalog {
        config.catalog.path = catalog.clone();
        config.base_dir = None;
    }
    if !cli.courses.is_empty() {
        config.courses = cli.courses.clone();
    }
    if let Some(width) = cli.title_width {
        config.display.title_width = width;
    }
    Ok(config)
}

fn describe(selection: &Selection, combination: &Combination<'_>) -> String {
    selection
        .courses()
        .iter()
        .zip(combination.sections())
        .map(|(course, section)| format!("{} {}", course.code(), section.number))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_minutes(minutes: u16) -> String {
    TimeOfDay::from_minutes(minutes)
        .map(|t| t.to_string())
        .unwrap_or_else(|_| minutes.to_string())
}

/// Explain an empty result when every course is pinned to one section.
fn report_conflicts(selection: &Selection) {
    let pinned: Option<Vec<&Section>> = selection
        .courses()
        .iter()
        .map(|course| match course.filter {
            SectionFilter::Section(number) => course.find_section(number),
            SectionFilter::TryAll => None,
        })
        .collect();

    let Some(sections) = pinned else {
        return;
    };
    for conflict in find_conflicts(&sections) {
        warn!(
            "Sections {} and {} overlap on {}: {}-{} vs {}-{}",
            conflict.first,
            conflict.second,
            conflict.day,
            format_minutes(conflict.first_period.start),
            format_minutes(conflict.first_period.end),
            format_minutes(conflict.second_period.start),
            format_minutes(conflict.second_period.end),
        );
    }
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let catalog_path = config.catalog_path();
    let loaded = CatalogLoader::load(&catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;
    let selection = build_selection(&config.courses, &loaded.catalog)?;
    info!("Planning {} courses", selection.len());

    let mut browser = ScheduleBrowser::from_selection(selection);
    let Some(position) = browser.go_to(cli.index) else {
        println!("0 possible schedules");
        report_conflicts(browser.selection());
        return Ok(());
    };
    if position.current != cli.index {
        warn!("Requested combination {} clamped to {}", cli.index, position);
    }

    if cli.list {
        for course in browser.selection().courses() {
            println!(
                "{} [{}] {}",
                course.code(),
                course.filter,
                course.title().unwrap_or("No title")
            );
        }
        println!();
        for (i, combination) in browser.combinations().iter().enumerate() {
            println!("{:>4}: {}", i + 1, describe(browser.selection(), combination));
        }
        println!();
    }

    let grid = browser
        .current_grid()?
        .context("No combination to display")?;

    if cli.json {
        let body = serde_json::json!({ "position": position, "grid": grid });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", position);
        print!("{}", render_text(&grid, &config.text_options()));
    }

    Ok(())
}
