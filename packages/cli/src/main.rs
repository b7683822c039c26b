#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the nightmap area search core.
//!
//! Provides subcommands for listing areas with attribute and proximity
//! filters applied, inspecting area groups and quick-center presets, and
//! driving a scripted picker session to see how a sequence of selection
//! operations plays out.

use clap::{Parser, Subcommand};
use nightmap_area_models::{
    AttributeFilter, Coordinates, DensityTier, GroupStatus, LocationRecord, ProximityQuery,
    RankedArea, SelectMode,
};
use nightmap_catalog::{Catalog, presets::quick_center_presets};
use nightmap_picker::AreaPicker;
use nightmap_search::{filter_by_attributes, filter_by_proximity};
use serde::Serialize;

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// Search and inspect the nightmap area catalog.
#[derive(Parser)]
#[command(name = "nightmap")]
#[command(about = "Search and inspect the nightmap area catalog")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List areas, optionally narrowed by attributes and proximity.
    Areas {
        /// Keep only areas flagged popular.
        #[arg(long)]
        popular: bool,

        /// Keep only areas in these density tiers (repeatable: HIGH,
        /// MEDIUM, LOW).
        #[arg(long)]
        density: Vec<DensityTier>,

        /// Center the search on a preset name or a "lon,lat" pair.
        #[arg(long)]
        near: Option<String>,

        /// Inclusive search radius in kilometers (with --near).
        #[arg(long, default_value_t = 3.0)]
        radius_km: f64,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List area groups, optionally restricted to one region.
    Groups {
        /// Region key to restrict to (e.g. "서울").
        #[arg(long)]
        region: Option<String>,
    },

    /// List quick-center presets.
    Presets,

    /// Run a scripted picker session and print the outcome.
    ///
    /// Operations are applied in a fixed order: preset, group toggles,
    /// recommended areas, token toggles.
    Pick {
        /// Use single-select mode instead of multiple.
        #[arg(long)]
        single: bool,

        /// Quick-center preset to apply first.
        #[arg(long)]
        preset: Option<String>,

        /// Group ids to toggle (repeatable).
        #[arg(long)]
        toggle_group: Vec<u32>,

        /// Recommended area names to apply (repeatable).
        #[arg(long)]
        recommended: Vec<String>,

        /// Area tokens to toggle (repeatable).
        #[arg(long)]
        toggle: Vec<String>,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Areas {
            popular,
            density,
            near,
            radius_km,
            json,
        } => cmd_areas(&catalog, popular, density, near, radius_km, json),
        Commands::Groups { region } => {
            cmd_groups(&catalog, region.as_deref());
            Ok(())
        }
        Commands::Presets => {
            cmd_presets();
            Ok(())
        }
        Commands::Pick {
            single,
            preset,
            toggle_group,
            recommended,
            toggle,
            json,
        } => cmd_pick(catalog, single, preset, toggle_group, recommended, toggle, json),
    }
}

// ---------------------------------------------------------------------------
// Areas command
// ---------------------------------------------------------------------------

/// Lists areas after applying the attribute and proximity filters.
fn cmd_areas(
    catalog: &Catalog,
    popular: bool,
    density: Vec<DensityTier>,
    near: Option<String>,
    radius_km: f64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let attributes = AttributeFilter {
        popular_only: popular,
        density_tiers: density.into_iter().collect(),
    };
    let query = match near {
        Some(ref raw) => ProximityQuery::within(parse_center(catalog, raw)?, radius_km),
        None => ProximityQuery::off(),
    };

    let narrowed = filter_by_attributes(catalog.records(), &attributes);
    let ranked = filter_by_proximity(narrowed, &query);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No areas match the given filters.");
        return Ok(());
    }

    println!("=== Areas ({}) ===", ranked.len());
    for area in &ranked {
        print_area_line(area);
    }
    Ok(())
}

/// Prints one area as a single aligned line.
fn print_area_line(area: &RankedArea<'_>) {
    let record = area.record;
    let tier = record
        .density_tier
        .map_or_else(|| "-".to_owned(), |t| t.to_string());
    let popular = if record.is_popular { "*" } else { " " };
    let distance = area
        .distance_km
        .map_or_else(String::new, |d| format!("  {d:.2} km"));

    println!(
        "{popular} {:<12} {} {} [{tier}]{distance}",
        record.name, record.city, record.district
    );
}

/// Resolves `--near` as a preset name first, then as a "lon,lat" pair.
fn parse_center(catalog: &Catalog, raw: &str) -> Result<Coordinates, Box<dyn std::error::Error>> {
    if let Some(preset) = quick_center_presets().into_iter().find(|p| p.name == raw) {
        return Ok(preset.coordinates);
    }
    if let Some(record) = catalog.record_by_name(raw) {
        return Ok(record.coordinates);
    }

    let Some((lon, lat)) = raw.split_once(',') else {
        return Err(format!(
            "--near {raw:?} is neither a known preset, an area name, nor a lon,lat pair"
        )
        .into());
    };
    let center = Coordinates::new(lon.trim().parse()?, lat.trim().parse()?);
    if !center.in_range() {
        return Err(format!("--near {raw:?} is outside WGS84 degree ranges").into());
    }
    Ok(center)
}

// ---------------------------------------------------------------------------
// Groups / presets commands
// ---------------------------------------------------------------------------

/// Lists area groups, grouped by region.
fn cmd_groups(catalog: &Catalog, region: Option<&str>) {
    let mut current_region = "";
    for group in catalog.groups() {
        if region.is_some_and(|r| r != group.region) {
            continue;
        }
        if group.region != current_region {
            println!("=== {} ===", group.region);
            current_region = &group.region;
        }
        let zone = if group.nightlife_zone == Some(true) {
            " (nightlife zone)"
        } else {
            ""
        };
        println!("  [{}] {}{zone}: {}", group.group_id, group.name, group.keywords.join(", "));
    }
}

/// Lists the quick-center presets.
fn cmd_presets() {
    println!("=== Quick-center presets ===");
    for preset in quick_center_presets() {
        println!(
            "  {:<12} ({:.4}, {:.4})",
            preset.name, preset.coordinates.lon, preset.coordinates.lat
        );
    }
}

// ---------------------------------------------------------------------------
// Pick command
// ---------------------------------------------------------------------------

/// JSON shape for the `pick` outcome.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PickOutcome<'a> {
    selected_ids: Vec<String>,
    selected: Vec<&'a LocationRecord>,
    statuses: Vec<GroupStatusLine>,
}

/// One group's derived status for output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupStatusLine {
    group_id: u32,
    name: String,
    status: GroupStatus,
}

/// Applies the scripted operations to a fresh picker and prints the result.
fn cmd_pick(
    catalog: Catalog,
    single: bool,
    preset: Option<String>,
    toggle_group: Vec<u32>,
    recommended: Vec<String>,
    toggle: Vec<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if single {
        SelectMode::Single
    } else {
        SelectMode::Multiple
    };
    let mut picker = AreaPicker::new(catalog, mode);
    picker.set_on_change(|ids, _records| {
        log::info!("selection changed: {} areas", ids.len());
    });

    if let Some(name) = preset {
        picker.apply_preset(&name);
    }
    for group_id in toggle_group {
        picker.toggle_group(group_id);
    }
    for name in &recommended {
        picker.apply_recommended(name);
    }
    for token in &toggle {
        picker.toggle_area(token);
    }

    let (selected_ids, selected) = picker.selected();
    let statuses: Vec<GroupStatusLine> = picker
        .catalog()
        .groups()
        .iter()
        .zip(picker.group_statuses())
        .map(|(group, (group_id, status))| GroupStatusLine {
            group_id,
            name: group.name.clone(),
            status,
        })
        .collect();

    if json {
        let outcome = PickOutcome {
            selected_ids,
            selected,
            statuses,
        };
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("=== Selection ({}) ===", selected_ids.len());
    for record in &selected {
        println!("  {} ({})", record.name, record.id);
    }
    println!();
    println!("=== Group statuses ===");
    for line in &statuses {
        if line.status != GroupStatus::None {
            println!("  [{}] {}: {}", line.group_id, line.name, line.status);
        }
    }
    Ok(())
}
