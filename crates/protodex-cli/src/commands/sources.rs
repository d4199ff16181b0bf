//! `sources` command: configured source files and cross-reference scan
//!
//! Reads the server `.cfg` to locate every source file the indexer consumes,
//! records which ones are missing, counts the generated index documents, and
//! cross-references script names against the indexed defines. Errors block
//! (exit nonzero); warnings are informational.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;

use protodex_checks::cross_reference;
use protodex_model::{DefinesIndex, ProtoIndex, load_optional};
use protodex_sources::ServerConfig;

use crate::commands::banner;
use crate::error::Result;

/// Listing files the indexer cannot run without.
const REQUIRED_KEYS: &[&str] = &["critter_lst", "items_lst"];

/// Optional sources; their absence degrades the index but blocks nothing.
const OPTIONAL_KEYS: &[&str] = &[
    "fobjc_msg",
    "fogm_msg",
    "fodlg_msg",
    "fogame_msg",
    "npc_pids_fos",
    "generate_world_cfg",
    "locations_cfg",
    "maps_fos",
    "worldmap_fos",
    "defines_fos",
];

/// Run the sources command. Returns whether no blocking error occurred.
pub fn run_sources(config_path: &Path, db_dir: &Path) -> Result<bool> {
    // Without the config there is nothing to resolve, so this load and the
    // base path lookup are the only fatal steps.
    let config = ServerConfig::load(config_path)?;
    let base = PathBuf::from(config.require("paths", "server")?);
    println!("Base path: {}", base.display());

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    check_configured_files(&config, &base, &mut errors, &mut warnings);
    check_indexed_documents(db_dir, &mut warnings)?;
    check_cross_references(db_dir, &mut warnings)?;

    print_report(&base, &errors, &warnings);
    Ok(errors.is_empty())
}

/// Verify every configured source file exists under the base path.
fn check_configured_files(
    config: &ServerConfig,
    base: &Path,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    println!("Checking configured source files...");

    for &key in REQUIRED_KEYS {
        match config.get("parsing", key) {
            Some(rel) if base.join(rel).exists() => {}
            Some(rel) => errors.push(format!("missing required source: {rel}")),
            None => errors.push(format!("config key missing: [parsing] {key}")),
        }
    }

    for &key in OPTIONAL_KEYS {
        match config.get("parsing", key) {
            Some(rel) if base.join(rel).exists() => {}
            Some(rel) => warnings.push(format!("source file not found: {rel}")),
            None => {
                tracing::debug!(key, "optional source not configured");
            }
        }
    }
}

/// Count the generated index documents, warning about absent ones.
fn check_indexed_documents(db_dir: &Path, warnings: &mut Vec<String>) -> Result<()> {
    for (name, label) in [
        ("critters.json", "critters"),
        ("items.json", "items"),
        ("npc_pids.json", "NPC PIDs"),
        ("maps.json", "maps"),
    ] {
        println!("Validating {label}...");
        match load_optional::<ProtoIndex>(db_dir, name)? {
            Some(index) => println!("  Found {} indexed {label}", index.entries.len()),
            None => warnings.push(format!("No indexed {name} found")),
        }
    }

    println!("Validating defines...");
    match load_optional::<DefinesIndex>(db_dir, "defines.json")? {
        Some(index) => println!("  Found {} indexed defines", index.defines.len()),
        None => warnings.push("No indexed defines.json found".to_string()),
    }

    Ok(())
}

/// Cross-reference script names on indexed entries against indexed defines.
fn check_cross_references(db_dir: &Path, warnings: &mut Vec<String>) -> Result<()> {
    println!("Checking cross-references...");

    let critters = load_optional::<ProtoIndex>(db_dir, "critters.json")?.unwrap_or_default();
    let items = load_optional::<ProtoIndex>(db_dir, "items.json")?.unwrap_or_default();
    let defines = load_optional::<DefinesIndex>(db_dir, "defines.json")?.unwrap_or_default();

    let define_names: BTreeSet<String> = defines.defines.keys().cloned().collect();
    let outcome = cross_reference(critters.entries.iter().chain(&items.entries), &define_names);

    if !outcome.unscripted.is_empty() {
        warnings.push(format!(
            "{} of {} entities have no script references",
            outcome.unscripted.len(),
            outcome.entry_count
        ));
    }
    if !outcome.undefined.is_empty() {
        let sample: Vec<&str> = outcome
            .undefined
            .iter()
            .take(10)
            .map(String::as_str)
            .collect();
        warnings.push(format!(
            "{} script references not found in defines: {}",
            outcome.undefined.len(),
            sample.join(", ")
        ));
    }

    println!("  Cross-reference validation complete");
    Ok(())
}

fn print_report(base: &Path, errors: &[String], warnings: &[String]) {
    banner("VALIDATION REPORT");
    println!("Base Path: {}", base.display());
    println!("Timestamp: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("Errors: {}", errors.len());
    println!("Warnings: {}", warnings.len());

    if !errors.is_empty() {
        println!("\n{}", "ERRORS:".red().bold());
        for error in errors {
            println!("  {error}");
        }
    }
    if !warnings.is_empty() {
        println!("\n{}", "WARNINGS:".yellow().bold());
        for warning in warnings {
            println!("  {warning}");
        }
    }
    if errors.is_empty() && warnings.is_empty() {
        println!("\n{}", "All validations passed!".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, server: &Path) -> PathBuf {
        let config_path = temp.path().join("server.cfg");
        let content = format!(
            "[paths]\nserver = {}\n\n[parsing]\ncritter_lst = proto/critter.lst\nitems_lst = proto/items.lst\ndefines_fos = scripts/_defines.fos\n",
            server.display()
        );
        fs::write(&config_path, content).unwrap();
        config_path
    }

    fn write_sources(server: &Path) {
        fs::create_dir_all(server.join("proto")).unwrap();
        fs::write(server.join("proto").join("critter.lst"), "pid_7.fopro\n").unwrap();
        fs::write(server.join("proto").join("items.lst"), "pid_40.fopro\n").unwrap();
        fs::create_dir_all(server.join("scripts")).unwrap();
        fs::write(server.join("scripts").join("_defines.fos"), "#define PID_RAT (7)\n").unwrap();
    }

    fn write_db(db: &Path) {
        fs::create_dir_all(db).unwrap();
        fs::write(
            db.join("critters.json"),
            r#"{"entries": [{"pid": 7, "script_name": "SCRIPT_RAT"}]}"#,
        )
        .unwrap();
        fs::write(db.join("items.json"), r#"{"entries": []}"#).unwrap();
        fs::write(db.join("npc_pids.json"), r#"{"entries": []}"#).unwrap();
        fs::write(db.join("maps.json"), r#"{"entries": []}"#).unwrap();
        fs::write(
            db.join("defines.json"),
            r#"{"defines": {"SCRIPT_RAT": "1"}}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_sources_clean_run_passes() {
        let temp = TempDir::new().unwrap();
        let server = temp.path().join("server");
        write_sources(&server);
        let config = write_config(&temp, &server);
        let db = temp.path().join("db");
        write_db(&db);

        let clean = run_sources(&config, &db).unwrap();
        assert!(clean);
    }

    #[test]
    fn test_sources_missing_listing_is_blocking() {
        let temp = TempDir::new().unwrap();
        let server = temp.path().join("server");
        write_sources(&server);
        fs::remove_file(server.join("proto").join("critter.lst")).unwrap();
        let config = write_config(&temp, &server);
        let db = temp.path().join("db");
        write_db(&db);

        let clean = run_sources(&config, &db).unwrap();
        assert!(!clean);
    }

    #[test]
    fn test_sources_missing_index_docs_warn_only() {
        let temp = TempDir::new().unwrap();
        let server = temp.path().join("server");
        write_sources(&server);
        let config = write_config(&temp, &server);
        let db = temp.path().join("db");
        fs::create_dir_all(&db).unwrap();

        // No generated documents at all: warnings, but nothing blocks.
        let clean = run_sources(&config, &db).unwrap();
        assert!(clean);
    }

    #[test]
    fn test_sources_missing_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = run_sources(&temp.path().join("absent.cfg"), temp.path());
        assert!(result.is_err());
    }
}
