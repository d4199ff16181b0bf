//! `verify` command: per-category verification against the game sources
//!
//! Each category check is self-contained: a missing index document or
//! ground-truth source records an error for that category and the run
//! moves on to the next one. Only warnings leave the exit status at zero.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::Path;

use colored::Colorize;

use protodex_checks::diff_sets;
use protodex_model::{
    DefinesIndex, ObjectsIndex, ProtoIndex, TilesIndex, load_optional, str_attr,
};
use protodex_sources::{read_define_names, read_listing, read_msg_pids, scan_extensions};

use crate::commands::{banner, error, ok, warn};
use crate::error::{CliError, Result};

const TILE_EXTENSIONS: &[&str] = &["frm", "png", "bmp", "fofrm"];

/// Preview lengths, long for file listings and short for PID listings.
const PREVIEW_LONG: usize = 20;
const PREVIEW_SHORT: usize = 10;

#[derive(Debug, Default)]
struct Tally {
    errors: usize,
    warnings: usize,
}

impl Tally {
    fn error(&mut self, message: &str) {
        self.errors += 1;
        error(message);
    }

    fn warn(&mut self, message: &str) {
        self.warnings += 1;
        warn(message);
    }
}

/// Run the verify command. Returns whether no blocking error occurred.
pub fn run_verify(server: &Path, client: &Path, db_dir: &Path) -> Result<bool> {
    if !db_dir.is_dir() {
        return Err(CliError::user(format!(
            "{} not found, run the indexer first",
            db_dir.display()
        )));
    }

    println!("Server: {}", server.display());
    println!("Client: {}", client.display());
    println!("DB Dir: {}", db_dir.display());

    let mut tally = Tally::default();
    check_tiles(client, db_dir, &mut tally)?;
    check_protos(ProtoCategory::Critters, server, db_dir, &mut tally)?;
    check_protos(ProtoCategory::Items, server, db_dir, &mut tally)?;
    check_objects(server, db_dir, &mut tally)?;
    check_defines(server, db_dir, &mut tally)?;

    banner("VERIFICATION COMPLETE");
    println!("  Errors: {}, Warnings: {}", tally.errors, tally.warnings);
    Ok(tally.errors == 0)
}

/// List a truncated preview of a set; the count stays exact elsewhere.
fn preview<T: Display>(items: &BTreeSet<T>, limit: usize) {
    for item in items.iter().take(limit) {
        println!("    - {item}");
    }
    if items.len() > limit {
        println!("    ... and {} more", items.len() - limit);
    }
}

fn check_tiles(client: &Path, db_dir: &Path, tally: &mut Tally) -> Result<()> {
    banner("TILES CHECK");

    let Some(index) = load_optional::<TilesIndex>(db_dir, "tiles.json")? else {
        tally.error("tiles.json not found, run the indexer first");
        return Ok(());
    };

    let tiles_dir = client.join("data").join("art").join("tiles");
    let names = match scan_extensions(&tiles_dir, TILE_EXTENSIONS) {
        Ok(names) => names,
        Err(e) => {
            tally.error(&format!("tiles directory unreadable: {e}"));
            return Ok(());
        }
    };

    // The index stores tile paths in the client's backslash form.
    let actual: BTreeSet<String> = names
        .into_iter()
        .map(|name| format!("art\\tiles\\{name}"))
        .collect();
    let indexed: BTreeSet<String> = index.all.into_iter().collect();

    println!("  Actual files:  {}", actual.len());
    println!("  Indexed files: {}", indexed.len());

    let diff = diff_sets(&indexed, &actual);
    if diff.missing_from_index.is_empty() {
        ok("All disk files are indexed.");
    } else {
        tally.warn(&format!(
            "{} files on disk but NOT in index:",
            diff.missing_from_index.len()
        ));
        preview(&diff.missing_from_index, PREVIEW_LONG);
    }
    if diff.extra_in_index.is_empty() {
        ok("No stale index entries.");
    } else {
        tally.warn(&format!(
            "{} entries in index but NOT on disk:",
            diff.extra_in_index.len()
        ));
        preview(&diff.extra_in_index, PREVIEW_LONG);
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum ProtoCategory {
    Critters,
    Items,
}

impl ProtoCategory {
    fn title(self) -> &'static str {
        match self {
            ProtoCategory::Critters => "CRITTERS CHECK",
            ProtoCategory::Items => "ITEMS CHECK",
        }
    }

    fn index_name(self) -> &'static str {
        match self {
            ProtoCategory::Critters => "critters.json",
            ProtoCategory::Items => "items.json",
        }
    }

    fn listing_name(self) -> &'static str {
        match self {
            ProtoCategory::Critters => "critter.lst",
            ProtoCategory::Items => "items.lst",
        }
    }

    fn proto_dir(self) -> &'static str {
        match self {
            ProtoCategory::Critters => "critters",
            ProtoCategory::Items => "items",
        }
    }
}

fn check_protos(
    category: ProtoCategory,
    server: &Path,
    db_dir: &Path,
    tally: &mut Tally,
) -> Result<()> {
    banner(category.title());

    let Some(index) = load_optional::<ProtoIndex>(db_dir, category.index_name())? else {
        tally.error(&format!(
            "{} not found, run the indexer first",
            category.index_name()
        ));
        return Ok(());
    };

    let lst_path = server.join("proto").join(category.listing_name());
    let listing = match read_listing(&lst_path) {
        Ok(listing) => listing,
        Err(e) => {
            tally.error(&format!("{} unreadable: {e}", category.listing_name()));
            return Ok(());
        }
    };

    println!("  {} entries: {}", category.listing_name(), listing.len());
    println!("  Indexed entries: {}", index.entries.len());

    // Proto files on disk that never made it into the index.
    let proto_dir = server.join("proto").join(category.proto_dir());
    match scan_extensions(&proto_dir, &["fopro"]) {
        Ok(actual_protos) => {
            let indexed_files: BTreeSet<String> = index
                .entries
                .iter()
                .filter_map(|e| e.file.clone())
                .collect();
            let diff = diff_sets(&indexed_files, &actual_protos);
            if diff.missing_from_index.is_empty() {
                ok("All .fopro files indexed.");
            } else {
                tally.warn(&format!(
                    "{} .fopro files not in index:",
                    diff.missing_from_index.len()
                ));
                preview(&diff.missing_from_index, PREVIEW_SHORT);
            }
        }
        Err(e) => {
            tally.warn(&format!("proto directory unreadable: {e}"));
        }
    }

    let no_props = index.entries.iter().filter(|e| !e.has_props()).count();
    if no_props > 0 {
        tally.warn(&format!(
            "{no_props} entries have no parsed properties (file missing?)"
        ));
    } else {
        ok("All entries have properties.");
    }

    Ok(())
}

fn check_objects(server: &Path, db_dir: &Path, tally: &mut Tally) -> Result<()> {
    banner("OBJECTS CHECK");

    let Some(index) = load_optional::<ObjectsIndex>(db_dir, "objects.json")? else {
        tally.error("objects.json not found, run the indexer first");
        return Ok(());
    };

    let msg_path = server.join("text").join("engl").join("FOOBJ.MSG");
    let actual_pids = match read_msg_pids(&msg_path) {
        Ok(pids) => pids,
        Err(e) => {
            tally.error(&format!("FOOBJ.MSG unreadable: {e}"));
            return Ok(());
        }
    };

    let indexed_pids: BTreeSet<i64> = index
        .entries
        .keys()
        .filter_map(|k| k.parse().ok())
        .collect();

    println!("  FOOBJ.MSG PIDs: {}", actual_pids.len());
    println!("  Indexed PIDs:   {}", indexed_pids.len());

    let diff = diff_sets(&indexed_pids, &actual_pids);
    if diff.missing_from_index.is_empty() {
        ok("All MSG PIDs indexed.");
    } else {
        tally.warn(&format!(
            "{} PIDs in MSG but not in index:",
            diff.missing_from_index.len()
        ));
        preview(&diff.missing_from_index, PREVIEW_SHORT);
    }

    let no_name = index
        .entries
        .values()
        .filter(|o| str_attr(o, "name").is_none())
        .count();
    if no_name > 0 {
        println!(
            "  {} {} PIDs have no name string",
            "[INFO]".dimmed(),
            no_name
        );
    }

    Ok(())
}

fn check_defines(server: &Path, db_dir: &Path, tally: &mut Tally) -> Result<()> {
    banner("DEFINES CHECK");

    let Some(index) = load_optional::<DefinesIndex>(db_dir, "defines.json")? else {
        tally.error("defines.json not found, run the indexer first");
        return Ok(());
    };

    let defines_path = server.join("scripts").join("_defines.fos");
    let actual = match read_define_names(&defines_path) {
        Ok(names) => names,
        Err(e) => {
            tally.error(&format!("_defines.fos unreadable: {e}"));
            return Ok(());
        }
    };

    let indexed: BTreeSet<String> = index.defines.keys().cloned().collect();

    println!("  _defines.fos defines: {}", actual.len());
    println!("  Indexed defines:      {}", indexed.len());

    // Only PID_ defines are expected to round-trip through the index.
    let pid_actual: BTreeSet<String> = actual
        .into_iter()
        .filter(|d| d.starts_with("PID_"))
        .collect();
    let pid_indexed: BTreeSet<String> = indexed
        .into_iter()
        .filter(|d| d.starts_with("PID_"))
        .collect();

    let diff = diff_sets(&pid_indexed, &pid_actual);
    if diff.missing_from_index.is_empty() {
        ok("All PID_ defines indexed.");
    } else {
        tally.warn(&format!(
            "{} PID_ defines not indexed:",
            diff.missing_from_index.len()
        ));
        preview(&diff.missing_from_index, PREVIEW_SHORT);
    }

    Ok(())
}
