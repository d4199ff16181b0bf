//! Cross-reference scan between proto entries and script defines
//!
//! An earlier revision of the pipeline estimated these figures by
//! subtracting set sizes, which let false-missing and false-extra entries
//! cancel out numerically. The scan now materializes the actual sets and
//! derives counts from them.

use std::collections::BTreeSet;

use protodex_model::ProtoEntry;

/// Outcome of the cross-reference scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrossRefOutcome {
    /// How many entries were scanned.
    pub entry_count: usize,
    /// PIDs of entries carrying no script reference.
    pub unscripted: BTreeSet<i64>,
    /// Script names referenced by entries but declared by no define.
    pub undefined: BTreeSet<String>,
}

impl CrossRefOutcome {
    pub fn is_clean(&self) -> bool {
        self.unscripted.is_empty() && self.undefined.is_empty()
    }
}

/// Scan entries for script references and match them against define names.
pub fn cross_reference<'a>(
    entries: impl IntoIterator<Item = &'a ProtoEntry>,
    defines: &BTreeSet<String>,
) -> CrossRefOutcome {
    let mut outcome = CrossRefOutcome::default();

    for entry in entries {
        outcome.entry_count += 1;
        match entry.script() {
            None => {
                outcome.unscripted.insert(entry.proto_id.unwrap_or(entry.pid));
            }
            Some(script) => {
                if !defines.contains(script) {
                    outcome.undefined.insert(script.to_string());
                }
            }
        }
    }

    outcome
}
