//! Internal-consistency validation of the combined index document
//!
//! The checks are independent of each other and run in a fixed order:
//! creatures, items, objects, maps, defines, the duplicate-PID scan across
//! record types, and finally the orphaned-reference scan. Each check only
//! reads the document; violations become issues, never mutations.

use serde_json::Value;

use protodex_model::{IndexDocument, Section, define_pid, flag_attr, str_attr};

use crate::issue::{Issue, IssueKind, IssueLog};

/// Records lacking a truthy value at `attribute`, in section order.
///
/// Truthiness follows [`flag_attr`]: a record whose attribute is a non-empty
/// value of any JSON type counts as present, not just string attributes.
pub fn missing_attribute<'a>(
    section: &'a Section,
    attribute: &str,
) -> Vec<(&'a str, &'a Value)> {
    section
        .iter()
        .filter(|(_, record)| !flag_attr(record, attribute))
        .map(|(pid, record)| (pid.as_str(), record))
        .collect()
}

/// Duplicate-identifier scan across record sections.
///
/// Builds one first-seen map over all supplied `(type, section)` pairs in
/// iteration order; every later record sharing a PID yields one issue
/// pairing the existing record and the duplicate. The first occurrence in
/// document order wins as "existing".
pub fn duplicate_identifiers(sections: &[(&str, &Section)]) -> Vec<Issue> {
    let mut first_seen: std::collections::HashMap<&str, (&str, &str)> =
        std::collections::HashMap::new();
    let mut issues = Vec::new();

    for &(kind, section) in sections {
        for (pid, record) in section.iter() {
            let name = str_attr(record, "name").unwrap_or("unnamed");
            match first_seen.get(pid.as_str()) {
                Some((existing_kind, existing_name)) => {
                    issues.push(Issue::new(
                        pid.as_str(),
                        format!(
                            "{kind} \"{name}\" duplicates {existing_kind} \"{existing_name}\""
                        ),
                    ));
                }
                None => {
                    first_seen.insert(pid.as_str(), (kind, name));
                }
            }
        }
    }

    issues
}

/// Aggregate sizes and completion figures for one index document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub creatures: usize,
    pub items: usize,
    pub objects: usize,
    pub maps: usize,
    pub defines: usize,
    pub complete_objects: usize,
}

impl IndexStats {
    pub fn of(doc: &IndexDocument) -> Self {
        let complete_objects = doc
            .objects
            .values()
            .filter(|o| flag_attr(o, "hasName") && flag_attr(o, "hasDescription"))
            .count();
        Self {
            creatures: doc.creatures.len(),
            items: doc.items.len(),
            objects: doc.objects.len(),
            maps: doc.maps.len(),
            defines: doc.defines.len(),
            complete_objects,
        }
    }

    /// Share of objects carrying both a name and a description, as a
    /// percentage. Zero when there are no objects at all.
    pub fn completion_percent(&self) -> f64 {
        if self.objects == 0 {
            0.0
        } else {
            self.complete_objects as f64 / self.objects as f64 * 100.0
        }
    }
}

/// Runs the fixed check sequence over one immutable document snapshot.
pub struct IndexValidator<'a> {
    doc: &'a IndexDocument,
    log: IssueLog,
}

impl<'a> IndexValidator<'a> {
    pub fn new(doc: &'a IndexDocument) -> Self {
        Self {
            doc,
            log: IssueLog::new(),
        }
    }

    /// Run every check and return the accumulated findings.
    pub fn run(mut self) -> IssueLog {
        self.check_creatures();
        self.check_items();
        self.check_objects();
        self.check_maps();
        self.check_defines();
        self.check_duplicate_pids();
        self.check_orphaned_references();
        tracing::debug!(total = self.log.total(), "validation checks complete");
        self.log
    }

    fn check_creatures(&mut self) {
        let doc = self.doc;
        self.check_named_section(&doc.creatures, IssueKind::MissingCreature);
    }

    fn check_items(&mut self) {
        let doc = self.doc;
        self.check_named_section(&doc.items, IssueKind::MissingItem);
    }

    fn check_named_section(&mut self, section: &Section, kind: IssueKind) {
        for (pid, record) in missing_attribute(section, "name") {
            let file = str_attr(record, "file").unwrap_or("unknown");
            self.log
                .push(kind, Issue::new(pid, format!("no name (file: {file})")));
        }
    }

    fn check_objects(&mut self) {
        let doc = self.doc;
        for (pid, object) in doc.objects.iter() {
            let mut missing = Vec::new();
            if !flag_attr(object, "hasName") {
                missing.push("name");
            }
            if !flag_attr(object, "hasDescription") {
                missing.push("description");
            }
            if !missing.is_empty() {
                self.log.push(
                    IssueKind::IncompleteObject,
                    Issue::new(pid.as_str(), format!("missing {}", missing.join(", "))),
                );
            }
        }
    }

    fn check_maps(&mut self) {
        let doc = self.doc;
        for (id, map) in doc.maps.iter() {
            if !flag_attr(map, "data") {
                let source = str_attr(map, "source").unwrap_or("unknown");
                self.log.push(
                    IssueKind::MissingMap,
                    Issue::new(id.as_str(), format!("no data (source: {source})")),
                );
            }
        }
    }

    /// Two defines resolving to the same numeric PID.
    fn check_defines(&mut self) {
        let doc = self.doc;
        let mut pid_defines: std::collections::HashMap<i64, &str> =
            std::collections::HashMap::new();
        for (name, value) in doc.defines.iter() {
            let Some(pid) = define_pid(value) else {
                continue;
            };
            match pid_defines.get(&pid) {
                Some(existing) => {
                    self.log.push(
                        IssueKind::DuplicatePid,
                        Issue::new(
                            pid.to_string(),
                            format!("define {name} duplicates {existing}"),
                        ),
                    );
                }
                None => {
                    pid_defines.insert(pid, name);
                }
            }
        }
    }

    fn check_duplicate_pids(&mut self) {
        let issues = duplicate_identifiers(&[
            ("creature", &self.doc.creatures),
            ("item", &self.doc.items),
        ]);
        self.log.extend(IssueKind::DuplicatePid, issues);
    }

    /// Fold the indexer's own unresolved-reference lists into the log.
    fn check_orphaned_references(&mut self) {
        let doc = self.doc;
        let refs = &doc.references;
        for value in refs.missing_names.iter().chain(&refs.missing_descriptions) {
            self.log
                .push(IssueKind::OrphanedReference, Issue::detail_only(render(value)));
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
