//! Whole-record validation for submit.
//!
//! Every rule runs; nothing short-circuits. Each entry in `education` and
//! `experience` is checked on its own, so a bad entry only produces errors under
//! its own `kind[index].field` paths. Validation never trims or rewrites values.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::resume::models::{EducationEntry, Entry, EntryKind, ExperienceEntry, ResumeRecord};

pub const SUMMARY_MIN_CHARS: usize = 10;

/// Field path → message. Only the first violation per path is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Returns the candidate untouched when every rule passes, otherwise every
/// violation found.
pub fn validate(candidate: ResumeRecord) -> Result<ResumeRecord, FieldErrors> {
    let errors = check_record(&candidate);
    if errors.is_empty() {
        Ok(candidate)
    } else {
        Err(errors)
    }
}

pub fn check_record(record: &ResumeRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require(&mut errors, "name", &record.name, "Name is required");
    if !is_valid_email(&record.email) {
        errors.add("email", "Invalid email address");
    }
    require(&mut errors, "phone", &record.phone, "Phone number is required");
    require(&mut errors, "address", &record.address, "Address is required");
    if !record.linkedin.is_empty() && !is_valid_url(&record.linkedin) {
        errors.add("linkedin", "Invalid LinkedIn URL");
    }
    if !record.portfolio.is_empty() && !is_valid_url(&record.portfolio) {
        errors.add("portfolio", "Invalid Portfolio URL");
    }
    if record.summary.chars().count() < SUMMARY_MIN_CHARS {
        errors.add("summary", "Summary should be at least 10 characters");
    }

    if record.education.is_empty() {
        errors.add("education", "At least one education entry is required");
    }
    for (i, entry) in record.education.iter().enumerate() {
        check_education(&mut errors, i, entry);
    }
    check_ids(&mut errors, &record.education);

    if record.experience.is_empty() {
        errors.add("experience", "At least one experience entry is required");
    }
    for (i, entry) in record.experience.iter().enumerate() {
        check_experience(&mut errors, i, entry);
    }
    check_ids(&mut errors, &record.experience);

    require(
        &mut errors,
        "skills",
        &record.skills,
        "Skills are required (comma-separated)",
    );

    errors
}

fn check_education(errors: &mut FieldErrors, index: usize, entry: &EducationEntry) {
    let path = |field: &str| entry_path(EntryKind::Education, index, field);

    require(
        errors,
        path("institution"),
        &entry.institution,
        "Institution name is required",
    );
    require(errors, path("degree"), &entry.degree, "Degree is required");
    require(errors, path("startDate"), &entry.start_date, "Start date is required");
    require(errors, path("endDate"), &entry.end_date, "End date is required");
}

fn check_experience(errors: &mut FieldErrors, index: usize, entry: &ExperienceEntry) {
    let path = |field: &str| entry_path(EntryKind::Experience, index, field);

    require(errors, path("company"), &entry.company, "Company name is required");
    require(errors, path("position"), &entry.position, "Position is required");
    require(errors, path("startDate"), &entry.start_date, "Start date is required");
    require(errors, path("endDate"), &entry.end_date, "End date is required");
    require(
        errors,
        path("responsibilities"),
        &entry.responsibilities,
        "Responsibilities are required",
    );
}

/// Ids must be present and unique within their sequence. The later of two
/// duplicates is the one reported.
fn check_ids<E: Entry>(errors: &mut FieldErrors, entries: &[E]) {
    let mut seen = HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        let path = entry_path(E::KIND, i, "id");
        if entry.id().is_empty() {
            errors.add(path, "Entry id is required");
        } else if !seen.insert(entry.id()) {
            errors.add(path, "Entry id must be unique");
        }
    }
}

fn require(errors: &mut FieldErrors, path: impl Into<String>, value: &str, message: &str) {
    if value.is_empty() {
        errors.add(path, message);
    }
}

pub fn entry_path(kind: EntryKind, index: usize, field: &str) -> String {
    format!("{kind}[{index}].{field}")
}

// ────────────────────────────────────────────────────────────────────────────
// Syntax checks
// ────────────────────────────────────────────────────────────────────────────

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z][A-Za-z0-9+.\-]*):(.*)$").expect("scheme pattern compiles")
});

/// Schemes whose URLs must carry a host.
const HOST_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "ftp"];

const FORBIDDEN_HOST_CHARS: &[char] = &[
    ' ', '#', '%', '/', ':', '<', '>', '?', '@', '[', '\\', ']', '^', '|',
];

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Absolute-URL syntax check: a scheme, and for web schemes a usable host with
/// an optional numeric port. Leading/trailing whitespace and embedded tabs or
/// newlines are ignored the way browsers ignore them.
pub fn is_valid_url(value: &str) -> bool {
    let cleaned: String = value
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();

    let Some(caps) = SCHEME_RE.captures(&cleaned) else {
        return false;
    };
    let scheme = caps[1].to_ascii_lowercase();
    if !HOST_SCHEMES.contains(&scheme.as_str()) {
        return true;
    }

    let after_slashes = caps[2].trim_start_matches(['/', '\\']);
    let authority_end = after_slashes
        .find(['/', '?', '#', '\\'])
        .unwrap_or(after_slashes.len());
    let authority = &after_slashes[..authority_end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);

    is_valid_host_port(host_port)
}

fn is_valid_host_port(host_port: &str) -> bool {
    if let Some(bracketed) = host_port.strip_prefix('[') {
        let Some((addr, tail)) = bracketed.split_once(']') else {
            return false;
        };
        let addr_ok = !addr.is_empty()
            && addr
                .chars()
                .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.');
        return addr_ok && (tail.is_empty() || tail.strip_prefix(':').is_some_and(is_valid_port));
    }

    let (host, port) = match host_port.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    };

    port.map_or(true, is_valid_port) && is_valid_domain(host)
}

/// A host is percent-decoded before it is checked. A `%` left over after
/// decoding is a malformed escape and fails the forbidden-character check.
fn is_valid_domain(host: &str) -> bool {
    let decoded = urlencoding::decode_binary(host.as_bytes());
    let Ok(domain) = std::str::from_utf8(&decoded) else {
        return false;
    };

    if domain.is_empty()
        || domain
            .chars()
            .any(|c| c.is_control() || FORBIDDEN_HOST_CHARS.contains(&c))
    {
        return false;
    }

    !ends_in_number(domain) || parse_ipv4(domain).is_some()
}

/// True when the last label (ignoring one trailing dot) looks numeric, which
/// makes the whole host an IPv4 address.
fn ends_in_number(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let last = domain.rsplit('.').next().unwrap_or_default();
    if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    last.strip_prefix("0x")
        .or_else(|| last.strip_prefix("0X"))
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// IPv4 in any of the forms browsers accept: one to four parts, each decimal,
/// octal (leading `0`) or hex (`0x`); the last part fills the remaining bytes.
fn parse_ipv4(domain: &str) -> Option<u32> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() > 4 {
        return None;
    }

    let numbers = parts
        .iter()
        .map(|part| parse_ipv4_number(part))
        .collect::<Option<Vec<u64>>>()?;
    let (last, leading) = numbers.split_last()?;
    if leading.iter().any(|&n| n > 255) || *last >= 256u64.pow(5 - numbers.len() as u32) {
        return None;
    }

    let address = leading
        .iter()
        .enumerate()
        .fold(*last, |acc, (i, &n)| acc + (n << (8 * (3 - i))));
    u32::try_from(address).ok()
}

fn parse_ipv4_number(part: &str) -> Option<u64> {
    if part.is_empty() {
        return None;
    }
    let hex = part.strip_prefix("0x").or_else(|| part.strip_prefix("0X"));
    let (digits, radix) = if let Some(hex) = hex {
        (hex, 16)
    } else if part.len() > 1 && part.starts_with('0') {
        (&part[1..], 8)
    } else {
        (part, 10)
    };
    if digits.is_empty() {
        return Some(0);
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn is_valid_port(port: &str) -> bool {
    port.is_empty() || (port.chars().all(|c| c.is_ascii_digit()) && port.parse::<u16>().is_ok())
}
