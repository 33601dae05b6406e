//! Lists read out of the free-text fields. Every template goes through these;
//! nothing stores the result.

/// Skills are comma-separated. Pieces are trimmed, empty ones dropped, order
/// and duplicates kept.
pub fn derive_skill_list(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One bullet per non-blank line, trimmed.
pub fn derive_responsibility_lines(responsibilities: &str) -> Vec<String> {
    responsibilities
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
