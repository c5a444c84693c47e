use std::collections::HashSet;

/// Canonicalize a free-text skill label into its comparison key.
///
/// Lowercase, strip the literal ".js" suffix ("React.js" → "react"), map
/// every character outside `[a-z0-9+]` to a space ("C++" survives), collapse
/// whitespace runs, trim. Idempotent; empty input yields empty output.
pub fn normalize_skill(skill: &str) -> String {
    let lowered = skill.to_lowercase().replace(".js", "");

    let spaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' {
                c
            } else {
                ' '
            }
        })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a skill list into a membership set. Blank entries are dropped;
/// duplicates across lists collapse once the keys are unioned.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}
