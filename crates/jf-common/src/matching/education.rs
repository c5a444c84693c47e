/// Ordinal ranks for degree labels, matched by case-insensitive substring.
/// The doctorate spellings share the top rank; anything unrecognized is 0.
const EDUCATION_RANKS: &[(&str, u8)] = &[
    ("phd", 5),
    ("doctorate", 5),
    ("master", 4),
    ("bachelor", 3),
    ("associate", 2),
    ("high school", 1),
];

/// Map a free-text degree label to its ordinal rank. `None` and labels with
/// no recognizable degree word ("none", "unknown") rank 0.
pub fn education_rank(level: Option<&str>) -> u8 {
    let Some(level) = level else {
        return 0;
    };

    let lowered = level.to_lowercase();
    EDUCATION_RANKS
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}
