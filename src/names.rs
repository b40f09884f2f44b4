//! Procedural name assembly shared by stars and civilizations.
//!
//! Table-driven name synthesis, in the spirit of the corpus's d6/d66
//! lookup-table generators (e.g. the alien-species generator in the
//! retrieval pack rolls names off fixed tables the same way).

use once_cell::sync::Lazy;

static STAR_PREFIX: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Ze", "Ky", "Vor", "Ara", "Thal", "Nyx", "Or", "Cal", "Dra", "Eli",
        "Fen", "Gor", "Hy", "Il", "Jor", "Kael",
    ]
});
static STAR_MIDDLE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec!["an", "ir", "os", "eth", "ul", "ara", "in", "on"]
});
static STAR_SUFFIX: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "dus", "ion", "ax", "is", "or", "um", "eth", "ara", "on", "al",
        "ys", "ix", "oth", "ea", "en", "ur",
    ]
});

/// Consumption order of the RNG: prefix_idx, middle_idx, suffix_idx,
/// include-middle-flag. Reordering this breaks the determinism contract.
pub fn star_name(rng: &mut crate::prng::Rng) -> String {
    let prefix = STAR_PREFIX[rng.range(STAR_PREFIX.len() as u64) as usize];
    let middle = STAR_MIDDLE[rng.range(STAR_MIDDLE.len() as u64) as usize];
    let suffix = STAR_SUFFIX[rng.range(STAR_SUFFIX.len() as u64) as usize];
    let include_middle = rng.double() < 0.6;

    if include_middle {
        format!("{prefix}{middle}{suffix}")
    } else {
        format!("{prefix}{suffix}")
    }
}

static CIV_PREFIX: Lazy<[&'static str; 16]> = Lazy::new(|| {
    [
        "Kor", "Tha", "Xel", "Vyn", "Mor", "Sil", "Az", "Ren", "Ob", "Fyr",
        "Quil", "Drae", "Nim", "Wes", "Yor", "Zan",
    ]
});
static CIV_SUFFIX: Lazy<[&'static str; 16]> = Lazy::new(|| {
    [
        "ari", "eth", "ok", "ys", "ani", "uul", "en", "oth", "ira", "ask",
        "ovi", "end", "uth", "ael", "orn", "ix",
    ]
});

/// Civilization name = prefix\[16\] · suffix\[16\], per spec §4.8.
pub fn civilization_name(rng: &mut crate::prng::Rng) -> String {
    let prefix = CIV_PREFIX[rng.range(16) as usize];
    let suffix = CIV_SUFFIX[rng.range(16) as usize];
    format!("{prefix}{suffix}")
}
