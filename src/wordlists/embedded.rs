//! Built-in word lists
//!
//! A small emergency vocabulary for when no word-list file can be found, and
//! the usual strong opening guesses.

/// Emergency vocabulary used when no word-list file is found
pub const FALLBACK_WORDS: &[&str] = &[
    "about", "crane", "slate", "trace", "audio", "adieu", "raise", "arose", "salet", "reast",
    "stare", "snare", "irate", "later", "alert", "alter", "laser", "saner", "nears", "learn",
    "renal", "liner", "riles", "tiles", "stile", "smile", "miles", "limes", "slime", "motes",
    "tomes", "notes", "tones", "stone", "onset", "pores", "spore", "ropes", "store",
];

/// Openers with the highest average entropy over the answer list, best first
pub const OPENING_WORDS: &[&str] = &[
    "salet", "reast", "crate", "trace", "slate", "crane", "arose",
];
