//! Per-language phrasing of "fast begins" and "fast ends".
//!
//! Hebcal does not distinguish the two ends of a fast by category, so the
//! selector falls back to matching titles. Each language is one row of
//! data; extend a row when Hebcal changes its wording.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::locale::Locale;

pub struct FastPatterns {
    pub begins: Regex,
    pub ends: Regex,
}

struct PatternRow {
    locale: Locale,
    begins: &'static str,
    ends: &'static str,
}

const PATTERN_TABLE: &[PatternRow] = &[
    PatternRow {
        locale: Locale::English,
        begins: r"fast\s*begins?",
        ends: r"fast\s*ends?",
    },
    PatternRow {
        locale: Locale::Hebrew,
        begins: r"(תחילת|תחלת)\s*ה?צום|צום\s*מתחיל",
        ends: r"(סיום|סוף)\s*ה?צום|צום\s*מסתיים",
    },
];

static ENGLISH: LazyLock<FastPatterns> = LazyLock::new(|| compile(Locale::English));
static HEBREW: LazyLock<FastPatterns> = LazyLock::new(|| compile(Locale::Hebrew));

/// Compiled patterns for a language.
pub fn fast_patterns(locale: Locale) -> &'static FastPatterns {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Hebrew => &HEBREW,
    }
}

fn compile(locale: Locale) -> FastPatterns {
    let row = PATTERN_TABLE
        .iter()
        .find(|row| row.locale == locale)
        .unwrap_or(&PATTERN_TABLE[0]);

    FastPatterns {
        begins: case_insensitive(row.begins),
        ends: case_insensitive(row.ends),
    }
}

fn case_insensitive(pattern: &str) -> Regex {
    // The table is static; a pattern that fails to compile is a programming error.
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("fast pattern table must contain valid regexes")
}
