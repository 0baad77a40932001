//! Per-language UI text.

use luach_core::Locale;

pub struct Strings {
    pub today: &'static str,
    pub no_holiday: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub remaining: &'static str,
    pub this_month: &'static str,
    pub no_holidays_this_month: &'static str,
    pub detailed_times: &'static str,
    pub no_times: &'static str,
    pub zmanim: &'static str,
    pub zmanim_unavailable: &'static str,
    pub upcoming_event: &'static str,
    pub loading: &'static str,
    pub updated: &'static str,
    pub stop_hint: &'static str,
}

const ENGLISH: Strings = Strings {
    today: "Today",
    no_holiday: "No major holiday today",
    start: "Start",
    end: "End",
    remaining: "remaining",
    this_month: "This Month",
    no_holidays_this_month: "No holidays this month",
    detailed_times: "Detailed times",
    no_times: "No times found",
    zmanim: "Zmanim",
    zmanim_unavailable: "Zmanim unavailable",
    upcoming_event: "Upcoming Event",
    loading: "Loading times from Hebcal...",
    updated: "Updated",
    stop_hint: "Ctrl-C to stop",
};

const HEBREW: Strings = Strings {
    today: "היום",
    no_holiday: "אין חג מיוחד היום",
    start: "כניסה",
    end: "יציאה",
    remaining: "נותרו",
    this_month: "החודש",
    no_holidays_this_month: "אין חגים החודש",
    detailed_times: "זמנים מפורטים",
    no_times: "לא נמצאו זמנים",
    zmanim: "זמני היום",
    zmanim_unavailable: "זמני היום אינם זמינים",
    upcoming_event: "אירוע קרוב",
    loading: "טוען זמנים מ-Hebcal...",
    updated: "עודכן",
    stop_hint: "Ctrl-C לעצירה",
};

pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Hebrew => &HEBREW,
    }
}
