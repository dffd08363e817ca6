//! Display formatting for dates and archive codes.
//!
//! All functions are pure. Inputs without a mapping are passed through
//! unchanged rather than treated as errors.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

/// Tag code to display label.
pub const TAG_LABELS: &[(&str, &str)] = &[
    ("фронт", "Фронт"),
    ("тыл", "Тыл"),
    ("блокада", "Блокада"),
    ("оккупация", "Оккупация"),
    ("эвакуация", "Эвакуация"),
    ("медицина", "Медицина"),
    ("армия", "Армия"),
];

/// Region code to display label.
pub const REGION_LABELS: &[(&str, &str)] = &[
    ("ленинград", "Ленинград (блокада)"),
    ("москва", "Московская область"),
    ("волга", "Поволжье"),
    ("кавказ", "Кавказ"),
    ("украина", "Украина"),
    ("беларусь", "Беларусь"),
];

// Genitive case, as used after a day number.
const MONTHS: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября", "октября", "ноября",
    "декабря",
];

fn lookup(table: &[(&str, &str)], code: &str) -> String {
    table
        .iter()
        .find(|(k, _)| *k == code)
        .map_or_else(|| code.to_owned(), |(_, label)| (*label).to_owned())
}

/// Label for a tag code, or the code itself when unknown.
#[must_use]
pub fn format_tag(code: &str) -> String {
    lookup(TAG_LABELS, code)
}

/// Label for a region code, or the code itself when unknown.
#[must_use]
pub fn format_region(code: &str) -> String {
    lookup(REGION_LABELS, code)
}

/// Long-form Russian date, e.g. `1945-05-09` → `9 мая 1945 г.`.
///
/// A time component after `T` is ignored. Input that is not an ISO calendar
/// date is returned as-is.
#[must_use]
pub fn format_date(iso: &str) -> String {
    let day_part = iso.split('T').next().unwrap_or(iso);
    let Ok(date) = Date::parse(day_part, format_description!("[year]-[month]-[day]")) else {
        return iso.to_owned();
    };
    let month = MONTHS[usize::from(u8::from(date.month())) - 1];
    format!("{} {} {} г.", date.day(), month, date.year())
}
