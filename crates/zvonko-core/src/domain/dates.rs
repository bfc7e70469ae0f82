use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Abreviaturas de mes tal como las muestra el eje del gráfico de escuchas.
const RU_SHORT_MONTHS: [&str; 12] =
  ["янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.", "дек."];

/// Interpreta una fecha ISO 8601 completa como instante UTC.
///
/// Acepta `YYYY-MM-DD` (medianoche UTC) o un timestamp RFC 3339
/// (`2025-11-07T10:00:00Z`, `2025-11-07T10:00:00+03:00`). Cualquier otra cosa,
/// incluido texto sobrante tras la fecha, devuelve `None`.
pub fn parse_iso_timestamp(raw: &str) -> Option<NaiveDateTime> {
  let trimmed = raw.trim();

  if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
    return date.and_hms_opt(0, 0, 0);
  }

  DateTime::parse_from_rfc3339(trimmed).ok().map(|ts| ts.naive_utc())
}

/// Parte de fecha de [`parse_iso_timestamp`].
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
  parse_iso_timestamp(raw).map(|ts| ts.date())
}

/// `2025-11-10` → `10 нояб.`
pub fn short_ru_label(date: NaiveDate) -> String {
  format!("{:02} {}", date.day(), RU_SHORT_MONTHS[date.month0() as usize])
}

/// `2025-11-10` → `10.11.2025`
pub fn numeric_ru_label(date: NaiveDate) -> String {
  date.format("%d.%m.%Y").to_string()
}
