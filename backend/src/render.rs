//! Pintado del panel en terminal. Solo formatea: toda la lógica vive en
//! `zvonko_core`.

use std::fmt::Write;

use zvonko_core::domain::Release;
use zvonko_core::services::DashboardView;

pub fn json(view: &DashboardView<'_>) -> serde_json::Result<String> {
  serde_json::to_string_pretty(view)
}

pub fn text(view: &DashboardView<'_>) -> String {
  let mut out = String::new();
  // `write!` sobre `String` no puede fallar.
  let _ = write_dashboard(&mut out, view);
  out
}

fn write_dashboard(out: &mut String, view: &DashboardView<'_>) -> std::fmt::Result {
  write_header(out, view)?;
  write_releases(out, view)?;
  write_stats(out, view)?;
  write_platforms(out, view)?;
  writeln!(out, "\nПредстоящие релизы: {}", view.upcoming)
}

fn write_header(out: &mut String, view: &DashboardView<'_>) -> std::fmt::Result {
  match view.artist {
    Some(artist) => writeln!(out, "zvonko digital | {}", artist.name)?,
    None => writeln!(out, "zvonko digital")?,
  }

  let query = &view.query;
  write!(out, "Площадки: {} | Сортировка: {}", query.platform_filter.label(), query.sort_key.label())?;
  if !query.search_text.is_empty() {
    write!(out, " | Поиск: \"{}\"", query.search_text)?;
  }
  writeln!(out)
}

fn write_releases(out: &mut String, view: &DashboardView<'_>) -> std::fmt::Result {
  writeln!(out, "\nРелизы")?;
  writeln!(out, "Всего релизов: {}", view.release_count)?;

  for release in &view.releases {
    write_release(out, release)?;
  }

  Ok(())
}

fn write_release(out: &mut String, release: &Release) -> std::fmt::Result {
  write!(out, "\n  {}", release.title)?;
  if let Some(artist) = &release.artist_name {
    write!(out, " / {artist}")?;
  }
  writeln!(out, " [{}]", release.status.label())?;
  writeln!(
    out,
    "    UPC {} | {} | {} | {}",
    release.upc, release.release_date, release.genre, release.territories
  )?;
  writeln!(out, "    {}", release.platforms.join(", "))
}

fn write_stats(out: &mut String, view: &DashboardView<'_>) -> std::fmt::Result {
  writeln!(out, "\nСтатистика прослушиваний")?;
  writeln!(
    out,
    "  Прослушивания: {} | Скачивания: {}",
    view.totals.total_streams, view.totals.total_downloads
  )?;

  for point in view.stats {
    writeln!(out, "  {:<9} {:>8} {:>6}", point.chart_label(), point.streams, point.downloads)?;
  }

  Ok(())
}

fn write_platforms(out: &mut String, view: &DashboardView<'_>) -> std::fmt::Result {
  writeln!(out, "\nРаспределение по площадкам")?;

  for share in view.platform_shares {
    writeln!(out, "  {} ({})", share.label(), share.color)?;
  }

  Ok(())
}
