// src/pipeline/browse.rs

//! Listing campsites, agencies and per-site booking windows.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::Campsite;
use crate::services::{CampsiteCatalog, ResolvedBookingEvent, build_calendar_url, season_range};

/// One availability window of one campsite, resolved against a fixed day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSummary {
    pub campsite_id: String,
    pub campsite_name: String,
    pub agency: String,
    pub window_index: usize,
    pub season: String,
    pub advance_days: u32,
    pub booking_open: NaiveDate,
    pub days_until: i64,
}

impl WindowSummary {
    /// Summaries for every window of `campsite`.
    pub fn for_campsite(campsite: &Campsite, today: NaiveDate) -> Vec<Self> {
        campsite
            .windows
            .iter()
            .enumerate()
            .map(|(index, window)| {
                let event = ResolvedBookingEvent::resolve(window, today);
                Self {
                    campsite_id: campsite.id.clone(),
                    campsite_name: campsite.name.clone(),
                    agency: campsite.agency.clone(),
                    window_index: index,
                    season: season_range(window),
                    advance_days: window.advance_days(),
                    booking_open: event.booking_open,
                    days_until: event.days_until(today),
                }
            })
            .collect()
    }

    /// `"today"`, `"tomorrow"` or `"in N days"`.
    pub fn relative(&self) -> String {
        match self.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {n} days"),
        }
    }
}

/// Window summaries for the sites of the given agencies, soonest first.
pub fn upcoming_windows<S: AsRef<str>>(
    catalog: &CampsiteCatalog,
    agencies: &[S],
    today: NaiveDate,
) -> Vec<WindowSummary> {
    let mut rows: Vec<WindowSummary> = catalog
        .filter_by_agency(agencies)
        .into_iter()
        .flat_map(|site| WindowSummary::for_campsite(site, today))
        .collect();
    rows.sort_by(|a, b| {
        a.booking_open
            .cmp(&b.booking_open)
            .then_with(|| a.campsite_name.cmp(&b.campsite_name))
    });
    rows
}

/// Print managing agencies with site counts.
pub fn run_agencies(catalog: &CampsiteCatalog) {
    log::info!("{} agencies manage {} campsites", catalog.agencies().len(), catalog.len());
    for (agency, count) in catalog.agencies() {
        println!("{count:>5}  {agency}");
    }
}

/// Print upcoming booking-open dates, optionally filtered by agency.
pub fn run_list(catalog: &CampsiteCatalog, agencies: &[String], today: NaiveDate) {
    let sites = catalog.filter_by_agency(agencies);
    let without_windows = sites.iter().filter(|s| s.windows.is_empty()).count();
    let rows = upcoming_windows(catalog, agencies, today);

    log::info!(
        "{} campsites matched ({} without availability windows)",
        sites.len(),
        without_windows
    );

    for row in &rows {
        println!(
            "{}  {:<12}  {}  [{}]  {}",
            row.booking_open,
            row.relative(),
            row.campsite_name,
            row.agency,
            row.season
        );
    }
}

/// Print every booking window of one campsite with its calendar link.
pub fn run_show(catalog: &CampsiteCatalog, key: &str, today: NaiveDate) -> Result<()> {
    let site = catalog.find(key)?;

    println!("{} ({})", site.name, site.agency);
    if let Some(url) = &site.official_url {
        println!("    Info: {url}");
    }
    if !site.types.is_empty() {
        println!("    Types: {}", site.types.join(", "));
    }
    if site.windows.is_empty() {
        log::warn!("{} has no availability windows", site.name);
        return Ok(());
    }

    for (summary, window) in WindowSummary::for_campsite(site, today)
        .iter()
        .zip(&site.windows)
    {
        println!("[{}] Season: {}", summary.window_index, summary.season);
        if summary.advance_days > 0 {
            println!("    Reservations open {} days ahead", summary.advance_days);
        }
        println!(
            "    Next booking opens: {} ({})",
            summary.booking_open.format("%a %b %-d, %Y"),
            summary.relative()
        );
        println!(
            "    Calendar: {}",
            build_calendar_url(site.export_ref(), window, today)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AvailabilityWindow;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn site(id: &str, name: &str, agency: &str, windows: Vec<AvailabilityWindow>) -> Campsite {
        Campsite {
            id: id.to_string(),
            name: name.to_string(),
            agency: agency.to_string(),
            official_url: None,
            types: vec![],
            coordinates: None,
            windows,
        }
    }

    fn catalog() -> CampsiteCatalog {
        CampsiteCatalog::new(vec![
            site(
                "1",
                "Rainier Base Camp",
                "NPS",
                vec![
                    AvailabilityWindow::parse("11-01", "11-30", Some(30)).unwrap(),
                    AvailabilityWindow::parse("09-03", "10-31", Some(80)).unwrap(),
                ],
            ),
            site(
                "2",
                "Deception Pass",
                "State Parks",
                vec![AvailabilityWindow::parse("08-01", "10-31", None).unwrap()],
            ),
        ])
    }

    #[test]
    fn test_upcoming_windows_sorted() {
        let rows = upcoming_windows::<&str>(&catalog(), &[], date(2026, 6, 15));
        let dates: Vec<_> = rows.iter().map(|r| r.booking_open).collect();
        assert_eq!(
            dates,
            vec![date(2026, 6, 15), date(2026, 8, 1), date(2026, 10, 2)]
        );
        assert_eq!(rows[0].relative(), "today");
        assert_eq!(rows[0].window_index, 1);
    }

    #[test]
    fn test_upcoming_windows_filtered() {
        let rows = upcoming_windows(&catalog(), &["state parks"], date(2026, 6, 15));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].campsite_id, "2");
        assert_eq!(rows[0].season, "Aug 1 – Oct 31");
        assert_eq!(rows[0].relative(), "in 47 days");
    }

    #[test]
    fn test_relative_tomorrow() {
        let rows = upcoming_windows(&catalog(), &["State Parks"], date(2026, 7, 31));
        assert_eq!(rows[0].relative(), "tomorrow");
    }

    #[test]
    fn test_show_unknown_site() {
        assert!(run_show(&catalog(), "missing", date(2026, 6, 15)).is_err());
    }
}
