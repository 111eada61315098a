//! Plain-text report, optionally colorized.

use std::io::{self, Write};

use chrono::{DateTime, FixedOffset, Timelike};
use colored::Colorize;

use super::format::{service_title, status_color, table, title_case, Cell};
use super::Report;
use crate::service::{Component, Incident, Service};
use crate::time::{format_ago_with, BorrowMode};

/// Shown instead of "0 seconds ago" and for missing or unformattable timestamps
const PLACEHOLDER: &str = "-";

/// Human-readable report for a terminal
pub struct TextReport<'a> {
    service: &'a Service,
    now: DateTime<FixedOffset>,
    borrow: BorrowMode,
    colorize: bool,
}

impl<'a> TextReport<'a> {
    /// Creates a report of `service` as seen at `now`.
    pub fn new(service: &'a Service, now: DateTime<FixedOffset>) -> Self {
        Self {
            service,
            now,
            borrow: BorrowMode::default(),
            colorize: true,
        }
    }

    /// Borrow mode used for the "updated" column.
    pub fn borrow_mode(mut self, borrow: BorrowMode) -> Self {
        self.borrow = borrow;
        self
    }

    /// Enables or disables ANSI colors.
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    fn title(&self) -> String {
        format!("{} Services", service_title(&self.service.name))
    }

    fn bold(&self, s: &str) -> String {
        if self.colorize {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn write_components(&self, out: &mut dyn Write, components: &[Component]) -> io::Result<()> {
        if components.is_empty() {
            return writeln!(out, "No component reports");
        }

        let rows: Vec<_> = components
            .iter()
            .map(|c| {
                let status = title_case(&c.status);
                vec![
                    Cell::plain(title_case(&c.name)),
                    Cell::painted(&status, status_color(&status)),
                ]
            })
            .collect();

        write!(out, "{}", table(&["COMPONENT NAME", "STATUS"], &rows, self.colorize))
    }

    fn write_incidents(&self, out: &mut dyn Write, incidents: &[Incident]) -> io::Result<()> {
        writeln!(out, "{}", self.bold("Incident History"))?;

        if incidents.is_empty() {
            return writeln!(out, "No incident reports");
        }

        let rows: Vec<_> = incidents
            .iter()
            .rev()
            .map(|i| {
                let status = title_case(&i.status);
                let (date, time) = match i.created_at {
                    Some(t) => (
                        t.format("%B %-d %Y").to_string(),
                        format!("{}:{}:{}", t.hour(), t.minute(), t.second()),
                    ),
                    None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
                };
                vec![
                    Cell::plain(date),
                    Cell::plain(time),
                    Cell::plain(title_case(&i.impact)),
                    Cell::plain(self.elapsed(i)),
                    Cell::painted(&status, status_color(&status)),
                ]
            })
            .collect();

        write!(
            out,
            "{}",
            table(&["DATE", "TIME", "IMPACT", "UPDATED", "STATUS"], &rows, self.colorize)
        )
    }

    fn elapsed(&self, incident: &Incident) -> String {
        let Some(updated_at) = incident.updated_at else {
            return PLACEHOLDER.to_string();
        };

        // decompose reads wall clocks, so both ends must share a zone
        let now = self.now.with_timezone(&updated_at.timezone());
        match format_ago_with(&updated_at, &now, self.borrow) {
            Ok(ago) if ago != "0 seconds ago" => ago,
            Ok(_) => PLACEHOLDER.to_string(),
            Err(e) => {
                log::debug!("Incident {} updated in the future: {}", incident.id, e);
                PLACEHOLDER.to_string()
            }
        }
    }

    fn incidents_today(&self) -> usize {
        let today = self.now.date_naive();
        self.service
            .incidents
            .iter()
            .filter_map(|i| i.created_at)
            .filter(|t| t.with_timezone(&self.now.timezone()).date_naive() == today)
            .count()
    }
}

impl Report for TextReport<'_> {
    fn render_all(&self, out: &mut dyn Write, quiet: bool) -> io::Result<()> {
        let service = self.service;

        if quiet {
            return writeln!(
                out,
                "{}: {}/{} component(s) are operational. {} incident(s) reported.",
                self.title(),
                service.operational_components(),
                service.components.len(),
                service.incidents.len()
            );
        }

        writeln!(out, "{}", self.bold(&self.title()))?;
        self.write_components(out, &service.components)?;
        writeln!(out)?;
        self.write_incidents(out, &service.incidents)
    }

    fn render_incidents(&self, out: &mut dyn Write, quiet: bool) -> io::Result<()> {
        if quiet {
            return writeln!(out, "{} incident(s) reported today.", self.incidents_today());
        }

        self.write_incidents(out, &self.service.incidents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn incident(id: &str, created: &str, updated: &str, status: &str) -> Incident {
        Incident {
            id: id.to_string(),
            name: format!("incident {id}"),
            service_id: String::new(),
            incident_id: String::new(),
            status: status.to_string(),
            impact: "minor".to_string(),
            shortlink: String::new(),
            is_active: false,
            resolved_at: None,
            created_at: Some(at(created)),
            updated_at: Some(at(updated)),
            incident_updates: Vec::new(),
        }
    }

    fn github() -> Service {
        Service {
            name: "github".to_string(),
            components: vec![
                Component {
                    name: "git operations".to_string(),
                    status: "operational".to_string(),
                    ..Default::default()
                },
                Component {
                    name: "api requests".to_string(),
                    status: "degraded_performance".to_string(),
                    ..Default::default()
                },
            ],
            incidents: vec![
                incident("a", "2019-08-17T00:05:23Z", "2019-08-17T00:05:23Z", "resolved"),
                incident("b", "2019-08-18T09:02:11Z", "2019-08-18T12:19:47Z", "investigating"),
            ],
            ..Default::default()
        }
    }

    fn render(report: &TextReport<'_>, incidents_only: bool, quiet: bool) -> String {
        let mut out = Vec::new();
        if incidents_only {
            report.render_incidents(&mut out, quiet).unwrap();
        } else {
            report.render_all(&mut out, quiet).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quiet_summary_counts_operational_components() {
        let service = github();
        let report = TextReport::new(&service, at("2019-08-18T12:19:47Z")).colorize(false);

        assert_eq!(
            render(&report, false, true),
            "Github Services: 1/2 component(s) are operational. 2 incident(s) reported.\n"
        );
    }

    #[test]
    fn full_report_lists_components_then_newest_incident_first() {
        let service = github();
        let report = TextReport::new(&service, at("2019-08-18T12:19:47Z")).colorize(false);
        let output = render(&report, false, false);

        let expected = "\
Github Services
COMPONENT NAME  STATUS
Git Operations  Operational
Api Requests    Degraded Performance

Incident History
DATE            TIME    IMPACT  UPDATED    STATUS
August 18 2019  9:2:11  Minor   -          Investigating
August 17 2019  0:5:23  Minor   1 day ago  Resolved
";
        assert_eq!(output, expected);
    }

    #[test]
    fn quiet_incidents_counts_today_only() {
        let service = github();
        let report = TextReport::new(&service, at("2019-08-18T23:00:00Z")).colorize(false);

        assert_eq!(render(&report, true, true), "1 incident(s) reported today.\n");
    }

    #[test]
    fn empty_service_has_placeholders() {
        let service = Service {
            name: "circle_ci".to_string(),
            ..Default::default()
        };
        let report = TextReport::new(&service, at("2020-01-01T00:00:00Z")).colorize(false);

        assert_eq!(
            render(&report, false, false),
            "Circle ci Services\nNo component reports\n\nIncident History\nNo incident reports\n"
        );
    }

    #[test]
    fn future_update_renders_placeholder() {
        let service = Service {
            name: "twilio".to_string(),
            incidents: vec![incident(
                "c",
                "2020-01-01T00:00:00Z",
                "2020-01-02T00:00:00Z",
                "monitoring",
            )],
            ..Default::default()
        };
        let report = TextReport::new(&service, at("2020-01-01T12:00:00Z")).colorize(false);
        let output = render(&report, true, false);

        assert!(output.contains("Minor   -"), "{output}");
    }

    #[test]
    fn updated_column_converts_local_now() {
        let service = Service {
            name: "github".to_string(),
            incidents: vec![incident(
                "e",
                "2019-08-18T12:19:47Z",
                "2019-08-18T12:19:47Z",
                "resolved",
            )],
            ..Default::default()
        };
        let report = TextReport::new(&service, at("2019-08-18T07:29:47-05:00")).colorize(false);

        assert_eq!(
            render(&report, true, false),
            "Incident History\n\
             DATE            TIME      IMPACT  UPDATED         STATUS\n\
             August 18 2019  12:19:47  Minor   10 minutes ago  Resolved\n"
        );

        let same_instant = TextReport::new(&service, at("2019-08-18T07:19:47-05:00")).colorize(false);
        assert!(render(&same_instant, true, false).contains("Minor   -"));
    }

    #[test]
    fn today_is_taken_in_local_zone() {
        let service = github();
        // 2019-08-17T00:05:23Z is the evening of August 16 at UTC-05:00
        let report = TextReport::new(&service, at("2019-08-16T20:00:00-05:00")).colorize(false);

        assert_eq!(render(&report, true, true), "1 incident(s) reported today.\n");
    }

    #[test]
    fn missing_timestamps_render_placeholders() {
        let mut undated = incident("f", "2020-01-01T00:00:00Z", "2020-01-01T00:00:00Z", "identified");
        undated.created_at = None;
        undated.updated_at = None;
        let service = Service {
            name: "bitbucket".to_string(),
            incidents: vec![undated],
            ..Default::default()
        };
        let report = TextReport::new(&service, at("2020-01-02T00:00:00Z")).colorize(false);

        assert_eq!(
            render(&report, true, false),
            "Incident History\n\
             DATE  TIME  IMPACT  UPDATED  STATUS\n\
             -     -     Minor   -        Identified\n"
        );
        assert_eq!(render(&report, true, true), "0 incident(s) reported today.\n");
    }

    #[test]
    fn borrow_mode_reaches_updated_column() {
        let service = Service {
            name: "fastly".to_string(),
            incidents: vec![incident(
                "d",
                "2019-12-31T23:50:00Z",
                "2019-12-31T23:50:00Z",
                "resolved",
            )],
            ..Default::default()
        };
        let now = at("2020-01-01T00:10:00Z");

        let compatible = TextReport::new(&service, now).colorize(false);
        assert!(render(&compatible, true, false).contains("1 day ago"));

        let carried = TextReport::new(&service, now)
            .colorize(false)
            .borrow_mode(BorrowMode::CarryHours);
        assert!(render(&carried, true, false).contains("20 minutes ago"));
    }

    #[test]
    fn colorized_output_contains_escape_codes() {
        colored::control::set_override(true);
        let service = github();
        let report = TextReport::new(&service, at("2019-08-18T12:19:47Z"));
        let output = render(&report, false, false);

        assert!(output.contains("\u{1b}["), "{output}");
    }
}
