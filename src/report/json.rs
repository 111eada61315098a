//! JSON report for scripting.

use std::io::{self, Write};

use serde::Serialize;

use super::format::service_title;
use super::Report;
use crate::service::Service;

/// Pretty-printed JSON of the fetched records
pub struct JsonReport<'a> {
    service: &'a Service,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    title: String,
    name: &'a str,
    operational_components: usize,
    components: usize,
    incidents: usize,
}

impl<'a> JsonReport<'a> {
    pub fn new(service: &'a Service) -> Self {
        Self { service }
    }

    fn write<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)
    }
}

impl Report for JsonReport<'_> {
    fn render_all(&self, out: &mut dyn Write, quiet: bool) -> io::Result<()> {
        if !quiet {
            return Self::write(out, self.service);
        }

        let service = self.service;
        Self::write(
            out,
            &Summary {
                title: format!("{} Services", service_title(&service.name)),
                name: &service.name,
                operational_components: service.operational_components(),
                components: service.components.len(),
                incidents: service.incidents.len(),
            },
        )
    }

    fn render_incidents(&self, out: &mut dyn Write, quiet: bool) -> io::Result<()> {
        if quiet {
            return Self::write(out, &serde_json::json!({ "incidents": self.service.incidents.len() }));
        }

        Self::write(out, &self.service.incidents)
    }
}
