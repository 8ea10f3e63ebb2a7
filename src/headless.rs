// Headless report
//
// Runs the projection engine without a terminal UI and prints every
// record's chart positions plus the region centroids, as text or JSON.

use crate::app::ChartLayouts;
use crate::data::CountryRecord;
use crate::projection::{
    lane_position, net_torque, project_scatter, project_seesaw, region_centroids, BeamSide,
};
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterEntry {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color_weight: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeesawEntry {
    pub side: &'static str,
    pub beam_pos: f64,
    pub bar_height: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecordEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub gap: f64,
    pub scatter: ScatterEntry,
    pub seesaw: SeesawEntry,
    pub lane_position: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CentroidEntry {
    pub region: &'static str,
    pub x: f64,
    pub y: f64,
    pub count: usize,
}

/// Everything the three charts would draw, minus styling
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectionReport {
    pub records: Vec<RecordEntry>,
    pub centroids: Vec<CentroidEntry>,
    pub net_torque: f64,
}

fn side_name(side: BeamSide) -> &'static str {
    match side {
        BeamSide::Connectivity => "connectivity",
        BeamSide::Energy => "energy",
    }
}

pub fn build_report(records: &[CountryRecord], layouts: &ChartLayouts) -> ProjectionReport {
    let nodes = project_scatter(records, &layouts.scatter);
    let bars = project_seesaw(records, &layouts.seesaw);

    let centroids = region_centroids(records.iter().map(|r| r.region).zip(nodes.iter()))
        .into_iter()
        .map(|c| CentroidEntry {
            region: c.region.label(),
            x: c.x,
            y: c.y,
            count: c.count,
        })
        .collect();

    let entries = records
        .iter()
        .zip(nodes.iter().zip(bars.iter()))
        .map(|(record, (node, bar))| RecordEntry {
            id: record.id,
            name: record.name,
            region: record.region.label(),
            gap: record.gap,
            scatter: ScatterEntry {
                x: node.x,
                y: node.y,
                radius: node.radius,
                color_weight: node.color_weight,
            },
            seesaw: SeesawEntry {
                side: side_name(bar.side),
                beam_pos: bar.beam_pos,
                bar_height: bar.bar_height,
            },
            lane_position: lane_position(record.gap, &layouts.lane),
        })
        .collect();

    ProjectionReport {
        records: entries,
        centroids,
        net_torque: net_torque(records, &bars),
    }
}

pub fn render_text(report: &ProjectionReport) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "\nDigital Divide Atlas: Projection Report")?;
    writeln!(out, "=======================================")?;
    writeln!(out, "Records: {}", report.records.len())?;
    writeln!(out, "Net torque: {:+.1}", report.net_torque)?;

    writeln!(out, "\nRecords:")?;
    writeln!(
        out,
        "{:<4} {:<26} {:>7} {:>8} {:>8} {:>6} {:>13} {:>8} {:>8} {:>6}",
        "ID", "REGION", "GAP", "X", "Y", "R", "SIDE", "POS", "HEIGHT", "LANE"
    )?;
    for r in &report.records {
        writeln!(
            out,
            "{:<4} {:<26} {:>+7.1} {:>8.1} {:>8.1} {:>6.2} {:>13} {:>+8.1} {:>8.1} {:>6.1}",
            r.id,
            r.region,
            r.gap,
            r.scatter.x,
            r.scatter.y,
            r.scatter.radius,
            r.seesaw.side,
            r.seesaw.beam_pos,
            r.seesaw.bar_height,
            r.lane_position
        )?;
    }

    writeln!(out, "\nRegion centroids:")?;
    for c in &report.centroids {
        writeln!(out, "- {}: ({:.1}, {:.1}) n={}", c.region, c.x, c.y, c.count)?;
    }

    Ok(out)
}

pub fn render_json(report: &ProjectionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Build and print the report for `records`
pub fn run_headless(records: &[CountryRecord], layouts: &ChartLayouts, json: bool) -> Result<()> {
    let report = build_report(records, layouts);
    tracing::info!(records = report.records.len(), json, "Printing headless report");

    let output = if json {
        render_json(&report)?
    } else {
        render_text(&report)?
    };
    println!("{output}");
    Ok(())
}
