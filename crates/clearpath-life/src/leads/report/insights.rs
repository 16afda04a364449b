use chrono::NaiveDate;

use super::super::domain::{LeadKind, LeadStatus};
use super::super::repository::LeadRecord;
use super::views::{LeadFunnelSummary, PipelineInsights, PipelinePressure};
use crate::estimator::format_currency;

const BUILDING_OPEN_THRESHOLD: usize = 5;
const BACKLOG_OPEN_THRESHOLD: usize = 15;
const STALE_LEAD_DAYS: i64 = 3;
const BACKLOG_LEAD_DAYS: i64 = 7;

pub(crate) fn generate_insights(
    summary: &LeadFunnelSummary,
    records: &[LeadRecord],
    today: NaiveDate,
) -> PipelineInsights {
    let open_count: usize = summary.kind_breakdown.iter().map(|entry| entry.open).sum();

    let converted = status_total(summary, LeadStatus::Converted);
    let closed = status_total(summary, LeadStatus::Closed);
    let resolved = converted + closed;
    let conversion_rate = if resolved > 0 {
        converted as f32 / resolved as f32
    } else {
        0.0
    };

    let quote_amounts: Vec<i64> = records
        .iter()
        .filter_map(|record| record.requested_coverage())
        .collect();
    let average_requested_coverage = if quote_amounts.is_empty() {
        None
    } else {
        Some(quote_amounts.iter().sum::<i64>() / quote_amounts.len() as i64)
    };

    let busiest_day = summary
        .daily_volume
        .iter()
        .max_by_key(|entry| entry.total)
        .map(|entry| entry.date);

    let oldest_open_age = records
        .iter()
        .filter(|record| record.status.is_open())
        .map(|record| (today - record.received_on).num_days())
        .max()
        .unwrap_or(0);

    let pressure = if open_count == 0 {
        PipelinePressure::Steady
    } else if open_count >= BACKLOG_OPEN_THRESHOLD || oldest_open_age >= BACKLOG_LEAD_DAYS {
        PipelinePressure::Backlogged
    } else if open_count >= BUILDING_OPEN_THRESHOLD || oldest_open_age >= STALE_LEAD_DAYS {
        PipelinePressure::Building
    } else {
        PipelinePressure::Steady
    };

    let mut observations = Vec::new();
    if resolved > 0 {
        observations.push(format!(
            "{converted} of {resolved} resolved leads converted ({:.0}% conversion)",
            conversion_rate * 100.0
        ));
    }
    if let Some(average) = average_requested_coverage {
        observations.push(format!(
            "{} quote request(s) averaging {} in requested coverage",
            quote_amounts.len(),
            format_currency(average)
        ));
    }
    if open_count > 0 {
        observations.push(format!(
            "{open_count} open lead(s); oldest has waited {oldest_open_age} day(s)"
        ));
    }
    if observations.is_empty() {
        observations.push("No lead activity in this window".to_string());
    }

    let mut recommended_actions = Vec::new();
    for entry in &summary.kind_breakdown {
        if entry.open == 0 {
            continue;
        }
        match entry.kind {
            LeadKind::Quote => recommended_actions.push(format!(
                "Call back {} open quote request(s) before they go cold",
                entry.open
            )),
            LeadKind::Contact => recommended_actions.push(format!(
                "Reply to {} open contact message(s)",
                entry.open
            )),
            LeadKind::JobApplication => recommended_actions.push(format!(
                "Screen {} pending job application(s)",
                entry.open
            )),
        }
    }
    if matches!(pressure, PipelinePressure::Backlogged) {
        recommended_actions
            .push("Schedule a daily follow-up block until the backlog clears".to_string());
    }

    PipelineInsights {
        conversion_rate,
        pressure,
        open_count,
        average_requested_coverage,
        busiest_day,
        observations,
        recommended_actions,
    }
}

fn status_total(summary: &LeadFunnelSummary, status: LeadStatus) -> usize {
    summary
        .status_breakdown
        .iter()
        .find(|entry| entry.status == status)
        .map(|entry| entry.total)
        .unwrap_or(0)
}
