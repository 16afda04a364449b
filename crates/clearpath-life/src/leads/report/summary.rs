use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::super::domain::{LeadKind, LeadStatus};
use super::super::repository::LeadRecord;
use super::views::{
    DailyVolumeEntry, KindBreakdownEntry, LeadFunnelSummary, StatusBreakdownEntry,
};

const OPEN_LEAD_LISTING_LIMIT: usize = 10;

/// Group stored leads into the dashboard summary, restricted to those
/// received within `window_days` of `today`.
pub fn summarize(records: &[LeadRecord], today: NaiveDate, window_days: i64) -> LeadFunnelSummary {
    let in_window: Vec<&LeadRecord> = records
        .iter()
        .filter(|record| {
            let age = (today - record.received_on).num_days();
            (0..window_days).contains(&age)
        })
        .collect();

    let kind_breakdown = LeadKind::ALL
        .iter()
        .map(|kind| {
            let of_kind: Vec<&&LeadRecord> = in_window
                .iter()
                .filter(|record| record.kind() == *kind)
                .collect();
            KindBreakdownEntry {
                kind: *kind,
                kind_label: kind.label(),
                total: of_kind.len(),
                open: of_kind
                    .iter()
                    .filter(|record| record.status.is_open())
                    .count(),
            }
        })
        .collect();

    let status_breakdown = LeadStatus::ALL
        .iter()
        .map(|status| StatusBreakdownEntry {
            status: *status,
            status_label: status.label(),
            total: in_window
                .iter()
                .filter(|record| record.status == *status)
                .count(),
        })
        .collect();

    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in &in_window {
        *by_day.entry(record.received_on).or_insert(0) += 1;
    }
    let daily_volume = by_day
        .into_iter()
        .map(|(date, total)| DailyVolumeEntry { date, total })
        .collect();

    let mut open: Vec<&&LeadRecord> = in_window
        .iter()
        .filter(|record| record.status.is_open())
        .collect();
    open.sort_by(|a, b| b.received_on.cmp(&a.received_on).then(a.id.0.cmp(&b.id.0)));
    let open_leads = open
        .into_iter()
        .take(OPEN_LEAD_LISTING_LIMIT)
        .map(|record| record.status_view())
        .collect();

    LeadFunnelSummary {
        kind_breakdown,
        status_breakdown,
        daily_volume,
        open_leads,
    }
}
