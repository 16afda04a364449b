use std::io::Write;

use super::repository::LeadRecord;

/// Write stored leads as CSV for staff spreadsheet tooling.
pub fn write_leads_csv<W: Write>(records: &[LeadRecord], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record([
        "lead_id",
        "kind",
        "status",
        "received_on",
        "name",
        "email",
        "summary",
        "requested_coverage",
    ])?;

    for record in records {
        let coverage = record
            .requested_coverage()
            .map(|amount| amount.to_string())
            .unwrap_or_default();
        writer.write_record([
            record.id.0.as_str(),
            record.kind().label(),
            record.status.label(),
            &record.received_on.to_string(),
            &record.submission.contact_name(),
            record.submission.email().unwrap_or_default(),
            &record.summary(),
            &coverage,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
