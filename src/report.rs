use std::fmt::Write;

use chrono::NaiveDate;

use crate::filter::JobFilter;
use crate::models::{CampaignRecord, CollectionType, Snapshot};
use crate::store::RecordStore;

/// Whole-rupee amount with Indian digit grouping, e.g. `₹12,34,567`.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            groups.push(right);
            rest = left;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

pub fn format_progress(progress: u8) -> String {
    format!("{progress}%")
}

/// Goal minus raised. Negative once a campaign is over-funded.
pub fn amount_needed(campaign: &CampaignRecord) -> f64 {
    campaign.goal - campaign.raised
}

/// Markdown digest of all four listings, each narrowed by `query`.
pub fn build_report(store: &RecordStore, query: Option<&str>, generated_on: NaiveDate) -> String {
    let query = query.unwrap_or("");
    let mut output = String::new();

    let _ = writeln!(output, "# Alumni Network Digest");
    if query.is_empty() {
        let _ = writeln!(output, "Generated on {generated_on}");
    } else {
        let _ = writeln!(output, "Generated on {generated_on} for \"{query}\"");
    }

    for collection in CollectionType::ALL {
        let _ = writeln!(output);
        match store.filter(collection, query) {
            Snapshot::Alumni(alumni) => {
                let _ = writeln!(output, "## Alumni ({})", alumni.len());
                if alumni.is_empty() {
                    let _ = writeln!(output, "No alumni found.");
                }
                for alumnus in &alumni {
                    let _ = writeln!(
                        output,
                        "- {}, {} at {} ({}, class of {})",
                        alumnus.name,
                        alumnus.title,
                        alumnus.company,
                        alumnus.location,
                        alumnus.graduation_year
                    );
                }
            }
            Snapshot::Jobs(_) => {
                let counts = store.job_counts();
                let jobs = store.search_jobs(&JobFilter {
                    query: query.to_string(),
                    ..JobFilter::default()
                });
                let _ = writeln!(output, "## Jobs ({})", jobs.len());
                let _ = writeln!(
                    output,
                    "{} postings: {} jobs, {} internships",
                    counts.all, counts.jobs, counts.internships
                );
                if jobs.is_empty() {
                    let _ = writeln!(output, "No jobs found.");
                }
                for job in &jobs {
                    let _ = writeln!(
                        output,
                        "- [{}] {} at {} ({}, {}) posted {}, {} applied",
                        job.category,
                        job.title,
                        job.company,
                        job.location,
                        job.salary,
                        job.posted_date,
                        job.applicants
                    );
                }
            }
            Snapshot::Events(events) => {
                let _ = writeln!(output, "## Events ({})", events.len());
                if events.is_empty() {
                    let _ = writeln!(output, "No events found.");
                }
                for event in &events {
                    let _ = writeln!(
                        output,
                        "- {} on {} at {}, {} ({}): {}",
                        event.name,
                        event.date,
                        event.time,
                        event.location,
                        event.fee,
                        event.status
                    );
                }
            }
            Snapshot::Campaigns(campaigns) => {
                let _ = writeln!(output, "## Campaigns ({})", campaigns.len());
                if campaigns.is_empty() {
                    let _ = writeln!(output, "No campaigns found.");
                }
                for campaign in &campaigns {
                    let _ = writeln!(
                        output,
                        "- {} [{}] {} raised of {} ({}), {} still needed",
                        campaign.name,
                        campaign.category,
                        format_inr(campaign.raised),
                        format_inr(campaign.goal),
                        format_progress(campaign.progress),
                        format_inr(amount_needed(campaign))
                    );
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn inr_uses_lakh_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(100000.0), "₹1,00,000");
        assert_eq!(format_inr(1234567.0), "₹12,34,567");
        assert_eq!(format_inr(50000000.0), "₹5,00,00,000");
    }

    #[test]
    fn inr_drops_fraction_and_keeps_sign() {
        assert_eq!(format_inr(1499.5), "₹1,500");
        assert_eq!(format_inr(-250000.0), "-₹2,50,000");
    }

    #[test]
    fn amount_needed_can_go_negative() {
        let campaign = CampaignRecord {
            id: 1,
            name: "Library".to_string(),
            description: String::new(),
            category: "Infrastructure".to_string(),
            supporters: 10,
            end_date: "2026-01-01".to_string(),
            progress: 100,
            raised: 120.0,
            goal: 100.0,
        };
        assert_eq!(amount_needed(&campaign), -20.0);
        assert_eq!(format_progress(campaign.progress), "100%");
    }

    #[test]
    fn report_covers_every_section() {
        let store = RecordStore::from_seed(seed::bundled().unwrap()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let report = build_report(&store, None, date);

        assert!(report.starts_with("# Alumni Network Digest\nGenerated on 2025-10-01\n"));
        for heading in ["## Alumni (", "## Jobs (", "## Events (", "## Campaigns ("] {
            assert!(report.contains(heading), "missing {heading}");
        }
        assert!(report.contains("₹34,00,000 raised of ₹50,00,000 (68%)"));
    }

    #[test]
    fn report_marks_empty_sections() {
        let store = RecordStore::from_seed(seed::bundled().unwrap()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let report = build_report(&store, Some("zzz-no-match"), date);

        assert!(report.contains("for \"zzz-no-match\""));
        assert!(report.contains("No alumni found."));
        assert!(report.contains("No jobs found."));
        assert!(report.contains("No events found."));
        assert!(report.contains("No campaigns found."));
    }
}
