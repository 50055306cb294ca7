use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::SeedError;
use crate::models::{
    AlumniRecord, CampaignRecord, CollectionType, Contact, EventRecord, JobRecord,
};

const BUNDLED_SEED: &str = include_str!("../data/seed.json");
const MAX_PERCENT: u8 = 100;

/// Initial contents of every listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedBundle {
    #[serde(default)]
    pub alumni: Vec<AlumniRecord>,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub campaigns: Vec<CampaignRecord>,
}

impl SeedBundle {
    /// Ids unique per collection, scores and progress within 0-100, goals positive.
    pub fn validate(&self) -> Result<(), SeedError> {
        unique_ids(CollectionType::Alumni, self.alumni.iter().map(|r| r.id))?;
        unique_ids(CollectionType::Jobs, self.jobs.iter().map(|r| r.id))?;
        unique_ids(CollectionType::Events, self.events.iter().map(|r| r.id))?;
        unique_ids(CollectionType::Campaigns, self.campaigns.iter().map(|r| r.id))?;

        if let Some(alumnus) = self.alumni.iter().find(|a| a.match_score > MAX_PERCENT) {
            return Err(SeedError::OutOfRange {
                collection: CollectionType::Alumni,
                id: alumnus.id,
                field: "match_score",
                value: alumnus.match_score,
            });
        }
        for campaign in &self.campaigns {
            if campaign.progress > MAX_PERCENT {
                return Err(SeedError::OutOfRange {
                    collection: CollectionType::Campaigns,
                    id: campaign.id,
                    field: "progress",
                    value: campaign.progress,
                });
            }
            if !(campaign.goal > 0.0) {
                return Err(SeedError::NonPositiveGoal { id: campaign.id });
            }
        }
        Ok(())
    }
}

fn unique_ids(
    collection: CollectionType,
    ids: impl Iterator<Item = u32>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

fn parse(json: &str) -> Result<SeedBundle, SeedError> {
    serde_json::from_str(json).map_err(|e| SeedError::Parse {
        message: e.to_string(),
    })
}

/// The demo data shipped with the binary.
pub fn bundled() -> Result<SeedBundle, SeedError> {
    parse(BUNDLED_SEED)
}

pub fn from_path(path: &Path) -> Result<SeedBundle, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let bundle = parse(&json)?;
    debug!(path = %path.display(), "seed bundle read");
    Ok(bundle)
}

/// Reads alumni from a CSV file with a header row. Skills are `;`-separated.
pub fn load_alumni_csv(path: &Path) -> Result<Vec<AlumniRecord>, SeedError> {
    #[derive(Deserialize)]
    struct CsvRow {
        id: u32,
        name: String,
        title: String,
        company: String,
        location: String,
        department: String,
        graduation_year: i32,
        skills: String,
        achievements: String,
        match_score: u8,
        profile_image: String,
        email: String,
        linkedin: Option<String>,
        twitter: Option<String>,
        github: Option<String>,
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| SeedError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut alumni = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.map_err(|e| SeedError::Csv {
            row: index + 1,
            message: e.to_string(),
        })?;
        alumni.push(AlumniRecord {
            id: row.id,
            name: row.name,
            title: row.title,
            company: row.company,
            location: row.location,
            department: row.department,
            graduation_year: row.graduation_year,
            skills: row
                .skills
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            achievements: row.achievements,
            match_score: row.match_score,
            profile_image: row.profile_image,
            contact: Contact {
                email: row.email,
                linkedin: row.linkedin.filter(|s| !s.is_empty()),
                twitter: row.twitter.filter(|s| !s.is_empty()),
                github: row.github.filter(|s| !s.is_empty()),
            },
        });
    }

    debug!(path = %path.display(), count = alumni.len(), "alumni CSV read");
    Ok(alumni)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_seed_is_valid() {
        let bundle = bundled().unwrap();
        bundle.validate().unwrap();
        assert!(!bundle.alumni.is_empty());
        assert_eq!(bundle.jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(bundle.jobs.iter().all(|j| !j.is_user_created));
    }

    #[test]
    fn bundled_progress_is_kept_as_supplied() {
        let bundle = bundled().unwrap();
        // At least one campaign reports a progress that differs from raised/goal.
        assert!(bundle.campaigns.iter().any(|c| {
            let derived = (100.0 * c.raised / c.goal).round() as i64;
            derived != i64::from(c.progress)
        }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut bundle = bundled().unwrap();
        let copy = bundle.events[0].clone();
        bundle.events.push(copy.clone());
        assert_eq!(
            bundle.validate(),
            Err(SeedError::DuplicateId {
                collection: CollectionType::Events,
                id: copy.id,
            })
        );
    }

    #[test]
    fn zero_goal_is_rejected() {
        let mut bundle = bundled().unwrap();
        bundle.campaigns[0].goal = 0.0;
        let id = bundle.campaigns[0].id;
        assert_eq!(bundle.validate(), Err(SeedError::NonPositiveGoal { id }));
    }

    #[test]
    fn progress_above_hundred_is_rejected() {
        let mut bundle = bundled().unwrap();
        bundle.campaigns[1].progress = 250;
        let id = bundle.campaigns[1].id;
        assert_eq!(
            bundle.validate(),
            Err(SeedError::OutOfRange {
                collection: CollectionType::Campaigns,
                id,
                field: "progress",
                value: 250,
            })
        );

        bundle.campaigns[1].progress = 100;
        assert_eq!(bundle.validate(), Ok(()));
    }

    #[test]
    fn match_score_above_hundred_is_rejected() {
        let mut bundle = bundled().unwrap();
        bundle.alumni[2].match_score = 200;
        let id = bundle.alumni[2].id;
        assert_eq!(
            bundle.validate(),
            Err(SeedError::OutOfRange {
                collection: CollectionType::Alumni,
                id,
                field: "match_score",
                value: 200,
            })
        );
    }

    #[test]
    fn seed_file_round_trips_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"jobs": [{{"id": 9, "title": "Intern", "company": "Acme",
                "location": "Remote", "salary": "₹20k/month", "job_type": "Internship",
                "category": "Internship", "posted_date": "1 week ago"}}]}}"#
        )
        .unwrap();

        let bundle = from_path(file.path()).unwrap();
        assert!(bundle.alumni.is_empty());
        assert_eq!(bundle.jobs.len(), 1);
        assert_eq!(bundle.jobs[0].applicants, 0);
        assert!(bundle.jobs[0].requirements.is_empty());
    }

    #[test]
    fn missing_seed_file_reports_path() {
        let err = from_path(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn malformed_seed_is_a_parse_error() {
        let err = parse("{\"alumni\": 3}").unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }

    #[test]
    fn alumni_csv_rows_become_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "id,name,title,company,location,department,graduation_year,skills,achievements,match_score,profile_image,email,linkedin,twitter,github"
        )
        .unwrap();
        writeln!(
            file,
            "11,Kabir Rao,SRE,Initech,\"Bangalore, India\",CSE,2016,Go; Kubernetes ;,On-call lead,72,,kabir@alumni.edu,kabirrao,,kabir-r"
        )
        .unwrap();

        let alumni = load_alumni_csv(file.path()).unwrap();
        assert_eq!(alumni.len(), 1);
        let kabir = &alumni[0];
        assert_eq!(kabir.location, "Bangalore, India");
        assert_eq!(kabir.skills, vec!["Go", "Kubernetes"]);
        assert_eq!(kabir.contact.linkedin.as_deref(), Some("kabirrao"));
        assert_eq!(kabir.contact.twitter, None);
    }

    #[test]
    fn bad_csv_row_reports_its_position() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "id,name,title,company,location,department,graduation_year,skills,achievements,match_score,profile_image,email,linkedin,twitter,github"
        )
        .unwrap();
        writeln!(file, "x,Kabir Rao,SRE,Initech,Pune,CSE,2016,,,72,,k@a.edu,,,").unwrap();

        let err = load_alumni_csv(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Csv { row: 1, .. }));
    }
}
