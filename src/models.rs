use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Marker stored in `posted_date` for jobs created during this session.
pub const JUST_POSTED: &str = "Just now";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniRecord {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub department: String,
    pub graduation_year: i32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: String,
    pub match_score: u8,
    #[serde(default)]
    pub profile_image: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum JobCategory {
    Job,
    Internship,
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobCategory::Job => f.write_str("Job"),
            JobCategory::Internship => f.write_str("Internship"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub category: JobCategory,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub posted_date: String,
    #[serde(default)]
    pub applicants: u32,
    #[serde(default)]
    pub is_user_created: bool,
}

/// Caller-supplied fields of a job posting; the store fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub category: JobCategory,
    pub requirements: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Open,
    Closed,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Open => f.write_str("Open"),
            EventStatus::Closed => f.write_str("Closed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub fee: String,
    pub attendees: u32,
    pub registration_deadline: String,
    pub status: EventStatus,
    #[serde(default)]
    pub speakers: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl EventRecord {
    pub fn accepts_registrations(&self) -> bool {
        self.status == EventStatus::Open
    }
}

/// A donation campaign. `progress` is taken as supplied and is not derived
/// from `raised` and `goal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub supporters: u32,
    pub end_date: String,
    pub progress: u8,
    pub raised: f64,
    pub goal: f64,
}

/// Which of the four listings a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionType {
    Alumni,
    Jobs,
    Events,
    Campaigns,
}

impl CollectionType {
    pub const ALL: [CollectionType; 4] = [
        CollectionType::Alumni,
        CollectionType::Jobs,
        CollectionType::Events,
        CollectionType::Campaigns,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionType::Alumni => "alumni",
            CollectionType::Jobs => "jobs",
            CollectionType::Events => "events",
            CollectionType::Campaigns => "campaigns",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionType {
    type Err = PortalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CollectionType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| PortalError::UnknownCollection(value.to_string()))
    }
}

/// Current contents of one collection, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Alumni(Vec<AlumniRecord>),
    Jobs(Vec<JobRecord>),
    Events(Vec<EventRecord>),
    Campaigns(Vec<CampaignRecord>),
}

impl Snapshot {
    pub fn collection(&self) -> CollectionType {
        match self {
            Snapshot::Alumni(_) => CollectionType::Alumni,
            Snapshot::Jobs(_) => CollectionType::Jobs,
            Snapshot::Events(_) => CollectionType::Events,
            Snapshot::Campaigns(_) => CollectionType::Campaigns,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Snapshot::Alumni(records) => records.len(),
            Snapshot::Jobs(records) => records.len(),
            Snapshot::Events(records) => records.len(),
            Snapshot::Campaigns(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record ids in snapshot order.
    pub fn ids(&self) -> Vec<u32> {
        match self {
            Snapshot::Alumni(records) => records.iter().map(|r| r.id).collect(),
            Snapshot::Jobs(records) => records.iter().map(|r| r.id).collect(),
            Snapshot::Events(records) => records.iter().map(|r| r.id).collect(),
            Snapshot::Campaigns(records) => records.iter().map(|r| r.id).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_names_parse_case_insensitively() {
        assert_eq!("Jobs".parse::<CollectionType>().unwrap(), CollectionType::Jobs);
        assert_eq!(" alumni ".parse::<CollectionType>().unwrap(), CollectionType::Alumni);
    }

    #[test]
    fn unknown_collection_is_a_configuration_error() {
        let err = "mentors".parse::<CollectionType>().unwrap_err();
        assert!(matches!(err, PortalError::UnknownCollection(name) if name == "mentors"));
    }

    #[test]
    fn closed_events_do_not_accept_registrations() {
        let event = EventRecord {
            id: 1,
            name: "Alumni Meet".to_string(),
            date: "2025-03-01".to_string(),
            time: "18:00".to_string(),
            location: "Kolkata".to_string(),
            fee: "Free".to_string(),
            attendees: 120,
            registration_deadline: "2025-02-20".to_string(),
            status: EventStatus::Closed,
            speakers: vec![],
            description: String::new(),
        };
        assert!(!event.accepts_registrations());
    }
}
