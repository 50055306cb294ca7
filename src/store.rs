use tracing::{debug, info};

use crate::error::{PortalError, SeedError};
use crate::filter::{filter_snapshot, JobFilter};
use crate::models::{
    AlumniRecord, CampaignRecord, CollectionType, EventRecord, JobCategory, JobRecord, NewJob,
    Snapshot, JUST_POSTED,
};
use crate::seed::SeedBundle;
use crate::validation;

/// Totals behind the job board's category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobCounts {
    pub all: usize,
    pub jobs: usize,
    pub internships: usize,
}

/// Alumni, events and campaigns are fixed after load; only jobs change.
#[derive(Debug, Clone)]
pub struct RecordStore {
    alumni: Vec<AlumniRecord>,
    jobs: Vec<JobRecord>,
    events: Vec<EventRecord>,
    campaigns: Vec<CampaignRecord>,
    // Highest job id ever issued or seeded; deleted ids stay retired.
    highest_job_id: u32,
}

impl RecordStore {
    pub fn from_seed(seed: SeedBundle) -> Result<Self, SeedError> {
        seed.validate()?;
        let highest_job_id = seed.jobs.iter().map(|j| j.id).max().unwrap_or(0);
        info!(
            alumni = seed.alumni.len(),
            jobs = seed.jobs.len(),
            events = seed.events.len(),
            campaigns = seed.campaigns.len(),
            "record store loaded"
        );
        Ok(Self {
            alumni: seed.alumni,
            jobs: seed.jobs,
            events: seed.events,
            campaigns: seed.campaigns,
            highest_job_id,
        })
    }

    pub fn get_all(&self, collection: CollectionType) -> Snapshot {
        match collection {
            CollectionType::Alumni => Snapshot::Alumni(self.alumni.clone()),
            CollectionType::Jobs => Snapshot::Jobs(self.jobs.clone()),
            CollectionType::Events => Snapshot::Events(self.events.clone()),
            CollectionType::Campaigns => Snapshot::Campaigns(self.campaigns.clone()),
        }
    }

    pub fn filter(&self, collection: CollectionType, query: &str) -> Snapshot {
        filter_snapshot(&self.get_all(collection), query)
    }

    pub fn search_jobs(&self, filter: &JobFilter) -> Vec<JobRecord> {
        filter.apply(&self.jobs)
    }

    pub fn alumni(&self) -> &[AlumniRecord] {
        &self.alumni
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn alumni_by_id(&self, id: u32) -> Option<&AlumniRecord> {
        self.alumni.iter().find(|a| a.id == id)
    }

    pub fn job_counts(&self) -> JobCounts {
        let internships = self
            .jobs
            .iter()
            .filter(|j| j.category == JobCategory::Internship)
            .count();
        JobCounts {
            all: self.jobs.len(),
            jobs: self.jobs.len() - internships,
            internships,
        }
    }

    /// Validates `input`, assigns the next id and puts the posting first.
    pub fn create_job(&mut self, input: NewJob) -> Result<JobRecord, PortalError> {
        validation::validate_new_job(&input)?;

        let current_max = self.jobs.iter().map(|j| j.id).max().unwrap_or(0);
        let last = current_max.max(self.highest_job_id);
        let id = last
            .checked_add(1)
            .ok_or(PortalError::JobIdsExhausted { last })?;
        self.highest_job_id = id;

        let job = JobRecord {
            id,
            title: input.title,
            company: input.company,
            location: input.location,
            salary: input.salary,
            job_type: input.job_type,
            category: input.category,
            requirements: input.requirements,
            description: input.description,
            posted_date: JUST_POSTED.to_string(),
            applicants: 0,
            is_user_created: true,
        };

        let mut next = Vec::with_capacity(self.jobs.len() + 1);
        next.push(job.clone());
        next.append(&mut self.jobs);
        self.jobs = next;

        info!(id, title = %job.title, "job posted");
        Ok(job)
    }

    /// Removes the job with `id`, seeded or not. Returns false when absent.
    pub fn delete_job(&mut self, id: u32) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|j| j.id != id);
        let removed = self.jobs.len() != before;
        if removed {
            info!(id, "job deleted");
        } else {
            debug!(id, "delete ignored, no such job");
        }
        removed
    }
}
