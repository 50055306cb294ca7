use clap::ValueEnum;

use crate::models::{
    AlumniRecord, CampaignRecord, EventRecord, JobCategory, JobRecord, Snapshot,
};

#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    Text(&'a str),
    List(&'a [String]),
}

pub trait Searchable {
    fn searchable_fields(&self) -> Vec<Field<'_>>;
}

impl Searchable for AlumniRecord {
    fn searchable_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Text(&self.name),
            Field::Text(&self.company),
            Field::Text(&self.title),
            Field::Text(&self.location),
        ]
    }
}

impl Searchable for JobRecord {
    fn searchable_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Text(&self.title),
            Field::Text(&self.company),
            Field::List(&self.requirements),
        ]
    }
}

impl Searchable for EventRecord {
    fn searchable_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Text(&self.name),
            Field::Text(&self.location),
            Field::List(&self.speakers),
        ]
    }
}

impl Searchable for CampaignRecord {
    fn searchable_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Text(&self.name),
            Field::Text(&self.description),
            Field::Text(&self.category),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    lowered: String,
}

impl SearchTerm {
    pub fn new(query: &str) -> Self {
        Self {
            lowered: query.to_lowercase(),
        }
    }

    // Only "" matches everything; whitespace is a real query.
    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    fn found_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(self.lowered.as_str())
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        if self.is_empty() {
            return true;
        }
        record.searchable_fields().into_iter().any(|field| match field {
            Field::Text(text) => self.found_in(text),
            Field::List(items) => items.iter().any(|item| self.found_in(item)),
        })
    }
}

/// Matching is a literal, case-insensitive substring test. Order is kept.
pub fn filter_records<T: Searchable + Clone>(query: &str, records: &[T]) -> Vec<T> {
    let term = SearchTerm::new(query);
    records
        .iter()
        .filter(|record| term.matches(*record))
        .cloned()
        .collect()
}

pub fn filter_snapshot(snapshot: &Snapshot, query: &str) -> Snapshot {
    match snapshot {
        Snapshot::Alumni(records) => Snapshot::Alumni(filter_records(query, records)),
        Snapshot::Jobs(records) => Snapshot::Jobs(filter_records(query, records)),
        Snapshot::Events(records) => Snapshot::Events(filter_records(query, records)),
        Snapshot::Campaigns(records) => Snapshot::Campaigns(filter_records(query, records)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CategoryFilter {
    #[default]
    All,
    Job,
    Internship,
}

impl CategoryFilter {
    pub fn admits(self, category: JobCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Job => category == JobCategory::Job,
            CategoryFilter::Internship => category == JobCategory::Internship,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl JobFilter {
    pub fn apply(&self, jobs: &[JobRecord]) -> Vec<JobRecord> {
        let term = SearchTerm::new(&self.query);
        jobs.iter()
            .filter(|job| self.category.admits(job.category) && term.matches(*job))
            .cloned()
            .collect()
    }
}
