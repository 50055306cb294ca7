use std::path::PathBuf;

use alumni_portal::filter::{CategoryFilter, JobFilter};
use alumni_portal::models::{
    AlumniRecord, CampaignRecord, CollectionType, EventRecord, JobCategory, JobRecord, NewJob,
    Snapshot,
};
use alumni_portal::report;
use alumni_portal::seed;
use alumni_portal::session::Session;
use alumni_portal::store::RecordStore;
use alumni_portal::validation::{LoginForm, SignupForm};
use alumni_portal::ValidationError;
use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alumni-portal")]
#[command(about = "Browse the alumni directory, job board, events and campaigns", long_about = None)]
struct Cli {
    /// Seed bundle (JSON) to load instead of the bundled demo data
    #[arg(long, global = true, env = "ALUMNI_PORTAL_SEED")]
    seed: Option<PathBuf>,
    /// Replace the alumni directory with rows from a CSV file
    #[arg(long, global = true)]
    alumni_csv: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one listing: alumni, jobs, events or campaigns
    List {
        collection: String,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Show one alumni profile
    Profile { id: u32 },
    /// Search the job board by keyword and category
    Jobs {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, value_enum, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,
        /// Remove postings before listing (this session only)
        #[arg(long)]
        delete: Vec<u32>,
    },
    /// Post a job and print the resulting board (this session only)
    PostJob {
        #[arg(long)]
        title: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        location: String,
        #[arg(long, default_value = "")]
        salary: String,
        #[arg(long, default_value = "Full-time")]
        job_type: String,
        #[arg(long, value_enum, default_value_t = JobCategory::Job)]
        category: JobCategory,
        #[arg(long, value_delimiter = ',')]
        requirements: Vec<String>,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Write a markdown digest of every listing
    Report {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "digest.md")]
        out: PathBuf,
    },
    /// Check the login form and sign in
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Check the signup form and create an account
    Signup {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
        #[arg(long)]
        graduation_year: Option<i32>,
        #[arg(long, default_value = "")]
        degree: String,
        #[arg(long, default_value = "")]
        company: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ALUMNI_PORTAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_store(cli: &Cli) -> anyhow::Result<RecordStore> {
    let mut bundle = match &cli.seed {
        Some(path) => seed::from_path(path)
            .with_context(|| format!("failed to load seed from {}", path.display()))?,
        None => seed::bundled().context("bundled seed is invalid")?,
    };
    if let Some(path) = &cli.alumni_csv {
        bundle.alumni = seed::load_alumni_csv(path)
            .with_context(|| format!("failed to import alumni from {}", path.display()))?;
    }
    RecordStore::from_seed(bundle).context("seed data failed validation")
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut store = load_store(&cli)?;
    let mut session = Session::default();

    match cli.command {
        Commands::List { collection, query } => {
            let collection: CollectionType = collection.parse()?;
            print_snapshot(&store.filter(collection, &query));
        }
        Commands::Profile { id } => match store.alumni_by_id(id) {
            Some(alumnus) => print_profile(alumnus),
            None => println!("Alumni not found."),
        },
        Commands::Jobs {
            query,
            category,
            delete,
        } => {
            for id in delete {
                if !store.delete_job(id) {
                    debug!(id, "nothing to delete");
                }
            }
            let jobs = store.search_jobs(&JobFilter { query, category });
            print_job_tabs(&store);
            print_jobs(&jobs);
        }
        Commands::PostJob {
            title,
            company,
            location,
            salary,
            job_type,
            category,
            requirements,
            description,
        } => {
            let job = store.create_job(NewJob {
                title,
                company,
                location,
                salary,
                job_type,
                category,
                requirements,
                description,
            })?;
            println!("Posted job #{}: {} at {}.", job.id, job.title, job.company);
            print_job_tabs(&store);
            print_jobs(store.jobs());
        }
        Commands::Report { query, out } => {
            let report = report::build_report(&store, query.as_deref(), Utc::now().date_naive());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Login { email, password } => {
            let form = LoginForm { email, password };
            session
                .login(&form)
                .map_err(ValidationError::from)
                .context("login rejected")?;
            println!("Login successful!");
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
            graduation_year,
            degree,
            company,
        } => {
            let form = SignupForm {
                name,
                email,
                password,
                confirm_password,
                graduation_year,
                degree,
                company,
            };
            session
                .signup(&form, Utc::now().year())
                .map_err(ValidationError::from)
                .context("signup rejected")?;
            println!("Account created successfully! Welcome, {}.", form.name.trim());
        }
    }

    debug!(authenticated = session.is_authenticated(), "done");
    Ok(())
}

fn print_snapshot(snapshot: &Snapshot) {
    match snapshot {
        Snapshot::Alumni(alumni) => print_alumni(alumni),
        Snapshot::Jobs(jobs) => print_jobs(jobs),
        Snapshot::Events(events) => print_events(events),
        Snapshot::Campaigns(campaigns) => print_campaigns(campaigns),
    }
}

fn print_alumni(alumni: &[AlumniRecord]) {
    println!("{} alumni in our network", alumni.len());
    for alumnus in alumni {
        println!(
            "- #{} {} ({}% match): {} at {}, {}",
            alumnus.id,
            alumnus.name,
            alumnus.match_score,
            alumnus.title,
            alumnus.company,
            alumnus.location
        );
    }
}

fn print_profile(alumnus: &AlumniRecord) {
    println!("{}", alumnus.name);
    println!("{} at {}", alumnus.title, alumnus.company);
    println!("{} | {}, class of {}", alumnus.location, alumnus.department, alumnus.graduation_year);
    println!("Skills: {}", alumnus.skills.join(", "));
    if !alumnus.achievements.is_empty() {
        println!("Achievements: {}", alumnus.achievements);
    }
    println!("Email: {}", alumnus.contact.email);
    for (label, handle) in [
        ("LinkedIn", &alumnus.contact.linkedin),
        ("Twitter", &alumnus.contact.twitter),
        ("GitHub", &alumnus.contact.github),
    ] {
        if let Some(handle) = handle {
            println!("{label}: {handle}");
        }
    }
}

fn print_job_tabs(store: &RecordStore) {
    let counts = store.job_counts();
    println!(
        "All ({}) | Jobs ({}) | Internships ({})",
        counts.all, counts.jobs, counts.internships
    );
}

fn print_jobs(jobs: &[JobRecord]) {
    if jobs.is_empty() {
        println!("No jobs found.");
        return;
    }
    for job in jobs {
        let mine = if job.is_user_created { " (yours)" } else { "" };
        println!(
            "- #{} [{}] {} at {}{}: {}, {}, {}, {} applied, posted {}",
            job.id,
            job.category,
            job.title,
            job.company,
            mine,
            job.location,
            job.salary,
            job.job_type,
            job.applicants,
            job.posted_date
        );
        if !job.requirements.is_empty() {
            println!("  Skills: {}", job.requirements.join(", "));
        }
    }
}

fn print_events(events: &[EventRecord]) {
    println!("{} upcoming events", events.len());
    for event in events {
        let registration = if event.accepts_registrations() {
            format!("register by {}", event.registration_deadline)
        } else {
            "registration closed".to_string()
        };
        println!(
            "- #{} {} on {} {} at {} ({}, {} attending), {}",
            event.id,
            event.name,
            event.date,
            event.time,
            event.location,
            event.fee,
            event.attendees,
            registration
        );
        if !event.speakers.is_empty() {
            println!("  Speakers: {}", event.speakers.join(", "));
        }
    }
}

fn print_campaigns(campaigns: &[CampaignRecord]) {
    println!("{} active campaigns", campaigns.len());
    for campaign in campaigns {
        println!(
            "- #{} {} [{}]: {} of {} ({}), {} still needed, {} supporters, ends {}",
            campaign.id,
            campaign.name,
            campaign.category,
            report::format_inr(campaign.raised),
            report::format_inr(campaign.goal),
            report::format_progress(campaign.progress),
            report::format_inr(report::amount_needed(campaign)),
            campaign.supporters,
            campaign.end_date
        );
    }
}
