use std::sync::OnceLock;

use regex::Regex;

use crate::error::{FieldError, ValidationError};
use crate::models::NewJob;

pub const MIN_PASSWORD_LEN: usize = 6;
/// Signup offers the current year and the 49 before it.
pub const GRADUATION_YEAR_SPAN: i32 = 50;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

fn check_email(email: &str) -> Option<String> {
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !email_pattern().is_match(email) {
        Some("Email is invalid".to_string())
    } else {
        None
    }
}

fn check_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(format!("Password must be at least {MIN_PASSWORD_LEN} characters"))
    } else {
        None
    }
}

fn check_present(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}

fn collect(fields: Vec<(&'static str, Option<String>)>) -> Vec<FieldError> {
    fields
        .into_iter()
        .filter_map(|(field, message)| message.map(|message| FieldError { field, message }))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl From<LoginErrors> for ValidationError {
    fn from(errors: LoginErrors) -> Self {
        ValidationError {
            errors: collect(vec![("email", errors.email), ("password", errors.password)]),
        }
    }
}

pub fn validate_login(form: &LoginForm) -> Result<(), LoginErrors> {
    let errors = LoginErrors {
        email: check_email(&form.email),
        password: check_password(&form.password),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub graduation_year: Option<i32>,
    pub degree: String,
    pub company: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub graduation_year: Option<String>,
    pub degree: Option<String>,
    pub company: Option<String>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.graduation_year.is_none()
            && self.degree.is_none()
            && self.company.is_none()
    }
}

impl From<SignupErrors> for ValidationError {
    fn from(errors: SignupErrors) -> Self {
        ValidationError {
            errors: collect(vec![
                ("name", errors.name),
                ("email", errors.email),
                ("password", errors.password),
                ("confirm_password", errors.confirm_password),
                ("graduation_year", errors.graduation_year),
                ("degree", errors.degree),
                ("company", errors.company),
            ]),
        }
    }
}

pub fn validate_signup(form: &SignupForm, current_year: i32) -> Result<(), SignupErrors> {
    let confirm_password = if form.confirm_password.is_empty() {
        Some("Please confirm your password".to_string())
    } else if form.confirm_password != form.password {
        Some("Passwords do not match".to_string())
    } else {
        None
    };

    let earliest = current_year - (GRADUATION_YEAR_SPAN - 1);
    let graduation_year = match form.graduation_year {
        None => Some("Graduation year is required".to_string()),
        Some(year) if !(earliest..=current_year).contains(&year) => {
            Some("Graduation year is out of range".to_string())
        }
        Some(_) => None,
    };

    let errors = SignupErrors {
        name: check_present(&form.name, "Name is required"),
        email: check_email(&form.email),
        password: check_password(&form.password),
        confirm_password,
        graduation_year,
        degree: check_present(&form.degree, "Degree is required"),
        company: check_present(&form.company, "Company is required"),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Title, company and location must be non-blank. Category is always set.
pub fn validate_new_job(job: &NewJob) -> Result<(), ValidationError> {
    let errors = collect(vec![
        ("title", check_present(&job.title, "Title is required")),
        ("company", check_present(&job.company, "Company is required")),
        ("location", check_present(&job.location, "Location is required")),
    ]);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}
