use std::collections::HashSet;

use chrono::{DateTime, Datelike, NaiveDateTime, Weekday};

use crate::core::distance::distance;
use crate::core::error::MatchError;
use crate::core::predicate::Predicate;
use crate::core::rates::numeric_bill_rate;
use crate::models::{Job, Worker};

/// A job with the derived values the rules and ranking need.
///
/// Building one validates the job's start date and bill rate, so a
/// malformed record is reported before any rule runs.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub job: &'a Job,
    /// Lowercased job title
    pub title_key: String,
    pub start_day: Weekday,
    pub rate: f64,
}

impl<'a> Candidate<'a> {
    pub fn from_job(job: &'a Job) -> Result<Self, MatchError> {
        Ok(Self {
            job,
            title_key: job.job_title.to_lowercase(),
            start_day: start_weekday(job)?,
            rate: numeric_bill_rate(job)?,
        })
    }
}

/// Check if the job title is one of the worker's skills (case-insensitive)
#[inline]
pub fn has_matching_skill(job: &Job, worker: &Worker) -> bool {
    let title = job.job_title.to_lowercase();
    worker.skills.iter().any(|skill| skill.to_lowercase() == title)
}

/// Check if the worker holds every certificate the job requires
#[inline]
pub fn has_required_certificates(job: &Job, worker: &Worker) -> bool {
    job.required_certificates
        .iter()
        .all(|required| worker.certificates.contains(required))
}

/// Jobs without a licence requirement pass regardless of the worker
#[inline]
pub fn meets_license_requirement(job: &Job, worker: &Worker) -> bool {
    !job.driver_license_required || worker.has_drivers_license
}

/// Distance from the worker's search address to the job, in the worker's unit
#[inline]
pub fn distance_to_job(job: &Job, worker: &Worker) -> f64 {
    let address = &worker.job_search_address;
    distance(
        job.location.latitude,
        job.location.longitude,
        address.latitude,
        address.longitude,
        address.unit,
    )
}

/// Check if the job lies within the worker's maximum distance (inclusive)
#[inline]
pub fn is_within_distance(job: &Job, worker: &Worker) -> bool {
    distance_to_job(job, worker) <= worker.job_search_address.max_job_distance
}

#[inline]
pub fn is_available_on(day: Weekday, worker: &Worker) -> bool {
    worker
        .availability
        .iter()
        .any(|slot| u32::from(slot.day_index) == day.number_from_monday())
}

/// Check if the job starts on a day the worker is available
pub fn is_available_for(job: &Job, worker: &Worker) -> Result<bool, MatchError> {
    Ok(is_available_on(start_weekday(job)?, worker))
}

/// Weekday of the job's start date, as written (the offset is not applied)
pub fn start_weekday(job: &Job) -> Result<Weekday, MatchError> {
    parse_start_date(&job.start_date)
        .map(|start| start.weekday())
        .ok_or_else(|| {
            MatchError::malformed(&job.job_id, format!("invalid start date {:?}", job.start_date))
        })
}

fn parse_start_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(start) = DateTime::parse_from_rfc3339(raw) {
        return Some(start.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

pub fn skill_rule<'a>(worker: &'a Worker) -> Predicate<'a, Candidate<'a>> {
    let skills: HashSet<String> = worker.skills.iter().map(|skill| skill.to_lowercase()).collect();
    Box::new(move |candidate: &Candidate<'a>| skills.contains(&candidate.title_key))
}

pub fn certificate_rule<'a>(worker: &'a Worker) -> Predicate<'a, Candidate<'a>> {
    let held: HashSet<&str> = worker.certificates.iter().map(String::as_str).collect();
    Box::new(move |candidate: &Candidate<'a>| {
        candidate
            .job
            .required_certificates
            .iter()
            .all(|required| held.contains(required.as_str()))
    })
}

pub fn license_rule<'a>(worker: &'a Worker) -> Predicate<'a, Candidate<'a>> {
    Box::new(move |candidate: &Candidate<'a>| meets_license_requirement(candidate.job, worker))
}

pub fn distance_rule<'a>(worker: &'a Worker) -> Predicate<'a, Candidate<'a>> {
    Box::new(move |candidate: &Candidate<'a>| is_within_distance(candidate.job, worker))
}

pub fn availability_rule<'a>(worker: &'a Worker) -> Predicate<'a, Candidate<'a>> {
    Box::new(move |candidate: &Candidate<'a>| is_available_on(candidate.start_day, worker))
}

/// The five eligibility rules bound to one worker
pub fn eligibility_rules<'a>(worker: &'a Worker) -> Vec<Predicate<'a, Candidate<'a>>> {
    vec![
        skill_rule(worker),
        certificate_rule(worker),
        license_rule(worker),
        distance_rule(worker),
        availability_rule(worker),
    ]
}
