use crate::core::{
    error::MatchError,
    filters::{eligibility_rules, Candidate},
    predicate::chain_and,
    rates::rank_by_rate_desc,
};
use crate::models::{Job, Worker};

/// Number of jobs returned per query unless configured otherwise
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub jobs: Vec<Job>,
    /// Jobs that passed every rule, before truncation
    pub eligible: usize,
    pub total_jobs: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Worker resolution (case-insensitive id)
/// 2. Job validation (start date and bill rate must parse)
/// 3. Eligibility rules, combined by AND
/// 4. Ranking by bill rate, highest first, and truncation
///
/// The matcher never mutates its inputs and performs no I/O.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    max_results: usize,
}

impl Matcher {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Find the best paying jobs the worker is eligible for
    ///
    /// # Arguments
    /// * `worker_id` - Identifier of the worker, matched case-insensitively
    /// * `workers` - Snapshot of all workers
    /// * `jobs` - Snapshot of all jobs
    ///
    /// # Errors
    /// * `InvalidArgument` if `worker_id` is blank
    /// * `NotFound` if no worker has that id
    /// * `MalformedData` if any job has an unparseable start date or bill rate
    pub fn find_matches(
        &self,
        worker_id: &str,
        workers: &[Worker],
        jobs: &[Job],
    ) -> Result<MatchResult, MatchError> {
        let worker = find_worker(workers, worker_id)?;

        let candidates = jobs
            .iter()
            .map(Candidate::from_job)
            .collect::<Result<Vec<_>, _>>()?;

        let is_eligible = chain_and(eligibility_rules(worker));
        let mut eligible: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| is_eligible(candidate))
            .collect();

        rank_by_rate_desc(&mut eligible, |candidate| candidate.rate);

        let eligible_count = eligible.len();
        eligible.truncate(self.max_results);

        tracing::debug!(
            "Worker {} is eligible for {} of {} jobs",
            worker.user_id,
            eligible_count,
            jobs.len()
        );

        Ok(MatchResult {
            jobs: eligible.into_iter().map(|candidate| candidate.job.clone()).collect(),
            eligible: eligible_count,
            total_jobs: jobs.len(),
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

/// Look up a worker by id, ignoring case
///
/// Surrounding whitespace is not stripped: `" 8"` does not match worker `"8"`.
pub fn find_worker<'a>(workers: &'a [Worker], worker_id: &str) -> Result<&'a Worker, MatchError> {
    if worker_id.trim().is_empty() {
        return Err(MatchError::InvalidArgument("worker id cannot be empty".to_string()));
    }

    workers
        .iter()
        .find(|worker| worker.has_id(worker_id))
        .ok_or_else(|| MatchError::NotFound(worker_id.to_string()))
}

/// Top three best paying eligible jobs for a worker
pub fn match_jobs_for_worker(
    worker_id: &str,
    workers: &[Worker],
    jobs: &[Job],
) -> Result<Vec<Job>, MatchError> {
    Matcher::default()
        .find_matches(worker_id, workers, jobs)
        .map(|result| result.jobs)
}
