// Core algorithm exports
pub mod distance;
pub mod error;
pub mod filters;
pub mod matcher;
pub mod predicate;
pub mod rates;

pub use distance::{distance, haversine_distance, DistanceUnit};
pub use error::MatchError;
pub use filters::{
    has_matching_skill, has_required_certificates, is_available_for, is_within_distance,
    meets_license_requirement, Candidate,
};
pub use matcher::{match_jobs_for_worker, MatchResult, Matcher, DEFAULT_MAX_RESULTS};
pub use predicate::{chain_and, Predicate};
pub use rates::parse_bill_rate;
