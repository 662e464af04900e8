use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::distance::DistanceUnit;

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Job posting as published by the jobs source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Job {
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub guid: String,
    #[serde(rename = "driverLicenseRequired", default)]
    pub driver_license_required: bool,
    #[serde(rename = "requiredCertificates", default)]
    pub required_certificates: Vec<String>,
    pub location: Location,
    /// Currency-prefixed rate, e.g. `"$17.60"`
    #[serde(rename = "billRate")]
    #[schema(example = "$17.60")]
    pub bill_rate: String,
    /// ISO-8601 date-time
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "workersRequired", default)]
    pub workers_required: u32,
    #[serde(default)]
    pub about: Option<String>,
}

/// Where and how far a worker is willing to travel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobSearchAddress {
    /// `km`, `mi` or `nm`; kilometres when absent
    #[serde(default)]
    #[schema(value_type = String, example = "km")]
    pub unit: DistanceUnit,
    #[serde(rename = "maxJobDistance")]
    pub max_job_distance: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// A day the worker is available.
///
/// `day_index` follows ISO numbering (Monday = 1 .. Sunday = 7) and is the
/// only field used for matching; `title` is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkerAvailability {
    #[serde(rename = "dayIndex")]
    pub day_index: u8,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct WorkerName {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}

/// Worker profile as published by the workers source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Worker {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub name: WorkerName,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(rename = "hasDriversLicense", default)]
    pub has_drivers_license: bool,
    #[serde(rename = "jobSearchAddress")]
    pub job_search_address: JobSearchAddress,
    #[serde(default)]
    pub availability: Vec<WorkerAvailability>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub transportation: Option<String>,
}

impl Worker {
    /// Case-insensitive identifier comparison
    pub fn has_id(&self, id: &str) -> bool {
        self.user_id.to_lowercase() == id.to_lowercase()
    }
}

fn default_true() -> bool { true }
