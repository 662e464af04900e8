// Sample data shared by the integration tests
#![allow(dead_code)]

use job_matcher::core::DistanceUnit;
use job_matcher::models::{Job, JobSearchAddress, Location, Worker, WorkerAvailability, WorkerName};

pub const WORKER_WITH_MATCHES: &str = "8";
pub const WORKER_WITHOUT_MATCHES: &str = "0";

#[allow(clippy::too_many_arguments)]
pub fn create_job(
    id: &str,
    company: &str,
    title: &str,
    certificates: &[&str],
    license: bool,
    (latitude, longitude): (f64, f64),
    rate: &str,
    start_date: &str,
) -> Job {
    Job {
        job_id: id.to_string(),
        job_title: title.to_string(),
        company: company.to_string(),
        guid: format!("guid-{}", id),
        driver_license_required: license,
        required_certificates: certificates.iter().map(|c| c.to_string()).collect(),
        location: Location { latitude, longitude },
        bill_rate: rate.to_string(),
        start_date: start_date.to_string(),
        workers_required: 1,
        about: None,
    }
}

/// Maximind, Syntac, Centice, Nimon, Pholio, Lovepad
pub fn sample_jobs() -> Vec<Job> {
    vec![
        create_job(
            "19",
            "Maximind",
            "Chief Troublemaker",
            &["Outstanding Memory Award", "Calm in the Eye of the Storm"],
            false,
            (49.739001, 14.453499),
            "$17.60",
            "2015-11-03T09:45:47.56Z",
        ),
        create_job(
            "14",
            "Syntac",
            "Chief Cheerleader",
            &["Healthy Living Promoter"],
            true,
            (49.886497, 14.580436),
            "$15.83",
            "2015-11-15T11:23:34.31Z",
        ),
        create_job(
            "29",
            "Centice",
            "The Resinator",
            &["Outstanding Memory Award"],
            false,
            (50.180255, 14.082219),
            "$14.98",
            "2015-11-12T07:23:56.19Z",
        ),
        create_job(
            "27",
            "Nimon",
            "Director of First Impressions",
            &["The Encouraging Word Award"],
            false,
            (50.212725, 14.987061),
            "$14.79",
            "2015-11-14T10:07:21.887Z",
        ),
        create_job(
            "24",
            "Pholio",
            "Chief Cheerleader",
            &["Outstanding Memory Award", "Calm in the Eye of the Storm", "Marvelous Multitasker"],
            true,
            (49.828395, 14.312687),
            "$7.47",
            "2015-11-24T07:35:25.451Z",
        ),
        create_job(
            "11",
            "Lovepad",
            "The Resinator",
            &["Office Lunch Expert"],
            true,
            (50.266116, 14.293204),
            "$6.21",
            "2015-11-02T22:12:40.263Z",
        ),
    ]
}

fn availability(days: &[(u8, &str)]) -> Vec<WorkerAvailability> {
    days.iter()
        .map(|(day_index, title)| WorkerAvailability { day_index: *day_index, title: title.to_string() })
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn sample_workers() -> Vec<Worker> {
    let diana = Worker {
        user_id: WORKER_WITH_MATCHES.to_string(),
        guid: "562f66478b2c02d14302fda4".to_string(),
        name: WorkerName { first: "Diana".to_string(), last: "Mooney".to_string() },
        skills: strings(&[
            "The Resinator",
            "Head of global trends and futuring",
            "Chief Cheerleader",
            "Creator of opportunities",
            "Director of First Impressions",
            "Chief Troublemaker",
        ]),
        certificates: strings(&[
            "The Human Handbook",
            "Office Lunch Expert",
            "Outstanding Memory Award",
            "Outside the Box Thinker",
            "The Encouraging Word Award",
            "Calm in the Eye of the Storm",
            "Healthy Living Promoter",
            "Marvelous Multitasker",
            "The Risk Taker",
        ]),
        has_drivers_license: true,
        job_search_address: JobSearchAddress {
            unit: DistanceUnit::Kilometers,
            max_job_distance: 50.0,
            latitude: 50.141097,
            longitude: 14.592614,
        },
        availability: availability(&[
            (5, "Friday"),
            (7, "Sunday"),
            (4, "Thursday"),
            (2, "Tuesday"),
            (1, "Monday"),
            (6, "Saturday"),
        ]),
        rating: Some(3),
        is_active: true,
        phone: Some("+1 (921) 419-2523".to_string()),
        email: Some("diana.mooney@navir.name".to_string()),
        age: Some(34),
        transportation: Some("PUBLIC TRANSPORT".to_string()),
    };

    let andrews = Worker {
        user_id: WORKER_WITHOUT_MATCHES.to_string(),
        guid: "562f6647410ecd6bf49146e9".to_string(),
        name: WorkerName { first: "Andrews".to_string(), last: "Fowler".to_string() },
        skills: strings(&["Creator of opportunities", "Arts and Crafts Designer"]),
        certificates: strings(&[
            "Outstanding Innovator",
            "The Behind the Scenes Wonder",
            "The Risk Taker",
            "Outside the Box Thinker",
            "Marvelous Multitasker",
            "The Asker of Good Questions",
            "Outstanding Memory Award",
            "Office Lunch Expert",
            "Excellence in Organization",
        ]),
        has_drivers_license: false,
        job_search_address: JobSearchAddress {
            unit: DistanceUnit::Kilometers,
            max_job_distance: 30.0,
            latitude: 49.782281,
            longitude: 13.971284,
        },
        availability: availability(&[
            (5, "Friday"),
            (7, "Sunday"),
            (4, "Thursday"),
            (2, "Tuesday"),
            (1, "Monday"),
            (3, "Wednesday"),
        ]),
        rating: Some(2),
        is_active: true,
        phone: Some("+1 (847) 420-3272".to_string()),
        email: Some("fowler.andrews@comcubine.io".to_string()),
        age: Some(30),
        transportation: Some("CAR".to_string()),
    };

    vec![diana, andrews]
}
