use crate::core::error::MatchError;
use crate::models::Job;

/// Parse a currency-prefixed bill rate such as `"$17.60"` into a number.
///
/// Exactly one leading currency symbol is required and stripped; the rest
/// must be a finite decimal.
pub fn parse_bill_rate(raw: &str) -> Option<f64> {
    let mut chars = raw.trim().chars();
    let symbol = chars.next()?;
    if symbol.is_ascii_digit() || symbol == '.' || symbol == '-' || symbol == '+' {
        return None;
    }

    chars.as_str().parse::<f64>().ok().filter(|rate| rate.is_finite())
}

/// Numeric pay rate of a job, used for ranking
pub fn numeric_bill_rate(job: &Job) -> Result<f64, MatchError> {
    parse_bill_rate(&job.bill_rate).ok_or_else(|| {
        MatchError::malformed(&job.job_id, format!("unparseable bill rate {:?}", job.bill_rate))
    })
}

/// Sort by rate, highest first.
///
/// The sort is stable: equal rates keep their input order.
pub fn rank_by_rate_desc<T>(items: &mut [T], rate: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| rate(b).total_cmp(&rate(a)));
}
