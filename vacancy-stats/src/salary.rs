use serde::Deserialize;
use serde_json::Value;

/// A vacancy exactly as the job board returned it.
/// The salary block inside differs between boards, only the estimators look into it.
pub type VacancyRecord = Value;

/// Salary bounds published with a vacancy
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>, currency: Option<String>) -> Self {
        Self { from, to, currency }
    }

    /// Estimate for this range, `None` unless it is paid in `currency`
    pub fn estimate_in(&self, currency: &str) -> Option<f64> {
        if self.currency.as_deref() != Some(currency) {
            return None;
        }
        calculate_salary(self.from, self.to)
    }
}

/// Single salary figure out of a possibly open range.
/// Boards publish an unset bound either as `null` or as `0`, both count as absent.
/// A lone lower bound is raised by 20%, a lone upper bound lowered by 20%.
pub fn calculate_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|value| *value > 0.0);
    let to = to.filter(|value| *value > 0.0);
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

/// Derives one salary value from a vacancy record
pub trait SalaryEstimator {
    fn estimate(&self, vacancy: &VacancyRecord) -> Option<f64>;
}

impl<F> SalaryEstimator for F
where
    F: Fn(&VacancyRecord) -> Option<f64>,
{
    fn estimate(&self, vacancy: &VacancyRecord) -> Option<f64> {
        self(vacancy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalarySummary {
    /// vacancies that yielded an estimate
    pub processed: u32,
    /// truncated mean of the estimates, `None` when nothing was processed
    pub average: Option<u64>,
}

pub fn aggregate<E>(vacancies: &[VacancyRecord], estimator: &E) -> SalarySummary
where
    E: SalaryEstimator + ?Sized,
{
    let salaries = vacancies
        .iter()
        .filter_map(|vacancy| estimator.estimate(vacancy))
        .collect::<Vec<f64>>();
    let processed = salaries.len() as u32;
    if salaries.is_empty() {
        return SalarySummary {
            processed,
            average: None,
        };
    }
    let mean = salaries.iter().sum::<f64>() / salaries.len() as f64;
    SalarySummary {
        processed,
        average: Some(mean as u64),
    }
}
