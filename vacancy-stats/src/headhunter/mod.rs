use chrono::{Days, NaiveDate};
use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::salary::{SalaryRange, VacancyRecord};
use crate::source::{PageCount, Source, SourceDescriptor};
use crate::types::{Error, Result};

pub const VACANCIES_URL: &str = "https://api.hh.ru/vacancies";
/// HeadHunter's code for rubles
pub const CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<SalaryRange>,
}

/// Estimated ruble salary of a hh.ru vacancy
pub fn predict_rub_salary(vacancy: &VacancyRecord) -> Option<f64> {
    let salary_is_block = vacancy
        .get("salary")
        .map_or(true, |salary| salary.is_object() || salary.is_null());
    if !vacancy.is_object() || !salary_is_block {
        log::trace!("skipping malformed headhunter vacancy: {}", vacancy);
        return None;
    }
    let vacancy = match Vacancy::deserialize(vacancy) {
        Ok(vacancy) => vacancy,
        Err(e) => {
            log::trace!("skipping malformed headhunter vacancy: {}", e);
            return None;
        }
    };
    vacancy.salary?.estimate_in(CURRENCY)
}

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    /// hh.ru region id, 1 is Moscow
    pub area: u32,
    /// only vacancies published within this many days are searched
    pub period_days: u32,
    pub per_page: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            area: 1,
            period_days: 31,
            per_page: 20,
        }
    }
}

/// `(date_from, date_to)` of the publication window ending `today`
pub fn publication_window(today: NaiveDate, period_days: u32) -> Result<(NaiveDate, NaiveDate)> {
    let date_from = today
        .checked_sub_days(Days::new(period_days as u64))
        .ok_or(Error::InvalidPeriod(period_days))?;
    Ok((date_from, today))
}

pub fn descriptor(config: &HeadHunterConfig, today: NaiveDate) -> Result<SourceDescriptor> {
    descriptor_for(VACANCIES_URL, config, today)
}

pub fn descriptor_for(
    url: &str,
    config: &HeadHunterConfig,
    today: NaiveDate,
) -> Result<SourceDescriptor> {
    let (date_from, date_to) = publication_window(today, config.period_days)?;
    Ok(SourceDescriptor {
        source: Source::HeadHunter,
        url: url.to_owned(),
        headers: HeaderMap::new(),
        params: vec![
            ("area", config.area.to_string()),
            ("vacancy_search_fields", "name".to_owned()),
            ("per_page", config.per_page.to_string()),
            ("date_from", date_from.format("%Y-%m-%d").to_string()),
            ("date_to", date_to.format("%Y-%m-%d").to_string()),
        ],
        keyword_param: "text",
        page_param: "page",
        items_field: "items",
        page_count: PageCount::Native {
            found_field: "found",
            pages_field: "pages",
        },
    })
}
