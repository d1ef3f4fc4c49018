use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::salary::{SalaryRange, VacancyRecord};
use crate::source::{PageCount, Source, SourceDescriptor};
use crate::types::Result;

pub const VACANCIES_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const CURRENCY: &str = "rub";
const APP_ID_HEADER: &str = "x-api-app-id";

#[derive(Debug, Deserialize)]
struct Vacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl From<Vacancy> for SalaryRange {
    fn from(vacancy: Vacancy) -> Self {
        SalaryRange::new(vacancy.payment_from, vacancy.payment_to, vacancy.currency)
    }
}

/// Estimated ruble salary of a superjob.ru vacancy
pub fn predict_rub_salary(vacancy: &VacancyRecord) -> Option<f64> {
    if !vacancy.is_object() {
        log::trace!("skipping superjob vacancy that is not an object: {}", vacancy);
        return None;
    }
    let vacancy = match Vacancy::deserialize(vacancy) {
        Ok(vacancy) => vacancy,
        Err(e) => {
            log::trace!("skipping malformed superjob vacancy: {}", e);
            return None;
        }
    };
    SalaryRange::from(vacancy).estimate_in(CURRENCY)
}

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    /// application secret key, sent with every request
    pub secret_key: String,
    /// superjob.ru town id, 4 is Moscow
    pub town: u32,
    /// catalogue id, 48 is "Development, programming"
    pub catalogue: u32,
    pub per_page: u32,
}

impl SuperJobConfig {
    pub fn new(secret_key: String) -> Self {
        Self {
            secret_key,
            town: 4,
            catalogue: 48,
            per_page: 100,
        }
    }
}

pub fn descriptor(config: &SuperJobConfig) -> Result<SourceDescriptor> {
    descriptor_for(VACANCIES_URL, config)
}

pub fn descriptor_for(url: &str, config: &SuperJobConfig) -> Result<SourceDescriptor> {
    let mut headers = HeaderMap::new();
    let mut app_id = HeaderValue::from_str(&config.secret_key)?;
    app_id.set_sensitive(true);
    headers.insert(HeaderName::from_static(APP_ID_HEADER), app_id);
    Ok(SourceDescriptor {
        source: Source::SuperJob,
        url: url.to_owned(),
        headers,
        params: vec![
            ("town", config.town.to_string()),
            ("catalogues", config.catalogue.to_string()),
            ("count", config.per_page.to_string()),
        ],
        keyword_param: "keyword",
        page_param: "page",
        items_field: "objects",
        page_count: PageCount::FromTotal {
            total_field: "total",
            per_page: config.per_page,
        },
    })
}
