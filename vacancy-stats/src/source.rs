use std::fmt::Display;

use reqwest::header::HeaderMap;
use serde_json::Value;
use url::Url;

use crate::salary::{SalaryEstimator, VacancyRecord};
use crate::types::{Error, Result};
use crate::{headhunter, superjob};

/// The job boards statistics are collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    SuperJob,
    HeadHunter,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::SuperJob => "SuperJob",
            Source::HeadHunter => "HeadHunter",
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl SalaryEstimator for Source {
    fn estimate(&self, vacancy: &VacancyRecord) -> Option<f64> {
        match self {
            Source::SuperJob => superjob::predict_rub_salary(vacancy),
            Source::HeadHunter => headhunter::predict_rub_salary(vacancy),
        }
    }
}

/// How a board tells the size of a search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCount {
    /// Only the total is reported, pages are derived from the fixed page size
    FromTotal {
        total_field: &'static str,
        per_page: u32,
    },
    /// The board reports its page count itself
    Native {
        found_field: &'static str,
        pages_field: &'static str,
    },
}

impl PageCount {
    /// Returns `(page_count, vacancies_found)` out of a search response
    pub fn read(&self, url: &str, body: &Value) -> Result<(u32, u32)> {
        match self {
            PageCount::FromTotal {
                total_field,
                per_page,
            } => {
                let total = read_count(url, body, total_field)?;
                Ok((total.div_ceil((*per_page).max(1)), total))
            }
            PageCount::Native {
                found_field,
                pages_field,
            } => {
                let found = read_count(url, body, found_field)?;
                let pages = read_count(url, body, pages_field)?;
                Ok((pages, found))
            }
        }
    }
}

fn read_count(url: &str, body: &Value, field: &'static str) -> Result<u32> {
    body.get(field)
        .and_then(Value::as_u64)
        .map(|count| count.min(u32::MAX as u64) as u32)
        .ok_or_else(|| Error::MissingField {
            url: url.to_owned(),
            field,
        })
}

/// Everything the pagination walker needs to know about one job board
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    pub source: Source,
    pub url: String,
    pub headers: HeaderMap,
    /// query parameters shared by every request of a search
    pub params: Vec<(&'static str, String)>,
    pub keyword_param: &'static str,
    pub page_param: &'static str,
    /// field of the response holding the vacancies of a page
    pub items_field: &'static str,
    pub page_count: PageCount,
}

impl SourceDescriptor {
    pub fn keyword(language: &str) -> String {
        format!("Программист {}", language)
    }

    /// Search url for `language`, the probe request is the one without a page
    pub fn request_url(&self, language: &str, page: Option<u32>) -> Result<Url> {
        let mut params = self.params.clone();
        params.push((self.keyword_param, Self::keyword(language)));
        if let Some(page) = page {
            params.push((self.page_param, page.to_string()));
        }
        Ok(Url::parse_with_params(&self.url, &params)?)
    }
}
