use serde_json::Value;
use url::Url;

use crate::salary::VacancyRecord;
use crate::source::SourceDescriptor;
use crate::transport::Transport;
use crate::types::{Error, PageFetchFailed, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub page_count: u32,
    pub found: u32,
}

#[derive(Debug)]
pub struct Listing {
    pub found: u32,
    /// vacancies of every page that could be fetched, in page order
    pub vacancies: Vec<VacancyRecord>,
    pub failed_pages: Vec<PageFetchFailed>,
}

/// Walks every result page of a search on one job board, one request at a time
pub struct PaginationWalker<'a, T: ?Sized> {
    transport: &'a T,
    descriptor: &'a SourceDescriptor,
}

impl<'a, T> PaginationWalker<'a, T>
where
    T: Transport + Sync + ?Sized,
{
    pub fn new(transport: &'a T, descriptor: &'a SourceDescriptor) -> Self {
        Self {
            transport,
            descriptor,
        }
    }

    fn unavailable(&self, source: Error) -> Error {
        Error::SourceUnavailable {
            url: self.descriptor.url.clone(),
            source: Box::new(source),
        }
    }

    /// Learns how many vacancies and pages a search has.
    /// Any failure here means the board can't be used at all.
    pub async fn probe(&self, language: &str) -> Result<Probe> {
        let url = self.descriptor.request_url(language, None)?;
        let body = self
            .transport
            .get_json(&url, &self.descriptor.headers)
            .await
            .map_err(|e| self.unavailable(e))?;
        let (page_count, found) = self
            .descriptor
            .page_count
            .read(url.as_str(), &body)
            .map_err(|e| self.unavailable(e))?;
        log::debug!(
            "{} reports {} vacancies on {} pages for {}",
            self.descriptor.source,
            found,
            page_count,
            language
        );
        Ok(Probe { page_count, found })
    }

    async fn fetch_page(&self, url: &Url) -> Result<Vec<VacancyRecord>> {
        let body = self
            .transport
            .get_json(url, &self.descriptor.headers)
            .await?;
        take_items(url, body, self.descriptor.items_field)
    }

    /// Probes the search and collects the vacancies of all its pages.
    /// Pages that fail are skipped and reported in the listing, they are not retried.
    pub async fn list_all(&self, language: &str) -> Result<Listing> {
        let probe = self.probe(language).await?;
        let mut vacancies = Vec::new();
        let mut failed_pages = Vec::new();
        for page in 0..probe.page_count {
            let url = self.descriptor.request_url(language, Some(page))?;
            match self.fetch_page(&url).await {
                Ok(items) => vacancies.extend(items),
                Err(e) => {
                    let failure = PageFetchFailed {
                        url: url.to_string(),
                        page,
                        source: e,
                    };
                    log::error!("{}", failure);
                    failed_pages.push(failure);
                }
            }
        }
        Ok(Listing {
            found: probe.found,
            vacancies,
            failed_pages,
        })
    }
}

fn take_items(url: &Url, body: Value, field: &'static str) -> Result<Vec<VacancyRecord>> {
    match body {
        Value::Object(mut map) => match map.remove(field) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(Error::MissingField {
                url: url.to_string(),
                field,
            }),
        },
        _ => Err(Error::MissingField {
            url: url.to_string(),
            field,
        }),
    }
}
