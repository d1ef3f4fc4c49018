use indexmap::IndexMap;

use crate::pagination::PaginationWalker;
use crate::salary::aggregate;
use crate::source::{Source, SourceDescriptor};
use crate::transport::Transport;
use crate::types::{PageFetchFailed, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    pub vacancies_found: u32,
    pub vacancies_processed: u32,
    pub average_salary: Option<u64>,
}

/// Statistics of one job board, languages kept in the order they were queried
#[derive(Debug)]
pub struct SourceReport {
    pub source: Source,
    pub region: String,
    pub languages: IndexMap<String, LanguageStats>,
}

impl SourceReport {
    pub fn new(source: Source, region: &str) -> Self {
        Self {
            source,
            region: region.to_owned(),
            languages: IndexMap::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.source, self.region)
    }
}

#[derive(Debug)]
pub struct Collected {
    pub report: SourceReport,
    pub failed_pages: Vec<PageFetchFailed>,
}

/// Collects the statistics of every language from one job board.
/// Fails only if the board is unavailable, failed pages are handed back with the report.
pub async fn collect_statistics<T>(
    transport: &T,
    descriptor: &SourceDescriptor,
    languages: &[String],
    region: &str,
) -> Result<Collected>
where
    T: Transport + Sync + ?Sized,
{
    let walker = PaginationWalker::new(transport, descriptor);
    let mut report = SourceReport::new(descriptor.source, region);
    let mut failed_pages = Vec::new();
    for language in languages {
        log::info!("collecting {} vacancies for {}", descriptor.source, language);
        let listing = walker.list_all(language).await?;
        let summary = aggregate(&listing.vacancies, &descriptor.source);
        log::info!(
            "{}: {} found, {} fetched, {} with salary",
            language,
            listing.found,
            listing.vacancies.len(),
            summary.processed
        );
        report.languages.insert(
            language.to_owned(),
            LanguageStats {
                vacancies_found: listing.found,
                vacancies_processed: summary.processed,
                average_salary: summary.average,
            },
        );
        failed_pages.extend(listing.failed_pages);
    }
    Ok(Collected {
        report,
        failed_pages,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::headhunter::{self, HeadHunterConfig};
    use crate::superjob::{self, SuperJobConfig};
    use crate::transport::fake::{Reply, ScriptedTransport};
    use crate::types::Error;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn vacancy(from: Option<u32>, to: Option<u32>) -> Value {
        json!({"salary": {"from": from, "to": to, "currency": "RUR"}})
    }

    fn search(found: u32, pages: u32, items: Vec<Value>) -> Reply {
        Reply::Json(json!({"found": found, "pages": pages, "items": items}))
    }

    fn descriptor() -> SourceDescriptor {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        headhunter::descriptor(&HeadHunterConfig::default(), today).unwrap()
    }

    fn languages(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[tokio::test]
    async fn test_report_keeps_language_order() {
        let transport = ScriptedTransport::default()
            .reply("Программист Go", None, search(1, 1, vec![]))
            .reply("Программист Go", Some(0), search(1, 1, vec![vacancy(Some(100000), None)]))
            .reply("Программист Rust", None, search(0, 0, vec![]))
            .reply("Программист Python", None, search(900, 1, vec![]))
            .reply(
                "Программист Python",
                Some(0),
                search(
                    900,
                    1,
                    vec![
                        vacancy(Some(100000), Some(200000)),
                        vacancy(None, None),
                        json!({"salary": null}),
                    ],
                ),
            );
        let collected = collect_statistics(
            &transport,
            &descriptor(),
            &languages(&["Go", "Rust", "Python"]),
            "Moscow",
        )
        .await
        .expect("Collecting statistics failed");

        let report = collected.report;
        assert_eq!(report.title(), "HeadHunter Moscow");
        assert_eq!(
            report.languages.keys().collect::<Vec<_>>(),
            vec!["Go", "Rust", "Python"]
        );
        assert_eq!(
            report.languages["Go"],
            LanguageStats {
                vacancies_found: 1,
                vacancies_processed: 1,
                average_salary: Some(120000),
            }
        );
        assert_eq!(
            report.languages["Rust"],
            LanguageStats {
                vacancies_found: 0,
                vacancies_processed: 0,
                average_salary: None,
            }
        );
        assert_eq!(
            report.languages["Python"],
            LanguageStats {
                vacancies_found: 900,
                vacancies_processed: 1,
                average_salary: Some(150000),
            }
        );
        assert!(collected.failed_pages.is_empty());
    }

    #[tokio::test]
    async fn test_failed_pages_are_collected_across_languages() {
        let transport = ScriptedTransport::default()
            .reply("Программист Go", None, search(40, 2, vec![]))
            .reply("Программист Go", Some(0), Reply::Status(502))
            .reply("Программист Go", Some(1), search(40, 2, vec![vacancy(Some(90000), None)]))
            .reply("Программист Ruby", None, search(20, 1, vec![]))
            .reply("Программист Ruby", Some(0), Reply::Status(500));
        let collected = collect_statistics(
            &transport,
            &descriptor(),
            &languages(&["Go", "Ruby"]),
            "Moscow",
        )
        .await
        .expect("Collecting statistics failed");

        assert_eq!(collected.failed_pages.len(), 2);
        assert_eq!(collected.failed_pages[0].page, 0);
        assert!(collected.failed_pages[1].url.contains("page=0"));
        assert_eq!(collected.report.languages["Go"].vacancies_processed, 1);
        assert_eq!(collected.report.languages["Ruby"].vacancies_found, 20);
        assert_eq!(collected.report.languages["Ruby"].average_salary, None);
    }

    #[tokio::test]
    async fn test_collect_from_superjob_over_http() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/2.0/vacancies/")
            .match_query(mockito::Matcher::UrlEncoded(
                "keyword".into(),
                "Программист Scala".into(),
            ))
            .match_header("x-api-app-id", "secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "total": 2,
                    "objects": [
                        {"payment_from": 100000, "payment_to": 200000, "currency": "rub"},
                        {"payment_from": 0, "payment_to": 0, "currency": "rub"}
                    ]
                })
                .to_string(),
            )
            .expect(2)
            .create_async()
            .await;

        let config = SuperJobConfig::new("secret".to_owned());
        let descriptor =
            superjob::descriptor_for(&format!("{}/2.0/vacancies/", server.url()), &config)
                .unwrap();
        let collected = collect_statistics(
            &reqwest::Client::new(),
            &descriptor,
            &languages(&["Scala"]),
            "Moscow",
        )
        .await
        .expect("Collecting statistics failed");
        mock.assert_async().await;

        assert_eq!(collected.report.title(), "SuperJob Moscow");
        assert_eq!(
            collected.report.languages["Scala"],
            LanguageStats {
                vacancies_found: 2,
                vacancies_processed: 1,
                average_salary: Some(150000),
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_superjob_over_http() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/2.0/vacancies/")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error": {"code": 403, "message": "Invalid app_key"}}"#)
            .create_async()
            .await;

        let endpoint = format!("{}/2.0/vacancies/", server.url());
        let config = SuperJobConfig::new("wrong".to_owned());
        let descriptor = superjob::descriptor_for(&endpoint, &config).unwrap();
        let result = collect_statistics(
            &reqwest::Client::new(),
            &descriptor,
            &languages(&["Scala"]),
            "Moscow",
        )
        .await;
        match result {
            Err(e @ Error::SourceUnavailable { .. }) => {
                assert_eq!(e.to_string(), format!("{} is unavailable!", endpoint));
            }
            other => panic!("expected SourceUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unavailable_source_stops_collection() {
        let transport = ScriptedTransport::default()
            .reply("Программист Go", None, search(0, 0, vec![]))
            .reply("Программист Java", None, Reply::Status(503))
            .reply("Программист PHP", None, search(0, 0, vec![]));
        let result = collect_statistics(
            &transport,
            &descriptor(),
            &languages(&["Go", "Java", "PHP"]),
            "Moscow",
        )
        .await;
        assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
        assert_eq!(transport.request_count(), 2);
    }
}
