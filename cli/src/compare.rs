use chrono::Local;
use reqwest::Client;
use vacancy_stats::types::Result;
use vacancy_stats::{
    collect_statistics, headhunter, superjob, table, PageFetchFailed, SourceDescriptor,
    SourceReport,
};

use crate::{Cli, Target};

const USER_AGENT: &str = concat!("vacancy-stats/", env!("CARGO_PKG_VERSION"));

fn descriptor(target: Target, args: &Cli) -> Result<SourceDescriptor> {
    match target {
        Target::Superjob => superjob::descriptor(&args.superjob_config()),
        Target::Headhunter => {
            headhunter::descriptor(&args.headhunter_config(), Local::now().date_naive())
        }
    }
}

/// Collects the statistics of every requested board and prints them.
/// Returns early with the error of the first board that can't be reached.
pub async fn compare(args: &Cli) -> Result<()> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let mut reports = Vec::with_capacity(args.site.len());
    let mut failed_pages = Vec::new();
    for target in args.site.iter().copied() {
        let descriptor = descriptor(target, args)?;
        log::info!(
            "collecting statistics for {} languages from {}",
            args.languages.len(),
            descriptor.source
        );
        let collected =
            collect_statistics(&client, &descriptor, &args.languages, &args.region).await?;
        failed_pages.extend(collected.failed_pages);
        reports.push(collected.report);
    }

    println!("{}", output(&reports, &failed_pages));
    Ok(())
}

/// Warning summary first, then a blank line, then the tables separated by blank lines
fn output(reports: &[SourceReport], failed_pages: &[PageFetchFailed]) -> String {
    let tables = reports.iter().map(table::render).collect::<Vec<_>>();
    match table::warning_summary(failed_pages) {
        Some(warning) => format!("{}\n\n{}", warning, tables.join("\n\n")),
        None => format!("\n{}", tables.join("\n\n")),
    }
}
