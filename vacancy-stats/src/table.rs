use crate::statistics::SourceReport;
use crate::types::PageFetchFailed;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

fn border(widths: &[usize], title: Option<&str>) -> String {
    let line = widths.iter().fold(String::from("+"), |mut line, width| {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
        line
    });
    match title {
        // the title replaces the start of the top border when it fits
        Some(title) if title.chars().count() + 2 <= line.chars().count() => {
            let skip = title.chars().count() + 1;
            format!("+{}{}", title, line.chars().skip(skip).collect::<String>())
        }
        _ => line,
    }
}

fn row(widths: &[usize], cells: &[String]) -> String {
    cells
        .iter()
        .zip(widths)
        .fold(String::from("|"), |mut row, (cell, width)| {
            row.push_str(&format!(" {:<width$} |", cell, width = *width));
            row
        })
}

/// Renders a report as an ASCII table titled with the board and region
pub fn render(report: &SourceReport) -> String {
    let header = HEADER.iter().map(|cell| cell.to_string()).collect::<Vec<_>>();
    let rows = report
        .languages
        .iter()
        .map(|(language, stats)| {
            vec![
                language.to_owned(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats
                    .average_salary
                    .map(|salary| salary.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = header
        .iter()
        .map(|cell| cell.chars().count())
        .collect::<Vec<_>>();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let title = report.title();
    let mut lines = vec![
        border(&widths, Some(title.as_str())),
        row(&widths, &header),
        border(&widths, None),
    ];
    lines.extend(rows.iter().map(|cells| row(&widths, cells)));
    lines.push(border(&widths, None));
    lines.join("\n")
}

/// Lists the urls of the pages left out of the statistics, `None` if there are none
pub fn warning_summary(failed_pages: &[PageFetchFailed]) -> Option<String> {
    if failed_pages.is_empty() {
        return None;
    }
    let mut lines = vec!["Some sources are unavailable! Statistics excluded these sources:".to_owned()];
    lines.extend(failed_pages.iter().map(|failure| failure.url.clone()));
    Some(lines.join("\n"))
}
