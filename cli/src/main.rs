mod compare;

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use dotenv::dotenv;
use vacancy_stats::headhunter::HeadHunterConfig;
use vacancy_stats::superjob::SuperJobConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Superjob,
    Headhunter,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare vacancy counts and salaries per programming language", long_about = None)]
pub struct Cli {
    /// Job boards to collect statistics from, in output order
    #[clap(long, value_enum, default_values_t = [Target::Superjob, Target::Headhunter])]
    site: Vec<Target>,

    /// Programming languages to search for, in output order
    #[clap(long = "language", default_values_t = DEFAULT_LANGUAGES.map(String::from))]
    languages: Vec<String>,

    /// Region name shown in the table titles
    #[clap(long, default_value = "Moscow")]
    region: String,

    /// superjob.ru application secret key
    #[clap(long, env = "SUPERJOB_SECRET_KEY", hide_env_values = true)]
    superjob_key: Option<String>,

    #[clap(long, default_value_t = 4)]
    superjob_town: u32,

    #[clap(long, default_value_t = 48)]
    superjob_catalogue: u32,

    #[clap(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    superjob_per_page: u32,

    #[clap(long, default_value_t = 1)]
    headhunter_area: u32,

    /// Only vacancies published within this many days are counted
    #[clap(long, default_value_t = 31, value_parser = clap::value_parser!(u32).range(1..=365))]
    headhunter_period: u32,

    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
    headhunter_per_page: u32,
}

impl Cli {
    fn superjob_config(&self) -> SuperJobConfig {
        SuperJobConfig {
            secret_key: self.superjob_key.clone().unwrap_or_default(),
            town: self.superjob_town,
            catalogue: self.superjob_catalogue,
            per_page: self.superjob_per_page,
        }
    }

    fn headhunter_config(&self) -> HeadHunterConfig {
        HeadHunterConfig {
            area: self.headhunter_area,
            period_days: self.headhunter_period,
            per_page: self.headhunter_per_page,
        }
    }
}

const DEFAULT_LANGUAGES: [&str; 12] = [
    "Swift",
    "TypeScript",
    "Scala",
    "Objective-C",
    "Go",
    "C/C++",
    "C#",
    "PHP",
    "Ruby",
    "Python",
    "Java",
    "JavaScript",
];

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if args.site.contains(&Target::Superjob) && args.superjob_key.is_none() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "--superjob-key or SUPERJOB_SECRET_KEY is required to query superjob.ru",
            )
            .exit();
    }
    if let Err(e) = compare::compare(&args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
