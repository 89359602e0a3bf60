use anyhow::Context;
use anyhow::Result;
use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDateTime;
use clap::Parser;
use menu_sheet::Config;
use menu_sheet::DietFilter;
use menu_sheet::FilterSpec;
use menu_sheet::MenuData;
use menu_sheet::MenuSource;
use menu_sheet::MenuView;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "menu-sheet")]
#[command(about = "Render a restaurant menu published as a spreadsheet into menu JSON", long_about = None)]
struct Cli {
    /// Path to the JSON configuration
    #[arg(long)]
    config: PathBuf,

    /// Sheet URL or local path, overrides the configured menu URL
    #[arg(long)]
    source: Option<String>,

    /// Local copy read when the source is unavailable
    #[arg(long)]
    fallback: Option<PathBuf>,

    /// Reader's language, defaults to the language of the configured locale
    #[arg(long)]
    lang: Option<String>,

    /// Dietary restriction: all, vegetarian or vegan
    #[arg(long, default_value = "all")]
    diet: DietFilter,

    /// Allergen key to exclude, may be repeated
    #[arg(long = "exclude", value_name = "KEY")]
    exclude: Vec<String>,

    /// Reference time for the opening status (RFC 3339 or YYYY-MM-DDTHH:MM), defaults to now
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// Read a legacy sheet holding only the kitchen menu
    #[arg(long)]
    single_table: bool,
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("invalid time '{value}', expected RFC 3339 or YYYY-MM-DDTHH:MM"))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "menu_sheet=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;

    let mut source = MenuSource::from_config(&config);
    if let Some(location) = cli.source {
        source.url = Some(location);
    }
    if let Some(fallback) = cli.fallback {
        source.fallback = fallback;
    }
    let sheet = source.read().context("Failed to read menu sheet")?;
    if sheet.used_fallback {
        info!(fallback = %source.fallback.display(), "serving fallback menu");
    }

    let data = if cli.single_table {
        MenuData::parse_single_table(&sheet.text, &config)
    } else {
        MenuData::parse(&sheet.text, &config)
    };

    let language = cli.lang.unwrap_or_else(|| {
        config
            .regional
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_owned()
    });
    let chain = config.language_chain(&language);
    let filter = FilterSpec {
        diet: cli.diet,
        exclude_allergens: cli.exclude.iter().map(|key| key.trim().to_lowercase()).collect(),
    };
    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());

    let view = MenuView::build(&data, &config, &chain, &filter, now);
    let json = serde_json::to_string_pretty(&view).context("Failed to serialize menu view")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_reference_times() {
        let expected = NaiveDateTime::parse_from_str("2024-06-14T18:30", "%Y-%m-%dT%H:%M").unwrap();
        assert_eq!(parse_now("2024-06-14T18:30"), Ok(expected));
        assert_eq!(parse_now("2024-06-14T18:30:00+02:00"), Ok(expected));
        assert!(parse_now("tomorrow").is_err());
    }

    #[test]
    fn parse_arguments() {
        let cli = Cli::try_parse_from([
            "menu-sheet",
            "--config",
            "config.json",
            "--diet",
            "vegan",
            "--exclude",
            "milk",
            "--exclude",
            "gluten",
        ])
        .unwrap();
        assert_eq!(cli.diet, DietFilter::Vegan);
        assert_eq!(cli.exclude, vec!["milk", "gluten"]);
        assert!(!cli.single_table);
    }
}
