//! One run of the tool: dates, fetch, sniff, extract, filter, report.

use crate::args::Cli;
use crate::error::CliError;
use crate::export::{self, OutputPaths, RAW_DUMP_FILE};
use crate::render::{self, ConsoleOptions};
use chrono::NaiveDate;
use menu_client::MenuClient;
use menu_data::{DateRange, ExtractOptions, MenuDocument, MenuError, parse_start_date};
use pipeline::{ExclusionSet, MenuContext, MenuReport, build_report};
use std::io::Write;
use tracing::{info, warn};

/// Work out the requested dates from the arguments.
pub fn requested_dates(cli: &Cli, today: NaiveDate) -> Result<DateRange, CliError> {
    let start = parse_start_date(cli.start.as_deref(), today).map_err(CliError::InvalidInput)?;
    let days = u32::try_from(cli.days).map_err(|_| {
        CliError::InvalidInput(MenuError::InvalidInput {
            field: "days".to_string(),
            value: cli.days.to_string(),
        })
    })?;
    DateRange::build(start, days, cli.skip_weekends).map_err(CliError::InvalidInput)
}

/// Run the whole pipeline, writing the report to `out` and hints to `err`.
///
/// Nothing is written to disk before the fetch succeeds. Once a body has
/// arrived it is dumped even if it turns out to be unparseable.
pub async fn run(
    cli: &Cli,
    today: NaiveDate,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<MenuReport, CliError> {
    let dates = requested_dates(cli, today)?;
    info!(
        "Requested {} dates from {} to {}",
        dates.len(),
        dates.first(),
        dates.last()
    );

    let client = MenuClient::new(cli.district_config())?;
    let raw = client.fetch_range(&dates).await?;

    let paths = OutputPaths::in_dir(&cli.out_dir);
    export::write_raw(&paths.raw, &raw)?;

    let document = MenuDocument::sniff(&raw).map_err(CliError::Format)?;
    info!("Response format: {}", document.format_name());

    let mut options = ExtractOptions::new(cli.meal.clone());
    options.category = cli.category.clone();
    let items = document.extract(&options);

    let exclusions = ExclusionSet::district_default().with_patterns(&cli.ignore);
    let context = MenuContext::new(dates, exclusions);
    let report = build_report(items, &context)?;

    let console = ConsoleOptions {
        max_items: cli.max_items,
        show_excluded: cli.show_excluded,
    };
    render::render_report(out, &cli.meal, &report, console)
        .map_err(CliError::output("<stdout>"))?;
    export::write_report(&paths, &report)?;

    if report.total_kept() == 0 {
        warn!("No kept items for meal {:?}", cli.meal);
        writeln!(err, "{}", render::empty_menu_hint(RAW_DUMP_FILE, &cli.meal))
            .map_err(CliError::output("<stderr>"))?;
    }

    Ok(report)
}
