//! Dashboard commands that talk to the API.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use super::args::CliCommand;
use crate::api::{DETAIL_PATH, SHOWS_PATH};
use crate::cli_output::{
    icons, print_footer, print_header, print_section_end, print_section_start, print_show_detail,
    print_show_list, print_stats, print_step_line, print_troubleshoot,
};
use crate::error::{ErrorCategory, ErrorContext, ResultExt};
use crate::models::{ShowQuery, StatKind};
use crate::state::{FetchOutcome, ShowStore};
use crate::traits::HttpClient;

/// Lines shown per list in the summary.
const SUMMARY_LIST_LIMIT: usize = 10;

/// Lines shown for filter results.
const FILTER_LIST_LIMIT: usize = 50;

/// Run a command that needs the API.
///
/// `Version`, `Help` and `Invalid` are handled by
/// [`run_cli_command`](super::run_cli_command) and are rejected here.
pub async fn run_dashboard_command<C: HttpClient>(
    store: &ShowStore<C>,
    command: &CliCommand,
) -> Result<()> {
    match command {
        CliCommand::Summary => {
            load(store).await?;
            if !store.fetch_area_stats().await {
                print_step_line(icons::WARNING, "Area distribution unavailable");
            }
            print_summary(store);
        }
        CliCommand::Category(category) => {
            load(store).await?;
            let shows = store.filter_by_category(category);
            print_show_list(&format!("CATEGORY {}", category), &shows, FILTER_LIST_LIMIT);
        }
        CliCommand::Year(year) => {
            load(store).await?;
            let shows = store.filter_by_year(*year);
            print_show_list(&format!("YEAR {}", year), &shows, FILTER_LIST_LIMIT);
        }
        CliCommand::Rate { min, max } => {
            load(store).await?;
            let shows = store.filter_by_rate_range(*min, *max);
            print_show_list(&format!("RATED {} TO {}", min, max), &shows, FILTER_LIST_LIMIT);
        }
        CliCommand::Search(keyword) => {
            let query = ShowQuery::new()
                .with_keyword(keyword.as_str())
                .with_page(1, FILTER_LIST_LIMIT as u32);
            let page = store
                .api()
                .fetch_show_page(&query)
                .await
                .with_context(|| ErrorContext::new("search").with_endpoint(SHOWS_PATH))?;
            print_show_list(&format!("SEARCH \"{}\"", keyword), &page.items, FILTER_LIST_LIMIT);
            if page.total > page.items.len() as u64 {
                print_step_line(icons::WARNING, &format!("{} matches in total", page.total));
            }
        }
        CliCommand::Detail(url) => match store
            .api()
            .fetch_show_detail(url)
            .await
            .with_context(|| ErrorContext::new("detail").with_endpoint(DETAIL_PATH))?
        {
            Some(show) => {
                let cover = store.api().proxy_image_url(&show.cover);
                print_show_detail(&show, &cover);
            }
            None => {
                print_step_line(icons::FAILURE, &format!("No show with URL {}", url));
                return Err(eyre!("show not found: {}", url));
            }
        },
        CliCommand::Version | CliCommand::Help | CliCommand::Invalid(_) => {
            return Err(eyre!("{:?} does not use the API", command));
        }
    }
    Ok(())
}

async fn load<C: HttpClient>(store: &ShowStore<C>) -> Result<()> {
    match store.fetch_all_data().await {
        FetchOutcome::Loaded(summary) => {
            if summary.skipped_shows > 0 {
                print_step_line(
                    icons::WARNING,
                    &format!("{} malformed show records skipped", summary.skipped_shows),
                );
            }
            Ok(())
        }
        FetchOutcome::Failed { stage, reason } => {
            print_step_line(icons::FAILURE, &format!("Loading {} failed: {}", stage, reason));
            print_troubleshoot(&[ErrorCategory::Network.recovery_hint()]);
            Err(eyre!("failed to load {}: {}", stage, reason))
        }
        FetchOutcome::AlreadyInFlight => Err(eyre!("a fetch is already running")),
    }
}

fn print_summary<C: HttpClient>(store: &ShowStore<C>) {
    let shows = store.shows();
    let high_rated = store.high_rated_shows();
    let settings = store.settings();

    print_header("TV DASHBOARD");
    print_section_start("DATASET");
    print_step_line(icons::SUCCESS, &format!("{} shows", shows.len()));
    print_step_line(
        icons::SUCCESS,
        &format!(
            "{} rated {} or higher",
            high_rated.len(),
            settings.high_rated_threshold
        ),
    );
    print_section_end();

    print_show_list("HIGH RATED", &high_rated, SUMMARY_LIST_LIMIT);
    print_show_list("MOST RECENT", &store.recent_shows(), SUMMARY_LIST_LIMIT);

    for kind in StatKind::ALL {
        let title = format!("{} DISTRIBUTION", kind.as_str().to_uppercase());
        print_stats(&title, &store.stats(kind));
    }

    print_footer(icons::SUCCESS, &format!("LOADED (revision {})", store.revision()));
}
