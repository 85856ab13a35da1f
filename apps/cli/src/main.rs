use std::{num::NonZeroU32, path::PathBuf, sync::Arc, time::Duration};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{load_settings, spawn_remote_list, HttpTagService};
use shared::domain::{FetchState, QueryParameters, SortField, SortOrder, TagRecord};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Print one page of tag statistics")]
struct Args {
    /// One-based page number.
    #[arg(long, default_value_t = NonZeroU32::MIN)]
    page: NonZeroU32,
    #[arg(long)]
    page_size: Option<NonZeroU32>,
    #[arg(long)]
    sort: Option<SortField>,
    #[arg(long)]
    order: Option<SortOrder>,
    #[arg(long)]
    site: Option<String>,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn parameters(&self, defaults: QueryParameters) -> QueryParameters {
        QueryParameters {
            page_index: self.page.get() - 1,
            page_size: self.page_size.unwrap_or(defaults.page_size),
            sort_field: self.sort.unwrap_or(defaults.sort_field),
            sort_order: self.order.unwrap_or(defaults.sort_order),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(site) = &args.site {
        settings.site = site.clone();
    }
    if let Some(base_url) = &args.base_url {
        settings.api_base_url = base_url.clone();
    }

    let service = HttpTagService::from_settings(&settings).context("failed to set up tag service")?;
    let parameters = args.parameters(settings.initial_parameters());
    tracing::debug!(?parameters, site = %settings.site, "requesting tag page");
    let (handle, _driver) = spawn_remote_list(Arc::new(service), parameters);

    let mut rx = handle.subscribe();
    let settled = rx.wait_for(|s| s.state.is_settled());
    let snapshot = match settle_deadline(settings.request_timeout_secs) {
        Some(deadline) => tokio::time::timeout(deadline, settled)
            .await
            .context("timed out waiting for tags")?,
        None => settled.await,
    }
    .context("tag list driver stopped")?
    .clone();

    match snapshot.state {
        FetchState::Success(items) => {
            print!("{}", render_table(&items));
            Ok(())
        }
        FetchState::Failure(message) => bail!(message),
        FetchState::Idle | FetchState::Loading => bail!("tag request did not settle"),
    }
}

/// Outer wait on top of the transport timeout; none when that timeout is off.
fn settle_deadline(request_timeout_secs: u64) -> Option<Duration> {
    (request_timeout_secs > 0).then(|| Duration::from_secs(request_timeout_secs + 5))
}

fn render_table(items: &[TagRecord]) -> String {
    let name_width = items
        .iter()
        .map(|t| t.name.chars().count())
        .chain(std::iter::once("Tag".len()))
        .max()
        .unwrap_or_default();
    let count_width = items
        .iter()
        .map(|t| t.count.to_string().len())
        .chain(std::iter::once("Count".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!("{:<name_width$}  {:>count_width$}\n", "Tag", "Count");
    for tag in items {
        out.push_str(&format!(
            "{:<name_width$}  {:>count_width$}\n",
            tag.name, tag.count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_flag_is_one_based() {
        let args = Args::parse_from(["tags_cli", "--page", "3", "--sort", "name"]);
        let params = args.parameters(QueryParameters::default());
        assert_eq!(params.page_index, 2);
        assert_eq!(params.sort_field, SortField::Name);
        assert_eq!(params.sort_order, SortOrder::Desc);
        assert_eq!(params.page_size.get(), 10);
    }

    #[test]
    fn rejects_zero_page_and_unknown_sort() {
        assert!(Args::try_parse_from(["tags_cli", "--page", "0"]).is_err());
        assert!(Args::try_parse_from(["tags_cli", "--sort", "activity"]).is_err());
        assert!(Args::try_parse_from(["tags_cli", "--page-size", "0"]).is_err());
    }

    #[test]
    fn zero_request_timeout_waits_without_deadline() {
        assert_eq!(settle_deadline(0), None);
        assert_eq!(settle_deadline(30), Some(Duration::from_secs(35)));
    }

    #[test]
    fn renders_aligned_table() {
        let table = render_table(&[
            TagRecord::new("javascript", 500000),
            TagRecord::new("c", 7),
        ]);
        assert_eq!(
            table,
            "Tag          Count\njavascript  500000\nc                7\n"
        );
    }

    #[test]
    fn renders_header_for_empty_page() {
        assert_eq!(render_table(&[]), "Tag  Count\n");
    }
}
