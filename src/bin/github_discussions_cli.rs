use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use github_discussions::formatter::{
    TimezoneOffset, categories_markdown, discussion_body_markdown_with_timezone,
    discussion_page_markdown_with_timezone, labels_markdown,
};
use github_discussions::types::{
    ContentOptions, DiscussionCategoryId, DiscussionNumber, QueryByCategoryIdParams,
    QueryByCategoryNameParams, QueryByNumberParams, RepositoryId, SearchCursor, SearchFilter,
    SearchParams,
};
use github_discussions::{CategoryLookup, DiscussionsClient, GitHubClient};

#[derive(Parser)]
#[command(name = "github-discussions-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query and search the Discussions of a GitHub repository")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Repository to query - "owner/name" or a GitHub URL (e.g., https://github.com/owner/name)
    #[arg(short, long, global = true)]
    repository: Option<String>,
    /// Output format for results - markdown for reading, json for programmatic use
    #[arg(long, global = true, default_value = "markdown")]
    format: OutputFormat,
    /// GitHub personal access token (can also be set via GITHUB_DISCUSSIONS_GITHUB_TOKEN or GITHUB_TOKEN environment variables)
    #[arg(long, global = true)]
    github_token: Option<String>,
    /// Timezone for datetime formatting in markdown output (e.g., "JST", "+09:00", "UTC")
    #[arg(long, global = true)]
    timezone: Option<String>,
    /// Request timeout in seconds for GitHub API calls (default: 10 seconds)
    #[arg(long, global = true)]
    request_timeout: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Args)]
struct PageArgs {
    /// Page size (default: 100, GitHub maximum: 100)
    #[arg(long)]
    first: Option<u32>,
    /// Cursor printed by a previous page
    #[arg(long)]
    cursor: Option<String>,
    /// Include the markdown body
    #[arg(long)]
    body: bool,
    /// Include the rendered HTML body
    #[arg(long)]
    body_html: bool,
    /// Include the plain text body
    #[arg(long)]
    body_text: bool,
}

impl PageArgs {
    fn content(&self) -> ContentOptions {
        ContentOptions {
            body: self.body,
            body_html: self.body_html,
            body_text: self.body_text,
        }
    }

    fn cursor(&self) -> Option<SearchCursor> {
        self.cursor.clone().map(SearchCursor)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the discussion categories of the repository
    Categories,
    /// List the labels of the repository ordered by name
    Labels,
    /// List discussions of one category, newest first
    List {
        /// Opaque category id (see `categories`)
        #[arg(long, conflicts_with = "category_name", required_unless_present = "category_name")]
        category_id: Option<String>,
        /// Exact category name, e.g. "Q&A"
        #[arg(long)]
        category_name: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Fetch a single discussion by number
    Get {
        #[arg(value_parser = clap::value_parser!(i32).range(1..))]
        number: i32,
        /// Include the markdown body
        #[arg(long)]
        body: bool,
        /// Include the rendered HTML body
        #[arg(long)]
        body_html: bool,
        /// Include the plain text body
        #[arg(long)]
        body_text: bool,
    },
    /// Search discussions by free text, or by label and category
    Search {
        /// Free text in GitHub search syntax (e.g., "is:answered performance")
        #[arg(short, long, conflicts_with_all = ["label", "category"])]
        query: Option<String>,
        /// Label name to filter on
        #[arg(long)]
        label: Option<String>,
        /// Category name to filter on
        #[arg(long)]
        category: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("github_discussions=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let github_token = cli
        .github_token
        .or_else(|| env::var("GITHUB_DISCUSSIONS_GITHUB_TOKEN").ok())
        .or_else(|| env::var("GITHUB_TOKEN").ok());

    let repository = cli
        .repository
        .context("--repository is required (owner/name or GitHub URL)")?;
    let repository_id = RepositoryId::parse(&repository).map_err(|e| anyhow::anyhow!(e))?;

    let timezone = cli
        .timezone
        .and_then(|tz| TimezoneOffset::parse(&tz))
        .unwrap_or_else(TimezoneOffset::from_local);

    let github_client = GitHubClient::new(
        github_token,
        cli.request_timeout.map(Duration::from_secs),
    )?;
    let client = DiscussionsClient::with_executor(
        github_client,
        repository_id.owner,
        repository_id.repository_name,
    );

    let output = Output {
        format: cli.format,
        timezone,
    };

    match cli.command {
        Commands::Categories => {
            let categories = client.query_categories().await?;
            output.print(&categories, || categories_markdown(&categories).0)?;
        }
        Commands::Labels => {
            let labels = client.query_labels().await?;
            output.print(&labels, || labels_markdown(&labels).0)?;
        }
        Commands::List {
            category_id,
            category_name,
            page,
        } => {
            let response = match (category_id, category_name) {
                (Some(category_id), _) => {
                    let params = QueryByCategoryIdParams {
                        first: page.first,
                        category_id: DiscussionCategoryId(category_id),
                        content: page.content(),
                        cursor: page.cursor(),
                    };
                    client.query_by_category_id(params).await?
                }
                (None, Some(name)) => {
                    let params = QueryByCategoryNameParams {
                        name: name.clone(),
                        first: page.first,
                        content: page.content(),
                        cursor: page.cursor(),
                    };
                    match client.query_by_category_name(params).await? {
                        CategoryLookup::Found(response) => response,
                        CategoryLookup::NotFound => {
                            println!("No discussion category named '{}'", name);
                            return Ok(());
                        }
                    }
                }
                (None, None) => anyhow::bail!("either --category-id or --category-name is required"),
            };

            output.print(&response, || match &response.repository {
                Some(repository) => {
                    let discussions = &repository.discussions;
                    discussion_page_markdown_with_timezone(
                        &discussions.nodes,
                        &discussions.page_info,
                        discussions.total_count,
                        Some(&output.timezone),
                    )
                    .0
                }
                None => "Repository not found.".to_string(),
            })?;
        }
        Commands::Get {
            number,
            body,
            body_html,
            body_text,
        } => {
            let params = QueryByNumberParams {
                number: DiscussionNumber::new(number),
                content: ContentOptions {
                    body,
                    body_html,
                    body_text,
                },
            };
            let response = client.query_by_number(params).await?;
            output.print(&response, || {
                match response
                    .repository
                    .as_ref()
                    .and_then(|repository| repository.discussion.as_ref())
                {
                    Some(discussion) => {
                        discussion_body_markdown_with_timezone(discussion, Some(&output.timezone)).0
                    }
                    None => format!("Discussion #{} not found.", number),
                }
            })?;
        }
        Commands::Search {
            query,
            label,
            category,
            page,
        } => {
            let filter = match query {
                Some(query) => SearchFilter::Query(query),
                None => SearchFilter::LabelAndCategory { label, category },
            };
            let params = SearchParams {
                filter,
                first: page.first,
                content: page.content(),
                cursor: page.cursor(),
            };
            let response = client.search(params).await?;
            output.print(&response, || {
                if response.search.nodes.is_empty() {
                    return "No results found.".to_string();
                }
                discussion_page_markdown_with_timezone(
                    response.discussions(),
                    &response.search.page_info,
                    response.search.total_count,
                    Some(&output.timezone),
                )
                .0
            })?;
        }
    }

    Ok(())
}

struct Output {
    format: OutputFormat,
    timezone: TimezoneOffset,
}

impl Output {
    fn print<T: serde::Serialize>(&self, value: &T, markdown: impl FnOnce() -> String) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Markdown => println!("{}", markdown()),
        }
        Ok(())
    }
}
