use crate::github::graphql::graphql_types::{
    CategoriesRepository, DiscussionNode, LabelsRepository, PageInfo, RepositoryResponse,
};

use super::{MarkdownContent, TimezoneOffset, format_datetime_with_timezone_offset};

/// Format a discussion into markdown with timezone conversion
pub fn discussion_body_markdown_with_timezone(
    discussion: &DiscussionNode,
    timezone: Option<&TimezoneOffset>,
) -> MarkdownContent {
    let mut content = String::new();

    content.push_str(&format!(
        "# DISCUSSION #{}: {}\n",
        discussion.number, discussion.title
    ));
    match &discussion.author {
        Some(author) => content.push_str(&format!("author: {}\n", author.login)),
        None => content.push_str("author: ghost\n"),
    }
    content.push_str(&format!("url: {}\n", discussion.url));
    content.push_str(&format!(
        "created: {}\n",
        format_datetime_with_timezone_offset(discussion.created_at, timezone)
    ));
    content.push_str(&format!(
        "updated: {}\n",
        format_datetime_with_timezone_offset(discussion.updated_at, timezone)
    ));

    if !discussion.labels.nodes.is_empty() {
        let labels = discussion
            .labels
            .nodes
            .iter()
            .map(|label| label.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        content.push_str(&format!("labels: {}\n", labels));
    }

    // Prefer the markdown source, then plain text. HTML is only useful as JSON.
    if let Some(body) = discussion.body.as_ref().or(discussion.body_text.as_ref()) {
        content.push_str("\n## body\n");
        content.push_str(body);
        content.push('\n');
    }

    MarkdownContent(content)
}

/// Format one page of discussions, followed by the pagination footer
pub fn discussion_page_markdown_with_timezone<'a>(
    discussions: impl IntoIterator<Item = &'a DiscussionNode>,
    page_info: &PageInfo,
    total_count: u64,
    timezone: Option<&TimezoneOffset>,
) -> MarkdownContent {
    let mut content = String::new();

    for discussion in discussions {
        content.push_str(&discussion_body_markdown_with_timezone(discussion, timezone).0);
        content.push_str("---\n");
    }

    content.push_str(&format!("total: {}\n", total_count));
    if let Some(cursor) = page_info.next_cursor() {
        content.push_str(&format!("next cursor: {}\n", cursor));
    }

    MarkdownContent(content)
}

pub fn categories_markdown(categories: &RepositoryResponse<CategoriesRepository>) -> MarkdownContent {
    let mut content = String::from("## Discussion Categories\n");
    if let Some(repository) = &categories.repository {
        for category in &repository.discussion_categories.nodes {
            content.push_str(&format!("- {} ({})\n", category.name, category.id));
        }
    }
    MarkdownContent(content)
}

pub fn labels_markdown(labels: &RepositoryResponse<LabelsRepository>) -> MarkdownContent {
    let mut content = String::from("## Labels\n");
    if let Some(repository) = &labels.repository {
        for label in &repository.labels.nodes {
            content.push_str(&format!("- {} #{}\n", label.name, label.color));
        }
    }
    MarkdownContent(content)
}
