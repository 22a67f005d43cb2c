//! Output formatting utilities

use crate::application::{AuthorLine, AuthorReport, CatalogSummary, MagazineLine, MagazineReport};

const NONE: &str = "none";

pub fn format_summary(summary: &CatalogSummary) -> String {
    format!(
        "authors: {}\nmagazines: {}\narticles: {}\n",
        summary.authors, summary.magazines, summary.articles
    )
}

pub fn format_author_list(authors: &[AuthorLine]) -> String {
    if authors.is_empty() {
        return "No authors found".to_string();
    }

    let mut output = String::new();
    for author in authors {
        output.push_str(&format!(
            "{}  ({} {})\n",
            author.name,
            author.article_count,
            plural(author.article_count, "article", "articles")
        ));
    }
    output
}

pub fn format_magazine_list(magazines: &[MagazineLine]) -> String {
    if magazines.is_empty() {
        return "No magazines found".to_string();
    }

    let mut output = String::new();
    for magazine in magazines {
        output.push_str(&format_magazine_line(magazine));
        output.push('\n');
    }
    output
}

pub fn format_magazine_line(magazine: &MagazineLine) -> String {
    format!(
        "{} [{}]  ({} {})",
        magazine.name,
        magazine.category,
        magazine.article_count,
        plural(magazine.article_count, "article", "articles")
    )
}

pub fn format_author_report(report: &AuthorReport) -> String {
    let mut output = format!("{}\n", report.name);

    output.push_str("articles:\n");
    for article in &report.articles {
        output.push_str(&format!("  {}  ({})\n", article.title, article.magazine));
    }
    output.push_str(&format!("magazines: {}\n", join_or_none(&report.magazines)));
    output.push_str(&format!(
        "topic areas: {}\n",
        report.topic_areas.as_deref().map_or(NONE.to_string(), join)
    ));
    output.push_str(&format!(
        "contributing authors: {}\n",
        join_or_none(&report.contributing_authors)
    ));
    output
}

pub fn format_magazine_report(report: &MagazineReport) -> String {
    let mut output = format!("{} [{}]\n", report.name, report.category);

    match &report.article_titles {
        Some(titles) => {
            output.push_str("titles:\n");
            for title in titles {
                output.push_str(&format!("  {}\n", title));
            }
        }
        None => output.push_str("titles: none\n"),
    }
    output.push_str(&format!(
        "contributors: {}\n",
        join_or_none(&report.contributors)
    ));
    output.push_str(&format!(
        "contributing authors: {}\n",
        report
            .contributing_authors
            .as_deref()
            .map_or(NONE.to_string(), join)
    ));
    output
}

fn join(values: &[String]) -> String {
    values.join(", ")
}

/// An empty list is printed as `-` so it stays distinct from "no data".
fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        join(values)
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
