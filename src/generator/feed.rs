use atom_syndication::{Content, Entry, Feed, Link, Person};
use chrono::Utc;
use log::warn;

use crate::{
    context::SiteInfo,
    store::{Article, ArticleMetadata},
};

use super::utils::parse_feed_date;

fn absolute_url(site: &SiteInfo, path: &str) -> String {
    format!("{}{}", site.blog_url.trim_end_matches('/'), path)
}

fn alternate_link(href: String) -> Link {
    let mut link = Link::default();
    link.set_href(href);
    link.set_rel("alternate");
    link
}

fn build_entry(site: &SiteInfo, article: &Article) -> Option<Entry> {
    let meta: &ArticleMetadata = &article.meta;
    let Some(updated) = parse_feed_date(&meta.date) else {
        warn!("{}: date {:?} is not a feed date, leaving it out of the feed", meta.id, meta.date);
        return None;
    };
    let url = absolute_url(site, &meta.route().path());

    let mut content = Content::default();
    content.set_content_type("html".to_string());
    content.set_value(article.content_html.clone());

    let mut entry = Entry::default();
    entry.set_id(url.clone());
    entry.set_title(meta.title.as_str());
    entry.set_updated(updated);
    entry.set_published(updated);
    entry.set_links(vec![alternate_link(url)]);
    entry.set_content(content);
    Some(entry)
}

/// Atom feed over `articles`, which must already be sorted newest first.
pub(super) fn build_feed(site: &SiteInfo, articles: &[Article]) -> Feed {
    let entries: Vec<Entry> = articles
        .iter()
        .filter_map(|article| build_entry(site, article))
        .collect();

    let mut feed = Feed::default();
    feed.set_title(site.blog_name.as_str());
    feed.set_id(absolute_url(site, "/"));
    feed.set_updated(
        entries
            .first()
            .map(|entry| *entry.updated())
            .unwrap_or_else(|| Utc::now().fixed_offset()),
    );
    feed.set_links(vec![alternate_link(absolute_url(site, "/"))]);
    if !site.author.is_empty() {
        let mut author = Person::default();
        author.set_name(site.author.as_str());
        feed.set_authors(vec![author]);
    }
    feed.set_entries(entries);
    feed
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn article(id: &str, date: &str) -> Article {
        Article {
            meta: ArticleMetadata {
                id: id.to_string(),
                title: id.to_uppercase(),
                date: date.to_string(),
                extra: BTreeMap::new(),
            },
            content_html: format!("<p>{id}</p>\n"),
        }
    }

    #[test]
    fn entries_link_to_article_routes() {
        let site = SiteInfo {
            blog_name: "Blog".into(),
            blog_url: "https://blog.example.com/".into(),
            author: "Someone".into(),
            ..Default::default()
        };
        let feed = build_feed(&site, &[article("b", "2021-06-01"), article("a", "2021-01-01")]);

        assert_eq!(feed.title().value, "Blog");
        assert_eq!(feed.id(), "https://blog.example.com/");
        assert_eq!(feed.authors()[0].name(), "Someone");
        assert_eq!(feed.entries().len(), 2);

        let first = &feed.entries()[0];
        assert_eq!(first.id(), "https://blog.example.com/article/b");
        assert_eq!(first.links()[0].href(), "https://blog.example.com/article/b");
        assert_eq!(first.title().value, "B");
        assert_eq!(
            first.content().and_then(|c| c.value()),
            Some("<p>b</p>\n")
        );
        assert_eq!(feed.updated(), first.updated());

        let xml = feed.to_string();
        assert!(xml.contains("<feed"));
        assert!(xml.contains("https://blog.example.com/article/a"));
    }

    #[test]
    fn unparseable_dates_are_left_out() {
        let feed = build_feed(
            &SiteInfo::default(),
            &[article("ok", "2021-01-01"), article("odd", "sometime")],
        );
        assert_eq!(feed.entries().len(), 1);
        assert_eq!(feed.entries()[0].id(), "/article/ok");
    }
}
