use serde::Serialize;

use crate::{
    context::SiteInfo,
    store::{Article, ArticleMetadata},
};

#[derive(Serialize, Debug)]
pub(super) struct IndexPageData<'a> {
    pub site: &'a SiteInfo,
    pub title: String,
    pub social_bar: String,
    pub is_home: bool,
    pub articles: &'a [ArticleMetadata],
}

#[derive(Serialize, Debug)]
pub(super) struct ArticlePageData<'a> {
    pub site: &'a SiteInfo,
    pub title: &'a str,
    pub social_bar: String,
    pub is_home: bool,
    pub article: &'a Article,
}
