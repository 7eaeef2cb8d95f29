//! Read-only access to the markdown article directory.
//!
//! Every call goes back to disk; nothing is cached between calls.

use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::BTreeMap,
    ffi::OsStr,
    path::{Component, Path, PathBuf},
};

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

mod error;
mod frontmatter;
mod markdown;

pub(crate) use error::{Result, StoreError};
use markdown::markdown_to_html;

const ARTICLE_EXTENSION: &str = "md";

/// Routing parameter for a single article page.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct ArticleRoute {
    pub id: String,
}

impl ArticleRoute {
    pub fn path(&self) -> String {
        format!("/article/{}", self.id)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct ArticleMetadata {
    pub id: String,
    pub title: String,
    pub date: String,
    /// Front-matter keys other than `title` and `date`, unvalidated.
    pub extra: BTreeMap<String, Value>,
}

impl ArticleMetadata {
    pub fn route(&self) -> ArticleRoute {
        ArticleRoute {
            id: self.id.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct Article {
    #[serde(flatten)]
    pub meta: ArticleMetadata,
    pub content_html: String,
}

impl Borrow<ArticleMetadata> for Article {
    fn borrow(&self) -> &ArticleMetadata {
        &self.meta
    }
}

/// Newest first. Equal dates fall back to the id so the order is total.
pub(crate) fn sort_article<T: Borrow<ArticleMetadata>>(a: &T, b: &T) -> Ordering {
    let (a, b) = (a.borrow(), b.borrow());
    b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id))
}

#[derive(Debug, Clone)]
pub(crate) struct ArticleStore {
    article_dir: PathBuf,
}

impl ArticleStore {
    pub fn new(article_dir: impl Into<PathBuf>) -> Self {
        Self {
            article_dir: article_dir.into(),
        }
    }

    pub fn list_article_ids(&self) -> Result<Vec<ArticleRoute>> {
        Ok(self
            .markdown_files()?
            .into_iter()
            .map(|(id, _)| ArticleRoute { id })
            .collect())
    }

    pub fn list_article_metadata(&self) -> Result<Vec<ArticleMetadata>> {
        let mut articles = self
            .markdown_files()?
            .into_iter()
            .map(|(id, path)| self.read_article(id, &path).map(|(meta, _)| meta))
            .collect::<Result<Vec<_>>>()?;
        articles.sort_by(sort_article);
        Ok(articles)
    }

    pub fn get_article(&self, id: &str) -> Result<Article> {
        let path = self
            .article_path(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if !path.is_file() {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let (meta, body) = self.read_article(id.to_string(), &path)?;
        Ok(Article {
            meta,
            content_html: markdown_to_html(&body),
        })
    }

    /// `{article_dir}/{id}.md`, or `None` when `id` is not a single plain file name.
    fn article_path(&self, id: &str) -> Option<PathBuf> {
        let mut components = Path::new(id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return None,
        }
        Some(self.article_dir.join(format!("{id}.{ARTICLE_EXTENSION}")))
    }

    fn read_article(&self, id: String, path: &Path) -> Result<(ArticleMetadata, String)> {
        debug!("reading {path:?}");
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let (fm, body) = frontmatter::parse(&content, path)?;
        let meta = ArticleMetadata {
            id,
            title: fm.title,
            date: fm.date,
            extra: fm.extra,
        };
        Ok((meta, body.to_string()))
    }

    /// `(id, path)` of every markdown file in the directory, ordered by id.
    fn markdown_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let entries = std::fs::read_dir(&self.article_dir)
            .map_err(|e| StoreError::io(&self.article_dir, e))?;

        let mut files = vec![];
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.article_dir, e))?;
            let path = entry.path();

            if path.extension() != Some(OsStr::new(ARTICLE_EXTENSION)) {
                debug!("skipping {path:?}: not a markdown file");
                continue;
            }
            let meta = std::fs::metadata(&path).map_err(|e| StoreError::io(&path, e))?;
            if !meta.is_file() {
                debug!("skipping {path:?}: not a regular file");
                continue;
            }
            let Some(id) = path.file_stem().and_then(OsStr::to_str) else {
                warn!("skipping {path:?}: file name is not valid UTF-8");
                continue;
            };

            files.push((id.to_string(), path.clone()));
        }
        files.sort();
        Ok(files)
    }
}
