use serde::Serialize;
use std::path::PathBuf;

const DEFAULT_AVATAR: &str = "/images/profile.png";

/// Site-wide values shown in the layout and the feed.
#[derive(Serialize, Debug, Clone, Default)]
pub(crate) struct SiteInfo {
    pub blog_name: String,
    pub blog_url: String,
    pub author: String,
    pub author_title: String,
    pub intro: Option<String>,
    pub avatar: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl SiteInfo {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Empty values count as unset. The avatar falls back to `/images/profile.png`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            blog_name: var("BLOG_NAME").unwrap_or_default(),
            blog_url: var("BLOG_URL").unwrap_or_default(),
            author: var("BLOG_AUTHOR").unwrap_or_default(),
            author_title: var("BLOG_AUTHOR_TITLE").unwrap_or_default(),
            intro: var("BLOG_INTRO"),
            avatar: Some(var("BLOG_AVATAR").unwrap_or_else(|| DEFAULT_AVATAR.to_string())),
            linkedin: var("BLOG_LINKEDIN"),
            github: var("BLOG_GITHUB"),
        }
    }

    /// Homepage `<title>`.
    pub fn home_title(&self) -> String {
        match (self.blog_name.is_empty(), self.author.is_empty()) {
            (false, false) => format!("{} - {}", self.blog_name, self.author),
            (false, true) => self.blog_name.clone(),
            (true, false) => self.author.clone(),
            (true, true) => "index".to_string(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Context {
    pub article_dir: PathBuf,
    pub out_dir: PathBuf,
    pub public_dir: PathBuf,

    pub site: SiteInfo,

    pub handlebars: handlebars::Handlebars<'static>,
}
