use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;
use fs_extra::dir::CopyOptions;
use log::{info, warn};
use serde::Serialize;

use crate::{
    context::Context,
    store::{sort_article, Article, ArticleStore},
};

mod data;
mod feed;
mod utils;

use data::{ArticlePageData, IndexPageData};
use utils::render_social_bar;

fn render_page<T: Serialize>(
    ctx: &Context,
    template: &str,
    data: &T,
    path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    ctx.handlebars.render_to_write(template, data, &mut writer)?;
    writer.flush()?;
    info!("wrote {path:?}");
    Ok(())
}

fn write_feed(ctx: &Context, articles: &[Article], path: &Path) -> anyhow::Result<()> {
    let feed = feed::build_feed(&ctx.site, articles);
    let writer = BufWriter::new(File::create(path)?);
    feed.write_to(writer)?.flush()?;
    info!("wrote {path:?}");
    Ok(())
}

pub(crate) fn generate(ctx: &Context) -> anyhow::Result<()> {
    let store = ArticleStore::new(&ctx.article_dir);

    fs_extra::dir::remove(&ctx.out_dir)
        .with_context(|| format!("while cleaning {:?}", ctx.out_dir))?;
    fs_extra::dir::create_all(&ctx.out_dir, false)?;

    // copy `public_dir` into the output root
    let mut cp_opts = CopyOptions::new();
    cp_opts.content_only = true;
    cp_opts.overwrite = true;
    fs_extra::dir::copy(&ctx.public_dir, &ctx.out_dir, &cp_opts)
        .with_context(|| format!("while copying {:?}", ctx.public_dir))?;

    // homepage
    {
        let articles = store.list_article_metadata()?;
        info!("{} articles found in {:?}", articles.len(), ctx.article_dir);
        let data = IndexPageData {
            site: &ctx.site,
            title: ctx.site.home_title(),
            social_bar: render_social_bar(&ctx.site, false),
            is_home: true,
            articles: &articles,
        };
        render_page(ctx, "index", &data, &ctx.out_dir.join("index.html"))
            .context("while generating index.html")?;
    }

    // article pages, `/article/{id}` served from `article/{id}/index.html`
    let mut articles = vec![];
    for route in store.list_article_ids()? {
        let article = store.get_article(&route.id).map_err(|e| {
            if e.is_not_found() {
                anyhow::anyhow!("{} disappeared while building", route.path())
            } else {
                anyhow::Error::new(e).context(format!("while loading {}", route.path()))
            }
        })?;
        let data = ArticlePageData {
            site: &ctx.site,
            title: &article.meta.title,
            social_bar: render_social_bar(&ctx.site, true),
            is_home: false,
            article: &article,
        };
        let path = ctx
            .out_dir
            .join("article")
            .join(&route.id)
            .join("index.html");
        render_page(ctx, "article", &data, &path)
            .with_context(|| format!("while generating {}", route.path()))?;
        articles.push(article);
    }

    // Atom ids must be absolute, so the feed needs the public url
    if ctx.site.blog_url.is_empty() {
        warn!("BLOG_URL is not set, skipping feed.xml");
    } else {
        articles.sort_by(sort_article);
        write_feed(ctx, &articles, &ctx.out_dir.join("feed.xml"))
            .context("while generating feed.xml")?;
    }

    Ok(())
}
