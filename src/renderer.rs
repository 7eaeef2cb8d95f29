use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use handlebars::{handlebars_helper, Handlebars};

handlebars_helper!(format_date: |date: str| {
    // `2021-06-01` and `2021-06-01T10:00:00Z` both start with the calendar date
    date.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map_or_else(|| date.to_string(), |d| d.format("%B %-d, %Y").to_string())
});

pub(crate) fn generate_renderer(template_dir: &Path) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_helper("format_date", Box::new(format_date));
    handlebars
        .register_template_file("index", template_dir.join("index.hbs"))
        .context("index.hbs")?;
    handlebars
        .register_template_file("article", template_dir.join("article.hbs"))
        .context("article.hbs")?;
    handlebars.register_partial(
        "layout",
        std::fs::read_to_string(template_dir.join("layout.hbs")).context("layout.hbs")?,
    )?;

    Ok(handlebars)
}
