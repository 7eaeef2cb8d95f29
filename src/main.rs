use anyhow::{bail, Context as _};
use clap::{command, Arg, ArgMatches};
use context::{Context, SiteInfo};
use generator::generate;
use log::info;
use std::path::PathBuf;

mod context;
mod generator;
mod renderer;
mod store;

fn dir_arg(matches: &ArgMatches, name: &str) -> anyhow::Result<PathBuf> {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .with_context(|| format!("{name} is missing"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("article_dir")
                .help("Directory path of markdown articles")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("articles"),
            Arg::new("out_dir")
                .help("Directory path of output. Existing contents will be removed.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("out"),
            Arg::new("public_dir")
                .help("Directory path of public. Contents will be copied as it is.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("public"),
            Arg::new("template_dir")
                .help("Directory of template")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("template"),
        ])
        .get_matches();

    let article_dir = dir_arg(&matches, "article_dir")?;
    if !article_dir.is_dir() {
        bail!("article_dir must be a directory.");
    }
    let out_dir = dir_arg(&matches, "out_dir")?;
    if out_dir.exists() && !out_dir.is_dir() {
        bail!("if out_dir exists, it must be directory.");
    }
    let public_dir = dir_arg(&matches, "public_dir")?;
    if !public_dir.is_dir() {
        bail!("public_dir must be a directory.")
    }
    let template_dir = dir_arg(&matches, "template_dir")?;
    if !template_dir.is_dir() {
        bail!("template_dir must be a directory.")
    }

    let ctx = Context {
        article_dir,
        out_dir,
        public_dir,
        site: SiteInfo::from_env(),
        handlebars: renderer::generate_renderer(&template_dir)?,
    };

    generate(&ctx)?;
    info!("site written to {:?}", ctx.out_dir);

    Ok(())
}
