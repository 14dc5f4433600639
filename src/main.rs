use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod error;
mod icon_gen;
mod icon_set;
mod manifest_json;

use icon_gen::{FillPolicy, GenerateOptions};

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Generate PWA and maskable icons from a transparent logo"
)]
struct Args {
    /// Path to the source logo (any image with an alpha channel).
    #[clap(short, long, value_name = "FILE", default_value = "public/logo.png")]
    source: PathBuf,

    /// Output directory. It must already exist.
    #[clap(short, long, value_name = "DIR", default_value = "public")]
    output: PathBuf,

    /// How the logo fills the icon canvas
    #[clap(short, long, value_enum, default_value_t = FillPolicy::Padded)]
    policy: FillPolicy,

    /// Background of the padded canvas (CSS color format). Transparent when unset.
    #[clap(long, value_name = "COLOR")]
    background: Option<String>,

    /// Also write manifest-icons.json for the web app manifest
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    icon_gen::generate_icons(GenerateOptions {
        input: args.source,
        output: args.output,
        policy: args.policy,
        background: args.background,
        manifest: args.manifest,
    })
}
