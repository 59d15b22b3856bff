use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Context;
use chrono_tz::Tz;
use koment_client::{api::Filter, CommentStore, Session};
use tracing_subscriber::EnvFilter;

mod app;
mod command;
mod render;

use app::App;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Read commands from this file instead of stdin
    #[structopt(short, long, parse(from_os_str))]
    script: Option<PathBuf>,

    /// Initial display order: latest, most-liked, or anything else for
    /// posting order
    #[structopt(short, long, default_value = "latest")]
    filter: Filter,

    /// Time zone dates are displayed in, eg. Europe/Tirane
    #[structopt(short, long, default_value = "UTC")]
    timezone: Tz,

    /// Make `show` print JSON
    #[structopt(long)]
    json: bool,
}

fn open_input(script: Option<&PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    Ok(match script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {:?}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let mut store = CommentStore::new();
    store.set_filter(opt.filter);
    let mut app = App {
        session: Session::with_store(store),
        timezone: opt.timezone,
        json: opt.json,
    };
    tracing::info!(filter = %opt.filter, timezone = %opt.timezone, "starting session");

    let input = open_input(opt.script.as_ref())?;
    app.run_script(input, &mut io::stdout().lock(), &mut io::stderr().lock())
}
