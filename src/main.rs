use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use folio::config::SiteConfig;
use folio::paginator::Paginator;
use folio::render::render;
use folio::write::{self, Writer};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = App::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders one page of a paginated blog listing")
        .arg(
            Arg::with_name("paginator")
                .value_name("PAGINATOR")
                .help("YAML file describing the page and its posts")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .value_name("FILE")
                .takes_value(true)
                .help("Project file (default: nearest folio.yaml)"),
        )
        .arg(
            Arg::with_name("template")
                .long("template")
                .short("t")
                .value_name("FILE")
                .takes_value(true)
                .help("Template to use instead of the built-in one"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .value_name("FILE")
                .takes_value(true)
                .help("Write the page here instead of stdout"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .help("Enable debug logging"),
        )
        .get_matches();

    let filter = if matches.is_present("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Errors go straight to stderr so they show even when logging is off.
    if let Err(e) = run(&matches) {
        for line in error_report(&e) {
            eprintln!("{}", line);
        }
        std::process::exit(1);
    }
}

fn error_report(e: &anyhow::Error) -> Vec<String> {
    let mut lines = vec![format!("Error: {}", e)];
    lines.extend(e.chain().skip(1).map(|cause| format!("Caused by: {}", cause)));
    lines
}

fn run(matches: &ArgMatches) -> Result<()> {
    let site = load_config(matches.value_of("config"))?;

    // `paginator` is required, so clap guarantees it's present.
    let paginator_path = Path::new(matches.value_of("paginator").unwrap_or_default());
    let paginator = Paginator::from_reader(
        File::open(paginator_path)
            .with_context(|| format!("Opening paginator `{}`", paginator_path.display()))?,
    )
    .with_context(|| format!("Loading paginator `{}`", paginator_path.display()))?;
    paginator
        .validate()
        .with_context(|| format!("Invalid paginator `{}`", paginator_path.display()))?;

    let template = match matches.value_of("template") {
        Some(path) => write::load_template(Path::new(path))?,
        None => write::default_template()?,
    };

    let page = render(&paginator, &site);
    let writer = Writer {
        template: &template,
    };
    match matches.value_of("output") {
        Some(path) => {
            writer.write_file(&page, Path::new(path))?;
            tracing::info!(
                output = path,
                page = paginator.page,
                total_pages = paginator.total_pages,
                "wrote page"
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writer.write_page(&page, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::from_project_file(Path::new(path)),
        None => SiteConfig::from_directory(&std::env::current_dir()?),
    }
}
