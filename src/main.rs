// src/main.rs
use bookmarker::cli::args::Cli;
use bookmarker::cli::execute_command;
use bookmarker::config::load_settings;
use bookmarker::exitcode;
use clap::Parser;
use crossterm::style::Stylize;
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::{filter_fn, LevelFilter},
    fmt::{self, format::FmtSpan},
    prelude::*,
};

#[instrument]
fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        crossterm::style::force_color_output(false);
    }
    // use stderr as human output in order to make stdout output passable to downstream processes
    let stderr = StandardStream::stderr(if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    });

    setup_logging(cli.debug, cli.no_color);

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", format!("Failed to load settings: {}", e).red());
            std::process::exit(exitcode::USAGE);
        }
    };

    let code = match execute_command(stderr, cli, &settings) {
        Ok(()) => exitcode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn setup_logging(verbosity: u8, no_color: bool) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let noisy_modules = [
        "html5ever",
        "selectors",
        "reqwest",
        "rustls",
        "mio",
        "want",
        "hyper_util",
    ];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!no_color)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
