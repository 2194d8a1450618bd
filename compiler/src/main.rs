//! The compiler for plain-text maps containing marker tags.
// Copyright (C) 2024  Frankie Baffa
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod config;

use {
    anyhow::{
        Context,
        Result,
    },
    clap::Parser,
    config::{
        Config,
        Job,
        Options,
    },
    mapmark_core::MarkerRenderer,
    std::{
        env::var,
        fs::{
            create_dir_all,
            read_to_string,
            write,
        },
        io::{
            read_to_string as read_all,
            stdin,
            stdout,
            Write,
        },
        path::Path,
    },
    tracing::{
        debug,
        info,
    },
    tracing_subscriber::{
        filter::Directive,
        fmt,
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter,
    },
};

const LOGGED_CRATES: [&str; 2] = ["mapmark", "mapmark_core"];

/// `RUST_LOG` is the base filter. `-v` sets the mapmark crates to debug on top
/// of it, `-vv` to trace. Its other directives are left alone.
fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    let mut filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("mapmark=warn,mapmark_core=warn"));

    let level = match verbose {
        0 => return filter,
        1 => "debug",
        _ => "trace",
    };

    for krate in LOGGED_CRATES {
        if let Ok(directive) = format!("{krate}={level}").parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    filter
}

fn init_logging(verbose: u8) {
    let env = var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(log_filter(verbose, env.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_map(map: Option<&Path>) -> Result<String> {
    match map {
        Some(path) => {
            debug!(map = ?path, "reading map");
            read_to_string(path).with_context(|| format!("Failed to read map {:?}", path))
        },
        None => {
            debug!("reading map from stdin");
            read_all(stdin()).context("Failed to read map from stdin")
        },
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = output else {
        let mut out = stdout().lock();
        out.write_all(content.as_bytes()).context("Failed to write to stdout")?;
        return out.flush().context("Failed to write to stdout");
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).with_context(|| format!("Failed to create directory {:?}", dir))?;
    }

    write(path, content).with_context(|| format!("Failed to write {:?}", path))
}

/// One line per tag: its id, then where it sits.
fn list_tags(renderer: &MarkerRenderer) -> String {
    renderer.tags()
        .iter()
        .map(|tag| format!("{}\t{}\n", tag.id(), tag.coord()))
        .collect()
}

fn main() -> Result<()> {
    let opts = Options::parse();
    init_logging(opts.verbose);

    let config = match &opts.config {
        Some(path) => Config::read(path)?,
        None => Config::default(),
    };

    let job = Job::new(opts, config);
    let map = read_map(job.map.as_deref())?;

    info!(map = ?job.map, criterion = %job.criterion, list = job.list, "compiling map");

    let renderer = MarkerRenderer::with_criterion(map, job.criterion);
    let output = if job.list {
        list_tags(&renderer)
    }
    else {
        renderer.render()
    };

    write_output(job.output.as_deref(), &output)
}

#[cfg(test)]
mod test {
    use super::log_filter;

    #[test]
    fn log_filter_1() {
        for env in [None, Some("mapmark=loud")] {
            let filter = log_filter(0, env).to_string();
            assert!(filter.contains("mapmark=warn"), "{filter}");
            assert!(filter.contains("mapmark_core=warn"), "{filter}");
        }

        assert_eq!("mapmark_core=info", log_filter(0, Some("mapmark_core=info")).to_string());
    }

    #[test]
    fn log_filter_2() {
        let filter = log_filter(1, Some("hyper=info")).to_string();
        assert!(filter.contains("hyper=info"), "{filter}");
        assert!(filter.contains("mapmark=debug"), "{filter}");
        assert!(filter.contains("mapmark_core=debug"), "{filter}");

        let filter = log_filter(2, None).to_string();
        assert!(filter.contains("mapmark=trace"), "{filter}");
        assert!(filter.contains("mapmark_core=trace"), "{filter}");
    }
}
