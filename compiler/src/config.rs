//! Configuration for the map marker compiler.
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

use {
    anyhow::{
        Context,
        Result,
    },
    clap::{
        ArgAction,
        Parser,
    },
    mapmark_core::MatchCriterion,
    serde::Deserialize,
    serde_json::from_str as from_json_str,
    std::{
        fs::read_to_string,
        path::{
            Path,
            PathBuf,
        },
    },
    tracing::debug,
};

const STDIN: &str = "-";

/// Render the marker tags of a plain-text map.
#[derive(Debug, Parser)]
#[command(name = "mapmark", version, long_about = None)]
pub(crate)
struct Options {
    /// The map to render. Reads stdin when absent or "-".
    pub(crate) map: Option<PathBuf>,

    /// Which marks render as matched: "all", "none" or a mark id.
    #[arg(short, long, value_name = "CRITERION")]
    pub(crate) mark: Option<MatchCriterion>,

    /// A JSON file providing defaults for the other options.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Write to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// List the map's tags instead of rendering it.
    #[arg(short, long)]
    pub(crate) list: bool,

    /// Log more. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

/// The contents of a `--config` file.
///
/// Relative paths resolve against the directory holding the file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub(crate)
struct Config {
    map: Option<PathBuf>,
    mark: Option<MatchCriterion>,
    output: Option<PathBuf>,
}

fn relative_to(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() || path == Path::new(STDIN) {
        path
    }
    else {
        base.join(path)
    }
}

impl Config {
    pub(crate)
    fn read<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>
    {
        let path = path.as_ref();
        debug!(config = ?path, "reading config");

        let content = read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let base = path.parent().unwrap_or(Path::new(""));

        Self::parse(&content, base)
            .with_context(|| format!("Failed to parse config {:?}", path))
    }

    pub(crate)
    fn parse<P>(content: &str, base: P) -> Result<Self>
    where
        P: AsRef<Path>
    {
        let config = from_json_str::<Self>(content)?;

        Ok(Self {
            map: config.map.map(|p| relative_to(base.as_ref(), p)),
            mark: config.mark,
            output: config.output.map(|p| relative_to(base.as_ref(), p)),
        })
    }
}

/// A single run of the compiler, flags taking precedence over config.
#[derive(Debug, PartialEq)]
pub(crate)
struct Job {
    pub(crate) map: Option<PathBuf>,
    pub(crate) criterion: MatchCriterion,
    pub(crate) output: Option<PathBuf>,
    pub(crate) list: bool,
}

impl Job {
    pub(crate)
    fn new(opts: Options, config: Config) -> Self {
        Self {
            map: opts.map
                .or(config.map)
                .filter(|p| p != Path::new(STDIN)),
            criterion: opts.mark
                .or(config.mark)
                .unwrap_or_default(),
            output: opts.output.or(config.output),
            list: opts.list,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn options(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("mapmark").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn options_1() {
        let opts = options(&["-m", "12", "-vv", "world.map"]);
        assert_eq!(Some(MatchCriterion::id(12)), opts.mark);
        assert_eq!(Some(PathBuf::from("world.map")), opts.map);
        assert_eq!(2, opts.verbose);
        assert!(!opts.list);
    }

    #[test]
    fn options_2() {
        assert_eq!(Some(MatchCriterion::All), options(&["--mark", "all"]).mark);
        assert!(Options::try_parse_from(["mapmark", "--mark", "room"]).is_err());
    }

    #[test]
    fn config_1() {
        let config = Config::parse(
            r#"{ "map": "maps/world.map", "mark": 7, "output": "/tmp/out.txt" }"#,
            "/srv/mud",
        ).unwrap();

        assert_eq!(Some(PathBuf::from("/srv/mud/maps/world.map")), config.map);
        assert_eq!(Some(MatchCriterion::id(7)), config.mark);
        assert_eq!(Some(PathBuf::from("/tmp/out.txt")), config.output);
    }

    #[test]
    fn config_2() {
        assert_eq!(Some(MatchCriterion::All), Config::parse(r#"{ "mark": true }"#, "").unwrap().mark);
        assert_eq!(Some(MatchCriterion::None), Config::parse(r#"{ "mark": false }"#, "").unwrap().mark);
        assert_eq!(None, Config::parse(r#"{ "mark": null }"#, "").unwrap().mark);
        assert!(Config::parse(r#"{ "marks": 1 }"#, "").is_err());
        assert_eq!(
            Some(MatchCriterion::id("room")),
            Config::parse(r#"{ "mark": "room" }"#, "").unwrap().mark,
        );
        assert_eq!(
            Some(MatchCriterion::id("all")),
            Config::parse(r#"{ "mark": { "id": "all" } }"#, "").unwrap().mark,
        );
    }

    #[test]
    fn job_1() {
        let config = Config::parse(r#"{ "map": "a.map", "mark": "all", "output": "out" }"#, "/c")
            .unwrap();
        let job = Job::new(options(&["-m", "3", "b.map"]), config);

        assert_eq!(Job {
            map: Some(PathBuf::from("b.map")),
            criterion: MatchCriterion::id(3),
            output: Some(PathBuf::from("/c/out")),
            list: false,
        }, job);
    }

    #[test]
    fn job_2() {
        let job = Job::new(options(&["-l", "-"]), Config::default());
        assert_eq!(None, job.map);
        assert_eq!(MatchCriterion::None, job.criterion);
        assert!(job.list);
    }
}
