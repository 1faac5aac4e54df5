//! Documentation governance CLI
//!
//! Two subcommands: `check` runs the cross-artifact consistency checks and
//! exits non-zero on any finding; `release-notes` renders canonical milestone
//! notes from the changelog's `[Unreleased]` section.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use docgov_checks::{run_checks, GovernanceConfig};
use docgov_markdown::Document;
use docgov_notes::render_release_notes;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("docgov")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Documentation governance checks and release-notes generation")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate roadmap, changelog, plan registry, and template consistency")
                .arg(
                    Arg::new("root")
                        .long("root")
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Repository root the conventional layout resolves under"),
                )
                .arg(
                    Arg::new("roadmap")
                        .long("roadmap")
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the roadmap file"),
                )
                .arg(
                    Arg::new("changelog")
                        .long("changelog")
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the changelog file"),
                )
                .arg(
                    Arg::new("lifecycle")
                        .long("lifecycle")
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the plan-lifecycle registry"),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the release-notes template"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the report as JSON"),
                ),
        )
        .subcommand(
            Command::new("release-notes")
                .about("Generate milestone release notes from the changelog")
                .arg(
                    Arg::new("version")
                        .long("version")
                        .required(true)
                        .help("Release version (for example v0.2.0)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Output markdown file path"),
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Repository root the conventional layout resolves under"),
                )
                .arg(
                    Arg::new("roadmap")
                        .long("roadmap")
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the roadmap file"),
                )
                .arg(
                    Arg::new("changelog")
                        .long("changelog")
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the changelog file"),
                ),
        )
}

/// Build the check configuration from `--root` plus any per-file overrides.
fn config_from_args(args: &ArgMatches) -> GovernanceConfig {
    let root = args.get_one::<PathBuf>("root").cloned().unwrap_or_default();
    let mut config = GovernanceConfig::for_root(root);
    if let Some(path) = args.get_one::<PathBuf>("roadmap") {
        config.roadmap.clone_from(path);
    }
    if let Some(path) = args.get_one::<PathBuf>("changelog") {
        config.changelog.clone_from(path);
    }
    // `lifecycle` and `template` are only defined on the `check` subcommand;
    // `try_get_one` lets this helper serve `release-notes` too.
    if let Some(path) = args.try_get_one::<PathBuf>("lifecycle").ok().flatten() {
        config.plan_lifecycle.clone_from(path);
        if let Some(parent) = path.parent() {
            config.plans_dir = parent.to_path_buf();
        }
    }
    if let Some(path) = args.try_get_one::<PathBuf>("template").ok().flatten() {
        config.release_template.clone_from(path);
    }
    config
}

fn run_release_notes(args: &ArgMatches) -> anyhow::Result<PathBuf> {
    let version = args.get_one::<String>("version").expect("required arg");
    let output = args.get_one::<PathBuf>("output").expect("required arg");
    let config = config_from_args(args);

    let roadmap = Document::load(&config.roadmap)?;
    let changelog = Document::load(&config.changelog)?;
    let notes = render_release_notes(version, roadmap.text(), changelog.text())?;
    std::fs::write(output, notes)?;
    Ok(output.clone())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("check", args)) => {
            let config = config_from_args(args);
            let report = run_checks(&config);

            if args.get_flag("json") {
                println!("{}", report.generate_json());
            } else {
                println!("{}", report.generate_text());
            }

            std::process::exit(if report.passed() { 0 } else { 1 });
        }
        Some(("release-notes", args)) => match run_release_notes(args) {
            Ok(path) => {
                println!("Generated release notes at {}", path.display());
            }
            Err(err) => {
                println!("Error: {err}");
                std::process::exit(1);
            }
        },
        _ => {}
    }
}
