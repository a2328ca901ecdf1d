mod debug_report;

use natlog_rewrite::{Filters, Rewriter, from_conll, to_conll};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let rewriter = Rewriter::new(config.filters);
    let palette = debug_report::Palette::new(config.color);

    if let Some(input) = &config.input {
        let (output, report) = rewriter.rewrite_gloss_verbose(input);
        debug_report::print_gloss(input, &output, &report, &palette);
    }

    if let Some(source) = &config.graph {
        let text = match read_graph_source(source) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        };
        let graph = match from_conll(&text) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("error: invalid graph: {err}");
                std::process::exit(2);
            }
        };
        match rewriter.rewrite_dependencies_verbose(graph) {
            Ok((graph, report)) => debug_report::print_graph(&to_conll(&graph), &report, &palette),
            Err(err) => {
                eprintln!("error: rewrite failed: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("NATLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

struct CliConfig {
    input: Option<String>,
    graph: Option<String>,
    filters: Filters,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut graph: Option<String> = None;
    let mut filters = Filters::DEFAULT;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("natlog-rewrite {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--filters" | "-f" => {
                let value = args.next().ok_or_else(|| "error: --filters expects a value".to_string())?;
                filters = parse_filters(&value)?;
            }
            "--graph" | "-g" => {
                let value = args.next().ok_or_else(|| "error: --graph expects a value".to_string())?;
                graph = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--filters=") => {
                filters = parse_filters(arg.trim_start_matches("--filters="))?;
            }
            _ if arg.starts_with("--graph=") => {
                graph = Some(arg.trim_start_matches("--graph=").to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                input = Some(std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" "));
                break;
            }
        }
    }

    if input.is_none() && graph.is_none() {
        let text = read_stdin()?;
        if !text.trim().is_empty() {
            input = Some(text.trim().to_string());
        }
    }

    if input.is_none() && graph.is_none() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, graph, filters, color })
}

fn parse_filters(value: &str) -> Result<Filters, String> {
    value.parse().map_err(|err| format!("error: invalid --filters '{value}': {err}"))
}

fn read_graph_source(source: &str) -> Result<String, String> {
    if source == "-" {
        read_stdin()
    } else {
        std::fs::read_to_string(source).map_err(|err| format!("error: failed to read graph '{source}': {err}"))
    }
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "natlog-rewrite {version}

Rewrites sentences and dependency graphs for natural-logic inference.

Usage:
  natlog-rewrite [OPTIONS] [--] <sentence...>
  natlog-rewrite [OPTIONS] --graph <file|->

Options:
  -f, --filters <list>       Comma-separated rules to enable.
                             Known: therebe, atleastafew, mods, rootedq, dropdet, has
                             Default: {default_filters}
  -g, --graph <file|->       Rewrite a tab-separated dependency graph
                             (index word lemma tag head relation [operator] [extra]).
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  NATLOG_LOG                 Log filter, e.g. 'natlog_rewrite=debug'. Default: warn

Exit codes:
  0  Success.
  1  A graph rewrite failed.
  2  Invalid arguments or input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_filters = Filters::DEFAULT
    )
}
