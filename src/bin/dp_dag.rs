use std::env;

use dp_dag::master::{self, Recurrence};
use dp_dag::registry::{self, Descriptor, Pattern};
use dp_dag::Graph;
use serde_json::json;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("dp_dag: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    if options.verbose {
        init_logging();
    }

    if options.list {
        print_list();
        return;
    }

    if let Some(rec) = options.recurrence {
        print_recurrence(&rec);
        return;
    }

    let selected: Vec<&'static Descriptor> = match (&options.problem, options.pattern) {
        (Some(key), _) => match registry::lookup(key) {
            Ok(d) => vec![d],
            Err(err) => {
                eprintln!("dp_dag: {err}");
                std::process::exit(2);
            }
        },
        (None, Some(pattern)) => registry::by_pattern(pattern).collect(),
        (None, None) => registry::problems().iter().collect(),
    };

    let mut failures = 0usize;
    let mut solved = Vec::with_capacity(selected.len());
    for d in selected {
        if options.check {
            match d.check() {
                Ok(graph) => solved.push((d, graph)),
                Err(err) => {
                    eprintln!("✗ {err}");
                    failures += 1;
                }
            }
        } else {
            solved.push((d, d.solve()));
        }
    }

    if let Err(err) = options.format.write(&solved) {
        eprintln!("dp_dag output error: {err}");
        std::process::exit(1);
    }

    if options.check {
        eprintln!(
            "checked {} graphs: {} ok, {} malformed",
            solved.len() + failures,
            solved.len(),
            failures
        );
        if failures > 0 {
            std::process::exit(1);
        }
    }
}

struct Options {
    format: OutputFormat,
    problem: Option<String>,
    pattern: Option<Pattern>,
    recurrence: Option<Recurrence>,
    list: bool,
    check: bool,
    verbose: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut options = Options {
            format: OutputFormat::Summary,
            problem: None,
            pattern: None,
            recurrence: None,
            list: false,
            check: false,
            verbose: false,
        };

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
                _ => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };

            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--list" => options.list = true,
                "--check" => options.check = true,
                "--verbose" | "-v" => options.verbose = true,
                "--format" => options.format = OutputFormat::from_str(&value("--format")?)?,
                "--problem" => options.problem = Some(value("--problem")?),
                "--pattern" => {
                    let raw = value("--pattern")?;
                    options.pattern = Some(raw.parse::<Pattern>().map_err(|e| e.to_string())?);
                }
                "--recurrence" => {
                    options.recurrence = Some(parse_recurrence(&value("--recurrence")?)?);
                }
                "--preset" => {
                    let name = value("--preset")?;
                    let preset = master::preset_named(&name)
                        .ok_or_else(|| format!("unknown preset '{name}'"))?;
                    options.recurrence = Some(preset.recurrence);
                }
                other => return Err(format!("unrecognized argument '{other}'")),
            }
        }

        if options.problem.is_some() && options.pattern.is_some() {
            return Err("--problem and --pattern are mutually exclusive".to_string());
        }
        if options.recurrence.is_some() && (options.problem.is_some() || options.pattern.is_some()) {
            return Err("--recurrence/--preset cannot be combined with --problem or --pattern".to_string());
        }
        Ok(options)
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin dp_dag [-- <options>]

Solves the built-in dynamic programs and prints their dependency DAGs.

Options:
  --list                          List problems grouped by pattern family
  --problem <key>                 Solve a single problem (e.g. lis, edit, tsp)
  --pattern <A-F|name>            Solve one pattern family (e.g. B, interval)
  --format <summary|table|json>   Output format (default: summary)
  --check                         Validate every graph, exit 1 if any is malformed
  --recurrence <a,b,d>            Analyse T(n) = aT(n/b) + O(n^d) (not with --problem/--pattern)
  --preset <name>                 Analyse a named recurrence (e.g. \"merge sort\")
  -v, --verbose                   Log solver spans to stderr (needs the `tracing` feature)
  -h, --help                      Print this help message

Examples:
  cargo run --bin dp_dag -- --list
  cargo run --bin dp_dag -- --pattern grid --format table
  cargo run --bin dp_dag -- --problem knapsack --format json
  cargo run --bin dp_dag -- --check
  cargo run --bin dp_dag -- --recurrence 3,2,1
"
        );
    }
}

fn parse_recurrence(raw: &str) -> Result<Recurrence, String> {
    let parts: Vec<u32> = raw
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("recurrence '{raw}' must be three non-negative integers a,b,d"))?;
    match parts[..] {
        [a, b, d] => Recurrence::new(a, b, d).map_err(|e| e.to_string()),
        _ => Err(format!("recurrence '{raw}' must have exactly three parts a,b,d")),
    }
}

#[cfg(feature = "tracing")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging() {
    eprintln!("dp_dag: built without the `tracing` feature, --verbose has no effect");
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Summary,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "summary" => Ok(Self::Summary),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, solved: &[(&'static Descriptor, Graph)]) -> Result<(), String> {
        match self {
            OutputFormat::Summary => write_summary(solved),
            OutputFormat::Table => write_table(solved),
            OutputFormat::Json => write_json(solved),
        }
    }
}

fn print_list() {
    for pattern in Pattern::ALL {
        println!("{pattern}");
        for d in registry::by_pattern(pattern) {
            println!("  {:<14} {}", d.key, d.title);
        }
    }
}

fn print_recurrence(rec: &Recurrence) {
    let case = rec.case();
    println!("{rec}");
    println!("log_{}({}) = {:.3}", rec.b, rec.a, rec.log_b_a());
    println!("{case}: {}", case.description());
    println!("T(n) = {}", rec.complexity());
    println!();
    println!(
        "{:>5}  {:>10}  {:>10}  {:>14}  {:>12}  {:>6}",
        "level", "nodes", "size", "work/node", "total", "ratio"
    );
    for l in rec.levels(rec.suggested_depth()) {
        println!(
            "{:>5}  {:>10}  {:>10}  {:>14.6}  {:>12.4}  {:>6.3}",
            l.level,
            l.nodes,
            format!("n/{}", l.divisor),
            l.work_per_node,
            l.total_work,
            l.ratio
        );
    }
}

fn write_summary(solved: &[(&'static Descriptor, Graph)]) -> Result<(), String> {
    for (d, g) in solved {
        println!("{} [{}] {}", d.key, d.pattern.letter(), d.title);
        println!("  input:      {}", d.input);
        println!("  recurrence: {}", d.recurrence.replace('\n', "\n              "));
        println!(
            "  costs:      {} subproblems, {} time, {} extraction",
            d.costs.subproblems, d.costs.runtime, d.costs.extraction
        );
        println!("  answer:     {}", g.answer);
        println!(
            "  dag:        {} ({} nodes, {} edges, {} on the trace)",
            g.shape.name(),
            g.nodes.len(),
            g.edges.len(),
            g.path_nodes().count()
        );
        println!("  note:       {}", g.note);
        println!();
    }
    Ok(())
}

fn write_table(solved: &[(&'static Descriptor, Graph)]) -> Result<(), String> {
    let mut col1 = "key".len();
    let mut col2 = "title".len();
    for (d, _) in solved {
        col1 = col1.max(d.key.len());
        col2 = col2.max(d.title.chars().count());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>7}  {:<7}  {:>6}  {:>6}  {:>5}  {:>8}",
        "key", "title", "pattern", "shape", "nodes", "edges", "trace", "answer",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<7}  {:-<7}  {:-<6}  {:-<6}  {:-<5}  {:-<8}",
        "", "", "", "", "", "", "", "",
    );
    for (d, g) in solved {
        println!(
            "{:<col1$}  {:<col2$}  {:>7}  {:<7}  {:>6}  {:>6}  {:>5}  {:>8}",
            d.key,
            d.title,
            d.pattern.letter(),
            g.shape.name(),
            g.nodes.len(),
            g.edges.len(),
            g.path_nodes().count(),
            g.answer.to_string(),
        );
    }
    Ok(())
}

fn write_json(solved: &[(&'static Descriptor, Graph)]) -> Result<(), String> {
    let entries: Vec<_> = solved
        .iter()
        .map(|(d, g)| {
            json!({
                "key": d.key,
                "title": d.title,
                "pattern": d.pattern.name(),
                "graph": g,
            })
        })
        .collect();
    let text = serde_json::to_string_pretty(&entries).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().copied())
    }

    #[test]
    fn recurrence_conflicts_with_problem_selection() {
        assert!(parse(&["--preset", "strassen", "--problem", "lis"]).is_err());
        assert!(parse(&["--pattern=grid", "--recurrence", "2,2,1"]).is_err());
        assert!(parse(&["--recurrence=2,2,1", "--pattern", "B"]).is_err());
    }

    #[test]
    fn recurrence_alone_is_accepted() {
        let opts = parse(&["--recurrence", "3,2,1", "--format", "table"]).unwrap();
        assert_eq!(opts.recurrence, Recurrence::new(3, 2, 1).ok());

        let opts = parse(&["--preset=merge sort"]).unwrap();
        assert_eq!(opts.recurrence, Recurrence::new(2, 2, 1).ok());
    }

    #[test]
    fn problem_and_pattern_are_exclusive() {
        assert!(parse(&["--problem", "lis", "--pattern", "A"]).is_err());
        assert!(parse(&["--problem", "lis", "--check"]).is_ok());
    }
}
