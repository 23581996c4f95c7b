use std::env;

use dense_sssp::aggregate::mean_of_averages;
use dense_sssp::graph::fixtures::textbook_graph;
use dense_sssp::graph::{generate_random_graph, Graph};
use dense_sssp::{
    average_distance, report, DenseGraph, Error, GeneratorConfig, HeapDijkstra, OpenSetDijkstra,
    RunConfig, RunOverrides, ShortestPathAlgorithm,
};

type Engine = Box<dyn ShortestPathAlgorithm<f64, DenseGraph<f64>>>;

struct Options {
    run: RunConfig,
    engine: Engine,
    print_matrices: bool,
}

fn usage() -> &'static str {
    "usage: average_path [--config FILE] [--nodes N] [--density P] [--min-weight W] \
     [--max-weight W] [--seed S] [--trials T] [--origin O] [--engine open-set|heap] \
     [--print-matrices]"
}

fn value<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> Result<T, Error> {
    let raw = raw.ok_or_else(|| Error::Config(format!("{} needs a value", flag)))?;
    raw.parse()
        .map_err(|_| Error::Config(format!("{}: cannot parse '{}'", flag, raw)))
}

fn parse_args() -> Result<Options, Error> {
    let mut overrides = RunOverrides::default();
    let mut engine: Engine = Box::new(OpenSetDijkstra::new());
    let mut print_matrices = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => overrides.config_path = Some(value::<String>(&arg, args.next())?.into()),
            "--nodes" => {
                overrides.graph.get_or_insert_with(GeneratorConfig::default).node_count =
                    value(&arg, args.next())?
            }
            "--density" => {
                overrides.graph.get_or_insert_with(GeneratorConfig::default).density =
                    value(&arg, args.next())?
            }
            "--min-weight" => {
                overrides.graph.get_or_insert_with(GeneratorConfig::default).weight_range.min =
                    value(&arg, args.next())?
            }
            "--max-weight" => {
                overrides.graph.get_or_insert_with(GeneratorConfig::default).weight_range.max =
                    value(&arg, args.next())?
            }
            "--seed" => {
                overrides.graph.get_or_insert_with(GeneratorConfig::default).seed =
                    Some(value(&arg, args.next())?)
            }
            "--trials" => overrides.trials = Some(value(&arg, args.next())?),
            "--origin" => overrides.origin = Some(value(&arg, args.next())?),
            "--engine" => {
                let name: String = value(&arg, args.next())?;
                engine = match name.as_str() {
                    "open-set" => Box::new(OpenSetDijkstra::new()),
                    "heap" => Box::new(HeapDijkstra::new()),
                    other => return Err(Error::Config(format!("unknown engine '{}'", other))),
                };
            }
            "--print-matrices" => print_matrices = true,
            "--help" | "-h" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            other => {
                return Err(Error::Config(format!("unknown argument '{}'\n{}", other, usage())))
            }
        }
    }

    Ok(Options {
        run: overrides.resolve()?,
        engine,
        print_matrices,
    })
}

fn banner(title: &str) {
    println!("{:-^64}", "");
    println!("{:-^64}", format!(" {} ", title));
    println!("{:-^64}", "");
}

fn run_graph(
    graph: &DenseGraph<f64>,
    origin: usize,
    options: &Options,
) -> Result<Option<f64>, Error> {
    if options.print_matrices {
        print!("{}", report::connectivity_matrix(graph));
        print!("{}", report::distance_matrix(graph));
    }

    let result = options.engine.compute_shortest_paths(graph, origin)?;
    print!("{}", report::result_table(&result));

    match average_distance(&result) {
        Ok(avg) => Ok(Some(avg)),
        Err(Error::NoReachableNodes) => {
            log::warn!("origin {} reaches no other node; graph skipped", origin);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let options = parse_args()?;
    println!("Engine: {}", options.engine.name());

    banner("Reference graph");
    let reference = textbook_graph()?;
    if let Some(avg) = run_graph(&reference, 0, &options)? {
        println!("Average shortest path length: {:.4}", avg);
    }

    for config in &options.run.graphs {
        let mut averages = Vec::with_capacity(options.run.trials);

        for trial in 0..options.run.trials {
            let mut trial_config = config.clone();
            trial_config.seed = config.seed.map(|seed| seed.wrapping_add(trial as u64));

            banner(&format!(
                "Size: {} & Density: {:.0}% (trial {})",
                config.node_count,
                config.density * 100.0,
                trial + 1
            ));
            let graph: DenseGraph<f64> = generate_random_graph(&trial_config)?;
            println!("{} edges", graph.edge_count());

            if let Some(avg) = run_graph(&graph, options.run.origin, &options)? {
                println!("Average shortest path length: {:.4}", avg);
                averages.push(avg);
            }
        }

        if let Some(mean) = mean_of_averages(&averages) {
            println!(
                "Mean over {} graph(s) of {} nodes at density {}: {:.4}",
                averages.len(),
                config.node_count,
                config.density,
                mean
            );
        }
    }

    Ok(())
}
