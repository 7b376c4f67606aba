use std::time::Instant;

use clap::{App, load_yaml};
use tracing_subscriber::EnvFilter;

use aco_clique::clique::clique_names;
use aco_clique::colony::{Colony, ColonyConfig};
use aco_clique::dimacs::read_from_file;
use aco_clique::error::Result;
use aco_clique::stats::aggregate_runs;
use aco_clique::util::{
    Params, read_params, stats_filename, format_generation, write_stats, perf_json, export_perf
};

/// number of runs performed to produce the averaged statistics
const NB_RUNS_STATS:usize = 30;


/** searches a maximum clique using an ant colony. */
pub fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("aco_clique=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    // parse arguments
    let yaml = load_yaml!("aco_clique.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let res = read_params(&main_args).and_then(solve);
    if let Err(e) = res {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// reads the instance, runs the colony (once, or NB_RUNS_STATS times) and exports the results
fn solve(params:Params) -> Result<()> {
    params.config.validate()?;
    println!("reading instance: {}...", params.instance);
    let graph = read_from_file(&params.instance, params.config.max_pheromone)?;
    graph.display_statistics();
    let stats_file = stats_filename(
        &params.instance,
        params.config.ants,
        params.config.generations,
        params.config.evaporation_rate
    );
    println!("{}", stats_file);
    println!("seed: {}", params.config.seed);
    println!("=======================");
    let nb_runs = if params.getstats { NB_RUNS_STATS } else { 1 };
    let mut all_stats = Vec::with_capacity(nb_runs);
    let mut best_clique:Vec<String> = Vec::new();
    let t_start = Instant::now();
    for run in 0..nb_runs {
        let config = ColonyConfig {
            seed: params.config.seed.wrapping_add(run as u64),
            ..params.config.clone()
        };
        let mut colony = Colony::new(config, graph.clone())?;
        let result = colony.run()?;
        if params.verbose {
            for (i,s) in result.stats.iter().enumerate() {
                println!("{}", format_generation(i+1, s));
            }
        }
        println!("Run {} Max Clique: {}", run+1, result.best_size);
        if result.best_size > best_clique.len() {
            best_clique = clique_names(colony.graph(), &result.best_clique)?;
        }
        all_stats.push(result.stats);
    }
    let elapsed = t_start.elapsed();
    println!("ACO took {:?}", elapsed);
    println!("best clique ({}): {}", best_clique.len(), best_clique.join(" "));
    let stats = aggregate_runs(&all_stats);
    if params.getstats {
        let path = write_stats(&params.outdir, &stats_file, &stats, elapsed)?;
        println!("statistics written in {}", path.display());
    }
    if let Some(filename) = &params.perf_file {
        let perf = perf_json(&params.instance, &params.config, nb_runs, &best_clique, elapsed, &stats);
        export_perf(filename, &perf)?;
    }
    Ok(())
}
