use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use clap::ArgMatches;
use rand::Rng;
use serde_json::{json, Value};

use crate::{
    colony::ColonyConfig,
    error::{AcoError, Result},
    stats::{GenerationStats, standard_deviation},
};

/** parameters given on the command line */
#[derive(Debug, Clone)]
pub struct Params {
    /// instance filename
    pub instance: String,
    /// colony parameters (with the seed already resolved)
    pub config: ColonyConfig,
    /// prints the statistics of each generation
    pub verbose: bool,
    /// performs several runs and writes the averaged statistics in outdir
    pub getstats: bool,
    /// directory in which the statistics are written
    pub outdir: String,
    /// if given, the performance logs (json) are written in this file
    pub perf_file: Option<String>,
}

/// parses the value of an argument
fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<T> {
    let s = main_args.value_of(name).ok_or_else(||
        AcoError::InvalidConfiguration(format!("missing argument '{}'", name))
    )?;
    s.parse::<T>().map_err(|_|
        AcoError::InvalidConfiguration(format!("unable to parse {} '{}'", name, s))
    )
}

/** returns the seed to use. a non-positive seed means "pick one at random" */
pub fn resolve_seed(seed:i64) -> u64 {
    if seed <= 0 {
        rand::thread_rng().gen_range(1..(1u64 << 32))
    } else {
        seed as u64
    }
}

/** reads command line input and returns the parameters */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let instance = main_args.value_of("instance").ok_or_else(||
        AcoError::InvalidConfiguration("missing instance file".to_string())
    )?.to_string();
    let seed = resolve_seed(parse_arg::<i64>(main_args, "seed")?);
    let config = ColonyConfig {
        ants: parse_arg(main_args, "ants")?,
        generations: parse_arg(main_args, "gens")?,
        min_pheromone: parse_arg(main_args, "minpheromone")?,
        max_pheromone: parse_arg(main_args, "maxpheromone")?,
        evaporation_rate: parse_arg(main_args, "evaporation")?,
        seed,
        parallel: main_args.is_present("parallel"),
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}", e);
            Some(e.to_string())
        }
    };
    Ok(Params {
        instance,
        config,
        verbose: main_args.is_present("verbose"),
        getstats: main_args.is_present("getstats"),
        outdir: main_args.value_of("outdir").unwrap_or("analysis").to_string(),
        perf_file,
    })
}

/** name of the statistics file: <instance>-<ants>-<generations>-<evaporation> */
pub fn stats_filename(instance:&str, ants:usize, generations:usize, evaporation_rate:f64) -> String {
    let name = Path::new(instance).file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(instance);
    let stem = name.split('.').next().unwrap_or(name);
    format!("{}-{}-{}-{:.1}", stem, ants, generations, evaporation_rate)
}

/** line displayed for a generation in verbose mode (generations start at 1) */
pub fn format_generation(gen:usize, s:&GenerationStats) -> String {
    format!(
        "gen:{},best:{:.6},worst:{:.6},mean:{:.6},rep:{:.6},sdev:{:.6}",
        gen, s.best, s.worst, s.mean, s.duplicates, s.sdev
    )
}

/** csv encoding of the statistics, followed by the standard deviation of the best sizes and the time */
pub fn stats_to_csv(stats:&[GenerationStats], elapsed:Duration) -> String {
    let mut res = String::from("gen,best,worst,mean,rep,sdev\n");
    for (i,s) in stats.iter().enumerate() {
        res += format!(
            "{},{:.6},{:.6},{:.6},{:.6},{:.6}\n",
            i+1, s.best, s.worst, s.mean, s.duplicates, s.sdev
        ).as_str();
    }
    let best:Vec<f64> = stats.iter().map(|s| s.best).collect();
    res += format!("BestSdev: {:.6}, Time: {:?}", standard_deviation(&best), elapsed).as_str();
    res
}

/** writes the statistics (csv) in dir/filename. creates the directory if needed */
pub fn write_stats(dir:&str, filename:&str, stats:&[GenerationStats], elapsed:Duration) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = Path::new(dir).join(filename);
    fs::write(&path, stats_to_csv(stats, elapsed))?;
    Ok(path)
}

/** performance logs of a search */
pub fn perf_json(
    inst_filename:&str,
    config:&ColonyConfig,
    nb_runs:usize,
    best_clique:&[String],
    elapsed:Duration,
    stats:&[GenerationStats],
) -> Value {
    json!({
        "inst_name": inst_filename,
        "config": config,
        "nb_runs": nb_runs,
        "best_size": best_clique.len(),
        "best_clique": best_clique,
        "time_searched": elapsed.as_secs_f32(),
        "stats": stats,
    })
}

/// exports the performance logs to a file
pub fn export_perf(filename:&str, perf:&Value) -> Result<()> {
    fs::write(filename, serde_json::to_string(perf)?)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn some_stats() -> Vec<GenerationStats> {
        vec![
            GenerationStats { best:3., worst:1., mean:2., duplicates:0., sdev:0.5 },
            GenerationStats { best:5., worst:2., mean:3.5, duplicates:4., sdev:1. },
        ]
    }

    #[test]
    fn test_stats_filename() {
        assert_eq!(stats_filename("datasets/easy.col", 20, 30, 0.1), "easy-20-30-0.1");
        assert_eq!(stats_filename("myciel3", 5, 2, 0.3), "myciel3-5-2-0.3");
    }

    #[test]
    fn test_stats_to_csv() {
        let csv = stats_to_csv(&some_stats(), Duration::from_millis(1500));
        let lines:Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "gen,best,worst,mean,rep,sdev");
        assert_eq!(lines[1], "1,3.000000,1.000000,2.000000,0.000000,0.500000");
        assert_eq!(lines[2], "2,5.000000,2.000000,3.500000,4.000000,1.000000");
        assert_eq!(lines[3], "BestSdev: 1.000000, Time: 1.5s");
    }

    #[test]
    fn test_format_generation() {
        assert_eq!(
            format_generation(1, &some_stats()[0]),
            "gen:1,best:3.000000,worst:1.000000,mean:2.000000,rep:0.000000,sdev:0.500000"
        );
    }

    #[test]
    fn test_resolve_seed() {
        assert_eq!(resolve_seed(4132), 4132);
        assert!(resolve_seed(0) > 0);
        assert!(resolve_seed(-3) > 0);
    }

    #[test]
    fn test_perf_json() {
        let stats = some_stats();
        let names = vec!["a".to_string(), "b".to_string()];
        let v = perf_json("k.col", &ColonyConfig::default(), 1, &names, Duration::from_secs(2), &stats);
        assert_eq!(v["best_size"], 2);
        assert_eq!(v["config"]["ants"], 100);
        assert_eq!(v["stats"][1]["duplicates"], 4.);
        assert_eq!(v["best_clique"][0], "a");
    }
}
