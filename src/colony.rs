use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::clique::build_clique;
use crate::error::{AcoError, Result};
use crate::graph::{PheromoneGraph, VertexId};
use crate::pheromone::{PheromoneUpdater, generation_best};
use crate::stats::GenerationStats;

/** parameters of the colony */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyConfig {
    /// number of ants (cliques built) per generation
    pub ants: usize,
    /// number of generations
    pub generations: usize,
    /// lower bound of the pheromone levels
    pub min_pheromone: f64,
    /// upper bound of the pheromone levels
    pub max_pheromone: f64,
    /// evaporation rate, in (0,1)
    pub evaporation_rate: f64,
    /// random seed
    pub seed: u64,
    /// if true, the ants of a generation are built in parallel
    pub parallel: bool,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            ants: 100,
            generations: 10,
            min_pheromone: 0.1,
            max_pheromone: 5.,
            evaporation_rate: 0.2,
            seed: 1,
            parallel: false,
        }
    }
}

impl ColonyConfig {
    /** checks the parameter bounds:
     - ants > 0, generations > 0
     - 0 < min_pheromone < max_pheromone
     - 0 < evaporation_rate < 1
    */
    pub fn validate(&self) -> Result<()> {
        if self.ants == 0 {
            return Err(AcoError::InvalidConfiguration("ants must be > 0".to_string()));
        }
        if self.generations == 0 {
            return Err(AcoError::InvalidConfiguration("generations must be > 0".to_string()));
        }
        if !self.min_pheromone.is_finite() || !self.max_pheromone.is_finite()
            || self.min_pheromone <= 0. || self.max_pheromone <= self.min_pheromone {
            return Err(AcoError::InvalidConfiguration(format!(
                "must be '0 < minpheromone < maxpheromone' (got {} and {})",
                self.min_pheromone, self.max_pheromone
            )));
        }
        if !(self.evaporation_rate > 0. && self.evaporation_rate < 1.) {
            return Err(AcoError::InvalidConfiguration(format!(
                "evaporation must be between 0.0 and 1.0 (got {})", self.evaporation_rate
            )));
        }
        Ok(())
    }

    /// pheromone updater using the bounds and evaporation rate of the configuration
    pub fn updater(&self) -> PheromoneUpdater {
        PheromoneUpdater::new(self.min_pheromone, self.max_pheromone, self.evaporation_rate)
    }
}

/** progress of a colony */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColonyState {
    /// no generation performed yet
    Idle,
    /// Running(g): generation g is the next one to be performed
    Running(usize),
    /// every generation has been performed
    Done,
}

/** result of a run */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// size of the best clique found
    pub best_size: usize,
    /// best clique found (sorted vertex ids)
    pub best_clique: Vec<VertexId>,
    /// statistics of each generation (generation 0 first)
    pub stats: Vec<GenerationStats>,
}

/** Ant colony searching for a maximum clique.

Each generation builds `ants` cliques that all read the same pheromone levels,
then evaporates the pheromone and reinforces the best clique of the generation.
*/
#[derive(Debug)]
pub struct Colony {
    /// parameters
    config: ColonyConfig,
    /// graph and pheromone levels (modified after each generation)
    graph: PheromoneGraph,
    /// pheromone update procedure
    updater: PheromoneUpdater,
    /// best clique found since the beginning of the search
    best_clique: Vec<VertexId>,
    /// statistics of the performed generations
    stats: Vec<GenerationStats>,
    /// current state
    state: ColonyState,
    /// random number generator (gives the seed of each ant)
    rng: StdRng,
}

impl Colony {
    /// creates a colony. fails if the configuration is invalid
    pub fn new(config:ColonyConfig, graph:PheromoneGraph) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            updater: config.updater(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
            graph,
            best_clique: Vec::new(),
            stats: Vec::new(),
            state: ColonyState::Idle,
        })
    }

    /// current state
    pub fn state(&self) -> ColonyState { self.state }

    /// graph (with its current pheromone levels)
    pub fn graph(&self) -> &PheromoneGraph { &self.graph }

    /// parameters
    pub fn config(&self) -> &ColonyConfig { &self.config }

    /// best clique found so far
    pub fn best_clique(&self) -> &[VertexId] { &self.best_clique }

    /// statistics of the generations performed so far
    pub fn stats(&self) -> &[GenerationStats] { &self.stats }

    /** builds the cliques of a generation.
    every ant gets its own random generator, seeded from the colony generator. Thus, the
    parallel and sequential versions build the same cliques.
    */
    fn build_cliques(&mut self) -> Result<Vec<Vec<VertexId>>> {
        let seeds:Vec<u64> = (0..self.config.ants).map(|_| self.rng.gen()).collect();
        let graph = &self.graph;
        let ant = |seed:&u64| build_clique(graph, &mut StdRng::seed_from_u64(*seed));
        if self.config.parallel {
            seeds.par_iter().map(ant).collect()
        } else {
            seeds.iter().map(ant).collect()
        }
    }

    /** performs the next generation and returns its statistics.
    returns None if every generation has already been performed.
    */
    pub fn next_generation(&mut self) -> Result<Option<GenerationStats>> {
        let generation = match self.state {
            ColonyState::Done => return Ok(None),
            ColonyState::Idle => 0,
            ColonyState::Running(g) => g,
        };
        self.state = ColonyState::Running(generation);
        let cliques = self.build_cliques()?;
        let gen_best = generation_best(&cliques).ok_or(AcoError::EmptyCandidateSet)?;
        if gen_best.len() > self.best_clique.len() {
            self.best_clique = gen_best.clone();
            tracing::info!(generation, size = self.best_clique.len(), "new best clique");
        }
        self.updater.update(&mut self.graph, gen_best, self.best_clique.len());
        let stats = GenerationStats::compute(&cliques, self.best_clique.len());
        tracing::debug!(
            generation,
            best = stats.best,
            worst = stats.worst,
            mean = stats.mean,
            duplicates = stats.duplicates,
            sdev = stats.sdev,
            "generation done"
        );
        self.stats.push(stats);
        self.state = if generation + 1 >= self.config.generations {
            ColonyState::Done
        } else {
            ColonyState::Running(generation + 1)
        };
        Ok(Some(stats))
    }

    /** performs the remaining generations.
    returns the best clique size and the statistics of every generation.
    */
    pub fn run(&mut self) -> Result<RunResult> {
        tracing::info!(
            ants = self.config.ants,
            generations = self.config.generations,
            seed = self.config.seed,
            parallel = self.config.parallel,
            "starting colony"
        );
        while self.next_generation()?.is_some() {}
        tracing::info!(best = self.best_clique.len(), "colony done");
        Ok(RunResult {
            best_size: self.best_clique.len(),
            best_clique: self.best_clique.clone(),
            stats: self.stats.clone(),
        })
    }
}
