use crate::graph::{PheromoneGraph, VertexId};

/** elitist pheromone update.

 - evaporation: τ ← max(τ - ρ·τ, τ_min) on every edge
 - reinforcement: the best clique of the generation deposits 1/(1+Δ) on each of its edges
   (bounded by τ_max), where Δ is how many vertices it lacks compared to the best clique
   found since the beginning of the search.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PheromoneUpdater {
    /// lower bound of the pheromone levels
    pub min_pheromone: f64,
    /// upper bound of the pheromone levels
    pub max_pheromone: f64,
    /// evaporation rate ρ ∈ (0,1)
    pub evaporation_rate: f64,
}

impl PheromoneUpdater {
    /// creates an updater
    pub fn new(min_pheromone:f64, max_pheromone:f64, evaporation_rate:f64) -> Self {
        Self { min_pheromone, max_pheromone, evaporation_rate }
    }

    /// evaporates the pheromone on every edge
    pub fn evaporate(&self, graph:&mut PheromoneGraph) {
        for level in graph.pheromones_mut() {
            *level = (*level - *level * self.evaporation_rate).max(self.min_pheromone);
        }
    }

    /** reinforces the edges of the generation best clique.
    best_size is the size of the best clique found so far (already updated with this generation).
    */
    pub fn reinforce(&self, graph:&mut PheromoneGraph, generation_best:&[VertexId], best_size:usize) {
        let deficit = best_size.saturating_sub(generation_best.len());
        let deposit = 1. / (1. + deficit as f64);
        for (i,v1) in generation_best.iter().enumerate() {
            for v2 in &generation_best[i+1..] {
                let level = (graph.pheromone(*v1, *v2) + deposit).min(self.max_pheromone);
                graph.set_pheromone(*v1, *v2, level);
            }
        }
    }

    /// evaporation followed by the reinforcement of the generation best clique
    pub fn update(&self, graph:&mut PheromoneGraph, generation_best:&[VertexId], best_size:usize) {
        self.evaporate(graph);
        self.reinforce(graph, generation_best, best_size);
    }
}

/** longest clique of a generation (the first one found in case of ties). None if there is no clique. */
pub fn generation_best(cliques:&[Vec<VertexId>]) -> Option<&Vec<VertexId>> {
    let mut res:Option<&Vec<VertexId>> = None;
    for c in cliques {
        if res.map_or(true, |b| c.len() > b.len()) {
            res = Some(c);
        }
    }
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> PheromoneGraph {
        PheromoneGraph::from_edges(&[("a","b"), ("b","c"), ("a","c"), ("c","d")], 5.)
    }

    #[test]
    fn test_evaporation() {
        let mut g = path();
        let updater = PheromoneUpdater::new(0.1, 5., 0.2);
        updater.evaporate(&mut g);
        assert!(g.pheromone_levels().all(|p| (p - 4.).abs() < 1e-12));
        for _ in 0..100 { updater.evaporate(&mut g); }
        assert!(g.pheromone_levels().all(|p| p == 0.1));
    }

    #[test]
    fn test_reinforce_full_deposit() {
        let mut g = path();
        for p in g.pheromones_mut() { *p = 1.; }
        let updater = PheromoneUpdater::new(0.1, 5., 0.2);
        updater.reinforce(&mut g, &[0,1,2], 3);
        assert_eq!(g.pheromone(0, 1), 2.);
        assert_eq!(g.pheromone(1, 0), 2.);
        assert_eq!(g.pheromone(2, 0), 2.);
        assert_eq!(g.pheromone(2, 3), 1.);
    }

    #[test]
    fn test_reinforce_with_deficit() {
        let mut g = path();
        for p in g.pheromones_mut() { *p = 1.; }
        let updater = PheromoneUpdater::new(0.1, 5., 0.2);
        // best clique has 5 vertices, generation best only 2: deposit 1/4
        updater.reinforce(&mut g, &[2,3], 5);
        assert_eq!(g.pheromone(2, 3), 1.25);
        assert_eq!(g.pheromone(3, 2), 1.25);
    }

    #[test]
    fn test_reinforce_bounded() {
        let mut g = path();
        let updater = PheromoneUpdater::new(0.1, 5., 0.2);
        updater.update(&mut g, &[0,1,2], 3);
        assert_eq!(g.pheromone(0, 1), 5.);
        assert_eq!(g.pheromone(2, 3), 4.);
        assert!(g.pheromone_levels().all(|p| (0.1..=5.).contains(&p)));
    }

    #[test]
    fn test_generation_best_first_wins() {
        let cliques = vec![vec![1], vec![2,3], vec![4,5], vec![6]];
        assert_eq!(generation_best(&cliques), Some(&vec![2,3]));
        assert_eq!(generation_best(&[]), None);
    }
}
