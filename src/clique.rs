use rand::Rng;

use crate::error::Result;
use crate::graph::{PheromoneGraph, VertexId};
use crate::selector::weighted_choice;

/** affinity of each candidate with the current clique:
(Σ_{u ∈ clique} τ(v,u))² for each candidate v
*/
pub fn pheromone_factors(graph:&PheromoneGraph, candidates:&[VertexId], clique:&[VertexId]) -> Vec<f64> {
    candidates.iter().map(|v| {
        let sum:f64 = clique.iter().map(|u| graph.pheromone(*v, *u)).sum();
        sum * sum
    }).collect()
}

/** builds a clique (one ant).

Starts from a random vertex and marks its neighbors as candidates.
Then, while the set of candidates is not empty, choose a candidate with a probability
proportional to its pheromone factor, insert it into the clique and only keep the
candidates adjacent to it.
The returned clique is sorted by vertex id.
*/
pub fn build_clique<R:Rng+?Sized>(graph:&PheromoneGraph, rng:&mut R) -> Result<Vec<VertexId>> {
    let initial_vertex = graph.random_vertex(rng)?;
    let mut clique = vec![initial_vertex];
    let mut candidates:Vec<VertexId> = graph.neighbors(initial_vertex)?.to_vec();
    while !candidates.is_empty() {
        let factors = pheromone_factors(graph, &candidates, &clique);
        let next_vertex = weighted_choice(&candidates, &factors, rng)?;
        clique.push(next_vertex);
        // keep candidates that see every vertex of the clique
        candidates.retain(|v| graph.are_adjacent(next_vertex, *v));
    }
    clique.sort_unstable();
    Ok(clique)
}

/** returns true if every pair of vertices in the set is adjacent (and there is no repetition) */
pub fn is_clique(graph:&PheromoneGraph, clique:&[VertexId]) -> bool {
    for (i,a) in clique.iter().enumerate() {
        for b in &clique[i+1..] {
            if !graph.are_adjacent(*a, *b) { return false; }
        }
    }
    true
}

/** identifiers of the clique vertices, sorted */
pub fn clique_names(graph:&PheromoneGraph, clique:&[VertexId]) -> Result<Vec<String>> {
    let mut res = clique.iter()
        .map(|v| graph.vertex_name(*v).map(|s| s.to_string()))
        .collect::<Result<Vec<String>>>()?;
    res.sort();
    Ok(res)
}
