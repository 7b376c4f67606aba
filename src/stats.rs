use std::collections::HashSet;

use serde::{Serialize, Deserialize};

use crate::graph::VertexId;

/** statistics of a generation */
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationStats {
    /// size of the best clique found so far
    pub best: f64,
    /// size of the smallest clique of the generation
    pub worst: f64,
    /// mean clique size of the generation
    pub mean: f64,
    /// number of cliques that were already built by another ant of the generation
    pub duplicates: f64,
    /// standard deviation of the clique sizes of the generation
    pub sdev: f64,
}

impl GenerationStats {
    /** computes the statistics of a generation.
    cliques must be canonical (sorted) for the duplicate detection.
    */
    pub fn compute(cliques:&[Vec<VertexId>], best_size:usize) -> Self {
        let sizes:Vec<f64> = cliques.iter().map(|c| c.len() as f64).collect();
        let worst = cliques.iter().map(|c| c.len()).min().unwrap_or(best_size);
        let distinct:HashSet<&[VertexId]> = cliques.iter().map(|c| c.as_slice()).collect();
        Self {
            best: best_size as f64,
            worst: worst as f64,
            mean: mean(&sizes),
            duplicates: (cliques.len() - distinct.len()) as f64,
            sdev: standard_deviation(&sizes),
        }
    }

    /// values in the report column order (best, worst, mean, duplicates, sdev)
    pub fn as_array(&self) -> [f64 ; 5] {
        [self.best, self.worst, self.mean, self.duplicates, self.sdev]
    }
}

/// mean of the values (0 if empty)
pub fn mean(values:&[f64]) -> f64 {
    if values.is_empty() { return 0.; }
    values.iter().sum::<f64>() / values.len() as f64
}

/// population standard deviation of the values (0 if empty)
pub fn standard_deviation(values:&[f64]) -> f64 {
    if values.is_empty() { return 0.; }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/** averages each statistic per generation over several runs.
every run must have the same number of generations.
*/
pub fn aggregate_runs(runs:&[Vec<GenerationStats>]) -> Vec<GenerationStats> {
    let nb_generations = runs.iter().map(|r| r.len()).min().unwrap_or(0);
    let nb_runs = runs.len() as f64;
    (0..nb_generations).map(|gen| {
        let mut res = GenerationStats::default();
        for run in runs {
            let s = &run[gen];
            res.best += s.best;
            res.worst += s.worst;
            res.mean += s.mean;
            res.duplicates += s.duplicates;
            res.sdev += s.sdev;
        }
        res.best /= nb_runs;
        res.worst /= nb_runs;
        res.mean /= nb_runs;
        res.duplicates /= nb_runs;
        res.sdev /= nb_runs;
        res
    }).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_cliques() {
        let cliques = vec![vec![0,1,2,3] ; 3];
        let s = GenerationStats::compute(&cliques, 4);
        assert_eq!(s, GenerationStats { best:4., worst:4., mean:4., duplicates:2., sdev:0. });
    }

    #[test]
    fn test_mixed_generation() {
        let cliques = vec![vec![0,1], vec![2,3,4,5], vec![0,1], vec![6,7]];
        let s = GenerationStats::compute(&cliques, 5);
        assert_eq!(s.best, 5.);
        assert_eq!(s.worst, 2.);
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.duplicates, 1.);
        // sizes 2,4,2,2: variance = (3·0.25 + 2.25) / 4 = 0.75
        assert!((s.sdev - 0.75f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(mean(&[]), 0.);
        assert_eq!(standard_deviation(&[3.]), 0.);
        assert_eq!(standard_deviation(&[2., 4., 4., 4., 5., 5., 7., 9.]), 2.);
    }

    #[test]
    fn test_aggregate_runs() {
        let a = GenerationStats { best:4., worst:2., mean:3., duplicates:1., sdev:0.5 };
        let b = GenerationStats { best:6., worst:2., mean:4., duplicates:3., sdev:1.5 };
        let res = aggregate_runs(&[vec![a, a], vec![b, a]]);
        assert_eq!(res.len(), 2);
        assert_eq!(res[0], GenerationStats { best:5., worst:2., mean:3.5, duplicates:2., sdev:1. });
        assert_eq!(res[1], a);
    }
}
