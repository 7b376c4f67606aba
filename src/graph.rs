use std::collections::HashMap;

use bit_set::BitSet;
use rand::Rng;

use crate::error::{AcoError, Result};

/** Vertex Id (index in the vertex arena) */
pub type VertexId = usize;

/** models an undirected graph carrying a pheromone level on each edge.

Vertices are stored in an arena (numbered in insertion order) and keep the
identifier they had in the instance file. Each edge (u,v) is stored in both
adjacency lists with the same pheromone level. `set_pheromone` writes both
directions, so the structure stays symmetric.
*/
#[derive(Debug, Clone, Default)]
pub struct PheromoneGraph {
    /// nb edges
    m: usize,
    /// names[v]: identifier of v in the instance
    names: Vec<String>,
    /// ids[name]: vertex id of a given identifier
    ids: HashMap<String, VertexId>,
    /// adj_list[u]: sorted list of vertices adjacent to u
    adj_list: Vec<Vec<VertexId>>,
    /// pheromones[u][i]: pheromone level of the edge (u, adj_list[u][i])
    pheromones: Vec<Vec<f64>>,
    /// adj_matrix[u] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}

impl PheromoneGraph {

    /// creates an empty graph
    pub fn new() -> Self { Self::default() }

    /** builds a graph from a list of edges given by their identifiers.
    every edge starts with the same pheromone level. self-loops are discarded.
    */
    pub fn from_edges<S:AsRef<str>>(edges:&[(S,S)], initial_pheromone:f64) -> Self {
        let mut res = Self::new();
        for (a,b) in edges {
            res.add_edge(a.as_ref(), b.as_ref(), initial_pheromone);
        }
        res
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.names.len() }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// iterator over the vertex ids
    pub fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// identifier of vertex v in the instance
    pub fn vertex_name(&self, v:VertexId) -> Result<&str> {
        self.names.get(v).map(|s| s.as_str()).ok_or(AcoError::UnknownVertex(v))
    }

    /// vertex id associated with an identifier
    pub fn vertex_id(&self, name:&str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /** inserts a vertex (if it does not exist yet) and returns its id */
    pub fn add_vertex(&mut self, name:&str) -> VertexId {
        if let Some(v) = self.vertex_id(name) { return v; }
        let v = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), v);
        self.adj_list.push(Vec::new());
        self.pheromones.push(Vec::new());
        self.adj_matrix.push(BitSet::default());
        v
    }

    /** inserts an undirected edge between two identifiers.
    returns false if the edge is a self-loop or already exists (in which case nothing changes).
    */
    pub fn add_edge(&mut self, a:&str, b:&str, pheromone:f64) -> bool {
        if a == b { return false; }
        let u = self.add_vertex(a);
        let v = self.add_vertex(b);
        if self.adj_matrix[u].contains(v) { return false; }
        self.insert_arc(u, v, pheromone);
        self.insert_arc(v, u, pheromone);
        self.m += 1;
        true
    }

    /// adds v to the (sorted) adjacency list of u
    fn insert_arc(&mut self, u:VertexId, v:VertexId, pheromone:f64) {
        let pos = match self.adj_list[u].binary_search(&v) {
            Ok(pos) | Err(pos) => pos
        };
        self.adj_list[u].insert(pos, v);
        self.pheromones[u].insert(pos, pheromone);
        self.adj_matrix[u].insert(v);
    }

    /// list of vertices adjacent to v (sorted by vertex id)
    pub fn neighbors(&self, v:VertexId) -> Result<&[VertexId]> {
        self.adj_list.get(v).map(|l| l.as_slice()).ok_or(AcoError::UnknownVertex(v))
    }

    /// list of vertices adjacent to the vertex identified by name
    pub fn neighbors_by_name(&self, name:&str) -> Result<&[VertexId]> {
        let v = self.vertex_id(name)
            .ok_or_else(|| AcoError::UnknownVertexName(name.to_string()))?;
        self.neighbors(v)
    }

    /// number of neighbors of u (0 if u does not exist)
    pub fn degree(&self, u:VertexId) -> usize {
        self.adj_list.get(u).map_or(0, |l| l.len())
    }

    /** returns if u and v are adjacent (O(1)) */
    pub fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.adj_matrix.get(u).map_or(false, |row| row.contains(v))
    }

    /** selects a vertex uniformly at random */
    pub fn random_vertex<R:Rng+?Sized>(&self, rng:&mut R) -> Result<VertexId> {
        match self.nb_vertices() {
            0 => Err(AcoError::EmptyGraph),
            n => Ok(rng.gen_range(0..n)),
        }
    }

    /// position of v in the adjacency list of u
    fn arc_position(&self, u:VertexId, v:VertexId) -> Option<usize> {
        if !self.are_adjacent(u, v) { return None; }
        self.adj_list[u].binary_search(&v).ok()
    }

    /** pheromone level on the edge (u,v). 0 if the edge does not exist. */
    pub fn pheromone(&self, u:VertexId, v:VertexId) -> f64 {
        match self.arc_position(u, v) {
            None => 0.,
            Some(pos) => self.pheromones[u][pos]
        }
    }

    /** overwrites the pheromone level on the edge (u,v) (both directions).
    does nothing if the edge does not exist. The caller is responsible for clamping.
    */
    pub fn set_pheromone(&mut self, u:VertexId, v:VertexId, value:f64) {
        if let Some(pos) = self.arc_position(u, v) {
            self.pheromones[u][pos] = value;
        }
        if let Some(pos) = self.arc_position(v, u) {
            self.pheromones[v][pos] = value;
        }
    }

    /// mutable access to every stored pheromone level (each edge appears in both directions)
    pub fn pheromones_mut(&mut self) -> impl Iterator<Item=&mut f64> + '_ {
        self.pheromones.iter_mut().flatten()
    }

    /// every stored pheromone level (each edge appears in both directions)
    pub fn pheromone_levels(&self) -> impl Iterator<Item=f64> + '_ {
        self.pheromones.iter().flatten().copied()
    }

    /// edge list (u < v)
    pub fn edges(&self) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::with_capacity(self.m);
        for (i,l) in self.adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        println!("\t{} \t min degree", degrees.iter().min().copied().unwrap_or(0));
        println!("\t{} \t max degree", degrees.iter().max().copied().unwrap_or(0));
    }
}
