use std::fs;
use std::path::Path;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::map_res;
use nom::sequence::{preceded, separated_pair};

use crate::error::{AcoError, Result};
use crate::graph::PheromoneGraph;


/** reads a DIMACS instance from a file.
every edge starts with the given pheromone level.
*/
pub fn read_from_file<P:AsRef<Path>>(filename:P, initial_pheromone:f64) -> Result<PheromoneGraph> {
    let s = fs::read_to_string(filename)?;
    read_from_str(&s, initial_pheromone)
}

/** reads a DIMACS instance.

Only the edge lines ("e <u> <v>") are used. Vertex identifiers are arbitrary tokens
and vertices are numbered in order of first appearance. Self-loops and repeated edges
are discarded. Comments, the header and unknown lines are skipped.
*/
pub fn read_from_str(s:&str, initial_pheromone:f64) -> Result<PheromoneGraph> {
    let mut res = PheromoneGraph::new();
    let mut header:Option<(usize,usize)> = None;
    let mut check_nb_edges = 0;
    for (i,line) in s.lines().enumerate() {
        match first_token(line) {
            Ok((_, "e")) => {
                let (_,(a,b)) = read_edge(line).map_err(|_| AcoError::Parse {
                    line: i+1,
                    reason: format!("expected 'e <u> <v>', got '{}'", line.trim()),
                })?;
                res.add_edge(a, b, initial_pheromone);
                check_nb_edges += 1;
            },
            Ok((_, "p")) => {
                if let Ok((_,nm)) = read_header(line) { header = Some(nm); }
            },
            _ => {} // comments, empty lines, ...
        }
    }
    if let Some((n,m)) = header {
        if check_nb_edges != m && 2*check_nb_edges != m {
            tracing::warn!(declared = m, read = check_nb_edges, "number of edges differs from the header");
        }
        if res.nb_vertices() > n {
            tracing::warn!(declared = n, read = res.nb_vertices(), "number of vertices differs from the header");
        }
    }
    Ok(res)
}

/// reads a token (sequence of non-whitespace characters)
fn token(s:&str) -> IResult<&str, &str> {
    take_till1(|c:char| c.is_whitespace())(s)
}

/// reads the first token of a line
fn first_token(s:&str) -> IResult<&str, &str> {
    preceded(space0, token)(s)
}

/// reads a number
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        preceded(space0, alt((tag("p edge"), tag("p col")))),
        preceded(space1, separated_pair(integer, space1, integer))
    )(s)
}

/// reads edge line, returns the identifiers of both endpoints
pub fn read_edge(s:&str) -> IResult<&str, (&str,&str)> {
    preceded(
        preceded(space0, tag("e")),
        preceded(space1, separated_pair(token, space1, token))
    )(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let inst = read_from_file("insts/myciel3.col", 5.).unwrap();
        assert_eq!(inst.nb_vertices(), 11);
        assert_eq!(inst.nb_edges(), 20);
        assert_eq!(inst.vertex_name(0).unwrap(), "1");
        assert!(inst.pheromone_levels().all(|p| p == 5.));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(read_from_file("insts/does-not-exist.col", 5.), Err(AcoError::Io(_))));
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1";
        assert_eq!(read_header(s).unwrap().1, (2,1));
        assert_eq!(read_header("p col 2 1").unwrap().1, (2,1));
        assert!(read_header("e 1 2").is_err());
    }

    #[test]
    fn test_read_edge() {
        assert_eq!(read_edge("e 1 2").unwrap().1, ("1","2"));
        assert_eq!(read_edge("e  alpha\tbeta extra").unwrap().1, ("alpha","beta"));
        assert!(read_edge("e 1").is_err());
        assert!(read_edge("edge 1 2").is_err());
    }

    #[test]
    fn test_read_comments_and_loops() {
        let s = "c this is a test comment\r\np edge 3 3\r\ne a b\r\ne b b\r\n\r\ne b c\r\ne c b\r\nx 1 2\r\n";
        let inst = read_from_str(s, 1.).unwrap();
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.nb_edges(), 2);
        assert!(inst.are_adjacent(0, 1));
        assert!(!inst.are_adjacent(0, 2));
    }

    #[test]
    fn test_malformed_edge() {
        let s = "p edge 2 1\ne 1\n";
        match read_from_str(s, 1.) {
            Err(AcoError::Parse { line, .. }) => assert_eq!(line, 2),
            r => panic!("unexpected result {:?}", r),
        }
    }
}
