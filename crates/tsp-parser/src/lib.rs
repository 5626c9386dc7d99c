//! Readers for the two TSP instance file formats the solver accepts: a plain edge list and a 2D
//! geometric coordinate list.

use std::{fs, num::ParseIntError, path::Path};

use thiserror::Error;
use tsp_core::{Graph, GraphError};

#[derive(Error, Debug)]
pub enum ParserError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed header line: {0:?}")]
    MalformedHeader(String),
    #[error("expected {expected} data lines, found {found}")]
    WrongLineCount { expected: usize, found: usize },
    #[error("could not parse integer field: {0}")]
    InvalidInteger(#[from] ParseIntError),
    #[error("could not parse coordinate field: {0}")]
    InvalidFloat(#[from] std::num::ParseFloatError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reads an edge-list instance: a header line `N M` followed by `M` lines `src dst weight`.
///
/// `src`/`dst` must be in `[0, N)`; `weight` is a non-negative integer.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<Graph, ParserError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();

    let header = lines
        .next()
        .ok_or_else(|| ParserError::MalformedHeader(String::new()))?;
    let (node_count, edge_count) = parse_header_pair(header)?;

    let mut graph = Graph::new(node_count);
    let mut read = 0;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (src, dst, weight) = (
            next_field(&mut fields, line)?,
            next_field(&mut fields, line)?,
            next_field(&mut fields, line)?,
        );
        let src: usize = src.parse()?;
        let dst: usize = dst.parse()?;
        let weight: u64 = weight.parse()?;
        graph.add_edge(src, dst, weight)?;
        read += 1;
    }

    if read != edge_count {
        return Err(ParserError::WrongLineCount {
            expected: edge_count,
            found: read,
        });
    }

    log::debug!("read edge-list graph: {node_count} nodes, {edge_count} edges");
    Ok(graph)
}

/// Reads a geometric instance: a header line `N` followed by `N` lines `x y`. The resulting graph
/// is the complete graph over those points with Euclidean rounded edge weights.
pub fn read_geo<P: AsRef<Path>>(path: P) -> Result<Graph, ParserError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();

    let header = lines
        .next()
        .ok_or_else(|| ParserError::MalformedHeader(String::new()))?;
    let node_count: usize = header
        .trim()
        .parse()
        .map_err(|_| ParserError::MalformedHeader(header.to_string()))?;

    let mut xs = Vec::with_capacity(node_count);
    let mut ys = Vec::with_capacity(node_count);
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let x = next_field(&mut fields, line)?;
        let y = next_field(&mut fields, line)?;
        xs.push(x.parse()?);
        ys.push(y.parse()?);
    }

    if xs.len() != node_count {
        return Err(ParserError::WrongLineCount {
            expected: node_count,
            found: xs.len(),
        });
    }

    log::debug!("read geometric graph: {node_count} points");
    Ok(Graph::new_from_coordinates(&xs, &ys)?)
}

fn next_field<'a>(
    fields: &mut std::str::SplitWhitespace<'a>,
    line: &str,
) -> Result<&'a str, ParserError> {
    fields
        .next()
        .ok_or_else(|| ParserError::MalformedHeader(line.to_string()))
}

fn parse_header_pair(header: &str) -> Result<(usize, usize), ParserError> {
    let mut fields = header.split_whitespace();
    let n = next_field(&mut fields, header)?.parse()?;
    let m = next_field(&mut fields, header)?.parse()?;
    Ok((n, m))
}
