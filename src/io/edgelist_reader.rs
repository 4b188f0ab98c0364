use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
    str::FromStr,
};

use log::warn;

use crate::graph::{Edge, EdgeOps, GraphEdgeEditing, GraphNew, Node, NumNodes, Weight};

pub type Result<T> = std::io::Result<T>;

pub trait GraphEdgeListReader: Sized {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl<G> GraphEdgeListReader for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        let edge_reader = EdgeListReader::try_new(reader)?;
        let mut graph = Self::new(edge_reader.number_of_nodes());
        graph.set_edges(edge_reader);
        Ok(graph)
    }

    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_edge_list(buf_reader)
    }
}

/// Streaming parser for the weighted edge-list format: a header line of a
/// marker character followed by the node count (`#12`), then one
/// tab-separated `u	v	w` triple per line with 1-based node ids.
///
/// A broken header is a hard error. Broken edge lines are logged and
/// skipped; parsing continues with the next line.
pub struct EdgeListReader<R> {
    lines: Lines<R>,
    number_of_nodes: NumNodes,
}

impl<R: BufRead> EdgeListReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut edge_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
        };

        edge_reader.number_of_nodes = edge_reader.parse_header()?;
        Ok(edge_reader)
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl<R: BufRead> Iterator for EdgeListReader<R> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line()
            .unwrap()
            .map(|Edge(u, v, w)| Edge(u - 1, v - 1, w))
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

impl<R: BufRead> EdgeListReader<R> {
    fn next_non_blank_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_header(&mut self) -> Result<NumNodes> {
        let line = self.next_non_blank_line()?;

        raise_error_unless!(line.is_some(), ErrorKind::InvalidData, "No header found");
        let line = line.unwrap();

        // the first character is the marker and is stripped before parsing
        let mut chars = line.trim_start().chars();
        chars.next();
        let count = chars.as_str().trim();

        let parsed = count.parse::<NumNodes>();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid header found; cannot parse node count from {count:?}")
        );

        let number_of_nodes = parsed.unwrap();
        raise_error_unless!(
            number_of_nodes > 0,
            ErrorKind::InvalidData,
            "Invalid header found; node count must be positive"
        );

        Ok(number_of_nodes)
    }

    /// Returns the next well-formed edge with its endpoints still 1-based,
    /// or None at the end of input.
    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        loop {
            let Some(line) = self.next_non_blank_line()? else {
                return Ok(None);
            };

            match self.parse_triple(&line) {
                Ok(edge) => return Ok(Some(edge)),
                Err(reason) => warn!("skipping edge line {line:?}: {reason}"),
            }
        }
    }

    fn parse_triple(&self, line: &str) -> std::result::Result<Edge, String> {
        let mut parts = line.split('\t').filter(|t| !t.trim().is_empty());

        let source: Node = parse_field(&mut parts, "source node")?;
        let target: Node = parse_field(&mut parts, "target node")?;
        let weight: Weight = parse_field(&mut parts, "edge weight")?;

        if parts.next().is_some() {
            return Err("trailing fields after the edge weight".into());
        }

        for node in [source, target] {
            if !(1..=self.number_of_nodes).contains(&node) {
                return Err(format!("node id {node} out of range"));
            }
        }
        let edge = Edge(source, target, weight);
        if edge.is_loop() {
            return Err(format!("self-loop at node {source}"));
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(format!("weight {weight} is not a non-negative finite number"));
        }

        Ok(edge)
    }
}

fn parse_field<'a, T: FromStr>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> std::result::Result<T, String> {
    let token = parts
        .next()
        .ok_or_else(|| format!("premature end of line when parsing {name}"))?;

    token
        .trim()
        .parse()
        .map_err(|_| format!("cannot parse {name} from {token:?}"))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::InvariantCheck;
    use crate::graph::*;
    use crate::heuristic::nearest_neighbor_tour;

    use glob::glob;
    use itertools::Itertools;
    use std::fs::File;
    use std::io::BufReader;

    fn reader_for(content: &str) -> EdgeListReader<BufReader<&[u8]>> {
        EdgeListReader::try_new(BufReader::new(content.as_bytes())).unwrap()
    }

    #[test]
    fn test_success() {
        let edge_reader = reader_for("#4\n1\t2\t5\n2\t3\t1\n3\t4\t2\n1\t4\t10\n");

        assert_eq!(edge_reader.number_of_nodes(), 4);

        let edges: Vec<_> = edge_reader.collect();
        assert_eq!(
            edges,
            vec![
                Edge(0, 1, 5.0),
                Edge(1, 2, 1.0),
                Edge(2, 3, 2.0),
                Edge(0, 3, 10.0)
            ]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let edge_reader = reader_for("\n  \n#2\n\n1\t2\t0.5\n\n");
        assert_eq!(edge_reader.number_of_nodes(), 2);
        assert_eq!(edge_reader.collect_vec(), vec![Edge(0, 1, 0.5)]);
    }

    #[test]
    fn malformed_edge_lines_are_skipped() {
        let broken = [
            "1\t2",              // too few fields
            "1\tx\t3",           // non-numeric node
            "1\t2\tabc",         // non-numeric weight
            "1\t2\t3\t4",        // trailing field
            "0\t2\t1",           // id below range
            "1\t9\t1",           // id above range
            "2\t2\t1",           // self-loop
            "1\t2\t-1",          // negative weight
            "1\t2\tNaN",         // non-finite weight
        ];
        let content = format!("#3\n{}\n1\t3\t2.5\n", broken.join("\n"));

        let edges = reader_for(&content).collect_vec();
        assert_eq!(edges, vec![Edge(0, 2, 2.5)]);
    }

    #[test]
    fn header_failures_are_fatal() {
        for content in ["", "#\n", "#zwölf\n", "#0\n", "#-3\n"] {
            let result = EdgeListReader::try_new(BufReader::new(content.as_bytes()));
            assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::InvalidData));
        }
    }

    #[test]
    fn duplicate_edges_overwrite() {
        let graph =
            AdjArray::try_read_edge_list(BufReader::new("#2\n1\t2\t5\n2\t1\t3\n".as_bytes()))
                .unwrap();

        assert_eq!(graph.weight_of(0, 1), Some(3.0));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.max_weight(), Some(5.0));
    }

    #[test]
    fn parsed_graphs_are_symmetric() {
        let graph = DenseGraph::try_read_edge_list(BufReader::new(
            "#4\n1\t2\t5\n2\t3\t1\n3\t4\t2\n1\t4\t10\n".as_bytes(),
        ))
        .unwrap();

        for Edge(u, v, w) in graph.edges().collect_vec() {
            assert_eq!(graph.weight_of(u, v), Some(w));
            assert_eq!(graph.weight_of(v, u), Some(w));
        }
        assert_eq!(graph.max_weight(), Some(10.0));
    }

    #[test]
    fn test_read_tiny_instances() {
        let files = glob("instances/tiny/*.wgr")
            .expect("Failed to glob")
            .map(|r| r.expect("Failed to access globbed path"))
            .collect_vec();

        assert!(!files.is_empty());

        for file in files {
            let reader = File::open(file.clone()).expect("Cannot open file");
            let buf_reader = BufReader::new(reader);

            let graph =
                AdjArray::try_read_edge_list(buf_reader).expect("Could not read instance");
            assert!(graph.number_of_nodes() > 0);

            for Edge(u, v, w) in graph.edges().collect_vec() {
                assert_eq!(graph.weight_of(v, u), Some(w));
            }

            // every instance either solves into a valid tour or is disconnected
            match nearest_neighbor_tour(&graph) {
                Ok(tour) => {
                    assert_eq!(tour.is_correct(), Ok(()));
                    assert_eq!(tour.start(), Some(0));
                }
                Err(e) => {
                    assert!(matches!(e, crate::errors::TourError::DisconnectedGraph { .. }));
                }
            }
        }
    }
}
