use std::io::Write;

use crate::errors::{InvariantCheck, TourStructureError};
use crate::graph::{Node, NumNodes};

/// An open path over the nodes of a graph, stored as predecessor/successor
/// links per node. Built incrementally front to back; nodes not yet placed
/// have both links unassigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    predecessor: Vec<Option<Node>>,
    successor: Vec<Option<Node>>,
    start: Option<Node>,
    end: Option<Node>,
    placed: NumNodes,
}

impl Tour {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            predecessor: vec![None; number_of_nodes as usize],
            successor: vec![None; number_of_nodes as usize],
            start: None,
            end: None,
            placed: 0,
        }
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.predecessor.len() as NumNodes
    }

    /// Number of nodes placed on the path so far.
    pub fn len(&self) -> NumNodes {
        self.placed
    }

    pub fn is_empty(&self) -> bool {
        self.placed == 0
    }

    pub fn is_complete(&self) -> bool {
        self.placed == self.number_of_nodes()
    }

    /// True iff `node` is already placed on the path.
    pub fn contains(&self, node: Node) -> bool {
        self.start == Some(node) || self.predecessor[node as usize].is_some()
    }

    pub fn start(&self) -> Option<Node> {
        self.start
    }

    pub fn end(&self) -> Option<Node> {
        self.end
    }

    pub fn predecessor_of(&self, node: Node) -> Option<Node> {
        self.predecessor[node as usize]
    }

    pub fn successor_of(&self, node: Node) -> Option<Node> {
        self.successor[node as usize]
    }

    /// Places the first node.
    ///
    /// # Example
    /// ```
    /// use nnt::utils::Tour;
    /// let mut tour = Tour::new(3);
    /// tour.set_start(0);
    /// assert_eq!(tour.len(), 1);
    /// ```
    pub fn set_start(&mut self, node: Node) {
        assert!(self.is_empty());
        assert!(node < self.number_of_nodes());

        self.start = Some(node);
        self.end = Some(node);
        self.placed = 1;
    }

    /// Extends the open end of the path by `node`.
    ///
    /// # Example
    /// ```
    /// use nnt::utils::Tour;
    /// let mut tour = Tour::new(3);
    /// tour.set_start(0);
    /// tour.append(2);
    /// tour.append(1);
    /// assert_eq!(tour.iter().collect::<Vec<_>>(), vec![0, 2, 1]);
    /// ```
    pub fn append(&mut self, node: Node) {
        assert!(node < self.number_of_nodes());
        assert!(!self.is_empty());
        assert!(!self.contains(node));

        let end = self.end.unwrap();
        self.successor[end as usize] = Some(node);
        self.predecessor[node as usize] = Some(end);
        self.end = Some(node);
        self.placed += 1;
    }

    /// Walks the successor links from the start node.
    pub fn iter(&self) -> impl Iterator<Item = Node> {
        let mut next = self.start;
        std::iter::from_fn(move || {
            let current = next?;
            next = self.successor[current as usize];
            Some(current)
        })
    }

    /// Writes the tour using 1-based node ids, one per line. Exactly
    /// [`Tour::len`] lines are emitted; the open end has no successor and
    /// terminates the walk.
    ///
    /// ```
    /// use nnt::utils::Tour;
    /// let mut tour = Tour::new(3);
    /// tour.set_start(0);
    /// tour.append(1);
    /// tour.append(2);
    ///
    /// let mut buffer: Vec<u8> = Vec::new(); // implements Write
    /// tour.write(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"1\n2\n3\n");
    /// ```
    pub fn write<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        for u in self.iter() {
            writeln!(&mut writer, "{}", u + 1)?;
        }
        Ok(())
    }
}

impl InvariantCheck<TourStructureError> for Tour {
    /// A complete tour is a single open path: every node placed exactly
    /// once, no predecessor at the start, no successor at the end, and
    /// mutually consistent links in between.
    fn is_correct(&self) -> Result<(), TourStructureError> {
        if !self.is_complete() {
            return Err(TourStructureError::Incomplete {
                placed: self.placed,
                nodes: self.number_of_nodes(),
            });
        }

        let Some(start) = self.start else {
            return Ok(()); // empty graph, empty path
        };

        if self.predecessor[start as usize].is_some() {
            return Err(TourStructureError::BrokenLink { node: start });
        }

        let mut seen = vec![false; self.number_of_nodes() as usize];
        let mut visited: NumNodes = 0;
        let mut current = start;
        loop {
            if seen[current as usize] {
                return Err(TourStructureError::NodeRevisited { node: current });
            }
            seen[current as usize] = true;
            visited += 1;

            match self.successor[current as usize] {
                Some(next) => {
                    if self.predecessor[next as usize] != Some(current) {
                        return Err(TourStructureError::BrokenLink { node: next });
                    }
                    current = next;
                }
                None => break,
            }
        }

        if visited != self.number_of_nodes() {
            return Err(TourStructureError::NotPath {
                visited,
                nodes: self.number_of_nodes(),
            });
        }

        if self.end != Some(current) {
            return Err(TourStructureError::BrokenLink { node: current });
        }

        Ok(())
    }
}
