use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use super::super::graph::*;

pub trait EdgeListWriter {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl<T> EdgeListWriter for T
where
    T: WeightedAdjacency,
{
    fn try_write_edge_list<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(writer, "#{}", self.number_of_nodes())?;

        for Edge(u, v, w) in self
            .edges()
            .sorted_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)))
        {
            writeln!(writer, "{}\t{}\t{}", u + 1, v + 1, w)?;
        }

        Ok(())
    }

    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}
