use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context;
use log::{LevelFilter, info};
use nnt::{
    graph::{AdjArray, DenseGraph, GraphEdgeEditing, GraphNew},
    heuristic::nearest_neighbor_tour,
    io::EdgeListReader,
    log::build_logger_for_verbosity,
    utils::Tour,
};
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opts {
    /// Path to the weighted edge list
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

enum LoadedGraph {
    Dense(DenseGraph),
    Sparse(AdjArray),
}

fn load_graph(path: &PathBuf) -> anyhow::Result<LoadedGraph> {
    let file = File::open(path)
        .with_context(|| format!("cannot open input file {}", path.display()))?;
    let reader = EdgeListReader::try_new(BufReader::new(file))?;
    let n = reader.number_of_nodes();

    Ok(if DenseGraph::fits(n) {
        let mut graph = DenseGraph::new(n);
        graph.set_edges(reader);
        LoadedGraph::Dense(graph)
    } else {
        info!("a dense matrix on {n} nodes exceeds the memory budget, falling back to adjacency lists");
        let mut graph = AdjArray::new(n);
        graph.set_edges(reader);
        LoadedGraph::Sparse(graph)
    })
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let tour: Tour = match load_graph(&opts.input)? {
        LoadedGraph::Dense(graph) => nearest_neighbor_tour(&graph)?,
        LoadedGraph::Sparse(graph) => nearest_neighbor_tour(&graph)?,
    };

    tour.write(std::io::stdout().lock())?;

    Ok(())
}
