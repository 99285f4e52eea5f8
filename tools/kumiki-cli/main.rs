use clap::{Parser, ValueEnum};
use kumiki::graph::visualizer;
use kumiki::prelude::*;
use std::fs;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Render {
    /// Serialized workflow JSON (the wire format).
    Json,
    /// Indented adjacency listing, one node per line.
    Text,
}

/// Assemble a declarative workflow plan into an execution graph.
#[derive(Parser, Debug)]
#[command(name = "kumiki-cli", version, about)]
struct Args {
    /// Path to the plan JSON document.
    plan: String,

    /// Output representation.
    #[arg(long, value_enum, default_value_t = Render::Json)]
    render: Render,

    /// Write the output to a file instead of stdout.
    #[arg(long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let json = fs::read_to_string(&args.plan)?;
    let plan = WorkflowPlan::from_json(&json)?;

    let start = Instant::now();
    let workflow = GraphBuilder::new(plan).build()?;
    eprintln!(
        "Assembled {} nodes in {:?}",
        workflow.nodes.len(),
        start.elapsed()
    );

    let rendered = match args.render {
        Render::Json => serde_json::to_string_pretty(&workflow)?,
        Render::Text => visualizer::render_workflow(&workflow),
    };

    match args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}
