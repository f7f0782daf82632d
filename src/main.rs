use std::process;

use clap::Parser;

use notix::{build, convert, detect, evaluate, render, tokenize, Error, Expr, Notation};

/// Parse a one-line arithmetic expression written in infix, prefix, or
/// postfix notation, print it in all three, and evaluate it.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The expression to analyze
    expression: String,

    /// Skip auto-detection and read the expression under this notation
    #[arg(short, long)]
    #[clap(value_enum)]
    notation: Option<NotationArg>,

    /// Also print the tree as a Graphviz DOT graph
    #[arg(long)]
    dot: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum NotationArg {
    Infix,
    Prefix,
    Postfix,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Infix => Notation::Infix,
            NotationArg::Prefix => Notation::Prefix,
            NotationArg::Postfix => Notation::Postfix,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(why) = run(&args) {
        eprintln!("{why}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let tokens = tokenize(&args.expression)?;
    let notation = match args.notation {
        Some(forced) => forced.into(),
        None => detect(&tokens)?,
    };
    let tree = build(&tokens, notation)?;

    println!("Notation : {notation}");
    println!("Infix    : {}", convert(&tree, Notation::Infix));
    println!("Prefix   : {}", convert(&tree, Notation::Prefix));
    println!("Postfix  : {}", convert(&tree, Notation::Postfix));
    println!("Result   : {}", evaluate(&tree)?);

    if args.dot {
        println!();
        print_dot(&tree);
    }

    Ok(())
}

// Emits the tree in Graphviz DOT form, built purely on the flattened node
// view so it exercises the same surface an external renderer would.
fn print_dot(tree: &Expr) {
    let nodes = render::view(tree);

    println!("digraph expression {{");
    println!("    node [shape=circle];");
    for node in &nodes {
        println!("    n{} [label=\"{}\"];", node.id, node.label);
    }
    for node in &nodes {
        for child in &node.children {
            println!("    n{} -> n{};", node.id, child);
        }
    }
    println!("}}");
}
