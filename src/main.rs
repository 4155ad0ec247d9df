use clap::Parser;
use searching::{BinarySearchTree, BreadthFirstSearch, LogConfig, Order, SearchError};
use std::process::ExitCode;

/// Builds a binary search tree and prints one of its traversals
#[derive(Parser, Debug)]
#[command(name = "searching")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Diagnostic output, repeat for more (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Traversal order: pre, in, post or breadth
    #[arg(short, long, default_value = "post")]
    order: Order,

    /// Values inserted into the tree, in this order
    #[arg(long, value_delimiter = ',', default_values_t = [9, 4, 20, 1, 6, 15, 170])]
    values: Vec<i64>,

    /// Search this value breadth-first
    #[arg(long)]
    find: Option<i64>,
}

fn run(cli: &Cli) -> Result<(), SearchError> {
    // Default layout
    //      9
    //    /   \
    //   4     20
    //  / \    / \
    // 1   6 15  170
    let tree: BinarySearchTree<i64> = cli.values.iter().copied().collect();

    println!("{}", tree.traverse(cli.order)?);

    if let Some(target) = cli.find {
        match BreadthFirstSearch::new(&tree).search(&target) {
            Some(node) => println!("found: {node}"),
            None => println!("{target} is not in this tree"),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = LogConfig::new(cli.debug).init() {
        eprintln!("Could not set up logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
