use anyhow::Context;
use clap::Parser;
use rototrans::{
    constants::{DEFAULT_PRECISION, INVALID_MATRIX_MESSAGE},
    decomposer::decompose,
    format::Precision,
    insight::build_prompt,
    parser::parse_matrix,
    report::{self, Report},
};
use std::io::Read;

#[derive(Parser, Debug)]
#[command(about = "Decompose a 3x4 rotation-translation matrix into ZYX Euler angles", long_about = None)]
struct Args {
    /// Twelve row-major numbers, optionally prefixed by `9:` (read from stdin
    /// when omitted)
    matrix: Option<String>,

    /// Decimal places to display (6, 8, 10, 12 or 14)
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: Precision,

    /// Print the decomposition as JSON
    #[arg(long, conflicts_with = "prompt")]
    json: bool,

    /// Print the analysis prompt for a text-generation service
    #[arg(long)]
    prompt: bool,
}

fn read_source(matrix: Option<String>) -> anyhow::Result<String> {
    if let Some(matrix) = matrix {
        return Ok(matrix);
    }

    log::debug!("Reading matrix from stdin");
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read matrix from stdin")?;
    Ok(source)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let source = read_source(args.matrix)?;

    let matrix = parse_matrix(&source).context(INVALID_MATRIX_MESSAGE)?;
    log::debug!("Parsed matrix: {matrix}");

    let result = decompose(&matrix);
    log::info!(
        "Decomposed matrix into roll {}, pitch {}, yaw {} (radians)",
        result.euler_radians.roll,
        result.euler_radians.pitch,
        result.euler_radians.yaw
    );

    if args.json {
        println!("{:#}", report::to_json(&result));
    } else if args.prompt {
        print!("{}", build_prompt(&result));
    } else {
        println!("{}", Report::new(&result, args.precision));
    }

    Ok(())
}
