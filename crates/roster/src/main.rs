use anyhow::Result;
use clap::Parser;
use roster_types::Request;
use tracing_subscriber::EnvFilter;

const MAIN_HELP: &str = r#"Roster manages a list of user records kept as a JSON array in a flat file.

Four operations are available through `--operation`: `list` prints the raw
store file, `add` appends a record unless its id is already taken, `remove`
deletes every record with a given id, and `findById` prints every record
matching an id.

The store file is loaded in full on every invocation and rewritten in full
by mutating operations. There is no locking, so concurrent invocations
against the same file race (last writer wins)."#;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, help = "Operation to perform: list, add, remove or findById")]
    operation: Option<String>,

    #[arg(
        long = "fileName",
        env = "ROSTER_FILE",
        help = "Path to the JSON store file"
    )]
    file_name: Option<String>,

    #[arg(long, help = "Record to add, as a JSON object (add only)")]
    item: Option<String>,

    #[arg(long, help = "Record id to look up (remove and findById)")]
    id: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let request = Request {
        operation: cli.operation,
        file_name: cli.file_name,
        item: cli.item,
        id: cli.id,
    };

    let mut stdout = std::io::stdout().lock();
    roster_store::perform(&request, &mut stdout)?;
    Ok(())
}
