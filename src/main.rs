#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "avsc-alias", about = "Add snake_case aliases to an Avro schema")]
struct Cli {
    /// Path to the Avro schema input
    #[arg(value_name = "INPUT")]
    input: String,

    /// Path to the aliased Avro schema output file
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Prefix removed from record names before deriving their alias
    #[arg(long, default_value = "")]
    prefix: String,

    /// Spaces per indentation level in the output file
    #[arg(long, default_value_t = avsc_alias::aliaser::DEFAULT_INDENT)]
    indent: usize,

    /// Print the number of aliased records and fields as JSON on stdout
    #[arg(long, default_value_t = false)]
    report: bool,
}

#[cfg(feature = "cli")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    #[cfg(feature = "trace")]
    let builder = tracing_subscriber::fmt().with_span_events(
        tracing_subscriber::fmt::format::FmtSpan::ENTER | tracing_subscriber::fmt::format::FmtSpan::EXIT,
    );
    #[cfg(not(feature = "trace"))]
    let builder = tracing_subscriber::fmt();

    builder
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() {
    init_logging();

    let cli = Cli::parse();

    match avsc_alias::add_aliases_to_avro_file(&cli.input, &cli.output, &cli.prefix, cli.indent) {
        Ok(stats) => {
            if cli.report {
                match serde_json::to_string(&stats) {
                    Ok(line) => println!("{line}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
