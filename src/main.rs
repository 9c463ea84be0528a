use clap::Parser;
use incident_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(incident_processor::Error::processing_interrupted(
                    "Processing interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_summary) => {
            // Success - the summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Incident Processor - Emergency Dispatch Log Enrichment");
    println!("======================================================");
    println!();
    println!("Deduplicate raw dispatch incidents, decode units and location notation,");
    println!("derive calendar attributes and produce a data quality report.");
    println!();
    println!("USAGE:");
    println!("    incident-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Enrich the raw incident table and write the quality report");
    println!("    report      Regenerate the quality report from an enriched table");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process incidents.csv in the current directory:");
    println!("    incident-processor process");
    println!();
    println!("    # Process with custom paths and a JSON summary:");
    println!("    incident-processor process --input raw.csv --output enhanced.csv \\");
    println!("                               --output-format json");
    println!();
    println!("    # Preview the run without writing anything:");
    println!("    incident-processor process --dry-run");
    println!();
    println!("    # Print the report for an existing enriched table:");
    println!("    incident-processor report --input enhanced.csv --stdout-only");
    println!();
    println!("For detailed help on any command, use:");
    println!("    incident-processor <COMMAND> --help");
}
