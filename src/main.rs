use approvals_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Approvals Processor - Service Approval Export Consolidator");
    println!("==========================================================");
    println!();
    println!("Combine legacy service approval exports into a single table,");
    println!("grouped by service code with one subtotal row per service.");
    println!();
    println!("USAGE:");
    println!("    approvals-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Combine export files into the subtotalled table (main command)");
    println!("    validate    Check that export files parse cleanly");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Combine two exports and print the table:");
    println!("    approvals-processor process week1.csv week2.csv");
    println!();
    println!("    # Combine and write the Excel-compatible artifact:");
    println!("    approvals-processor process week1.csv week2.csv --output combined.csv");
    println!();
    println!("    # Check files without combining:");
    println!("    approvals-processor validate week1.csv week2.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    approvals-processor <COMMAND> --help");
}
