use brewpay::application::engine::PaymentEngine;
use brewpay::application::menu;
use brewpay::domain::ports::EventSinkHandle;
use brewpay::infrastructure::in_memory::InMemoryEventSink;
use brewpay::interfaces::csv::event_writer::EventWriter;
use brewpay::interfaces::csv::instruction_reader::InstructionReader;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a coffee with the given toppings, applied in order
    Price {
        /// Topping names (milk, sugar, chocolate)
        toppings: Vec<String>,
    },
    /// Route a CSV of payment instructions and print the emitted events
    Process {
        /// Input instructions CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Price { toppings } => {
            let beverage = menu::build_order(&toppings).into_diagnostic()?;
            println!("{} | Cost: {}", beverage.description(), beverage.cost());
        }
        Command::Process { input } => {
            let sink = InMemoryEventSink::new();
            let handle: EventSinkHandle = Arc::new(sink.clone());
            let engine = PaymentEngine::new(handle);

            let file = File::open(input).into_diagnostic()?;
            let reader = InstructionReader::new(file);
            for instruction in reader.instructions() {
                match instruction {
                    Ok(instruction) => engine.process_instruction(instruction),
                    Err(e) => eprintln!("Error reading instruction: {}", e),
                }
            }

            // Output the recorded events
            let stdout = io::stdout();
            let mut writer = EventWriter::new(stdout.lock());
            writer.write_events(sink.events()).into_diagnostic()?;
        }
    }

    Ok(())
}
