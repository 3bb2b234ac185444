use buddy::{
    cli::{Args, Commands},
    errors::BuddyError,
    logs::ComposeLogSource,
    openai::OpenAiClient,
    workflow::{run_naming, run_triage},
};
use clap::Parser;

fn main() {
    // Missing .env is fine, the key may come from the environment directly.
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    match run(args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<String, BuddyError> {
    let client = OpenAiClient::from_env()?;
    match args.command {
        Commands::Triage => run_triage(&ComposeLogSource::default(), &client),
        Commands::Naming => run_naming(&client),
    }
}
