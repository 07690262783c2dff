use crate::report::{run_assessment, run_questions, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use stress_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Stress Check",
    about = "Score the lifestyle stress questionnaire over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one set of answers and print the assessment
    Assess(AssessArgs),
    /// Print the questionnaire
    Questions,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assessment(args).await,
        Command::Questions => {
            run_questions();
            Ok(())
        }
    }
}
