use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match arena_sim::run_with_config().await {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
