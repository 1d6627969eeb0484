mod cli;
mod infra;
mod report;
mod routes;
mod server;

use yard_roi::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
