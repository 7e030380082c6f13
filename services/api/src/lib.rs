mod cli;
mod infra;
mod lookup;
mod routes;
mod server;

use vpp_eligibility::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
