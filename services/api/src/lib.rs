mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use clearpath_life::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
