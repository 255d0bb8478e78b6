mod cli;
mod demo;
mod infra;
mod render;
mod session;

use job_profile::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
