mod cli;
mod commands;
mod infra;
mod render;

use archwise::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
