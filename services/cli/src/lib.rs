mod cli;

use occupancy::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
