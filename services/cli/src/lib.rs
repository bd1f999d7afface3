mod cli;
mod menu;
mod render;

use placement_matcher::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
