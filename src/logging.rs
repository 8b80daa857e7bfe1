use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::GameError;

/// Routes `log` output to `path`; stdout belongs to the game screen.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), GameError> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use simplelog::LevelFilter;

    use super::init_file_logger;
    use crate::error::GameError;

    #[test]
    fn unwritable_log_path_is_an_io_error() {
        let path = PathBuf::from("/nonexistent-boxed-snake-dir/run.log");

        let result = init_file_logger(&path, LevelFilter::Info);

        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
