use crate::store::atomic_writer::AtomicWriter;
use crate::traits::BoardRepository;
use std::path::{Path, PathBuf};
use tasklane_core::{AppConfig, TasklaneError, TasklaneResult};
use tasklane_domain::Board;

/// JSON file persistence for the board document: a single pretty-printed
/// document at a fixed path, overwritten wholesale on every save. There is
/// no versioning and no migration; a document that fails shape validation
/// is discarded and replaced by the seed board on the next load.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the configured location: the `board_path` override from
    /// the config file, or `tasklane.json` in the platform data directory.
    pub fn from_config(config: &AppConfig) -> TasklaneResult<Self> {
        let path = config.effective_board_path().ok_or_else(|| {
            TasklaneError::NotFound("no data directory available for the board file".to_string())
        })?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> TasklaneResult<Option<Board>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = AtomicWriter::read_all(&self.path)?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| TasklaneError::Serialization(e.to_string()))?;
        if !Board::validate(&value) {
            return Err(TasklaneError::Validation(
                "stored board is missing columns or task lists".to_string(),
            ));
        }
        let mut board: Board = serde_json::from_value(value)
            .map_err(|e| TasklaneError::Serialization(e.to_string()))?;
        board.normalize();
        Ok(Some(board))
    }

    fn try_save(&self, board: &Board) -> TasklaneResult<()> {
        let bytes = serde_json::to_vec_pretty(board)
            .map_err(|e| TasklaneError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes)
    }
}

impl BoardRepository for JsonFileStore {
    fn load(&self) -> Board {
        match self.try_load() {
            Ok(Some(board)) => {
                tracing::info!("Loaded board from {}", self.path.display());
                board
            }
            Ok(None) => {
                tracing::info!(
                    "No board at {}, starting from the seed board",
                    self.path.display()
                );
                Board::seed()
            }
            Err(e) => {
                tracing::warn!(
                    "Discarding stored board at {}: {}",
                    self.path.display(),
                    e
                );
                Board::seed()
            }
        }
    }

    fn save(&self, board: &Board) {
        if let Err(e) = self.try_save(board) {
            tracing::warn!("Failed to save board to {}: {}", self.path.display(), e);
        }
    }
}
