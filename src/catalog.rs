// Catalog layer: discovers quiz definition files in a directory and loads
// each into a `QuizSession`. All file I/O for the application lives here;
// the `ui` module only ever sees loaded sessions.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::session::{Question, QuizSession};

/// Directory scanned for quiz files when the application starts.
pub const DEFAULT_QUIZ_DIR: &str = "quizzes";

/// Extension a file must carry to be treated as a quiz definition.
const QUIZ_EXTENSION: &str = "json";

/// Failure to turn one quiz file into a session. Recoverable: the file is
/// skipped with a warning and the rest of the catalog still loads.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read quiz file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse quiz file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {index} has fewer than two options")]
    TooFewOptions { index: usize },
    #[error("question {index} marks option {correct_index} correct but only {options} options exist")]
    CorrectIndexOutOfRange {
        index: usize,
        correct_index: usize,
        options: usize,
    },
}

/// On-disk shape of a quiz definition file. Extra keys are ignored.
#[derive(Debug, Deserialize)]
struct QuizFile {
    questions: Vec<Question>,
}

/// Parse and validate a single quiz definition file.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, LoadError> {
    let contents = fs::read_to_string(path)?;
    let file: QuizFile = serde_json::from_str(&contents)?;

    for (index, question) in file.questions.iter().enumerate() {
        if question.options.len() < 2 {
            return Err(LoadError::TooFewOptions { index });
        }
        if question.correct_index >= question.options.len() {
            return Err(LoadError::CorrectIndexOutOfRange {
                index,
                correct_index: question.correct_index,
                options: question.options.len(),
            });
        }
    }

    Ok(file.questions)
}

/// The full set of loaded categories available for selection.
#[derive(Debug)]
pub struct QuizCatalog {
    quiz_dir: PathBuf,
    entries: Vec<QuizSession>,
    freshly_created: bool,
}

impl QuizCatalog {
    /// Scan `quiz_dir` and load every valid quiz file. The directory is
    /// created when missing so the operator has somewhere to drop files;
    /// files that fail to load are logged and skipped.
    pub fn discover(quiz_dir: impl Into<PathBuf>) -> Result<Self> {
        let quiz_dir = quiz_dir.into();
        if !quiz_dir.exists() {
            fs::create_dir_all(&quiz_dir).with_context(|| {
                format!("failed to create quiz directory {}", quiz_dir.display())
            })?;
            info!("created quiz directory {}", quiz_dir.display());
            return Ok(Self {
                quiz_dir,
                entries: Vec::new(),
                freshly_created: true,
            });
        }

        let mut files: Vec<PathBuf> = fs::read_dir(&quiz_dir)
            .with_context(|| format!("failed to read quiz directory {}", quiz_dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .map(|ext| ext == QUIZ_EXTENSION)
                    .unwrap_or(false)
            })
            .collect();

        // Menu numbering follows catalog order, so keep the scan deterministic.
        files.sort();

        let mut catalog = Self {
            quiz_dir,
            entries: Vec::new(),
            freshly_created: false,
        };
        for path in files {
            let Some(category) = category_name(&path) else {
                continue;
            };
            match load_questions(&path) {
                Ok(questions) => {
                    debug!(
                        "loaded {} questions for category {category}",
                        questions.len()
                    );
                    catalog.insert(QuizSession::new(category, questions));
                }
                Err(err) => warn!("skipping {}: {err}", path.display()),
            }
        }

        Ok(catalog)
    }

    /// Register a session under its category. A later file deriving the same
    /// category name replaces the earlier entry in place (last write wins)
    /// instead of growing the menu.
    fn insert(&mut self, session: QuizSession) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.category() == session.category())
        {
            Some(existing) => *existing = session,
            None => self.entries.push(session),
        }
    }

    pub fn quiz_dir(&self) -> &Path {
        &self.quiz_dir
    }

    /// True when `discover` had to create the quiz directory, meaning there
    /// cannot be any quizzes yet.
    pub fn freshly_created(&self) -> bool {
        self.freshly_created
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Loaded sessions in menu order.
    pub fn sessions(&self) -> &[QuizSession] {
        &self.entries
    }

    pub fn session_mut(&mut self, index: usize) -> Option<&mut QuizSession> {
        self.entries.get_mut(index)
    }
}

/// Category name for a quiz file: the filename with its extension stripped.
fn category_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}
