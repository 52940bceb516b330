use anyhow::{Context, Result};
use directories_next::BaseDirs;
use itertools::Itertools;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::quiz::definition::DefinitionError;

const QUIZ_EXTENSION: &str = "txt";

pub fn get_quiz_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("variant-quiz");
    Ok(dir)
}

/// Maps a quiz argument to a file. Existing paths win, then names inside the
/// quiz directory. Unknown names come back unchanged so that reading them
/// reports the failure.
pub fn resolve(name: &Path) -> PathBuf {
    if name.exists() {
        return name.to_path_buf();
    }
    if let Ok(dir) = get_quiz_dir() {
        let mut candidates = vec![dir.join(name)];
        if name.extension().is_none() {
            candidates.push(dir.join(name).with_extension(QUIZ_EXTENSION));
        }
        if let Some(found) = candidates.into_iter().find(|c| c.exists()) {
            debug!("Resolved quiz {:?} to {:?}", name, found);
            return found;
        }
    }
    name.to_path_buf()
}

/// Reads the extracted text of a quiz document.
pub fn fetch(path: &Path) -> std::result::Result<String, DefinitionError> {
    fs::read_to_string(path).map_err(|source| DefinitionError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

pub fn list_in(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut quizzes = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("could not read {:?}", dir))? {
        let path = entry?.path();
        let is_quiz = path.is_file()
            && path
                .extension()
                .map_or(false, |extension| extension == QUIZ_EXTENSION);
        if is_quiz {
            quizzes.push(path);
        }
    }
    Ok(quizzes.into_iter().sorted().collect())
}

pub fn list() -> Result<Vec<PathBuf>> {
    list_in(&get_quiz_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("variant-quiz-{}-{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_is_unavailable() {
        let path = Path::new("definitely/not/a/quiz.txt");
        match fetch(path) {
            Err(DefinitionError::SourceUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn reads_existing_file() {
        let dir = scratch_dir("fetch");
        let path = dir.join("history.txt");
        fs::write(&path, "<question>Q<variantright>A").unwrap();
        assert_eq!(fetch(&path).unwrap(), "<question>Q<variantright>A");
        assert_eq!(resolve(&path), path);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn lists_text_files_sorted() {
        let dir = scratch_dir("list");
        fs::write(dir.join("b.txt"), "").unwrap();
        fs::write(dir.join("a.txt"), "").unwrap();
        fs::write(dir.join("notes.md"), "").unwrap();
        fs::create_dir(dir.join("c.txt")).unwrap();
        let quizzes = list_in(&dir).unwrap();
        assert_eq!(quizzes, vec![dir.join("a.txt"), dir.join("b.txt")]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = std::env::temp_dir().join("variant-quiz-does-not-exist");
        assert!(list_in(&dir).unwrap().is_empty());
    }
}
