//   ____             _____
//  |  _ \ __      __|  ___|  ___   _ __   __ _   ___
//  | |_) |\ \ /\ / /| |_    / _ \ | '__| / _` | / _ \
//  |  __/  \ V  V / |  _|  | (_) || |   | (_| ||  __/
//  |_|      \_/\_/  |_|     \___/ |_|    \__, | \___|
//                                        |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Error types

use std::io;
use thiserror::Error;

/// Failure of a single generation call. No partial password is ever returned.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Strength evaluation failed: {0}")]
    StrengthEvaluation(#[from] StrengthEvaluationError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrengthEvaluationError {
    #[error("estimator returned score {0}, expected 0-4")]
    ScoreOutOfRange(u8),

    #[error("estimator failed: {0}")]
    Oracle(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDir(String),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid password length: {0:?}")]
    InvalidLength(String),
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Failed to start clipboard helper: {0}")]
    Spawn(#[from] io::Error),
}
