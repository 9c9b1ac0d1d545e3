//! Load lifecycle of the book collection
//!
//! `Idle` covers the time before the one-shot fetch resolves. Once books arrive the
//! state moves to `Loading` and a simulated progress counter climbs to 100, at which
//! point the collection is `Loaded`. A failed fetch is terminal.

mod simulator;

pub use simulator::{ProgressHandle, ProgressSimulator, DEFAULT_INTERVAL, DEFAULT_STEP};

use crate::error::{CatalogError, FetchFailure, Result};
use serde::Serialize;

/// Progress value at which loading completes
pub const PROGRESS_COMPLETE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadState {
    /// Collection not fetched yet
    #[default]
    Idle,

    /// Collection fetched, warm-up progress still running
    Loading { progress: u8 },

    Loaded,

    Failed { error: FetchFailure },
}

impl LoadState {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading { .. } => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed { .. } => "failed",
        }
    }

    /// Whether the collection has been fetched successfully
    pub fn is_fetched(&self) -> bool {
        matches!(self, LoadState::Loading { .. } | LoadState::Loaded)
    }

    /// Whether the warm-up progress has reached completion
    pub fn is_complete(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Loaded | LoadState::Failed { .. })
    }

    pub fn progress(&self) -> u8 {
        match self {
            LoadState::Idle | LoadState::Failed { .. } => 0,
            LoadState::Loading { progress } => *progress,
            LoadState::Loaded => PROGRESS_COMPLETE,
        }
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        match self {
            LoadState::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// `Idle → Loading(0)` once the fetch resolves with books
    pub fn fetched(&mut self) -> Result<()> {
        match self {
            LoadState::Idle => {
                *self = LoadState::Loading { progress: 0 };
                Ok(())
            }
            other => Err(CatalogError::InvalidTransition {
                from: other.name(),
                to: "loading",
            }),
        }
    }

    /// `Idle | Loading → Failed`
    pub fn fail(&mut self, error: FetchFailure) -> Result<()> {
        match self {
            LoadState::Idle | LoadState::Loading { .. } => {
                *self = LoadState::Failed { error };
                Ok(())
            }
            other => Err(CatalogError::InvalidTransition {
                from: other.name(),
                to: "failed",
            }),
        }
    }

    /// Record a progress reading. Values never move backwards and anything at or
    /// above 100 completes the load. Readings after completion are ignored.
    pub fn set_progress(&mut self, progress: u8) -> Result<()> {
        match self {
            LoadState::Loading { progress: current } => {
                let next = progress.max(*current).min(PROGRESS_COMPLETE);
                *self = if next >= PROGRESS_COMPLETE {
                    LoadState::Loaded
                } else {
                    LoadState::Loading { progress: next }
                };
                Ok(())
            }
            LoadState::Loaded => Ok(()),
            other => Err(CatalogError::InvalidTransition {
                from: other.name(),
                to: "loading",
            }),
        }
    }

    /// Advance progress by `step`, saturating at 100
    pub fn advance(&mut self, step: u8) -> Result<()> {
        let next = self.progress().saturating_add(step);
        self.set_progress(next)
    }
}
