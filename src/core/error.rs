//! Fehler-Taxonomie der Layer-Liste.
//!
//! Alle Validierungen laufen eager und vor jeder Mutation (validate-then-commit):
//! schlaegt eine Operation fehl, bleibt die Liste unveraendert und es wird
//! kein Event emittiert.

use thiserror::Error;

/// Fehler der mutierenden und suchenden Listen-Operationen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerListError {
    /// Layer nicht in der Liste (remove, find_index, resolve per Handle)
    #[error("layer not found in list")]
    NotFound,
    /// Index ausserhalb des gueltigen Bereichs (pop, remove_at, resolve per Index)
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// Index wie vom Aufrufer uebergeben (negativ = von hinten gezaehlt)
        index: isize,
        /// Listenlaenge zum Zeitpunkt des Aufrufs
        len: usize,
    },
    /// Permutation enthaelt einen Index doppelt (reorder)
    #[error("duplicate index {index} in ordering")]
    DuplicateIndex {
        /// Der doppelt genannte Index
        index: usize,
    },
    /// Permutation unvollstaendig (reorder) — nennt alle fehlenden Indizes
    #[error("indices {indices:?} not provided in ordering")]
    MissingIndices {
        /// Fehlende Indizes, aufsteigend sortiert
        indices: Vec<usize>,
    },
}
