//! Shared test utilities for integration tests
//!
//! Provides common fixture creation and helper functions
//! used across multiple test files.

use assert_fs::prelude::*;

/// Create a corpus directory with a few prior submissions plus one
/// submission file to evaluate against it. The first corpus entry is an
/// exact duplicate of the submission so the maximum match is predictable.
pub fn make_corpus_fixture() -> assert_fs::TempDir
{
    // Initialize the temporary project root
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    let submission = "Photosynthesis is the process by which plants convert sunlight into \
                      chemical energy using chlorophyll inside their leaves.";

    // Submission under evaluation
    tmp.child("submission.txt")
        .write_str(submission)
        .expect("write submission");

    // Exact duplicate in the corpus forces a 100% match
    tmp.child("corpus/prior_duplicate.txt")
        .write_str(submission)
        .expect("write duplicate");

    // Unrelated prior submission
    tmp.child("corpus/prior_unrelated.txt")
        .write_str("Volcanic eruptions reshape coastlines and bury settlements under ash.")
        .expect("write unrelated");

    // Partial overlap with the submission
    tmp.child("corpus/prior_partial.md")
        .write_str("Plants convert sunlight into chemical energy during photosynthesis.")
        .expect("write partial");

    // A file with the wrong extension must never join the corpus
    tmp.child("corpus/notes.json")
        .write_str("{\"note\": \"not corpus material\"}")
        .expect("write json");

    // Return the prepared directory to the caller
    tmp
}

/// Create a fixture whose corpus shares no token with the submission.
pub fn make_disjoint_fixture() -> assert_fs::TempDir
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    tmp.child("submission.txt")
        .write_str("Quantum entanglement links particle states across arbitrary distances.")
        .expect("write submission");

    tmp.child("corpus/prior.txt")
        .write_str("Medieval guilds regulated apprenticeship, wages, craftsmanship standards.")
        .expect("write prior");

    tmp
}
