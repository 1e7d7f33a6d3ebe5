//! Scripted runs of the interactive review loop.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::{TempDir, tempdir};
use vocab_cli::commands::{review_with, run_progress};
use vocab_model::{Catalog, WordState};
use vocab_review::Session;
use vocab_store::{SessionFile, load_session, save_session};

fn session_file(dir: &TempDir) -> PathBuf {
    let catalog = Catalog::from_words([
        ("the", 1204),
        ("Oliver", 412),
        ("back", 96),
        ("parish", 40),
    ])
    .unwrap();
    let session = Session::new("Oliver Twist", Arc::new(catalog)).unwrap();
    let path = dir.path().join("oliver.vocab.json");
    save_session(&mut SessionFile::from_session(&session), &path).unwrap();
    path
}

fn run_script(path: &Path, script: &str) -> String {
    let mut output = Vec::new();
    review_with(path, script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn stored_state(path: &Path, index: usize) -> WordState {
    load_session(path)
        .unwrap()
        .to_session()
        .unwrap()
        .state_of(index)
}

#[test]
fn test_transcript_classify_search_and_quit() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let transcript = run_script(&path, "k\n/ar\nquit\nquit!\n");
    insta::assert_snapshot!(transcript, @r"
    Reviewing 'Oliver Twist' (4 words). Type 'help' for commands.
    [1/4] the (1204 uses)
    [2/4] Oliver (412 uses)
    [4/4] parish (40 uses)
    Search 'ar': 1 of 1 matches
    There are unsaved changes. Use 'save' first or 'quit!' to discard them.
    ");

    // quit! discards the classification
    assert_eq!(stored_state(&path, 0), WordState::Unclassified);
}

#[test]
fn test_save_persists_classifications() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let transcript = run_script(&path, "k\nx\nsave\nquit\n");
    assert!(transcript.contains("Saved "));
    assert_eq!(stored_state(&path, 0), WordState::Known);
    assert_eq!(stored_state(&path, 1), WordState::Unknown);

    // Reopening continues at the first unseen word.
    let transcript = run_script(&path, "quit\n");
    assert!(transcript.contains("[3/4] back (96 uses)"));
}

#[test]
fn test_end_of_input_saves_changes() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    run_script(&path, "x\n");
    assert_eq!(stored_state(&path, 0), WordState::Unknown);
}

#[test]
fn test_rejected_filter_keeps_previous_settings() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let transcript = run_script(&path, "filter letters=5\nfilter occurrences=5000\nquit\n");
    assert!(transcript.contains("[2/4] Oliver (412 uses)"));
    assert!(transcript.contains("The filter would hide every word, so it has not been applied."));

    let (_, progress) = run_progress(&path).unwrap();
    // Filter edits are not classifications, so nothing was written.
    assert_eq!(progress.filtered_out, 0);
}

#[test]
fn test_exclusion_list_hides_words() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);
    let list = dir.path().join("common.txt");
    fs::write(&list, "# everyday words\nthe\nBACK\n").unwrap();

    let script = format!("exclude common {}\nk\nsave\nquit\n", list.display());
    let transcript = run_script(&path, &script);
    assert!(transcript.contains("[2/4] Oliver (412 uses)"));
    assert!(transcript.contains("[4/4] parish (40 uses)"));

    let (_, progress) = run_progress(&path).unwrap();
    assert_eq!(progress.filtered_out, 2);
    assert_eq!(progress.known, 1);
}

#[test]
fn test_unknown_command_is_reported() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let transcript = run_script(&path, "dance\nquit\n");
    assert!(transcript.contains("unrecognised command 'dance'"));
}

#[test]
fn test_exhausted_session_reports_no_words() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let transcript = run_script(&path, "k\nk\nk\nk\nk\nquit!\n");
    assert!(transcript.contains("No words left to review."));
    assert!(transcript.contains("There are no more words to review."));
}

#[test]
fn test_reset_word_keeps_cursor() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let transcript = run_script(&path, "k\nx\nu the\nu nobody\nsave\nquit\n");
    assert_eq!(transcript.matches("[3/4] back (96 uses)").count(), 2);
    assert!(transcript.contains("'nobody' is not in the word list"));
    assert_eq!(stored_state(&path, 0), WordState::Unclassified);
    assert_eq!(stored_state(&path, 1), WordState::Unknown);
}

#[test]
fn test_selection_lists_marked_words() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let transcript = run_script(&path, "selection unknown\nk\nx\nselection\nquit!\n");
    assert!(transcript.contains("Unknown (0)\n"));
    assert!(transcript.contains("Known (1): the\nUnknown (1): Oliver\n"));
}

#[test]
fn test_classify_named_word_keeps_cursor() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let transcript = run_script(&path, "x parish\nk parish\nk oliver\nselection\nquit!\n");
    assert_eq!(transcript.matches("[1/4] the (1204 uses)").count(), 4);
    assert!(transcript.contains("Known (2): Oliver, parish\nUnknown (0)\n"));
}

#[test]
fn test_exclude_words_seen_in_saved_session() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);

    let earlier = dir.path().join("chapter-one.vocab.json");
    let catalog = Catalog::from_words([("the", 80), ("back", 12), ("workhouse", 3)]).unwrap();
    let mut chapter = Session::new("Chapter one", Arc::new(catalog)).unwrap();
    chapter.classify_current(WordState::Known).unwrap();
    chapter.classify_current(WordState::Unknown).unwrap();
    save_session(&mut SessionFile::from_session(&chapter), &earlier).unwrap();

    let script = format!("exclude - {}\nk\nsave\nquit\n", earlier.display());
    let transcript = run_script(&path, &script);
    assert!(transcript.contains("[2/4] Oliver (412 uses)"));
    assert!(transcript.contains("[4/4] parish (40 uses)"));

    let stored = load_session(&path).unwrap();
    assert_eq!(stored.state.filter.exclusion_sets[0].name, "chapter-one.vocab");
    let (_, progress) = run_progress(&path).unwrap();
    assert_eq!(progress.filtered_out, 2);

    // Only the known words of the earlier session.
    let dir = tempdir().unwrap();
    let path = session_file(&dir);
    let script = format!("exclude ch1 {} known\nquit\n", earlier.display());
    let transcript = run_script(&path, &script);
    assert!(transcript.contains("[2/4] Oliver (412 uses)"));
}

#[test]
fn test_disable_keeps_word_list() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);
    let list = dir.path().join("common.txt");
    fs::write(&list, "oliver\n").unwrap();

    let script = format!(
        "exclude common {}\ndisable common\ndisable nothing\nk\nsave\nquit\n",
        list.display()
    );
    let transcript = run_script(&path, &script);
    assert!(transcript.contains("no word list named 'nothing'"));
    assert!(transcript.contains("[2/4] Oliver (412 uses)"));

    let stored = load_session(&path).unwrap();
    let sets = &stored.state.filter.exclusion_sets;
    assert_eq!(sets.len(), 1);
    assert!(!sets[0].enabled);

    let transcript = run_script(&path, "enable common\nk\nquit!\n");
    assert!(transcript.contains("[3/4] back (96 uses)"));
}

#[test]
fn test_missing_word_list_is_explained() {
    let dir = tempdir().unwrap();
    let path = session_file(&dir);
    let missing = dir.path().join("missing.txt");

    let script = format!("exclude gone {}\nquit\n", missing.display());
    let transcript = run_script(&path, &script);
    assert!(transcript.contains("Could not read the file at"));
    assert!(transcript.contains("Check that the file exists"));
}
