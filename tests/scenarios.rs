use wordsieve::core::{ConstraintSet, Pattern, Word, restriction};
use wordsieve::service::WordService;
use wordsieve::solver::{
    FISHING_WORD_SIZE, Preset, SolveConfig, SolveError, Solver, SolverLimits, compute_candidates,
    filter_candidates, is_candidate,
};
use wordsieve::wordlists::{Dictionaries, Dictionary, DictionaryId, WORDLE};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn small_service() -> WordService {
    let simple = Dictionary::from_slice(&["rusty", "sunny", "crane", "slate", "trace", "zonal"]);
    let wordle = Dictionary::from_slice(&["crane", "slate", "trace"]);
    WordService::new(Dictionaries::new(simple, wordle))
}

#[test]
fn test_forced_first_guess_then_solution() {
    let dictionary = Dictionary::from_slice(&["crane", "trace", "zonal"]);
    let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());

    let guesses = solver.solve("crane", Some("trace")).unwrap();
    assert_eq!(guesses, vec!["trace", "crane"]);

    // trace against crane leaves crane as the only candidate
    let guess = word("trace");
    let mut constraints = ConstraintSet::new();
    constraints
        .apply_feedback(&guess, Pattern::calculate(&guess, &word("crane")))
        .unwrap();
    assert_eq!(
        filter_candidates(dictionary.partition(5), &constraints),
        vec![word("crane")]
    );
}

#[test]
fn test_letter_required_elsewhere() {
    let dictionary = Dictionary::from_slice(&["rusty", "sunny"]);
    let constraints = restriction::parse("*s!1", 5).unwrap();

    let candidates = filter_candidates(dictionary.partition(5), &constraints);
    assert_eq!(candidates, vec![word("rusty")]);

    let report = compute_candidates(
        &constraints,
        dictionary.partition(5),
        &SolveConfig::default(),
        10,
    );
    assert_eq!(report.total_candidates, 1);
    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.ranked[0].word, word("rusty"));
}

#[test]
fn test_no_candidates_gives_empty_report() {
    let service = small_service();

    // Nothing of length 7 in the dictionary
    let report = service
        .candidates("", 7, DictionaryId::Simple, Preset::default(), 10)
        .unwrap();
    assert_eq!(report.total_candidates, 0);
    assert!(report.ranked.is_empty());
    assert!(report.fishing.is_empty());
    assert!(report.letter_weights.iter().all(|&weight| weight == 0));
}

#[test]
fn test_fishing_words_are_bounded() {
    let service = small_service();
    let report = service
        .candidates("", 5, DictionaryId::Simple, Preset::default(), 2)
        .unwrap();

    assert_eq!(report.total_candidates, 6);
    assert_eq!(report.ranked.len(), 2);
    assert!(report.fishing.len() <= FISHING_WORD_SIZE);
}

#[test]
fn test_repeated_lookup_hits_cache() {
    let service = small_service();

    let first = service
        .candidates("a", 5, DictionaryId::Simple, Preset::Frequency, 10)
        .unwrap();
    let second = service
        .candidates("a", 5, DictionaryId::Simple, Preset::Frequency, 10)
        .unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(service.cache().len(), 1);
}

#[test]
fn test_duplicate_letter_feedback() {
    // "speed" against "creep"
    let guess = word("speed");
    let answer = word("creep");
    let pattern = Pattern::calculate(&guess, &answer);
    assert_eq!(pattern, Pattern::from_str("-YGG-").unwrap());

    let mut constraints = ConstraintSet::new();
    constraints.apply_feedback(&guess, pattern).unwrap();

    assert!(is_candidate(&answer, &constraints));
    assert!(!is_candidate(&word("sheep"), &constraints));
    assert!(!is_candidate(&guess, &constraints));
}

#[test]
fn test_absent_duplicate_does_not_forbid_confirmed_letter() {
    // Both leading 'e's are absent, the last one is confirmed
    let guess = word("geese");
    let answer = word("those");
    let pattern = Pattern::calculate(&guess, &answer);

    let mut constraints = ConstraintSet::new();
    constraints.apply_feedback(&guess, pattern).unwrap();

    assert!(is_candidate(&answer, &constraints));
    assert!(!is_candidate(&word("these"), &constraints));
}

#[test]
fn test_solver_converges_on_wordle_sample() {
    let dictionary = Dictionary::from_slice(&WORDLE[..150]);
    let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());

    for target in dictionary.partition(5) {
        let guesses = solver.solve(target.text(), None).unwrap();
        assert_eq!(guesses.last().map(String::as_str), Some(target.text()));
        assert!(guesses.len() <= 10, "{target} took {} guesses", guesses.len());
    }
}

#[test]
fn test_unknown_solution_reports_guesses() {
    let dictionary = Dictionary::from_slice(&["crane", "slate", "trace"]);
    let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());

    let err = solver.solve("quack", None).unwrap_err();
    assert!(matches!(err, SolveError::EmptyCandidateSet { .. }));
    assert!(!err.guesses().is_empty());
}
