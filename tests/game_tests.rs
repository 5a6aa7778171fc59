use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_analysis::commands::{SessionEnd, run_solve};
use wordle_analysis::config::SolverConfig;
use wordle_analysis::core::{CandidateSet, Mark, Pattern, Word};
use wordle_analysis::game::{GameState, PlaySession, PlayStatus, SolveSession, SolveStatus};
use wordle_analysis::solver::{FirstGuessCache, Solver, fingerprint, rank};
use wordle_analysis::wordlists::{FrequencyTable, known_words, loader::parse_words};

const DICTIONARY: &str = "crane\ntrace\nslate\nCRANE\ncranes\nsl@te\n\nzzzzz\n";
const FREQUENCIES: &str = "# word frequency\ncrane 2e-6\ntrace 3e-6\nslate 1e-6\n";

fn setup() -> (FrequencyTable, CandidateSet) {
    let table = FrequencyTable::parse("en", FREQUENCIES).unwrap();
    let words = known_words(parse_words(DICTIONARY, 5), &table, "en");
    (table, CandidateSet::new(words))
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn test_dictionary_loading_drops_unusable_lines() {
    let (_, dictionary) = setup();
    let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
    assert_eq!(texts, vec!["crane", "trace", "slate"]);
}

#[test]
fn test_trace_against_crane_end_to_end() {
    use Mark::{Hit, Miss, Present};
    let (table, dictionary) = setup();
    let solver = Solver::new(&table, SolverConfig::default());
    let mut session = PlaySession::with_secret(&solver, dictionary, word("crane"));

    let round = session.submit_guess("trace").unwrap();
    assert_eq!(round.pattern.marks(), &[Miss, Hit, Hit, Present, Hit]);
    assert_eq!(session.candidates().words(), &[word("crane")]);
    assert_eq!(
        round.status,
        PlayStatus::Continue {
            suggestion: Some(word("crane"))
        }
    );

    let round = session.submit_guess("crane").unwrap();
    assert_eq!(round.status, PlayStatus::Solved);
    assert_eq!(session.state(), GameState::Solved);
}

#[test]
fn test_seeded_secret_is_reproducible() {
    let (table, dictionary) = setup();
    let solver = Solver::new(&table, SolverConfig::default());

    let outcome = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = PlaySession::new(&solver, dictionary.clone(), &mut rng).unwrap();
        session.submit_guess("slate").unwrap().pattern
    };
    assert_eq!(outcome(7), outcome(7));
}

#[test]
fn test_six_misses_exhaust_and_reveal_once() {
    let (table, dictionary) = setup();
    let solver = Solver::new(&table, SolverConfig::default());
    let mut session = PlaySession::with_secret(&solver, dictionary, word("crane"));

    let reveals = (0..6)
        .map(|_| session.submit_guess("zzzzz").unwrap())
        .filter(|round| matches!(round.status, PlayStatus::Exhausted { .. }))
        .count();

    assert_eq!(reveals, 1);
    assert_eq!(session.state(), GameState::Exhausted);
    assert!(session.submit_guess("crane").is_err());
}

#[test]
fn test_singleton_ranks_with_full_score() {
    let set = CandidateSet::new([word("crane")]);
    let ranking = rank(&set, SolverConfig::default().sampling);
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].word, word("crane"));
    assert!((ranking[0].score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_solve_session_with_cache_file() {
    let (table, dictionary) = setup();
    let solver = Solver::new(&table, SolverConfig::default());

    let path =
        std::env::temp_dir().join(format!("wordle_analysis_it_{}.json", std::process::id()));
    let built = FirstGuessCache::build(&dictionary);
    built.save(&path).unwrap();
    let cache = FirstGuessCache::load(&path, Some(fingerprint(dictionary.words()))).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(cache, built);

    let mut session = SolveSession::new(&solver, dictionary, Some(&cache));
    assert_eq!(session.suggestion(), cache.best().map(|b| &b.word));

    let guess = session.parse_guess("TRACE").unwrap();
    let pattern = Pattern::evaluate(&guess, &word("crane")).unwrap();
    let round = session.record(guess, pattern).unwrap();
    assert_eq!(round.remaining, 1);
    assert_eq!(
        round.status,
        SolveStatus::Continue {
            suggestion: Some(word("crane"))
        }
    );
}

#[test]
fn test_solve_driver_over_text() {
    colored::control::set_override(false);
    let (table, dictionary) = setup();
    let solver = Solver::new(&table, SolverConfig::default());
    let mut session = SolveSession::new(&solver, dictionary, None);

    let mut out = Vec::new();
    let input = "trace\n0,2,2,1,2\n\n22222\n";
    let end = run_solve(&mut session, input.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(end, SessionEnd::Solved);
    assert!(out.contains("Candidates remaining: 1"));
    assert!(out.contains("Your suggested word is: crane"));
    assert!(out.contains("What feedback did crane get?"));
}
