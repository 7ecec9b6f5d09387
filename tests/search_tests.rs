use std::collections::HashSet;

use boggle_solver::{find_words, solve_all, Board, Lexicon, WordGroups};

fn get_test_lexicon() -> Lexicon {
    Lexicon::from_words(["cat", "cats", "car", "care"])
}

fn expected(words: &[&str]) -> WordGroups {
    words.iter().copied().collect()
}

#[test]
fn test_finds_chained_words() {
    let lexicon = get_test_lexicon();
    let mut board = Board::new(2, 2, ["c", "a", "s", "t"]).unwrap();

    let words = find_words(&mut board, &lexicon);
    assert_eq!(words, expected(&["cat", "cats"]));
    assert_eq!(words.lengths().collect::<Vec<_>>(), [3, 4]);
    assert_eq!(words.get(3), Some(&["cat".to_string()][..]));
}

#[test]
fn test_untraceable_word() {
    let lexicon = Lexicon::from_words(["cat"]);
    let mut board = Board::new(3, 1, ["c", "t", "a"]).unwrap();

    let words = find_words(&mut board, &lexicon);
    assert!(words.is_empty());
    assert_eq!(words.word_count(), 0);
}

#[test]
fn test_multi_letter_tile() {
    let lexicon = Lexicon::from_words(["quiz", "quit"]);
    let mut board = Board::new(2, 2, ["qu", "i", "z", "t"]).unwrap();

    let words = find_words(&mut board, &lexicon);
    assert_eq!(words, expected(&["quiz", "quit"]));
    assert_eq!(words.get(4), Some(&["quit".to_string(), "quiz".to_string()][..]));
}

#[test]
fn test_single_tile_is_never_reused() {
    let lexicon = Lexicon::from_words(["aaa", "aaaa"]);
    let mut board = Board::new(1, 1, ["a"]).unwrap();

    let report = board.search(&lexicon);
    assert!(report.words.is_empty());
    assert_eq!(report.stats.max_depth, 1);
    assert_eq!(report.stats.tiles_entered, 1);
    assert_eq!(report.stats.lexicon_checks, 0);
}

#[test]
fn test_long_token_on_single_tile() {
    let lexicon = Lexicon::from_words(["the"]);
    let mut board = Board::new(1, 1, ["the"]).unwrap();

    let report = board.search(&lexicon);
    assert!(report.words.contains("the"));
    assert_eq!(report.paths["the"].len(), 1);
}

#[test]
fn test_empty_lexicon_finds_nothing() {
    let lexicon = Lexicon::new();
    let mut board = Board::parse_square("c a t s e r a t e").unwrap();

    let report = board.search(&lexicon);
    assert!(report.words.is_empty());
    assert!(report.stats.pruned > 0);
    assert_eq!(report.stats.max_depth, 3);
}

#[test]
fn test_valid_word_keeps_extending() {
    let lexicon = Lexicon::from_words(["tea", "teach"]);
    let mut board = Board::new(5, 1, ["t", "e", "a", "c", "h"]).unwrap();

    let words = find_words(&mut board, &lexicon);
    assert_eq!(words, expected(&["tea", "teach"]));
}

#[test]
fn test_prefix_only_keeps_extending() {
    let lexicon = Lexicon::from_words(["teach"]);
    let mut board = Board::new(5, 1, ["t", "e", "a", "c", "h"]).unwrap();

    let report = board.search(&lexicon);
    assert!(report.words.contains("teach"));
    assert_eq!(report.stats.max_depth, 5);
}

#[test]
fn test_dead_prefix_is_pruned() {
    let lexicon = Lexicon::from_words(["cat"]);
    let mut board = Board::parse_square("x y z w v u r q p").unwrap();

    let report = board.search(&lexicon);
    assert!(report.words.is_empty());
    assert_eq!(report.stats.max_depth, 3);
    assert_eq!(report.stats.pruned, report.stats.lexicon_checks);
}

#[test]
fn test_deviation_is_pruned() {
    let lexicon = Lexicon::from_words(["tests"]);
    let mut board = Board::new(5, 1, ["t", "e", "s", "x", "s"]).unwrap();

    let report = board.search(&lexicon);
    assert!(report.words.is_empty());
    // "tesx" deviates, so the final "s" is never reached along that path.
    assert_eq!(report.stats.max_depth, 4);
}

#[test]
fn test_search_is_repeatable() {
    let lexicon = Lexicon::embedded();
    let mut board = Board::parse_square("t e a c h e r s a t e s r a c e").unwrap();

    let first = find_words(&mut board, &lexicon);
    assert!(board.is_settled());
    let second = find_words(&mut board, &lexicon);
    assert!(board.is_settled());

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_groups_sorted_and_unique() {
    let lexicon = Lexicon::embedded();
    let mut board = Board::parse_square("s t a r e a t e r s t a r e a t").unwrap();

    let words = find_words(&mut board, &lexicon);
    let lengths: Vec<usize> = words.lengths().collect();
    assert!(lengths.windows(2).all(|w| w[0] < w[1]));

    for (len, group) in words.iter() {
        assert!(len >= 3);
        assert!(group.windows(2).all(|w| w[0] < w[1]), "group {} unsorted", len);
        assert!(group.iter().all(|w| w.chars().count() == len));
        assert!(group.iter().all(|w| lexicon.contains(w)));
    }
}

#[test]
fn test_paths_use_distinct_adjacent_tiles() {
    let lexicon = Lexicon::embedded();
    let mut board = Board::parse_square("r a t e s t a r e a r t qu i t e").unwrap();

    let report = board.search(&lexicon);
    assert!(!report.paths.is_empty());
    assert_eq!(report.paths.len(), report.words.word_count());

    for (word, path) in &report.paths {
        let distinct: HashSet<_> = path.iter().collect();
        assert_eq!(distinct.len(), path.len(), "{} reuses a tile", word);
        assert!(
            path.windows(2).all(|p| p[0].is_adjacent(p[1])),
            "{} jumps between tiles",
            word
        );
        let spelled: String = path
            .iter()
            .map(|&pos| board.tile(pos).unwrap().token())
            .collect();
        assert_eq!(&spelled, word);
    }
}

#[test]
fn test_board_method_matches_free_function() {
    let lexicon = get_test_lexicon();
    let mut board = Board::new(2, 2, ["c", "a", "s", "t"]).unwrap();

    let via_method = board.find_words(&lexicon);
    let via_fn = find_words(&mut board, &lexicon);
    assert_eq!(via_method, via_fn);
}

#[test]
fn test_solve_all_matches_sequential() {
    let lexicon = Lexicon::embedded();
    let inputs = [
        "c a t s",
        "t e a c h e r s a t e s r a c e",
        "qu i t e s a r e t",
        "x x x x",
    ];
    let mut boards: Vec<Board> = inputs
        .iter()
        .map(|input| Board::parse_square(input).unwrap())
        .collect();
    let expected: Vec<WordGroups> = boards
        .clone()
        .iter_mut()
        .map(|board| board.find_words(&lexicon))
        .collect();

    let results = solve_all(&mut boards, &lexicon);
    assert_eq!(results, expected);
    assert!(results[3].is_empty());
    assert!(boards.iter().all(Board::is_settled));
}

#[test]
fn test_word_groups_from_iter() {
    let words: WordGroups = ["cats", "at", "cat", "act", "cat", "tacs"].into_iter().collect();

    assert_eq!(words.word_count(), 4);
    assert_eq!(words.get(2), None);
    assert_eq!(words.get(3), Some(&["act".to_string(), "cat".to_string()][..]));
    assert_eq!(words.get(4), Some(&["cats".to_string(), "tacs".to_string()][..]));
    assert!(words.contains("tacs"));
    assert!(!words.contains("at"));
    assert_eq!(words.words().collect::<Vec<_>>(), ["act", "cat", "cats", "tacs"]);
}

#[test]
fn test_word_groups_json() {
    let words: WordGroups = ["cat", "cats"].into_iter().collect();
    let json = serde_json::to_string(&words).unwrap();
    assert_eq!(json, r#"{"3":["cat"],"4":["cats"]}"#);

    let parsed: WordGroups = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, words);
}
