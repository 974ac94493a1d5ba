use grid_trace_core::*;

fn board(rows: &[&str]) -> Board {
    Board::new(rows).unwrap()
}

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

fn solve(rows: &[&str], words: &[&str]) -> Vec<String> {
    sorted(find_words(&board(rows), words, SolverConfig::default()).unwrap())
}

#[test]
fn classic_board() {
    let found = solve(
        &["oaan", "etae", "ihkr", "iflv"],
        &["oath", "pea", "eat", "rain"],
    );
    assert_eq!(found, vec!["eat", "oath"]);
}

#[test]
fn repeated_letters() {
    let found = solve(&["ab", "aa"], &["aba", "baa", "aaab", "aaaa"]);
    assert!(found.contains(&"aba".to_string()));
    assert!(found.contains(&"baa".to_string()));
    // Only three "a" cells
    assert!(!found.contains(&"aaaa".to_string()));
    // (0,0) -> (1,0) -> (1,1) -> (0,1)
    assert!(found.contains(&"aaab".to_string()));
    let path = trace_word(&board(&["ab", "aa"]), "aaab").unwrap();
    assert_eq!(path.iter().map(|c| c.get()).collect::<Vec<_>>(), vec![0, 2, 3, 1]);
}

#[test]
fn single_cell() {
    assert_eq!(solve(&["a"], &["a"]), vec!["a"]);
    assert!(solve(&["a"], &["b"]).is_empty());
    assert!(solve(&["a"], &["aa"]).is_empty());
}

#[test]
fn no_diagonal_moves() {
    assert!(solve(&["ab", "cd"], &["abcb"]).is_empty());
    assert!(solve(&["ab", "cd"], &["ad", "bc"]).is_empty());
    assert_eq!(solve(&["ab", "cd"], &["abdc", "acdb"]), vec!["abdc", "acdb"]);
}

#[test]
fn words_longer_than_the_board() {
    let rows = ["ab", "ba"];
    let word = "abababab";
    for &prefilter in &[true, false] {
        let config = SolverConfig {
            prefilter,
            ..SolverConfig::default()
        };
        let found = find_words(&board(&rows), &[word, "abab"], config).unwrap();
        assert_eq!(found, vec!["abab"]);
    }
}

#[test]
fn letters_missing_from_the_board() {
    // Three "a" on the board, the word needs four
    assert!(solve(&["aab", "bba"], &["aaaa"]).is_empty());
}

#[test]
fn reversed_words_are_reported_as_given() {
    let rows = ["baaa"];
    let words = ["aaab", "baaa", "aab"];
    assert_eq!(orientation("aaab"), Orientation::Reversed);

    let found = find_words(&board(&rows), &words, SolverConfig::default()).unwrap();
    assert_eq!(sorted(found), vec!["aaab", "aab", "baaa"]);
}

#[test]
fn search_is_idempotent() {
    let b = board(&["oaan", "etae", "ihkr", "iflv"]);
    let words = ["oath", "oat", "eat", "tea", "hike", "rain", "neat", "aa"];
    let first = find_words(&b, &words, SolverConfig::default()).unwrap();
    let second = find_words(&b, &words, SolverConfig::default()).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn duplicates_can_be_kept() {
    let b = board(&["ab", "cd"]);
    let config = SolverConfig {
        dedup: false,
        ..SolverConfig::default()
    };
    let found = find_words(&b, &["ab", "ab"], config).unwrap();
    // The tree merges equal words, the walker finds them once
    assert_eq!(found, vec!["ab"]);
}

#[test]
fn rejects_invalid_input() {
    assert!(matches!(
        Board::new::<&str>(&[]),
        Err(Error::EmptyBoard)
    ));
    assert!(matches!(
        Board::new(&["ab", "a"]),
        Err(Error::RaggedRow { row: 1, .. })
    ));
    let b = board(&["ab"]);
    assert!(matches!(
        find_words(&b, &["ab", ""], SolverConfig::default()),
        Err(Error::EmptyWord { index: 1 })
    ));
}

#[test]
fn walk_statistics() {
    let b = board(&["ab", "cd"]);
    let candidates = prepare(
        &b,
        &["ab", "abd", "abc", "x"],
        PrepareOptions {
            prefilter: false,
            orient: false,
        },
    );
    let tree = PatternTree::build(&candidates);
    let walk = BoardWalker::new(&b, &tree).walk();

    assert_eq!(walk.words, vec!["ab", "abd"]);
    // "ab", "c", "d" and "x"
    assert_eq!(walk.stats.nodes_searched, 4);
    assert_eq!(walk.stats.subtrees_pruned, 2);
    assert_eq!(walk.stats.words_emitted, 2);
}
