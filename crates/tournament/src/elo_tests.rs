use super::*;

#[test]
fn test_equal_ratings_expect_even_score() {
    let book = EloBook::new();
    let expected = book.expected("engine1", "engine2");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn test_winner_gains_loser_drops() {
    let mut book = EloBook::new();
    let result = MatchResult {
        wins: 10,
        losses: 0,
        draws: 0,
    };
    book.apply("engine1", "engine2", &result);

    assert!(book.rating("engine1") > DEFAULT_ELO);
    assert!(book.rating("engine2") < DEFAULT_ELO);
}

#[test]
fn test_drawn_match_between_equals_changes_nothing() {
    let mut book = EloBook::new();
    let result = MatchResult {
        wins: 0,
        losses: 0,
        draws: 10,
    };
    book.apply("engine1", "engine2", &result);

    assert!((book.rating("engine1") - DEFAULT_ELO).abs() < 1e-9);
    assert!((book.rating("engine2") - DEFAULT_ELO).abs() < 1e-9);
}

#[test]
fn test_leaderboard_sorted_by_rating() {
    let mut book = EloBook::new();
    book.apply(
        "strong",
        "weak",
        &MatchResult {
            wins: 8,
            losses: 1,
            draws: 1,
        },
    );
    let board = book.leaderboard();
    assert_eq!(board[0].0, "strong");
    assert_eq!(board[0].2, 10);
}

#[test]
fn test_match_result_score() {
    let result = MatchResult {
        wins: 6,
        losses: 2,
        draws: 2,
    };
    assert!((result.score() - 0.7).abs() < 1e-9);
    assert_eq!(result.total_games(), 10);
}

#[test]
fn test_game_result_flip() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}
