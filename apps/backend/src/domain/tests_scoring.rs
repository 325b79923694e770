use crate::domain::goal::Goal;
use crate::domain::rules::Ruleset;
use crate::domain::score::Score;
use crate::domain::scoring::{apply_goal, ScoringError};

fn score(
    user1_points: i32,
    user2_points: i32,
    user1_sets: i32,
    user2_sets: i32,
    points_in_balance: i32,
) -> Score {
    Score {
        user1_id: "user1".to_string(),
        user2_id: "user2".to_string(),
        user1_points,
        user2_points,
        user1_sets,
        user2_sets,
        points_in_balance,
    }
}

fn goal(scorer: &str, opponent: &str, player: &str, gamelle: bool) -> Goal {
    Goal::new(scorer, opponent, player, gamelle)
}

#[test]
fn mismatched_users_rejected_and_score_untouched() {
    let rules = Ruleset::standard_table();
    let initial = score(7, 3, 2, 1, 0);

    // Every way the goal's pair can fail to match the record's pair.
    let bad_pairs = [
        ("user3", "user4"),
        ("user2", "user3"),
        ("user3", "user2"),
        ("user1", "user3"),
        ("user3", "user1"),
        ("user1", "user1"),
    ];

    for (scorer, opponent) in bad_pairs {
        let mut s = initial.clone();
        let result = apply_goal(&mut s, &goal(scorer, opponent, "p1", false), &rules);
        assert_eq!(
            result,
            Err(ScoringError::MismatchedPlayers),
            "pair ({scorer}, {opponent}) should be rejected"
        );
        assert_eq!(s, initial, "pair ({scorer}, {opponent}) must not modify score");
    }
}

#[test]
fn matching_users_accepted_in_either_orientation() {
    let rules = Ruleset::standard_table();
    let initial = score(7, 3, 2, 1, 0);

    let mut s = initial.clone();
    apply_goal(&mut s, &goal("user1", "user2", "p1", false), &rules).unwrap();
    assert_eq!(s, score(8, 3, 2, 1, 0));

    let mut s = initial.clone();
    apply_goal(&mut s, &goal("user2", "user1", "p1", false), &rules).unwrap();
    assert_eq!(s, score(7, 4, 2, 1, 0));
}

#[test]
fn unauthorized_player_rejected_and_score_untouched() {
    let rules = Ruleset::standard_table();
    let initial = score(5, 4, 2, 1, 3);

    for player in ["zizou", "p0", "p12", ""] {
        let mut s = initial.clone();
        let result = apply_goal(&mut s, &goal("user1", "user2", player, false), &rules);
        assert_eq!(result, Err(ScoringError::UnauthorizedPlayer));
        assert_eq!(s, initial, "player {player:?} must not modify score");
    }
}

#[test]
fn validation_order_pair_checked_before_player() {
    let rules = Ruleset::standard_table();
    let mut s = score(0, 0, 0, 0, 0);
    let result = apply_goal(&mut s, &goal("user3", "user4", "zizou", false), &rules);
    assert_eq!(result, Err(ScoringError::MismatchedPlayers));
}

#[test]
fn every_authorized_player_accepted() {
    let rules = Ruleset::standard_table();
    for n in 1..=11 {
        let mut s = score(0, 0, 0, 0, 0);
        let player = format!("p{n}");
        apply_goal(&mut s, &goal("user1", "user2", &player, false), &rules)
            .unwrap_or_else(|e| panic!("{player} should be authorized, got {e}"));
    }
}

#[test]
fn ordinary_goal_scores_one_point() {
    let rules = Ruleset::standard_table();
    let mut s = score(3, 2, 6, 5, 0);
    apply_goal(&mut s, &goal("user1", "user2", "p1", false), &rules).unwrap();
    assert_eq!(s, score(4, 2, 6, 5, 0));
}

#[test]
fn pissette_goal_is_a_no_op_with_or_without_gamelle() {
    let rules = Ruleset::standard_table();
    let initial = score(5, 4, 2, 1, 0);

    let mut s = initial.clone();
    apply_goal(&mut s, &goal("user1", "user2", "p9", false), &rules).unwrap();
    assert_eq!(s, initial);

    let mut s = initial.clone();
    apply_goal(&mut s, &goal("user1", "user2", "p9", true), &rules).unwrap();
    assert_eq!(s, initial);
}

#[test]
fn gamelle_costs_the_opponent_a_point() {
    let rules = Ruleset::standard_table();
    let mut s = score(3, 2, 6, 5, 0);
    apply_goal(&mut s, &goal("user1", "user2", "p1", true), &rules).unwrap();
    assert_eq!(s, score(3, 1, 6, 5, 0));
}

#[test]
fn gamelle_may_drive_points_negative() {
    let rules = Ruleset::standard_table();
    let mut s = score(2, 0, 6, 5, 0);
    apply_goal(&mut s, &goal("user1", "user2", "p1", true), &rules).unwrap();
    assert_eq!(s, score(2, -1, 6, 5, 0));
}

#[test]
fn gamelle_by_demi_player_is_a_no_op() {
    let rules = Ruleset::standard_table();
    let initial = score(5, 4, 1, 2, 2);
    let mut s = initial.clone();
    apply_goal(&mut s, &goal("user1", "user2", "p4", true), &rules).unwrap();
    assert_eq!(s, initial);
}

#[test]
fn demi_goal_banks_two_points_without_scoring() {
    let rules = Ruleset::standard_table();
    let mut s = score(5, 4, 1, 2, 0);
    apply_goal(&mut s, &goal("user2", "user1", "p4", false), &rules).unwrap();
    assert_eq!(s, score(5, 4, 1, 2, 2));
}

#[test]
fn demi_goal_stacks_on_a_pending_balance() {
    let rules = Ruleset::standard_table();
    let mut s = score(5, 4, 1, 2, 2);
    apply_goal(&mut s, &goal("user2", "user1", "p4", false), &rules).unwrap();
    assert_eq!(s, score(5, 4, 1, 2, 4));
}

#[test]
fn every_demi_player_banks() {
    let rules = Ruleset::standard_table();
    for n in 4..=8 {
        let mut s = score(0, 0, 0, 0, 0);
        let player = format!("p{n}");
        apply_goal(&mut s, &goal("user1", "user2", &player, false), &rules).unwrap();
        assert_eq!(s, score(0, 0, 0, 0, 2), "{player} should bank 2");
    }
}

#[test]
fn ordinary_goal_pays_out_the_whole_balance() {
    let rules = Ruleset::standard_table();
    let mut s = score(5, 4, 1, 2, 2);
    apply_goal(&mut s, &goal("user1", "user2", "p1", false), &rules).unwrap();
    assert_eq!(s, score(7, 4, 1, 2, 0));
}

#[test]
fn gamelle_does_not_consume_a_pending_balance() {
    let rules = Ruleset::standard_table();
    let mut s = score(5, 4, 1, 2, 2);
    apply_goal(&mut s, &goal("user1", "user2", "p1", true), &rules).unwrap();
    assert_eq!(s, score(5, 3, 1, 2, 2));
}

#[test]
fn tenth_point_completes_the_set() {
    let rules = Ruleset::standard_table();

    let mut s = score(9, 4, 2, 1, 0);
    apply_goal(&mut s, &goal("user1", "user2", "p1", false), &rules).unwrap();
    assert_eq!(s, score(0, 0, 3, 1, 0));

    let mut s = score(5, 9, 6, 7, 0);
    apply_goal(&mut s, &goal("user2", "user1", "p1", false), &rules).unwrap();
    assert_eq!(s, score(0, 0, 6, 8, 0));
}

#[test]
fn balance_payout_can_complete_the_set_and_clears_the_balance() {
    let rules = Ruleset::standard_table();

    let mut s = score(9, 4, 2, 1, 6);
    apply_goal(&mut s, &goal("user1", "user2", "p1", false), &rules).unwrap();
    assert_eq!(s, score(0, 0, 3, 1, 0));

    let mut s = score(5, 9, 6, 7, 2);
    apply_goal(&mut s, &goal("user2", "user1", "p1", false), &rules).unwrap();
    assert_eq!(s, score(0, 0, 6, 8, 0));
}

#[test]
fn payout_overshooting_the_threshold_still_wins_exactly_one_set() {
    let rules = Ruleset::standard_table();
    let mut s = score(8, 0, 0, 0, 8);
    apply_goal(&mut s, &goal("user1", "user2", "p2", false), &rules).unwrap();
    assert_eq!(s, score(0, 0, 1, 0, 0));
}

#[test]
fn demi_goal_never_completes_a_set() {
    // Banking goals award no immediate points, so even at 9-all a demi goal
    // only grows the balance.
    let rules = Ruleset::standard_table();
    let mut s = score(9, 9, 0, 0, 0);
    apply_goal(&mut s, &goal("user1", "user2", "p5", false), &rules).unwrap();
    assert_eq!(s, score(9, 9, 0, 0, 2));
}

#[test]
fn full_rally_from_zero() {
    // A short match driven goal by goal from a lazily created score.
    let rules = Ruleset::standard_table();
    let mut s = Score::new_pair("alice", "bob");

    apply_goal(&mut s, &Goal::new("alice", "bob", "p1", false), &rules).unwrap();
    apply_goal(&mut s, &Goal::new("bob", "alice", "p6", false), &rules).unwrap();
    apply_goal(&mut s, &Goal::new("bob", "alice", "p2", false), &rules).unwrap();
    assert_eq!(s.user1_points, 1);
    assert_eq!(s.user2_points, 2);
    assert_eq!(s.points_in_balance, 0);

    apply_goal(&mut s, &Goal::new("alice", "bob", "p10", true), &rules).unwrap();
    assert_eq!(s.user2_points, 1);

    for _ in 0..9 {
        apply_goal(&mut s, &Goal::new("alice", "bob", "p1", false), &rules).unwrap();
    }
    assert_eq!(s.user1_sets, 1);
    assert_eq!(s.user1_points, 0);
    assert_eq!(s.user2_points, 0);
}

#[test]
fn variant_ruleset_is_honored() {
    // Three-player table, one demi, first to 3, demi banks 1.
    let rules = Ruleset::new(["a", "b", "c"], ["b"], "c", 3, 1);

    let mut s = Score::new_pair("user1", "user2");
    apply_goal(&mut s, &goal("user1", "user2", "b", false), &rules).unwrap();
    assert_eq!(s.points_in_balance, 1);

    apply_goal(&mut s, &goal("user1", "user2", "a", false), &rules).unwrap();
    assert_eq!(s.user1_points, 1);
    assert_eq!(s.points_in_balance, 0);

    apply_goal(&mut s, &goal("user1", "user2", "c", false), &rules).unwrap();
    assert_eq!(s.user1_points, 1);

    let result = apply_goal(&mut s, &goal("user1", "user2", "p1", false), &rules);
    assert_eq!(result, Err(ScoringError::UnauthorizedPlayer));

    apply_goal(&mut s, &goal("user1", "user2", "a", false), &rules).unwrap();
    apply_goal(&mut s, &goal("user1", "user2", "a", false), &rules).unwrap();
    assert_eq!(s.user1_sets, 1);
    assert_eq!(s.user1_points, 0);
}
