//! Integration tests for the progression path
//!
//! Full path: score results → session → XP → level → mood → achievements

use pretty_assertions::assert_eq;

use mendcore::core::{
    buddy_mood, calculate_improvement, calculate_level, calculate_xp_delta, CoachSession,
    MessageScorer,
};
use mendcore::types::{BuddyMood, ImprovementLevel};

/// XP delta is deterministic across repeated calls
#[test]
fn test_xp_delta_repeatable() {
    let first = calculate_xp_delta(10, 80);
    for _ in 0..100 {
        assert_eq!(calculate_xp_delta(10, 80), first);
    }
    assert_eq!(first, 50);
}

/// Level never decreases as XP grows
#[test]
fn test_level_monotonic_over_session() {
    let scorer = MessageScorer::new();
    let mut session = CoachSession::new();
    let mut last_level = session.level().level;

    for _ in 0..30 {
        session.apply(&scorer.score("I hear you, and I'm sorry. Let's try again."));
        let level = session.level().level;
        assert!(level >= last_level);
        last_level = level;
    }
    assert!(last_level > 1);
}

/// calculateLevel(0) is the level-1 origin
#[test]
fn test_level_origin() {
    let info = calculate_level(0);
    assert_eq!(info.level, 1);
    assert_eq!(info.xp_into_level, 0);
    assert_eq!(info.progress_percent, 0);
}

/// Level is a pure function of total XP: session agrees with direct computation
#[test]
fn test_session_level_matches_total_xp() {
    let scorer = MessageScorer::new();
    let mut session = CoachSession::new();

    for _ in 0..7 {
        session.apply(&scorer.score("That makes sense. My mistake."));
    }

    assert_eq!(session.level(), calculate_level(session.total_xp()));
}

/// Mood tracks the latest message, heat bands first
#[test]
fn test_mood_over_conversation() {
    let scorer = MessageScorer::new();

    let hot = scorer.score("You always ignore me, you don't care, I'm done.");
    assert_eq!(buddy_mood(hot.heat, hot.repair), BuddyMood::Overheated);

    let warm = scorer.score("I'm sorry. I understand why that hurt.");
    assert_eq!(buddy_mood(warm.heat, warm.repair), BuddyMood::Proud);

    let neutral = scorer.score("See you at six.");
    assert_eq!(buddy_mood(neutral.heat, neutral.repair), BuddyMood::Calm);
}

/// A full coaching arc: rupture, repair, achievements, level-up
#[test]
fn test_full_coaching_arc() {
    let scorer = MessageScorer::new();
    let mut session = CoachSession::new();

    // Escalation opens a rupture
    let blowup = session.apply(&scorer.score(
        "You always ignore me, you don't care, I'm done.",
    ));
    assert_eq!(blowup.mood, BuddyMood::Overheated);
    assert!(!session.rupture_recovered());

    // A rewrite lands the full repair combo and recovers the rupture
    let repair = session.apply(&scorer.score(
        "I understand. I'm sorry, I should have told you sooner. \
         Can we talk about how to handle this going forward?",
    ));
    assert_eq!(repair.mood, BuddyMood::Proud);
    assert!(session.rupture_recovered());

    let ids: Vec<_> = repair.newly_unlocked.iter().map(|a| a.id).collect();
    assert!(ids.contains(&"repair_combo"));
    assert!(ids.contains(&"rupture_recovery"));

    // Keep practicing until level 2
    let mut leveled = repair.leveled_up;
    for _ in 0..3 {
        leveled |= session
            .apply(&scorer.score("I hear you. I need a pause, then let's talk."))
            .leveled_up;
    }
    assert!(leveled);
    assert!(session.level().level >= 2);
}

/// Improvement bonus rewards a cooler, more repairing rewrite
#[test]
fn test_rewrite_improvement() {
    let scorer = MessageScorer::new();

    let first = scorer.score("You never listen. Whatever.");
    let second = scorer.score("I'm sorry. I get it, can we talk about what happened?");

    let improvement = calculate_improvement(&first, &second);
    assert!(improvement.heat_improved);
    assert!(improvement.repair_improved);
    assert_eq!(improvement.level, ImprovementLevel::Great);
    assert!(improvement.bonus_xp > 0);
}

/// Achievements are never granted twice by the session
#[test]
fn test_achievement_grants_deduped() {
    let scorer = MessageScorer::new();
    let mut session = CoachSession::new();
    let score = scorer.score("I understand, and I'm sorry. I need us to reset.");

    let mut seen = std::collections::HashSet::new();
    for _ in 0..5 {
        for achievement in session.apply(&score).newly_unlocked {
            assert!(seen.insert(achievement.id), "{} granted twice", achievement.id);
        }
    }
}
