// Unit tests for interaction classification.
//
// Covers the classifier's contract: first-match-wins scanning, category
// precedence, mutual exclusion of the three interaction booleans, and the
// profile_verified derivation.

use raidwatch::models::{Activity, Interactions, Profile};
use raidwatch::verify::classify::{classify, target_post_id};

fn profile(verified: bool, blue: bool) -> Profile {
    Profile {
        username: "raider1".to_string(),
        user_id: "10001".to_string(),
        verified,
        is_blue_verified: blue,
        followers_count: 0,
        following_count: 0,
        tweet_count: 0,
        account_created: None,
        profile_image: None,
        last_checked: "2025-01-01T00:00:00Z".to_string(),
    }
}

fn activity(text: &str, is_retweet: bool, is_reply: bool, created_at: &str) -> Activity {
    Activity {
        activity_id: Some("1".to_string()),
        text: text.to_string(),
        created_at: Some(created_at.to_string()),
        retweet_count: 0,
        favorite_count: 0,
        reply_count: 0,
        quote_count: 0,
        is_retweet,
        is_reply,
    }
}

fn exclusive(i: &Interactions) -> bool {
    [i.retweeted, i.quoted, i.replied]
        .iter()
        .filter(|b| **b)
        .count()
        <= 1
}

// ============================================================
// target_post_id extraction
// ============================================================

#[test]
fn target_id_from_status_url() {
    assert_eq!(
        target_post_id("https://x.com/user/status/1234567890"),
        "1234567890"
    );
}

#[test]
fn target_id_survives_trailing_segment_only() {
    assert_eq!(target_post_id("status/99"), "99");
    assert_eq!(target_post_id("99"), "99");
}

// ============================================================
// No-match outcomes
// ============================================================

#[test]
fn empty_activity_list_yields_all_false() {
    let result = classify("1234567890", &[], &profile(false, false));
    assert!(!result.retweeted);
    assert!(!result.quoted);
    assert!(!result.replied);
    assert!(result.last_activity.is_none());
}

#[test]
fn non_matching_activities_yield_all_false() {
    let activities = vec![
        activity("completely unrelated", false, false, "Mon Jan 01"),
        activity("also unrelated", true, false, "Tue Jan 02"),
    ];
    let result = classify("1234567890", &activities, &profile(false, false));
    assert!(!result.retweeted && !result.quoted && !result.replied);
    assert!(result.last_activity.is_none());
}

// ============================================================
// Category assignment
// ============================================================

#[test]
fn retweet_match_sets_retweeted() {
    let activities = vec![activity("RT: check 1234567890", true, false, "Mon")];
    let result = classify("1234567890", &activities, &profile(false, false));
    assert!(result.retweeted);
    assert!(!result.quoted && !result.replied);
    assert_eq!(result.last_activity.as_deref(), Some("Mon"));
}

#[test]
fn reply_match_sets_replied() {
    let activities = vec![activity("replying to 1234567890", false, true, "Mon")];
    let result = classify("1234567890", &activities, &profile(false, false));
    assert!(result.replied);
    assert!(!result.retweeted && !result.quoted);
}

#[test]
fn plain_match_sets_quoted() {
    let activities = vec![activity("look at 1234567890 everyone", false, false, "Mon")];
    let result = classify("1234567890", &activities, &profile(false, false));
    assert!(result.quoted);
    assert!(!result.retweeted && !result.replied);
}

#[test]
fn retweet_flag_takes_precedence_over_reply_flag() {
    // Both flags set on the same entry: retweet wins.
    let activities = vec![activity("1234567890", true, true, "Mon")];
    let result = classify("1234567890", &activities, &profile(false, false));
    assert!(result.retweeted);
    assert!(!result.replied);
}

// ============================================================
// First match wins
// ============================================================

#[test]
fn second_entry_match_wins_over_later_matches() {
    // Spec scenario: second entry is a matching reply; a later entry also
    // matches but must be ignored.
    let activities = vec![
        activity("no mention here", false, false, "Mon Jan 01"),
        activity("reply about 1234567890", false, true, "Tue Jan 02"),
        activity("RT 1234567890 again", true, false, "Wed Jan 03"),
    ];
    let result = classify("1234567890", &activities, &profile(false, false));
    assert!(result.replied);
    assert!(!result.retweeted);
    assert!(!result.quoted);
    assert_eq!(result.last_activity.as_deref(), Some("Tue Jan 02"));
}

#[test]
fn scanning_stops_at_first_match() {
    let activities = vec![
        activity("quote of 1234567890", false, false, "first"),
        activity("RT 1234567890", true, false, "second"),
    ];
    let result = classify("1234567890", &activities, &profile(false, false));
    assert!(result.quoted);
    assert_eq!(result.last_activity.as_deref(), Some("first"));
}

// ============================================================
// Mutual exclusion across the board
// ============================================================

#[test]
fn interaction_booleans_are_pairwise_exclusive() {
    let cases = vec![
        vec![],
        vec![activity("1234567890", true, false, "a")],
        vec![activity("1234567890", false, true, "a")],
        vec![activity("1234567890", false, false, "a")],
        vec![activity("1234567890", true, true, "a")],
        vec![
            activity("x", false, false, "a"),
            activity("1234567890", true, false, "b"),
        ],
    ];
    for activities in cases {
        let result = classify("1234567890", &activities, &profile(false, false));
        assert!(exclusive(&result), "violated for {activities:?}");
    }
}

// ============================================================
// profile_verified and liked
// ============================================================

#[test]
fn profile_verified_is_or_of_both_flags() {
    assert!(!classify("1", &[], &profile(false, false)).profile_verified);
    assert!(classify("1", &[], &profile(true, false)).profile_verified);
    assert!(classify("1", &[], &profile(false, true)).profile_verified);
    assert!(classify("1", &[], &profile(true, true)).profile_verified);
}

#[test]
fn profile_verified_independent_of_activity_scan() {
    // Verified account with zero matching activity is still verified.
    let result = classify("1234567890", &[], &profile(true, false));
    assert!(result.profile_verified);
    assert!(!result.retweeted && !result.quoted && !result.replied);
}

#[test]
fn liked_is_always_false() {
    // Likes aren't observable through this API surface — "unknown", never true.
    let activities = vec![activity("1234567890", true, false, "Mon")];
    let result = classify("1234567890", &activities, &profile(true, true));
    assert!(!result.liked);
    assert!(!classify("1234567890", &[], &profile(false, false)).liked);
}

// ============================================================
// Substring heuristic (preserved behavior)
// ============================================================

#[test]
fn id_embedded_mid_text_matches() {
    let activities = vec![activity(
        "https://x.com/user/status/1234567890?s=20",
        false,
        false,
        "Mon",
    )];
    let result = classify("1234567890", &activities, &profile(false, false));
    assert!(result.quoted);
}
