use crate::parse_response;
use crate::tests::support::conversation;
use crate::transcript::assemble;

#[test]
fn test_well_formed_overall_section() {
    let outcome = parse_response("```overall\nSUMMARY\n```");

    assert_eq!(outcome.overall.as_deref(), Some("SUMMARY"));
    assert!(outcome.by_participant.is_empty());
    assert!(!outcome.parse_fallback);
}

#[test]
fn test_both_sections() {
    let raw = "\
```overall
The group argued about the release.
```
```participants
[Alice]: went shopping
Bob: played chess
```";

    let outcome = parse_response(raw);

    assert_eq!(
        outcome.overall.as_deref(),
        Some("The group argued about the release.")
    );
    assert_eq!(outcome.by_participant.len(), 2);
    assert_eq!(
        outcome.by_participant.get("Alice").map(String::as_str),
        Some("went shopping")
    );
    assert_eq!(
        outcome.by_participant.get("Bob").map(String::as_str),
        Some("played chess")
    );
}

#[test]
fn test_no_markers_falls_back_to_raw() {
    let outcome = parse_response("random text with no markers");

    assert_eq!(outcome.overall.as_deref(), Some("random text with no markers"));
    assert!(outcome.by_participant.is_empty());
    assert!(outcome.parse_fallback);
}

#[test]
fn test_never_panics_on_degenerate_input() {
    for raw in [
        "",
        "   \n\t  ",
        "```",
        "```overall",
        "```overall with no close",
        "```participants\n[unclosed",
        "``` ```overall```participants```",
        "[]: no fence at all",
        "日本語のテキスト 💰 ```overall\n要約\n```",
    ] {
        let outcome = parse_response(raw);
        assert!(outcome.overall.is_some());
    }
}

#[test]
fn test_empty_input_returns_empty_overall() {
    let outcome = parse_response("");

    assert_eq!(outcome.overall.as_deref(), Some(""));
    assert!(outcome.by_participant.is_empty());
    assert!(outcome.parse_fallback);
}

#[test]
fn test_unbalanced_overall_fence_falls_back() {
    let raw = "```overall\nnever closed";

    let outcome = parse_response(raw);

    assert_eq!(outcome.overall.as_deref(), Some(raw));
    assert!(outcome.parse_fallback);
}

#[test]
fn test_malformed_participant_lines_are_skipped() {
    let raw = "\
```overall
ok
```
```participants
just some prose without a separator
[broken bracket with no colon]
[]: empty name
Carol: cooked dinner
```";

    let outcome = parse_response(raw);

    assert_eq!(outcome.by_participant.len(), 1);
    assert_eq!(
        outcome.by_participant.get("Carol").map(String::as_str),
        Some("cooked dinner")
    );
}

#[test]
fn test_bracket_line_never_falls_through_to_colon_rule() {
    // Contains a colon, but the bracket pair is malformed: the whole line
    // must be dropped, not re-parsed as "]broken[" -> "value".
    let raw = "```participants\n]broken[: value\n```";

    let outcome = parse_response(raw);

    assert!(outcome.by_participant.is_empty());
}

#[test]
fn test_last_write_wins_for_repeated_participant() {
    let raw = "```participants\n[Alice]: first\n[Alice]: second\n```";

    let outcome = parse_response(raw);

    assert_eq!(
        outcome.by_participant.get("Alice").map(String::as_str),
        Some("second")
    );
}

#[test]
fn test_colon_line_splits_on_first_colon() {
    let raw = "```participants\nBob: said: many: things\n```";

    let outcome = parse_response(raw);

    assert_eq!(
        outcome.by_participant.get("Bob").map(String::as_str),
        Some("said: many: things")
    );
}

#[test]
fn test_format_round_trip_with_transcript() {
    // A response wrapping the assembler's own output must come back intact.
    let transcript = assemble(&conversation());
    let raw = format!("```overall\n{transcript}\n```\n```participants\n[@alice]: reviewed\n```");

    let outcome = parse_response(&raw);

    assert_eq!(outcome.overall.as_deref(), Some(transcript.as_str()));
    assert_eq!(
        outcome.by_participant.get("@alice").map(String::as_str),
        Some("reviewed")
    );
}
