//! Merge aligned tokens with diarization segments into speaker turns.

use crate::types::{AlignedToken, RecognizedToken, SpeakerSegment, SpeakerTurn};

/// Speaker label for tokens outside every diarization segment.
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// Group consecutive tokens of the same speaker into turns.
///
/// A turn ends exactly where the owning speaker changes, so a speaker that
/// talks twice with someone else in between gets two turns.
pub fn merge(tokens: &[AlignedToken], segments: &[SpeakerSegment]) -> Vec<SpeakerTurn> {
    tokens.iter().fold(Vec::new(), |mut turns: Vec<SpeakerTurn>, token| {
        let speaker = speaker_of(&token.token, segments);

        match turns.last_mut() {
            Some(turn) if turn.speaker == speaker => turn.extend(token),
            _ => turns.push(SpeakerTurn::open(speaker, token)),
        }

        turns
    })
}

/// Label of the segment owning a token, or [`UNKNOWN_SPEAKER`].
pub fn speaker_of<'a>(token: &RecognizedToken, segments: &'a [SpeakerSegment]) -> &'a str {
    owning_segment(token, segments).map_or(UNKNOWN_SPEAKER, |s| s.speaker.as_str())
}

/// First segment containing the token's midpoint, else its start time.
///
/// Segments are scanned in the given order without sorting, so overlapping
/// segments resolve to whichever comes first.
fn owning_segment<'a>(
    token: &RecognizedToken,
    segments: &'a [SpeakerSegment],
) -> Option<&'a SpeakerSegment> {
    let midpoint = token.midpoint();

    segments
        .iter()
        .find(|s| s.contains(midpoint))
        .or_else(|| segments.iter().find(|s| s.contains(token.start_time)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, start: f64, end: f64) -> AlignedToken {
        AlignedToken::new(RecognizedToken::new(text, start, end), format!("{text} "))
    }

    #[test]
    fn splits_turns_at_speaker_changes() {
        let tokens = vec![
            token("a1", 0.0, 0.5),
            token("a2", 0.5, 1.0),
            token("b1", 1.0, 1.5),
            token("a3", 1.5, 2.0),
        ];
        let segments = vec![
            SpeakerSegment::new("A", 0.0, 1.0),
            SpeakerSegment::new("B", 1.0, 1.5),
            SpeakerSegment::new("A", 1.5, 2.0),
        ];

        let turns = merge(&tokens, &segments);

        match &turns[..] {
            [first, second, third] => {
                assert_eq!(first.speaker, "A");
                assert_eq!(first.text, "a1 a2 ");
                assert_eq!((first.start, first.end), (0.0, 1.0));

                assert_eq!(second.speaker, "B");
                assert_eq!(second.text, "b1 ");
                assert_eq!((second.start, second.end), (1.0, 1.5));

                assert_eq!(third.speaker, "A");
                assert_eq!(third.text, "a3 ");
                assert_eq!((third.start, third.end), (1.5, 2.0));
            }
            _ => panic!("expected 3 turns, got {}: {:?}", turns.len(), turns),
        }
    }

    #[test]
    fn falls_back_to_start_time_when_midpoint_misses() {
        // midpoint 1.5 is outside X's segment, start 0.9 is inside
        let tokens = vec![token("late", 0.9, 2.1)];
        let segments = vec![SpeakerSegment::new("X", 0.0, 1.0)];

        let turns = merge(&tokens, &segments);

        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].speaker, "X");
    }

    #[test]
    fn midpoint_takes_priority_over_start_time() {
        let tokens = vec![token("word", 0.8, 1.6)];
        let segments = vec![
            SpeakerSegment::new("early", 0.0, 1.0),
            SpeakerSegment::new("late", 1.1, 2.0),
        ];

        assert_eq!(merge(&tokens, &segments)[0].speaker, "late");
    }

    #[test]
    fn first_segment_wins_on_overlap() {
        let tokens = vec![token("both", 1.0, 1.2)];
        let segments = vec![
            SpeakerSegment::new("second", 1.0, 2.0),
            SpeakerSegment::new("first", 0.0, 1.5),
        ];

        assert_eq!(merge(&tokens, &segments)[0].speaker, "second");
    }

    #[test]
    fn unmatched_token_is_unknown() {
        let tokens = vec![
            token("in", 0.0, 0.5),
            token("out", 5.0, 5.5),
            token("in", 0.6, 0.9),
        ];
        let segments = vec![SpeakerSegment::new("A", 0.0, 1.0)];

        let speakers: Vec<_> = merge(&tokens, &segments)
            .into_iter()
            .map(|t| t.speaker)
            .collect();

        assert_eq!(speakers, ["A", UNKNOWN_SPEAKER, "A"]);
    }

    #[test]
    fn handles_empty_tokens() {
        let segments = vec![SpeakerSegment::new("A", 0.0, 1.0)];
        assert!(merge(&[], &segments).is_empty());
    }

    #[test]
    fn no_segments_yields_single_unknown_turn() {
        let tokens = vec![token("one", 0.0, 0.4), token("two", 0.5, 0.9)];

        let turns = merge(&tokens, &[]);

        match &turns[..] {
            [single] => {
                assert_eq!(single.speaker, UNKNOWN_SPEAKER);
                assert_eq!(single.text, "one two ");
                assert_eq!((single.start, single.end), (0.0, 0.9));
            }
            _ => panic!("expected 1 turn, got {}", turns.len()),
        }
    }
}
