//! Comment trivia carried through translation.
//!
//! Comments are not structural: the source tree carries them as leading or
//! trailing trivia on nodes, and the converter re-attaches them (best
//! effort) to the corresponding output nodes. The converter also creates
//! trivia of its own for constructs that translate approximately, using the
//! `BEGIN TODO`/`END TODO` marker pair so a human reviewer is alerted
//! without the batch failing.

use serde::{Deserialize, Serialize};

/// A single comment attached to a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentTrivia {
    pub text: String,
}

impl CommentTrivia {
    pub fn new(text: impl Into<String>) -> Self {
        CommentTrivia { text: text.into() }
    }

    /// Marker placed before the first statement of an approximate
    /// translation.
    pub fn begin_manual_review(reason: &str) -> Self {
        CommentTrivia::new(format!("BEGIN TODO : {reason}"))
    }

    /// Marker placed after the last statement of an approximate translation.
    pub fn end_manual_review(reason: &str) -> Self {
        CommentTrivia::new(format!("END TODO : {reason}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_review_markers_pair_up() {
        let reason = "Visual Basic does not support checked statements!";
        assert_eq!(
            CommentTrivia::begin_manual_review(reason).text,
            "BEGIN TODO : Visual Basic does not support checked statements!"
        );
        assert_eq!(
            CommentTrivia::end_manual_review(reason).text,
            "END TODO : Visual Basic does not support checked statements!"
        );
    }
}
