//! Token splitting
//!
//! Decides whether one scanned token carries one citation or several
//! concatenated with no intervening text, and splits it accordingly.

use crate::utils::error::{CiteError, CiteResult};

/// The two-character sequence separating concatenated citations.
const GROUP_DELIMITER: &str = "}{";

/// Split one raw token into its single-citation pieces, in written order.
///
/// Adjacent citations abut as `}{` and the delimiter carries no citation
/// content, so the split is a plain substring split: the first piece keeps
/// its leading `{`, the last keeps its trailing `}`, middle pieces are bare.
/// The parser treats braces as optional, so the pieces parse as-is.
///
/// Known limitation: a field value that itself contains the literal `}{`
/// text is mis-split. The split is purely syntactic and has no awareness of
/// the field grammar; such pieces surface later as parse failures.
pub fn split_token(token: &str) -> CiteResult<Vec<&str>> {
    let pieces: Vec<&str> = token.split(GROUP_DELIMITER).collect();
    for piece in &pieces {
        if piece.is_empty() || *piece == "{" || *piece == "}" {
            return Err(CiteError::malformed_token(token));
        }
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_single_piece() {
        let pieces = split_token("{a|-|||zu:1:AAA}").unwrap();
        assert_eq!(pieces, vec!["{a|-|||zu:1:AAA}"]);
    }

    #[test]
    fn test_split_preserves_order() {
        let pieces = split_token("{a|-|||zu:1:AAA}{b|-|||zu:1:BBB}{c|-|||zu:1:CCC}").unwrap();
        assert_eq!(
            pieces,
            vec!["{a|-|||zu:1:AAA", "b|-|||zu:1:BBB", "c|-|||zu:1:CCC}"]
        );
    }

    #[test]
    fn test_split_count_matches_concatenation() {
        let single = "{|-|||zu:1:KEY0}";
        for n in 1..=5 {
            let token = vec![single; n].join("");
            assert_eq!(split_token(&token).unwrap().len(), n);
        }
    }

    #[test]
    fn test_split_rejects_empty_piece() {
        assert!(split_token("{}{a|-|||zu:1:AAA}").is_err());
        assert!(split_token("{a|-|||zu:1:AAA}{}").is_err());
    }
}
