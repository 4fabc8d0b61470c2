use emoji_graph::{ReviewRecord, TokenParser};

#[cfg(test)]
mod token_parser_tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let tokens = TokenParser::new().parse(None);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_empty_field() {
        let tokens = TokenParser::new().parse(Some(""));
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_single_spaces() {
        let tokens = TokenParser::new().parse(Some(":+1: :ok:"));
        assert_eq!(tokens, vec![":+1:", ":ok:"]);
    }

    #[test]
    fn test_multiple_spaces_tabs_and_line_breaks() {
        let tokens = TokenParser::new().parse(Some("  :fire:\t\t:eyes:\n:fire:  \r\n"));
        assert_eq!(tokens, vec![":fire:", ":eyes:", ":fire:"]);
    }

    #[test]
    fn test_tokens_are_not_normalized() {
        let tokens = TokenParser::new().parse(Some(":Smile: :smile: 😀"));
        assert_eq!(tokens, vec![":Smile:", ":smile:", "😀"]);
    }

    #[test]
    fn test_parse_records_preserves_record_order() {
        let records = vec![
            ReviewRecord::with_emojis(Some(":b: :a:")),
            ReviewRecord::with_emojis(None),
            ReviewRecord::with_emojis(Some(":c:")),
        ];

        let token_lists = TokenParser::new().parse_records(&records);

        assert_eq!(token_lists.len(), 3);
        assert_eq!(token_lists[0], vec![":b:", ":a:"]);
        assert!(token_lists[1].is_empty());
        assert_eq!(token_lists[2], vec![":c:"]);
    }
}
