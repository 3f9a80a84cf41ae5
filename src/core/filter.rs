use crate::domain::model::ParseResult;

/// Part-of-speech tags dropped from the reply, exactly as the parser emits them:
/// case-marking particle, adverbial particle, quotative particle,
/// sentence-final particle, copula.
pub const EXCLUDED_POS: [&str; 5] = ["格助詞", "連用助詞", "引用助詞", "終助詞", "判定詞"];

pub const DELIMITER: &str = "..";

#[derive(Debug, Clone, Copy, Default)]
pub struct WordFilter;

impl WordFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn is_excluded(&self, pos: &str) -> bool {
        EXCLUDED_POS.contains(&pos)
    }

    /// Kana readings of all non-excluded tokens, in order, joined by `..`.
    pub fn filter(&self, parsed: &ParseResult) -> String {
        parsed
            .tokens()
            .filter(|token| !self.is_excluded(&token.pos))
            .map(|token| token.kana.as_str())
            .collect::<Vec<_>>()
            .join(DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Token, TokenGroup};

    #[test]
    fn test_filter_drops_case_particle() {
        let parsed = ParseResult::from_tokens(vec![
            Token::new("ネコ", "名詞"),
            Token::new("ガ", "格助詞"),
            Token::new("ナク", "動詞"),
        ]);

        assert_eq!(WordFilter::new().filter(&parsed), "ネコ..ナク");
    }

    #[test]
    fn test_filter_all_excluded_is_empty() {
        let parsed = ParseResult::from_tokens(
            EXCLUDED_POS
                .iter()
                .map(|pos| Token::new("ア", *pos))
                .collect(),
        );

        assert_eq!(WordFilter::new().filter(&parsed), "");
    }

    #[test]
    fn test_filter_empty_result() {
        assert_eq!(WordFilter::new().filter(&ParseResult::default()), "");

        let empty_groups = ParseResult {
            result: vec![TokenGroup::default(), TokenGroup::default()],
            ..Default::default()
        };
        assert_eq!(WordFilter::new().filter(&empty_groups), "");
    }

    #[test]
    fn test_filter_keeps_order_across_groups() {
        let parsed = ParseResult {
            result: vec![
                TokenGroup {
                    tokens: vec![Token::new("キョウ", "名詞"), Token::new("ハ", "連用助詞")],
                },
                TokenGroup {
                    tokens: vec![Token::new("イイ", "形容詞語幹"), Token::new("ネ", "終助詞")],
                },
                TokenGroup {
                    tokens: vec![Token::new("テンキ", "名詞"), Token::new("ダ", "判定詞")],
                },
            ],
            ..Default::default()
        };

        assert_eq!(WordFilter::new().filter(&parsed), "キョウ..イイ..テンキ");
    }

    #[test]
    fn test_filter_single_survivor_has_no_delimiter() {
        let parsed = ParseResult::from_tokens(vec![
            Token::new("ト", "引用助詞"),
            Token::new("イウ", "動詞語幹"),
        ]);

        assert_eq!(WordFilter::new().filter(&parsed), "イウ");
    }

    #[test]
    fn test_filter_matches_tags_exactly() {
        // Only exact tag values are excluded, not tags that merely contain them
        let parsed = ParseResult::from_tokens(vec![
            Token::new("ガ", "格助詞 "),
            Token::new("ノ", "助詞"),
            Token::new("デ", "格助詞"),
        ]);

        assert_eq!(WordFilter::new().filter(&parsed), "ガ..ノ");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let parsed = ParseResult::from_tokens(vec![
            Token::new("ネコ", "名詞"),
            Token::new("ガ", "格助詞"),
            Token::new("ナク", "動詞"),
        ]);
        let filter = WordFilter::new();

        assert_eq!(filter.filter(&parsed), filter.filter(&parsed));
    }

    #[test]
    fn test_filter_output_never_contains_excluded_readings() {
        let tokens = vec![
            Token::new("ワタシ", "名詞"),
            Token::new("ハ", "連用助詞"),
            Token::new("ガクセイ", "名詞"),
            Token::new("デス", "判定詞"),
            Token::new("ヨ", "終助詞"),
        ];
        let parsed = ParseResult::from_tokens(tokens.clone());
        let output = WordFilter::new().filter(&parsed);

        let pieces: Vec<&str> = output.split(DELIMITER).collect();
        let expected: Vec<&str> = tokens
            .iter()
            .filter(|t| !EXCLUDED_POS.contains(&t.pos.as_str()))
            .map(|t| t.kana.as_str())
            .collect();
        assert_eq!(pieces, expected);
        assert!(!output.starts_with(DELIMITER));
        assert!(!output.ends_with(DELIMITER));
    }
}
