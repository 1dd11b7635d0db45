//! Most positive / most negative article selection.

use newsmood_core::Article;

use crate::scorer::Analyzer;
use crate::types::Comment;

/// Default number of comments per direction.
pub const DEFAULT_COMMENT_COUNT: usize = 3;

const DEFAULT_SOURCE: &str = "News";
const DEFAULT_USERNAME: &str = "Editor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

/// The `count` articles with the most extreme raw scores in `direction`.
///
/// Equal scores keep their input order.
#[must_use]
pub fn notable(
    analyzer: &Analyzer,
    articles: &[Article],
    direction: Direction,
    count: usize,
) -> Vec<Comment> {
    let mut scored: Vec<Comment> = articles
        .iter()
        .map(|article| Comment {
            text: non_empty_or(&article.description, &article.title).to_owned(),
            score: analyzer.score(&article.text()),
            source: non_empty_or(&article.source.name, DEFAULT_SOURCE).to_owned(),
            username: non_empty_or(&article.author, DEFAULT_USERNAME).to_owned(),
        })
        .collect();

    match direction {
        Direction::Positive => scored.sort_by(|a, b| b.score.total_cmp(&a.score)),
        Direction::Negative => scored.sort_by(|a, b| a.score.total_cmp(&b.score)),
    }
    scored.truncate(count);
    scored
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use newsmood_core::ArticleSource;

    use super::*;

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            author: "Reporter".to_string(),
            source: ArticleSource {
                name: "Daily".to_string(),
            },
            ..Article::default()
        }
    }

    fn corpus() -> Vec<Article> {
        vec![
            article("Alpha", "a good day"),
            article("Bravo", "a terrible awful day"),
            article("Charlie", "a day"),
            article("Delta", "an amazing wonderful day"),
            article("Echo", "a bad day"),
        ]
    }

    #[test]
    fn empty_input_yields_nothing() {
        let a = Analyzer::builtin();
        assert!(notable(&a, &[], Direction::Positive, 3).is_empty());
        assert!(notable(&a, &[], Direction::Negative, 3).is_empty());
    }

    #[test]
    fn positive_direction_sorts_descending() {
        let comments = notable(&Analyzer::builtin(), &corpus(), Direction::Positive, 3);
        let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["an amazing wonderful day", "a good day", "a day"]);
        assert_eq!(comments[0].score, 8.0);
    }

    #[test]
    fn negative_direction_sorts_ascending() {
        let comments = notable(&Analyzer::builtin(), &corpus(), Direction::Negative, 2);
        let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a terrible awful day", "a bad day"]);
        assert_eq!(comments[0].score, -6.0);
    }

    #[test]
    fn count_larger_than_input_returns_everything() {
        let comments = notable(&Analyzer::builtin(), &corpus(), Direction::Positive, 50);
        assert_eq!(comments.len(), 5);
    }

    #[test]
    fn falls_back_to_title_and_default_attribution() {
        let bare = Article {
            title: "Great launch".to_string(),
            ..Article::default()
        };
        let comments = notable(&Analyzer::builtin(), &[bare], Direction::Positive, 3);
        assert_eq!(
            comments,
            vec![Comment {
                text: "Great launch".to_string(),
                score: 3.0,
                source: "News".to_string(),
                username: "Editor".to_string(),
            }]
        );
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let articles = vec![
            article("First", "great news"),
            article("Second", "great times"),
        ];
        for direction in [Direction::Positive, Direction::Negative] {
            let comments = notable(&Analyzer::builtin(), &articles, direction, 2);
            let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
            assert_eq!(texts, vec!["great news", "great times"]);
            assert_eq!(comments[0].username, "Reporter");
            assert_eq!(comments[0].source, "Daily");
        }
    }
}
