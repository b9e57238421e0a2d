//! Row shapes returned by the PostgreSQL queries.

use crate::domain::{Choice, Question};

/// One row of `questions LEFT JOIN choices`.
///
/// The choice columns are `NULL` for a question without choices.
pub type QuestionChoiceRow = (i64, String, Option<i64>, Option<String>, Option<bool>);

/// One row of the `choices` table: `(id, choice_text, is_correct, question_id)`.
pub type ChoiceRow = (i64, String, bool, i64);

/// Folds joined rows into questions.
///
/// Rows must be ordered by question id so that all rows of one question
/// are adjacent.
#[must_use]
pub fn fold_question_rows(rows: Vec<QuestionChoiceRow>) -> Vec<Question> {
    let mut questions: Vec<Question> = Vec::new();
    for (question_id, question_text, choice_id, choice_text, is_correct) in rows {
        if questions.last().map(|q| q.id) != Some(question_id) {
            questions.push(Question {
                id: question_id,
                question_text,
                choices: Vec::new(),
            });
        }
        if let (Some(id), Some(choice_text), Some(is_correct), Some(question)) =
            (choice_id, choice_text, is_correct, questions.last_mut())
        {
            question.choices.push(Choice {
                id,
                choice_text,
                is_correct,
                question_id,
            });
        }
    }
    questions
}

/// Converts a `choices` row into a [`Choice`].
#[must_use]
pub fn choice_from_row((id, choice_text, is_correct, question_id): ChoiceRow) -> Choice {
    Choice {
        id,
        choice_text,
        is_correct,
        question_id,
    }
}

/// Escapes `LIKE` wildcards so the pattern matches `search` literally.
#[must_use]
pub fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for ch in search.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(q: i64, text: &str, c: Option<(i64, &str, bool)>) -> QuestionChoiceRow {
        match c {
            Some((id, ct, ok)) => (q, text.to_string(), Some(id), Some(ct.to_string()), Some(ok)),
            None => (q, text.to_string(), None, None, None),
        }
    }

    #[test]
    fn fold_groups_choices_under_question() {
        let rows = vec![
            row(1, "2+2=?", Some((1, "4", true))),
            row(1, "2+2=?", Some((2, "5", false))),
            row(2, "empty", None),
            row(3, "3+3=?", Some((3, "6", true))),
        ];
        let questions = fold_question_rows(rows);
        assert_eq!(questions.len(), 3);

        let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, [1, 2, 3]);

        let counts: Vec<usize> = questions.iter().map(|q| q.choices.len()).collect();
        assert_eq!(counts, [2, 0, 1]);

        assert!(questions.iter().all(|q| q.choices.iter().all(|c| c.question_id == q.id)));
    }

    #[test]
    fn fold_of_nothing_is_empty() {
        assert!(fold_question_rows(Vec::new()).is_empty());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("2+2"), "%2+2%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
