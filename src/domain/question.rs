//! Question and choice entities as they are stored.

/// A stored quiz question together with its choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Storage-generated primary key.
    pub id: i64,
    /// Prompt text, unique across all questions.
    pub question_text: String,
    /// Choices owned by this question, in insertion order.
    pub choices: Vec<Choice>,
}

/// A stored answer candidate belonging to exactly one [`Question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Storage-generated primary key.
    pub id: i64,
    /// Answer text.
    pub choice_text: String,
    /// Whether this choice is a correct answer.
    pub is_correct: bool,
    /// Owning question.
    pub question_id: i64,
}

/// A question that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// Prompt text.
    pub question_text: String,
    /// Choices to insert alongside the question.
    pub choices: Vec<NewChoice>,
}

/// A choice that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    /// Answer text.
    pub choice_text: String,
    /// Whether this choice is a correct answer.
    pub is_correct: bool,
}

impl NewQuestion {
    /// Creates a new unsaved question.
    #[must_use]
    pub fn new(question_text: impl Into<String>, choices: Vec<NewChoice>) -> Self {
        Self {
            question_text: question_text.into(),
            choices,
        }
    }
}

impl NewChoice {
    /// Creates a new unsaved choice.
    #[must_use]
    pub fn new(choice_text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            choice_text: choice_text.into(),
            is_correct,
        }
    }
}

/// Returns `false` for text PostgreSQL cannot hold in a `TEXT` column.
///
/// Such text never matches a stored row either.
#[must_use]
pub fn is_storable_text(text: &str) -> bool {
    !text.contains('\0')
}

impl Question {
    /// Returns the first choice flagged correct, ordered by id.
    ///
    /// Several choices may carry the flag; the lowest id wins.
    #[must_use]
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .min_by_key(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(id: i64, is_correct: bool) -> Choice {
        Choice {
            id,
            choice_text: format!("choice {id}"),
            is_correct,
            question_id: 1,
        }
    }

    #[test]
    fn correct_choice_picks_lowest_id() {
        let question = Question {
            id: 1,
            question_text: "2+2=?".to_string(),
            choices: vec![choice(7, true), choice(3, false), choice(5, true)],
        };
        assert_eq!(question.correct_choice().map(|c| c.id), Some(5));
    }

    #[test]
    fn correct_choice_absent_without_flag() {
        let question = Question {
            id: 1,
            question_text: "2+2=?".to_string(),
            choices: vec![choice(1, false), choice(2, false)],
        };
        assert!(question.correct_choice().is_none());
    }

    #[test]
    fn nul_text_is_not_storable() {
        assert!(is_storable_text("2+2=?"));
        assert!(is_storable_text(""));
        assert!(!is_storable_text("a\0b"));
    }

    #[test]
    fn new_question_keeps_choice_order() {
        let q = NewQuestion::new(
            "2+2=?",
            vec![NewChoice::new("4", true), NewChoice::new("5", false)],
        );
        let texts: Vec<&str> = q.choices.iter().map(|c| c.choice_text.as_str()).collect();
        assert_eq!(texts, ["4", "5"]);
    }
}
