use crate::entities::prelude::QuizModel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// A quiz question as presented to the visitor. The correct answer is not
/// echoed back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: i32,
    pub question: String,
    pub options: Vec<String>,
}

impl From<QuizModel> for QuizQuestion {
    fn from(quiz: QuizModel) -> Self {
        QuizQuestion {
            id: quiz.id,
            question: quiz.question,
            options: quiz
                .options
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }
}

/// Submitted answers keyed by quiz id.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuizSubmission {
    #[serde(default)]
    pub answers: HashMap<i32, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: i32,
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
    pub results: Vec<QuizResult>,
}

/// Score a submission against the presented questions.
///
/// Answers are compared after trimming whitespace, case-sensitively.
/// Unanswered questions count as incorrect. Nothing is persisted.
pub fn score_submission(quizzes: &[QuizModel], answers: &HashMap<i32, String>) -> QuizOutcome {
    let mut score = 0;
    let mut results = Vec::with_capacity(quizzes.len());
    for quiz in quizzes {
        let user_answer = answers.get(&quiz.id).cloned();
        let is_correct = user_answer
            .as_deref()
            .map(|a| a.trim() == quiz.correct_answer.trim())
            .unwrap_or(false);
        if is_correct {
            score += 1;
        }
        results.push(QuizResult {
            quiz_id: quiz.id,
            question: quiz.question.clone(),
            user_answer,
            correct_answer: quiz.correct_answer.clone(),
            is_correct,
        });
    }
    QuizOutcome {
        score,
        total: quizzes.len() as u32,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(id: i32, question: &str, correct: &str) -> QuizModel {
        QuizModel {
            id,
            question: question.to_string(),
            options: "Lion\nTiger\nBear".to_string(),
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn trimmed_match_scores_correct() {
        let quizzes = vec![quiz(1, "King of the savannah?", "Lion")];
        let answers = HashMap::from([(1, "  Lion  ".to_string())]);
        let outcome = score_submission(&quizzes, &answers);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total, 1);
        assert!(outcome.results[0].is_correct);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let quizzes = vec![quiz(1, "King of the savannah?", "Lion")];
        let answers = HashMap::from([(1, "lion".to_string())]);
        let outcome = score_submission(&quizzes, &answers);
        assert_eq!(outcome.score, 0);
        assert!(!outcome.results[0].is_correct);
    }

    #[test]
    fn unanswered_questions_score_incorrect() {
        let quizzes = vec![
            quiz(1, "King of the savannah?", "Lion"),
            quiz(2, "Largest land animal?", "Elephant"),
        ];
        let answers = HashMap::from([(1, "Lion".to_string())]);
        let outcome = score_submission(&quizzes, &answers);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total, 2);
        assert!(outcome.results[1].user_answer.is_none());
        assert!(!outcome.results[1].is_correct);
    }

    #[test]
    fn options_split_on_newlines() {
        let q = QuizQuestion::from(quiz(1, "q", "Lion"));
        assert_eq!(q.options, vec!["Lion", "Tiger", "Bear"]);
    }
}
