use chrono::Utc;
use indexmap::IndexMap;

use manabi_model::id::DocumentId;
use manabi_model::quiz::Quiz;
use manabi_model::result::QuizResult;

use crate::quiz_result::error::SubmissionError;

/// Scores a completed answer sheet against a quiz.
///
/// `answers[i]` is the option the taker selected for question `i`. Any
/// missing or unset entry rejects the submission. A correct pick is worth
/// the question's marks, anything else zero; the percentage guards a
/// zero-mark quiz instead of dividing by it.
pub fn score_submission(
    course_id: DocumentId,
    quiz: &Quiz,
    answers: &[Option<usize>],
) -> Result<QuizResult, SubmissionError> {
    let mut sheet = IndexMap::with_capacity(quiz.questions.len());
    for (index, _) in quiz.questions.iter().enumerate() {
        let selected = answers
            .get(index)
            .copied()
            .flatten()
            .ok_or(SubmissionError::Unanswered(index))?;
        sheet.insert(index, selected);
    }

    let score = quiz
        .questions
        .iter()
        .zip(sheet.values())
        .filter(|(question, selected)| question.is_correct(**selected))
        .map(|(question, _)| question.marks)
        .sum::<u32>();

    let total_marks = quiz.total_marks;
    let percentage = if total_marks == 0 {
        0.0
    } else {
        f64::from(score) * 100.0 / f64::from(total_marks)
    };

    Ok(QuizResult {
        course_id,
        quiz_id: quiz.id,
        score,
        total_marks,
        percentage,
        answers: sheet,
        completed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use manabi_model::quiz::Question;

    fn quiz(questions: Vec<Question>) -> Quiz {
        let total_marks = questions.iter().map(|question| question.marks).sum();
        Quiz {
            id: DocumentId::from_millis(7),
            title: "Borrow checker".to_owned(),
            description: String::new(),
            questions,
            total_marks,
            passing_score: None,
            created_at: Utc::now(),
        }
    }

    fn question(correct_answer: usize, marks: u32) -> Question {
        Question {
            question: "?".to_owned(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer,
            marks,
        }
    }

    #[test]
    fn full_marks_for_all_correct() {
        let quiz = quiz(vec![question(1, 10), question(0, 5)]);
        let result = score_submission(DocumentId::from_millis(1), &quiz, &[Some(1), Some(0)]).unwrap();
        assert_eq!(result.score, 15);
        assert_eq!(result.total_marks, 15);
        assert!((result.percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrong_answers_earn_nothing() {
        let quiz = quiz(vec![question(1, 10), question(0, 5)]);
        let result = score_submission(DocumentId::from_millis(1), &quiz, &[Some(2), Some(0)]).unwrap();
        assert_eq!(result.score, 5);
        assert!((result.percentage - 100.0 * 5.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn unanswered_question_rejects_the_sheet() {
        let quiz = quiz(vec![question(1, 10), question(0, 5)]);
        let err = score_submission(DocumentId::from_millis(1), &quiz, &[Some(1), None]).unwrap_err();
        assert!(matches!(err, SubmissionError::Unanswered(1)));

        let err = score_submission(DocumentId::from_millis(1), &quiz, &[Some(1)]).unwrap_err();
        assert!(matches!(err, SubmissionError::Unanswered(1)));
    }

    #[test]
    fn zero_mark_quiz_scores_zero_percent() {
        let quiz = quiz(vec![question(0, 0)]);
        let result = score_submission(DocumentId::from_millis(1), &quiz, &[Some(0)]).unwrap();
        assert_eq!(result.score, 0);
        assert!((result.percentage - 0.0).abs() < f64::EPSILON);
    }
}
