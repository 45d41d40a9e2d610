//! Database operations for questions.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    question::{NewQuestion, Question, QuestionId},
};

/// Create a question and return it with its generated ID.
///
/// # Errors
/// Returns [Error::InvalidCategory] if `new_question.category` does not
/// refer to an existing category.
pub fn create_question(
    new_question: NewQuestion,
    connection: &Connection,
) -> Result<Question, Error> {
    connection.execute(
        "INSERT INTO question (question, answer, category, difficulty) \
        VALUES (?1, ?2, ?3, ?4);",
        (
            &new_question.question,
            &new_question.answer,
            new_question.category,
            new_question.difficulty,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Question {
        id,
        question: new_question.question,
        answer: new_question.answer,
        category: new_question.category,
        difficulty: new_question.difficulty,
    })
}

/// Retrieve the whole question bank.
// Sort by ID so the store order, and therefore page boundaries, stay stable
// across calls.
pub fn get_all_questions(connection: &Connection) -> Result<Vec<Question>, Error> {
    connection
        .prepare(
            "SELECT id, question, answer, category, difficulty FROM question ORDER BY id ASC;",
        )?
        .query_map([], map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Delete a question by ID. Returns an error if the question doesn't exist.
pub fn delete_question(question_id: QuestionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM question WHERE id = ?1", [question_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingQuestion(question_id));
    }

    Ok(())
}

/// Initialize the question table and indexes.
pub fn create_question_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS question (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL REFERENCES category(id),
            difficulty INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_question_category ON question(category);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Question, rusqlite::Error> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}
