use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use trivia_api::{NewQuestion, create_category, create_question, initialize_db};

/// A utility for creating a seeded database for the trivia API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

const QUESTIONS: [(&str, &str, i64, i64); 19] = [
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    (
        "What boxer's original name is Cassius Clay?",
        "Muhammad Ali",
        4,
        1,
    ),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    ),
    (
        "Whose 1996 labor of love, about the premature death of his wife, took 20 years to make?",
        "Edward Scissorhands",
        5,
        3,
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        6,
        3,
    ),
    (
        "Who invented Peanut Butter?",
        "George Washington Carver",
        4,
        2,
    ),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (
        "Which Dutch graphic artist-initials M C was a creator of optical illusions?",
        "Escher",
        2,
        1,
    ),
    (
        "La Giaconda is better known as what?",
        "Mona Lisa",
        2,
        3,
    ),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    (
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    (
        "What is the heaviest organ in the human body?",
        "The Liver",
        1,
        4,
    ),
    (
        "Who discovered penicillin?",
        "Alexander Fleming",
        1,
        3,
    ),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
    (
        "Which dung beetle was worshipped by the ancient Egyptians?",
        "Scarab",
        4,
        4,
    ),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Seeding categories...");

    for name in CATEGORIES {
        create_category(name, &conn)?;
    }

    println!("Seeding questions...");

    for (question, answer, category, difficulty) in QUESTIONS {
        create_question(
            NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
