//! Built-in per-subject question providers.
//!
//! Math questions are generated arithmetic; reading and finance draw from
//! fixed banks. Every provider output satisfies the [`QuestionItem`]
//! contract (at least two options, correct index in range).

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::item::{QuestionError, QuestionItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Reading,
    Finance,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subject::Math => "math",
            Subject::Reading => "reading",
            Subject::Finance => "finance",
        };
        f.write_str(name)
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "math" => Ok(Subject::Math),
            "reading" => Ok(Subject::Reading),
            "finance" => Ok(Subject::Finance),
            other => Err(format!(
                "unknown subject '{other}' (expected math, reading, or finance)"
            )),
        }
    }
}

/// Get questions for a subject.
pub fn questions_for_subject<R: Rng + ?Sized>(
    subject: Subject,
    count: usize,
    rng: &mut R,
) -> Result<Vec<QuestionItem>, QuestionError> {
    let questions = match subject {
        Subject::Math => math_questions(count, rng),
        Subject::Reading => bank_questions(READING_BANK, count, rng),
        Subject::Finance => bank_questions(FINANCE_BANK, count, rng),
    }?;
    debug!("provided {} {subject} questions", questions.len());
    Ok(questions)
}

#[derive(Clone, Copy)]
enum Operation {
    Add,
    Sub,
    Mul,
}

const OPERATIONS: [Operation; 3] = [Operation::Add, Operation::Sub, Operation::Mul];
const CHOICES_PER_QUESTION: usize = 4;

/// Generate `count` arithmetic questions with distractor answers near the
/// correct one.
pub fn math_questions<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<QuestionItem>, QuestionError> {
    let mut questions = Vec::with_capacity(count);

    for _ in 0..count {
        let op = OPERATIONS[rng.gen_range(0..OPERATIONS.len())];
        let (lhs, rhs, answer, symbol) = match op {
            Operation::Add => {
                let a: i64 = rng.gen_range(1..=20);
                let b: i64 = rng.gen_range(1..=20);
                (a, b, a + b, '+')
            }
            Operation::Sub => {
                let a: i64 = rng.gen_range(5..=30);
                let b: i64 = rng.gen_range(1..=a);
                (a, b, a - b, '−')
            }
            Operation::Mul => {
                let a: i64 = rng.gen_range(1..=10);
                let b: i64 = rng.gen_range(1..=10);
                (a, b, a * b, '×')
            }
        };

        let mut answers = vec![answer];
        while answers.len() < CHOICES_PER_QUESTION {
            let wrong = answer + rng.gen_range(-5..=5);
            if wrong > 0 && !answers.contains(&wrong) {
                answers.push(wrong);
            }
        }
        answers.shuffle(rng);

        // Position of the real answer after shuffling; always present.
        let correct_index = answers.iter().position(|&a| a == answer).unwrap_or(0);
        let options = answers.iter().map(|a| a.to_string()).collect();

        questions.push(QuestionItem::new(
            format!("{lhs} {symbol} {rhs} = ?"),
            options,
            correct_index,
        )?);
    }

    Ok(questions)
}

type BankEntry = (&'static str, [&'static str; 4], usize);

fn bank_questions<R: Rng + ?Sized>(
    bank: &[BankEntry],
    count: usize,
    rng: &mut R,
) -> Result<Vec<QuestionItem>, QuestionError> {
    let mut entries: Vec<&BankEntry> = bank.iter().collect();
    entries.shuffle(rng);
    entries.truncate(count.min(bank.len()));

    entries
        .into_iter()
        .map(|(prompt, choices, correct)| {
            QuestionItem::new(*prompt, choices.iter().map(|c| c.to_string()).collect(), *correct)
        })
        .collect()
}

const READING_BANK: &[BankEntry] = &[
    ("What is a synonym for \"happy\"?", ["Sad", "Joyful", "Angry", "Tired"], 1),
    ("Which word rhymes with \"cat\"?", ["Dog", "Hat", "Run", "Jump"], 1),
    ("What is the opposite of \"big\"?", ["Large", "Small", "Huge", "Tall"], 1),
    ("How many syllables in \"butterfly\"?", ["1", "2", "3", "4"], 2),
    ("What letter does \"apple\" start with?", ["B", "A", "C", "D"], 1),
    ("Which word is a noun?", ["Run", "Happy", "Book", "Quickly"], 2),
    ("What is a synonym for \"big\"?", ["Tiny", "Large", "Small", "Short"], 1),
    ("Which word means the same as \"start\"?", ["End", "Begin", "Stop", "Finish"], 1),
    ("What rhymes with \"tree\"?", ["Free", "Car", "Dog", "Hat"], 0),
    ("Which is a verb?", ["Table", "Red", "Jump", "Book"], 2),
    ("What is the plural of \"child\"?", ["Childs", "Children", "Childes", "Childer"], 1),
    ("Which word has 2 syllables?", ["Cat", "Rainbow", "Dog", "Sun"], 1),
];

const FINANCE_BANK: &[BankEntry] = &[
    ("If you have $5 and earn $3 more, how much do you have?", ["$2", "$5", "$8", "$10"], 2),
    ("A toy costs $10. You have $15. How much change?", ["$5", "$10", "$15", "$25"], 0),
    ("Which coin is worth 25 cents?", ["Penny", "Nickel", "Dime", "Quarter"], 3),
    ("How many pennies make a dollar?", ["10", "25", "50", "100"], 3),
    ("What does \"save money\" mean?", ["Spend it all", "Keep it for later", "Lose it", "Give it away"], 1),
    ("If candy costs $2 each, how much for 3?", ["$3", "$5", "$6", "$8"], 2),
    ("A dime is worth how many cents?", ["1", "5", "10", "25"], 2),
    ("You earn $20 and spend $12. How much left?", ["$8", "$10", "$12", "$32"], 0),
    ("Which costs more: $5 or $3?", ["$3", "$5", "Same", "Cannot tell"], 1),
    ("A nickel is worth how many pennies?", ["1", "5", "10", "25"], 1),
    ("What is a \"budget\"?", ["Money you find", "Plan for spending", "Free money", "A game"], 1),
    ("If you save $2 per week for 4 weeks, how much total?", ["$4", "$6", "$8", "$10"], 2),
];
