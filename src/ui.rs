// UI layer: the interactive console shell built on `dialoguer` prompts.
// Rendering and input collection happen here; scoring rules come from
// `session` and the pure parse helpers at the bottom of this module, so the
// decision logic stays testable without a live console.

use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::Input;

use crate::catalog::QuizCatalog;
use crate::session::{QuizSession, SessionReport, Verdict};

const RULE_WIDTH: usize = 50;

/// Main interactive loop. Receives the loaded catalog and runs quiz after
/// quiz until the player exits the menu or declines to continue.
pub fn main_menu(mut catalog: QuizCatalog) -> Result<()> {
    banner("QUIZMASTER TERMINAL GAME");

    loop {
        let Some(index) = select_category(&catalog)? else {
            break;
        };
        let Some(session) = catalog.session_mut(index) else {
            break;
        };
        run_quiz(session)?;
        show_result(&session.report());

        let answer: String = Input::new()
            .with_prompt("Take another quiz? (y/n)")
            .interact_text()?;
        if !is_affirmative(&answer) {
            break;
        }
    }

    println!("\nThanks for playing! Goodbye");
    Ok(())
}

/// Show the category selection menu and return the 0-based index of the
/// chosen category, or `None` when the player exits. An empty catalog
/// notifies the operator and returns `None` without prompting.
pub fn select_category(catalog: &QuizCatalog) -> Result<Option<usize>> {
    if catalog.is_empty() {
        println!(
            "No quizzes found! Add JSON files to {}",
            catalog.quiz_dir().display()
        );
        return Ok(None);
    }

    println!("\nAvailable Quiz Categories:");
    for (i, session) in catalog.sessions().iter().enumerate() {
        println!("  {}. {}", i + 1, session.category());
    }

    loop {
        println!();
        let raw: String = Input::new()
            .with_prompt("Select category (number) or 0 to exit")
            .interact_text()?;
        match parse_menu_choice(&raw, catalog.len()) {
            Ok(MenuChoice::Exit) => return Ok(None),
            Ok(MenuChoice::Category(index)) => return Ok(Some(index)),
            Err(message) => println!("{message}"),
        }
    }
}

/// Run one full playthrough of a session, returning the final score.
pub fn run_quiz(session: &mut QuizSession) -> Result<u32> {
    session.reset();
    banner(&format!("Starting {} Quiz!", session.category()));
    println!();

    for index in 0..session.question_count() {
        let question = &session.questions()[index];
        println!("Question {}: {}", index + 1, question.text);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
        let option_count = question.options.len();

        let selected = prompt_answer(option_count)?;
        match session.submit(index, selected) {
            Verdict::Correct => println!("{}", "✓ Correct!".green()),
            Verdict::Wrong { correct_answer } => println!(
                "{}",
                format!("✗ Wrong! Correct answer: {correct_answer}").red()
            ),
        }
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    Ok(session.score())
}

/// Print the end-of-session report.
pub fn show_result(report: &SessionReport) {
    banner("QUIZ RESULTS");
    println!("Category:    {}", report.category);
    println!("Score:       {}/{}", report.score, report.total);
    println!("Percentage:  {:.1}%", report.percentage());
    println!("Feedback:    {}", report.feedback());
    println!("{}\n", "=".repeat(RULE_WIDTH));
}

/// Prompt until the player enters a valid 1-based option number, returning
/// the 0-based index. The accepted range follows the question's actual
/// option count.
fn prompt_answer(option_count: usize) -> Result<usize> {
    loop {
        println!();
        let raw: String = Input::new()
            .with_prompt(format!("Your answer (1-{option_count})"))
            .interact_text()?;
        match parse_answer(&raw, option_count) {
            Ok(index) => return Ok(index),
            Err(message) => println!("{message}"),
        }
    }
}

fn banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}");
    println!("{title:^width$}", width = RULE_WIDTH);
    println!("{rule}");
}

/// Player's pick from the category menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Category(usize),
}

/// Interpret raw menu input. `"0"` always exits, ahead of any range check;
/// otherwise the value must be a 1-based index into the category list.
pub fn parse_menu_choice(raw: &str, category_count: usize) -> Result<MenuChoice, String> {
    let trimmed = raw.trim();
    if trimmed == "0" {
        return Ok(MenuChoice::Exit);
    }
    let choice: usize = trimmed
        .parse()
        .map_err(|_| "Please enter a number".to_string())?;
    if (1..=category_count).contains(&choice) {
        Ok(MenuChoice::Category(choice - 1))
    } else {
        Err(format!(
            "Invalid choice! Enter 1-{category_count} or 0 to exit"
        ))
    }
}

/// Interpret raw answer input as a 0-based option index. The upper bound is
/// the live option count of the current question, not a fixed constant.
pub fn parse_answer(raw: &str, option_count: usize) -> Result<usize, String> {
    let choice: usize = raw
        .trim()
        .parse()
        .map_err(|_| "Please enter a number".to_string())?;
    if (1..=option_count).contains(&choice) {
        Ok(choice - 1)
    } else {
        Err(format!("Invalid choice! Enter 1-{option_count}"))
    }
}

/// The continuation prompt accepts any "y"-like token, case-insensitive;
/// everything else ends the loop.
pub fn is_affirmative(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_zero_always_exits() {
        assert_eq!(parse_menu_choice("0", 3), Ok(MenuChoice::Exit));
        // Exit wins even when 0 would otherwise be out of range.
        assert_eq!(parse_menu_choice(" 0 ", 0), Ok(MenuChoice::Exit));
    }

    #[test]
    fn menu_choice_maps_to_zero_based_index() {
        assert_eq!(parse_menu_choice("1", 3), Ok(MenuChoice::Category(0)));
        assert_eq!(parse_menu_choice("3", 3), Ok(MenuChoice::Category(2)));
    }

    #[test]
    fn menu_rejects_out_of_range_and_non_numeric() {
        assert_eq!(
            parse_menu_choice("4", 3),
            Err("Invalid choice! Enter 1-3 or 0 to exit".to_string())
        );
        assert_eq!(
            parse_menu_choice("quiz", 3),
            Err("Please enter a number".to_string())
        );
        assert_eq!(
            parse_menu_choice("-1", 3),
            Err("Please enter a number".to_string())
        );
    }

    #[test]
    fn answer_range_follows_option_count() {
        assert_eq!(parse_answer("1", 4), Ok(0));
        assert_eq!(parse_answer("4", 4), Ok(3));
        // A five-option question accepts 5; a four-option one does not.
        assert_eq!(parse_answer("5", 5), Ok(4));
        assert_eq!(
            parse_answer("5", 4),
            Err("Invalid choice! Enter 1-4".to_string())
        );
    }

    #[test]
    fn answer_rejects_non_numeric() {
        assert_eq!(
            parse_answer("two", 4),
            Err("Please enter a number".to_string())
        );
        assert_eq!(parse_answer("", 4), Err("Please enter a number".to_string()));
    }

    #[test]
    fn continuation_accepts_y_like_tokens_only() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yeah"));
        assert!(!is_affirmative(""));
    }
}
