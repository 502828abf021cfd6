// Entrypoint for the CLI application.
// - Keeps `main` small: discover the quiz catalog and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling at the top level.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use quizmaster_cli::{
    catalog::{QuizCatalog, DEFAULT_QUIZ_DIR},
    ui::main_menu,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("quizmaster_cli=info".parse()?),
        )
        .init();

    // Scan the quiz directory up front, before the menu loop starts.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Loading quizzes...");
    let catalog = QuizCatalog::discover(DEFAULT_QUIZ_DIR)?;
    spinner.finish_and_clear();

    if catalog.freshly_created() {
        println!(
            "Created {} directory. Add quiz JSON files.",
            catalog.quiz_dir().display()
        );
    }

    // Start the interactive menu. This call blocks until the player exits.
    main_menu(catalog)?;
    Ok(())
}
