use std::sync::Arc;

use narration::{AudioOutput, Narrator, RodioOutput, Speaker};
use tracing_subscriber::EnvFilter;

use crate::app::{AnswerOutcome, AppState, Mode};
use crate::content::{Content, StoryPanel};
use crate::utilities::{input, parse_choice};

mod app;
mod content;
mod lookup;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let content = Content::load();
    let output: Arc<dyn AudioOutput> = Arc::new(RodioOutput::new());
    let narrator = Narrator::from_env(output);
    let mut app = AppState::new(content.panels.len());

    println!("🧢 Jeff's New Hat");
    println!("Type 'help' for the list of commands.");
    render(&content, &app);

    loop {
        let line = input(">> ")?;
        let line = line.trim();
        let mut parts = line.split_ascii_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        match command {
            "exit" | "leave" | "quit" | "e" | "q" => {
                break;
            }
            "help" | "h" => {
                print_help();
            }
            "next" | "n" if app.mode == Mode::Story => {
                app.next_panel();
                render(&content, &app);
            }
            "prev" | "back" | "p" | "b" if app.mode == Mode::Story => {
                app.prev_panel();
                render(&content, &app);
            }
            "story" => {
                app.set_mode(Mode::Story);
                render(&content, &app);
            }
            "quiz" | "practice" => {
                app.set_mode(Mode::Quiz);
                render(&content, &app);
            }
            "say" | "s" if app.mode == Mode::Story => {
                let choice = parse_choice(parts.next());
                say_dialogue(&content, &mut app, &narrator, choice).await;
            }
            "word" | "w" => {
                let token = parts.collect::<Vec<&str>>().join(" ");
                if let Some(entry) = content.resolve(&token) {
                    app.select_word(entry.clone());
                    render_popup(&app);
                }
                // A miss is a no-op, matching a tap on a plain word.
            }
            "read" | "r" => {
                read_popup_word(&mut app, &narrator).await;
            }
            "close" | "x" => {
                app.close_word();
            }
            "answer" | "a" if app.mode == Mode::Quiz => {
                let choice = parse_choice(parts.next());
                answer_question(&content, &mut app, choice).await;
            }
            _ => {
                println!("Unknown command {command}.");
            }
        }
    }
    Ok(())
}

/// Narrate a dialogue line of the current panel, chosen by 1-based index.
async fn say_dialogue(
    content: &Content,
    app: &mut AppState,
    narrator: &Narrator,
    choice: Option<usize>,
) {
    let panel = &content.panels[app.panel_idx];
    let Some(dialogue) = choice.and_then(|idx| panel.dialogues.get(idx)) else {
        println!(
            "Pick a bubble between 1 and {} (e.g. 'say 1').",
            panel.dialogues.len()
        );
        return;
    };
    let text = dialogue.spoken_text().to_owned();
    narrate(app, narrator, &text, dialogue.speaker).await;
}

/// Read the currently open vocabulary word aloud. The popup voice is always
/// Sister's, matching the story's narrator for single words.
async fn read_popup_word(app: &mut AppState, narrator: &Narrator) {
    let Some(word) = app.selected_word.as_ref().map(|entry| entry.word.clone()) else {
        println!("No word is open. Use 'word <token>' first.");
        return;
    };
    narrate(app, narrator, &word, Speaker::Sister).await;
}

/// Run one narration request under the in-flight guard. A request arriving
/// while another is in flight is dropped.
async fn narrate(app: &mut AppState, narrator: &Narrator, text: &str, speaker: Speaker) {
    if !app.begin_narration() {
        tracing::debug!("narration already in flight, dropping request");
        return;
    }
    println!("🔊 {speaker}: {text}");
    narrator.speak(text, speaker).await;
    app.end_narration();
}

/// Apply an answer selection and the timed follow-up it names.
async fn answer_question(content: &Content, app: &mut AppState, choice: Option<usize>) {
    let Some(question) = content.quiz.get(app.quiz.current) else {
        return;
    };
    let Some(option) = choice.and_then(|idx| question.options.get(idx)) else {
        println!(
            "Pick an option between 1 and {} (e.g. 'answer 2').",
            question.options.len()
        );
        return;
    };
    let option = option.clone();
    match app.select_answer(&content.quiz, &option) {
        AnswerOutcome::Advance(delay) => {
            println!("✅ Correct!");
            tokio::time::sleep(delay).await;
            app.advance_question();
            render(content, app);
        }
        AnswerOutcome::Complete(delay) => {
            println!("✅ Correct!");
            tokio::time::sleep(delay).await;
            println!("Great job! You finished the quiz!");
            app.complete_quiz();
            render(content, app);
        }
        AnswerOutcome::Retry(delay) => {
            println!("❌ Try again! (Resetting...)");
            tokio::time::sleep(delay).await;
            app.clear_selection();
            render(content, app);
        }
        AnswerOutcome::Ignored => {}
    }
}

fn render(content: &Content, app: &AppState) {
    match app.mode {
        Mode::Story => render_panel(content, app),
        Mode::Quiz => render_question(content, app),
    }
}

fn render_panel(content: &Content, app: &AppState) {
    let panel: &StoryPanel = &content.panels[app.panel_idx];
    println!();
    println!("── Page {}/{} ──", app.panel_idx + 1, content.panels.len());
    println!("[{}] {}", panel.image_url, panel.description);
    for (idx, dialogue) in panel.dialogues.iter().enumerate() {
        let text = dialogue
            .text
            .split(' ')
            .map(|token| {
                if dialogue.is_highlighted(token) {
                    format!("[{token}]")
                } else {
                    token.to_owned()
                }
            })
            .collect::<Vec<String>>()
            .join(" ");
        println!("  {}. {}: {}", idx + 1, dialogue.speaker, text);
        println!("     {}", dialogue.translation);
    }
    let back = if app.at_first_panel() { "×" } else { "←" };
    let forward = if app.at_last_panel() { "×" } else { "→" };
    println!("  {back}  {forward}   (bracketed words are tappable: 'word shoes')");
}

fn render_question(content: &Content, app: &AppState) {
    let Some(question) = content.quiz.get(app.quiz.current) else {
        return;
    };
    println!();
    println!("── Question {}/{} ──", app.quiz.current + 1, content.quiz.len());
    println!("{}", question.question);
    for (idx, option) in question.options.iter().enumerate() {
        println!("  [{}]: {}", idx + 1, option);
    }
}

fn render_popup(app: &AppState) {
    let Some(entry) = &app.selected_word else {
        return;
    };
    println!();
    println!("┌─ {} ─ {}", entry.word, entry.translation);
    if let Some(image) = &entry.image {
        println!("│  {image}");
    }
    println!("└─ 'read' to hear it, 'close' to dismiss");
}

fn print_help() {
    println!("Story:  next/prev move pages, say <n> narrates bubble n");
    println!("Words:  word <token> opens a definition, read speaks it, close dismisses");
    println!("Quiz:   quiz switches to practice, answer <n> picks an option, story returns");
    println!("Other:  help, exit");
}
