//! Static story content: panels, vocabulary, and the comprehension quiz.
//!
//! Everything here is authored data, built once by [`Content::load`] and
//! never mutated afterwards.

use std::collections::HashMap;

use narration::Speaker;

/// A picture-backed translation shown when a highlighted word is tapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: String,
    pub translation: String,
    pub image: Option<String>,
}

/// One spoken utterance within a panel. Render order follows vec order.
#[derive(Debug, Clone)]
pub struct DialogueLine {
    pub id: String,
    pub speaker: Speaker,
    pub text: String,
    pub translation: String,
    /// Distinct text for narration when it differs from the display text.
    pub narration_text: Option<String>,
    /// Tokens within `text` that open a vocabulary popup when tapped.
    pub highlighted_words: Vec<String>,
}

impl DialogueLine {
    /// Text handed to the narration pipeline for this line.
    pub fn spoken_text(&self) -> &str {
        self.narration_text.as_deref().unwrap_or(&self.text)
    }
}

/// One page of the illustrated story.
#[derive(Debug, Clone)]
pub struct StoryPanel {
    pub id: u32,
    pub image_url: String,
    pub description: String,
    pub dialogues: Vec<DialogueLine>,
}

/// A multiple-choice question; `correct_answer` equals one option verbatim.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Immutable content store, loaded once at startup.
pub struct Content {
    vocabulary: HashMap<String, VocabularyEntry>,
    pub panels: Vec<StoryPanel>,
    pub quiz: Vec<QuizQuestion>,
}

fn entry(word: &str, translation: &str, image: &str) -> (String, VocabularyEntry) {
    (
        word.to_owned(),
        VocabularyEntry {
            word: word.to_owned(),
            translation: translation.to_owned(),
            image: Some(image.to_owned()),
        },
    )
}

fn line(
    id: &str,
    speaker: Speaker,
    text: &str,
    translation: &str,
    highlighted: &[&str],
) -> DialogueLine {
    DialogueLine {
        id: id.to_owned(),
        speaker,
        text: text.to_owned(),
        translation: translation.to_owned(),
        narration_text: None,
        highlighted_words: highlighted.iter().map(|w| (*w).to_owned()).collect(),
    }
}

fn question(id: &str, text: &str, options: &[&str], correct: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_owned(),
        question: text.to_owned(),
        options: options.iter().map(|o| (*o).to_owned()).collect(),
        correct_answer: correct.to_owned(),
    }
}

impl Content {
    pub fn load() -> Self {
        let vocabulary = HashMap::from([
            entry("shoes", "鞋子", "https://picsum.photos/id/103/200/200"),
            entry("coat", "外套", "https://picsum.photos/id/200/200/200"),
            entry("hat", "帽子", "https://picsum.photos/id/111/200/200"),
            entry("black", "黑色", "https://picsum.photos/id/100/200/200"),
            entry("windy", "刮风的", "https://picsum.photos/id/10/200/200"),
            entry("like", "喜欢", "https://picsum.photos/id/30/200/200"),
        ]);

        let panels = vec![
            StoryPanel {
                id: 1,
                image_url: "https://picsum.photos/seed/jeff1/800/600".to_owned(),
                description: "Jeff is ready to go out.".to_owned(),
                dialogues: vec![
                    line("d1_1", Speaker::Jeff, "Let's go!", "我们走吧！", &["go"]),
                    line(
                        "d1_2",
                        Speaker::Sister,
                        "Put on your shoes, Jeff.",
                        "穿上你的鞋子，Jeff。",
                        &["shoes"],
                    ),
                ],
            },
            StoryPanel {
                id: 2,
                image_url: "https://picsum.photos/seed/jeff2/800/600".to_owned(),
                description: "The weather is windy.".to_owned(),
                dialogues: vec![
                    line("d2_1", Speaker::Sister, "It's windy.", "外面风很大。", &["windy"]),
                    line("d2_2", Speaker::Mom, "Put on your coat.", "穿上你的外套。", &["coat"]),
                ],
            },
            StoryPanel {
                id: 3,
                image_url: "https://picsum.photos/seed/jeff3/800/600".to_owned(),
                description: "Jeff dislikes the hat.".to_owned(),
                dialogues: vec![
                    line("d3_1", Speaker::Mom, "Put on your hat.", "戴上你的帽子。", &["hat"]),
                    line(
                        "d3_2",
                        Speaker::Jeff,
                        "No! It's black. I don't like black!",
                        "不！它是黑色的。我不喜欢黑色！",
                        &["black", "like"],
                    ),
                ],
            },
            StoryPanel {
                id: 4,
                image_url: "https://picsum.photos/seed/jeff4/800/600".to_owned(),
                description: "The teddy bear has a matching hat.".to_owned(),
                dialogues: vec![line(
                    "d4_1",
                    Speaker::Sister,
                    "Look! It has a black hat, too!",
                    "看！它也有一顶黑色的帽子！",
                    &["Look", "black", "hat"],
                )],
            },
            StoryPanel {
                id: 5,
                image_url: "https://picsum.photos/seed/jeff5/800/600".to_owned(),
                description: "Jeff is happy now.".to_owned(),
                dialogues: vec![line(
                    "d5_1",
                    Speaker::Jeff,
                    "I like my hat!",
                    "我喜欢我的帽子！",
                    &["like", "hat"],
                )],
            },
        ];

        let quiz = vec![
            question("q1", "What color is the hat?", &["Red", "Black", "Blue"], "Black"),
            question("q2", "How is the weather?", &["Sunny", "Windy", "Rainy"], "Windy"),
            question("q3", "Who says 'I like my hat'?", &["Mom", "Sister", "Jeff"], "Jeff"),
        ];

        Self {
            vocabulary,
            panels,
            quiz,
        }
    }

    pub(crate) fn vocabulary(&self) -> &HashMap<String, VocabularyEntry> {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_has_five_panels_in_order() {
        let content = Content::load();
        assert_eq!(content.panels.len(), 5);
        let ids: Vec<u32> = content.panels.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_correct_answer_is_one_of_the_options() {
        let content = Content::load();
        assert_eq!(content.quiz.len(), 3);
        for question in &content.quiz {
            assert!(
                question.options.contains(&question.correct_answer),
                "{} has a correct answer outside its options",
                question.id
            );
        }
    }

    #[test]
    fn spoken_text_prefers_the_narration_override() {
        let mut line = Content::load().panels[0].dialogues[0].clone();
        assert_eq!(line.spoken_text(), "Let's go!");
        line.narration_text = Some("Lets go".to_owned());
        assert_eq!(line.spoken_text(), "Lets go");
    }
}
