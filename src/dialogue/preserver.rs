// WHY: collapses each run of dialogue-bearing sentences into one block so chunk packing
// can never place a boundary inside an exchange
// A sentence is dialogue when a quoted span appears anywhere in it, not only at its start

use tracing::debug;

use super::SpeechPatterns;

/// A sentence paired with whether it carries quoted speech
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueTag<'a> {
    pub sentence: &'a str,
    pub is_dialogue: bool,
}

/// Tag every sentence, in order
pub fn tag_dialogue<'a>(sentences: &'a [String], speech: &SpeechPatterns) -> Vec<DialogueTag<'a>> {
    sentences
        .iter()
        .map(|sentence| DialogueTag {
            sentence,
            is_dialogue: speech.contains_direct_speech(sentence),
        })
        .collect()
}

/// Replace every maximal run of dialogue-bearing sentences with their space-joined concatenation
pub fn preserve_dialogues(sentences: Vec<String>, speech: &SpeechPatterns) -> Vec<String> {
    let tags = tag_dialogue(&sentences, speech);
    let mut result = Vec::with_capacity(tags.len());
    let mut i = 0;

    while i < tags.len() {
        let tag = tags[i];

        if !tag.is_dialogue {
            push_trimmed(&mut result, tag.sentence);
            i += 1;
            continue;
        }

        let run_end = tags[i..]
            .iter()
            .position(|t| !t.is_dialogue)
            .map_or(tags.len(), |offset| i + offset);

        let block = tags[i..run_end]
            .iter()
            .map(|t| t.sentence)
            .collect::<Vec<_>>()
            .join(" ");
        push_trimmed(&mut result, &block);
        i = run_end;
    }

    debug!("Dialogue preservation: {} -> {} sentences", tags.len(), result.len());
    result
}

fn push_trimmed(result: &mut Vec<String>, sentence: &str) {
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        result.push(trimmed.to_string());
    }
}
