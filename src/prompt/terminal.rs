use super::Prompter;
use crate::config::FieldSpec;
use crate::error::PromptFailure;
use requestty::prompt::{Backend, EventIterator};
use requestty::{Answer, Question};

/// Asks each field as a plain `requestty` input question.
///
/// The secret is deliberately asked the same way as the key id: it is
/// echoed while typed and printed back unmasked afterwards.
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Same question as [`Prompter::ask`], drawn on `backend` and answered from `events`.
    pub fn ask_with<B: Backend, E: EventIterator>(
        &mut self,
        field: &FieldSpec,
        backend: &mut B,
        events: &mut E,
    ) -> Result<String, PromptFailure> {
        let answer = requestty::prompt_one_with(question(field), backend, events)?;
        answer_text(field, &answer)
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, field: &FieldSpec) -> Result<String, PromptFailure> {
        let answer = requestty::prompt_one(question(field))?;
        answer_text(field, &answer)
    }
}

fn question(field: &FieldSpec) -> Question<'_> {
    Question::input(field.name.clone())
        .message(field.name.as_str())
        .build()
}

fn answer_text(field: &FieldSpec, answer: &Answer) -> Result<String, PromptFailure> {
    answer
        .as_string()
        .map(String::from)
        .ok_or_else(|| PromptFailure::Unexpected(field.name.clone()))
}
