//! Interactive entity prompt with tab completion over known entity names.

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::{complete_entity, CliError, Result};

/// Question shown when the entity name is asked for interactively.
pub const ENTITY_QUESTION: &str = "Class name of the entity to create CRUD (e.g. Product)";

/// Known entity names starting with `input`, compared case-insensitively.
///
/// ```
/// use apigen_cli::prompt::entity_candidates;
///
/// let known = vec!["Product".to_string(), "ProductLine".to_string(), "Tag".to_string()];
/// assert_eq!(entity_candidates("prod", &known), vec!["Product", "ProductLine"]);
/// ```
pub fn entity_candidates<'a>(input: &str, names: &'a [String]) -> Vec<&'a str> {
    let needle = input.trim_start().to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&needle))
        .map(String::as_str)
        .collect()
}

/// Line-editor helper completing entity names.
#[derive(Debug, Clone, Default)]
pub struct EntityCompleter {
    names: Vec<String>,
}

impl EntityCompleter {
    /// Complete against `names`.
    pub fn new(names: Vec<String>) -> Self { Self { names } }
}

impl Completer for EntityCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = line.get(..pos).unwrap_or(line);
        let pairs = entity_candidates(typed, &self.names)
            .into_iter()
            .map(|name| Pair { display: name.to_string(), replacement: name.to_string() })
            .collect();
        // The whole line is one entity name
        Ok((0, pairs))
    }
}

impl Hinter for EntityCompleter {
    type Hint = String;
}

impl Highlighter for EntityCompleter {}

impl Validator for EntityCompleter {}

impl Helper for EntityCompleter {}

/// Ask for an entity name on the terminal, completing against `names`.
///
/// The answer is passed through [`complete_entity`], so a unique prefix is
/// accepted without pressing tab. An empty answer, end of input or an
/// interrupt is reported as [`CliError::MissingEntity`].
pub fn ask_entity(names: Vec<String>) -> Result<String> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut editor: Editor<EntityCompleter, DefaultHistory> = Editor::with_config(config)?;
    editor.set_helper(Some(EntityCompleter::new(names)));

    let answer = match editor.readline(&format!("{}: ", ENTITY_QUESTION)) {
        Ok(line) => line,
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
            return Err(CliError::MissingEntity);
        }
        Err(e) => return Err(e.into()),
    };

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CliError::MissingEntity);
    }

    let names = editor.helper().map(|helper| helper.names.as_slice()).unwrap_or_default();
    Ok(complete_entity(answer, names))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_names() -> Vec<String> {
        vec!["Product".to_string(), "ProductLine".to_string(), "Admin\\Post".to_string()]
    }

    #[test]
    fn test_candidates_are_case_insensitive_prefixes() {
        let names = create_test_names();
        assert_eq!(entity_candidates("PRODUCTL", &names), vec!["ProductLine"]);
        assert_eq!(entity_candidates("admin\\", &names), vec!["Admin\\Post"]);
        assert!(entity_candidates("Tag", &names).is_empty());
    }

    #[test]
    fn test_empty_input_offers_every_name() {
        let names = create_test_names();
        assert_eq!(entity_candidates("", &names), vec!["Product", "ProductLine", "Admin\\Post"]);
    }
}
