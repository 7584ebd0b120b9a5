use crate::cli::parser::{Commands, GlossaryAction};
use crate::config::Config;
use crate::core::glossary::Glossary;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Source problems are shown as the search result, never as a failure.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Glossary { file, action } = cmd {
        let path = file.as_deref().map(expand_tilde);
        let glossary = Glossary::from_config(cfg, path.as_deref())?;

        match action {
            GlossaryAction::Search { term } => {
                println!("🔎 {}", term);
                println!("{}", glossary.lookup(term));
            }
            GlossaryAction::Complete { prefix } => match glossary.suggest(prefix) {
                Ok(terms) if terms.is_empty() => info("No matching terms."),
                Ok(terms) => {
                    for t in terms {
                        println!("{}", t);
                    }
                }
                Err(e) => warning(e),
            },
        }
    }
    Ok(())
}
