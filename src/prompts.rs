use std::path::Path;

pub const OVERALL_PROMPT: &str = "overall_prompt";

// Shipped copy of the template; the on-disk file wins when present so the
// prompt can be tuned without rebuilding.
const BUILTIN_OVERALL_PROMPT: &str = include_str!("../data/prompts/overall_prompt.md");

/// Load a prompt template by name from the prompt directory, falling back
/// to the built-in template when the file is missing or empty.
pub fn get_prompt(prompt_dir: &Path, name: &str) -> String {
    let path = prompt_dir.join(format!("{name}.md"));

    match std::fs::read_to_string(&path) {
        Ok(content) if !content.trim().is_empty() => content,
        Ok(_) => {
            tracing::warn!(path = %path.display(), "prompt file is empty, using built-in template");
            BUILTIN_OVERALL_PROMPT.to_string()
        }
        Err(error) => {
            tracing::warn!(
                %error,
                path = %path.display(),
                "could not load prompt file, using built-in template"
            );
            BUILTIN_OVERALL_PROMPT.to_string()
        }
    }
}
