use std::path::Path;

use crate::prompts::{get_prompt, OVERALL_PROMPT};

#[test]
fn test_missing_file_falls_back_to_builtin() {
    let template = get_prompt(Path::new("/nonexistent/prompt/dir"), OVERALL_PROMPT);

    assert!(template.contains("```overall"));
    assert!(template.contains("```participants"));
    assert!(template.contains("{participants}"));
    assert!(template.contains("{messages}"));
}

#[test]
fn test_file_on_disk_wins() {
    let dir = std::env::temp_dir().join("tgdigest-prompt-test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("overall_prompt.md"), "custom: {messages}").unwrap();

    let template = get_prompt(&dir, OVERALL_PROMPT);

    assert_eq!(template, "custom: {messages}");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_empty_file_falls_back_to_builtin() {
    let dir = std::env::temp_dir().join("tgdigest-prompt-empty-test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("overall_prompt.md"), "  \n").unwrap();

    let template = get_prompt(&dir, OVERALL_PROMPT);

    assert!(template.contains("```overall"));

    std::fs::remove_dir_all(&dir).ok();
}
