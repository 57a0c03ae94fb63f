use std::io::{BufRead, Write};

use crate::FetchResult;

/// Read one trimmed line from stdin, used by the interactive sign-in flow.
pub fn prompt(message: &str) -> FetchResult<String> {
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
