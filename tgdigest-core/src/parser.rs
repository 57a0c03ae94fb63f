use std::collections::HashMap;

const OVERALL_FENCE: &str = "```overall";
const PARTICIPANTS_FENCE: &str = "```participants";
const CLOSING_FENCE: &str = "```";

/// Parsed model response.
///
/// `parse_fallback` is set when the response carried no fenced overall
/// section and the raw text was used verbatim; callers may log it, it is
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct SummaryOutcome {
    #[serde(rename = "overall_summary")]
    pub overall: Option<String>,
    pub by_participant: HashMap<String, String>,
    #[serde(skip)]
    pub parse_fallback: bool,
}

/// Parse a free-text model response into an overall summary and
/// per-participant summaries.
///
/// Total over all inputs: missing or unbalanced fences, empty input and
/// malformed lines all degrade to the raw-text fallback or to skipped
/// lines, never to a failure.
pub fn parse_response(raw: &str) -> SummaryOutcome {
    let overall = fenced_section(raw, OVERALL_FENCE);

    let mut by_participant = HashMap::new();
    if let Some(block) = fenced_section(raw, PARTICIPANTS_FENCE) {
        for line in block.lines() {
            match parse_participant_line(line) {
                // Last write wins when a participant repeats.
                Some((name, summary)) => {
                    by_participant.insert(name, summary);
                }
                None if line.trim().is_empty() => {}
                None => tracing::debug!(line, "skipping malformed participant line"),
            }
        }
    }

    match overall {
        Some(overall) => SummaryOutcome {
            overall: Some(overall.to_string()),
            by_participant,
            parse_fallback: false,
        },
        None => SummaryOutcome {
            overall: Some(raw.to_string()),
            by_participant,
            parse_fallback: true,
        },
    }
}

/// Trimmed content between `fence` and the next generic closing fence, if
/// the closing fence sits strictly after the content start.
fn fenced_section<'a>(raw: &'a str, fence: &str) -> Option<&'a str> {
    let start = raw.find(fence)? + fence.len();
    let end = start + raw[start..].find(CLOSING_FENCE)?;

    (end > start).then(|| raw[start..end].trim())
}

/// One line of the participants block. Bracketed lines (`[Name]: summary`)
/// are only ever parsed as such; a malformed bracket line is dropped rather
/// than re-read under the plain `Name: summary` rule.
fn parse_participant_line(line: &str) -> Option<(String, String)> {
    if line.contains('[') && line.contains(']') {
        let open = line.find('[')?;
        let close = line.find(']')?;

        if close <= open + 1 {
            return None;
        }

        let colon = close + line[close..].find(':')?;
        let name = line[open + 1..close].to_string();
        let summary = line[colon + 1..].trim().to_string();

        Some((name, summary))
    } else {
        let (name, summary) = line.split_once(':')?;
        Some((name.trim().to_string(), summary.trim().to_string()))
    }
}
