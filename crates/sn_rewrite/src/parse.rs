//! Defensive parsing of generator output. The response format drifts, so:
//! labeled fields first, then first-line/remainder, then the original input.

use sn_core::RewrittenHeadline;

use crate::prompt::{SUMMARY_LABEL, TITLE_LABEL};

/// Case-insensitive ASCII prefix match; returns the text after the label.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let line = line.trim_start();
    if line.len() >= label.len()
        && line.is_char_boundary(label.len())
        && line[..label.len()].eq_ignore_ascii_case(label)
    {
        Some(line[label.len()..].trim())
    } else {
        None
    }
}

fn labeled_title(response: &str) -> Option<String> {
    response
        .lines()
        .find_map(|line| strip_label(line, TITLE_LABEL))
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}

/// The summary may run over several lines; collect until a blank line.
fn labeled_summary(response: &str) -> Option<String> {
    let mut lines = response.lines();
    let first = loop {
        let line = lines.next()?;
        if let Some(rest) = strip_label(line, SUMMARY_LABEL) {
            break rest.to_string();
        }
    };

    let mut parts = vec![first];
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        parts.push(line.to_string());
    }
    let summary = parts.join(" ").trim().to_string();
    (!summary.is_empty()).then_some(summary)
}

pub fn parse_headline_response(
    response: &str,
    original_title: &str,
    original_summary: &str,
) -> RewrittenHeadline {
    let title = labeled_title(response);
    let summary = labeled_summary(response);

    if title.is_some() || summary.is_some() {
        return RewrittenHeadline {
            title: title.unwrap_or_else(|| original_title.to_string()),
            summary: summary.unwrap_or_else(|| original_summary.to_string()),
        };
    }

    // No labels: first non-empty line is the title, the rest the summary.
    let mut lines = response.lines().map(str::trim).filter(|l| !l.is_empty());
    match lines.next() {
        Some(first) => RewrittenHeadline {
            title: first.to_string(),
            summary: {
                let rest = lines.collect::<Vec<_>>().join(" ");
                if rest.is_empty() {
                    original_summary.to_string()
                } else {
                    rest
                }
            },
        },
        None => RewrittenHeadline {
            title: original_title.to_string(),
            summary: original_summary.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_response() {
        let response = "SACHLICHER TITEL: Stadtrat beschliesst Budget\n\
                        SACHLICHE ZUSAMMENFASSUNG: Der Stadtrat hat das Budget angenommen.\n\
                        Die Abstimmung war knapp.";
        let parsed = parse_headline_response(response, "orig", "orig summary");
        assert_eq!(parsed.title, "Stadtrat beschliesst Budget");
        assert_eq!(
            parsed.summary,
            "Der Stadtrat hat das Budget angenommen. Die Abstimmung war knapp."
        );
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let response = "sachlicher titel: Neuer Titel\n\
                        sachliche zusammenfassung: Kurz und knapp.";
        let parsed = parse_headline_response(response, "orig", "orig summary");
        assert_eq!(parsed.title, "Neuer Titel");
        assert_eq!(parsed.summary, "Kurz und knapp.");
    }

    #[test]
    fn test_summary_stops_at_blank_line() {
        let response = "SACHLICHER TITEL: Titel\n\
                        SACHLICHE ZUSAMMENFASSUNG: Erster Satz.\n\
                        Zweiter Satz.\n\
                        \n\
                        Nachgestellter Kommentar des Modells.";
        let parsed = parse_headline_response(response, "orig", "orig summary");
        assert_eq!(parsed.summary, "Erster Satz. Zweiter Satz.");
    }

    #[test]
    fn test_unlabeled_falls_back_to_first_line() {
        let response = "Neuer Titel ohne Label\nUnd hier die Zusammenfassung.";
        let parsed = parse_headline_response(response, "orig", "orig summary");
        assert_eq!(parsed.title, "Neuer Titel ohne Label");
        assert_eq!(parsed.summary, "Und hier die Zusammenfassung.");
    }

    #[test]
    fn test_single_line_keeps_original_summary() {
        let parsed = parse_headline_response("Nur ein Titel", "orig", "orig summary");
        assert_eq!(parsed.title, "Nur ein Titel");
        assert_eq!(parsed.summary, "orig summary");
    }

    #[test]
    fn test_empty_response_falls_back_to_original() {
        let parsed = parse_headline_response("\n  \n", "orig", "orig summary");
        assert_eq!(parsed.title, "orig");
        assert_eq!(parsed.summary, "orig summary");
    }

    #[test]
    fn test_partial_labels() {
        let response = "SACHLICHER TITEL: Nur der Titel kam zurück";
        let parsed = parse_headline_response(response, "orig", "orig summary");
        assert_eq!(parsed.title, "Nur der Titel kam zurück");
        assert_eq!(parsed.summary, "orig summary");
    }
}
