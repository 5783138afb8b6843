//! Plain-text reports for the terminal.

use std::fmt::Write;

use wordstat_core::{Statistics, TextComparison, TextReport};

use crate::loader::SourceInfo;

const RULE_WIDTH: usize = 50;

/// Unique words listed per side in a comparison.
pub const UNIQUE_WORDS_SHOWN: usize = 10;

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: impl Into<u64>) -> String {
    let digits = n.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn count(n: usize) -> String {
    group_thousands(n as u64)
}

fn heading(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}\n{title}\n{rule}");
}

pub fn render_report(report: &TextReport, source: Option<&SourceInfo>) -> String {
    let mut out = String::new();
    heading(&mut out, "TEXT ANALYSIS REPORT");
    if let Some(source) = source {
        let _ = writeln!(out, "File: {}", source.path.display());
        let _ = writeln!(
            out,
            "File size: {} bytes ({})",
            group_thousands(source.size_bytes),
            source.encoding.label()
        );
    }

    let s = &report.statistics;
    let _ = writeln!(out, "\nBASIC STATISTICS");
    write_counts(&mut out, s);

    let c = &s.characters;
    let _ = writeln!(out, "\nCHARACTER ANALYSIS");
    let _ = writeln!(out, "   Total characters: {}", count(s.character_count));
    let _ = writeln!(out, "   Characters (no spaces): {}", count(s.character_count_no_spaces));
    let _ = writeln!(out, "   Alphabetic: {}", count(c.alphabetic));
    let _ = writeln!(out, "   Numeric: {}", count(c.numeric));
    let _ = writeln!(out, "   Spaces: {}", count(c.spaces));
    let _ = writeln!(out, "   Punctuation: {}", count(c.punctuation));

    let _ = writeln!(out, "\nAVERAGES");
    let _ = writeln!(out, "   Average word length: {:.2} characters", s.average_word_length);
    let _ = writeln!(out, "   Average sentence length: {:.2} words", s.average_sentence_length);
    let _ = writeln!(
        out,
        "   Estimated reading time: {} min at {} wpm",
        s.reading_time_minutes, s.words_per_minute
    );

    let filter_note = if report.filter_stop_words {
        format!("{} stop words excluded", report.language)
    } else {
        "stop words included".to_string()
    };
    let _ = writeln!(
        out,
        "\nTOP {} MOST COMMON WORDS ({filter_note})",
        report.most_common.len()
    );
    if report.most_common.is_empty() {
        let _ = writeln!(out, "   (none)");
    }
    for (rank, entry) in report.most_common.iter().enumerate() {
        let _ = writeln!(
            out,
            "   {:2}. {:<15} ({} times)",
            rank + 1,
            entry.word,
            count(entry.count)
        );
    }
    out
}

fn write_counts(out: &mut String, s: &Statistics) {
    let _ = writeln!(out, "   Words: {}", count(s.word_count));
    let _ = writeln!(out, "   Unique words: {}", count(s.unique_word_count));
    let _ = writeln!(out, "   Sentences: {}", count(s.sentence_count));
    let _ = writeln!(out, "   Paragraphs: {}", count(s.paragraph_count));
}

pub fn render_comparison(comparison: &TextComparison) -> String {
    let mut out = String::new();
    heading(&mut out, "TEXT COMPARISON REPORT");

    for (label, stats) in [("TEXT 1", &comparison.a), ("TEXT 2", &comparison.b)] {
        let _ = writeln!(out, "\n{label} STATISTICS");
        write_counts(&mut out, stats);
    }

    let sim = &comparison.similarity;
    let _ = writeln!(out, "\nCOMPARISON");
    let _ = writeln!(out, "   Common words: {}", count(sim.shared_count()));
    let _ = writeln!(out, "   Similarity ratio: {:.2}%", sim.score * 100.0);

    for (label, words) in [("Text 1", &sim.unique_to_a), ("Text 2", &sim.unique_to_b)] {
        if words.is_empty() {
            continue;
        }
        let shown: Vec<&str> = words
            .iter()
            .take(UNIQUE_WORDS_SHOWN)
            .map(String::as_str)
            .collect();
        let more = words.len().saturating_sub(UNIQUE_WORDS_SHOWN);
        let _ = writeln!(out, "\nWords unique to {label}:");
        let _ = write!(out, "   {}", shown.join(", "));
        if more > 0 {
            let _ = write!(out, " (+{more} more)");
        }
        let _ = writeln!(out);
    }
    out
}

pub fn render_batch_line(name: &str, stats: &Statistics) -> String {
    format!(
        "{name}: {} words, {} sentences, {} paragraphs, {} min",
        count(stats.word_count),
        count(stats.sentence_count),
        count(stats.paragraph_count),
        stats.reading_time_minutes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordstat_core::TextAnalyzer;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0u64), "0");
        assert_eq!(group_thousands(999u64), "999");
        assert_eq!(group_thousands(1000u64), "1,000");
        assert_eq!(group_thousands(1234567u64), "1,234,567");
    }

    #[test]
    fn report_lists_top_words() {
        let report = TextAnalyzer::default().analyze("The cat sat. The cat ran!");
        let text = render_report(&report, None);
        assert!(text.contains("Words: 6"));
        assert!(text.contains("Sentences: 2"));
        assert!(text.contains(" 1. cat"));
        assert!(text.contains("english stop words excluded"));
        assert!(!text.contains("File:"));
    }

    #[test]
    fn comparison_truncates_unique_words() {
        let a = (0..15).map(|i| format!("alpha{i}")).collect::<Vec<_>>().join(" ");
        let comparison = TextAnalyzer::default().compare_reports(&a, "beta");
        let text = render_comparison(&comparison);
        assert!(text.contains("Similarity ratio: 0.00%"));
        assert!(text.contains("(+5 more)"));
        assert!(text.contains("Words unique to Text 2:\n   beta\n"));
    }
}
