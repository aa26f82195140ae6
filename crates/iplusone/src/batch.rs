//! Evaluates batches of generated sentences.

use crate::classify::classify;
use iplusone_core::{
    AcceptanceRule, CandidateSentence, IplusoneError, IplusoneResult, VocabularySet,
};
use std::io::Write;

const SENTENCE: &str = "sentence";
const TRANSLATION: &str = "translation";
const NEW_WORD: &str = "new_word";

// keep in sync with `write_csv`
const ANNOTATION_COLUMNS: [&str; 6] = [
    "total_words",
    "known_words",
    "new_words",
    "rogue_words",
    "meets_criteria",
    "rule",
];

/// Parses a CSV payload and judges every sentence in it, keeping the payload's row order.
///
/// The payload needs a header row with a `sentence` column. `translation` and `new_word`
/// are picked up when present and other columns are carried along untouched.
/// Any parse failure fails the whole batch, including a quoted field cut off by the end of the payload.
pub fn evaluate_batch(
    raw_payload: &str,
    known: &VocabularySet,
    candidate_new: &VocabularySet,
    rule: AcceptanceRule,
) -> IplusoneResult<Vec<CandidateSentence>> {
    let payload = trim_blank_lines(raw_payload);
    if let Some(line) = unterminated_quote(payload) {
        return Err(IplusoneError::MalformedPayload(format!(
            "quoted field starting on line {line} is never closed"
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_reader(payload.as_bytes());

    let headers = reader.headers().map_err(malformed)?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let sentence_idx = column(SENTENCE).ok_or_else(|| {
        IplusoneError::MalformedPayload(format!(
            "missing '{SENTENCE}' column, found columns {:?}",
            headers.iter().collect::<Vec<_>>()
        ))
    })?;
    let translation_idx = column(TRANSLATION);
    let new_word_idx = column(NEW_WORD);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        let get = |idx: usize| record.get(idx).unwrap_or_default().to_string();

        let sentence = get(sentence_idx);
        let counts = classify(&sentence, known, candidate_new);
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| {
                *idx != sentence_idx
                    && Some(*idx) != translation_idx
                    && Some(*idx) != new_word_idx
            })
            .map(|(idx, header)| (header.to_string(), get(idx)))
            .collect();

        rows.push(CandidateSentence {
            translation: translation_idx.map(get),
            new_word: new_word_idx.map(get),
            sentence,
            extra,
            meets_criteria: rule.accepts(&counts),
            counts,
            rule,
        });
    }

    tracing::debug!(
        "Evaluated {} sentences under {rule}, {} meet the criteria",
        rows.len(),
        rows.iter().filter(|r| r.meets_criteria).count()
    );
    Ok(rows)
}

fn malformed(err: csv::Error) -> IplusoneError {
    IplusoneError::MalformedPayload(err.to_string())
}

/// Strips the blank lines around the payload. Whitespace on the last line with content is kept.
fn trim_blank_lines(payload: &str) -> &str {
    let payload = payload.trim_start();
    let content_end = payload.trim_end().len();
    match payload[content_end..].find(&['\r', '\n'][..]) {
        Some(newline) => &payload[..content_end + newline],
        None => payload,
    }
}

/// The line of a quoted field that runs into the end of the payload, if any.
///
/// Only a quote at the start of a field opens a quoted field and `""` inside one is an
/// escaped quote, as in the csv reader. The reader itself silently ends such a field.
fn unterminated_quote(payload: &str) -> Option<usize> {
    let mut line = 1;
    let mut opened_on = None;
    let mut field_start = true;
    let mut chars = payload.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }
        if opened_on.is_some() {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    opened_on = None;
                }
            }
        } else if field_start && c == '"' {
            opened_on = Some(line);
            field_start = false;
        } else {
            field_start = matches!(c, ',' | '\n' | '\r');
        }
    }
    opened_on
}

/// Judges already classified rows under another rule.
pub fn reevaluate(rows: &[CandidateSentence], rule: AcceptanceRule) -> Vec<CandidateSentence> {
    rows.iter().map(|row| row.with_rule(rule)).collect()
}

/// Moves the rows that meet their criteria to the front, otherwise keeping their order.
pub fn sort_passing_first(rows: &mut [CandidateSentence]) {
    rows.sort_by_key(|row| !row.meets_criteria);
}

/// Writes the annotated rows as CSV.
///
/// The columns are `sentence`, `translation`, `new_word`, the other payload columns of the first row
/// and finally the annotations.
pub fn write_csv(rows: &[CandidateSentence], writer: impl Write) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    let extra_headers = rows
        .first()
        .map(|row| row.extra.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>())
        .unwrap_or_default();
    let mut headers = vec![SENTENCE, TRANSLATION, NEW_WORD];
    headers.extend(extra_headers.iter().copied());
    headers.extend(ANNOTATION_COLUMNS);
    writer.write_record(&headers)?;

    for row in rows {
        let mut record = vec![
            row.sentence.clone(),
            row.translation.clone().unwrap_or_default(),
            row.new_word.clone().unwrap_or_default(),
        ];
        for header in &extra_headers {
            let value = row
                .extra
                .iter()
                .find(|(k, _)| k == header)
                .map(|(_, v)| v.clone())
                .unwrap_or_default();
            record.push(value);
        }
        record.extend([
            row.counts.total.to_string(),
            row.counts.known_count.to_string(),
            row.counts.new_count.to_string(),
            row.counts.rogue_count.to_string(),
            row.meets_criteria.to_string(),
            row.rule.to_string(),
        ]);
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
