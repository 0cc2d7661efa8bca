// Quoted-row encoder
//
// Each field is scanned for the configured signals and written in one of
// three forms:
//   Plain:   no signal occurs in the field
//   Quoted:  quote + content + quote; embedded quotes prefixed by the escape
//            (or by a second quote when no escape is configured)
//   Escaped: delimiter and new-row occurrences prefixed by the escape
// In every form an embedded escape is doubled. Quoting wins over escaping
// whenever a quote signal is available.
//
// Fields are rewritten in a single left-to-right pass over the original
// text, so inserted signal text is never rescanned.

use tracing::trace;

use crate::core::{match_any_at, Signal, SignalKind, Signals};
use crate::error::{Error, Result};

/// How a single field is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEncoding {
    Plain,
    Quoted,
    Escaped,
}

/// Decide how to write `field`. `index` is only used for error reporting.
pub fn choose_encoding(
    field: &str,
    index: usize,
    signals: &Signals,
    force_quotes: bool,
) -> Result<FieldEncoding> {
    // First signal found that needs protecting, in check order
    let found = [
        SignalKind::Delimiter,
        SignalKind::Quote,
        SignalKind::NewRow,
        SignalKind::Escape,
    ]
    .into_iter()
    .find(|&kind| signals.get(kind).occurs_in(field));

    if let Some(kind) = found {
        if !signals.quote_is_specified() && !signals.escape_is_specified() {
            return Err(Error::Unrepresentable { field: index, kind });
        }
    }

    let requires = found.is_some();
    if force_quotes || (requires && signals.quote_is_specified()) {
        Ok(FieldEncoding::Quoted)
    } else if requires && signals.escape_is_specified() {
        Ok(FieldEncoding::Escaped)
    } else {
        Ok(FieldEncoding::Plain)
    }
}

/// Write a quoted field: quote + content with escaped quotes and doubled escapes + quote
pub fn write_quoted_field(out: &mut String, field: &str, signals: &Signals) {
    let quote = signals.quote();
    let escape = signals.escape();
    // The escape for an embedded quote: escape if configured, else the quote itself
    let quote_escape = if escape.is_specified() { escape } else { quote };

    out.push_str(quote.as_str());
    write_with_prefixes(out, field, escape, &[(quote, quote_escape)]);
    out.push_str(quote.as_str());
}

/// Write an escaped field: escape before each delimiter and new-row, doubled escapes
pub fn write_escaped_field(out: &mut String, field: &str, signals: &Signals) {
    let escape = signals.escape();
    write_with_prefixes(
        out,
        field,
        escape,
        &[(signals.delimiter(), escape), (signals.new_row(), escape)],
    );
}

/// Copy `field` into `out`, doubling `escape` and writing `prefix` before
/// each occurrence of the paired signal.
fn write_with_prefixes(
    out: &mut String,
    field: &str,
    escape: &Signal,
    prefixed: &[(&Signal, &Signal)],
) {
    let candidates: Vec<&Signal> = std::iter::once(escape)
        .chain(prefixed.iter().map(|(signal, _)| *signal))
        .filter(|signal| signal.is_specified())
        .collect();

    let mut pos = 0;
    let mut copied = 0;
    while pos < field.len() {
        let Some(signal) = match_any_at(field, pos, &candidates) else {
            pos += field[pos..].chars().next().map_or(1, char::len_utf8);
            continue;
        };

        out.push_str(&field[copied..pos]);
        let prefix = if std::ptr::eq(signal, escape) {
            escape
        } else {
            prefixed
                .iter()
                .find(|(s, _)| std::ptr::eq(*s, signal))
                .map_or(escape, |(_, prefix)| *prefix)
        };
        out.push_str(prefix.as_str());
        out.push_str(signal.as_str());
        pos += signal.byte_len();
        copied = pos;
    }
    out.push_str(&field[copied..]);
}

/// Encode one field according to its chosen encoding
fn write_field(out: &mut String, field: &str, encoding: FieldEncoding, signals: &Signals) {
    match encoding {
        FieldEncoding::Plain => out.push_str(field),
        FieldEncoding::Quoted => write_quoted_field(out, field, signals),
        FieldEncoding::Escaped => write_escaped_field(out, field, signals),
    }
}

/// Join field values into one row of text.
///
/// Fails before producing any output if `force_quotes` is set without a quote
/// signal, or if a field needs protecting and neither quote nor escape is set.
pub fn join_quoted_row<I, S>(fields: I, signals: &Signals, force_quotes: bool) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if force_quotes && !signals.quote_is_specified() {
        return Err(Error::ForceQuotesWithoutQuote);
    }

    let mut out = String::new();
    for (index, field) in fields.into_iter().enumerate() {
        let field = field.as_ref();
        let encoding = choose_encoding(field, index, signals, force_quotes)?;
        trace!(index, ?encoding, "join field");

        if index > 0 {
            out.push_str(signals.delimiter().as_str());
        }
        write_field(&mut out, field, encoding, signals);
    }
    Ok(out)
}
