//! String escape cooking.
//!
//! Recognised escapes: `\"` `\\` `\b` `\f` `\n` `\r` `\t`.

use complang_ir::Span;

use crate::LexError;

/// Cook the escapes in string literal `content` (quotes stripped).
///
/// `base` is the byte offset of `content` in the source line, used to locate
/// a bad escape. A lone trailing backslash is dropped; only unterminated
/// literals can end that way and they are reported by the caller.
pub(crate) fn cook_string(content: &str, base: u32) -> Result<String, LexError> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();

    while let Some((idx, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let Some((_, escape)) = chars.next() else {
            break;
        };
        let cooked = match escape {
            '"' => '"',
            '\\' => '\\',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            _ => {
                let start = base + u32::try_from(idx).unwrap_or(u32::MAX - base);
                let width = u32::try_from(1 + escape.len_utf8()).unwrap_or(2);
                return Err(LexError::InvalidEscape {
                    escape,
                    span: Span::new(start, start + width),
                });
            }
        };
        result.push(cooked);
    }

    Ok(result)
}

#[cfg(test)]
mod tests;
