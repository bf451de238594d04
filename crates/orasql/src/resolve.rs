//! Expression resolution: classify free-form expression text and produce
//! safely quoted SQL.
//!
//! The resolver is not a SQL parser. It runs a classification ladder over
//! the whole input (wildcard, numeric literal, reserved keyword, bare
//! column, dotted path, `table.*`) and for anything more mixed, such as
//! function calls, string literals, or placeholders, falls back to a
//! left-to-right token scan that quotes identifier operands and leaves
//! everything else alone. Malformed input is never rejected here; the
//! setters that call `resolve` validate shapes first.

use std::sync::OnceLock;

use regex::Regex;

use crate::keyword;
use crate::params::VirtualFields;

/// Quoting context for a resolution pass: the table or alias used to
/// qualify bare column names, plus the builder's virtual fields.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolveContext<'a> {
    pub table_or_alias: &'a str,
    pub virtual_fields: &'a VirtualFields,
}

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:0|[1-9]\d*)(?:\.\d+)?$").expect("invalid built-in numeric regex")
    })
}

fn simple_path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\w+(?:\.[^ *]*)*$").expect("invalid built-in identifier path regex")
    })
}

fn table_wildcard_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w+\.\*$").expect("invalid built-in table wildcard regex"))
}

/// True when `value` forms a bare numeric literal: optional sign, digits
/// without a redundant leading zero, optional decimal fraction.
pub(crate) fn is_numeric_literal(value: &str) -> bool {
    numeric_re().is_match(value)
}

/// Wrap a value in double quotes.
pub(crate) fn enclose(value: &str) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }
    format!("\"{value}\"")
}

/// Remove all double quotes from a value and trim it.
pub(crate) fn strip_quotes(value: &str) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }
    value.replace('"', "").trim().to_string()
}

/// Prefix every line of a value with a tab, trimming the result's ends.
pub(crate) fn indent(value: &str) -> String {
    let tabbed: Vec<String> = value.lines().map(|line| format!("\t{line}")).collect();
    tabbed.join("\n").trim().to_string()
}

/// Resolve an expression into safely quoted SQL text.
///
/// Classification ladder, first match wins:
/// 1. empty/whitespace input is returned trimmed, unchanged
/// 2. the `*` wildcard is returned unchanged
/// 3. numeric literals are returned unchanged
/// 4. reserved keywords render upper-cased, unquoted
/// 5. a bare word naming a virtual field becomes that field's expression
/// 6. any other bare word is qualified and quoted against the context
/// 7. a dotted path is quoted per segment
/// 8. `table.*` quotes the table part only
/// 9. everything else goes through the token scan
pub(crate) fn resolve(expression: &str, ctx: &ResolveContext<'_>) -> String {
    let value = expression.trim();
    if value.is_empty() || value == "*" || is_numeric_literal(value) {
        return value.to_string();
    }
    if keyword::is_reserved(value) {
        return value.to_ascii_uppercase();
    }
    if simple_path_re().is_match(value) {
        if !value.contains('.') {
            if let Some(expr) = ctx.virtual_fields.get(value) {
                return expr.to_string();
            }
            return format!("{}.{}", enclose(ctx.table_or_alias), enclose(value));
        }
        let segments: Vec<&str> = value.split('.').collect();
        return enclose(&segments.join("\".\""));
    }
    if table_wildcard_re().is_match(value) {
        return format!("\"{}", value.replace(".*", "\".*"));
    }
    scan(value, ctx)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Token scan for mixed expressions.
///
/// Repeatedly extracts the maximal token at the cursor (an optional `@` or
/// `:` sigil followed by either a single-quoted literal or a dotted
/// identifier chain, optionally followed by an opening parenthesis) and
/// hands it to [`render_token`]. Characters that start no token, such as
/// operators and whitespace, pass through verbatim.
fn scan(value: &str, ctx: &ResolveContext<'_>) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 16);
    let mut i = 0;
    while i < chars.len() {
        let start = i;
        let mut j = i;
        if (chars[j] == '@' || chars[j] == ':')
            && j + 1 < chars.len()
            && (chars[j + 1] == '\'' || is_word(chars[j + 1]))
        {
            j += 1;
        }
        if chars[j] == '\'' {
            // single-quoted literal: requires content and a closing quote
            if let Some(close) = chars[j + 1..].iter().position(|&c| c == '\'') {
                if close > 0 {
                    let end = j + 1 + close;
                    let token: String = chars[start..=end].iter().collect();
                    out.push_str(&render_token(&token, ctx));
                    i = end + 1;
                    continue;
                }
            }
        } else if is_word(chars[j]) {
            // dotted identifier chain: word characters with single interior dots
            let mut k = j;
            while k < chars.len() {
                if is_word(chars[k]) {
                    k += 1;
                } else if chars[k] == '.' && k + 1 < chars.len() && is_word(chars[k + 1]) {
                    k += 1;
                } else {
                    break;
                }
            }
            // optional whitespace + opening parenthesis marks a function head
            let mut p = k;
            while p < chars.len() && chars[p].is_whitespace() {
                p += 1;
            }
            let end = if p < chars.len() && chars[p] == '(' { p + 1 } else { k };
            let token: String = chars[start..end].iter().collect();
            out.push_str(&render_token(&token, ctx));
            i = end;
            continue;
        }
        out.push(chars[start]);
        i = start + 1;
    }
    out
}

/// Rendering rule for one scanned token.
///
/// Tokens carrying a parenthesis, colon, or quote (function heads,
/// placeholders, string literals) pass through untouched, as do reserved
/// keywords and `@`-sigiled bind variables. A token ending in exactly one
/// trailing non-word character keeps that suffix unresolved and resolves
/// only the prefix. Everything else re-enters [`resolve`].
fn render_token(token: &str, ctx: &ResolveContext<'_>) -> String {
    if token.contains('(')
        || token.contains(':')
        || token.contains('\'')
        || token.starts_with('@')
        || keyword::is_reserved(token)
    {
        return token.to_string();
    }
    if let Some(last) = token.chars().last() {
        if !is_word(last) {
            let split = token.len() - last.len_utf8();
            return format!("{}{}", resolve(&token[..split], ctx), last);
        }
    }
    resolve(token, ctx)
}
