//! SML (SECS Message Language) rendering.
//!
//! Items render on one line as `<TAG [count] elements>`, with the element
//! part omitted for empty items. Lists open with `<L [count]`, put each
//! element on its own line one indentation level deeper, and close with `>`
//! at their own level:
//!
//! ```text
//! <L [2]
//!     <U1 [2] 1 2>
//!     <A [5] "hello">
//! >
//! ```

use std::fmt::{self, Write};

use crate::model::{FormatType, Item, Value};

/// Renders a value to an SML string.
pub fn to_sml(value: &Value, indent_width: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_sml(&mut out, value, 0, indent_width);
    out
}

/// Writes the SML form of a value at the given indentation level.
///
/// Lists are walked with an explicit stack, so any tree that encodes can
/// also be rendered. Output grows with depth times indent width per line.
pub fn write_sml<W: Write>(
    out: &mut W,
    value: &Value,
    level: usize,
    indent_width: usize,
) -> fmt::Result {
    let list = match value {
        Value::Item(item) => return write_item(out, item, level, indent_width),
        Value::List(list) => list,
    };
    write_list_header(out, list.len(), level, indent_width)?;
    let mut pending = vec![list.iter()];

    loop {
        // Elements of the innermost open list sit one level below it.
        let depth = level + pending.len();
        let Some(elements) = pending.last_mut() else {
            return Ok(());
        };
        match elements.next() {
            Some(Value::Item(item)) => {
                write_item(out, item, depth, indent_width)?;
                out.write_char('\n')?;
            }
            Some(Value::List(list)) => {
                write_list_header(out, list.len(), depth, indent_width)?;
                pending.push(list.iter());
            }
            None => {
                pending.pop();
                write_indent(out, depth - 1, indent_width)?;
                out.write_char('>')?;
                if !pending.is_empty() {
                    out.write_char('\n')?;
                }
            }
        }
    }
}

/// Writes a single item on one line, without a trailing newline.
pub fn write_item<W: Write>(
    out: &mut W,
    item: &Item,
    level: usize,
    indent_width: usize,
) -> fmt::Result {
    write_indent(out, level, indent_width)?;
    write!(out, "<{} [{}]", item.format_type().sml_tag(), item.len())?;
    if !item.is_empty() {
        out.write_char(' ')?;
        match item {
            Item::Ascii(bytes) => write!(out, "\"{}\"", String::from_utf8_lossy(bytes))?,
            Item::Binary(vals) => write_joined(out, vals, |out, v| write!(out, "0x{:02X}", v))?,
            Item::Boolean(vals) => write_joined(out, vals, |out, v| write!(out, "{}", v))?,
            Item::I1(vals) => write_numbers(out, vals)?,
            Item::I2(vals) => write_numbers(out, vals)?,
            Item::I4(vals) => write_numbers(out, vals)?,
            Item::I8(vals) => write_numbers(out, vals)?,
            Item::U1(vals) => write_numbers(out, vals)?,
            Item::U2(vals) => write_numbers(out, vals)?,
            Item::U4(vals) => write_numbers(out, vals)?,
            Item::U8(vals) => write_numbers(out, vals)?,
            Item::F4(vals) => write_numbers(out, vals)?,
            Item::F8(vals) => write_numbers(out, vals)?,
        }
    }
    out.write_char('>')
}

fn write_list_header<W: Write>(
    out: &mut W,
    len: usize,
    level: usize,
    indent_width: usize,
) -> fmt::Result {
    write_indent(out, level, indent_width)?;
    writeln!(out, "<{} [{}]", FormatType::List.sml_tag(), len)
}

fn write_indent<W: Write>(out: &mut W, level: usize, indent_width: usize) -> fmt::Result {
    write!(out, "{:width$}", "", width = level * indent_width)
}

fn write_numbers<W: Write, T: fmt::Display>(out: &mut W, vals: &[T]) -> fmt::Result {
    write_joined(out, vals, |out, v| write!(out, "{}", v))
}

/// Writes space-separated elements.
fn write_joined<W, T, F>(out: &mut W, vals: &[T], mut write_one: F) -> fmt::Result
where
    W: Write,
    F: FnMut(&mut W, &T) -> fmt::Result,
{
    for (i, val) in vals.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write_one(out, val)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sml(value: impl Into<Value>) -> String {
        to_sml(&value.into(), 4)
    }

    #[test]
    fn test_items() {
        assert_eq!(sml(Item::I1(vec![])), "<I1 [0]>");
        assert_eq!(sml(Item::Binary(vec![1, 0xAB])), "<B [2] 0x01 0xAB>");
        assert_eq!(sml(Item::Boolean(vec![true, false])), "<Boolean [2] true false>");
        assert_eq!(sml(Item::ascii("hello")), "<A [5] \"hello\">");
        assert_eq!(sml(Item::ascii("")), "<A [0]>");
        assert_eq!(sml(Item::I4(vec![-1, 2])), "<I4 [2] -1 2>");
        assert_eq!(sml(Item::F4(vec![1.5, 2.0])), "<F4 [2] 1.5 2>");
        assert_eq!(sml(Item::U8(vec![u64::MAX])), "<U8 [1] 18446744073709551615>");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(sml(Value::List(vec![])), "<L [0]\n>");
    }

    #[test]
    fn test_nested_list() {
        let nums: Value = Item::I1(vec![]).into();
        let bins: Value = Item::Binary(vec![1, 2]).into();
        let mut list = vec![nums, bins];
        assert_eq!(
            sml(Value::List(list.clone())),
            "<L [2]\n    <I1 [0]>\n    <B [2] 0x01 0x02>\n>"
        );

        list.push(Value::List(list.clone()));
        list.push(Item::ascii("hello").into());
        let expected = r#"<L [4]
    <I1 [0]>
    <B [2] 0x01 0x02>
    <L [2]
        <I1 [0]>
        <B [2] 0x01 0x02>
    >
    <A [5] "hello">
>"#;
        assert_eq!(sml(Value::List(list)), expected);
    }

    #[test]
    fn test_level_offsets_whole_tree() {
        let value = Value::List(vec![Value::List(vec![]), Item::U1(vec![1]).into()]);
        let mut out = String::new();
        write_sml(&mut out, &value, 1, 2).unwrap();
        assert_eq!(out, "  <L [2]\n    <L [0]\n    >\n    <U1 [1] 1>\n  >");
    }

    #[test]
    fn test_deep_tree_does_not_overflow_stack() {
        let depth = 100_000;
        let mut value = Value::List(vec![]);
        for _ in 1..depth {
            value = Value::List(vec![value]);
        }

        let out = to_sml(&value, 0);
        // Every list writes "<L [n]\n" and ">"; all closings but the root's add "\n".
        assert_eq!(out.len(), depth * "<L [1]\n>\n".len() - 1);
        assert!(out.starts_with("<L [1]\n<L [1]\n"));
        assert!(out.ends_with("<L [0]\n>\n>\n>"));

        // Unwind iteratively; the derived Drop would recurse.
        let mut current = Some(value);
        while let Some(Value::List(mut list)) = current.take() {
            current = list.pop();
        }
    }

    #[test]
    fn test_indent_width() {
        let value = Value::List(vec![Item::U1(vec![1]).into()]);
        assert_eq!(to_sml(&value, 2), "<L [1]\n  <U1 [1] 1>\n>");
        assert_eq!(to_sml(&value, 0), "<L [1]\n<U1 [1] 1>\n>");
    }
}
