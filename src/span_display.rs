use std::fmt::Write;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Renders a line of text with labelled underlines beneath matched spans.
///
/// ```text
/// Trade with Chinese and Malaysian firms
///            ╰─────╯China
///                        ╰───────╯Malaysia
/// ```
///
/// Spans are byte ranges into the text. Columns are computed with display
/// width, so wide characters line up with their underline.
pub struct SpanDisplay<'a> {
    text: &'a str,
    spans: Vec<(Range<usize>, String)>,
}

impl<'a> SpanDisplay<'a> {
    pub fn new(text: &'a str) -> Self {
        SpanDisplay {
            text,
            spans: Vec::new(),
        }
    }

    /// Adds a labelled span. Ranges outside the text or off a char boundary
    /// are ignored.
    pub fn include(&mut self, range: Range<usize>, label: impl Into<String>) -> &mut Self {
        if range.start <= range.end
            && range.end <= self.text.len()
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end)
        {
            self.spans.push((range, label.into()));
        }
        self
    }

    fn column(&self, byte_idx: usize) -> usize {
        UnicodeWidthStr::width(&self.text[..byte_idx])
    }
}

impl<'a> std::fmt::Display for SpanDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)?;

        let mut ordered: Vec<&(Range<usize>, String)> = self.spans.iter().collect();
        ordered.sort_by_key(|(range, _)| (range.start, range.end));

        for (range, label) in ordered {
            f.write_char('\n')?;

            let start_col = self.column(range.start);
            let end_col = self.column(range.end);
            for _ in 0..start_col {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end_col - start_col > 1 {
                f.write_char('╯')?;
            }

            f.write_str(label)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underlines_spans_in_order() {
        let text = "Trade with Chinese and Malaysian firms";
        let mut display = SpanDisplay::new(text);
        display.include(23..32, "Malaysia").include(11..18, "China");

        insta::assert_snapshot!(display.to_string(), @r###"
        Trade with Chinese and Malaysian firms
                   ╰─────╯China
                               ╰───────╯Malaysia
        "###);
    }

    #[test]
    fn single_column_span() {
        let mut display = SpanDisplay::new("a b");
        display.include(2..3, "B");

        insta::assert_snapshot!(display.to_string(), @r###"
        a b
          ╰B
        "###);
    }

    #[test]
    fn ignores_invalid_ranges() {
        let mut display = SpanDisplay::new("abc");
        display.include(2..10, "X");
        assert_eq!(display.to_string(), "abc");
    }
}
