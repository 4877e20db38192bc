//! Line iteration with absolute byte offsets.

/// One `\n`-separated line of source text.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SourceLine<'a> {
    /// 1-based line number.
    pub number: u32,
    /// Byte offset of the first character of the line.
    pub offset: usize,
    /// Line text without the trailing `\n`.
    pub text: &'a str,
}

/// Splits `source` on `\n`, keeping each line's starting offset.
pub(crate) fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source.split('\n').enumerate().map(move |(i, text)| {
        let line = SourceLine {
            number: i as u32 + 1,
            offset,
            text,
        };
        offset += text.len() + 1;
        line
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_account_for_newlines() {
        let lines: Vec<_> = source_lines("ab\n\ncd").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!((lines[0].number, lines[0].offset, lines[0].text), (1, 0, "ab"));
        assert_eq!((lines[1].number, lines[1].offset, lines[1].text), (2, 3, ""));
        assert_eq!((lines[2].number, lines[2].offset, lines[2].text), (3, 4, "cd"));
    }
}
