/// Partitions a document into blank-line separated blocks.
///
/// Consecutive non-blank lines are collected and flushed, joined with `\n`
/// and trimmed, at every blank line and at end of input. A line is blank if
/// it is empty after trimming. No block is ever empty.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
        if current.is_empty() {
            return;
        }
        let block = current.join("\n").trim().to_string();
        current.clear();
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    for line in document.lines() {
        if line.trim().is_empty() {
            flush(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut blocks, &mut current);

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_heading_paragraph_and_list() {
        let markdown = "# Heading\n\nThis is a paragraph.\n\n* Bullet 1\n* Bullet 2\n* Bullet 3\n";
        assert_eq!(
            split_blocks(markdown),
            vec![
                "# Heading",
                "This is a paragraph.",
                "* Bullet 1\n* Bullet 2\n* Bullet 3",
            ]
        );
    }

    #[test]
    fn surrounding_and_repeated_blank_lines_produce_no_blocks() {
        let markdown = "\n\n  \nfirst\n\n\n\t\nsecond\n\n";
        assert_eq!(split_blocks(markdown), vec!["first", "second"]);
    }

    #[test]
    fn whitespace_only_lines_separate_blocks() {
        assert_eq!(split_blocks("one\n   \ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn block_edges_are_trimmed() {
        assert_eq!(
            split_blocks("   indented\ncontinued   "),
            vec!["indented\ncontinued"]
        );
    }

    #[test]
    fn empty_document() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n\n").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(split_blocks("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn resplitting_is_idempotent() {
        let markdown = "\n# Title\n\n\npara one\nstill para\n\n> quote\n> more\n\n```\ncode\n```\n";
        let blocks = split_blocks(markdown);
        assert!(
            blocks
                .iter()
                .all(|b| b.lines().all(|line| !line.trim().is_empty()))
        );
        assert_eq!(split_blocks(&blocks.join("\n\n")), blocks);
    }
}
