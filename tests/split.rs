use indoc::indoc;
use pretty_assertions::assert_eq;

use linegroups::grouped_lines;
use linegroups::grouped_lines_by;
use linegroups::join_groups;
use linegroups::non_empty_lines;
use linegroups::non_empty_lines_by;
use linegroups::LineGroups;
use linegroups::Lines;
use linegroups::LinesExt;
use linegroups::Separator;

/// Inputs with a little of everything: blank runs, CRLF, leading and trailing separators.
const INPUTS: &[&str] = &[
    "",
    "\n",
    "\r\n",
    "a",
    "a\nb\n\n\nc\n",
    "a\nb\nc\n\nx\ny\nz\n",
    "\n\n\nleading\nblank\nlines",
    "trailing\nblank\nlines\n\n\n\n",
    "crlf\r\nline\r\n\r\nendings\r\n",
    "mixed\n\r\nendings\r\n\nhere",
    "  spaces  \n\t\n",
    "carriage\rreturn",
];

#[test]
fn splits_documented_examples() {
    assert_eq!(non_empty_lines("a\nb\n\n\nc\n"), vec!["a", "b", "c"]);
    assert_eq!(
        grouped_lines("a\nb\nc\n\nx\ny\nz\n"),
        vec![vec!["a", "b", "c"], vec!["x", "y", "z"]]
    );
    assert_eq!(non_empty_lines(""), Lines::new());
    assert_eq!(grouped_lines(""), vec![Lines::new()]);
}

#[test]
fn lines_without_separators_are_kept_whole() {
    for input in ["a", "puppy dog", "  ", "\r", "tab\tseparated", "ünïcödé"] {
        assert_eq!(non_empty_lines(input), vec![input]);
    }
}

#[test]
fn lines_are_non_empty_and_in_order() {
    let separators = [
        Separator::newline(),
        Separator::blank_line(),
        Separator::literal("\n"),
        Separator::literal(""),
        Separator::pattern(r"\s+").unwrap(),
    ];
    for separator in &separators {
        for input in INPUTS {
            let lines = non_empty_lines_by(input, separator);
            assert!(
                lines.iter().all(|line| !line.is_empty()),
                "Empty line splitting {input:?} on {separator}"
            );

            // Each line occurs in the input after the previous one.
            let mut rest = *input;
            for line in &lines {
                let index = rest
                    .find(line.as_str())
                    .unwrap_or_else(|| panic!("{line:?} out of order in {input:?}"));
                rest = &rest[index + line.len()..];
            }
        }
    }
}

#[test]
fn crlf_splits_like_lf() {
    for input in INPUTS {
        let lf = input.replace("\r\n", "\n");
        assert_eq!(non_empty_lines(input), non_empty_lines(&lf), "{input:?}");
        assert_eq!(grouped_lines(input), grouped_lines(&lf), "{input:?}");
    }
}

#[test]
fn groups_match_segments() {
    let separators = [
        Separator::blank_line(),
        Separator::literal("---"),
        Separator::pattern(r"\n{3,}").unwrap(),
    ];
    for separator in &separators {
        for input in INPUTS {
            let groups = grouped_lines_by(input, separator);
            let segments = separator.split(input);
            assert_eq!(groups.len(), segments.len(), "{input:?} on {separator}");
            for (group, segment) in groups.iter().zip(segments) {
                assert_eq!(group, &non_empty_lines(segment));
            }
        }
    }
}

#[test]
fn groups_round_trip() {
    for input in INPUTS {
        let groups: LineGroups = grouped_lines(input)
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect();
        if groups.is_empty() {
            // Nothing to join; `""` splits into one empty group.
            continue;
        }
        let joined = join_groups(&groups);
        assert_eq!(grouped_lines(&joined), groups, "{input:?}");
        assert_eq!(join_groups(&grouped_lines(&joined)), joined, "{input:?}");
    }
}

#[test]
fn splits_paragraphs() {
    let text = indoc! {"
        It was the best of times,
        it was the worst of times.


        It was the age of wisdom,
        it was the age of foolishness.
    "};
    assert_eq!(
        text.grouped_lines(),
        vec![
            vec!["It was the best of times,", "it was the worst of times."],
            vec!["It was the age of wisdom,", "it was the age of foolishness."],
        ]
    );
    assert_eq!(text.non_empty_lines().len(), 4);
}

#[test]
fn splits_on_threads() {
    let handles: Vec<_> = INPUTS
        .iter()
        .map(|input| std::thread::spawn(move || grouped_lines(input)))
        .collect();
    for (handle, input) in handles.into_iter().zip(INPUTS) {
        assert_eq!(handle.join().unwrap(), grouped_lines(input));
    }
}
