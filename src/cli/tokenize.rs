use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
    #[error("dangling escape at end of line")]
    DanglingEscape,
}

/// Splits a session line into arguments the way a POSIX shell would for the
/// simple cases: whitespace separates, single quotes are literal, double
/// quotes allow `\"` and `\\`, and a backslash outside quotes escapes the
/// next character. `""` yields an empty argument.
pub fn split_line(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            '\'' => {
                in_arg = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_arg = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err(TokenizeError::UnterminatedQuote('"')),
                        },
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('"')),
                    }
                }
            }
            '\\' => {
                in_arg = true;
                match chars.next() {
                    Some(c) => current.push(c),
                    None => return Err(TokenizeError::DanglingEscape),
                }
            }
            c => {
                in_arg = true;
                current.push(c);
            }
        }
    }
    if in_arg {
        args.push(current);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Vec<String> {
        split_line(line).unwrap()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split("  students   list "), vec!["students", "list"]);
        assert!(split("   ").is_empty());
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split(r#"students add --name "Ada Lovelace" --year '2nd Year'"#),
            vec!["students", "add", "--name", "Ada Lovelace", "--year", "2nd Year"]
        );
    }

    #[test]
    fn adjacent_quoted_parts_join() {
        assert_eq!(split(r#"--title=Room" "101"#), vec!["--title=Room 101"]);
    }

    #[test]
    fn empty_quotes_make_empty_argument() {
        assert_eq!(split(r#"--name """#), vec!["--name", ""]);
        assert_eq!(split("--name ''"), vec!["--name", ""]);
    }

    #[test]
    fn escapes() {
        assert_eq!(split(r#""say \"hi\"""#), vec![r#"say "hi""#]);
        assert_eq!(split(r"Room\ 101"), vec!["Room 101"]);
        assert_eq!(split(r#""C:\path""#), vec![r"C:\path"]);
    }

    #[test]
    fn unbalanced_input_is_an_error() {
        assert_eq!(
            split_line("--name 'Ada"),
            Err(TokenizeError::UnterminatedQuote('\''))
        );
        assert_eq!(
            split_line("--name \"Ada"),
            Err(TokenizeError::UnterminatedQuote('"'))
        );
        assert_eq!(split_line("trailing\\"), Err(TokenizeError::DanglingEscape));
    }
}
