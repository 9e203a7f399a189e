use std::io::{
    BufRead,
    Write
};

use crate::error::AppError;

/// Prints `prompt` without a newline and reads one trimmed line.
/// `None` means the input is exhausted.
pub fn ask<R: BufRead, W: Write>(input: &mut R, console: &mut W, prompt: &str) -> Result<Option<String>, AppError> {
    write!(console, "{}", prompt)?;
    console.flush()?;
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_owned()))
}

/// Finite numbers only: `nan` and `inf` count as invalid input.
pub fn parse_number(name: &str, text: &str) -> Result<f64, AppError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::InvalidInput {
            name: name.to_owned(),
            input: text.to_owned(),
        }),
    }
}

pub fn ask_number<R: BufRead, W: Write>(input: &mut R, console: &mut W, prompt: &str, name: &str) -> Result<f64, AppError> {
    match ask(input, console, prompt)? {
        Some(text) => parse_number(name, &text),
        None => Err(AppError::UnexpectedEof(name.to_owned())),
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn asks_and_trims() {
        let mut input = Cursor::new("  2.5 \n");
        let mut console = Vec::new();
        let value = ask_number(&mut input, &mut console, "Enter x: ", "x").unwrap();
        assert_eq!(value, 2.5);
        assert_eq!(String::from_utf8(console).unwrap(), "Enter x: ");
    }

    #[test]
    fn rejects_garbage() {
        let mut input = Cursor::new("abc\n");
        let error = ask_number(&mut input, &mut Vec::new(), "", "step h").unwrap_err();
        assert_eq!(error.to_string(), "invalid number 'abc' for step h");
    }

    #[rstest]
    #[case("nan")]
    #[case("NaN")]
    #[case("inf")]
    #[case("-inf")]
    #[case("infinity")]
    #[case("1e400")]
    fn rejects_non_finite(#[case] text: &str) {
        let error = parse_number("x", text).unwrap_err();
        assert_eq!(error.to_string(), format!("invalid number '{}' for x", text));
    }

    #[test]
    fn end_of_input() {
        let mut input = Cursor::new("");
        assert!(ask(&mut input, &mut Vec::new(), "").unwrap().is_none());
        let error = ask_number(&mut input, &mut Vec::new(), "", "x").unwrap_err();
        assert!(matches!(error, AppError::UnexpectedEof(_)));
    }

    #[rstest]
    #[case("y", true)]
    #[case("Y", true)]
    #[case("yes", true)]
    #[case("n", false)]
    #[case("", false)]
    #[case("maybe", false)]
    fn yes_answers(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(is_yes(answer), expected);
    }
}
