//! Interactive, line-oriented collection of subjects and their marks.
//!
//! Every reader here re-prompts until it gets a usable value; the only
//! failure is the input stream ending early.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{GradeError, Result};
use crate::stats::{Subject, is_valid_marks};

pub const INVALID_MARKS: &str = "Invalid marks! Please enter a value between 0 and 100.";
pub const INVALID_COUNT: &str =
    "Invalid number of subjects! Please enter a whole number of at least 1.";

/// Reads one line, stripped of its line terminator. `Ok(None)` on end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the read.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    expecting: &'static str,
) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;
    read_line(input)?.ok_or(GradeError::InputClosed(expecting))
}

/// Prompts for the number of subjects until a whole number of at least 1 is given.
pub fn read_subject_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    loop {
        let line = prompt(input, output, "Enter number of subjects: ", "the number of subjects")?;
        match line.trim().parse::<usize>() {
            Ok(count) if count >= 1 => return Ok(count),
            _ => {
                debug!(input = %line, "Rejected subject count");
                writeln!(output, "{INVALID_COUNT}")?;
            }
        }
    }
}

/// Prompts for a subject name until a non-empty line is given. `index` is 1-based.
///
/// A line of only spaces is a valid name.
pub fn read_subject_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    index: usize,
) -> Result<String> {
    loop {
        let message = format!("Enter name of subject {index}: ");
        let name = prompt(input, output, &message, "a subject name")?;
        if !name.is_empty() {
            return Ok(name);
        }
        debug!(index, "Rejected empty subject name");
    }
}

/// Prompts for marks until a number in `0..=100` is given.
///
/// Out-of-range and non-numeric input are rejected with the same message.
pub fn read_marks<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    loop {
        let line = prompt(input, output, "Enter marks obtained (out of 100): ", "marks")?;
        match line.trim().parse::<f64>() {
            Ok(marks) if is_valid_marks(marks) => return Ok(marks),
            _ => {
                debug!(input = %line, "Rejected marks");
                writeln!(output, "{INVALID_MARKS}")?;
            }
        }
    }
}

/// Collects the name and marks for subject number `index` (1-based).
pub fn read_subject<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    index: usize,
) -> Result<Subject> {
    writeln!(output)?;
    let name = read_subject_name(input, output, index)?;
    let marks = read_marks(input, output)?;
    Subject::new(name, marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_bytes<T>(
        input: &[u8],
        f: impl FnOnce(&mut Cursor<&[u8]>, &mut Vec<u8>) -> Result<T>,
    ) -> (Result<T>, String) {
        let mut reader = Cursor::new(input);
        let mut out = Vec::new();
        let result = f(&mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn run<T>(
        input: &str,
        f: impl FnOnce(&mut Cursor<&[u8]>, &mut Vec<u8>) -> Result<T>,
    ) -> (Result<T>, String) {
        run_bytes(input.as_bytes(), f)
    }

    #[test]
    fn test_marks_reprompt_until_in_range() {
        let (marks, out) = run("150\n-5\n75\n", |i, o| read_marks(i, o));
        assert_eq!(marks.unwrap(), 75.0);
        assert_eq!(out.matches(INVALID_MARKS).count(), 2);
        assert_eq!(out.matches("Enter marks obtained (out of 100): ").count(), 3);
    }

    #[test]
    fn test_marks_accepts_bounds() {
        assert_eq!(run("0\n", |i, o| read_marks(i, o)).0.unwrap(), 0.0);
        assert_eq!(run("100\n", |i, o| read_marks(i, o)).0.unwrap(), 100.0);
        assert_eq!(run(" 88.5 \r\n", |i, o| read_marks(i, o)).0.unwrap(), 88.5);
    }

    #[test]
    fn test_marks_rejects_malformed() {
        let (marks, out) = run("abc\n\nNaN\ninf\n100.5\n42\n", |i, o| read_marks(i, o));
        assert_eq!(marks.unwrap(), 42.0);
        assert_eq!(out.matches(INVALID_MARKS).count(), 5);
    }

    #[test]
    fn test_marks_input_closed() {
        let (marks, out) = run("200\n", |i, o| read_marks(i, o));
        assert!(matches!(marks, Err(GradeError::InputClosed("marks"))));
        assert!(out.contains(INVALID_MARKS));
    }

    #[test]
    fn test_subject_count() {
        let (count, out) = run("0\n-2\ntwo\n3\n", |i, o| read_subject_count(i, o));
        assert_eq!(count.unwrap(), 3);
        assert_eq!(out.matches(INVALID_COUNT).count(), 3);
    }

    #[test]
    fn test_empty_name_reprompts() {
        let (name, out) = run("\n\r\nPhysics\n", |i, o| read_subject_name(i, o, 2));
        assert_eq!(name.unwrap(), "Physics");
        assert_eq!(out.matches("Enter name of subject 2: ").count(), 3);
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        let (subject, _) = run("   \n75\n", |i, o| read_subject(i, o, 1));
        let subject = subject.unwrap();
        assert_eq!(subject.name(), "   ");
        assert_eq!(subject.marks(), 75.0);
    }

    #[test]
    fn test_marks_non_utf8_line_reprompts() {
        let (marks, out) = run_bytes(b"\xff\n75\n", |i, o| read_marks(i, o));
        assert_eq!(marks.unwrap(), 75.0);
        assert_eq!(out.matches(INVALID_MARKS).count(), 1);
    }

    #[test]
    fn test_name_non_utf8_line_is_accepted() {
        let (subject, _) = run_bytes(b"Fran\xe7ais\n75\n", |i, o| read_subject(i, o, 1));
        let subject = subject.unwrap();
        assert_eq!(subject.name(), "Fran\u{FFFD}ais");
        assert_eq!(subject.marks(), 75.0);
    }

    #[test]
    fn test_read_subject() {
        let (subject, out) = run("Math\n101\n95\n", |i, o| read_subject(i, o, 1));
        let subject = subject.unwrap();
        assert_eq!(subject.name(), "Math");
        assert_eq!(subject.marks(), 95.0);
        assert!(out.starts_with("\nEnter name of subject 1: "));
    }

    #[test]
    fn test_read_subject_without_marks() {
        let (subject, _) = run("Math\n", |i, o| read_subject(i, o, 1));
        assert!(matches!(subject, Err(GradeError::InputClosed("marks"))));
    }
}
