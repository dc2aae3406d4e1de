use either::Either;
use std::io::BufRead;
use std::str::FromStr;

/// A line which could not be parsed, kept around for the diagnostic.
#[derive(Debug, PartialEq)]
pub struct Rejected<E> {
    /// 1-based, counting blank lines as well
    pub line: usize,
    pub text: String,
    pub error: E,
}

/// A line which could not be read at all, most likely because it was not UTF-8.
#[derive(Debug)]
pub struct Unreadable {
    pub line: usize,
    pub error: std::io::Error,
}

/// Parses every line of the input as `T`, yielding it together with its 1-based line number.
///
/// The line buffer is reused between reads; items are trimmed before parsing. Blank lines are
/// handed to `T` like any other unless [`OnePerLine::skip_blank`] is set.
pub struct OnePerLine<I, T> {
    input: I,
    buffer: String,
    line: usize,
    skip_blank: bool,
    _type_of_t: std::marker::PhantomData<T>,
}

impl<I: BufRead, T: FromStr> OnePerLine<I, T> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            buffer: String::new(),
            line: 0,
            skip_blank: false,
            _type_of_t: Default::default(),
        }
    }

    /// Blank lines are passed over but still counted for the line numbers.
    pub fn skip_blank(mut self, skip: bool) -> Self {
        self.skip_blank = skip;
        self
    }
}

impl<I, T> Iterator for OnePerLine<I, T>
where
    I: BufRead,
    T: FromStr,
{
    type Item = Result<(usize, T), Either<Rejected<T::Err>, Unreadable>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();

            // read_line consumes the line even when it fails on invalid UTF-8
            self.line += 1;

            match self.input.read_line(&mut self.buffer) {
                Ok(0) => {
                    self.line -= 1;
                    return None;
                }
                Ok(_) => {}
                Err(error) => {
                    return Some(Err(Either::Right(Unreadable {
                        line: self.line,
                        error,
                    })))
                }
            }

            let buf = self.buffer.trim();

            if self.skip_blank && buf.is_empty() {
                continue;
            }

            return Some(match T::from_str(buf) {
                Ok(t) => Ok((self.line, t)),
                Err(error) => Err(Either::Left(Rejected {
                    line: self.line,
                    text: buf.to_owned(),
                    error,
                })),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_but_counts_them() {
        let input = b"1\n\n  \n2\r\n3";
        let parsed = OnePerLine::<_, u8>::new(&input[..])
            .skip_blank(true)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(parsed, vec![(1, 1), (4, 2), (5, 3)]);
    }

    #[test]
    fn rejected_line_keeps_number_and_text() {
        let input = b"1\n two \n3\n";
        let mut iter = OnePerLine::<_, u8>::new(&input[..]);

        assert_eq!(iter.next().unwrap().unwrap(), (1, 1));

        match iter.next().unwrap() {
            Err(Either::Left(rejected)) => {
                assert_eq!(rejected.line, 2);
                assert_eq!(rejected.text, "two");
            }
            other => panic!("unexpected: {:?}", other.map(|(line, _)| line)),
        }

        // not fused, keeps going after an error
        assert_eq!(iter.next().unwrap().unwrap(), (3, 3));
        assert!(iter.next().is_none());
    }

    #[test]
    fn blank_lines_are_parsed_by_default() {
        let input = b"1\n\n3\n";
        let mut iter = OnePerLine::<_, u8>::new(&input[..]);

        assert_eq!(iter.next().unwrap().unwrap(), (1, 1));

        match iter.next().unwrap() {
            Err(Either::Left(rejected)) => {
                assert_eq!(rejected.line, 2);
                assert_eq!(rejected.text, "");
            }
            other => panic!("unexpected: {:?}", other.map(|(line, _)| line)),
        }

        assert_eq!(iter.next().unwrap().unwrap(), (3, 3));
    }

    #[test]
    fn invalid_utf8_names_the_line() {
        let input = b"1\n\xff\xfe\n3\n";
        let mut iter = OnePerLine::<_, u8>::new(&input[..]);

        assert_eq!(iter.next().unwrap().unwrap(), (1, 1));

        match iter.next().unwrap() {
            Err(Either::Right(Unreadable { line, error })) => {
                assert_eq!(line, 2);
                assert_eq!(error.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected: {:?}", other.map(|(line, _)| line)),
        }

        assert_eq!(iter.next().unwrap().unwrap(), (3, 3));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(OnePerLine::<_, i32>::new(&b""[..]).next().is_none());
    }
}
