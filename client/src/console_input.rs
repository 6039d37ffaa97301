use std::io::{BufRead, Write};

use common::games::n_in_a_row::{Prompt, PlayerInput};
use common::log;

pub fn prompt_text(prompt: Prompt) -> String {
    match prompt {
        Prompt::Mode => "\n1 - Two Players\n2 - Single Player vs Bot\n404 - Exit\nChoice: ".to_string(),
        Prompt::Difficulty => "Bot Difficulty (1=Easy, 2=Medium, 3=Hard): ".to_string(),
        Prompt::BoardSize => "Enter board size (3 to 19): ".to_string(),
        Prompt::Move(mark) => format!("Player {} move: ", mark.symbol()),
    }
}

/// Reads numbers line by line, printing the prompt before each attempt.
pub struct ConsoleInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> PlayerInput for ConsoleInput<R, W> {
    fn read_number(&mut self, prompt: Prompt) -> Option<i64> {
        loop {
            if let Err(e) = write!(self.writer, "{}", prompt_text(prompt))
                .and_then(|_| self.writer.flush())
            {
                log!("Failed to print prompt {:?}: {}", prompt, e);
            }

            let mut bytes = Vec::new();
            match self.reader.read_until(b'\n', &mut bytes) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    return None;
                }
            }

            let line = String::from_utf8_lossy(&bytes);
            match line.trim().parse::<i64>() {
                Ok(value) => return Some(value),
                Err(_) => log!("Ignoring non-numeric input {:?}", line.trim()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::n_in_a_row::Mark;

    #[test]
    fn test_reads_numbers_in_order() {
        let mut input = ConsoleInput::new("2\n 7 \n".as_bytes(), Vec::new());
        assert_eq!(input.read_number(Prompt::Mode), Some(2));
        assert_eq!(input.read_number(Prompt::BoardSize), Some(7));
        assert_eq!(input.read_number(Prompt::Move(Mark::X)), None);
    }

    #[test]
    fn test_non_numeric_line_is_asked_again() {
        let mut output = Vec::new();
        {
            let mut input = ConsoleInput::new("abc\n\n404\n".as_bytes(), &mut output);
            assert_eq!(input.read_number(Prompt::Move(Mark::O)), Some(404));
        }
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Player O move: ").count(), 3);
    }

    #[test]
    fn test_invalid_utf8_line_is_asked_again() {
        let mut output = Vec::new();
        {
            let mut input = ConsoleInput::new(&b"\xff\xfe\n5\n"[..], &mut output);
            assert_eq!(input.read_number(Prompt::BoardSize), Some(5));
        }
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter board size").count(), 2);
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("closed"))
        }
    }

    #[test]
    fn test_prompt_write_failure_still_reads_input() {
        let mut input = ConsoleInput::new("8\n".as_bytes(), BrokenWriter);
        assert_eq!(input.read_number(Prompt::BoardSize), Some(8));
    }

    #[test]
    fn test_negative_numbers_are_passed_through() {
        let mut input = ConsoleInput::new("-12\n".as_bytes(), Vec::new());
        assert_eq!(input.read_number(Prompt::BoardSize), Some(-12));
    }
}
