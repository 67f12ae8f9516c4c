use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::data_source::ProduceOne;

const DEFAULT_PROMPT: &str = "Enter a number";
const END: &str = "end";

/// Reads numbers interactively, one whitespace-delimited token per prompt,
/// until the user types `end` or the input runs out.
pub struct Console<R, W> {
    prompt: String,
    input: R,
    output: W,
    pending: VecDeque<Vec<u8>>,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio(prompt: String) -> Self {
        Console::new(prompt, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// An empty `prompt` selects the default one.
    pub fn new(prompt: String, input: R, output: W) -> Self {
        Console {
            prompt,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        let prompt = if self.prompt.is_empty() {
            DEFAULT_PROMPT
        } else {
            self.prompt.as_str()
        };
        write!(self.output, "{} [type '{}' without quotes to end]: ", prompt, END)?;
        self.output.flush()
    }

    /// Next token from the input, `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<Vec<u8>>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
    }

    fn try_produce_one(&mut self) -> io::Result<Option<f64>> {
        loop {
            self.write_prompt()?;
            let Some(word) = self.next_token()? else {
                log::debug!("End of console input");
                return Ok(None);
            };
            if word == END.as_bytes() {
                return Ok(None);
            }
            if let Some(value) = parse_number(&word) {
                return Ok(Some(value));
            }
            writeln!(self.output, "Format error; last input ignored")?;
        }
    }
}

/// Decimal, exponent, `inf` and `nan` forms are accepted. Hex floats such as
/// `0x1p3` are not, and neither is anything with trailing characters.
fn parse_number(word: &[u8]) -> Option<f64> {
    let word = match std::str::from_utf8(word) {
        Ok(word) => word,
        Err(err) => {
            log::debug!("Rejected {:?}: {}", String::from_utf8_lossy(word), err);
            return None;
        }
    };
    word.parse::<f64>()
        .map_err(|err| log::debug!("Rejected {:?}: {}", word, err))
        .ok()
}

impl<R: BufRead, W: Write> ProduceOne for Console<R, W> {
    fn produce_one(&mut self) -> Option<f64> {
        self.try_produce_one().unwrap_or_else(|err| {
            log::warn!("Console I/O failed, ending input: {}", err);
            None
        })
    }
}
