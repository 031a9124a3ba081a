use std::io::{self, Write};

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Parse a 1-based menu choice into a 0-based index.
///
/// Out-of-range values (including 0) wrap to an index no collection will
/// contain, so callers can feed the result straight into `get`.
pub fn parse_choice(arg: Option<&str>) -> Option<usize> {
    arg?.parse::<usize>().ok().map(|n| n.wrapping_sub(1))
}
