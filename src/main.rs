use rpncalc::evaluate;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "> ")?;
    out.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input == "quit" {
            break;
        }
        match evaluate(input) {
            Ok(value) => writeln!(out, "= {}", value)?,
            Err(err) => writeln!(out, "error: {}", err)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
