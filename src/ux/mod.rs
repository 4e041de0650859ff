use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Print `label`, flush, and read one trimmed line. `None` means the input
/// stream is closed.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Keep asking until the human supplies a value; with `allow_empty` any
/// line (including an empty one) is accepted as-is.
pub fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    allow_empty: bool,
) -> io::Result<String> {
    loop {
        match read_line(input, out, label)? {
            None => {
                if allow_empty {
                    return Ok(String::new());
                }
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed"));
            }
            Some(value) => {
                if !value.is_empty() || allow_empty {
                    return Ok(value);
                }
                writeln!(out, "Please enter a value.")?;
            }
        }
    }
}

/// Numbered option listing, 1-based to match the selection prompt.
pub fn render_options<W: Write>(out: &mut W, options: &[String]) -> io::Result<()> {
    for (idx, option) in options.iter().enumerate() {
        writeln!(out, "{}. {}", (idx + 1).to_string().bold(), option)?;
    }
    Ok(())
}

/// Spinner shown on stderr while a gateway call is in flight. `None` when
/// progress display is off.
pub fn gateway_spinner(enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("waiting on the model...");
    pb.enable_steady_tick(Duration::from_millis(120));
    Some(pb)
}
