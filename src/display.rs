//! Console rendering of a sequence: every value followed by a space, then a
//! line break.

use std::io::{self, Write};

pub fn write_values<W: Write>(out: &mut W, data: &[i32]) -> io::Result<()> {
    for value in data {
        write!(out, "{value} ")?;
    }
    writeln!(out)
}

/// Renders `data` the same way [`write_values`] does, into a `String`.
pub fn render_values(data: &[i32]) -> io::Result<String> {
    let mut buf = Vec::with_capacity(data.len() * 4 + 1);
    write_values(&mut buf, data)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
