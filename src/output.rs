use std::io::Write;

/// Write the single blank line the program emits. The line terminator is
/// always `\n`, independent of platform.
pub fn write_blank_line<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)
}
