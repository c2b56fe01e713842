use std::io::{self, Write};

use crate::properties::PropertyTable;

/// Writes the listing block: a header line followed by one `key=value` line
/// per entry, in table order.
pub fn write_listing<W: Write>(out: &mut W, table: &PropertyTable) -> io::Result<()> {
    writeln!(out, "-- listing properties --")?;
    for (key, value) in table.iter() {
        writeln!(out, "{}={}", key, value)?;
    }
    Ok(())
}

/// Writes the whole table on one line as `{key1=value1, key2=value2}`.
pub fn write_dump<W: Write>(out: &mut W, table: &PropertyTable) -> io::Result<()> {
    out.write_all(b"{")?;
    for (pos, (key, value)) in table.iter().enumerate() {
        if pos > 0 {
            out.write_all(b", ")?;
        }
        write!(out, "{}={}", key, value)?;
    }
    out.write_all(b"}\n")
}
