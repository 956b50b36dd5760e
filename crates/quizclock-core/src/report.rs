//! Final score reporting.

use std::io::{self, Write};

use crate::model::SessionOutcome;

/// Write the final score line for a session.
pub fn write_outcome<W: Write + ?Sized>(outcome: &SessionOutcome, out: &mut W) -> io::Result<()> {
    writeln!(out, "{outcome}")?;
    out.flush()
}
