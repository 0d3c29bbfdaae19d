//! Engines command implementation
//!
//! Lists the engine names accepted by `--engine`.

use std::io::Write;

use numrand_core::EngineKind;

use crate::Result;

/// Run the engines command
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    for kind in EngineKind::ALL {
        if kind == EngineKind::default() {
            writeln!(out, "{} (default)", kind)?;
        } else {
            writeln!(out, "{}", kind)?;
        }
    }
    out.flush()?;
    Ok(())
}
