use crate::binary::Inspection;
use std::fmt;

/// Renders the outcome exactly as it is printed to the user: a literal
/// line for the negative outcomes, or a `PT_LOAD @0x.. v=0x.. size=..`
/// header line followed by the segment bytes in rows of 16, each byte as
/// two lowercase hex digits. Empty segments render the header line alone.
impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inspection::NotElf => f.write_str("Not ELF64"),
            Inspection::NoLoadSegment => f.write_str("No PT_LOAD"),
            Inspection::Found(seg) => {
                write!(
                    f,
                    "PT_LOAD @0x{:x} v=0x{:x} size={}",
                    seg.offset, seg.vaddr, seg.size
                )?;
                for row in seg.bytes.chunks(16) {
                    f.write_str("\n")?;
                    for (i, byte) in row.iter().enumerate() {
                        if i > 0 {
                            f.write_str(" ")?;
                        }
                        write!(f, "{byte:02x}")?;
                    }
                }
                Ok(())
            }
        }
    }
}
