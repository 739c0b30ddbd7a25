use crate::header::{Elf64Ehdr, Elf64Phdr, EHDR_LEN, ELF_MAGIC, PHDR_LEN, PT_LOAD};
use anyhow::Result;
use std::io::{Cursor, Read};

/// The first loadable segment of an ELF64 file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSegment {
    /// File offset of the segment's data.
    pub offset: u64,
    /// Virtual address the segment is mapped to.
    pub vaddr: u64,
    /// Declared size of the segment in the file (`p_filesz`).
    pub size: u64,
    /// The segment's bytes; shorter than `size` if the file is truncated.
    pub bytes: Vec<u8>,
}

/// Outcome of inspecting one file.
///
/// `NotElf` and `NoLoadSegment` are normal negative results, not errors;
/// only I/O failure while opening or reading the file is reported as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    NotElf,
    NoLoadSegment,
    Found(LoadSegment),
}

/// Reads `path` and locates its first PT_LOAD segment.
pub fn inspect<P: AsRef<std::path::Path>>(path: P) -> Result<Inspection> {
    let mut file = std::fs::File::open(&path)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(inspect_bytes(&buf))
}

/// Scans an in-memory ELF64 image for its first PT_LOAD segment.
///
/// Truncation is tolerated rather than reported: a table entry with fewer
/// than 56 bytes available ends the scan as if the table were exhausted,
/// and a segment extending past the end of the buffer yields the bytes
/// that are actually present.
pub fn inspect_bytes(data: &[u8]) -> Inspection {
    if data.len() < EHDR_LEN || data[..4] != ELF_MAGIC {
        return Inspection::NotElf;
    }
    let Ok(ehdr) = Elf64Ehdr::from_reader(&mut Cursor::new(data)) else {
        return Inspection::NotElf;
    };

    // A zero or undersized e_phentsize falls back to the fixed layout size;
    // an oversized one means each entry carries trailing padding we skip.
    let stride = (ehdr.e_phentsize as usize).max(PHDR_LEN);

    let mut pos = usize::try_from(ehdr.e_phoff).unwrap_or(usize::MAX);
    let mut found = None;
    for idx in 0..ehdr.e_phnum {
        let Some(entry) = data.get(pos..).filter(|rest| rest.len() >= PHDR_LEN) else {
            log::warn!("program header table truncated at entry {idx} of {}", ehdr.e_phnum);
            break;
        };
        let Ok(phdr) = Elf64Phdr::from_reader(&mut Cursor::new(&entry[..PHDR_LEN])) else {
            break;
        };
        if phdr.p_type == PT_LOAD {
            log::info!(
                "PT_LOAD at table index {idx}: offset {:#x}, vaddr {:#x}, filesz {}",
                phdr.p_offset,
                phdr.p_vaddr,
                phdr.p_filesz
            );
            found = Some(phdr);
            break;
        }
        let Some(next) = pos.checked_add(stride) else {
            break;
        };
        pos = next;
    }

    let Some(phdr) = found else {
        return Inspection::NoLoadSegment;
    };

    let bytes = clamped_range(data, phdr.p_offset, phdr.p_filesz).to_vec();
    if (bytes.len() as u64) < phdr.p_filesz {
        log::warn!(
            "segment data truncated: {} of {} bytes present",
            bytes.len(),
            phdr.p_filesz
        );
    }
    Inspection::Found(LoadSegment {
        offset: phdr.p_offset,
        vaddr: phdr.p_vaddr,
        size: phdr.p_filesz,
        bytes,
    })
}

/// The sub-slice `data[offset..offset + len]`, clamped to the buffer end.
fn clamped_range(data: &[u8], offset: u64, len: u64) -> &[u8] {
    let start = usize::try_from(offset).map_or(data.len(), |o| o.min(data.len()));
    let end = offset
        .checked_add(len)
        .and_then(|e| usize::try_from(e).ok())
        .map_or(data.len(), |e| e.min(data.len()));
    &data[start..end]
}
