use byteorder::{ReadBytesExt, LE};
use std::io;

/// The four identification bytes every ELF file starts with.
pub const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// On-disk size of an `Elf64Ehdr`.
pub const EHDR_LEN: usize = 64;

/// On-disk size of an `Elf64Phdr`.
pub const PHDR_LEN: usize = 56;

/// Program header type for a loadable segment.
pub const PT_LOAD: u32 = 1;

/// Represents the ELF (Executable and Linkable Format) header for a 64-bit object file.
///
/// This structure corresponds to the standard `Elf64_Ehdr` defined in the ELF specification.
/// It appears at the very beginning of every ELF file and contains metadata describing
/// the file's organization and layout.
///
/// Reference: [ELF Specification v1.2](https://refspecs.linuxfoundation.org/elf/elf.pdf)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Elf64Ehdr {
    /// ELF identification bytes (magic number and other information).
    ///
    /// The first 4 bytes should be `0x7F`, `'E'`, `'L'`, `'F'`.
    /// Remaining bytes encode class (32/64-bit), endianness, and version.
    pub e_ident: [u8; 16],

    /// Object file type (relocatable, executable, shared, core).
    pub e_type: u16,

    /// Target architecture (e.g. `EM_X86_64` = 62).
    pub e_machine: u16,

    /// ELF version (usually `EV_CURRENT` = 1).
    pub e_version: u32,

    /// Virtual address of the program entry point.
    pub e_entry: u64,

    /// File offset of the program header table.
    ///
    /// Points to an array of `Elf64Phdr` entries.
    pub e_phoff: u64,

    /// File offset of the section header table.
    pub e_shoff: u64,

    /// Processor-specific flags.
    pub e_flags: u32,

    /// Size of this ELF header (usually `64` bytes for ELF64).
    pub e_ehsize: u16,

    /// Size of one entry in the program header table.
    pub e_phentsize: u16,

    /// Number of entries in the program header table.
    pub e_phnum: u16,

    /// Size of one entry in the section header table.
    pub e_shentsize: u16,

    /// Number of entries in the section header table.
    pub e_shnum: u16,

    /// Index of the section header string table.
    pub e_shstrndx: u16,
}

impl Elf64Ehdr {
    pub fn from_reader<R: io::Read>(cur: &mut R) -> anyhow::Result<Elf64Ehdr> {
        let mut e_ident = [0u8; 16];
        cur.read_exact(&mut e_ident)?;

        Ok(Elf64Ehdr {
            e_ident,
            e_type: cur.read_u16::<LE>()?,
            e_machine: cur.read_u16::<LE>()?,
            e_version: cur.read_u32::<LE>()?,
            e_entry: cur.read_u64::<LE>()?,
            e_phoff: cur.read_u64::<LE>()?,
            e_shoff: cur.read_u64::<LE>()?,
            e_flags: cur.read_u32::<LE>()?,
            e_ehsize: cur.read_u16::<LE>()?,
            e_phentsize: cur.read_u16::<LE>()?,
            e_phnum: cur.read_u16::<LE>()?,
            e_shentsize: cur.read_u16::<LE>()?,
            e_shnum: cur.read_u16::<LE>()?,
            e_shstrndx: cur.read_u16::<LE>()?,
        })
    }
}

/// One entry of the program header table (`Elf64_Phdr`).
///
/// Each entry describes one segment of the file: what it contains,
/// where its bytes live in the file, and where it is mapped at load time.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Elf64Phdr {
    /// Segment type (`PT_LOAD` = 1 marks a loadable segment).
    pub p_type: u32,

    /// Segment permission flags (read/write/execute).
    pub p_flags: u32,

    /// Byte offset of the segment's data within the file.
    pub p_offset: u64,

    /// Virtual address the segment is mapped to at load time.
    pub p_vaddr: u64,

    /// Physical address (unused on most platforms).
    pub p_paddr: u64,

    /// Size in bytes of the segment's data within the file.
    pub p_filesz: u64,

    /// Size in bytes of the segment in memory (may exceed `p_filesz`).
    pub p_memsz: u64,

    /// Required alignment of the segment.
    pub p_align: u64,
}

impl Elf64Phdr {
    pub fn from_reader<R: io::Read>(cur: &mut R) -> anyhow::Result<Elf64Phdr> {
        Ok(Elf64Phdr {
            p_type: cur.read_u32::<LE>()?,
            p_flags: cur.read_u32::<LE>()?,
            p_offset: cur.read_u64::<LE>()?,
            p_vaddr: cur.read_u64::<LE>()?,
            p_paddr: cur.read_u64::<LE>()?,
            p_filesz: cur.read_u64::<LE>()?,
            p_memsz: cur.read_u64::<LE>()?,
            p_align: cur.read_u64::<LE>()?,
        })
    }
}
