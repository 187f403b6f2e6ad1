/// # A single 16 bit chip8 instruction word
/// ## nnn
/// a hexadecimal memory address, it's 12 bits long
/// ## nn
/// a hexadecimal byte, 8 bits
/// ## X and Y
/// Registers
///
/// Every field is carved out of the same word with shifts and masks, nothing
/// is stored separately. The word itself is always read big endian from ram,
/// regardless of host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction(u16);

impl Instruction {
    /// Takes the two bytes of an opcode, already combined into one word
    pub fn decode(word: u16) -> Self {
        Instruction(word)
    }

    /// The raw instruction word
    pub fn word(self) -> u16 {
        self.0
    }

    /// The top nibble, this selects the dispatch family
    pub fn kind(self) -> u8 {
        self.nibble(0)
    }

    /// The register index in the second nibble
    pub fn x(self) -> u8 {
        self.nibble(1)
    }

    /// The register index in the third nibble
    pub fn y(self) -> u8 {
        self.nibble(2)
    }

    /// A nibble is 4 bits, so this returns the lowest 4 bits of an opcode
    pub fn n(self) -> u8 {
        self.nibble(3)
    }

    /// Returns the last full byte of an opcode
    pub fn nn(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Returns the last 12 bits of an opcode, a memory address
    pub fn nnn(self) -> u16 {
        self.0 & 0xfff
    }

    fn nibble(self, nth: u8) -> u8 {
        ((self.0 >> (12 - 4 * nth)) & 0xf) as u8
    }
}
