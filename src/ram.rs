use log::debug;

use crate::constants::{MAX_ROM_SIZE, RAM_SIZE, ROM_START_ADDRESS};
use crate::error::{Fault, LoadError};

///The ram of the chip8 cpu, words are read big endian, and it is laid out
///in the following way:
///0x000 start of chip-8 ram
///0x000 to 0x050 reserved for the fontset
///0x200 start of chip-8 programs
///0xfff end of chip8 ram
///
///All accesses are range checked, an address past 0xfff comes back as a
///[`Fault`] instead of reaching the array.
#[derive(Debug, Copy, Clone)]
pub struct Ram {
    bytes: [u8; RAM_SIZE],
}

impl Ram {
    /// Returns the ram with the fontset already loaded
    pub fn with_fonts() -> Self {
        let mut ram = Self {
            bytes: [0; RAM_SIZE],
        };
        // The fontset
        // this is basically a collection of bytes that make up numbers when in binary
        // to understand them, write them out in binary and put each value below the previous one
        // here are the first bytes F0 90 90 90 f0, placing bytes below one another looks like
        //
        // 1111
        // 1  1
        // 1  1
        // 1  1
        // 1111
        //
        // The zeros are "off" and the ones are "on", this makes the glyph for zero.
        // Five bytes per glyph, sixteen glyphs, 0x0 through 0xf.
        let fontset = [
            0xF0, 0x90, 0x90, 0x90, 0xF0, //0
            0x20, 0x60, 0x20, 0x20, 0x70, //1
            0xF0, 0x10, 0xF0, 0x80, 0xF0, //2
            0xF0, 0x10, 0xF0, 0x10, 0xF0, //3
            0x90, 0x90, 0xF0, 0x10, 0x10, //4
            0xF0, 0x80, 0xF0, 0x10, 0xF0, //5
            0xF0, 0x80, 0xF0, 0x90, 0xF0, //6
            0xF0, 0x10, 0x20, 0x40, 0x40, //7
            0xF0, 0x90, 0xF0, 0x90, 0xF0, //8
            0xF0, 0x90, 0xF0, 0x10, 0xF0, //9
            0xF0, 0x90, 0xF0, 0x90, 0x90, //a
            0xE0, 0x90, 0xE0, 0x90, 0xE0, //b
            0xF0, 0x80, 0x80, 0x80, 0xF0, //c
            0xE0, 0x90, 0x90, 0x90, 0xE0, //d
            0xF0, 0x80, 0xF0, 0x80, 0xF0, //e
            0xF0, 0x80, 0xF0, 0x80, 0x80, //f
        ];
        ram.bytes[..fontset.len()].copy_from_slice(&fontset);
        ram
    }

    /// Copies the rom verbatim into ram starting at 0x200. The bytes are not
    /// swapped here, they are only interpreted as big endian words at fetch
    /// time. An odd length is fine, only fetching decides what is a word.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        if rom.len() < 2 {
            return Err(LoadError::TooSmall { size: rom.len() });
        }
        if rom.len() > MAX_ROM_SIZE {
            return Err(LoadError::TooLarge { size: rom.len() });
        }
        let start = ROM_START_ADDRESS as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        debug!("loaded {} byte rom at {ROM_START_ADDRESS:#05x}", rom.len());
        Ok(())
    }

    ///returns a single byte from ram
    pub fn get_byte(&self, address: u16) -> Result<u8, Fault> {
        match self.bytes.get(address as usize) {
            Some(byte) => Ok(*byte),
            None => Err(Fault::MemoryOutOfBounds { address }),
        }
    }

    pub fn set_byte(&mut self, address: u16, value: u8) -> Result<(), Fault> {
        match self.bytes.get_mut(address as usize) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(Fault::MemoryOutOfBounds { address }),
        }
    }

    /// Returns two consecutive bytes combined into a big endian word, the
    /// way opcodes are stored. Faults when address is past 0xffe.
    pub fn get_word(&self, address: u16) -> Result<u16, Fault> {
        let high = self.get_byte(address)?;
        let low = self.get_byte(address.wrapping_add(1))?;
        Ok(u16::from(high) << 8 | u16::from(low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fonts_are_loaded_at_the_bottom_of_ram() {
        let ram = Ram::with_fonts();
        // glyph 0 starts at 0, glyph f at 75
        assert_eq!(ram.get_byte(0), Ok(0xf0));
        assert_eq!(ram.get_byte(75), Ok(0xf0));
        assert_eq!(ram.get_byte(79), Ok(0x80));
        // everything after the fontset is zeroed
        assert_eq!(ram.get_byte(80), Ok(0x00));
    }

    #[test]
    fn words_are_read_big_endian() {
        let mut ram = Ram::with_fonts();
        ram.set_byte(0x200, 0x12).unwrap();
        ram.set_byte(0x201, 0x34).unwrap();
        assert_eq!(ram.get_word(0x200), Ok(0x1234));
    }

    #[test]
    fn accesses_past_the_end_of_ram_fault() {
        let mut ram = Ram::with_fonts();
        assert_eq!(
            ram.get_byte(0x1000),
            Err(Fault::MemoryOutOfBounds { address: 0x1000 })
        );
        assert_eq!(
            ram.set_byte(0x1000, 0xff),
            Err(Fault::MemoryOutOfBounds { address: 0x1000 })
        );
        // the second byte of the word is the one out of range
        assert_eq!(
            ram.get_word(0xfff),
            Err(Fault::MemoryOutOfBounds { address: 0x1000 })
        );
    }

    #[test]
    fn roms_are_copied_verbatim_at_0x200() {
        let mut ram = Ram::with_fonts();
        ram.load_rom(&[0x00, 0xe0, 0x12, 0x00]).unwrap();
        assert_eq!(ram.get_byte(0x200), Ok(0x00));
        assert_eq!(ram.get_byte(0x201), Ok(0xe0));
        assert_eq!(ram.get_word(0x202), Ok(0x1200));
    }

    #[test]
    fn undersized_and_oversized_roms_are_rejected() {
        let mut ram = Ram::with_fonts();
        assert_eq!(ram.load_rom(&[0x00]), Err(LoadError::TooSmall { size: 1 }));
        let huge = [0u8; MAX_ROM_SIZE + 1];
        assert_eq!(
            ram.load_rom(&huge),
            Err(LoadError::TooLarge { size: MAX_ROM_SIZE + 1 })
        );
        // a rom that exactly fills ram is fine
        let full = [0u8; MAX_ROM_SIZE];
        assert!(ram.load_rom(&full).is_ok());
    }
}
